// Serpentine board geometry. Rects are laid out row-major from the top-left;
// labels and connector anchors snake left/right per row with cell 1 at the bottom-left.

use crate::config::BoardConfig;
use crate::model::Cell;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Top-left corner of the cell's rectangle (plain row-major placement).
pub fn rect_origin(cfg: &BoardConfig, cell: Cell) -> Point {
    Point {
        x: cell.col(cfg.cells_in_row) as f64 * cfg.cell_width,
        y: cell.row(cfg.cells_in_row) as f64 * cfg.cell_width,
    }
}

pub fn anchor_x(cfg: &BoardConfig, cell: Cell) -> f64 {
    let pos = cell.col(cfg.cells_in_row) as f64 * cfg.cell_width + cfg.cell_width / 2.0;
    if cell.row(cfg.cells_in_row) % 2 == 0 {
        pos
    } else {
        cfg.board_width() - pos
    }
}

pub fn anchor_y(cfg: &BoardConfig, cell: Cell) -> f64 {
    let row = cell.row(cfg.cells_in_row) as f64;
    let w = cfg.cell_width;
    cfg.board_width() - row * w + (2.0 * w / 3.0) - w
}

/// Where a cell's label sits and where connectors attach.
pub fn anchor(cfg: &BoardConfig, cell: Cell) -> Point {
    Point {
        x: anchor_x(cfg, cell),
        y: anchor_y(cfg, cell),
    }
}

/// Anchor for a 1-based board number.
pub fn endpoint(cfg: &BoardConfig, number: i64) -> Point {
    anchor(cfg, Cell::from_number(number))
}
