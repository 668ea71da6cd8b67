//! Board renderer: turns a config and a connector list into an ordered scene
//! of SVG primitives. Rects first, then labels, then connector lines on top.

use crate::config::BoardConfig;
use crate::geometry::{self, Point};
use crate::model::{Cell, Connector, ConnectorKind};

pub const CELL_FILL: &str = "crimson";
pub const CELL_STROKE: &str = "black";
pub const CELL_STROKE_WIDTH: f64 = 3.0;
pub const CELL_OPACITY: f64 = 0.5;
pub const LABEL_FILL: &str = "black";
pub const CONNECTOR_STROKE_WIDTH: f64 = 4.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineStyle {
    pub stroke: &'static str,
    /// `None` draws a solid line.
    pub dash: Option<&'static str>,
}

pub fn line_style(kind: ConnectorKind) -> LineStyle {
    match kind {
        ConnectorKind::Ladder => LineStyle { stroke: "#2ea043", dash: None },
        ConnectorKind::Snake => LineStyle { stroke: "#8b0000", dash: Some("6,4") },
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CellRect {
    pub origin: Point,
    pub size: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Label {
    pub at: Point,
    pub text: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
    pub kind: ConnectorKind,
}

/// Everything one drawing of the board consists of, in paint order.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    pub width: f64,
    pub height: f64,
    pub font_size: f64,
    pub rects: Vec<CellRect>,
    pub labels: Vec<Label>,
    pub lines: Vec<Segment>,
}

pub fn render(cfg: &BoardConfig, connectors: &[Connector]) -> Scene {
    let cells = (0..cfg.cells_count as i64).map(Cell);
    let rects = cells
        .clone()
        .map(|c| CellRect {
            origin: geometry::rect_origin(cfg, c),
            size: cfg.cell_width,
        })
        .collect();
    let labels = cells
        .map(|c| Label {
            at: geometry::anchor(cfg, c),
            text: c.display_number().to_string(),
        })
        .collect();
    // endpoints are not range-checked; bad numbers land off the board
    let lines = connectors
        .iter()
        .map(|c| Segment {
            from: geometry::endpoint(cfg, c.src),
            to: geometry::endpoint(cfg, c.dst),
            kind: c.kind,
        })
        .collect();
    let width = cfg.board_width();
    Scene {
        width,
        height: width,
        font_size: cfg.label_font_size(),
        rects,
        labels,
        lines,
    }
}
