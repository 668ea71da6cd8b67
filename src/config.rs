use crate::engine;
use crate::error::BoardError;
use crate::model::BoardData;

/// Fixed board dimensions plus where board data is fetched from.
#[derive(Clone, Debug, PartialEq)]
pub struct BoardConfig {
    pub cells_count: u32,
    pub cells_in_row: u32,
    /// Side length of a square cell in SVG user units.
    pub cell_width: f64,
    pub api_base: String,
    /// Connectors written on the host element, shown on `/boards/sample`.
    pub inline_board: Option<BoardData>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            cells_count: 100,
            cells_in_row: 10,
            cell_width: 40.0,
            api_base: "/api".to_string(),
            inline_board: None,
        }
    }
}

impl BoardConfig {
    pub fn board_width(&self) -> f64 {
        self.cells_in_row as f64 * self.cell_width
    }

    pub fn rows(&self) -> u32 {
        self.cells_count / self.cells_in_row
    }

    pub fn label_font_size(&self) -> f64 {
        self.cell_width / 2.0
    }

    pub fn validate(&self) -> Result<(), BoardError> {
        if self.cells_count == 0 || self.cells_in_row == 0 {
            return Err(BoardError::Config(format!(
                "cells_count ({}) and cells_in_row ({}) must be non-zero",
                self.cells_count, self.cells_in_row
            )));
        }
        if self.cells_count % self.cells_in_row != 0 {
            return Err(BoardError::Config(format!(
                "cells_count ({}) is not divisible by cells_in_row ({})",
                self.cells_count, self.cells_in_row
            )));
        }
        if !(self.cell_width.is_finite() && self.cell_width > 0.0) {
            return Err(BoardError::Config(format!(
                "cell_width ({}) must be positive",
                self.cell_width
            )));
        }
        Ok(())
    }

    /// Applies `data-*` overrides read through `attr` on top of the defaults.
    pub fn from_attributes<F>(attr: F) -> Result<Self, BoardError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();
        if let Some(v) = attr("data-cells-count") {
            cfg.cells_count = parse_attr("data-cells-count", v)?;
        }
        if let Some(v) = attr("data-cells-in-row") {
            cfg.cells_in_row = parse_attr("data-cells-in-row", v)?;
        }
        if let Some(v) = attr("data-cell-width") {
            cfg.cell_width = parse_attr("data-cell-width", v)?;
        }
        if let Some(v) = attr("data-api-base") {
            cfg.api_base = v.trim_end_matches('/').to_string();
        }
        cfg.inline_board = engine::inline_board(&attr)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Reads overrides from the host element, falling back to the defaults on any error.
    pub fn from_element(el: &web_sys::Element) -> Self {
        match Self::from_attributes(|name| el.get_attribute(name)) {
            Ok(cfg) => cfg,
            Err(e) => {
                log::warn!("{}; using default board config", e);
                Self::default()
            }
        }
    }
}

fn parse_attr<T: std::str::FromStr>(name: &'static str, value: String) -> Result<T, BoardError> {
    value
        .trim()
        .parse()
        .map_err(|_| BoardError::Attribute { name, value })
}
