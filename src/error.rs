//! Error types for loading and drawing a board.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BoardError {
    /// Board dimensions that cannot form a rectangular grid.
    #[error("invalid board config: {0}")]
    Config(String),

    /// A `data-*` override on the host element that does not parse.
    #[error("invalid attribute {name}={value:?}")]
    Attribute { name: &'static str, value: String },

    /// The browser rejected the request or the body could not be read.
    #[error("fetch failed: {0}")]
    Fetch(String),

    #[error("unexpected HTTP status {0}")]
    Status(u16),

    #[error("could not decode board data: {0}")]
    Decode(#[from] serde_json::Error),

    /// A `src,dst` token in path notation that is not two integers.
    #[error("malformed path token {0:?}")]
    PathToken(String),
}

impl From<wasm_bindgen::JsValue> for BoardError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        BoardError::Fetch(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}
