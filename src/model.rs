//! Core data models for the snakes and ladders board.

use serde::{Deserialize, Deserializer, Serialize};

/// A 0-based cell index; `[0, cells_count)` is on the board, anything else is drawn off it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cell(pub i64);

impl Cell {
    /// Cell for a 1-based board number.
    pub fn from_number(n: i64) -> Self {
        Cell(n.saturating_sub(1))
    }

    pub fn row(self, cells_in_row: u32) -> i64 {
        self.0.div_euclid(cells_in_row as i64)
    }

    pub fn col(self, cells_in_row: u32) -> i64 {
        self.0.rem_euclid(cells_in_row as i64)
    }

    pub fn display_number(self) -> i64 {
        self.0 + 1
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectorKind {
    /// Intended upward shortcut.
    Ladder,
    /// Intended downward shortcut.
    Snake,
}

impl ConnectorKind {
    pub fn label(self) -> &'static str {
        match self {
            ConnectorKind::Ladder => "Ladder",
            ConnectorKind::Snake => "Snake",
        }
    }
}

/// A directed link between two 1-based cell numbers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Connector {
    pub src: i64,
    pub dst: i64,
    pub kind: ConnectorKind,
}

/// One `{src, dst}` pair as served by the board endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Path {
    pub src: i64,
    pub dst: i64,
}

impl Path {
    pub fn into_connector(self, kind: ConnectorKind) -> Connector {
        Connector {
            src: self.src,
            dst: self.dst,
            kind,
        }
    }
}

/// Response body of `GET /api/boards/{id}`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardData {
    #[serde(default, deserialize_with = "lenient_paths")]
    pub ladders: Vec<Path>,
    #[serde(default, deserialize_with = "lenient_paths")]
    pub snakes: Vec<Path>,
}

/// Decodes each entry on its own so one malformed pair only loses its own line.
fn lenient_paths<'de, D>(deserializer: D) -> Result<Vec<Path>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Vec<serde_json::Value>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(raw
        .into_iter()
        .filter_map(|v| match Path::deserialize(&v) {
            Ok(p) => Some(p),
            Err(e) => {
                log::warn!("skipping connector {}: {}", v, e);
                None
            }
        })
        .collect())
}

impl BoardData {
    /// Ladders in server order followed by snakes in server order.
    pub fn connectors(&self) -> Vec<Connector> {
        self.ladders
            .iter()
            .map(|p| p.into_connector(ConnectorKind::Ladder))
            .chain(self.snakes.iter().map(|p| p.into_connector(ConnectorKind::Snake)))
            .collect()
    }
}
