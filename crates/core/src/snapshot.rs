//! Serializable view of a session for observers.

use serde::{Deserialize, Serialize};

use crate::types::{Coordinate, Dimensions, PieceKind};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub cells: Vec<Coordinate>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    pub dimensions: Dimensions,
    /// Row-major cell codes: `0` empty, `1..=7` by piece kind.
    pub cells: Vec<Vec<u8>>,
    pub active: Option<ActiveSnapshot>,
    pub stash: Option<PieceKind>,
    pub next: PieceKind,
    pub score: f64,
    pub rows_cleared: u32,
    pub blocks_placed: u32,
    pub paused: bool,
    pub game_over: bool,
}

impl SessionSnapshot {
    pub fn playable(&self) -> bool {
        !self.game_over && !self.paused
    }

    /// Code at `c`, or `None` outside the field.
    pub fn code_at(&self, c: Coordinate) -> Option<u8> {
        if !self.dimensions.contains(c) {
            return None;
        }
        self.cells
            .get(c.y as usize)
            .and_then(|row| row.get(c.x as usize))
            .copied()
    }
}
