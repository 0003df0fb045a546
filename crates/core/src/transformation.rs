//! Proposed geometric changes to a block.
//!
//! A [`BlockTransformation`] is built fresh by [`crate::Block`] for every move
//! or rotate attempt, checked and applied by [`crate::PlayField`], and then
//! dropped (or handed to listeners inside a [`crate::FieldEvent`]).

use arrayvec::ArrayVec;
use serde::Serialize;

use crate::grid::BlockId;
use crate::types::{Coordinate, RotationDirection, MAX_BLOCK_CELLS};

/// What produced a transformation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum TransformKind {
    Shift { dx: i32, dy: i32 },
    Rotation(RotationDirection),
}

/// Old -> new coordinate mapping for every cell of one block, plus a validity flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlockTransformation {
    block: BlockId,
    kind: TransformKind,
    old_to_new: ArrayVec<(Coordinate, Coordinate), MAX_BLOCK_CELLS>,
    valid: bool,
}

impl BlockTransformation {
    pub(crate) fn new(
        block: BlockId,
        kind: TransformKind,
        old_to_new: ArrayVec<(Coordinate, Coordinate), MAX_BLOCK_CELLS>,
        valid: bool,
    ) -> Self {
        Self {
            block,
            kind,
            old_to_new,
            valid,
        }
    }

    pub fn block(&self) -> BlockId {
        self.block
    }

    pub fn kind(&self) -> TransformKind {
        self.kind
    }

    /// Whether the geometry was accepted when the transformation was built.
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn old_to_new(&self) -> &[(Coordinate, Coordinate)] {
        &self.old_to_new
    }

    /// Target coordinates, in the same order as the block's cells.
    pub fn new_coordinates(&self) -> ArrayVec<Coordinate, MAX_BLOCK_CELLS> {
        self.old_to_new.iter().map(|&(_, new)| new).collect()
    }

    /// Where `old` ends up, if it belongs to this transformation.
    pub fn target_of(&self, old: Coordinate) -> Option<Coordinate> {
        self.old_to_new
            .iter()
            .find(|&&(from, _)| from == old)
            .map(|&(_, to)| to)
    }

    /// Whether this is a shift with a downward component.
    pub fn is_downward(&self) -> bool {
        matches!(self.kind, TransformKind::Shift { dy, .. } if dy > 0)
    }
}
