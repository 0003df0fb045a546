//! Shapes module - spawn cells and rotation pivots per piece kind
//!
//! Every shape is given in a 4x2 box at its spawn orientation. I and O turn
//! about a cell corner, the rest about their centre cell, so four quarter
//! turns always bring a block back to where it started.

use crate::block::Block;
use crate::grid::BlockId;
use crate::types::{Coordinate, Dimensions, PieceKind, Pivot};

/// Offset of a single cell relative to the spawn box origin
pub type CellOffset = (i32, i32);

/// Spawn orientation cells and pivot for a piece kind.
pub fn spawn_shape(kind: PieceKind) -> ([CellOffset; 4], Pivot) {
    match kind {
        PieceKind::I => ([(0, 1), (1, 1), (2, 1), (3, 1)], Pivot::new(1.5, 1.5)),
        PieceKind::O => ([(1, 0), (2, 0), (1, 1), (2, 1)], Pivot::new(1.5, 0.5)),
        PieceKind::T => ([(1, 0), (0, 1), (1, 1), (2, 1)], Pivot::new(1.0, 1.0)),
        PieceKind::S => ([(1, 0), (2, 0), (0, 1), (1, 1)], Pivot::new(1.0, 1.0)),
        PieceKind::Z => ([(0, 0), (1, 0), (1, 1), (2, 1)], Pivot::new(1.0, 1.0)),
        PieceKind::J => ([(0, 0), (0, 1), (1, 1), (2, 1)], Pivot::new(1.0, 1.0)),
        PieceKind::L => ([(2, 0), (0, 1), (1, 1), (2, 1)], Pivot::new(1.0, 1.0)),
    }
}

/// Left edge of the spawn box: horizontally centred.
pub fn spawn_origin(dims: Dimensions) -> Coordinate {
    Coordinate::new((dims.width as i32 - 4) / 2, 0)
}

/// A block of `kind` at the spawn position for a field of `dims`.
pub fn spawn_block(id: BlockId, kind: PieceKind, dims: Dimensions) -> Block {
    let origin = spawn_origin(dims);
    let (offsets, pivot) = spawn_shape(kind);
    let cells = offsets.map(|(dx, dy)| origin.shifted(dx, dy));

    // Shapes are fixed four-cell tables with no repeats.
    match Block::new(id, kind, &cells, pivot.shifted(origin.x, origin.y)) {
        Ok(block) => block,
        Err(err) => unreachable!("spawn shape for {:?} is malformed: {}", kind, err),
    }
}
