//! Block module - the falling, player-controlled piece
//!
//! A block owns its cells (coordinate + piece) until it is placed. It only
//! *computes* transformations; committing them to the grid is the field's job,
//! and the block's own state changes only through
//! [`Block::perform_transformation`] once the field has accepted a move.

use arrayvec::ArrayVec;

use crate::error::BlockError;
use crate::grid::{BlockId, BlockPiece};
use crate::transformation::{BlockTransformation, TransformKind};
use crate::types::{Coordinate, PieceKind, Pivot, RotationDirection, MAX_BLOCK_CELLS};

#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    id: BlockId,
    kind: PieceKind,
    pieces: ArrayVec<(Coordinate, BlockPiece), MAX_BLOCK_CELLS>,
    pivot: Pivot,
    placed: bool,
}

impl Block {
    /// Build a block of `kind` covering `cells`, rotating about `pivot`.
    ///
    /// Fails if `cells` is empty, longer than [`MAX_BLOCK_CELLS`], or repeats a
    /// coordinate.
    pub fn new(
        id: BlockId,
        kind: PieceKind,
        cells: &[Coordinate],
        pivot: Pivot,
    ) -> Result<Self, BlockError> {
        if cells.is_empty() {
            return Err(BlockError::Empty);
        }
        if cells.len() > MAX_BLOCK_CELLS {
            return Err(BlockError::TooManyCells { count: cells.len() });
        }

        let mut pieces = ArrayVec::new();
        for &c in cells {
            if pieces.iter().any(|&(existing, _)| existing == c) {
                return Err(BlockError::DuplicateCell(c));
            }
            pieces.push((c, BlockPiece::new(id, kind)));
        }

        Ok(Self {
            id,
            kind,
            pieces,
            pivot,
            placed: false,
        })
    }

    pub fn id(&self) -> BlockId {
        self.id
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    pub fn pivot(&self) -> Pivot {
        self.pivot
    }

    pub fn is_placed(&self) -> bool {
        self.placed
    }

    pub(crate) fn mark_placed(&mut self) {
        self.placed = true;
    }

    /// Cells as (coordinate, piece) pairs.
    pub fn pieces(&self) -> &[(Coordinate, BlockPiece)] {
        &self.pieces
    }

    pub fn coordinates(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.pieces.iter().map(|&(c, _)| c)
    }

    pub fn contains(&self, c: Coordinate) -> bool {
        self.pieces.iter().any(|&(own, _)| own == c)
    }

    /// Shift every cell by `(dx, dy)`.
    ///
    /// The result is always flagged valid; whether the target cells are free is
    /// for the field to decide.
    ///
    /// # Panics
    ///
    /// Unless exactly one of `dx`/`dy` is non-zero.
    pub fn calculate_linear_transformation(&self, dx: i32, dy: i32) -> BlockTransformation {
        assert!(
            (dx != 0) ^ (dy != 0),
            "shift must move along exactly one axis, got ({}, {})",
            dx,
            dy
        );

        let old_to_new = self
            .coordinates()
            .map(|c| (c, c.shifted(dx, dy)))
            .collect();
        BlockTransformation::new(self.id, TransformKind::Shift { dx, dy }, old_to_new, true)
    }

    /// Rotate every cell a quarter turn about the pivot.
    ///
    /// `is_valid_placement` decides whether the rotated cells are legal; its
    /// answer becomes the transformation's validity flag. No kick offsets are
    /// tried.
    pub fn calculate_rotated_transformation(
        &self,
        direction: RotationDirection,
        is_valid_placement: impl FnOnce(&[Coordinate]) -> bool,
    ) -> BlockTransformation {
        let old_to_new: ArrayVec<(Coordinate, Coordinate), MAX_BLOCK_CELLS> = self
            .coordinates()
            .map(|c| (c, c.rotated_toward(self.pivot, direction)))
            .collect();
        let targets: ArrayVec<Coordinate, MAX_BLOCK_CELLS> =
            old_to_new.iter().map(|&(_, new)| new).collect();
        let valid = is_valid_placement(&targets);

        BlockTransformation::new(self.id, TransformKind::Rotation(direction), old_to_new, valid)
    }

    /// Commit `transformation` to this block's own cells (the grid is untouched).
    ///
    /// # Panics
    ///
    /// If `transformation` was computed for another block.
    pub fn perform_transformation(&mut self, transformation: &BlockTransformation) {
        assert_eq!(
            transformation.block(),
            self.id,
            "transformation belongs to block {}, not block {}",
            transformation.block(),
            self.id
        );

        for (c, _) in self.pieces.iter_mut() {
            if let Some(target) = transformation.target_of(*c) {
                *c = target;
            }
        }

        if let TransformKind::Shift { dx, dy } = transformation.kind() {
            self.pivot = self.pivot.shifted(dx, dy);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t_block() -> Block {
        // T pointing up inside a 3x3 box, pivot at the centre cell.
        let cells = [
            Coordinate::new(1, 0),
            Coordinate::new(0, 1),
            Coordinate::new(1, 1),
            Coordinate::new(2, 1),
        ];
        Block::new(7, PieceKind::T, &cells, Pivot::new(1.0, 1.0)).unwrap()
    }

    #[test]
    fn test_new_rejects_bad_cell_sets() {
        let pivot = Pivot::default();
        assert_eq!(
            Block::new(0, PieceKind::O, &[], pivot),
            Err(BlockError::Empty)
        );

        let five: Vec<_> = (0..5).map(|x| Coordinate::new(x, 0)).collect();
        assert_eq!(
            Block::new(0, PieceKind::I, &five, pivot),
            Err(BlockError::TooManyCells { count: 5 })
        );

        let dup = [Coordinate::new(1, 1), Coordinate::new(1, 1)];
        assert_eq!(
            Block::new(0, PieceKind::S, &dup, pivot),
            Err(BlockError::DuplicateCell(Coordinate::new(1, 1)))
        );
    }

    #[test]
    fn test_linear_transformation_is_valid_and_pure() {
        let block = t_block();
        let t = block.calculate_linear_transformation(0, 1);

        assert!(t.is_valid());
        assert!(t.is_downward());
        assert_eq!(t.block(), 7);
        assert_eq!(
            t.target_of(Coordinate::new(1, 0)),
            Some(Coordinate::new(1, 1))
        );
        // Computing never mutates the block.
        assert!(block.contains(Coordinate::new(1, 0)));
    }

    #[test]
    #[should_panic(expected = "exactly one axis")]
    fn test_linear_transformation_rejects_diagonal() {
        t_block().calculate_linear_transformation(-1, 1);
    }

    #[test]
    #[should_panic(expected = "exactly one axis")]
    fn test_linear_transformation_rejects_zero_shift() {
        t_block().calculate_linear_transformation(0, 0);
    }

    #[test]
    fn test_rotation_uses_predicate_for_validity() {
        let block = t_block();

        let accepted = block.calculate_rotated_transformation(RotationDirection::Clockwise, |_| true);
        assert!(accepted.is_valid());

        let rejected =
            block.calculate_rotated_transformation(RotationDirection::Clockwise, |_| false);
        assert!(!rejected.is_valid());
        assert_eq!(accepted.old_to_new(), rejected.old_to_new());
    }

    #[test]
    fn test_rotation_predicate_sees_rotated_cells() {
        let block = t_block();
        let mut seen = Vec::new();
        block.calculate_rotated_transformation(RotationDirection::Clockwise, |cells| {
            seen.extend_from_slice(cells);
            true
        });
        seen.sort();

        let mut expected = vec![
            Coordinate::new(1, 0),
            Coordinate::new(1, 1),
            Coordinate::new(2, 1),
            Coordinate::new(1, 2),
        ];
        expected.sort();
        assert_eq!(seen, expected);
    }

    #[test]
    fn test_perform_shift_moves_cells_and_pivot() {
        let mut block = t_block();
        let t = block.calculate_linear_transformation(2, 0);
        block.perform_transformation(&t);

        assert!(block.contains(Coordinate::new(3, 0)));
        assert!(!block.contains(Coordinate::new(0, 1)));
        assert_eq!(block.pivot(), Pivot::new(3.0, 1.0));
    }

    #[test]
    fn test_perform_rotation_keeps_pivot() {
        let mut block = t_block();
        let t = block.calculate_rotated_transformation(RotationDirection::CounterClockwise, |_| true);
        block.perform_transformation(&t);

        assert_eq!(block.pivot(), Pivot::new(1.0, 1.0));
        // Counter-clockwise moves the top nub to the left.
        assert!(block.contains(Coordinate::new(0, 1)));
        assert!(block.contains(Coordinate::new(1, 2)));
        assert!(!block.contains(Coordinate::new(2, 1)));
    }

    #[test]
    #[should_panic(expected = "transformation belongs to block")]
    fn test_perform_foreign_transformation_panics() {
        let other = Block::new(99, PieceKind::O, &[Coordinate::new(0, 0)], Pivot::default()).unwrap();
        let t = other.calculate_linear_transformation(1, 0);
        t_block().perform_transformation(&t);
    }
}
