//! Field engine - validates and applies block transformations
//!
//! [`PlayField`] owns the [`Grid`] and the listener registry. The active block
//! is owned by the caller and lent to every operation, so there is exactly one
//! mutable path to the grid and no partial update is ever visible: validity is
//! decided before the first write.
//!
//! Per block the state machine is:
//!
//! ```text
//! Falling --valid move/rotate--> Falling
//! Falling --blocked downward move--> Placed (terminal)
//! ```
//!
//! Placement immediately runs row completion on the rows the block touched.

use arrayvec::ArrayVec;
use tracing::{debug, trace};

use crate::block::Block;
use crate::events::{FieldEvent, Listener, Listeners};
use crate::grid::Grid;
use crate::transformation::BlockTransformation;
use crate::types::{Coordinate, Dimensions, RotationDirection, MAX_BLOCK_CELLS};

/// Result of a move or rotate attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The transformation was committed.
    Moved,
    /// Nothing changed.
    Rejected,
    /// A blocked downward move locked the block into the grid.
    Placed { rows_cleared: u32 },
}

impl MoveOutcome {
    pub fn is_moved(&self) -> bool {
        matches!(self, MoveOutcome::Moved)
    }

    pub fn is_placed(&self) -> bool {
        matches!(self, MoveOutcome::Placed { .. })
    }
}

#[derive(Debug)]
pub struct PlayField {
    grid: Grid,
    listeners: Listeners,
}

impl PlayField {
    /// Empty field with no subscribers.
    pub fn new(dims: Dimensions) -> Self {
        Self::with_listeners(dims, Vec::new())
    }

    /// Empty field notifying `listeners`, in order.
    pub fn with_listeners(dims: Dimensions, listeners: Vec<Listener>) -> Self {
        Self {
            grid: Grid::new(dims),
            listeners: listeners.into(),
        }
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&FieldEvent) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    pub fn dimensions(&self) -> Dimensions {
        self.grid.dimensions()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Write a freshly spawned block's pieces into the grid.
    ///
    /// The target cells are expected to be empty; callers check with
    /// [`PlayField::can_spawn`] first and treat a conflict as game over.
    pub fn add_block(&mut self, block: &Block) {
        for &(c, piece) in block.pieces() {
            self.grid.set(c, Some(piece));
        }
        debug!(block = block.id(), kind = block.kind().as_str(), "block added");
    }

    /// Clear a block's cells from the grid (stash swap).
    pub fn remove_block(&mut self, block: &Block) {
        for c in block.coordinates() {
            if matches!(self.grid.get(c), Some(Some(piece)) if piece.block == block.id()) {
                self.grid.set(c, None);
            }
        }
    }

    /// Try to shift `block` by `(dx, dy)`.
    ///
    /// An invalid target rejects the move, except that an invalid *downward*
    /// move places the block instead.
    ///
    /// # Panics
    ///
    /// On a diagonal shift, a zero shift, or a block that is already placed.
    pub fn try_move(&mut self, block: &mut Block, dx: i32, dy: i32) -> MoveOutcome {
        assert!(!(dx != 0 && dy != 0), "cannot move diagonally");
        assert!(!block.is_placed(), "block {} is already placed", block.id());

        let transformation = block.calculate_linear_transformation(dx, dy);

        if !self.is_valid_placement(block, transformation.new_coordinates()) {
            if transformation.is_downward() {
                return self.place_block(block);
            }
            trace!(block = block.id(), dx, dy, "move rejected");
            return MoveOutcome::Rejected;
        }

        if !transformation.is_valid() {
            return MoveOutcome::Rejected;
        }

        self.commit(block, transformation);
        MoveOutcome::Moved
    }

    /// Try a quarter turn of `block`. Rotation never places a block.
    ///
    /// # Panics
    ///
    /// If the block is already placed.
    pub fn try_rotate(&mut self, block: &mut Block, direction: RotationDirection) -> MoveOutcome {
        assert!(!block.is_placed(), "block {} is already placed", block.id());

        let transformation = {
            let current: &Block = block;
            current.calculate_rotated_transformation(direction, |cells| {
                self.is_valid_placement(current, cells.iter().copied())
            })
        };

        if !transformation.is_valid() {
            trace!(block = block.id(), ?direction, "rotation rejected");
            return MoveOutcome::Rejected;
        }

        self.commit(block, transformation);
        MoveOutcome::Moved
    }

    /// Every cell of a block not yet in the grid is in bounds and empty.
    pub fn can_spawn(&self, block: &Block) -> bool {
        block.coordinates().all(|c| self.grid.is_empty_at(c))
    }

    /// Every coordinate is in bounds and either empty or already one of `block`'s own cells.
    pub fn is_valid_placement(
        &self,
        block: &Block,
        coordinates: impl IntoIterator<Item = Coordinate>,
    ) -> bool {
        coordinates.into_iter().all(|c| match self.grid.get(c) {
            None => false,
            Some(None) => true,
            Some(Some(_)) => block.contains(c),
        })
    }

    fn commit(&mut self, block: &mut Block, transformation: BlockTransformation) {
        block.perform_transformation(&transformation);
        self.grid.move_pieces(transformation.old_to_new());
        self.listeners.emit(&FieldEvent::TransformationApplied { transformation });
    }

    fn place_block(&mut self, block: &mut Block) -> MoveOutcome {
        block.mark_placed();
        debug!(block = block.id(), "block placed");
        self.listeners.emit(&FieldEvent::BlockPlaced);

        let rows: ArrayVec<i32, MAX_BLOCK_CELLS> = block.coordinates().map(|c| c.y).collect();
        let cleared = self.grid.clear_full_rows(&rows);
        let rows_cleared = cleared.len() as u32;
        if rows_cleared > 0 {
            debug!(rows = ?cleared.as_slice(), "rows completed");
            self.listeners.emit(&FieldEvent::RowsCompleted {
                count: rows_cleared,
            });
        }

        MoveOutcome::Placed { rows_cleared }
    }
}
