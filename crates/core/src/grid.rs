//! Grid module - cell occupancy for the play field
//!
//! The grid is a dense `width x height` arena stored row-major in a flat
//! boxed slice (`y * width + x`). Every in-domain coordinate has exactly one
//! cell; out-of-domain coordinates have none, so every accessor returns
//! `Option` and leaves bounds decisions to the caller.
//!
//! A cell is either empty or holds one [`BlockPiece`]: the id of the block that
//! put it there plus the piece kind (its color).

use arrayvec::ArrayVec;
use serde::{Deserialize, Serialize};

use crate::types::{Coordinate, Dimensions, PieceKind, MAX_BLOCK_CELLS};

/// Identity of a block for the lifetime of a session.
pub type BlockId = u32;

/// What a single occupied cell holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlockPiece {
    pub block: BlockId,
    pub kind: PieceKind,
}

impl BlockPiece {
    pub const fn new(block: BlockId, kind: PieceKind) -> Self {
        Self { block, kind }
    }
}

/// Cell on the grid (None = empty)
pub type Cell = Option<BlockPiece>;

/// The play field's cell arena.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    dims: Dimensions,
    cells: Box<[Cell]>,
}

impl Grid {
    /// Create an empty grid covering `dims`.
    pub fn new(dims: Dimensions) -> Self {
        Self {
            dims,
            cells: vec![None; dims.cell_count()].into_boxed_slice(),
        }
    }

    #[inline(always)]
    fn index(&self, c: Coordinate) -> Option<usize> {
        if !self.dims.contains(c) {
            return None;
        }
        Some(c.y as usize * self.dims.width as usize + c.x as usize)
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dims
    }

    pub fn width(&self) -> u16 {
        self.dims.width
    }

    pub fn height(&self) -> u16 {
        self.dims.height
    }

    /// Whether `c` has a cell at all.
    pub fn contains(&self, c: Coordinate) -> bool {
        self.dims.contains(c)
    }

    /// Get the cell at `c`.
    /// Returns None if `c` is outside the domain.
    pub fn get(&self, c: Coordinate) -> Option<Cell> {
        self.index(c).map(|idx| self.cells[idx])
    }

    /// Overwrite the cell at `c`.
    /// Returns false if `c` is outside the domain.
    pub fn set(&mut self, c: Coordinate, cell: Cell) -> bool {
        match self.index(c) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// In bounds and empty.
    pub fn is_empty_at(&self, c: Coordinate) -> bool {
        matches!(self.get(c), Some(None))
    }

    /// In bounds and holding a piece.
    pub fn is_occupied(&self, c: Coordinate) -> bool {
        matches!(self.get(c), Some(Some(_)))
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    fn row(&self, y: usize) -> &[Cell] {
        let width = self.dims.width as usize;
        &self.cells[y * width..(y + 1) * width]
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: i32) -> bool {
        if y < 0 || y >= self.dims.height as i32 {
            return false;
        }
        self.row(y as usize).iter().all(|cell| cell.is_some())
    }

    /// Move pieces according to an old -> new coordinate map.
    ///
    /// Two phases: every old cell holding a piece is emptied and its piece
    /// remembered, then every remembered piece is written to its new cell.
    /// Old cells with no piece are skipped. Overlapping old/new sets are safe.
    /// Targets outside the domain are dropped; callers validate first.
    /// `old_to_new` describes one block, so it has at most `MAX_BLOCK_CELLS` entries.
    pub fn move_pieces(&mut self, old_to_new: &[(Coordinate, Coordinate)]) {
        let mut lifted: ArrayVec<(Coordinate, BlockPiece), MAX_BLOCK_CELLS> = ArrayVec::new();

        for &(old, new) in old_to_new {
            let Some(idx) = self.index(old) else {
                continue;
            };
            if let Some(piece) = self.cells[idx].take() {
                lifted.push((new, piece));
            }
        }

        for (new, piece) in lifted {
            self.set(new, Some(piece));
        }
    }

    /// Remove every full row among `candidates` and drop the rows above.
    ///
    /// Only the listed rows are tested; they are the rows of one placed block,
    /// so at most `MAX_BLOCK_CELLS` of them are distinct. Uses a two-pointer
    /// compaction from the bottom up, so no row buffer is allocated. Returns
    /// the removed row indices, sorted bottom to top.
    pub fn clear_full_rows(&mut self, candidates: &[i32]) -> ArrayVec<usize, MAX_BLOCK_CELLS> {
        let mut full: ArrayVec<usize, MAX_BLOCK_CELLS> = ArrayVec::new();
        for &y in candidates {
            if self.is_row_full(y) && !full.contains(&(y as usize)) {
                full.push(y as usize);
            }
        }
        if full.is_empty() {
            return full;
        }

        let width = self.dims.width as usize;
        let height = self.dims.height as usize;
        let mut write_y = height;

        for read_y in (0..height).rev() {
            if full.contains(&read_y) {
                continue;
            }
            write_y -= 1;
            if write_y != read_y {
                let src = read_y * width;
                self.cells.copy_within(src..src + width, write_y * width);
            }
        }

        // Vacated rows at the top.
        self.cells[..write_y * width].fill(None);

        full.sort_unstable_by(|a, b| b.cmp(a));
        full
    }

    /// Row-major cell codes: `0` for empty, [`PieceKind::code`] otherwise.
    pub fn to_codes(&self) -> Vec<Vec<u8>> {
        (0..self.dims.height as usize)
            .map(|y| {
                self.row(y)
                    .iter()
                    .map(|cell| cell.map_or(0, |piece| piece.kind.code()))
                    .collect()
            })
            .collect()
    }

    /// Read-only view of the flat cell storage.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn piece(block: BlockId) -> Cell {
        Some(BlockPiece::new(block, PieceKind::T))
    }

    fn fill_row(grid: &mut Grid, y: i32, block: BlockId) {
        for x in 0..grid.width() as i32 {
            grid.set(Coordinate::new(x, y), piece(block));
        }
    }

    #[test]
    fn test_grid_index_calculation() {
        let grid = Grid::new(Dimensions::new(10, 20));
        assert_eq!(grid.index(Coordinate::new(0, 0)), Some(0));
        assert_eq!(grid.index(Coordinate::new(9, 0)), Some(9));
        assert_eq!(grid.index(Coordinate::new(0, 1)), Some(10));
        assert_eq!(grid.index(Coordinate::new(9, 19)), Some(199));
        assert_eq!(grid.index(Coordinate::new(-1, 0)), None);
        assert_eq!(grid.index(Coordinate::new(10, 0)), None);
        assert_eq!(grid.index(Coordinate::new(0, 20)), None);
    }

    #[test]
    fn test_move_pieces_overlapping_sets() {
        // Vertical bar of three moving down one: old and new share two cells.
        let mut grid = Grid::new(Dimensions::new(3, 5));
        let old = [
            Coordinate::new(1, 0),
            Coordinate::new(1, 1),
            Coordinate::new(1, 2),
        ];
        for (i, c) in old.iter().enumerate() {
            grid.set(*c, Some(BlockPiece::new(i as BlockId, PieceKind::I)));
        }

        let map: Vec<_> = old.iter().map(|c| (*c, c.shifted(0, 1))).collect();
        grid.move_pieces(&map);

        assert_eq!(grid.get(Coordinate::new(1, 0)), Some(None));
        for i in 0..3 {
            assert_eq!(
                grid.get(Coordinate::new(1, i + 1)),
                Some(Some(BlockPiece::new(i as BlockId, PieceKind::I))),
                "piece {} should land one row lower",
                i
            );
        }
        assert_eq!(grid.occupied_count(), 3);
    }

    #[test]
    fn test_move_pieces_skips_empty_old_cells() {
        let mut grid = Grid::new(Dimensions::new(3, 3));
        grid.set(Coordinate::new(2, 2), piece(9));

        // (0,0) is empty, so nothing should be written to (2,2).
        grid.move_pieces(&[(Coordinate::new(0, 0), Coordinate::new(2, 2))]);
        assert_eq!(grid.get(Coordinate::new(2, 2)), Some(piece(9)));
    }

    #[test]
    fn test_clear_full_rows_compacts_and_reports() {
        let mut grid = Grid::new(Dimensions::new(4, 5));
        fill_row(&mut grid, 4, 1);
        fill_row(&mut grid, 2, 1);
        grid.set(Coordinate::new(0, 3), piece(2));
        grid.set(Coordinate::new(3, 1), piece(3));

        let cleared = grid.clear_full_rows(&[4, 3, 2, 2]);
        assert_eq!(cleared.as_slice(), &[4, 2]);

        // Row 3 fell to 4, row 1 fell to 3.
        assert_eq!(grid.get(Coordinate::new(0, 4)), Some(piece(2)));
        assert_eq!(grid.get(Coordinate::new(3, 3)), Some(piece(3)));
        assert_eq!(grid.occupied_count(), 2);
        assert!(grid.to_codes()[..3].iter().flatten().all(|&c| c == 0));
    }

    #[test]
    fn test_clear_full_rows_ignores_rows_not_listed() {
        let mut grid = Grid::new(Dimensions::new(3, 3));
        fill_row(&mut grid, 2, 1);

        assert!(grid.clear_full_rows(&[0, 1]).is_empty());
        assert!(grid.is_row_full(2));
    }

    #[test]
    fn test_to_codes_shape() {
        let mut grid = Grid::new(Dimensions::new(2, 3));
        grid.set(Coordinate::new(1, 2), Some(BlockPiece::new(0, PieceKind::L)));
        assert_eq!(grid.to_codes(), vec![vec![0, 0], vec![0, 0], vec![0, 7]]);
    }
}
