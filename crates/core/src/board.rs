//! Board module - manages the playfield grid
//!
//! The board is a 7x10 grid where each cell is empty or holds a locked tile's
//! face value. Uses a flat array for better cache locality and zero-allocation.
//! Coordinates: (x, y) where x ranges 0..6 (left to right), y ranges 0..9
//! (BOTTOM to top). Tiles descend by decrementing y, land in or above row 0,
//! and only row 0 is ever cleared.
//! Spawn position for new tiles is at (3, 9).

use arrayvec::ArrayVec;

use sumfall_types::{Cell, Tile, BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH * BOARD_HEIGHT) as usize;

/// Cells per row, as a usize for row buffers
pub const ROW_CELLS: usize = BOARD_WIDTH as usize;

/// The playfield - 7 columns x 10 rows using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x), row 0 at the bottom
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * (BOARD_WIDTH as usize) + (x as usize))
    }

    /// Get width of the board
    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    /// Get height of the board
    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Check whether the falling tile may occupy (x, y)
    ///
    /// Rejects the side walls and the floor, then any occupied cell. Rows at
    /// or above the top count as free; tiles spawn in the top row and never
    /// move up, so those rows are unreachable in play.
    pub fn can_move_to(&self, x: i8, y: i8) -> bool {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 {
            return false;
        }
        !self.is_occupied(x, y)
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= BOARD_HEIGHT as usize {
            return false;
        }
        let start = y * BOARD_WIDTH as usize;
        let end = start + BOARD_WIDTH as usize;
        self.cells[start..end].iter().all(|cell| cell.is_some())
    }

    /// Sum of the face values in a row (empty cells contribute 0)
    pub fn row_sum(&self, y: usize) -> u32 {
        if y >= BOARD_HEIGHT as usize {
            return 0;
        }
        let start = y * BOARD_WIDTH as usize;
        let end = start + BOARD_WIDTH as usize;
        self.cells[start..end]
            .iter()
            .flatten()
            .map(|&value| value as u32)
            .sum()
    }

    /// Lock a tile's face value into its cell
    /// Returns true if successful, false if the cell is out of bounds or occupied
    pub fn lock(&mut self, tile: Tile) -> bool {
        match Self::index(tile.x, tile.y) {
            Some(idx) if self.cells[idx].is_none() => {
                self.cells[idx] = Some(tile.value);
                true
            }
            _ => false,
        }
    }

    /// Remove the bottom row and shift every remaining row down by one
    ///
    /// Returns the removed tiles in left-to-right order. The caller decides
    /// whether the row qualified for removal; this just performs it.
    /// Uses copy_within for efficient memory movement.
    pub fn take_bottom_row(&mut self) -> ArrayVec<Tile, ROW_CELLS> {
        let width = BOARD_WIDTH as usize;

        let mut removed = ArrayVec::new();
        for x in 0..width {
            if let Some(value) = self.cells[x] {
                removed.push(Tile::new(x as i8, 0, value));
            }
        }

        // Shift all rows above down by one using copy
        // Note: copy_within handles overlapping ranges safely
        for row in 1..BOARD_HEIGHT as usize {
            let src_start = row * width;
            let dst_start = (row - 1) * width;
            self.cells
                .copy_within(src_start..src_start + width, dst_start);
        }

        // Clear the top row
        let top_start = (BOARD_HEIGHT as usize - 1) * width;
        for cell in &mut self.cells[top_start..top_start + width] {
            *cell = None;
        }

        removed
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = None;
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
