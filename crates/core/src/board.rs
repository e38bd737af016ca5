//! Board module - manages the warehouse grid
//!
//! The board is a square grid of side 8..=12 where each cell holds a crate tier
//! (`0` = empty). Storage is a flat array sized for the largest board, so cloning a
//! board never allocates.
//! Coordinates: (row, col) where row 0 is the top edge and row `size - 1` holds the door.

use arrayvec::ArrayVec;

use crate::error::FormatError;
use crate::types::{Direction, Tier, BOARD_MAX, BOARD_MIN, MAX_CELLS, TIER_EMPTY, TIER_MAX};

/// Crate tiers lined up ahead of the operator, nearest first.
pub type PushChain = ArrayVec<Tier, { BOARD_MAX as usize }>;

/// The warehouse floor, `size` x `size` cells using flat array storage.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    size: u8,
    /// Flat array of cells, row-major order (row * size + col). Cells past
    /// `size * size` are always empty.
    cells: [Tier; MAX_CELLS],
}

impl Board {
    /// Create an empty board. `size` is clamped into 8..=12.
    pub fn new(size: u8) -> Self {
        Self {
            size: size.clamp(BOARD_MIN, BOARD_MAX),
            cells: [TIER_EMPTY; MAX_CELLS],
        }
    }

    /// Build a board from rows of tiers.
    ///
    /// The row count decides the side length; every row must have that many cells
    /// and every tier must be within 0..=3.
    pub fn from_rows<R: AsRef<[Tier]>>(rows: &[R]) -> Result<Self, FormatError> {
        let size = u8::try_from(rows.len())
            .ok()
            .filter(|s| (BOARD_MIN..=BOARD_MAX).contains(s))
            .ok_or(FormatError::BoardSize(rows.len()))?;

        let mut board = Self {
            size,
            cells: [TIER_EMPTY; MAX_CELLS],
        };
        for (row, cells) in rows.iter().enumerate() {
            let cells = cells.as_ref();
            if cells.len() != size as usize {
                return Err(FormatError::RaggedRow {
                    row,
                    len: cells.len(),
                    size: size as usize,
                });
            }
            for (col, &tier) in cells.iter().enumerate() {
                if tier > TIER_MAX {
                    return Err(FormatError::InvalidTier { row, col, tier });
                }
                board.cells[row * size as usize + col] = tier;
            }
        }
        Ok(board)
    }

    /// Calculate flat index from (row, col) coordinates
    #[inline(always)]
    fn index(&self, row: i8, col: i8) -> Option<usize> {
        if self.is_out_of_bounds(row, col) {
            return None;
        }
        Some((row as usize) * (self.size as usize) + (col as usize))
    }

    /// Side length of the board
    pub fn size(&self) -> u8 {
        self.size
    }

    /// Index of the bottom row (the door row)
    pub fn last_row(&self) -> i8 {
        self.size as i8 - 1
    }

    /// Get tier at position (row, col)
    /// Returns None if out of bounds
    pub fn get(&self, row: i8, col: i8) -> Option<Tier> {
        self.index(row, col).map(|idx| self.cells[idx])
    }

    /// Set tier at position (row, col)
    /// Returns false if out of bounds
    pub fn set(&mut self, row: i8, col: i8, tier: Tier) -> bool {
        match self.index(row, col) {
            Some(idx) => {
                self.cells[idx] = tier;
                true
            }
            None => false,
        }
    }

    /// Check if position is within bounds and holds no crate
    pub fn is_empty_at(&self, row: i8, col: i8) -> bool {
        matches!(self.get(row, col), Some(TIER_EMPTY))
    }

    /// Check if position is within bounds and holds a crate
    pub fn is_occupied(&self, row: i8, col: i8) -> bool {
        matches!(self.get(row, col), Some(tier) if tier != TIER_EMPTY)
    }

    /// Check if position is out of bounds
    pub fn is_out_of_bounds(&self, row: i8, col: i8) -> bool {
        row < 0 || row >= self.size as i8 || col < 0 || col >= self.size as i8
    }

    /// Check if position is on the outermost ring of cells
    pub fn is_border(&self, row: i8, col: i8) -> bool {
        !self.is_out_of_bounds(row, col)
            && (row == 0 || col == 0 || row == self.last_row() || col == self.last_row())
    }

    /// Scan the cells strictly ahead of `(row, col)` along `direction`.
    ///
    /// Collects crate tiers until the first empty cell and returns them nearest first.
    /// Returns `None` when the scan runs into the board edge before finding an empty
    /// cell. Weight limits are the caller's concern.
    pub fn chain_ahead(&self, row: i8, col: i8, direction: Direction) -> Option<PushChain> {
        let (dr, dc) = direction.delta();
        let mut chain = PushChain::new();
        let (mut r, mut c) = (row + dr, col + dc);

        loop {
            match self.get(r, c)? {
                TIER_EMPTY => return Some(chain),
                tier => {
                    // A line holds at most `size - 1` cells ahead, so this never fills.
                    if chain.try_push(tier).is_err() {
                        return None;
                    }
                }
            }
            r += dr;
            c += dc;
        }
    }

    /// Count of cells that hold a crate
    pub fn crate_count(&self) -> usize {
        self.cells().iter().filter(|&&t| t != TIER_EMPTY).count()
    }

    /// The used cells in row-major order
    pub fn cells(&self) -> &[Tier] {
        let n = self.size as usize;
        &self.cells[..n * n]
    }

    /// Iterate rows as slices, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Tier]> {
        self.cells().chunks(self.size as usize)
    }

    /// Convert to a 2D vector (row-major)
    pub fn to_rows(&self) -> Vec<Vec<Tier>> {
        self.rows().map(|row| row.to_vec()).collect()
    }
}
