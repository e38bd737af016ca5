//! Seeded level generation
//!
//! A level is a pure function of its seed string. Draws are taken from [`SeedRng`] in a
//! fixed order:
//!
//! 1. board side `n` in 8..=12
//! 2. one tier per cell, row-major
//! 3. the operator/door column
//! 4. the target row, then the target column
//!
//! Changing that order changes every level ever shared, so it is frozen.

use log::debug;

use crate::board::Board;
use crate::error::GenerationError;
use crate::game_state::{Operator, SessionState};
use crate::rng::SeedRng;
use crate::types::{Direction, Tier, BOARD_MAX, BOARD_MIN, CRATE_WEIGHTS, TIER_EMPTY};

/// Build the initial session for `seed`.
pub fn generate(seed: &str) -> Result<SessionState, GenerationError> {
    let mut rng = SeedRng::new(seed);

    let span = (BOARD_MAX - BOARD_MIN + 1) as u32;
    let n = BOARD_MIN + rng.next_below(span) as u8;
    let mut board = Board::new(n);

    for row in 0..n as i8 {
        for col in 0..n as i8 {
            board.set(row, col, tier_for(rng.next_f64()));
        }
    }

    let start_col = rng.next_below(n as u32) as i8;
    let row = rng.next_below(n as u32) as i8;
    let col = rng.next_below(n as u32) as i8;
    let (target_row, target_col) =
        find_target(&board, row, col).ok_or_else(|| GenerationError::NoTargetCandidate {
            seed: seed.to_string(),
            size: n,
        })?;

    let start_row = board.last_row();
    board.set(start_row, start_col, TIER_EMPTY);

    debug!(
        "generated seed={:?} size={} start_col={} target=({}, {}) crates={}",
        seed,
        n,
        start_col,
        target_row,
        target_col,
        board.crate_count()
    );

    let operator = Operator {
        row: start_row,
        col: start_col,
        direction: Direction::North,
        door_col: start_col,
        target_row,
        target_col,
    };
    Ok(SessionState::from_generated(seed, board, operator))
}

/// Tier for a uniform draw `r`: the first weight bucket that `r` falls under.
pub fn tier_for(r: f64) -> Tier {
    CRATE_WEIGHTS
        .iter()
        .position(|&weight| r < weight)
        .unwrap_or(CRATE_WEIGHTS.len() - 1) as Tier
}

/// Walk column by column from `(row, col)` until an interior crate turns up.
///
/// Each step advances the row; when it wraps back to the top the column advances too.
/// Gives up after visiting every cell once, so a board without interior crates is
/// reported instead of looping forever.
fn find_target(board: &Board, mut row: i8, mut col: i8) -> Option<(i8, i8)> {
    let n = board.size() as i8;
    let cells = board.size() as usize * board.size() as usize;

    for _ in 0..=cells {
        if board.is_occupied(row, col) && !board.is_border(row, col) {
            return Some((row, col));
        }
        row = (row + 1) % n;
        if row == 0 {
            col = (col + 1) % n;
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn test_tier_buckets() {
        assert_eq!(tier_for(0.0), 0);
        assert_eq!(tier_for(0.69999), 0);
        assert_eq!(tier_for(0.7), 1);
        assert_eq!(tier_for(0.85), 2);
        assert_eq!(tier_for(0.9), 3);
        assert_eq!(tier_for(0.999999), 3);
    }

    #[test]
    fn test_find_target_wraps_columns() {
        let mut board = Board::new(8);
        board.set(1, 2, 1);
        // Start below the crate in the previous column: the walk runs down column 1,
        // wraps to the top of column 2 and stops at row 1.
        assert_eq!(find_target(&board, 6, 1), Some((1, 2)));
        // Starting on the crate itself picks it immediately.
        assert_eq!(find_target(&board, 1, 2), Some((1, 2)));
    }

    #[test]
    fn test_find_target_skips_border_crates() {
        let mut board = Board::new(8);
        for i in 0..8 {
            board.set(0, i, 3);
            board.set(7, i, 3);
            board.set(i, 0, 3);
            board.set(i, 7, 3);
        }
        assert_eq!(find_target(&board, 0, 0), None);

        board.set(4, 4, 2);
        assert_eq!(find_target(&board, 0, 0), Some((4, 4)));
    }

    #[test]
    fn test_generate_golden_1234() {
        let state = generate("1234").unwrap();
        let board = state.board();
        assert_eq!(board.size(), 9);

        let op = state.operator();
        assert_eq!(op.position(), (8, 4));
        assert_eq!(op.door_col, 4);
        assert_eq!(op.direction, Direction::North);
        assert_eq!(op.target(), (1, 1));

        let expected: [[Tier; 9]; 9] = [
            [0, 3, 3, 0, 0, 0, 2, 0, 0],
            [0, 1, 0, 3, 0, 0, 0, 3, 0],
            [0, 0, 0, 1, 0, 1, 2, 3, 1],
            [0, 0, 0, 0, 3, 0, 2, 0, 2],
            [0, 0, 0, 0, 0, 3, 1, 2, 0],
            [0, 0, 0, 0, 0, 0, 0, 0, 0],
            [1, 1, 3, 1, 1, 0, 0, 0, 0],
            [0, 1, 0, 0, 2, 0, 0, 0, 0],
            [3, 0, 0, 0, 0, 0, 0, 0, 0],
        ];
        assert_eq!(board.to_rows(), expected.map(|r| r.to_vec()).to_vec());
        assert_eq!(state.score(), 0);
        assert!(state.is_playing());
        assert_eq!(state.seed(), "1234");
    }
}
