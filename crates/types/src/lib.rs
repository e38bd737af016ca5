//! Core types module - shared data structures and constants
//!
//! Plain data used by every layer of the warehouse puzzle: the operator's facing,
//! the discrete input symbols a front-end may submit, crate tiers, and the fixed
//! tuning constants of the simulation.
//!
//! # Board
//!
//! The warehouse is a square grid whose side is chosen per seed:
//!
//! - **Minimum side**: 8 cells
//! - **Maximum side**: 12 cells
//! - Coordinates are `(row, col)`, row 0 at the top, the door on the bottom row.
//!
//! # Crate Tiers
//!
//! | Tier | Meaning |
//! |------|---------|
//! | 0 | empty cell |
//! | 1 | light crate |
//! | 2 | medium crate |
//! | 3 | heavy crate |
//!
//! # Scoring
//!
//! | Constant | Value | Charged for |
//! |----------|-------|-------------|
//! | `SCORE_TURN` | 0 | turning in place |
//! | `SCORE_MOVE` | 1 | advancing one cell (with or without a push) |
//! | `SCORE_DEMOLISH` | 100 | blowing up the crate ahead |
//!
//! Lower is better.
//!
//! # Examples
//!
//! ```
//! use tui_warehouse_types::{Direction, InputSymbol, BOARD_MAX, BOARD_MIN};
//!
//! assert_eq!(Direction::from_str("n"), Some(Direction::North));
//! assert_eq!(Direction::North.delta(), (-1, 0));
//!
//! assert_eq!(InputSymbol::from_key_name("up"), Some(InputSymbol::TurnOrMoveNorth));
//! assert_eq!(InputSymbol::from_key_name("space"), Some(InputSymbol::Demolish));
//! assert_eq!(InputSymbol::TurnOrMoveWest.direction(), Some(Direction::West));
//!
//! assert!(BOARD_MIN < BOARD_MAX);
//! ```

use serde::{Deserialize, Serialize};

/// Smallest board side length a seed can produce.
pub const BOARD_MIN: u8 = 8;

/// Largest board side length a seed can produce.
pub const BOARD_MAX: u8 = 12;

/// Cell count of the largest board, used to size flat storage.
pub const MAX_CELLS: usize = (BOARD_MAX as usize) * (BOARD_MAX as usize);

/// Heaviest total tier the operator can push in one move.
pub const MAX_PUSH: u32 = 5;

/// Cumulative thresholds mapping a uniform draw to a tier.
///
/// A draw `r` becomes the index of the first threshold with `r < threshold`, so the
/// table must stay sorted and end at 1.0 (about 70% empty, 10% per crate tier).
pub const CRATE_WEIGHTS: [f64; 4] = [0.7, 0.8, 0.9, 1.0];

/// Score charged for a turn in place.
pub const SCORE_TURN: u32 = 0;

/// Score charged for a successful move.
pub const SCORE_MOVE: u32 = 1;

/// Score charged for a successful demolition.
pub const SCORE_DEMOLISH: u32 = 100;

/// A crate weight class. `0` is an empty cell.
pub type Tier = u8;

/// Tier of an empty cell.
pub const TIER_EMPTY: Tier = 0;

/// Heaviest crate tier.
pub const TIER_MAX: Tier = 3;

/// The four facings of the operator.
///
/// The numeric order matches the persisted encoding used by older saves:
/// North = 0, East = 1, South = 2, West = 3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    North,
    East,
    South,
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// One-cell step as `(d_row, d_col)`.
    ///
    /// ```
    /// use tui_warehouse_types::Direction;
    ///
    /// assert_eq!(Direction::North.delta(), (-1, 0));
    /// assert_eq!(Direction::East.delta(), (0, 1));
    /// assert_eq!(Direction::South.delta(), (1, 0));
    /// assert_eq!(Direction::West.delta(), (0, -1));
    /// ```
    pub fn delta(&self) -> (i8, i8) {
        match self {
            Direction::North => (-1, 0),
            Direction::East => (0, 1),
            Direction::South => (1, 0),
            Direction::West => (0, -1),
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Direction::North => 0,
            Direction::East => 1,
            Direction::South => 2,
            Direction::West => 3,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Parse direction from string
    ///
    /// Accepts full names or single letters (case-insensitive):
    /// "north" | "n", "east" | "e", "south" | "s", "west" | "w"
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "north" | "n" => Some(Direction::North),
            "east" | "e" => Some(Direction::East),
            "south" | "s" => Some(Direction::South),
            "west" | "w" => Some(Direction::West),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::North => "north",
            Direction::East => "east",
            Direction::South => "south",
            Direction::West => "west",
        }
    }
}

/// Discrete inputs a front-end can submit to a session.
///
/// A directional symbol turns the operator when it faces elsewhere and moves it
/// one cell when it already faces that way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputSymbol {
    TurnOrMoveNorth,
    TurnOrMoveEast,
    TurnOrMoveSouth,
    TurnOrMoveWest,
    /// Blow up the crate directly ahead.
    Demolish,
}

impl InputSymbol {
    pub const ALL: [InputSymbol; 5] = [
        InputSymbol::TurnOrMoveNorth,
        InputSymbol::TurnOrMoveEast,
        InputSymbol::TurnOrMoveSouth,
        InputSymbol::TurnOrMoveWest,
        InputSymbol::Demolish,
    ];

    /// The facing a directional symbol asks for; `None` for [`InputSymbol::Demolish`].
    pub fn direction(&self) -> Option<Direction> {
        match self {
            InputSymbol::TurnOrMoveNorth => Some(Direction::North),
            InputSymbol::TurnOrMoveEast => Some(Direction::East),
            InputSymbol::TurnOrMoveSouth => Some(Direction::South),
            InputSymbol::TurnOrMoveWest => Some(Direction::West),
            InputSymbol::Demolish => None,
        }
    }

    pub fn from_direction(direction: Direction) -> Self {
        match direction {
            Direction::North => InputSymbol::TurnOrMoveNorth,
            Direction::East => InputSymbol::TurnOrMoveEast,
            Direction::South => InputSymbol::TurnOrMoveSouth,
            Direction::West => InputSymbol::TurnOrMoveWest,
        }
    }

    /// Map a hotkey name to a symbol.
    ///
    /// Understands the names the web front-end binds: `w a s d`, `up left down right`
    /// and `space` (case-insensitive). Anything else is `None`.
    pub fn from_key_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "w" | "up" => Some(InputSymbol::TurnOrMoveNorth),
            "a" | "left" => Some(InputSymbol::TurnOrMoveWest),
            "s" | "down" => Some(InputSymbol::TurnOrMoveSouth),
            "d" | "right" => Some(InputSymbol::TurnOrMoveEast),
            "space" | " " => Some(InputSymbol::Demolish),
            _ => None,
        }
    }

    /// Parse the camelCase symbol name produced by [`InputSymbol::as_str`].
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "turnormovenorth" => Some(InputSymbol::TurnOrMoveNorth),
            "turnormoveeast" => Some(InputSymbol::TurnOrMoveEast),
            "turnormovesouth" => Some(InputSymbol::TurnOrMoveSouth),
            "turnormovewest" => Some(InputSymbol::TurnOrMoveWest),
            "demolish" => Some(InputSymbol::Demolish),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            InputSymbol::TurnOrMoveNorth => "turnOrMoveNorth",
            InputSymbol::TurnOrMoveEast => "turnOrMoveEast",
            InputSymbol::TurnOrMoveSouth => "turnOrMoveSouth",
            InputSymbol::TurnOrMoveWest => "turnOrMoveWest",
            InputSymbol::Demolish => "demolish",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_weights_are_sorted_and_cover_unit_interval() {
        assert!(CRATE_WEIGHTS.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(CRATE_WEIGHTS[CRATE_WEIGHTS.len() - 1], 1.0);
        assert_eq!(CRATE_WEIGHTS.len(), TIER_MAX as usize + 1);
    }

    #[test]
    fn direction_cycle_and_deltas() {
        for (i, dir) in Direction::ALL.iter().enumerate() {
            assert_eq!(dir.index(), i);
            assert_eq!(Direction::from_index(i), Some(*dir));
            let (dr, dc) = dir.delta();
            assert_eq!(dr.abs() + dc.abs(), 1);
        }
        assert_eq!(Direction::from_index(4), None);
    }

    #[test]
    fn input_symbol_from_direction_matches_direction() {
        for dir in Direction::ALL {
            assert_eq!(InputSymbol::from_direction(dir).direction(), Some(dir));
        }
        assert_eq!(InputSymbol::Demolish.direction(), None);
    }

    #[test]
    fn input_symbol_key_names_are_case_insensitive() {
        assert_eq!(InputSymbol::from_key_name("W"), Some(InputSymbol::TurnOrMoveNorth));
        assert_eq!(InputSymbol::from_key_name("Left"), Some(InputSymbol::TurnOrMoveWest));
        assert_eq!(InputSymbol::from_key_name("s"), Some(InputSymbol::TurnOrMoveSouth));
        assert_eq!(InputSymbol::from_key_name("RIGHT"), Some(InputSymbol::TurnOrMoveEast));
        assert_eq!(InputSymbol::from_key_name("Space"), Some(InputSymbol::Demolish));
        assert_eq!(InputSymbol::from_key_name("enter"), None);
    }

    #[test]
    fn input_symbol_round_trips_through_as_str() {
        for symbol in InputSymbol::ALL {
            assert_eq!(InputSymbol::from_str(symbol.as_str()), Some(symbol));
        }
    }
}
