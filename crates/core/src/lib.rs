//! Core puzzle logic - pure, deterministic, and testable
//!
//! Everything that decides what happens in a warehouse session lives here. The crate
//! performs no I/O: a front-end hands it a seed and input symbols, and reads back the
//! resulting [`SessionState`].
//!
//! # Module Structure
//!
//! - [`rng`]: seed-string keyed random stream
//! - [`board`]: square grid of crate tiers with push-chain scanning
//! - [`generator`]: seed to initial level
//! - [`game_state`]: session state with the turn, move and demolish actions and win detection
//! - [`snapshot`]: session codec for suspend/resume
//! - [`error`]: generation and codec errors
//!
//! # Rules
//!
//! - A directional input turns the operator; the same input again moves it one cell.
//! - Moving pushes the whole line of crates ahead, provided the line ends in an empty
//!   cell before the edge and its tiers sum to at most 5.
//! - Demolish removes the crate directly ahead, except the target crate.
//! - The session is won when the target crate reaches the door on the bottom row.
//!
//! # Example
//!
//! ```
//! use tui_warehouse_core::{snapshot, SessionState};
//! use tui_warehouse_types::InputSymbol;
//!
//! let mut session = SessionState::new("1234").unwrap();
//! assert_eq!(session.board().size(), 9);
//!
//! // Facing north already: this moves.
//! session.apply_input(InputSymbol::TurnOrMoveNorth);
//! // Facing north, asked for east: this only turns.
//! session.apply_input(InputSymbol::TurnOrMoveEast);
//! assert_eq!(session.score(), 1);
//!
//! let blob = snapshot::serialize(&session).unwrap();
//! assert_eq!(snapshot::deserialize(&blob).unwrap(), session);
//! ```

pub mod board;
pub mod error;
pub mod game_state;
pub mod generator;
pub mod rng;
pub mod snapshot;

pub use tui_warehouse_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, PushChain};
pub use error::{FormatError, GenerationError};
pub use game_state::{apply_input, check_win, Operator, SessionState};
pub use generator::generate;
pub use rng::SeedRng;
pub use snapshot::{deserialize, serialize, SessionSnapshot};
