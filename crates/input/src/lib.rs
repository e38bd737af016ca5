//! Terminal input module.
//!
//! Maps `crossterm` key events onto [`crate::types::InputSymbol`] for the simulation
//! and onto [`MetaAction`] for session commands. Key-name parsing for non-terminal
//! front-ends lives on `InputSymbol::from_key_name` in the types crate.

pub mod map;

pub use tui_warehouse_types as types;

pub use map::{handle_key_event, meta_action, should_quit, MetaAction};
