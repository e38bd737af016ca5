//! TUI Warehouse (workspace facade crate).
//!
//! Re-exports the workspace crates as `tui_warehouse::{core,input,term,types}` and owns
//! the runtime [`config`] of the terminal game.

pub mod config;

pub use tui_warehouse_core as core;
pub use tui_warehouse_input as input;
pub use tui_warehouse_term as term;
pub use tui_warehouse_types as types;
