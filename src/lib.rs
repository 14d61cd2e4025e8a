//! Shopping List Library
//!
//! A library for managing a shopping list and displaying it in a
//! terminal interface.
//!
//! # Features
//!
//! - In-memory list of items with name and quantity
//! - Adding items through a dialog with draft input buffers
//! - Inline editing and deletion of existing items
//! - Terminal-based user interface with keyboard navigation
//!
//! # Modules
//!
//! - `store`: The list state machine and its mutation rules
//! - `ui`: Terminal user interface components and event handling
pub mod store;
pub mod ui;

pub use store::{Entry, EntryId, ListStore};
pub use ui::logging;
pub use ui::{App, AppMode, DialogField, Event, EventHandler};
pub use ui::{TerminalGuard, init_panic_hook, init_tui};
