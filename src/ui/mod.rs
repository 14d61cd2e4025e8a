//! User Interface module for the shopping list application.
//!
//! Contains components for rendering and managing the terminal UI,
//! including event handling, application state, and UI components.
mod app;
mod event;
mod guard;
mod list_panel;
pub mod logging;

pub use app::{App, AppMode, DialogField};
pub use event::{Event, EventHandler};
pub use guard::{TerminalGuard, init_panic_hook, init_tui};
pub use list_panel::{InlineEdit, ListPanel};
