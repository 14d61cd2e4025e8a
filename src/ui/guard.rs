//! Provides a RAII guard for safe terminal lifecycle management.
//!
//! A guard object is created to initialize the TUI, and its `Drop`
//! implementation automatically restores the terminal when it goes out
//! of scope, either on normal exit or during a panic unwind.
use std::io::{Result as IoResult, stdout};
use std::panic::{set_hook, take_hook};

use crossterm::ExecutableCommand;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
    enable_raw_mode,
};
use log::error;
use ratatui::Terminal;
use ratatui::backend::{Backend as RatatuiBackend, CrosstermBackend};

/// RAII wrapper for terminal state.
///
/// Manages the terminal's configuration, ensuring it is always returned
/// to its original state when this struct is dropped.
pub struct TerminalGuard;

impl TerminalGuard
{
    /// Creates a `TerminalGuard` for TUI setup.
    ///
    /// Configures the terminal by entering raw mode and switching to the
    /// alternate screen buffer.
    ///
    /// # Errors
    ///
    /// On failure to enter raw mode or switch screens.
    pub fn new() -> IoResult<Self>
    {
        enable_raw_mode()?;
        stdout().execute(EnterAlternateScreen)?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard
{
    /// Restores the terminal state.
    ///
    /// Exits raw mode and returns to the main screen, ensuring a clean
    /// terminal state.
    fn drop(&mut self)
    {
        // Terminal will be borked when failure, at least inform the user
        if let Err(err) = disable_raw_mode()
        {
            error!("Failed to disable raw mode: {err}");
        }

        if let Err(err) = stdout().execute(LeaveAlternateScreen)
        {
            error!("Failed to leave alternate screen: {err}");
        }
    }
}

/// Initialize the terminal
///
/// Terminal setup itself is handled by `TerminalGuard`; this only
/// creates the terminal on top of the configured stdout.
///
/// # Errors
///
/// Returns an error if the backend cannot be created.
pub fn init_tui() -> IoResult<Terminal<impl RatatuiBackend<Error: Send + Sync + 'static>>>
{
    let backend = CrosstermBackend::new(stdout());
    Terminal::new(backend)
}

/// Initialize the panic hook to handle panics
///
/// Restores the terminal before the default hook prints the panic, so
/// the message lands on a usable screen. Restoration failures are only
/// logged; panicking inside a panic hook would abort.
pub fn init_panic_hook()
{
    let original_hook = take_hook();
    set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = stdout().execute(LeaveAlternateScreen);

        error!("Application panicked: {panic_info}");

        // Call the original panic hook
        original_hook(panic_info);
    }));
}
