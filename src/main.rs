use anyhow::Result;
use clap::{Arg, ArgAction, Command};
use crossterm::event::KeyCode;
use log::{LevelFilter, info};
use ratatui::Terminal;
use ratatui::backend::Backend as RatatuiBackend;
use shoplist::{App, AppMode, Event, EventHandler};
use shoplist::{TerminalGuard, init_panic_hook, init_tui, logging};
use std::time::Duration;

fn main() -> Result<()>
{
    init_panic_hook();

    // Parse command line arguments
    let matches = Command::new("shoplist")
        .about("A terminal-based shopping list manager")
        // Inform about the log location; the list itself is never
        // written anywhere.
        .after_help(format!(
            "The list lives in memory only and starts empty on every launch.\nLogs are \
             written to: {}",
            logging::log_file_path()
                .map_or_else(|_| "<unavailable>".to_owned(), |path| path
                    .display()
                    .to_string())
        ))
        .arg(
            Arg::new("clear-log")
                .long("clear-log")
                .help("Remove the log files and exit")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .value_name("LEVEL")
                .help("Log level for this crate (error, warn, info, debug, trace)"),
        )
        .get_matches();

    // Clear logs if requested
    if matches.get_flag("clear-log")
    {
        logging::clear_log_file()?;
        println!("Log files removed");
        return Ok(());
    }

    let level = matches
        .get_one::<String>("log-level")
        .and_then(|value| value.parse::<LevelFilter>().ok())
        .unwrap_or(LevelFilter::Debug);

    logging::init_logging(level)?;
    info!("Starting shoplist");

    // Use RAII to ensure terminal cleanup happens
    let _terminal_guard = TerminalGuard::new()?;

    let mut terminal = init_tui()?;

    // The list always starts empty
    let app = App::new();

    // Create event handler with 250ms tick rate
    let event_handler = EventHandler::new(Duration::from_millis(250));

    // Terminal will be cleaned up automatically when _terminal_guard is dropped
    // Just propagate any error from run_app
    run_app(&mut terminal, app, &event_handler)
}

/// Run the main loop
///
/// Draws the current state, then dispatches the next key on the
/// `(mode, key)` pair. Every branch is a single store or app operation
/// that completes before the next draw.
///
/// # Errors
///
/// Returns an error if the terminal fails to draw to the screen.
fn run_app<T: RatatuiBackend>(
    terminal: &mut Terminal<T>,
    mut app: App,
    event_handler: &EventHandler,
) -> Result<()>
where
    <T as RatatuiBackend>::Error: Send + Sync + 'static,
{
    loop
    {
        terminal.draw(|frame| app.render(frame))?;

        if let Event::Key(key) = event_handler.next()?
        {
            match (app.mode, key.code)
            {
                // Quit with 'q' while browsing
                (AppMode::Normal, KeyCode::Char('q')) =>
                {
                    app.should_quit = true;
                }

                // Help toggle with '?'
                (AppMode::Normal | AppMode::Help, KeyCode::Char('?')) |
                (AppMode::Help, KeyCode::Esc) =>
                {
                    app.toggle_help();
                }

                // Selection movement while browsing
                (AppMode::Normal, KeyCode::Char('j') | KeyCode::Down) =>
                {
                    app.select_next();
                }
                (AppMode::Normal, KeyCode::Char('k') | KeyCode::Up) =>
                {
                    app.select_previous();
                }
                (AppMode::Normal, KeyCode::Char('g') | KeyCode::Home) =>
                {
                    app.select_first();
                }
                (AppMode::Normal, KeyCode::Char('G') | KeyCode::End) =>
                {
                    app.select_last();
                }

                // List mutation
                (AppMode::Normal, KeyCode::Char('a')) =>
                {
                    app.open_add_dialog();
                }
                (AppMode::Normal, KeyCode::Char('e') | KeyCode::Enter) =>
                {
                    app.begin_edit_selected();
                }
                (AppMode::Normal, KeyCode::Char('d') | KeyCode::Delete) =>
                {
                    app.delete_selected();
                }

                // Add dialog input
                (AppMode::AddDialog, KeyCode::Enter) =>
                {
                    app.confirm_add();
                }
                (AppMode::AddDialog, KeyCode::Esc) =>
                {
                    app.cancel_add_dialog();
                }
                (AppMode::AddDialog, KeyCode::Tab) =>
                {
                    app.toggle_focus();
                }
                (AppMode::AddDialog, KeyCode::Backspace) =>
                {
                    app.dialog_backspace();
                }
                (AppMode::AddDialog, KeyCode::Char(letter)) =>
                {
                    app.dialog_char(letter);
                }

                // Inline editor input
                (AppMode::EditEntry, KeyCode::Enter) =>
                {
                    app.commit_edit();
                }
                (AppMode::EditEntry, KeyCode::Esc) =>
                {
                    app.cancel_edit();
                }
                (AppMode::EditEntry, KeyCode::Tab) =>
                {
                    app.toggle_focus();
                }
                (AppMode::EditEntry, KeyCode::Backspace) =>
                {
                    app.edit_backspace();
                }
                (AppMode::EditEntry, KeyCode::Char(letter)) =>
                {
                    app.edit_char(letter);
                }

                _ =>
                {} // Ignore other key combinations
            }
        }

        if app.should_quit
        {
            break;
        }
    }

    info!("Exiting shoplist");

    Ok(())
}
