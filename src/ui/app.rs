//! Application module for the shopping list.
//!
//! Provides the main application state: the list store itself, the
//! input mode, the inline editor buffers, and the rendering of the
//! screen including the add dialog and help overlays.
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Text},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use super::list_panel::{InlineEdit, ListPanel};
use crate::store::ListStore;

/// Application mode that determines the current UI state.
///
/// Controls what is displayed and how user input is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode
{
    /// Browsing the list - default state
    Normal,
    /// The add dialog is accepting input
    AddDialog,
    /// An entry is being edited inline
    EditEntry,
    /// Help overlay is displayed
    Help,
}

/// Which input field of the add dialog or the inline editor has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogField
{
    /// The item name field
    Name,
    /// The quantity field
    Quantity,
}

/// Main application state for the shopping list.
///
/// Owns the list store and translates user intents into store
/// operations; rendering reads the store back every frame.
pub struct App
{
    /// The list itself plus the add dialog state
    pub store: ListStore,
    /// Current application mode
    pub mode: AppMode,
    /// Focused field while a dialog or the inline editor is open
    pub focus: DialogField,
    /// Name buffer of the inline editor
    pub edit_name: String,
    /// Quantity buffer of the inline editor
    pub edit_quantity: String,
    /// Flag indicating if the application should exit
    pub should_quit: bool,
    /// Selection and rendering of the entry rows
    pub panel: ListPanel,
}

impl App
{
    /// Creates a new App with an empty list.
    ///
    /// The list always starts empty; nothing is carried over between
    /// launches.
    #[must_use]
    pub fn new() -> Self
    {
        Self {
            store: ListStore::new(),
            mode: AppMode::Normal,
            focus: DialogField::Name,
            edit_name: String::new(),
            edit_quantity: String::new(),
            should_quit: false,
            panel: ListPanel::new(),
        }
    }

    /// Renders the application UI to the provided frame.
    pub fn render(&mut self, frame: &mut Frame)
    {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1)])
            .split(frame.area());

        let editor = if self.mode == AppMode::EditEntry
        {
            Some(InlineEdit {
                name: &self.edit_name,
                quantity: &self.edit_quantity,
                focus: self.focus,
            })
        }
        else
        {
            None
        };

        self.panel
            .render(frame, chunks[0], &self.store, editor.as_ref());

        // Overlays draw on top of the list.
        if self.store.dialog_open()
        {
            self.render_add_dialog(frame);
        }

        if self.mode == AppMode::Help
        {
            Self::render_help(frame);
        }
    }

    /// Renders the add dialog as a centered popup.
    fn render_add_dialog(&self, frame: &mut Frame)
    {
        let area = centered_rect(50, 30, frame.area());

        // Clear the area first to make it fully opaque
        frame.render_widget(Clear, area);

        let marker = |field| {
            if self.focus == field
            {
                "> "
            }
            else
            {
                "  "
            }
        };

        let text = Text::from(vec![
            Line::from(format!(
                "{}Name:     {}",
                marker(DialogField::Name),
                self.store.draft_name()
            )),
            Line::from(format!(
                "{}Quantity: {}",
                marker(DialogField::Quantity),
                self.store.draft_quantity()
            )),
            Line::from(""),
            Line::from("Enter: add  Tab: switch field  Esc: close"),
        ]);

        let dialog = Paragraph::new(text)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Add Item")
                    .style(Style::default()),
            )
            .style(Style::default());

        frame.render_widget(dialog, area);
    }

    /// Renders the help overlay with keyboard shortcuts.
    fn render_help(frame: &mut Frame)
    {
        let area = centered_rect(60, 60, frame.area());

        // Clear the area first to make it fully opaque
        frame.render_widget(Clear, area);

        let text = Text::from(vec![
            Line::from("Shopping List Help:"),
            Line::from(""),
            Line::from("j/k or ↓/↑: Move selection down/up"),
            Line::from("g/G: Go to first/last item"),
            Line::from("a: Add an item"),
            Line::from("e or Enter: Edit the selected item"),
            Line::from("d or Del: Delete the selected item"),
            Line::from("Tab: Switch input field"),
            Line::from("Enter/Esc: Confirm/cancel an input"),
            Line::from("q: Quit"),
            Line::from("?: Toggle help"),
        ]);

        let help_box = Paragraph::new(text)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Help")
                    .style(Style::default()),
            )
            .style(Style::default())
            .wrap(Wrap { trim: true });

        frame.render_widget(help_box, area);
    }

    /// Opens the add dialog with focus on the name field.
    pub fn open_add_dialog(&mut self)
    {
        self.store.open_add_dialog();
        self.mode = AppMode::AddDialog;
        self.focus = DialogField::Name;
    }

    /// Closes the add dialog without adding; the drafts are kept for
    /// the next time the dialog opens.
    pub fn cancel_add_dialog(&mut self)
    {
        self.store.close_add_dialog();
        self.mode = AppMode::Normal;
    }

    /// Tries to add an entry from the drafts.
    ///
    /// When the store rejects the input the dialog stays open so the
    /// user can correct it; there is no error message.
    pub fn confirm_add(&mut self)
    {
        if self.store.confirm_add()
        {
            self.mode = AppMode::Normal;
            self.panel.clamp(self.store.len());
        }
    }

    /// Routes a typed character into the focused draft field.
    pub fn dialog_char(&mut self, letter: char)
    {
        match self.focus
        {
            DialogField::Name => self.store.push_draft_name(letter),
            DialogField::Quantity => self.store.push_draft_quantity(letter),
        }
    }

    /// Removes the last character of the focused draft field.
    pub fn dialog_backspace(&mut self)
    {
        match self.focus
        {
            DialogField::Name => self.store.pop_draft_name(),
            DialogField::Quantity => self.store.pop_draft_quantity(),
        }
    }

    /// Moves focus to the other input field.
    pub fn toggle_focus(&mut self)
    {
        self.focus = match self.focus
        {
            DialogField::Name => DialogField::Quantity,
            DialogField::Quantity => DialogField::Name,
        };
    }

    /// Starts editing the selected entry.
    ///
    /// Seeds the inline editor buffers from the entry so the current
    /// values can be amended rather than retyped. Does nothing when the
    /// list is empty.
    pub fn begin_edit_selected(&mut self)
    {
        let Some(index) = self.panel.selected()
        else
        {
            return;
        };

        let Some(entry) = self.store.entries().get(index)
        else
        {
            return;
        };

        self.edit_name = entry.name.clone();
        self.edit_quantity = entry.quantity.to_string();
        let id = entry.id;

        self.store.begin_edit(id);
        self.mode = AppMode::EditEntry;
        self.focus = DialogField::Name;
    }

    /// Routes a typed character into the focused editor buffer.
    pub fn edit_char(&mut self, letter: char)
    {
        match self.focus
        {
            DialogField::Name => self.edit_name.push(letter),
            DialogField::Quantity => self.edit_quantity.push(letter),
        }
    }

    /// Removes the last character of the focused editor buffer.
    pub fn edit_backspace(&mut self)
    {
        match self.focus
        {
            DialogField::Name =>
            {
                self.edit_name.pop();
            }
            DialogField::Quantity =>
            {
                self.edit_quantity.pop();
            }
        }
    }

    /// Saves the inline editor buffers into the edited entry.
    pub fn commit_edit(&mut self)
    {
        if let Some(id) = self.store.editing()
        {
            self.store
                .commit_edit(id, &self.edit_name, &self.edit_quantity);
        }

        self.mode = AppMode::Normal;
    }

    /// Leaves the inline editor without saving.
    pub fn cancel_edit(&mut self)
    {
        self.store.cancel_edit();
        self.mode = AppMode::Normal;
    }

    /// Deletes the selected entry.
    pub fn delete_selected(&mut self)
    {
        let Some(id) = self
            .panel
            .selected()
            .and_then(|index| self.store.entries().get(index))
            .map(|entry| entry.id)
        else
        {
            return;
        };

        self.store.delete_entry(id);
        self.panel.clamp(self.store.len());
    }

    /// Moves the selection one row down.
    pub fn select_next(&mut self)
    {
        self.panel.next(self.store.len());
    }

    /// Moves the selection one row up.
    pub fn select_previous(&mut self)
    {
        self.panel.previous();
    }

    /// Moves the selection to the first row.
    pub fn select_first(&mut self)
    {
        self.panel.first(self.store.len());
    }

    /// Moves the selection to the last row.
    pub fn select_last(&mut self)
    {
        self.panel.last(self.store.len());
    }

    /// Toggles the help overlay.
    pub fn toggle_help(&mut self)
    {
        self.mode = if self.mode == AppMode::Help
        {
            AppMode::Normal
        }
        else
        {
            AppMode::Help
        };
    }
}

impl Default for App
{
    fn default() -> Self
    {
        Self::new()
    }
}

/// Creates a centered rectangle inside the given area.
///
/// # Arguments
///
/// * `percent_x` - Width of the rectangle as a percentage of the parent area
/// * `percent_y` - Height of the rectangle as a percentage of the parent area
/// * `area` - Parent rectangle
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect
{
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests
{
    use super::*;

    /// Types a word into the focused dialog field.
    fn type_into_dialog(app: &mut App, word: &str)
    {
        for letter in word.chars()
        {
            app.dialog_char(letter);
        }
    }

    #[test]
    fn add_flow_routes_keys_into_the_focused_draft()
    {
        let mut app = App::new();

        app.open_add_dialog();
        type_into_dialog(&mut app, "Milk");
        app.toggle_focus();
        type_into_dialog(&mut app, "2");

        assert_eq!(app.store.draft_name(), "Milk");
        assert_eq!(app.store.draft_quantity(), "2");

        app.confirm_add();

        assert_eq!(app.mode, AppMode::Normal);
        assert_eq!(app.store.entries()[0].name, "Milk");
        assert_eq!(app.panel.selected(), Some(0));
    }

    #[test]
    fn rejected_add_keeps_the_dialog_open()
    {
        let mut app = App::new();

        app.open_add_dialog();
        type_into_dialog(&mut app, "Milk");
        app.toggle_focus();
        type_into_dialog(&mut app, "two");
        app.confirm_add();

        assert_eq!(app.mode, AppMode::AddDialog);
        assert!(app.store.dialog_open());
        assert!(app.store.is_empty());
    }

    #[test]
    fn cancelling_the_dialog_keeps_the_drafts()
    {
        let mut app = App::new();

        app.open_add_dialog();
        type_into_dialog(&mut app, "Mi");
        app.dialog_backspace();
        app.cancel_add_dialog();

        assert_eq!(app.mode, AppMode::Normal);
        assert_eq!(app.store.draft_name(), "M");
    }

    #[test]
    fn edit_flow_seeds_buffers_and_commits()
    {
        let mut app = App::new();
        app.store.add_entry("Eggs", "2");
        app.panel.clamp(app.store.len());

        app.begin_edit_selected();

        assert_eq!(app.mode, AppMode::EditEntry);
        assert_eq!(app.edit_name, "Eggs");
        assert_eq!(app.edit_quantity, "2");

        app.edit_backspace();
        app.edit_backspace();
        app.edit_backspace();
        app.edit_backspace();
        for letter in "Milk".chars()
        {
            app.edit_char(letter);
        }
        app.toggle_focus();
        app.edit_backspace();
        app.edit_char('3');

        app.commit_edit();

        assert_eq!(app.mode, AppMode::Normal);
        assert_eq!(app.store.entries()[0].name, "Milk");
        assert_eq!(app.store.entries()[0].quantity, 3);
        assert_eq!(app.store.editing(), None);
    }

    #[test]
    fn cancelling_an_edit_keeps_the_entry()
    {
        let mut app = App::new();
        app.store.add_entry("Eggs", "2");
        app.panel.clamp(app.store.len());

        app.begin_edit_selected();
        app.edit_char('!');
        app.cancel_edit();

        assert_eq!(app.mode, AppMode::Normal);
        assert_eq!(app.store.entries()[0].name, "Eggs");
        assert_eq!(app.store.editing(), None);
    }

    #[test]
    fn editing_with_an_empty_list_does_nothing()
    {
        let mut app = App::new();

        app.begin_edit_selected();

        assert_eq!(app.mode, AppMode::Normal);
    }

    #[test]
    fn deleting_keeps_the_selection_in_bounds()
    {
        let mut app = App::new();
        app.store.add_entry("Bread", "2");
        app.store.add_entry("Milk", "1");
        app.select_last();

        app.delete_selected();

        assert_eq!(app.store.len(), 1);
        assert_eq!(app.panel.selected(), Some(0));

        app.delete_selected();

        assert!(app.store.is_empty());
        assert_eq!(app.panel.selected(), None);
    }

    #[test]
    fn help_toggles_back_to_normal()
    {
        let mut app = App::new();

        app.toggle_help();
        assert_eq!(app.mode, AppMode::Help);

        app.toggle_help();
        assert_eq!(app.mode, AppMode::Normal);
    }
}
