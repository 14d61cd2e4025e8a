//! Entry List Panel
//!
//! Renders the shopping list with a selection cursor and tracks which
//! row is selected.
//!
//! The entry currently in edit mode is drawn as a pair of inline input
//! fields instead of its read-only row.
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap};
use textwrap::wrap;

use super::app::DialogField;
use crate::store::{Entry, ListStore};

const LIST_HIGHLIGHT_STYLE: Style = Style::new()
    .fg(Color::LightYellow)
    .add_modifier(Modifier::BOLD);

const LIST_BORDER_STYLE: Style = Style::new().fg(Color::Gray);

const EDITOR_STYLE: Style = Style::new().fg(Color::LightGreen);

const LIST_HIGHLIGHT_SYMBOL: &str = "> ";

/// Borrowed view of the inline editor buffers.
///
/// Built by the caller for the entry in edit mode; the panel only
/// renders it.
pub struct InlineEdit<'buffers>
{
    /// Name text being edited
    pub name: &'buffers str,
    /// Quantity text being edited
    pub quantity: &'buffers str,
    /// Which of the two fields receives keystrokes
    pub focus: DialogField,
}

/// Panel that displays the entry list and tracks the selected row.
#[derive(Default)]
pub struct ListPanel
{
    /// Current selection state
    state: ListState,
}

impl ListPanel
{
    /// Creates a panel with nothing selected.
    #[must_use]
    pub fn new() -> Self
    {
        Self::default()
    }

    /// Index of the currently selected row.
    #[must_use]
    pub fn selected(&self) -> Option<usize>
    {
        self.state.selected()
    }

    /// Renders the list to the specified area.
    ///
    /// # Arguments
    ///
    /// * `frame` - The frame to render to
    /// * `area` - The area within the frame to render the panel
    /// * `store` - The list state to draw
    /// * `editor` - Inline editor buffers for the entry in edit mode
    pub fn render(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        store: &ListStore,
        editor: Option<&InlineEdit<'_>>,
    )
    {
        let title = format!("Shopping List ({} items) - Press ? for help", store.len());

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(LIST_BORDER_STYLE)
            .title(title)
            .title_style(
                Style::new()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            );

        if store.is_empty()
        {
            let hint = Paragraph::new("The list is empty. Press 'a' to add an item.")
                .block(block)
                .wrap(Wrap { trim: true });

            frame.render_widget(hint, area);
            return;
        }

        // Long names need to be wrapped to fit within the panel width.
        // 2 for the border
        let wrap_width = (area.width as usize)
            .saturating_sub(LIST_HIGHLIGHT_SYMBOL.len() + 2)
            .max(1);

        // With repeated ids the first match is the one in edit mode,
        // same rule the store applies on commit.
        let edit_index = store
            .editing()
            .and_then(|id| {
                store
                    .entries()
                    .iter()
                    .position(|entry| entry.id == id)
            });

        let items: Vec<ListItem> = store
            .entries()
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                match editor
                {
                    Some(editor) if Some(index) == edit_index => editor_item(editor),
                    _ => entry_item(entry, wrap_width),
                }
            })
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(LIST_HIGHLIGHT_STYLE)
            .highlight_symbol(LIST_HIGHLIGHT_SYMBOL);

        frame.render_stateful_widget(list, area, &mut self.state);
    }

    /// Moves the selection one row down.
    pub fn next(&mut self, len: usize)
    {
        if len == 0
        {
            return;
        }

        let index = self.state.selected().unwrap_or(0);
        self.state
            .select(Some(index.saturating_add(1).min(len - 1)));
    }

    /// Moves the selection one row up.
    pub fn previous(&mut self)
    {
        if let Some(index) = self.state.selected()
        {
            self.state.select(Some(index.saturating_sub(1)));
        }
    }

    /// Moves the selection to the first row.
    pub fn first(&mut self, len: usize)
    {
        if len > 0
        {
            self.state.select(Some(0));
        }
    }

    /// Moves the selection to the last row.
    pub fn last(&mut self, len: usize)
    {
        if len > 0
        {
            self.state.select(Some(len - 1));
        }
    }

    /// Pulls the selection back into bounds after the list changed.
    ///
    /// An empty list deselects; a selection past the end moves to the
    /// last row. A missing selection on a non-empty list also lands on
    /// the last row, which is where a freshly added entry sits.
    pub fn clamp(&mut self, len: usize)
    {
        if len == 0
        {
            self.state.select(None);
        }
        else if self
            .state
            .selected()
            .is_none_or(|index| index >= len)
        {
            self.state.select(Some(len - 1));
        }
    }
}

/// Read-only row for an entry, wrapped to the panel width.
fn entry_item(entry: &Entry, wrap_width: usize) -> ListItem<'static>
{
    let text = format!("Item: {}  Qty: {}", entry.name, entry.quantity);

    let lines: Vec<Line> = wrap(&text, wrap_width)
        .into_iter()
        .map(|piece| Line::raw(piece.into_owned()))
        .collect();

    ListItem::new(lines)
}

/// Inline input fields for the entry in edit mode.
fn editor_item(editor: &InlineEdit<'_>) -> ListItem<'static>
{
    let marker = |field| {
        if editor.focus == field
        {
            "> "
        }
        else
        {
            "  "
        }
    };

    let lines = vec![
        Line::raw(format!(
            "{}Name: {}",
            marker(DialogField::Name),
            editor.name
        )),
        Line::raw(format!(
            "{}Qty:  {}",
            marker(DialogField::Quantity),
            editor.quantity
        )),
    ];

    ListItem::new(lines).style(EDITOR_STYLE)
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn next_stops_at_the_last_row()
    {
        let mut panel = ListPanel::new();

        panel.next(2);
        panel.next(2);
        panel.next(2);

        assert_eq!(panel.selected(), Some(1));
    }

    #[test]
    fn next_on_an_empty_list_selects_nothing()
    {
        let mut panel = ListPanel::new();

        panel.next(0);

        assert_eq!(panel.selected(), None);
    }

    #[test]
    fn previous_stops_at_the_first_row()
    {
        let mut panel = ListPanel::new();
        panel.next(3);
        panel.next(3);

        panel.previous();
        panel.previous();
        panel.previous();

        assert_eq!(panel.selected(), Some(0));
    }

    #[test]
    fn clamp_moves_a_stale_selection_to_the_last_row()
    {
        let mut panel = ListPanel::new();
        panel.next(3);
        panel.next(3);

        panel.clamp(1);

        assert_eq!(panel.selected(), Some(0));
    }

    #[test]
    fn clamp_deselects_when_the_list_empties()
    {
        let mut panel = ListPanel::new();
        panel.next(1);

        panel.clamp(0);

        assert_eq!(panel.selected(), None);
    }

    #[test]
    fn clamp_selects_the_last_row_after_a_first_add()
    {
        let mut panel = ListPanel::new();

        panel.clamp(2);

        assert_eq!(panel.selected(), Some(1));
    }
}
