//! In-memory state for the shopping list.
//!
//! Holds the ordered collection of entries together with the transient
//! UI state the list depends on: the draft buffers backing the "add item"
//! dialog, the dialog visibility flag, and the id of the entry currently
//! being edited.
//!
//! The store is a plain pull-model state machine. The UI reads the
//! accessors after every operation and never gets notified; each
//! operation runs to completion on the caller's thread.
use log::{debug, info};

/// Identifier handed to an entry when it is created.
///
/// Ids track the current list length at creation time, so an id freed by
/// a deletion can be handed out again. See `delete_entry` and the test
/// pinning this behavior.
pub type EntryId = usize;

/// Quantity substituted when edited quantity text does not parse.
const FALLBACK_QUANTITY: i32 = 1;

/// One shopping-list line item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry
{
    /// Identifier assigned at creation time
    pub id: EntryId,
    /// Display name of the item
    pub name: String,
    /// How many of the item to buy
    pub quantity: i32,
}

/// The list state machine.
///
/// Owns everything the screen needs to draw itself: the entries, the add
/// dialog drafts and visibility, and which entry (if any) is in edit
/// mode. At most one entry is editable at a time, enforced by keeping a
/// single optional id rather than a flag per entry.
#[derive(Debug, Default)]
pub struct ListStore
{
    /// Entries in insertion order
    entries: Vec<Entry>,
    /// Id of the entry currently in edit mode, if any
    editing: Option<EntryId>,
    /// Draft text for the name field of the add dialog
    draft_name: String,
    /// Draft text for the quantity field of the add dialog
    draft_quantity: String,
    /// Whether the add dialog is shown
    dialog_open: bool,
}

impl ListStore
{
    /// Creates an empty store.
    ///
    /// # Returns
    ///
    /// A store with no entries, empty drafts, and the dialog closed.
    #[must_use]
    pub fn new() -> Self
    {
        Self::default()
    }

    /// Appends a new entry built from the given name and quantity text.
    ///
    /// Empty arguments and quantity text that does not parse as an
    /// integer block the add without reporting an error; the dialog
    /// stays open so the user can fix the input. On success the drafts
    /// are cleared and the dialog closes.
    ///
    /// # Arguments
    ///
    /// * `name` - Display name for the new entry
    /// * `quantity_text` - Raw quantity text, parsed here
    ///
    /// # Returns
    ///
    /// `true` if an entry was appended, `false` if the input was
    /// rejected.
    pub fn add_entry(&mut self, name: &str, quantity_text: &str) -> bool
    {
        if name.is_empty() || quantity_text.is_empty()
        {
            debug!("Rejected add: empty name or quantity");
            return false;
        }

        let Ok(quantity) = quantity_text.parse::<i32>()
        else
        {
            debug!("Rejected add: quantity {quantity_text:?} is not a number");
            return false;
        };

        // The next id is derived from the current length, not a counter.
        let entry = Entry {
            id: self.entries.len() + 1,
            name: name.to_owned(),
            quantity,
        };

        info!("Added item {:?} (id {})", entry.name, entry.id);
        self.entries.push(entry);

        self.draft_name.clear();
        self.draft_quantity.clear();
        self.dialog_open = false;

        true
    }

    /// Appends a new entry built from the current drafts.
    ///
    /// # Returns
    ///
    /// `true` if an entry was appended, `false` if the drafts were
    /// rejected (they are left untouched in that case).
    pub fn confirm_add(&mut self) -> bool
    {
        let name = self.draft_name.clone();
        let quantity_text = self.draft_quantity.clone();

        self.add_entry(&name, &quantity_text)
    }

    /// Puts the first entry with the given id into edit mode.
    ///
    /// Any previous edit mode is cleared first, so at most one entry is
    /// ever editable. When no entry matches, edit mode simply stays
    /// cleared.
    ///
    /// # Arguments
    ///
    /// * `id` - Id of the entry to edit
    pub fn begin_edit(&mut self, id: EntryId)
    {
        self.editing = self
            .entries
            .iter()
            .any(|entry| entry.id == id)
            .then_some(id);
    }

    /// Overwrites name and quantity of the first entry with the given id
    /// and leaves edit mode.
    ///
    /// Quantity text that does not parse is replaced with a default of
    /// 1 instead of being rejected. Edit mode is cleared even when no
    /// entry matches the id.
    ///
    /// # Arguments
    ///
    /// * `id` - Id of the entry to update
    /// * `new_name` - Replacement name
    /// * `new_quantity_text` - Raw replacement quantity text
    pub fn commit_edit(&mut self, id: EntryId, new_name: &str, new_quantity_text: &str)
    {
        self.editing = None;

        if let Some(entry) = self
            .entries
            .iter_mut()
            .find(|entry| entry.id == id)
        {
            entry.name = new_name.to_owned();
            entry.quantity = new_quantity_text
                .parse()
                .unwrap_or(FALLBACK_QUANTITY);

            info!("Saved item {:?} (id {})", entry.name, entry.id);
        }
        else
        {
            debug!("Ignored edit of unknown id {id}");
        }
    }

    /// Leaves edit mode without touching any entry.
    pub fn cancel_edit(&mut self)
    {
        self.editing = None;
    }

    /// Removes the first entry with the given id.
    ///
    /// The relative order of the remaining entries is preserved. Ids are
    /// not reassigned, and since new ids follow the list length, a later
    /// add can repeat an id that is still in use. Unknown ids are
    /// ignored.
    ///
    /// # Arguments
    ///
    /// * `id` - Id of the entry to remove
    pub fn delete_entry(&mut self, id: EntryId)
    {
        let Some(index) = self
            .entries
            .iter()
            .position(|entry| entry.id == id)
        else
        {
            debug!("Ignored delete of unknown id {id}");
            return;
        };

        let removed = self.entries.remove(index);
        info!("Deleted item {:?} (id {})", removed.name, removed.id);

        if self.editing == Some(id)
        {
            self.editing = None;
        }
    }

    /// Shows the add dialog.
    pub fn open_add_dialog(&mut self)
    {
        self.dialog_open = true;
    }

    /// Hides the add dialog.
    ///
    /// The drafts survive; only a successful add clears them.
    pub fn close_add_dialog(&mut self)
    {
        self.dialog_open = false;
    }

    /// Replaces the name draft.
    pub fn set_draft_name(&mut self, text: String)
    {
        self.draft_name = text;
    }

    /// Replaces the quantity draft.
    pub fn set_draft_quantity(&mut self, text: String)
    {
        self.draft_quantity = text;
    }

    /// Appends a character to the name draft.
    pub fn push_draft_name(&mut self, letter: char)
    {
        self.draft_name.push(letter);
    }

    /// Removes the last character of the name draft.
    pub fn pop_draft_name(&mut self)
    {
        self.draft_name.pop();
    }

    /// Appends a character to the quantity draft.
    pub fn push_draft_quantity(&mut self, letter: char)
    {
        self.draft_quantity.push(letter);
    }

    /// Removes the last character of the quantity draft.
    pub fn pop_draft_quantity(&mut self)
    {
        self.draft_quantity.pop();
    }

    /// Entries in insertion order.
    #[must_use]
    pub fn entries(&self) -> &[Entry]
    {
        &self.entries
    }

    /// Id of the entry currently in edit mode, if any.
    #[must_use]
    pub const fn editing(&self) -> Option<EntryId>
    {
        self.editing
    }

    /// Whether the entry with the given id is in edit mode.
    #[must_use]
    pub fn is_editing(&self, id: EntryId) -> bool
    {
        self.editing == Some(id)
    }

    /// Whether the add dialog is shown.
    #[must_use]
    pub const fn dialog_open(&self) -> bool
    {
        self.dialog_open
    }

    /// Current name draft text.
    #[must_use]
    pub fn draft_name(&self) -> &str
    {
        &self.draft_name
    }

    /// Current quantity draft text.
    #[must_use]
    pub fn draft_quantity(&self) -> &str
    {
        &self.draft_quantity
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize
    {
        self.entries.len()
    }

    /// Whether the list has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool
    {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests
{
    use super::*;

    /// Store with n entries named item1..itemN, quantity matching the
    /// index.
    fn store_with_entries(count: usize) -> ListStore
    {
        let mut store = ListStore::new();

        for index in 1..=count
        {
            assert!(store.add_entry(&format!("item{index}"), &index.to_string()));
        }

        store
    }

    #[test]
    fn adds_assign_ids_in_creation_order()
    {
        let store = store_with_entries(4);

        assert_eq!(store.len(), 4);

        for (index, entry) in store.entries().iter().enumerate()
        {
            assert_eq!(entry.id, index + 1);
        }
    }

    #[test]
    fn add_with_empty_name_is_rejected()
    {
        let mut store = ListStore::new();

        assert!(!store.add_entry("", "3"));
        assert!(store.is_empty());
    }

    #[test]
    fn add_with_empty_quantity_is_rejected()
    {
        let mut store = ListStore::new();

        assert!(!store.add_entry("Bread", ""));
        assert!(store.is_empty());
    }

    #[test]
    fn add_with_non_numeric_quantity_is_rejected()
    {
        let mut store = ListStore::new();

        assert!(!store.add_entry("Bread", "two"));
        assert!(store.is_empty());
    }

    #[test]
    fn rejected_add_keeps_dialog_and_drafts()
    {
        let mut store = ListStore::new();
        store.open_add_dialog();
        store.set_draft_name("Bread".to_owned());
        store.set_draft_quantity("lots".to_owned());

        assert!(!store.confirm_add());

        assert!(store.dialog_open());
        assert_eq!(store.draft_name(), "Bread");
        assert_eq!(store.draft_quantity(), "lots");
        assert!(store.is_empty());
    }

    #[test]
    fn confirm_add_consumes_drafts_and_closes_dialog()
    {
        let mut store = ListStore::new();
        store.open_add_dialog();
        store.set_draft_name("Eggs".to_owned());
        store.set_draft_quantity("12".to_owned());

        assert!(store.confirm_add());

        assert!(!store.dialog_open());
        assert_eq!(store.draft_name(), "");
        assert_eq!(store.draft_quantity(), "");
        assert_eq!(
            store.entries(),
            [Entry {
                id: 1,
                name: "Eggs".to_owned(),
                quantity: 12,
            }]
        );
    }

    #[test]
    fn closing_the_dialog_keeps_the_drafts()
    {
        let mut store = ListStore::new();
        store.open_add_dialog();
        store.push_draft_name('M');
        store.push_draft_quantity('2');

        store.close_add_dialog();

        assert!(!store.dialog_open());
        assert_eq!(store.draft_name(), "M");
        assert_eq!(store.draft_quantity(), "2");
    }

    #[test]
    fn draft_editing_pushes_and_pops()
    {
        let mut store = ListStore::new();

        store.push_draft_name('H');
        store.push_draft_name('a');
        store.push_draft_name('m');
        store.pop_draft_name();

        store.push_draft_quantity('1');
        store.pop_draft_quantity();
        store.pop_draft_quantity();

        assert_eq!(store.draft_name(), "Ha");
        assert_eq!(store.draft_quantity(), "");
    }

    #[test]
    fn begin_edit_marks_only_the_latest_target()
    {
        let mut store = store_with_entries(3);

        store.begin_edit(1);
        store.begin_edit(3);

        assert_eq!(store.editing(), Some(3));
        assert!(!store.is_editing(1));
        assert!(store.is_editing(3));
    }

    #[test]
    fn begin_edit_with_unknown_id_clears_edit_mode()
    {
        let mut store = store_with_entries(2);

        store.begin_edit(1);
        store.begin_edit(99);

        assert_eq!(store.editing(), None);
    }

    #[test]
    fn commit_edit_rewrites_the_entry_and_leaves_edit_mode()
    {
        let mut store = ListStore::new();
        store.add_entry("Eggs", "2");
        store.add_entry("Butter", "1");

        store.begin_edit(1);
        store.commit_edit(1, "Milk", "3");

        assert_eq!(store.editing(), None);
        assert_eq!(store.entries()[0].name, "Milk");
        assert_eq!(store.entries()[0].quantity, 3);
        assert_eq!(store.entries()[1].name, "Butter");
    }

    #[test]
    fn commit_edit_with_bad_quantity_falls_back_to_one()
    {
        let mut store = store_with_entries(1);

        store.begin_edit(1);
        store.commit_edit(1, "Milk", "abc");

        assert_eq!(store.entries()[0].quantity, 1);
    }

    #[test]
    fn commit_edit_with_unknown_id_only_clears_edit_mode()
    {
        let mut store = store_with_entries(2);
        let before = store.entries().to_vec();

        store.begin_edit(2);
        store.commit_edit(99, "Milk", "3");

        assert_eq!(store.editing(), None);
        assert_eq!(store.entries(), before);
    }

    #[test]
    fn cancel_edit_keeps_entry_data()
    {
        let mut store = store_with_entries(1);

        store.begin_edit(1);
        store.cancel_edit();

        assert_eq!(store.editing(), None);
        assert_eq!(store.entries()[0].name, "item1");
    }

    #[test]
    fn delete_removes_the_target_and_keeps_order()
    {
        let mut store = store_with_entries(3);

        store.delete_entry(2);

        let names: Vec<&str> = store
            .entries()
            .iter()
            .map(|entry| entry.name.as_str())
            .collect();
        assert_eq!(names, ["item1", "item3"]);
    }

    #[test]
    fn delete_with_unknown_id_is_ignored()
    {
        let mut store = store_with_entries(2);

        store.delete_entry(99);

        assert_eq!(store.len(), 2);
    }

    #[test]
    fn deleting_the_edited_entry_clears_edit_mode()
    {
        let mut store = store_with_entries(2);

        store.begin_edit(2);
        store.delete_entry(2);

        assert_eq!(store.editing(), None);
    }

    #[test]
    fn add_then_delete_scenario()
    {
        let mut store = ListStore::new();
        store.add_entry("Bread", "2");
        store.add_entry("Milk", "1");

        assert_eq!(
            store.entries(),
            [
                Entry {
                    id: 1,
                    name: "Bread".to_owned(),
                    quantity: 2,
                },
                Entry {
                    id: 2,
                    name: "Milk".to_owned(),
                    quantity: 1,
                },
            ]
        );

        store.delete_entry(1);

        assert_eq!(
            store.entries(),
            [Entry {
                id: 2,
                name: "Milk".to_owned(),
                quantity: 1,
            }]
        );
    }

    // Pins the length-derived id scheme: deleting and re-adding hands
    // out an id that is still in use.
    #[test]
    fn ids_can_repeat_after_a_delete()
    {
        let mut store = ListStore::new();
        store.add_entry("Bread", "2");
        store.add_entry("Milk", "1");

        store.delete_entry(1);
        store.add_entry("Jam", "1");

        let ids: Vec<EntryId> = store
            .entries()
            .iter()
            .map(|entry| entry.id)
            .collect();
        assert_eq!(ids, [2, 2]);
    }

    #[test]
    fn delete_by_repeated_id_removes_the_first_match()
    {
        let mut store = ListStore::new();
        store.add_entry("Bread", "2");
        store.add_entry("Milk", "1");
        store.delete_entry(1);
        store.add_entry("Jam", "1");

        store.delete_entry(2);

        assert_eq!(store.len(), 1);
        assert_eq!(store.entries()[0].name, "Jam");
    }
}
