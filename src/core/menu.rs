//! Menu model — entries, the open-menu cursor, and the item-selected notice.

/// A single menu entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub text: String,
}

impl MenuItem {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Emitted when the user picks an entry.  Picking an entry never runs a
/// command; the notice is only reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuSelection {
    /// Label of the chosen entry.
    pub item: String,
    /// Grid row the menu was opened for, if any.
    pub row: Option<usize>,
}

/// Cursor over an open menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuState {
    /// Indices into the owning item list, in display order.
    pub entries: Vec<usize>,
    /// Position inside `entries` that is highlighted.
    pub selected: usize,
    /// Terminal cell the popup hangs from.
    pub anchor: (u16, u16),
    /// Grid row the menu was opened for.
    pub row: Option<usize>,
}

impl MenuState {
    pub fn new(entries: Vec<usize>, anchor: (u16, u16), row: Option<usize>) -> Self {
        Self {
            entries,
            selected: 0,
            anchor,
            row,
        }
    }

    /// Move down, wrapping to the top.
    pub fn select_next(&mut self) {
        if !self.entries.is_empty() {
            self.selected = (self.selected + 1) % self.entries.len();
        }
    }

    /// Move up, wrapping to the bottom.
    pub fn select_prev(&mut self) {
        if !self.entries.is_empty() {
            self.selected = (self.selected + self.entries.len() - 1) % self.entries.len();
        }
    }

    /// Item index under the cursor.
    pub fn selected_entry(&self) -> Option<usize> {
        self.entries.get(self.selected).copied()
    }

    /// Build the selection notice for the highlighted entry.
    pub fn pick(&self, items: &[MenuItem]) -> Option<MenuSelection> {
        let idx = self.selected_entry()?;
        let item = items.get(idx)?;
        Some(MenuSelection {
            item: item.text.clone(),
            row: self.row,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items() -> Vec<MenuItem> {
        vec![MenuItem::new("A"), MenuItem::new("B"), MenuItem::new("C")]
    }

    #[test]
    fn cursor_wraps_both_ways() {
        let mut m = MenuState::new(vec![0, 1, 2], (0, 0), None);
        m.select_prev();
        assert_eq!(m.selected_entry(), Some(2));
        m.select_next();
        assert_eq!(m.selected_entry(), Some(0));
    }

    #[test]
    fn pick_maps_through_entry_subset() {
        let mut m = MenuState::new(vec![1, 2], (3, 4), Some(1));
        m.select_next();
        let sel = m.pick(&items()).unwrap();
        assert_eq!(sel.item, "C");
        assert_eq!(sel.row, Some(1));
    }

    #[test]
    fn empty_menu_has_no_selection() {
        let mut m = MenuState::new(Vec::new(), (0, 0), None);
        m.select_next();
        m.select_prev();
        assert_eq!(m.selected_entry(), None);
        assert!(m.pick(&items()).is_none());
    }
}
