//! Context menu bound to a target region of the screen.
//!
//! The menu itself is drawn by [`MenuPopup`](super::popup::MenuPopup); this
//! type only knows which region opens it and what it lists.

use ratatui::layout::Rect;

use crate::core::menu::{MenuItem, MenuState};

use super::layout::point_in_rect;

pub struct ContextMenu<'a> {
    items: &'a [MenuItem],
    target: Rect,
}

impl<'a> ContextMenu<'a> {
    pub fn new(items: &'a [MenuItem], target: Rect) -> Self {
        Self { items, target }
    }

    /// Does a right-click at `(x, y)` open this menu?
    pub fn opens_at(&self, x: u16, y: u16) -> bool {
        point_in_rect(self.target, x, y)
    }

    /// Open with every item, hanging from `anchor`.
    pub fn open(&self, anchor: (u16, u16), row: Option<usize>) -> MenuState {
        MenuState::new((0..self.items.len()).collect(), anchor, row)
    }
}
