//! Drop-down overlay listing menu entries.
//!
//! Used both for the right-click context menu and for a row's overflow
//! menu.  The popup hangs from an anchor cell and is shifted back inside
//! the screen when it would spill over an edge.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};

use crate::core::menu::{MenuItem, MenuState};

use super::theme::Theme;

/// Open menu overlay.
pub struct MenuPopup<'a> {
    pub items: &'a [MenuItem],
    pub state: &'a MenuState,
}

impl<'a> MenuPopup<'a> {
    /// Outer size including borders.
    pub fn size(&self) -> (u16, u16) {
        let widest = self
            .state
            .entries
            .iter()
            .filter_map(|&i| self.items.get(i))
            .map(|item| item.text.chars().count())
            .max()
            .unwrap_or(0);
        // border + " ▸ " prefix + trailing pad + border
        let w = u16::try_from(widest + 6).unwrap_or(u16::MAX);
        let h = u16::try_from(self.state.entries.len() + 2).unwrap_or(u16::MAX);
        (w, h)
    }

    /// Where the popup lands inside `area`.
    pub fn rect(&self, area: Rect) -> Rect {
        let (w, h) = self.size();
        anchored_rect(self.state.anchor, w, h, area)
    }

    /// Entry position (into `state.entries`) at screen cell `(x, y)`.
    pub fn entry_at(&self, area: Rect, x: u16, y: u16) -> Option<usize> {
        let rect = self.rect(area);
        let inner = Rect::new(
            rect.x + 1,
            rect.y + 1,
            rect.width.saturating_sub(2),
            rect.height.saturating_sub(2),
        );
        if !super::layout::point_in_rect(inner, x, y) {
            return None;
        }
        let pos = (y - inner.y) as usize;
        (pos < self.state.entries.len()).then_some(pos)
    }
}

impl<'a> Widget for MenuPopup<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup = self.rect(area);
        Clear.render(popup, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Theme::popup_border_style());
        let inner = block.inner(popup);
        block.render(popup, buf);

        let lines: Vec<Line> = self
            .state
            .entries
            .iter()
            .enumerate()
            .filter_map(|(pos, &idx)| {
                let item = self.items.get(idx)?;
                let (prefix, style) = if pos == self.state.selected {
                    (" ▸ ", Theme::popup_selected_style())
                } else {
                    ("   ", Theme::popup_item_style())
                };
                let width = inner.width as usize;
                Some(Line::from(Span::styled(
                    format!("{:<width$}", format!("{prefix}{}", item.text)),
                    style,
                )))
            })
            .collect();

        Paragraph::new(lines).render(inner, buf);
    }
}

// ───────────────────────────────────────── helpers ───────────

/// Rectangle of `width`×`height` whose top-left sits at `anchor`, moved left
/// or up as needed to stay within `area`.
pub fn anchored_rect(anchor: (u16, u16), width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    let right = area.x + area.width;
    let bottom = area.y + area.height;
    let x = anchor.0.clamp(area.x, right - w);
    let y = anchor.1.clamp(area.y, bottom - h);
    Rect::new(x, y, w, h)
}
