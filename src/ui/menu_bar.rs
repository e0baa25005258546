//! Horizontal menu bar with overflow.
//!
//! Buttons are laid out left to right.  Items that do not fit are moved
//! behind a trailing `⋯` overflow button, so a very narrow bar shows only
//! that button.

use std::str::FromStr;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    widgets::Widget,
};

use crate::core::error::ThemeParseError;
use crate::core::menu::MenuItem;

use super::theme::Theme;

pub const OVERFLOW_LABEL: &str = "⋯";
const OVERFLOW_WIDTH: u16 = 3;

/// Visual variant hint for the bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuBarTheme {
    #[default]
    Default,
    /// Borderless buttons, text colour only.
    Tertiary,
}

impl MenuBarTheme {
    pub fn name(self) -> &'static str {
        match self {
            MenuBarTheme::Default => "default",
            MenuBarTheme::Tertiary => "tertiary",
        }
    }

    fn button_style(self) -> Style {
        match self {
            MenuBarTheme::Default => Theme::menu_button_style(),
            MenuBarTheme::Tertiary => Theme::menu_button_tertiary_style(),
        }
    }
}

impl FromStr for MenuBarTheme {
    type Err = ThemeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" | "default" => Ok(MenuBarTheme::Default),
            "tertiary" => Ok(MenuBarTheme::Tertiary),
            other => Err(ThemeParseError(other.to_string())),
        }
    }
}

// ───────────────────────────────────────── layout ────────────

/// One button position, relative to the bar's left edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonSlot {
    /// Item index, or `None` for the overflow button.
    pub item: Option<usize>,
    pub x: u16,
    pub width: u16,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MenuBarLayout {
    pub slots: Vec<ButtonSlot>,
    /// Items reachable only through the overflow button.
    pub overflowed: Vec<usize>,
}

impl MenuBarLayout {
    /// Button under relative column `dx`.
    pub fn slot_at(&self, dx: u16) -> Option<&ButtonSlot> {
        self.slots
            .iter()
            .find(|s| dx >= s.x && dx < s.x.saturating_add(s.width))
    }
}

fn button_width(item: &MenuItem) -> u16 {
    u16::try_from(item.text.chars().count() + 2).unwrap_or(u16::MAX)
}

/// Place buttons for `items` in a bar `width` cells wide.
pub fn menu_bar_layout(items: &[MenuItem], width: u16) -> MenuBarLayout {
    let total: u32 = items.iter().map(|i| u32::from(button_width(i))).sum();
    let mut layout = MenuBarLayout::default();

    if total <= u32::from(width) {
        let mut x = 0;
        for (i, item) in items.iter().enumerate() {
            let w = button_width(item);
            layout.slots.push(ButtonSlot { item: Some(i), x, width: w });
            x += w;
        }
        return layout;
    }

    let mut x: u16 = 0;
    for (i, item) in items.iter().enumerate() {
        let w = button_width(item);
        let fits = layout.overflowed.is_empty()
            && u32::from(x) + u32::from(w) + u32::from(OVERFLOW_WIDTH) <= u32::from(width);
        if fits {
            layout.slots.push(ButtonSlot { item: Some(i), x, width: w });
            x += w;
        } else {
            layout.overflowed.push(i);
        }
    }
    let room = width.saturating_sub(x);
    if room > 0 {
        layout.slots.push(ButtonSlot {
            item: None,
            x,
            width: room.min(OVERFLOW_WIDTH),
        });
    }
    layout
}

// ───────────────────────────────────────── widget ────────────

/// Menu bar drawn on the first row of its area.
pub struct MenuBar<'a> {
    items: &'a [MenuItem],
    theme: MenuBarTheme,
    /// Row-level highlight behind the buttons (selected grid row).
    base_style: Style,
}

impl<'a> MenuBar<'a> {
    pub fn new(items: &'a [MenuItem]) -> Self {
        Self {
            items,
            theme: MenuBarTheme::Default,
            base_style: Style::default(),
        }
    }

    pub fn theme(mut self, theme: MenuBarTheme) -> Self {
        self.theme = theme;
        self
    }

    pub fn base_style(mut self, style: Style) -> Self {
        self.base_style = style;
        self
    }
}

impl<'a> Widget for MenuBar<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let layout = menu_bar_layout(self.items, area.width);
        let style = self.base_style.patch(self.theme.button_style());

        for slot in &layout.slots {
            let label = match slot.item {
                Some(i) => self.items[i].text.as_str(),
                None => OVERFLOW_LABEL,
            };
            buf.set_stringn(
                area.x + slot.x,
                area.y,
                format!(" {label} "),
                slot.width as usize,
                style,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::demo::{menu_items, ACTION_COLUMN_WIDTH};

    #[test]
    fn action_column_shows_only_overflow() {
        let layout = menu_bar_layout(&menu_items(), ACTION_COLUMN_WIDTH);
        assert_eq!(
            layout.slots,
            vec![ButtonSlot { item: None, x: 0, width: 3 }]
        );
        assert_eq!(layout.overflowed, vec![0, 1, 2]);
    }

    #[test]
    fn wide_bar_shows_every_item_without_overflow() {
        let layout = menu_bar_layout(&menu_items(), 30);
        let shown: Vec<_> = layout.slots.iter().map(|s| s.item).collect();
        assert_eq!(shown, vec![Some(0), Some(1), Some(2)]);
        assert!(layout.overflowed.is_empty());
        assert_eq!(layout.slot_at(7).and_then(|s| s.item), Some(1));
    }

    #[test]
    fn partial_fit_keeps_leading_items() {
        let layout = menu_bar_layout(&menu_items(), 15);
        let shown: Vec<_> = layout.slots.iter().map(|s| s.item).collect();
        assert_eq!(shown, vec![Some(0), Some(1), None]);
        assert_eq!(layout.overflowed, vec![2]);
        assert_eq!(layout.slot_at(13).map(|s| s.item), Some(None));
    }

    #[test]
    fn theme_names_parse() {
        assert_eq!("tertiary".parse(), Ok(MenuBarTheme::Tertiary));
        assert_eq!(" Default ".parse(), Ok(MenuBarTheme::Default));
        assert!("loud".parse::<MenuBarTheme>().is_err());
    }

    #[test]
    fn renders_overflow_glyph_in_narrow_area() {
        let area = Rect::new(0, 0, 7, 1);
        let mut buf = Buffer::empty(area);
        let items = menu_items();
        MenuBar::new(&items)
            .theme(MenuBarTheme::Tertiary)
            .render(area, &mut buf);
        assert_eq!(buf[(1, 0)].symbol(), OVERFLOW_LABEL);
    }
}
