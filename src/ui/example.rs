//! The demo view: a context menu over a file grid whose last column holds a
//! per-row menu bar, with a status bar underneath.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    widgets::{Block, Borders, Paragraph, StatefulWidget, Widget},
};

use crate::app::state::AppState;

use super::context_menu::ContextMenu;
use super::grid_widget::{GridGeometry, GridWidget};
use super::layout::AppLayout;
use super::menu_bar::MenuBar;
use super::popup::MenuPopup;
use super::theme::Theme;

/// Screen regions of the view, recomputed per frame and per mouse event.
pub struct ExampleLayout {
    pub app: AppLayout,
    pub grid: GridGeometry,
}

impl ExampleLayout {
    pub fn new(state: &AppState, area: Rect) -> Self {
        // +2 for the grid's border.
        let grid_height = state.grid.content_height().map(|h| h.saturating_add(2));
        let app = AppLayout::from_area(area, grid_height);
        let grid = GridGeometry::new(state.grid.columns(), grid_block().inner(app.grid_area));
        Self { app, grid }
    }

    /// The context menu wraps the whole grid.
    pub fn context_menu<'a>(&self, state: &'a AppState) -> ContextMenu<'a> {
        ContextMenu::new(&state.menu_items, self.app.grid_area)
    }
}

fn grid_block() -> Block<'static> {
    Block::default()
        .title(" Files ")
        .title_style(Theme::title_style())
        .borders(Borders::ALL)
        .border_style(Theme::border_style())
}

/// Draw one frame of the view into `buf`.
pub fn render(state: &mut AppState, area: Rect, buf: &mut Buffer) {
    state.terminal_area = area;
    let layout = ExampleLayout::new(state, area);

    let items = &state.menu_items;
    let theme = state.menu_bar_theme;
    GridWidget::new(&state.grid)
        .block(grid_block())
        .renderer(|cell, buf| {
            let base = if cell.selected {
                Theme::selected_style()
            } else {
                Theme::cell_style()
            };
            MenuBar::new(items)
                .theme(theme)
                .base_style(base)
                .render(cell.area, buf);
        })
        .render(layout.app.grid_area, buf, &mut state.grid_state);

    let hint = state.config.status_bar_hint();
    let status_text = state.status_message.as_deref().unwrap_or(&hint);
    Paragraph::new(status_text)
        .style(Theme::status_bar_style())
        .render(layout.app.status_area, buf);

    if let Some(ref menu) = state.menu {
        MenuPopup {
            items: &state.menu_items,
            state: menu,
        }
        .render(area, buf);
    }
}

/// Render a single frame to plain text, one line per terminal row with
/// trailing blanks removed.
pub fn snapshot(state: &mut AppState, width: u16, height: u16) -> String {
    let area = Rect::new(0, 0, width, height);
    let mut buf = Buffer::empty(area);
    render(state, area, &mut buf);

    let mut out = String::new();
    for y in 0..height {
        let line: String = (0..width).map(|x| buf[(x, y)].symbol()).collect();
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}
