//! Layout helpers — split the terminal area into regions.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Primary screen layout with the grid pane and a bottom status bar.
pub struct AppLayout {
    pub grid_area: Rect,
    pub status_area: Rect,
}

impl AppLayout {
    /// Compute the layout from the full terminal area.
    ///
    /// `grid_height` is the grid's preferred height including borders;
    /// `None` lets it take all remaining space.
    pub fn from_area(area: Rect, grid_height: Option<u16>) -> Self {
        let (grid, spare) = match grid_height {
            Some(h) => (Constraint::Length(h), Constraint::Min(0)),
            None => (Constraint::Min(3), Constraint::Length(0)),
        };
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                grid,
                spare,                 // blank rows below a content-sized grid
                Constraint::Length(1), // status bar
            ])
            .split(area);

        Self {
            grid_area: chunks[0],
            status_area: chunks[2],
        }
    }
}

/// Is `(x, y)` inside `rect`?
pub fn point_in_rect(rect: Rect, x: u16, y: u16) -> bool {
    x >= rect.x
        && x < rect.x.saturating_add(rect.width)
        && y >= rect.y
        && y < rect.y.saturating_add(rect.height)
}
