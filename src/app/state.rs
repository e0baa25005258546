//! Central application state.
//!
//! All mutable state lives here so that the rest of the app can be pure
//! functions over `&AppState` (rendering) or `&mut AppState` (event handling).

use ratatui::layout::Rect;

use crate::config::AppConfig;
use crate::core::{
    demo::{self, FileItem},
    error::GridError,
    grid::{Grid, GridState},
    menu::{MenuItem, MenuSelection, MenuState},
};
use crate::ui::menu_bar::MenuBarTheme;

/// Which view / overlay is currently active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveView {
    #[default]
    Grid,
    /// Right-click menu over the grid.
    ContextMenu,
    /// Overflow drop-down of a row's menu bar.
    RowMenu,
}

/// Top-level application state.
pub struct AppState {
    /// Entries shared by the context menu and every row's menu bar.
    /// Fixed for the lifetime of the view.
    pub menu_items: Vec<MenuItem>,
    /// File records and their columns.  Fixed for the lifetime of the view.
    pub grid: Grid<FileItem>,
    /// Row cursor and scroll.
    pub grid_state: GridState,
    /// Theme hint passed to each row's menu bar.
    pub menu_bar_theme: MenuBarTheme,
    /// Which view / overlay is currently shown.
    pub active_view: ActiveView,
    /// Cursor of the open menu, when `active_view` is not `Grid`.
    pub menu: Option<MenuState>,
    /// Most recent item-selected notice.
    pub last_selection: Option<MenuSelection>,
    /// An optional status message shown in the bottom bar.
    pub status_message: Option<String>,
    /// User-configurable keybindings and options.
    pub config: AppConfig,
    /// Controls the main event loop.
    pub should_quit: bool,
    /// Area of the last drawn frame, for mouse hit-testing.
    pub terminal_area: Rect,
}

impl AppState {
    pub fn new(config: AppConfig) -> Result<Self, GridError> {
        let grid = demo::build_grid()?.all_rows_visible(config.all_rows_visible);
        let menu_bar_theme = config.menu_bar_theme.unwrap_or(MenuBarTheme::Tertiary);
        Ok(Self {
            menu_items: demo::menu_items(),
            grid,
            grid_state: GridState::default(),
            menu_bar_theme,
            active_view: ActiveView::default(),
            menu: None,
            last_selection: None,
            status_message: None,
            config,
            should_quit: false,
            terminal_area: Rect::default(),
        })
    }

    /// Show `menu` as the given overlay.
    pub fn open_menu(&mut self, view: ActiveView, menu: MenuState) {
        self.active_view = view;
        self.menu = Some(menu);
    }

    pub fn close_menu(&mut self) {
        self.active_view = ActiveView::Grid;
        self.menu = None;
    }
}
