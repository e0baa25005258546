//! Input handling — maps key/mouse events to state mutations.
//!
//! Picking a menu entry only records and reports the selection; no command
//! is attached to any entry.

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::config::Action;
use crate::core::demo::ACTION_COLUMN;
use crate::core::menu::{MenuSelection, MenuState};
use crate::ui::example::ExampleLayout;
use crate::ui::menu_bar::menu_bar_layout;
use crate::ui::popup::MenuPopup;

use super::state::{ActiveView, AppState};

/// Process a key event, dispatching based on the active view.
pub fn handle_key(state: &mut AppState, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }
    // Ctrl+c always quits, regardless of view.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        state.should_quit = true;
        return;
    }

    let Some(action) = state.config.match_key(key) else {
        return;
    };

    match state.active_view {
        ActiveView::Grid => handle_grid_action(state, action),
        ActiveView::ContextMenu | ActiveView::RowMenu => handle_menu_action(state, action),
    }
}

// ── Grid view ───────────────────────────────────────────────────

fn handle_grid_action(state: &mut AppState, action: Action) {
    match action {
        Action::MoveUp => state.grid_state.select_prev(),
        Action::MoveDown => {
            let rows = state.grid.row_count();
            state.grid_state.select_next(rows);
        }
        Action::OpenContextMenu => open_context_menu_at_selection(state),
        Action::OpenRowMenu => {
            let row = state.grid_state.selected;
            open_row_menu(state, row);
        }
        Action::Quit => state.should_quit = true,
        Action::Confirm | Action::Close => {}
    }
}

/// Keyboard equivalent of a right-click: open under the selected row.
fn open_context_menu_at_selection(state: &mut AppState) {
    let layout = ExampleLayout::new(state, state.terminal_area);
    let selected = state.grid_state.selected;
    let row = (selected < state.grid.row_count()).then_some(selected);
    let anchor = match row.and_then(|r| layout.grid.cell_rect(r, 0, state.grid_state.offset)) {
        Some(cell) => (cell.x + 1, cell.y + 1),
        None => (layout.app.grid_area.x + 1, layout.app.grid_area.y + 1),
    };
    let menu = layout.context_menu(state).open(anchor, row);
    tracing::debug!(?row, ?anchor, "context menu opened");
    state.open_menu(ActiveView::ContextMenu, menu);
}

/// Open the overflow drop-down of `row`'s menu bar.
fn open_row_menu(state: &mut AppState, row: usize) {
    if row >= state.grid.row_count() {
        return;
    }
    let layout = ExampleLayout::new(state, state.terminal_area);
    let Some(cell) = layout.grid.cell_rect(row, ACTION_COLUMN, state.grid_state.offset) else {
        return;
    };
    let bar = menu_bar_layout(&state.menu_items, cell.width);
    if bar.overflowed.is_empty() {
        return;
    }
    let x = bar
        .slots
        .iter()
        .find(|s| s.item.is_none())
        .map_or(cell.x, |s| cell.x + s.x);
    let menu = MenuState::new(bar.overflowed, (x, cell.y + 1), Some(row));
    tracing::debug!(row, "row menu opened");
    state.open_menu(ActiveView::RowMenu, menu);
}

// ── Open menu ───────────────────────────────────────────────────

fn handle_menu_action(state: &mut AppState, action: Action) {
    let Some(menu) = state.menu.as_mut() else {
        state.close_menu();
        return;
    };
    match action {
        Action::MoveUp => menu.select_prev(),
        Action::MoveDown => menu.select_next(),
        Action::Confirm => pick_highlighted(state),
        Action::Close | Action::Quit => state.close_menu(),
        Action::OpenContextMenu | Action::OpenRowMenu => {}
    }
}

fn pick_highlighted(state: &mut AppState) {
    let picked = state
        .menu
        .as_ref()
        .and_then(|menu| menu.pick(&state.menu_items));
    match picked {
        Some(selection) => emit_selection(state, selection),
        None => state.close_menu(),
    }
}

/// Close any open menu and report `selection`.
fn emit_selection(state: &mut AppState, selection: MenuSelection) {
    state.close_menu();
    let target = selection
        .row
        .and_then(|r| state.grid.items().get(r))
        .map(|file| file.name.as_str());
    tracing::info!(item = %selection.item, row = ?selection.row, "menu item selected");
    state.status_message = Some(match target {
        Some(name) => format!("{}: {name}", selection.item),
        None => selection.item.clone(),
    });
    state.last_selection = Some(selection);
}

// ── Mouse ───────────────────────────────────────────────────────

pub fn handle_mouse(state: &mut AppState, mouse: MouseEvent) {
    let (x, y) = (mouse.column, mouse.row);

    // Entry under the pointer, when a menu is open.
    let hit = state.menu.as_ref().map(|menu| {
        MenuPopup {
            items: &state.menu_items,
            state: menu,
        }
        .entry_at(state.terminal_area, x, y)
    });

    if let Some(hit) = hit {
        match mouse.kind {
            MouseEventKind::Moved => {
                if let (Some(pos), Some(menu)) = (hit, state.menu.as_mut()) {
                    menu.selected = pos;
                }
            }
            MouseEventKind::Down(MouseButton::Left) => match hit {
                Some(pos) => {
                    if let Some(menu) = state.menu.as_mut() {
                        menu.selected = pos;
                    }
                    pick_highlighted(state);
                }
                None => state.close_menu(),
            },
            MouseEventKind::Down(MouseButton::Right) => {
                state.close_menu();
                // A right-click elsewhere reopens the menu there.
                if hit.is_none() {
                    handle_grid_mouse(state, mouse);
                }
            }
            _ => {}
        }
        return;
    }

    handle_grid_mouse(state, mouse);
}

fn handle_grid_mouse(state: &mut AppState, mouse: MouseEvent) {
    let (x, y) = (mouse.column, mouse.row);
    let layout = ExampleLayout::new(state, state.terminal_area);
    let row = layout
        .grid
        .row_at(y, state.grid_state.offset, state.grid.row_count());

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Right) => {
            let context_menu = layout.context_menu(state);
            if !context_menu.opens_at(x, y) {
                return;
            }
            let menu = context_menu.open((x, y), row);
            if let Some(r) = row {
                state.grid_state.selected = r;
            }
            tracing::debug!(?row, "context menu opened");
            state.open_menu(ActiveView::ContextMenu, menu);
        }
        MouseEventKind::Down(MouseButton::Left) => {
            let Some(r) = row else {
                return;
            };
            state.grid_state.selected = r;
            if layout.grid.column_at(x) == Some(ACTION_COLUMN) {
                if let Some(cell) = layout.grid.cell_rect(r, ACTION_COLUMN, state.grid_state.offset) {
                    click_menu_bar(state, r, x - cell.x, cell.width);
                }
            }
        }
        MouseEventKind::ScrollUp => state.grid_state.select_prev(),
        MouseEventKind::ScrollDown => {
            let rows = state.grid.row_count();
            state.grid_state.select_next(rows);
        }
        _ => {}
    }
}

/// Left-click `dx` cells into `row`'s menu bar.
fn click_menu_bar(state: &mut AppState, row: usize, dx: u16, width: u16) {
    let bar = menu_bar_layout(&state.menu_items, width);
    match bar.slot_at(dx).map(|slot| slot.item) {
        Some(Some(i)) => {
            let selection = MenuSelection {
                item: state.menu_items[i].text.clone(),
                row: Some(row),
            };
            emit_selection(state, selection);
        }
        Some(None) => open_row_menu(state, row),
        None => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::layout::Rect;

    use crate::config::AppConfig;

    fn state() -> AppState {
        let mut st = AppState::new(AppConfig::default()).unwrap();
        st.terminal_area = Rect::new(0, 0, 60, 12);
        st
    }

    fn press(st: &mut AppState, code: KeyCode) {
        handle_key(st, KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn click(st: &mut AppState, button: MouseButton, column: u16, row: u16) {
        handle_mouse(
            st,
            MouseEvent {
                kind: MouseEventKind::Down(button),
                column,
                row,
                modifiers: KeyModifiers::NONE,
            },
        );
    }

    #[test]
    fn row_cursor_stays_within_rows() {
        let mut st = state();
        press(&mut st, KeyCode::Up);
        assert_eq!(st.grid_state.selected, 0);
        for _ in 0..5 {
            press(&mut st, KeyCode::Char('j'));
        }
        assert_eq!(st.grid_state.selected, 1);
    }

    #[test]
    fn right_click_on_row_opens_context_menu_for_that_row() {
        let mut st = state();
        click(&mut st, MouseButton::Right, 10, 3);
        assert_eq!(st.active_view, ActiveView::ContextMenu);
        assert_eq!(st.grid_state.selected, 1);
        let menu = st.menu.as_ref().unwrap();
        assert_eq!(menu.entries, vec![0, 1, 2]);
        assert_eq!(menu.row, Some(1));

        // Popup hangs from (10, 3); "Delete" is the third line inside it.
        click(&mut st, MouseButton::Left, 12, 6);
        assert_eq!(st.active_view, ActiveView::Grid);
        assert_eq!(
            st.last_selection,
            Some(MenuSelection {
                item: "Delete".into(),
                row: Some(1)
            })
        );
        assert_eq!(st.status_message.as_deref(), Some("Delete: Financials.xlsx"));
    }

    #[test]
    fn right_click_on_header_opens_without_row() {
        let mut st = state();
        click(&mut st, MouseButton::Right, 10, 1);
        assert_eq!(st.menu.as_ref().and_then(|m| m.row), None);
        press(&mut st, KeyCode::Enter);
        assert_eq!(st.status_message.as_deref(), Some("View"));
    }

    #[test]
    fn right_click_outside_grid_does_nothing() {
        let mut st = state();
        click(&mut st, MouseButton::Right, 10, 8);
        assert_eq!(st.active_view, ActiveView::Grid);
        assert!(st.menu.is_none());
    }

    #[test]
    fn overflow_button_opens_row_menu() {
        let mut st = state();
        // Action cell of row 0 starts at x=52; the overflow button is its first 3 cells.
        click(&mut st, MouseButton::Left, 53, 2);
        assert_eq!(st.active_view, ActiveView::RowMenu);
        let menu = st.menu.as_ref().unwrap();
        assert_eq!(menu.entries, vec![0, 1, 2]);
        assert_eq!(menu.row, Some(0));
        assert_eq!(menu.anchor, (52, 3));
    }

    #[test]
    fn clicking_past_overflow_button_does_not_open_menu() {
        let mut st = state();
        click(&mut st, MouseButton::Left, 57, 3);
        assert_eq!(st.grid_state.selected, 1);
        assert_eq!(st.active_view, ActiveView::Grid);
    }

    #[test]
    fn keyboard_row_menu_navigates_and_confirms() {
        let mut st = state();
        press(&mut st, KeyCode::Char('.'));
        assert_eq!(st.active_view, ActiveView::RowMenu);
        press(&mut st, KeyCode::Up); // wraps to Delete
        press(&mut st, KeyCode::Enter);
        assert_eq!(st.status_message.as_deref(), Some("Delete: Annual Report.docx"));
    }

    #[test]
    fn escape_and_outside_click_close_menus() {
        let mut st = state();
        press(&mut st, KeyCode::Char('m'));
        assert_eq!(st.active_view, ActiveView::ContextMenu);
        press(&mut st, KeyCode::Esc);
        assert_eq!(st.active_view, ActiveView::Grid);

        press(&mut st, KeyCode::Char('m'));
        click(&mut st, MouseButton::Left, 59, 10);
        assert!(st.menu.is_none());
        assert!(st.last_selection.is_none());
    }

    #[test]
    fn quit_key_closes_menu_before_quitting() {
        let mut st = state();
        press(&mut st, KeyCode::Char('m'));
        press(&mut st, KeyCode::Char('q'));
        assert!(!st.should_quit);
        press(&mut st, KeyCode::Char('q'));
        assert!(st.should_quit);
    }

    #[test]
    fn ctrl_c_always_quits() {
        let mut st = state();
        press(&mut st, KeyCode::Char('m'));
        handle_key(&mut st, KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(st.should_quit);
    }
}
