//! UI / rendering layer — everything that touches Ratatui widgets.
//!
//! This layer takes the *core* model and turns it into cells on the
//! terminal.  No I/O happens here.

pub mod context_menu;
pub mod example;
pub mod grid_widget;
pub mod layout;
pub mod menu_bar;
pub mod popup;
pub mod theme;
