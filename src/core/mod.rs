//! Core model – menu entries, grid columns and rows, and the demo data.
//!
//! Nothing in this module depends on any TUI or rendering crate.

pub mod demo;
pub mod error;
pub mod grid;
pub mod menu;
