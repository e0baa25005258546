//! The demo view's data: three menu entries and two file records, plus the
//! column layout that shows them.

use super::error::GridError;
use super::grid::{ColumnSpec, Grid, GridRow};
use super::menu::MenuItem;

/// Width of the action column, in cells.
pub const ACTION_COLUMN_WIDTH: u16 = 7;

/// A file record shown in the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileItem {
    pub name: String,
    /// Already formatted for display (e.g. `"24 MB"`).
    pub size: String,
}

impl FileItem {
    pub fn new(name: impl Into<String>, size: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size: size.into(),
        }
    }
}

impl GridRow for FileItem {
    const FIELDS: &'static [&'static str] = &["name", "size"];

    fn field(&self, path: &str) -> Option<&str> {
        match path {
            "name" => Some(self.name.as_str()),
            "size" => Some(self.size.as_str()),
            _ => None,
        }
    }
}

/// Entries shared by the context menu and every row's menu bar.
pub fn menu_items() -> Vec<MenuItem> {
    ["View", "Edit", "Delete"].into_iter().map(MenuItem::new).collect()
}

pub fn file_items() -> Vec<FileItem> {
    vec![
        FileItem::new("Annual Report.docx", "24 MB"),
        FileItem::new("Financials.xlsx", "42 MB"),
    ]
}

/// `name`, `size`, and a fixed-width action column holding the menu bar.
pub fn columns() -> Vec<ColumnSpec> {
    vec![
        ColumnSpec::bound("name"),
        ColumnSpec::bound("size"),
        ColumnSpec::unbound().width(ACTION_COLUMN_WIDTH).flex_grow(0),
    ]
}

/// Index of the action column within [`columns`].
pub const ACTION_COLUMN: usize = 2;

pub fn build_grid() -> Result<Grid<FileItem>, GridError> {
    Ok(Grid::new(file_items(), columns())?.all_rows_visible(true))
}
