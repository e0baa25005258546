//! Grid model — column definitions, width resolution, row binding.
//!
//! Columns are either *bound* to a property path of the row type, or
//! *unbound*, in which case the UI layer draws their cells with a
//! caller-supplied renderer.  Widths follow the usual flex rules: each
//! column starts at a base width and leftover space is shared out in
//! proportion to `flex_grow`.

use super::error::GridError;

/// Base width (in cells) for a column that does not set one.
pub const DEFAULT_BASE_WIDTH: u16 = 10;

// ───────────────────────────────────────── row binding ───────

/// A record that can be displayed by a [`Grid`].
pub trait GridRow {
    /// Property paths a column may bind to.
    const FIELDS: &'static [&'static str];

    /// Value of `path` for this row, formatted for display.
    fn field(&self, path: &str) -> Option<&str>;
}

// ───────────────────────────────────────── columns ───────────

/// Declarative column configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSpec {
    /// Bound property path; `None` for renderer-driven columns.
    pub path: Option<&'static str>,
    /// Fixed base width in cells.  `None` means [`DEFAULT_BASE_WIDTH`].
    pub width: Option<u16>,
    /// Share of leftover space this column takes.  0 keeps it at base width.
    pub flex_grow: u16,
}

impl ColumnSpec {
    pub fn bound(path: &'static str) -> Self {
        Self {
            path: Some(path),
            width: None,
            flex_grow: 1,
        }
    }

    pub fn unbound() -> Self {
        Self {
            path: None,
            width: None,
            flex_grow: 1,
        }
    }

    pub fn width(mut self, width: u16) -> Self {
        self.width = Some(width);
        self
    }

    pub fn flex_grow(mut self, flex_grow: u16) -> Self {
        self.flex_grow = flex_grow;
        self
    }

    /// Header label shown above the column.
    pub fn header(&self) -> String {
        self.path.map(header_from_path).unwrap_or_default()
    }
}

/// Turn a property path into a header label.
///
/// Uses the last `.` segment, splits camelCase into words, lowercases, and
/// capitalises the first letter: `owner.fileSize` → `File size`.
pub fn header_from_path(path: &str) -> String {
    let last = path.rsplit('.').next().unwrap_or(path);
    let mut words = String::with_capacity(last.len() + 4);
    for (i, c) in last.chars().enumerate() {
        if c.is_uppercase() && i > 0 {
            words.push(' ');
        }
        words.extend(c.to_lowercase());
    }
    let mut chars = words.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Resolve concrete column widths for a row `total` cells wide.
///
/// Extra space goes to growing columns proportionally, with any rounding
/// remainder given to the last growing column.  When there is not enough
/// room, columns are filled left to right and the tail is clipped.
pub fn resolve_widths(columns: &[ColumnSpec], total: u16) -> Vec<u16> {
    let base: Vec<u32> = columns
        .iter()
        .map(|c| u32::from(c.width.unwrap_or(DEFAULT_BASE_WIDTH)))
        .collect();
    let base_sum: u32 = base.iter().sum();
    let total = u32::from(total);

    if total < base_sum {
        let mut remaining = total;
        return base
            .iter()
            .map(|&w| {
                let take = w.min(remaining);
                remaining -= take;
                take as u16
            })
            .collect();
    }

    let extra = total - base_sum;
    let grow_sum: u32 = columns.iter().map(|c| u32::from(c.flex_grow)).sum();
    let mut widths = base;
    if grow_sum == 0 {
        return widths.into_iter().map(|w| w as u16).collect();
    }

    let mut handed_out = 0;
    let mut last_growing = None;
    for (i, col) in columns.iter().enumerate() {
        if col.flex_grow == 0 {
            continue;
        }
        let share = extra * u32::from(col.flex_grow) / grow_sum;
        widths[i] += share;
        handed_out += share;
        last_growing = Some(i);
    }
    if let Some(i) = last_growing {
        widths[i] += extra - handed_out;
    }

    widths.into_iter().map(|w| w as u16).collect()
}

// ───────────────────────────────────────── grid ──────────────

/// Items plus the columns that display them.
#[derive(Debug, Clone)]
pub struct Grid<T> {
    items: Vec<T>,
    columns: Vec<ColumnSpec>,
    all_rows_visible: bool,
}

impl<T: GridRow> Grid<T> {
    /// Build a grid, checking every bound column against `T::FIELDS`.
    pub fn new(items: Vec<T>, columns: Vec<ColumnSpec>) -> Result<Self, GridError> {
        for (column, spec) in columns.iter().enumerate() {
            if let Some(path) = spec.path {
                if !T::FIELDS.contains(&path) {
                    return Err(GridError::UnknownPath {
                        column,
                        path: path.to_string(),
                    });
                }
            }
        }
        Ok(Self {
            items,
            columns,
            all_rows_visible: false,
        })
    }

    /// Size the grid to its content instead of filling and scrolling.
    pub fn all_rows_visible(mut self, on: bool) -> Self {
        self.all_rows_visible = on;
        self
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn columns(&self) -> &[ColumnSpec] {
        &self.columns
    }

    pub fn row_count(&self) -> usize {
        self.items.len()
    }

    pub fn shows_all_rows(&self) -> bool {
        self.all_rows_visible
    }

    /// Text of a bound cell.  Unbound columns have no text.
    pub fn cell_text(&self, row: usize, column: usize) -> Option<&str> {
        let path = self.columns.get(column)?.path?;
        self.items.get(row)?.field(path)
    }

    /// Rows needed for header + every item, when sized to content.
    pub fn content_height(&self) -> Option<u16> {
        self.all_rows_visible
            .then(|| u16::try_from(self.items.len() + 1).unwrap_or(u16::MAX))
    }
}

// ───────────────────────────────────────── state ─────────────

/// Row cursor and scroll offset.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct GridState {
    pub selected: usize,
    pub offset: usize,
}

impl GridState {
    pub fn select_next(&mut self, max: usize) {
        if max > 0 && self.selected < max - 1 {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Keep the selected row inside a viewport of `height` rows.
    pub fn clamp_scroll(&mut self, height: usize) {
        if height == 0 {
            return;
        }
        if self.selected < self.offset {
            self.offset = self.selected;
        } else if self.selected >= self.offset + height {
            self.offset = self.selected - height + 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Row(&'static str);

    impl GridRow for Row {
        const FIELDS: &'static [&'static str] = &["label"];

        fn field(&self, path: &str) -> Option<&str> {
            (path == "label").then_some(self.0)
        }
    }

    #[test]
    fn headers_follow_path_casing_rules() {
        assert_eq!(header_from_path("name"), "Name");
        assert_eq!(header_from_path("fileSize"), "File size");
        assert_eq!(header_from_path("owner.firstName"), "First name");
        assert_eq!(ColumnSpec::unbound().header(), "");
    }

    #[test]
    fn leftover_space_goes_to_growing_columns() {
        let cols = [
            ColumnSpec::bound("a"),
            ColumnSpec::bound("b"),
            ColumnSpec::unbound().width(7).flex_grow(0),
        ];
        let widths = resolve_widths(&cols, 58);
        assert_eq!(widths, vec![25, 26, 7]);
        assert_eq!(widths.iter().sum::<u16>(), 58);
    }

    #[test]
    fn narrow_rows_clip_from_the_right() {
        let cols = [
            ColumnSpec::bound("a"),
            ColumnSpec::unbound().width(7).flex_grow(0),
        ];
        assert_eq!(resolve_widths(&cols, 12), vec![10, 2]);
        assert_eq!(resolve_widths(&cols, 0), vec![0, 0]);
    }

    #[test]
    fn no_growers_keeps_base_widths() {
        let cols = [ColumnSpec::bound("a").flex_grow(0)];
        assert_eq!(resolve_widths(&cols, 40), vec![10]);
    }

    #[test]
    fn unknown_path_is_rejected() {
        let err = Grid::new(vec![Row("x")], vec![ColumnSpec::bound("size")]).unwrap_err();
        assert_eq!(
            err,
            GridError::UnknownPath {
                column: 0,
                path: "size".into()
            }
        );
    }

    #[test]
    fn cell_text_reads_bound_columns_only() {
        let grid = Grid::new(
            vec![Row("x"), Row("y")],
            vec![ColumnSpec::bound("label"), ColumnSpec::unbound()],
        )
        .unwrap();
        assert_eq!(grid.cell_text(1, 0), Some("y"));
        assert_eq!(grid.cell_text(1, 1), None);
        assert_eq!(grid.cell_text(5, 0), None);
    }

    #[test]
    fn content_height_only_when_showing_all_rows() {
        let grid = Grid::new(vec![Row("x"), Row("y")], vec![ColumnSpec::bound("label")]).unwrap();
        assert_eq!(grid.content_height(), None);
        assert_eq!(grid.all_rows_visible(true).content_height(), Some(3));
    }

    #[test]
    fn scroll_follows_selection() {
        let mut st = GridState::default();
        for _ in 0..5 {
            st.select_next(10);
        }
        st.clamp_scroll(3);
        assert_eq!((st.selected, st.offset), (5, 3));
        st.selected = 1;
        st.clamp_scroll(3);
        assert_eq!(st.offset, 1);
    }
}
