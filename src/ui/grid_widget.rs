//! Custom Ratatui widget that renders a [`Grid`] as a header row followed by
//! one line per item.
//!
//! Bound columns print the item's field.  Unbound columns hand their cell
//! rectangle to a caller-supplied renderer, which is how the action column
//! gets its menu bar.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    widgets::{Block, StatefulWidget, Widget},
};

use crate::core::grid::{resolve_widths, ColumnSpec, Grid, GridRow, GridState};

use super::theme::Theme;

// ───────────────────────────────────────── geometry ──────────

/// Where the header, body and columns of a grid land on screen.  Shared by
/// rendering and mouse hit-testing so both agree on every cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridGeometry {
    pub header_y: u16,
    pub body: Rect,
    /// `(x, width)` of each column.
    pub columns: Vec<(u16, u16)>,
}

impl GridGeometry {
    /// Lay out `columns` inside `inner` (the area within any border).
    pub fn new(columns: &[ColumnSpec], inner: Rect) -> Self {
        let mut x = inner.x;
        let columns = resolve_widths(columns, inner.width)
            .into_iter()
            .map(|w| {
                let col = (x, w);
                x += w;
                col
            })
            .collect();
        Self {
            header_y: inner.y,
            body: Rect::new(
                inner.x,
                inner.y.saturating_add(1),
                inner.width,
                inner.height.saturating_sub(1),
            ),
            columns,
        }
    }

    /// Item index at screen row `y`, if a visible row is there.
    pub fn row_at(&self, y: u16, offset: usize, row_count: usize) -> Option<usize> {
        if y < self.body.y || y >= self.body.y + self.body.height {
            return None;
        }
        let row = (y - self.body.y) as usize + offset;
        (row < row_count).then_some(row)
    }

    pub fn column_at(&self, x: u16) -> Option<usize> {
        self.columns
            .iter()
            .position(|&(cx, w)| x >= cx && x < cx.saturating_add(w))
    }

    /// Screen rectangle of a cell, or `None` when scrolled out of view.
    pub fn cell_rect(&self, row: usize, column: usize, offset: usize) -> Option<Rect> {
        let &(x, width) = self.columns.get(column)?;
        let rel = row.checked_sub(offset)?;
        if rel >= self.body.height as usize {
            return None;
        }
        Some(Rect::new(x, self.body.y + rel as u16, width, 1))
    }
}

// ───────────────────────────────────────── widget ────────────

/// What an unbound-column renderer is given for each cell.
pub struct CellContext<'r, T> {
    pub row: usize,
    pub item: &'r T,
    pub column: usize,
    pub area: Rect,
    pub selected: bool,
}

type CellRenderer<'a, T> = Box<dyn Fn(CellContext<'_, T>, &mut Buffer) + 'a>;

/// The grid widget itself — created fresh each frame.
pub struct GridWidget<'a, T> {
    grid: &'a Grid<T>,
    block: Option<Block<'a>>,
    renderer: Option<CellRenderer<'a, T>>,
}

impl<'a, T: GridRow> GridWidget<'a, T> {
    pub fn new(grid: &'a Grid<T>) -> Self {
        Self {
            grid,
            block: None,
            renderer: None,
        }
    }

    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }

    /// Draw cells of unbound columns with `f`.
    pub fn renderer(mut self, f: impl Fn(CellContext<'_, T>, &mut Buffer) + 'a) -> Self {
        self.renderer = Some(Box::new(f));
        self
    }

    /// Area inside the optional block.
    pub fn inner(&self, area: Rect) -> Rect {
        match self.block {
            Some(ref block) => block.inner(area),
            None => area,
        }
    }

    pub fn geometry(&self, area: Rect) -> GridGeometry {
        GridGeometry::new(self.grid.columns(), self.inner(area))
    }
}

impl<'a, T: GridRow> StatefulWidget for GridWidget<'a, T> {
    type State = GridState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let geometry = self.geometry(area);
        if let Some(ref block) = self.block {
            block.clone().render(area, buf);
        }
        // Too short for even the header row.
        if self.inner(area).height == 0 {
            return;
        }

        // ── header ──
        for (spec, &(x, w)) in self.grid.columns().iter().zip(&geometry.columns) {
            if w > 1 {
                buf.set_stringn(
                    x + 1,
                    geometry.header_y,
                    spec.header(),
                    (w - 1) as usize,
                    Theme::header_style(),
                );
            }
        }

        // ── body ──
        if !self.grid.shows_all_rows() {
            state.clamp_scroll(geometry.body.height as usize);
        } else {
            state.offset = 0;
        }

        let visible = self
            .grid
            .items()
            .iter()
            .enumerate()
            .skip(state.offset)
            .take(geometry.body.height as usize);

        for (row, item) in visible {
            let selected = row == state.selected;
            let style = if selected {
                Theme::selected_style()
            } else {
                Theme::cell_style()
            };
            if let Some(line) = geometry.cell_rect(row, 0, state.offset) {
                buf.set_style(Rect::new(geometry.body.x, line.y, geometry.body.width, 1), style);
            }

            for (column, spec) in self.grid.columns().iter().enumerate() {
                let Some(cell) = geometry.cell_rect(row, column, state.offset) else {
                    continue;
                };
                match spec.path {
                    Some(path) => {
                        if cell.width > 1 {
                            let text = item.field(path).unwrap_or_default();
                            buf.set_stringn(cell.x + 1, cell.y, text, (cell.width - 1) as usize, style);
                        }
                    }
                    None => {
                        if let Some(ref render_cell) = self.renderer {
                            render_cell(
                                CellContext {
                                    row,
                                    item,
                                    column,
                                    area: cell,
                                    selected,
                                },
                                buf,
                            );
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    use ratatui::{style::Style, widgets::Borders};

    use crate::core::demo::{build_grid, ACTION_COLUMN};

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn geometry_maps_rows_and_columns() {
        let grid = build_grid().unwrap();
        let geo = GridGeometry::new(grid.columns(), Rect::new(1, 1, 58, 3));
        assert_eq!(geo.columns, vec![(1, 25), (26, 26), (52, 7)]);
        assert_eq!(geo.row_at(1, 0, 2), None); // header
        assert_eq!(geo.row_at(2, 0, 2), Some(0));
        assert_eq!(geo.row_at(3, 0, 2), Some(1));
        assert_eq!(geo.column_at(55), Some(ACTION_COLUMN));
        assert_eq!(geo.cell_rect(1, 2, 0), Some(Rect::new(52, 3, 7, 1)));
    }

    #[test]
    fn border_only_area_skips_header_and_rows() {
        let grid = build_grid().unwrap();
        for height in 0..=2 {
            let area = Rect::new(0, 0, 30, height);
            let mut buf = Buffer::empty(area);
            let calls = RefCell::new(0);
            GridWidget::new(&grid)
                .block(Block::default().borders(Borders::ALL))
                .renderer(|_, _| *calls.borrow_mut() += 1)
                .render(area, &mut buf, &mut GridState::default());
            assert_eq!(*calls.borrow(), 0);
            for y in 0..height {
                assert!(!row_text(&buf, y).contains("Name"));
            }
        }
    }

    #[test]
    fn renders_headers_rows_and_calls_renderer_per_row() {
        let grid = build_grid().unwrap();
        let area = Rect::new(0, 0, 60, 5);
        let mut buf = Buffer::empty(area);
        let calls = RefCell::new(Vec::new());

        let widget = GridWidget::new(&grid)
            .block(Block::default().borders(Borders::ALL))
            .renderer(|ctx, buf| {
                calls.borrow_mut().push((ctx.row, ctx.column, ctx.area));
                buf.set_string(ctx.area.x, ctx.area.y, "*", Style::default());
            });
        widget.render(area, &mut buf, &mut GridState::default());

        let header = row_text(&buf, 1);
        assert!(header.contains("Name"));
        assert!(header.contains("Size"));

        let first = row_text(&buf, 2);
        let second = row_text(&buf, 3);
        assert!(first.contains("Annual Report.docx") && first.contains("24 MB"));
        assert!(second.contains("Financials.xlsx") && second.contains("42 MB"));
        assert_eq!(buf[(52, 2)].symbol(), "*");

        assert_eq!(
            *calls.borrow(),
            vec![
                (0, ACTION_COLUMN, Rect::new(52, 2, 7, 1)),
                (1, ACTION_COLUMN, Rect::new(52, 3, 7, 1)),
            ]
        );
    }
}
