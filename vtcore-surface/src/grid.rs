use crate::cell::{Cell, CellKind};

pub type Row = Vec<Cell>;

pub fn blank_row(cols: usize) -> Row {
    vec![Cell::default(); cols]
}

/// A fixed-size cell buffer plus the scroll region and tab stops that apply
/// to it. Both the main screen and the alternate screen are one of these;
/// only the main screen additionally feeds a history ring (see
/// [`crate::screen::Screen`]).
pub struct Grid {
    cols: usize,
    rows: usize,
    cells: Vec<Row>,
    pub scroll_top: usize,
    pub scroll_bottom: usize,
    tab_stops: Vec<bool>,
}

impl Grid {
    pub fn new(cols: usize, rows: usize) -> Self {
        let cols = cols.max(1);
        let rows = rows.max(1);
        Self {
            cols,
            rows,
            cells: vec![blank_row(cols); rows],
            scroll_top: 0,
            scroll_bottom: rows - 1,
            tab_stops: default_tab_stops(cols),
        }
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn row(&self, y: usize) -> &[Cell] {
        &self.cells[y]
    }

    pub fn row_mut(&mut self, y: usize) -> &mut Row {
        &mut self.cells[y]
    }

    pub fn cell(&self, x: usize, y: usize) -> &Cell {
        &self.cells[y][x]
    }

    pub fn cell_mut(&mut self, x: usize, y: usize) -> &mut Cell {
        &mut self.cells[y][x]
    }

    /// Resize in place, preserving overlapping content. Returns the rows
    /// pushed off the top when shrinking height, oldest first, so the
    /// caller can fold them into scrollback.
    pub fn resize(&mut self, cols: usize, rows: usize) -> Vec<Row> {
        let cols = cols.max(1);
        let rows = rows.max(1);
        let mut evicted = Vec::new();

        if rows < self.rows {
            let overflow = self.rows - rows;
            evicted.extend(self.cells.drain(0..overflow));
        } else if rows > self.rows {
            for _ in 0..(rows - self.rows) {
                self.cells.push(blank_row(self.cols));
            }
        }

        if cols < self.cols {
            for row in &mut self.cells {
                if row[cols - 1].is_wide() {
                    row[cols - 1] = Cell::default();
                }
                row.truncate(cols);
            }
        } else if cols > self.cols {
            for row in &mut self.cells {
                row.resize(cols, Cell::default());
            }
        }

        self.cols = cols;
        self.rows = rows;
        self.scroll_top = 0;
        self.scroll_bottom = rows - 1;
        self.tab_stops = default_tab_stops(cols);
        evicted
    }

    pub fn set_scroll_region(&mut self, top: usize, bottom: usize) {
        let top = top.min(self.rows - 1);
        let bottom = bottom.min(self.rows - 1);
        if top < bottom {
            self.scroll_top = top;
            self.scroll_bottom = bottom;
        } else {
            self.scroll_top = 0;
            self.scroll_bottom = self.rows - 1;
        }
    }

    /// Scrolls the region up by `n` rows, returning the rows evicted off the
    /// top of the region (only meaningful when the region covers row 0, i.e.
    /// for scrollback capture).
    pub fn scroll_up(&mut self, n: usize) -> Vec<Row> {
        let region = self.scroll_bottom - self.scroll_top + 1;
        let n = n.min(region);
        if n == 0 {
            return Vec::new();
        }

        let evicted = self.cells[self.scroll_top..self.scroll_top + n].to_vec();
        self.cells[self.scroll_top..=self.scroll_bottom].rotate_left(n);
        for row in &mut self.cells[self.scroll_bottom - n + 1..=self.scroll_bottom] {
            *row = blank_row(self.cols);
        }
        evicted
    }

    pub fn scroll_down(&mut self, n: usize) {
        let region = self.scroll_bottom - self.scroll_top + 1;
        let n = n.min(region);
        if n == 0 {
            return;
        }

        self.cells[self.scroll_top..=self.scroll_bottom].rotate_right(n);
        for row in &mut self.cells[self.scroll_top..self.scroll_top + n] {
            *row = blank_row(self.cols);
        }
    }

    pub fn insert_lines(&mut self, at: usize, n: usize) {
        if at < self.scroll_top || at > self.scroll_bottom {
            return;
        }
        let n = n.min(self.scroll_bottom - at + 1);
        self.cells[at..=self.scroll_bottom].rotate_right(n);
        for row in &mut self.cells[at..at + n] {
            *row = blank_row(self.cols);
        }
    }

    pub fn delete_lines(&mut self, at: usize, n: usize) {
        if at < self.scroll_top || at > self.scroll_bottom {
            return;
        }
        let n = n.min(self.scroll_bottom - at + 1);
        self.cells[at..=self.scroll_bottom].rotate_left(n);
        for row in &mut self.cells[self.scroll_bottom - n + 1..=self.scroll_bottom] {
            *row = blank_row(self.cols);
        }
    }

    pub fn clear_all(&mut self) {
        for row in &mut self.cells {
            *row = blank_row(self.cols);
        }
    }

    pub fn set_tab_stop(&mut self, x: usize) {
        if let Some(slot) = self.tab_stops.get_mut(x) {
            *slot = true;
        }
    }

    pub fn clear_tab_stop(&mut self, x: usize) {
        if let Some(slot) = self.tab_stops.get_mut(x) {
            *slot = false;
        }
    }

    pub fn clear_all_tab_stops(&mut self) {
        self.tab_stops.iter_mut().for_each(|t| *t = false);
    }

    /// The column of the next tab stop strictly after `from`, or the last
    /// column if none remain.
    pub fn next_tab_stop(&self, from: usize) -> usize {
        ((from + 1)..self.cols).find(|&x| self.tab_stops[x]).unwrap_or(self.cols - 1)
    }

    /// The column of the previous tab stop strictly before `from`, or 0.
    pub fn prev_tab_stop(&self, from: usize) -> usize {
        (0..from).rev().find(|&x| self.tab_stops[x]).unwrap_or(0)
    }
}

fn default_tab_stops(cols: usize) -> Vec<bool> {
    (0..cols).map(|x| x != 0 && x % 8 == 0).collect()
}

/// Blanks `row[start..end]` and also blanks either neighbor that would
/// otherwise be left as an orphaned half of a wide character.
pub(crate) fn clear_range(row: &mut Row, start: usize, end: usize) {
    let cols = row.len();
    let start = start.min(cols);
    let end = end.min(cols);
    if start > 0 && row[start - 1].is_wide() {
        row[start - 1] = Cell::default();
    }
    if end < cols && row[end].is_wide_spacer() {
        row[end] = Cell::default();
    }
    for cell in &mut row[start..end] {
        *cell = Cell::default();
    }
}

pub(crate) fn mark_wide(row: &mut Row, x: usize, ch: char, attrs: crate::cell::Attrs) {
    row[x] = Cell { ch, attrs, kind: CellKind::Wide };
    if x + 1 < row.len() {
        row[x + 1] = Cell { ch: ' ', attrs, kind: CellKind::WideSpacer };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::Attrs;

    #[test]
    fn scroll_up_evicts_top_of_region() {
        let mut grid = Grid::new(4, 3);
        grid.row_mut(0)[0].ch = 'a';
        grid.row_mut(1)[0].ch = 'b';
        let evicted = grid.scroll_up(1);
        assert_eq!(evicted[0][0].ch, 'a');
        assert_eq!(grid.row(0)[0].ch, 'b');
        assert_eq!(grid.row(2)[0].ch, ' ');
    }

    #[test]
    fn insert_lines_respects_region_bounds() {
        let mut grid = Grid::new(4, 5);
        grid.set_scroll_region(1, 3);
        grid.row_mut(1)[0].ch = 'x';
        grid.insert_lines(1, 1);
        assert_eq!(grid.row(1)[0].ch, ' ');
        assert_eq!(grid.row(2)[0].ch, 'x');
        // row 4 is outside the region and untouched by the rotation.
        assert_eq!(grid.row(4)[0].ch, ' ');
    }

    #[test]
    fn clear_range_blanks_orphaned_wide_neighbor() {
        let mut grid = Grid::new(4, 1);
        let row = grid.row_mut(0);
        mark_wide(row, 0, '\u{4e2d}', Attrs::default());
        clear_range(row, 1, 2);
        assert!(!row[0].is_wide());
        assert!(!row[1].is_wide_spacer());
    }

    #[test]
    fn resize_narrower_drops_split_wide_cell() {
        let mut grid = Grid::new(4, 1);
        mark_wide(grid.row_mut(0), 2, '\u{4e2d}', Attrs::default());
        grid.resize(3, 1);
        assert_eq!(grid.row(0)[2].ch, ' ');
    }

    #[test]
    fn tab_stops_default_every_eight_columns() {
        let grid = Grid::new(20, 1);
        assert_eq!(grid.next_tab_stop(0), 8);
        assert_eq!(grid.next_tab_stop(8), 16);
        assert_eq!(grid.prev_tab_stop(16), 8);
    }
}
