//! The cell-grid screen model: cursor, scroll regions, scrollback history,
//! the alternate screen buffer and wide-character cells.
//!
//! [`Screen`] implements [`EscapeActor`] directly; feeding it raw bytes is
//! the job of the facade crate, which pairs a [`vtcore_escape::Parser`] with
//! one of these.

use std::collections::VecDeque;

use unicode_width::UnicodeWidthChar;

use crate::cell::{Attrs, Cell, CellKind};
use crate::cursor::{Cursor, SavedCursor};
use crate::grid::{blank_row, clear_range, mark_wide, Grid, Row};
use crate::mode::SurfaceMode;
use vtcore_escape::{
    Action, CharsetIndex, DisplayEraseMode, EscapeActor, LineEraseMode, Mode, NamedMode,
    NamedPrivateMode, PrivateMode, Sgr, TabClearMode,
};

/// Rows retained in scrollback beyond what's visible. Matches a generous
/// interactive-shell history without unbounded growth.
const MAX_HISTORY_LINES: usize = 10_000;

fn charset_slot(index: CharsetIndex) -> usize {
    match index {
        CharsetIndex::G0 => 0,
        CharsetIndex::G1 => 1,
        CharsetIndex::G2 => 2,
        CharsetIndex::G3 => 3,
    }
}

pub struct Screen {
    main: Grid,
    alt: Grid,
    using_alt: bool,
    history: VecDeque<Row>,
    max_history: usize,
    viewport_offset: usize,
    cursor: Cursor,
    saved_main: Option<SavedCursor>,
    saved_alt: Option<SavedCursor>,
    alt_entry_cursor: Option<SavedCursor>,
    mode: SurfaceMode,
    title: Option<String>,
    icon_name: Option<String>,
    pending_responses: Vec<Vec<u8>>,
    malformed_sequence_count: u64,
}

impl Screen {
    pub fn new(cols: usize, rows: usize) -> Self {
        Self {
            main: Grid::new(cols, rows),
            alt: Grid::new(cols, rows),
            using_alt: false,
            history: VecDeque::new(),
            max_history: MAX_HISTORY_LINES,
            viewport_offset: 0,
            cursor: Cursor::default(),
            saved_main: None,
            saved_alt: None,
            alt_entry_cursor: None,
            mode: SurfaceMode::default(),
            title: None,
            icon_name: None,
            pending_responses: Vec::new(),
            malformed_sequence_count: 0,
        }
    }

    fn active(&self) -> &Grid {
        if self.using_alt {
            &self.alt
        } else {
            &self.main
        }
    }

    fn active_mut(&mut self) -> &mut Grid {
        if self.using_alt {
            &mut self.alt
        } else {
            &mut self.main
        }
    }

    pub fn cols(&self) -> usize {
        self.active().cols()
    }

    pub fn rows(&self) -> usize {
        self.active().rows()
    }

    pub fn is_alt_screen(&self) -> bool {
        self.using_alt
    }

    pub fn cursor_position(&self) -> (usize, usize) {
        (self.cursor.x, self.cursor.y)
    }

    pub fn cursor_visible(&self) -> bool {
        self.mode.contains(SurfaceMode::SHOW_CURSOR)
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn is_viewing_history(&self) -> bool {
        self.viewport_offset > 0
    }

    pub fn history_position(&self) -> usize {
        self.viewport_offset
    }

    /// Reconfigures the scrollback cap, trimming from the oldest line if the
    /// ring currently holds more than `n`.
    pub fn set_max_history_lines(&mut self, n: usize) {
        self.max_history = n;
        while self.history.len() > self.max_history {
            self.history.pop_front();
        }
        self.viewport_offset = self.viewport_offset.min(self.history.len());
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn icon_name(&self) -> Option<&str> {
        self.icon_name.as_deref()
    }

    pub fn malformed_sequence_count(&self) -> u64 {
        self.malformed_sequence_count
    }

    /// Drains bytes queued by device-status and device-attribute reports.
    pub fn take_pending_responses(&mut self) -> Vec<Vec<u8>> {
        std::mem::take(&mut self.pending_responses)
    }

    /// The row at viewport-relative index `y`, blending scrollback and live
    /// content when the viewport has been scrolled up. Row 0 is the top of
    /// the current view.
    pub fn visible_row(&self, y: usize) -> &[Cell] {
        if self.using_alt || self.viewport_offset == 0 {
            return self.active().row(y);
        }

        let hist_len = self.history.len();
        let offset = self.viewport_offset.min(hist_len);
        if y < offset {
            &self.history[hist_len - offset + y]
        } else {
            self.main.row(y - offset)
        }
    }

    pub fn scroll_viewport_up(&mut self, n: usize) {
        self.viewport_offset = (self.viewport_offset + n).min(self.history.len());
    }

    pub fn scroll_viewport_down(&mut self, n: usize) {
        self.viewport_offset = self.viewport_offset.saturating_sub(n);
    }

    pub fn scroll_viewport_to_top(&mut self) {
        self.viewport_offset = self.history.len();
    }

    pub fn scroll_viewport_to_bottom(&mut self) {
        self.viewport_offset = 0;
    }

    /// Resizes the screen currently on display. Matches the teacher's
    /// behavior of leaving the other buffer's geometry untouched: a viewer
    /// returning from the alt screen after a resize sees pre-resize main
    /// geometry.
    pub fn resize(&mut self, cols: usize, rows: usize) {
        if self.using_alt {
            self.alt.resize(cols, rows);
        } else {
            let evicted = self.main.resize(cols, rows);
            self.push_history(evicted);
        }
        self.clamp_cursor();
    }

    fn clamp_cursor(&mut self) {
        let cols = self.active().cols();
        let rows = self.active().rows();
        self.cursor.x = self.cursor.x.min(cols.saturating_sub(1));
        self.cursor.y = self.cursor.y.min(rows.saturating_sub(1));
        self.cursor.pending_wrap = false;
    }

    fn push_history(&mut self, rows: Vec<Row>) {
        for row in rows {
            self.history.push_back(row);
            if self.history.len() > self.max_history {
                self.history.pop_front();
            }
        }
    }

    fn origin_bounds(&self) -> (usize, usize) {
        let grid = self.active();
        if self.mode.contains(SurfaceMode::ORIGIN) {
            (grid.scroll_top, grid.scroll_bottom)
        } else {
            (0, grid.rows() - 1)
        }
    }

    // -- cursor motion --------------------------------------------------

    fn index(&mut self) {
        self.scroll_viewport_to_bottom();
        let bottom = self.active().scroll_bottom;
        let rows = self.active().rows();
        if self.cursor.y == bottom {
            let evicted = self.active_mut().scroll_up(1);
            if !self.using_alt {
                self.push_history(evicted);
            }
        } else if self.cursor.y + 1 < rows {
            self.cursor.y += 1;
        }
        self.cursor.pending_wrap = false;
    }

    fn reverse_index(&mut self) {
        let top = self.active().scroll_top;
        if self.cursor.y == top {
            self.active_mut().scroll_down(1);
        } else if self.cursor.y > 0 {
            self.cursor.y -= 1;
        }
        self.cursor.pending_wrap = false;
    }

    fn wrap_line(&mut self) {
        self.cursor.pending_wrap = false;
        self.cursor.x = 0;
        self.index();
    }

    fn move_up(&mut self, n: usize) {
        let (top, _) = self.origin_bounds();
        self.cursor.y = self.cursor.y.saturating_sub(n).max(top);
        self.cursor.pending_wrap = false;
    }

    fn move_down(&mut self, n: usize) {
        let (_, bottom) = self.origin_bounds();
        self.cursor.y = (self.cursor.y + n).min(bottom);
        self.cursor.pending_wrap = false;
    }

    fn move_forward(&mut self, n: usize) {
        let cols = self.active().cols();
        self.cursor.x = (self.cursor.x + n).min(cols - 1);
        self.cursor.pending_wrap = false;
    }

    fn move_backward(&mut self, n: usize) {
        self.cursor.x = self.cursor.x.saturating_sub(n);
        self.cursor.pending_wrap = false;
    }

    fn goto(&mut self, row: usize, col: usize) {
        let (top, bottom) = self.origin_bounds();
        self.cursor.y = (top + row).min(bottom);
        self.cursor.x = col.min(self.active().cols() - 1);
        self.cursor.pending_wrap = false;
    }

    fn goto_row(&mut self, row: usize) {
        let (top, bottom) = self.origin_bounds();
        self.cursor.y = (top + row).min(bottom);
        self.cursor.pending_wrap = false;
    }

    fn goto_column(&mut self, col: usize) {
        self.cursor.x = col.min(self.active().cols() - 1);
        self.cursor.pending_wrap = false;
    }

    fn move_forward_tabs(&mut self, n: usize) {
        for _ in 0..n {
            self.cursor.x = self.active().next_tab_stop(self.cursor.x);
        }
        self.cursor.pending_wrap = false;
    }

    fn move_backward_tabs(&mut self, n: usize) {
        for _ in 0..n {
            self.cursor.x = self.active().prev_tab_stop(self.cursor.x);
        }
        self.cursor.pending_wrap = false;
    }

    // -- printing ---------------------------------------------------------

    fn print_char(&mut self, raw: char) {
        self.scroll_viewport_to_bottom();

        let slot = charset_slot(self.cursor.active_charset);
        let mapped = self.cursor.charsets[slot].map(raw);
        let width = UnicodeWidthChar::width(mapped).unwrap_or(1);

        if width == 0 {
            // Combining mark: this cell model has no slot to fold it into
            // the previous glyph, so it is dropped rather than forced into
            // a spacing cell of its own.
            return;
        }

        if self.cursor.pending_wrap {
            self.wrap_line();
        }

        let cols = self.active().cols();
        if width >= 2 && self.cursor.x + 1 >= cols {
            if !self.mode.contains(SurfaceMode::AUTO_WRAP) {
                // DECAWM off: refuse the write rather than split the rune
                // across the margin.
                return;
            }
            let (cx, y) = (self.cursor.x, self.cursor.y);
            clear_range(self.active_mut().row_mut(y), cx, cx + 1);
            self.wrap_line();
        }

        let (x, y) = (self.cursor.x, self.cursor.y);
        let attrs = self.cursor.attrs;
        let row = self.active_mut().row_mut(y);
        clear_range(row, x, x + width);
        if width >= 2 {
            mark_wide(row, x, mapped, attrs);
        } else {
            row[x] = Cell { ch: mapped, attrs, kind: CellKind::Narrow };
        }

        let cols = self.active().cols();
        if x + width >= cols {
            self.cursor.x = cols - 1;
            self.cursor.pending_wrap = self.mode.contains(SurfaceMode::AUTO_WRAP);
        } else {
            self.cursor.x = x + width;
        }
    }

    // -- erase / edit -------------------------------------------------------

    fn erase_in_line(&mut self, mode: LineEraseMode) {
        let cols = self.active().cols();
        let (start, end) = match mode {
            LineEraseMode::ToEnd => (self.cursor.x, cols),
            LineEraseMode::ToStart => (0, (self.cursor.x + 1).min(cols)),
            LineEraseMode::All => (0, cols),
        };
        let y = self.cursor.y;
        clear_range(self.active_mut().row_mut(y), start, end);
    }

    fn erase_in_display(&mut self, mode: DisplayEraseMode) {
        let cols = self.active().cols();
        let rows = self.active().rows();
        match mode {
            DisplayEraseMode::ToEnd => {
                self.erase_in_line(LineEraseMode::ToEnd);
                for y in (self.cursor.y + 1)..rows {
                    *self.active_mut().row_mut(y) = blank_row(cols);
                }
            }
            DisplayEraseMode::ToStart => {
                for y in 0..self.cursor.y {
                    *self.active_mut().row_mut(y) = blank_row(cols);
                }
                self.erase_in_line(LineEraseMode::ToStart);
            }
            DisplayEraseMode::All => self.active_mut().clear_all(),
            DisplayEraseMode::AllAndScrollback => {
                self.active_mut().clear_all();
                if !self.using_alt {
                    self.history.clear();
                    self.viewport_offset = 0;
                }
            }
        }
    }

    fn insert_characters(&mut self, n: usize) {
        let cols = self.active().cols();
        let x = self.cursor.x.min(cols);
        let y = self.cursor.y;
        let n = n.min(cols - x);
        let row = self.active_mut().row_mut(y);
        clear_range(row, cols - n, cols);
        row[x..].rotate_right(n);
        clear_range(row, x, x + n);
    }

    fn delete_characters(&mut self, n: usize) {
        let cols = self.active().cols();
        let x = self.cursor.x.min(cols);
        let y = self.cursor.y;
        let n = n.min(cols - x);
        let row = self.active_mut().row_mut(y);
        clear_range(row, x, x + n);
        row[x..].rotate_left(n);
        clear_range(row, cols - n, cols);
    }

    fn erase_characters(&mut self, n: usize) {
        let cols = self.active().cols();
        let x = self.cursor.x.min(cols);
        let end = (x + n).min(cols);
        let y = self.cursor.y;
        clear_range(self.active_mut().row_mut(y), x, end);
    }

    fn set_margins(&mut self, top: usize, bottom: usize) {
        let rows = self.active().rows();
        let top = if top == 0 { 1 } else { top };
        let bottom = if bottom == 0 { rows } else { bottom };
        self.active_mut().set_scroll_region(top - 1, bottom - 1);
        self.cursor.x = 0;
        self.cursor.y = self.active().scroll_top;
        self.cursor.pending_wrap = false;
    }

    // -- cursor save/restore and alt screen --------------------------------

    fn save_cursor(&mut self) {
        let origin = self.mode.contains(SurfaceMode::ORIGIN);
        let saved = self.cursor.save(origin);
        if self.using_alt {
            self.saved_alt = Some(saved);
        } else {
            self.saved_main = Some(saved);
        }
    }

    fn restore_cursor(&mut self) {
        let saved = if self.using_alt { self.saved_alt } else { self.saved_main };
        if let Some(saved) = saved {
            self.cursor.restore(&saved);
            self.mode.set(SurfaceMode::ORIGIN, saved.origin_mode);
            self.clamp_cursor();
        }
    }

    fn enter_alt_screen(&mut self, clear: bool) {
        if self.using_alt {
            return;
        }
        self.using_alt = true;
        self.mode.insert(SurfaceMode::ALT_SCREEN);
        if clear {
            self.alt.clear_all();
        }
        self.cursor.x = 0;
        self.cursor.y = 0;
        self.cursor.pending_wrap = false;
    }

    fn exit_alt_screen(&mut self, clear: bool) {
        if !self.using_alt {
            return;
        }
        if clear {
            self.alt.clear_all();
        }
        self.using_alt = false;
        self.mode.remove(SurfaceMode::ALT_SCREEN);
    }

    fn set_private_mode(&mut self, mode: PrivateMode) {
        match mode {
            PrivateMode::Named(NamedPrivateMode::Origin) => self.mode.insert(SurfaceMode::ORIGIN),
            PrivateMode::Named(NamedPrivateMode::AutoWrap) => self.mode.insert(SurfaceMode::AUTO_WRAP),
            PrivateMode::Named(NamedPrivateMode::ShowCursor) => self.mode.insert(SurfaceMode::SHOW_CURSOR),
            PrivateMode::Named(NamedPrivateMode::AltScreen) => self.enter_alt_screen(false),
            PrivateMode::Named(NamedPrivateMode::AltScreenClear) => self.enter_alt_screen(true),
            PrivateMode::Named(NamedPrivateMode::SaveRestoreCursor) => self.save_cursor(),
            PrivateMode::Named(NamedPrivateMode::AltScreenSaveCursor) => {
                self.alt_entry_cursor = Some(self.cursor.save(self.mode.contains(SurfaceMode::ORIGIN)));
                self.enter_alt_screen(true);
            }
            PrivateMode::Named(NamedPrivateMode::BracketedPaste) => {
                self.mode.insert(SurfaceMode::BRACKETED_PASTE)
            }
            PrivateMode::Unknown(_) => self.malformed_sequence_count += 1,
        }
    }

    fn reset_private_mode(&mut self, mode: PrivateMode) {
        match mode {
            PrivateMode::Named(NamedPrivateMode::Origin) => self.mode.remove(SurfaceMode::ORIGIN),
            PrivateMode::Named(NamedPrivateMode::AutoWrap) => self.mode.remove(SurfaceMode::AUTO_WRAP),
            PrivateMode::Named(NamedPrivateMode::ShowCursor) => self.mode.remove(SurfaceMode::SHOW_CURSOR),
            PrivateMode::Named(NamedPrivateMode::AltScreen) => self.exit_alt_screen(false),
            PrivateMode::Named(NamedPrivateMode::AltScreenClear) => self.exit_alt_screen(true),
            PrivateMode::Named(NamedPrivateMode::SaveRestoreCursor) => self.restore_cursor(),
            PrivateMode::Named(NamedPrivateMode::AltScreenSaveCursor) => {
                self.exit_alt_screen(true);
                if let Some(saved) = self.alt_entry_cursor.take() {
                    self.cursor.restore(&saved);
                    self.mode.set(SurfaceMode::ORIGIN, saved.origin_mode);
                    self.clamp_cursor();
                }
            }
            PrivateMode::Named(NamedPrivateMode::BracketedPaste) => {
                self.mode.remove(SurfaceMode::BRACKETED_PASTE)
            }
            PrivateMode::Unknown(_) => self.malformed_sequence_count += 1,
        }
    }

    fn set_mode(&mut self, mode: Mode) {
        match mode {
            Mode::Named(NamedMode::LineFeedNewLine) => self.mode.insert(SurfaceMode::LINE_FEED_NEW_LINE),
            Mode::Unknown(_) => self.malformed_sequence_count += 1,
        }
    }

    fn reset_mode(&mut self, mode: Mode) {
        match mode {
            Mode::Named(NamedMode::LineFeedNewLine) => self.mode.remove(SurfaceMode::LINE_FEED_NEW_LINE),
            Mode::Unknown(_) => self.malformed_sequence_count += 1,
        }
    }

    fn apply_sgr(&mut self, edit: Sgr) {
        let a = &mut self.cursor.attrs;
        match edit {
            Sgr::Reset => *a = Attrs::default(),
            Sgr::Bold(v) => a.bold = v,
            Sgr::Italic(v) => a.italic = v,
            Sgr::Underline(v) => a.underline = v,
            Sgr::Blink(v) => a.blink = v,
            Sgr::Reverse(v) => a.reverse = v,
            Sgr::Strikethrough(v) => a.strikethrough = v,
            Sgr::Foreground(c) => a.fg = c,
            Sgr::Background(c) => a.bg = c,
        }
    }

    fn full_reset(&mut self) {
        let cols = self.active().cols();
        let rows = self.active().rows();
        self.main = Grid::new(cols, rows);
        self.alt = Grid::new(cols, rows);
        self.history.clear();
        self.viewport_offset = 0;
        self.using_alt = false;
        self.cursor = Cursor::default();
        self.saved_main = None;
        self.saved_alt = None;
        self.alt_entry_cursor = None;
        self.mode = SurfaceMode::default();
        self.pending_responses.clear();
    }

    fn screen_alignment_test(&mut self) {
        let cols = self.active().cols();
        let rows = self.active().rows();
        for y in 0..rows {
            let row = self.active_mut().row_mut(y);
            for cell in row.iter_mut().take(cols) {
                *cell = Cell { ch: 'E', attrs: Attrs::default(), kind: CellKind::Narrow };
            }
        }
        self.cursor.x = 0;
        self.cursor.y = 0;
        self.cursor.pending_wrap = false;
    }

    fn report_device_status(&mut self, code: usize) {
        match code {
            5 => self.pending_responses.push(b"\x1b[0n".to_vec()),
            6 => {
                let row = if self.mode.contains(SurfaceMode::ORIGIN) {
                    self.cursor.y - self.active().scroll_top + 1
                } else {
                    self.cursor.y + 1
                };
                let col = self.cursor.x + 1;
                self.pending_responses.push(format!("\x1b[{row};{col}R").into_bytes());
            }
            _ => {}
        }
    }
}

impl EscapeActor for Screen {
    fn handle(&mut self, action: Action) {
        match action {
            Action::Print(c) => self.print_char(c),

            Action::Bell => {}
            Action::Backspace => self.move_backward(1),
            Action::CarriageReturn => {
                self.cursor.x = 0;
                self.cursor.pending_wrap = false;
            }
            Action::LineFeed => {
                if self.mode.contains(SurfaceMode::LINE_FEED_NEW_LINE) {
                    self.cursor.x = 0;
                }
                self.index();
            }
            Action::NextLine => {
                self.cursor.x = 0;
                self.index();
            }
            Action::Substitute => {}
            Action::SetHorizontalTab => {
                let x = self.cursor.x;
                self.active_mut().set_tab_stop(x);
            }
            Action::InsertTabs(n) => self.move_forward_tabs(n as usize),

            Action::Index => self.index(),
            Action::ReverseIndex => self.reverse_index(),
            Action::FullReset => self.full_reset(),
            Action::ScreenAlignmentTest => self.screen_alignment_test(),
            Action::SaveCursor => self.save_cursor(),
            Action::RestoreCursor => self.restore_cursor(),
            Action::SetActiveCharsetIndex(index) => self.cursor.active_charset = index,
            Action::ConfigureCharset(index, set) => self.cursor.charsets[charset_slot(index)] = set,

            Action::MoveUp(n) => self.move_up(n),
            Action::MoveDown(n) => self.move_down(n),
            Action::MoveForward(n) => self.move_forward(n),
            Action::MoveBackward(n) => self.move_backward(n),
            Action::GotoColumn(x) => self.goto_column(x),
            Action::GotoRow(y) => self.goto_row(y),
            Action::Goto(y, x) => self.goto(y, x),
            Action::MoveForwardTabs(n) => self.move_forward_tabs(n),
            Action::MoveBackwardTabs(n) => self.move_backward_tabs(n),
            Action::CursorNextLine(n) => {
                self.move_down(n);
                self.cursor.x = 0;
            }
            Action::CursorPrecedingLine(n) => {
                self.move_up(n);
                self.cursor.x = 0;
            }

            Action::EraseInLine(mode) => self.erase_in_line(mode),
            Action::EraseInDisplay(mode) => self.erase_in_display(mode),
            Action::InsertLines(n) => {
                let y = self.cursor.y;
                self.active_mut().insert_lines(y, n);
            }
            Action::DeleteLines(n) => {
                let y = self.cursor.y;
                self.active_mut().delete_lines(y, n);
            }
            Action::InsertCharacters(n) => self.insert_characters(n),
            Action::DeleteCharacters(n) => self.delete_characters(n),
            Action::EraseCharacters(n) => self.erase_characters(n),
            Action::ClearTabStop(TabClearMode::Current) => {
                let x = self.cursor.x;
                self.active_mut().clear_tab_stop(x);
            }
            Action::ClearTabStop(TabClearMode::All) => self.active_mut().clear_all_tab_stops(),

            Action::SetMode(mode) => self.set_mode(mode),
            Action::ResetMode(mode) => self.reset_mode(mode),
            Action::SetPrivateMode(mode) => self.set_private_mode(mode),
            Action::ResetPrivateMode(mode) => self.reset_private_mode(mode),
            Action::SetMargins(top, bottom) => self.set_margins(top, bottom),
            Action::Sgr(edit) => self.apply_sgr(edit),

            Action::ReportDeviceAttributes => {
                self.pending_responses.push(b"\x1b[?1;2c".to_vec());
            }
            Action::ReportDeviceStatus(code) => self.report_device_status(code),

            Action::SetTitle(title) => self.title = Some(title),
            Action::SetIconName(name) => self.icon_name = Some(name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_text(screen: &Screen, y: usize) -> String {
        screen.visible_row(y).iter().map(|c| c.ch).collect()
    }

    #[test]
    fn prints_and_wraps() {
        let mut screen = Screen::new(3, 2);
        for c in "abcd".chars() {
            screen.handle(Action::Print(c));
        }
        assert_eq!(row_text(&screen, 0), "abc");
        assert_eq!(row_text(&screen, 1).trim_end(), "d");
    }

    #[test]
    fn linefeed_scrolls_into_history() {
        // rows=2: the first LF just moves to row 1; each LF after that, with
        // the cursor already on the bottom row, scrolls one line into history.
        let mut screen = Screen::new(3, 2);
        screen.handle(Action::Print('a'));
        screen.handle(Action::LineFeed);
        screen.handle(Action::LineFeed);
        screen.handle(Action::LineFeed);
        assert_eq!(screen.history_len(), 2);
    }

    #[test]
    fn scroll_region_confines_index() {
        let mut screen = Screen::new(3, 5);
        screen.handle(Action::SetMargins(2, 4));
        for _ in 0..3 {
            screen.handle(Action::Print('x'));
            screen.handle(Action::LineFeed);
        }
        // Scrolling happened only inside rows 1..=3 (0-based); row 0 and 4 untouched.
        assert_eq!(row_text(&screen, 0), "   ");
        assert_eq!(row_text(&screen, 4), "   ");
    }

    #[test]
    fn alt_screen_1049_saves_and_restores_cursor() {
        let mut screen = Screen::new(5, 5);
        let alt_save = PrivateMode::Named(NamedPrivateMode::AltScreenSaveCursor);
        screen.handle(Action::Goto(2, 2));
        screen.handle(Action::SetPrivateMode(alt_save));
        assert!(screen.is_alt_screen());
        screen.handle(Action::Goto(0, 0));
        screen.handle(Action::ResetPrivateMode(alt_save));
        assert!(!screen.is_alt_screen());
        assert_eq!(screen.cursor_position(), (2, 2));
    }

    #[test]
    fn wide_character_occupies_two_cells() {
        let mut screen = Screen::new(10, 2);
        screen.handle(Action::Print('\u{4e2d}'));
        assert!(screen.active().cell(0, 0).is_wide());
        assert!(screen.active().cell(1, 0).is_wide_spacer());
        assert_eq!(screen.cursor_position(), (2, 0));
    }

    #[test]
    fn narrow_overwrite_clears_orphaned_wide_spacer() {
        let mut screen = Screen::new(10, 2);
        screen.handle(Action::Print('\u{4e2d}')); // wide char at (0,0)/(1,0)
        screen.handle(Action::Goto(0, 0));
        screen.handle(Action::Print('x')); // overwrites only the wide head
        assert!(!screen.active().cell(0, 0).is_wide());
        assert!(!screen.active().cell(1, 0).is_wide_spacer());
    }

    #[test]
    fn device_status_report_reflects_cursor() {
        let mut screen = Screen::new(80, 24);
        screen.handle(Action::Goto(4, 9));
        screen.handle(Action::ReportDeviceStatus(6));
        let responses = screen.take_pending_responses();
        assert_eq!(responses, vec![b"\x1b[5;10R".to_vec()]);
    }

    #[test]
    fn wide_rune_at_right_edge_is_refused_with_autowrap_off() {
        let mut screen = Screen::new(3, 2);
        let autowrap = PrivateMode::Named(NamedPrivateMode::AutoWrap);
        screen.handle(Action::ResetPrivateMode(autowrap));
        screen.handle(Action::Goto(0, 2));
        screen.handle(Action::Print('\u{4e2d}'));
        assert_eq!(screen.cursor_position(), (2, 0));
        assert_eq!(row_text(&screen, 0), "   ");
        assert_eq!(row_text(&screen, 1), "   ");
    }

    #[test]
    fn printing_snaps_a_scrolled_viewport_back_to_bottom() {
        let mut screen = Screen::new(3, 2);
        for _ in 0..4 {
            screen.handle(Action::Print('x'));
            screen.handle(Action::LineFeed);
        }
        screen.scroll_viewport_up(5);
        assert!(screen.is_viewing_history());
        screen.handle(Action::Print('y'));
        assert!(!screen.is_viewing_history());
    }

    #[test]
    fn entering_alt_screen_homes_the_cursor() {
        let mut screen = Screen::new(5, 5);
        screen.handle(Action::Goto(3, 3));
        screen.handle(Action::SetPrivateMode(PrivateMode::Named(NamedPrivateMode::AltScreen)));
        assert_eq!(screen.cursor_position(), (0, 0));
    }

    #[test]
    fn zero_width_combining_mark_is_dropped() {
        let mut screen = Screen::new(10, 2);
        screen.handle(Action::Print('a'));
        screen.handle(Action::Print('\u{0301}')); // combining acute accent
        assert_eq!(screen.cursor_position(), (1, 0));
        assert_eq!(screen.active().cell(0, 0).ch, 'a');
    }
}
