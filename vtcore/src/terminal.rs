use vtcore_escape::Parser;
use vtcore_surface::{Attrs, Screen};

use crate::config::TerminalConfig;
use crate::error::{Result, TerminalError};

/// The terminal core: a byte-stream parser driving a cell-grid screen.
///
/// Single-threaded and cooperative — call [`Terminal::feed`] to completion
/// before reading any projection method; there is nothing to poll or await.
pub struct Terminal {
    parser: Parser,
    screen: Screen,
    max_history_lines: usize,
}

impl Terminal {
    pub fn new(cols: usize, rows: usize) -> Result<Self> {
        Self::with_config(TerminalConfig { cols, rows, ..TerminalConfig::default() })
    }

    pub fn with_config(config: TerminalConfig) -> Result<Self> {
        if config.cols == 0 || config.rows == 0 {
            return Err(TerminalError::InvalidDimensions { cols: config.cols, rows: config.rows });
        }
        let mut screen = Screen::new(config.cols, config.rows);
        screen.set_max_history_lines(config.max_history_lines);
        Ok(Self { parser: Parser::new(), screen, max_history_lines: config.max_history_lines })
    }

    /// Feeds a chunk of terminal output through the parser into the screen.
    pub fn feed(&mut self, bytes: &[u8]) {
        self.parser.advance(bytes, &mut self.screen);
    }

    /// Resizes per the policy in the module docs. Zero dimensions clamp to
    /// 1 rather than erroring — only construction validates.
    pub fn resize(&mut self, cols: usize, rows: usize) {
        self.screen.resize(cols, rows);
    }

    pub fn scroll_up(&mut self, n: usize) {
        self.screen.scroll_viewport_up(n);
    }

    pub fn scroll_down(&mut self, n: usize) {
        self.screen.scroll_viewport_down(n);
    }

    pub fn scroll_to_top(&mut self) {
        self.screen.scroll_viewport_to_top();
    }

    pub fn scroll_to_bottom(&mut self) {
        self.screen.scroll_viewport_to_bottom();
    }

    pub fn set_max_history_lines(&mut self, n: usize) {
        self.max_history_lines = n;
        self.screen.set_max_history_lines(n);
    }

    /// One string per visible row; wide-character continuations are elided,
    /// trailing spaces are not trimmed.
    pub fn get_display(&self) -> Vec<String> {
        (0..self.screen.rows()).map(|y| self.visible_line(y).0).collect()
    }

    /// One [`Attrs`] per visible cell, parallel to [`Terminal::get_display`].
    pub fn get_attributes(&self) -> Vec<Vec<Attrs>> {
        (0..self.screen.rows()).map(|y| self.visible_line(y).1).collect()
    }

    fn visible_line(&self, y: usize) -> (String, Vec<Attrs>) {
        let row = self.screen.visible_row(y);
        let mut text = String::with_capacity(row.len());
        let mut attrs = Vec::with_capacity(row.len());
        for cell in row {
            if cell.is_wide_spacer() {
                continue;
            }
            text.push(cell.ch);
            attrs.push(cell.attrs);
        }
        (text, attrs)
    }

    /// `(x, y, hidden)`. Hidden whenever DECTCEM is off or the viewport is
    /// scrolled into history, since the live cursor isn't in view either way.
    pub fn get_cursor(&self) -> (usize, usize, bool) {
        let (x, y) = self.screen.cursor_position();
        let hidden = !self.screen.cursor_visible() || self.screen.is_viewing_history();
        (x, y, hidden)
    }

    pub fn is_viewing_history(&self) -> bool {
        self.screen.is_viewing_history()
    }

    pub fn get_history_size(&self) -> usize {
        self.screen.history_len()
    }

    pub fn history_position(&self) -> usize {
        self.screen.history_position()
    }

    pub fn is_using_alternate(&self) -> bool {
        self.screen.is_alt_screen()
    }

    pub fn title(&self) -> Option<&str> {
        self.screen.title()
    }

    pub fn icon_name(&self) -> Option<&str> {
        self.screen.icon_name()
    }

    /// Drains bytes the core wants written back to the process (DA/DSR
    /// replies). The host routes these to its PTY or SSH channel.
    pub fn take_pending_responses(&mut self) -> Vec<Vec<u8>> {
        self.screen.take_pending_responses()
    }

    pub fn malformed_sequence_count(&self) -> u64 {
        self.screen.malformed_sequence_count()
    }

    /// Equivalent to constructing a fresh terminal of the same geometry and
    /// history cap.
    pub fn reset(&mut self) {
        let cols = self.screen.cols();
        let rows = self.screen.rows();
        self.parser = Parser::new();
        self.screen = Screen::new(cols, rows);
        self.screen.set_max_history_lines(self.max_history_lines);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_dimensions() {
        assert_eq!(
            Terminal::new(0, 24).unwrap_err(),
            TerminalError::InvalidDimensions { cols: 0, rows: 24 }
        );
    }

    #[test]
    fn feed_prints_visible_text() {
        let mut term = Terminal::new(10, 2).unwrap();
        term.feed(b"hi");
        assert_eq!(term.get_display()[0].trim_end(), "hi");
    }

    #[test]
    fn reset_clears_history_and_cursor() {
        let mut term = Terminal::new(3, 2).unwrap();
        term.feed(b"a\r\nb\r\nc\r\n");
        assert!(term.get_history_size() > 0);
        term.reset();
        assert_eq!(term.get_history_size(), 0);
        assert_eq!(term.get_cursor(), (0, 0, false));
    }
}
