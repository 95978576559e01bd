use crate::cell::Attrs;
use vtcore_escape::{Charset, CharsetIndex};

/// Cursor state captured by DECSC and restored by DECRC.
#[derive(Clone, Copy, Debug)]
pub struct SavedCursor {
    pub x: usize,
    pub y: usize,
    pub attrs: Attrs,
    pub origin_mode: bool,
    pub charsets: [Charset; 4],
    pub active_charset: CharsetIndex,
}

/// Live cursor state: position, pending-wrap flag, current rendition and
/// the active/designated character sets.
#[derive(Clone, Copy, Debug)]
pub struct Cursor {
    /// Column in `0..=cols` — `cols` itself marks a pending wrap.
    pub x: usize,
    pub y: usize,
    pub attrs: Attrs,
    pub pending_wrap: bool,
    pub charsets: [Charset; 4],
    pub active_charset: CharsetIndex,
}

impl Default for Cursor {
    fn default() -> Self {
        Self {
            x: 0,
            y: 0,
            attrs: Attrs::default(),
            pending_wrap: false,
            charsets: [Charset::Ascii; 4],
            active_charset: CharsetIndex::G0,
        }
    }
}

impl Cursor {
    pub fn save(&self, origin_mode: bool) -> SavedCursor {
        SavedCursor {
            x: self.x,
            y: self.y,
            attrs: self.attrs,
            origin_mode,
            charsets: self.charsets,
            active_charset: self.active_charset,
        }
    }

    pub fn restore(&mut self, saved: &SavedCursor) {
        self.x = saved.x;
        self.y = saved.y;
        self.attrs = saved.attrs;
        self.pending_wrap = false;
        self.charsets = saved.charsets;
        self.active_charset = saved.active_charset;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_restore_round_trips_position_and_clears_pending_wrap() {
        let mut cursor = Cursor { x: 5, y: 2, pending_wrap: true, ..Cursor::default() };
        let saved = cursor.save(true);
        cursor.x = 0;
        cursor.y = 0;
        cursor.restore(&saved);
        assert_eq!((cursor.x, cursor.y), (5, 2));
        assert!(!cursor.pending_wrap);
    }
}
