//! Bitflags tracking which terminal modes are currently active on a
//! [`crate::screen::Screen`].

use bitflags::bitflags;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct SurfaceMode: u16 {
        /// DECTCEM: cursor visibility, advisory only.
        const SHOW_CURSOR        = 1 << 0;
        /// DECAWM: wrap to the next line on column overflow.
        const AUTO_WRAP          = 1 << 1;
        /// DECOM: cursor positioning relative to the scroll region.
        const ORIGIN             = 1 << 2;
        /// LNM: linefeed also performs a carriage return.
        const LINE_FEED_NEW_LINE = 1 << 3;
        /// The alternate screen buffer is active.
        const ALT_SCREEN         = 1 << 4;
        /// Advisory only; recorded but not acted on.
        const BRACKETED_PASTE    = 1 << 5;
    }
}

impl Default for SurfaceMode {
    fn default() -> Self {
        Self::SHOW_CURSOR | Self::AUTO_WRAP
    }
}
