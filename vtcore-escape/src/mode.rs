/// Wrapper for standard (non-private) ANSI modes.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Mode {
    Named(NamedMode),
    Unknown(u16),
}

impl Mode {
    pub(crate) fn from_raw(mode: i64) -> Self {
        match mode {
            20 => Self::Named(NamedMode::LineFeedNewLine),
            other => Self::Unknown(other as u16),
        }
    }
}

/// Standard ANSI modes this core recognizes.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum NamedMode {
    /// LNM: linefeed also performs a carriage return.
    LineFeedNewLine = 20,
}

/// Wrapper for DEC private modes (`CSI ? ... h/l`).
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum PrivateMode {
    Named(NamedPrivateMode),
    Unknown(u16),
}

impl PrivateMode {
    pub(crate) fn from_raw(mode: i64) -> Self {
        match mode {
            6 => Self::Named(NamedPrivateMode::Origin),
            7 => Self::Named(NamedPrivateMode::AutoWrap),
            25 => Self::Named(NamedPrivateMode::ShowCursor),
            47 => Self::Named(NamedPrivateMode::AltScreen),
            1047 => Self::Named(NamedPrivateMode::AltScreenClear),
            1048 => Self::Named(NamedPrivateMode::SaveRestoreCursor),
            1049 => Self::Named(NamedPrivateMode::AltScreenSaveCursor),
            2004 => Self::Named(NamedPrivateMode::BracketedPaste),
            other => Self::Unknown(other as u16),
        }
    }
}

/// DEC private modes this core recognizes. See the mode table in the data
/// model: everything else is accepted syntactically and ignored.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum NamedPrivateMode {
    /// DECOM: cursor positioning relative to the scroll region.
    Origin = 6,
    /// DECAWM: auto-wrap on column overflow.
    AutoWrap = 7,
    /// DECTCEM: cursor visibility, advisory to the renderer.
    ShowCursor = 25,
    /// Classic alternate screen, no clear, no cursor save.
    AltScreen = 47,
    /// Alternate screen that clears on enter/exit but does not save the cursor.
    AltScreenClear = 1047,
    /// DECSC/DECRC shortcut with no screen switch.
    SaveRestoreCursor = 1048,
    /// Alternate screen that clears and additionally saves/restores the cursor.
    AltScreenSaveCursor = 1049,
    /// Advisory only; the core records but does not act on this.
    BracketedPaste = 2004,
}

/// Mode for `EL` (erase in line), relative to the cursor.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum LineEraseMode {
    ToEnd,
    ToStart,
    All,
}

impl LineEraseMode {
    pub(crate) fn from_param(param: i64) -> Option<Self> {
        match param {
            0 => Some(Self::ToEnd),
            1 => Some(Self::ToStart),
            2 => Some(Self::All),
            _ => None,
        }
    }
}

/// Mode for `ED` (erase in display), relative to the cursor.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum DisplayEraseMode {
    ToEnd,
    ToStart,
    All,
    /// Also clears scrollback history.
    AllAndScrollback,
}

impl DisplayEraseMode {
    pub(crate) fn from_param(param: i64) -> Option<Self> {
        match param {
            0 => Some(Self::ToEnd),
            1 => Some(Self::ToStart),
            2 => Some(Self::All),
            3 => Some(Self::AllAndScrollback),
            _ => None,
        }
    }
}

/// Mode for `TBC` (tab clear).
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum TabClearMode {
    Current,
    All,
}

impl TabClearMode {
    pub(crate) fn from_param(param: i64) -> Option<Self> {
        match param {
            0 => Some(Self::Current),
            3 => Some(Self::All),
            _ => None,
        }
    }
}
