//! High-level escape sequence consumer interface.
//!
//! [`Parser`](crate::parser::Parser) turns a raw byte stream into a sequence
//! of [`Action`]s and hands each to an [`EscapeActor`] implementation. A
//! terminal screen model implements this trait to mutate its grid, cursor
//! and modes without re-implementing any part of the escape sequence state
//! machine.
use crate::charset::{Charset, CharsetIndex};
use crate::mode::{DisplayEraseMode, LineEraseMode, Mode, PrivateMode, TabClearMode};
use crate::sgr::Sgr;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Print(char),

    // C0 / C1 controls
    Bell,
    Backspace,
    CarriageReturn,
    LineFeed,
    NextLine,
    Substitute,
    SetHorizontalTab,
    InsertTabs(u16),

    // ESC-dispatched
    Index,
    ReverseIndex,
    FullReset,
    ScreenAlignmentTest,
    SaveCursor,
    RestoreCursor,
    SetActiveCharsetIndex(CharsetIndex),
    ConfigureCharset(CharsetIndex, Charset),

    // CSI cursor motion
    MoveUp(usize),
    MoveDown(usize),
    MoveForward(usize),
    MoveBackward(usize),
    GotoColumn(usize),
    GotoRow(usize),
    Goto(usize, usize),
    MoveForwardTabs(usize),
    MoveBackwardTabs(usize),
    CursorNextLine(usize),
    CursorPrecedingLine(usize),

    // CSI erase / edit
    EraseInLine(LineEraseMode),
    EraseInDisplay(DisplayEraseMode),
    InsertLines(usize),
    DeleteLines(usize),
    InsertCharacters(usize),
    DeleteCharacters(usize),
    EraseCharacters(usize),
    ClearTabStop(TabClearMode),

    // CSI modes / margins / rendition
    SetMode(Mode),
    ResetMode(Mode),
    SetPrivateMode(PrivateMode),
    ResetPrivateMode(PrivateMode),
    SetMargins(usize, usize),
    Sgr(Sgr),

    // CSI device queries, answered via the parser's response queue
    ReportDeviceAttributes,
    ReportDeviceStatus(usize),

    // OSC
    SetTitle(String),
    SetIconName(String),
}

/// Trait implemented by consumers of the escape sequence parser.
pub trait EscapeActor {
    fn handle(&mut self, action: Action);

    /// Bytes the core wants written back to the driving process (DA/DSR
    /// responses). Default is a no-op; hosts that care about query/response
    /// round-trips override this.
    fn respond(&mut self, _bytes: &[u8]) {}
}
