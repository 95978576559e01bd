//! Callbacks invoked by the virtual terminal parser.
//!
//! [`Parser`](crate::parser::Parser) walks a byte stream and translates it
//! into higher level terminal actions. Those actions are handed to an
//! [`Actor`] implementation responsible for mutating a terminal model,
//! logging, or whatever else the embedding application needs. The trait
//! methods mirror the action set defined by the ECMA-48 escape sequence
//! state machine and DEC/xterm conventions. Implementations should be
//! prepared to receive any sequence of calls valid per the virtual terminal
//! protocol and should avoid performing additional parsing themselves.
use crate::csi::CsiParam;

/// Consumer-facing interface for terminal actions emitted by the parser.
///
/// An intermediate is a character in the range 0x20-0x2f occurring before
/// the final character in an escape sequence. `ignored_excess_intermediates`
/// is set when more than two intermediates were collected; no standard
/// defines sequences with more than two, and anything past the second is
/// discarded.
///
/// `params` in most of these methods are decimal integer parameters in
/// escape sequences, separated by semicolons. An omitted parameter is
/// surfaced here as zero, the default value for that parameter position.
pub trait Actor {
    /// Emits a single printable Unicode code point.
    fn print(&mut self, c: char);

    /// Executes an immediate single-byte control function.
    ///
    /// Covers completed C0/C1 control characters that are *not* part of a
    /// longer sequence (e.g. `BEL`, `BS`, `CR`, `CAN`, `SUB`, `IND`, `NEL`,
    /// `HTS`).
    fn execute(&mut self, byte: u8);

    /// Signals the start of a Device Control String.
    fn hook(
        &mut self,
        byte: u8,
        params: &[i64],
        intermediates: &[u8],
        ignored_excess_intermediates: bool,
    );

    /// Marks the end of the current device control string.
    fn unhook(&mut self);

    /// Passes a byte as part of the device control string started by `hook`.
    fn put(&mut self, byte: u8);

    /// Dispatches an Operating System Command, already split on `;`.
    fn osc_dispatch(&mut self, params: &[&[u8]]);

    /// Dispatches a Control Sequence Introducer escape.
    fn csi_dispatch(&mut self, params: &[CsiParam], parameters_truncated: bool, byte: u8);

    /// Dispatches a standard escape sequence.
    fn esc_dispatch(
        &mut self,
        params: &[i64],
        intermediates: &[u8],
        ignored_excess_intermediates: bool,
        byte: u8,
    );
}
