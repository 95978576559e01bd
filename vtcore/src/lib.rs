//! VT-series terminal emulator core: byte-stream parsing, the cell-grid
//! screen model, scrollback history and the alternate screen buffer.
//!
//! This crate bundles:
//! - [`vtcore_escape`] for parsing terminal output into semantic actions,
//! - [`vtcore_surface`] for maintaining the in-memory screen model.
//!
//! [`Terminal`] is the single entry point: feed it bytes, read back a
//! display projection. It owns no threads and spawns no PTY/SSH session —
//! that plumbing, along with rendering and input handling, lives outside
//! this core.

mod config;
mod error;
mod terminal;

pub use config::TerminalConfig;
pub use error::{Result, TerminalError};
pub use terminal::Terminal;

pub use vtcore_escape as escape;
pub use vtcore_surface as surface;
pub use vtcore_surface::Attrs as Attributes;
