//! Cell-grid screen model: cursor, scroll regions, scrollback history, the
//! alternate screen buffer and wide-character cells.
//!
//! [`Screen`] consumes [`vtcore_escape::Action`] via its `EscapeActor`
//! implementation; pairing it with a parser to drive it from raw bytes is
//! the facade crate's job.

mod cell;
mod color;
mod cursor;
mod grid;
mod mode;
mod screen;

pub use cell::{Attrs, Cell, CellKind};
pub use color::{Color, NamedColor};
pub use cursor::{Cursor, SavedCursor};
pub use grid::{Grid, Row};
pub use mode::SurfaceMode;
pub use screen::Screen;
