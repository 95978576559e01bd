//! Surface-local color type: re-exported from the escape layer so SGR edits
//! and cell storage share one representation end to end.
pub use vtcore_escape::{Color, NamedColor};
