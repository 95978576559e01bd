mod actor;
mod charset;
mod color;
mod control;
mod csi;
mod esc;
mod mode;
mod osc;
mod parser;
mod sgr;

pub use actor::{Action, EscapeActor};
pub use charset::{Charset, CharsetIndex};
pub use color::{Color, NamedColor};
pub use esc::EscSequence;
pub use mode::{DisplayEraseMode, LineEraseMode, Mode, NamedMode, NamedPrivateMode, PrivateMode, TabClearMode};
pub use osc::OperatingSystemCommand;
pub use parser::Parser;
pub use sgr::Sgr;
pub use vtcore_vte as vte;
