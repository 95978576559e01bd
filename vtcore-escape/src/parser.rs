use crate::actor::{Action, EscapeActor};
use crate::esc::EscSequence;
use crate::osc::OperatingSystemCommand;
use crate::{control, csi};
use vtcore_vte::{Actor as VTActor, CsiParam, Parser as VTParser};

struct Performer<'a, A: EscapeActor> {
    actor: &'a mut A,
}

impl<'a, A: EscapeActor> VTActor for Performer<'a, A> {
    fn print(&mut self, c: char) {
        self.actor.handle(Action::Print(c));
    }

    fn execute(&mut self, byte: u8) {
        control::perform(byte, self.actor);
    }

    fn hook(&mut self, _byte: u8, _params: &[i64], _intermediates: &[u8], _ignored_excess_intermediates: bool) {
        // DCS passthrough (Sixel, termcap queries, ...) is out of scope; the
        // sequence is consumed and discarded.
    }

    fn unhook(&mut self) {}

    fn put(&mut self, _byte: u8) {}

    fn osc_dispatch(&mut self, params: &[&[u8]]) {
        match OperatingSystemCommand::from_params(params) {
            OperatingSystemCommand::SetTitle(text) => self.actor.handle(Action::SetTitle(text)),
            OperatingSystemCommand::SetIconName(text) => self.actor.handle(Action::SetIconName(text)),
            OperatingSystemCommand::Unhandled => {}
        }
    }

    fn csi_dispatch(&mut self, params: &[CsiParam], parameters_truncated: bool, byte: u8) {
        csi::perform(self.actor, params, parameters_truncated, byte);
    }

    fn esc_dispatch(&mut self, _params: &[i64], intermediates: &[u8], _ignored_excess_intermediates: bool, byte: u8) {
        match EscSequence::from_bytes(intermediates, byte) {
            EscSequence::Index => self.actor.handle(Action::Index),
            EscSequence::NextLine => self.actor.handle(Action::NextLine),
            EscSequence::HorizontalTabSet => self.actor.handle(Action::SetHorizontalTab),
            EscSequence::ReverseIndex => self.actor.handle(Action::ReverseIndex),
            EscSequence::FullReset => self.actor.handle(Action::FullReset),
            EscSequence::SaveCursor => self.actor.handle(Action::SaveCursor),
            EscSequence::RestoreCursor => self.actor.handle(Action::RestoreCursor),
            EscSequence::DesignateCharset(index, set) => {
                self.actor.handle(Action::ConfigureCharset(index, set))
            }
            EscSequence::ScreenAlignmentTest => self.actor.handle(Action::ScreenAlignmentTest),
            EscSequence::Unspecified { intermediate, byte } => {
                log::debug!("[esc] unhandled sequence: intermediate={:?} byte={:?}", intermediate, byte as char);
            }
        }
    }
}

/// High-level escape sequence parser that forwards semantic events to an
/// [`EscapeActor`].
#[derive(Default)]
pub struct Parser {
    vt: VTParser,
}

impl Parser {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the parser with a new chunk of bytes.
    pub fn advance<A: EscapeActor>(&mut self, bytes: &[u8], actor: &mut A) {
        let mut performer = Performer { actor };
        self.vt.advance(bytes, &mut performer);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charset::{Charset, CharsetIndex};

    #[derive(Default)]
    struct RecordingActor {
        actions: Vec<Action>,
    }

    impl EscapeActor for RecordingActor {
        fn handle(&mut self, action: Action) {
            self.actions.push(action);
        }
    }

    fn parse(bytes: &[u8]) -> Vec<Action> {
        let mut parser = Parser::new();
        let mut actor = RecordingActor::default();
        parser.advance(bytes, &mut actor);
        actor.actions
    }

    #[test]
    fn prints_plain_text() {
        assert_eq!(parse(b"hi"), vec![Action::Print('h'), Action::Print('i')]);
    }

    #[test]
    fn cursor_up_via_csi() {
        assert_eq!(parse(b"\x1b[3A"), vec![Action::MoveUp(3)]);
    }

    #[test]
    fn designates_line_drawing_charset() {
        assert_eq!(
            parse(b"\x1b(0"),
            vec![Action::ConfigureCharset(CharsetIndex::G0, Charset::DecLineDrawing)]
        );
    }

    #[test]
    fn title_via_osc() {
        assert_eq!(parse(b"\x1b]2;hello\x07"), vec![Action::SetTitle("hello".into())]);
    }

    #[test]
    fn mixed_stream() {
        let actions = parse(b"hi\x1b[2J\r\n");
        assert_eq!(
            actions,
            vec![
                Action::Print('h'),
                Action::Print('i'),
                Action::EraseInDisplay(crate::mode::DisplayEraseMode::All),
                Action::CarriageReturn,
                Action::LineFeed,
            ]
        );
    }
}
