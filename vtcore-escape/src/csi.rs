use crate::actor::{Action, EscapeActor};
use crate::mode::{DisplayEraseMode, LineEraseMode, Mode, PrivateMode, TabClearMode};
use crate::sgr::parse_sgr_params;
use log::debug;
use vtcore_vte::CsiParam;

/// Parameter lists longer than this are truncated; values are clamped to
/// this as well. Matches the classic xterm parameter limits.
const MAX_PARAMS: usize = 16;
const MAX_PARAM_VALUE: i64 = 9999;

/// Flattens the raw `;`-delimited [`CsiParam`] stream into plain integers,
/// with an omitted parameter reported as `0`. A leading `?` private marker
/// is reported separately rather than included in the list.
fn collect_params(params: &[CsiParam]) -> (bool, Vec<i64>) {
    let (private, params) = match params {
        [CsiParam::P(b'?'), rest @ ..] => (true, rest),
        _ => (false, params),
    };

    let mut out = Vec::new();
    let mut current: Option<i64> = None;
    let mut saw_separator = false;

    for p in params {
        match p {
            CsiParam::Integer(v) => current = Some((*v).clamp(0, MAX_PARAM_VALUE)),
            CsiParam::P(b';') => {
                out.push(current.take().unwrap_or(0));
                saw_separator = true;
                if out.len() >= MAX_PARAMS {
                    return (private, out);
                }
            }
            CsiParam::P(_) => {}
        }
    }
    if current.is_some() || saw_separator {
        out.push(current.take().unwrap_or(0));
        out.truncate(MAX_PARAMS);
    }
    (private, out)
}

fn count(params: &[i64], idx: usize) -> usize {
    match params.get(idx).copied().unwrap_or(0) {
        n if n <= 0 => 1,
        n => n as usize,
    }
}

fn flag(params: &[i64], idx: usize) -> i64 {
    params.get(idx).copied().unwrap_or(0)
}

pub(crate) fn perform<A: EscapeActor>(
    actor: &mut A,
    raw_params: &[CsiParam],
    parameters_truncated: bool,
    byte: u8,
) {
    if parameters_truncated {
        debug!("[csi] parameter list truncated before final byte {:?}", byte as char);
    }

    let (private, params) = collect_params(raw_params);

    let action = match (private, byte) {
        (false, b'@') => Some(Action::InsertCharacters(count(&params, 0))),
        (false, b'A') => Some(Action::MoveUp(count(&params, 0))),
        (false, b'B') => Some(Action::MoveDown(count(&params, 0))),
        (false, b'C') => Some(Action::MoveForward(count(&params, 0))),
        (false, b'D') => Some(Action::MoveBackward(count(&params, 0))),
        (false, b'E') => Some(Action::CursorNextLine(count(&params, 0))),
        (false, b'F') => Some(Action::CursorPrecedingLine(count(&params, 0))),
        (false, b'G') | (false, b'`') => Some(Action::GotoColumn(count(&params, 0) - 1)),
        (false, b'H') | (false, b'f') => {
            let row = count(&params, 0) - 1;
            let col = count(&params, 1) - 1;
            Some(Action::Goto(row, col))
        }
        (false, b'I') => Some(Action::MoveForwardTabs(count(&params, 0))),
        (false, b'J') => DisplayEraseMode::from_param(flag(&params, 0)).map(Action::EraseInDisplay),
        (false, b'K') => LineEraseMode::from_param(flag(&params, 0)).map(Action::EraseInLine),
        (false, b'L') => Some(Action::InsertLines(count(&params, 0))),
        (false, b'M') => Some(Action::DeleteLines(count(&params, 0))),
        (false, b'P') => Some(Action::DeleteCharacters(count(&params, 0))),
        (false, b'X') => Some(Action::EraseCharacters(count(&params, 0))),
        (false, b'Z') => Some(Action::MoveBackwardTabs(count(&params, 0))),
        (false, b'a') => Some(Action::MoveForward(count(&params, 0))),
        (false, b'c') => Some(Action::ReportDeviceAttributes),
        (false, b'd') => Some(Action::GotoRow(count(&params, 0) - 1)),
        (false, b'e') => Some(Action::MoveDown(count(&params, 0))),
        (false, b'g') => TabClearMode::from_param(flag(&params, 0)).map(Action::ClearTabStop),
        (false, b'h') => Some(Action::SetMode(Mode::from_raw(flag(&params, 0)))),
        (false, b'l') => Some(Action::ResetMode(Mode::from_raw(flag(&params, 0)))),
        (true, b'h') => Some(Action::SetPrivateMode(PrivateMode::from_raw(flag(&params, 0)))),
        (true, b'l') => Some(Action::ResetPrivateMode(PrivateMode::from_raw(flag(&params, 0)))),
        (false, b'm') => {
            for edit in parse_sgr_params(&params) {
                actor.handle(Action::Sgr(edit));
            }
            None
        }
        (false, b'n') => Some(Action::ReportDeviceStatus(flag(&params, 0) as usize)),
        (false, b'r') => {
            let top = flag(&params, 0).max(0) as usize;
            let bottom = flag(&params, 1).max(0) as usize;
            Some(Action::SetMargins(top, bottom))
        }
        _ => {
            debug!(
                "[csi] unhandled sequence: private={} params={:?} byte={:?}",
                private, params, byte as char
            );
            None
        }
    };

    if let Some(action) = action {
        actor.handle(action);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingActor {
        actions: Vec<Action>,
    }

    impl EscapeActor for RecordingActor {
        fn handle(&mut self, action: Action) {
            self.actions.push(action);
        }
    }

    #[test]
    fn cursor_up_defaults_to_one() {
        let mut actor = RecordingActor::default();
        perform(&mut actor, &[], false, b'A');
        assert_eq!(actor.actions, vec![Action::MoveUp(1)]);
    }

    #[test]
    fn cursor_position_is_zero_based() {
        let mut actor = RecordingActor::default();
        perform(
            &mut actor,
            &[CsiParam::Integer(5), CsiParam::P(b';'), CsiParam::Integer(10)],
            false,
            b'H',
        );
        assert_eq!(actor.actions, vec![Action::Goto(4, 9)]);
    }

    #[test]
    fn private_mode_marker_routes_to_private_variant() {
        let mut actor = RecordingActor::default();
        perform(&mut actor, &[CsiParam::P(b'?'), CsiParam::Integer(25)], false, b'h');
        assert_eq!(
            actor.actions,
            vec![Action::SetPrivateMode(PrivateMode::from_raw(25))]
        );
    }

    #[test]
    fn sgr_emits_one_action_per_edit() {
        let mut actor = RecordingActor::default();
        perform(&mut actor, &[CsiParam::Integer(1), CsiParam::P(b';'), CsiParam::Integer(31)], false, b'm');
        assert_eq!(actor.actions.len(), 2);
    }

    #[test]
    fn unknown_final_byte_is_ignored() {
        let mut actor = RecordingActor::default();
        perform(&mut actor, &[], false, b'~');
        assert!(actor.actions.is_empty());
    }
}
