/// An Operating System Command, decoded down to the handful of codes this
/// core understands. Every other code is recorded as `Unhandled` and
/// otherwise ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperatingSystemCommand {
    SetIconName(String),
    SetTitle(String),
    Unhandled,
}

impl OperatingSystemCommand {
    pub(crate) fn from_params(params: &[&[u8]]) -> Self {
        let (Some(code), Some(text)) = (params.first(), params.get(1)) else {
            return Self::Unhandled;
        };

        let text = String::from_utf8_lossy(text).into_owned();

        match *code {
            b"0" | b"1" => Self::SetIconName(text),
            b"2" => Self::SetTitle(text),
            _ => Self::Unhandled,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_and_icon_name() {
        assert_eq!(
            OperatingSystemCommand::from_params(&[b"2", b"my shell"]),
            OperatingSystemCommand::SetTitle("my shell".into())
        );
        assert_eq!(
            OperatingSystemCommand::from_params(&[b"0", b"icon"]),
            OperatingSystemCommand::SetIconName("icon".into())
        );
        assert_eq!(
            OperatingSystemCommand::from_params(&[b"1", b"icon"]),
            OperatingSystemCommand::SetIconName("icon".into())
        );
    }

    #[test]
    fn unknown_codes_are_unhandled() {
        assert_eq!(OperatingSystemCommand::from_params(&[b"52", b"c;xyz"]), OperatingSystemCommand::Unhandled);
        assert_eq!(OperatingSystemCommand::from_params(&[]), OperatingSystemCommand::Unhandled);
    }
}
