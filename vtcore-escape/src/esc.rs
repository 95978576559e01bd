use crate::charset::{Charset, CharsetIndex};

/// A standard (non-CSI, non-OSC) escape sequence: `ESC` followed by at most
/// one intermediate and a final byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EscSequence {
    /// IND - Index: cursor down one line, scrolling if needed.
    Index,
    /// NEL - Next Line: index plus carriage return.
    NextLine,
    /// HTS - Horizontal Tab Set.
    HorizontalTabSet,
    /// RI - Reverse Index: cursor up one line, scrolling if needed.
    ReverseIndex,
    /// RIS - Full Reset.
    FullReset,
    /// DECSC - Save cursor position and attributes.
    SaveCursor,
    /// DECRC - Restore previously saved cursor position and attributes.
    RestoreCursor,
    /// Designate a G-set to either ASCII or DEC line drawing.
    DesignateCharset(CharsetIndex, Charset),
    /// DECALN - fills the screen with 'E' for alignment testing.
    ScreenAlignmentTest,
    /// Anything this core does not assign a meaning to.
    Unspecified { intermediate: Option<u8>, byte: u8 },
}

impl EscSequence {
    pub(crate) fn from_bytes(intermediates: &[u8], byte: u8) -> Self {
        let intermediate = match intermediates {
            [only] => Some(*only),
            _ => None,
        };

        let charset = match byte {
            b'0' => Some(Charset::DecLineDrawing),
            b'B' => Some(Charset::Ascii),
            _ => None,
        };

        match (intermediate, charset) {
            (Some(b'('), Some(set)) => return Self::DesignateCharset(CharsetIndex::G0, set),
            (Some(b')'), Some(set)) => return Self::DesignateCharset(CharsetIndex::G1, set),
            (Some(b'*'), Some(set)) => return Self::DesignateCharset(CharsetIndex::G2, set),
            (Some(b'+'), Some(set)) => return Self::DesignateCharset(CharsetIndex::G3, set),
            _ => {}
        }

        match (intermediate, byte) {
            (None, b'D') => Self::Index,
            (None, b'E') => Self::NextLine,
            (None, b'H') => Self::HorizontalTabSet,
            (None, b'M') => Self::ReverseIndex,
            (None, b'c') => Self::FullReset,
            (None, b'7') => Self::SaveCursor,
            (None, b'8') => Self::RestoreCursor,
            (Some(b'#'), b'8') => Self::ScreenAlignmentTest,
            _ => Self::Unspecified { intermediate, byte },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_known_sequences() {
        let cases: &[(EscSequence, &[u8], u8)] = &[
            (EscSequence::FullReset, &[], b'c'),
            (EscSequence::Index, &[], b'D'),
            (EscSequence::NextLine, &[], b'E'),
            (EscSequence::HorizontalTabSet, &[], b'H'),
            (EscSequence::ReverseIndex, &[], b'M'),
            (EscSequence::SaveCursor, &[], b'7'),
            (EscSequence::RestoreCursor, &[], b'8'),
            (EscSequence::DesignateCharset(CharsetIndex::G0, Charset::DecLineDrawing), &[b'('], b'0'),
            (EscSequence::DesignateCharset(CharsetIndex::G0, Charset::Ascii), &[b'('], b'B'),
            (EscSequence::DesignateCharset(CharsetIndex::G1, Charset::DecLineDrawing), &[b')'], b'0'),
            (EscSequence::DesignateCharset(CharsetIndex::G1, Charset::Ascii), &[b')'], b'B'),
            (EscSequence::DesignateCharset(CharsetIndex::G2, Charset::Ascii), &[b'*'], b'B'),
            (EscSequence::DesignateCharset(CharsetIndex::G3, Charset::Ascii), &[b'+'], b'B'),
            (EscSequence::ScreenAlignmentTest, &[b'#'], b'8'),
        ];

        for (expected, intermediates, byte) in cases {
            assert_eq!(EscSequence::from_bytes(intermediates, *byte), *expected);
        }
    }

    #[test]
    fn unknown_sequence_is_preserved_for_diagnostics() {
        assert_eq!(
            EscSequence::from_bytes(&[b'?'], b'%'),
            EscSequence::Unspecified { intermediate: Some(b'?'), byte: b'%' }
        );
    }
}
