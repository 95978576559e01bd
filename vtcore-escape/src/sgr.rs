use crate::color::Color;

/// A single incremental edit to the cursor's current rendition, produced by
/// one SGR parameter (or parameter group, for `38`/`48`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sgr {
    Reset,
    Bold(bool),
    Italic(bool),
    Underline(bool),
    Blink(bool),
    Reverse(bool),
    Strikethrough(bool),
    Foreground(Color),
    Background(Color),
}

/// Translates a flat list of SGR integer parameters into a sequence of
/// [`Sgr`] edits, consuming the `5`/`2` sub-parameters of `38`/`48` as they
/// are encountered.
pub(crate) fn parse_sgr_params(params: &[i64]) -> Vec<Sgr> {
    use crate::color::NamedColor::*;

    if params.is_empty() {
        return vec![Sgr::Reset];
    }

    let mut out = Vec::with_capacity(params.len());
    let mut iter = params.iter().copied();

    while let Some(param) = iter.next() {
        let edit = match param {
            0 => Some(Sgr::Reset),
            1 => Some(Sgr::Bold(true)),
            3 => Some(Sgr::Italic(true)),
            4 => Some(Sgr::Underline(true)),
            5 => Some(Sgr::Blink(true)),
            7 => Some(Sgr::Reverse(true)),
            9 => Some(Sgr::Strikethrough(true)),
            22 => Some(Sgr::Bold(false)),
            23 => Some(Sgr::Italic(false)),
            24 => Some(Sgr::Underline(false)),
            25 => Some(Sgr::Blink(false)),
            27 => Some(Sgr::Reverse(false)),
            29 => Some(Sgr::Strikethrough(false)),
            30 => Some(Sgr::Foreground(Color::Named(Black))),
            31 => Some(Sgr::Foreground(Color::Named(Red))),
            32 => Some(Sgr::Foreground(Color::Named(Green))),
            33 => Some(Sgr::Foreground(Color::Named(Yellow))),
            34 => Some(Sgr::Foreground(Color::Named(Blue))),
            35 => Some(Sgr::Foreground(Color::Named(Magenta))),
            36 => Some(Sgr::Foreground(Color::Named(Cyan))),
            37 => Some(Sgr::Foreground(Color::Named(White))),
            38 => crate::color::parse_extended_color(&mut iter).map(Sgr::Foreground),
            39 => Some(Sgr::Foreground(Color::Default)),
            40 => Some(Sgr::Background(Color::Named(Black))),
            41 => Some(Sgr::Background(Color::Named(Red))),
            42 => Some(Sgr::Background(Color::Named(Green))),
            43 => Some(Sgr::Background(Color::Named(Yellow))),
            44 => Some(Sgr::Background(Color::Named(Blue))),
            45 => Some(Sgr::Background(Color::Named(Magenta))),
            46 => Some(Sgr::Background(Color::Named(Cyan))),
            47 => Some(Sgr::Background(Color::Named(White))),
            48 => crate::color::parse_extended_color(&mut iter).map(Sgr::Background),
            49 => Some(Sgr::Background(Color::Default)),
            90 => Some(Sgr::Foreground(Color::Named(BrightBlack))),
            91 => Some(Sgr::Foreground(Color::Named(BrightRed))),
            92 => Some(Sgr::Foreground(Color::Named(BrightGreen))),
            93 => Some(Sgr::Foreground(Color::Named(BrightYellow))),
            94 => Some(Sgr::Foreground(Color::Named(BrightBlue))),
            95 => Some(Sgr::Foreground(Color::Named(BrightMagenta))),
            96 => Some(Sgr::Foreground(Color::Named(BrightCyan))),
            97 => Some(Sgr::Foreground(Color::Named(BrightWhite))),
            100 => Some(Sgr::Background(Color::Named(BrightBlack))),
            101 => Some(Sgr::Background(Color::Named(BrightRed))),
            102 => Some(Sgr::Background(Color::Named(BrightGreen))),
            103 => Some(Sgr::Background(Color::Named(BrightYellow))),
            104 => Some(Sgr::Background(Color::Named(BrightBlue))),
            105 => Some(Sgr::Background(Color::Named(BrightMagenta))),
            106 => Some(Sgr::Background(Color::Named(BrightCyan))),
            107 => Some(Sgr::Background(Color::Named(BrightWhite))),
            _ => None,
        };

        if let Some(edit) = edit {
            out.push(edit);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_on_empty() {
        assert_eq!(parse_sgr_params(&[]), vec![Sgr::Reset]);
    }

    #[test]
    fn basic_colors_and_flags() {
        assert_eq!(
            parse_sgr_params(&[1, 31]),
            vec![Sgr::Bold(true), Sgr::Foreground(Color::Named(crate::color::NamedColor::Red))]
        );
    }

    #[test]
    fn extended_indexed_color() {
        assert_eq!(
            parse_sgr_params(&[38, 5, 202]),
            vec![Sgr::Foreground(Color::Indexed(202))]
        );
    }

    #[test]
    fn extended_rgb_color() {
        assert_eq!(
            parse_sgr_params(&[48, 2, 10, 20, 30]),
            vec![Sgr::Background(Color::Rgb(10, 20, 30))]
        );
    }

    #[test]
    fn unknown_params_are_dropped() {
        assert_eq!(parse_sgr_params(&[1, 999, 0]), vec![Sgr::Bold(true), Sgr::Reset]);
    }
}
