//! Colors as they appear in SGR parameters and OSC payloads.

/// The 8 standard plus 8 bright ANSI colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamedColor {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
}

/// A terminal color: the implicit default, one of the 16 named colors, a
/// 256-color palette index, or a raw 24-bit triple.
///
/// `Rgb` is stored opaquely; nothing in this crate quantizes it to a
/// palette entry, matching xterm's own "store what was sent" behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Color {
    #[default]
    Default,
    Named(NamedColor),
    Indexed(u8),
    Rgb(u8, u8, u8),
}

/// Consumes `38;5;N` / `38;2;R;G;B` style sub-parameters (and their `48;`
/// background equivalents) from an already-positioned parameter iterator.
pub(crate) fn parse_extended_color<I>(iter: &mut I) -> Option<Color>
where
    I: Iterator<Item = i64>,
{
    match iter.next()? {
        5 => {
            let index = iter.next()?;
            (0..=255).contains(&index).then_some(Color::Indexed(index as u8))
        },
        2 => {
            let r = iter.next()?;
            let g = iter.next()?;
            let b = iter.next()?;
            if !(0..=255).contains(&r) || !(0..=255).contains(&g) || !(0..=255).contains(&b) {
                return None;
            }
            Some(Color::Rgb(r as u8, g as u8, b as u8))
        },
        _ => None,
    }
}
