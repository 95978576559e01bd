use vtcore::Terminal;

fn lines(n: usize) -> Vec<u8> {
    let mut out = Vec::new();
    for i in 1..=n {
        out.extend_from_slice(format!("Line {i}\r\n").as_bytes());
    }
    out
}

#[test]
fn s1_scrollback_capture_on_overflow() {
    let mut term = Terminal::new(80, 24).unwrap();
    term.set_max_history_lines(1000);
    term.feed(&lines(30));

    assert_eq!(term.get_history_size(), 7);
    let display = term.get_display();
    assert!(display[0].starts_with("Line 8"));
    assert!(display[22].starts_with("Line 30"));
    assert_eq!(display[23].trim_end(), "");
}

#[test]
fn s2_alt_screen_round_trip_preserves_main_and_history() {
    let mut term = Terminal::new(80, 24).unwrap();
    term.feed(&lines(30));
    let history_before = term.get_history_size();
    let display_before = term.get_display();

    term.feed(b"\x1b[?1049h");
    assert!(term.is_using_alternate());
    for i in 0..10 {
        term.feed(format!("alt {i}\r\n").as_bytes());
    }
    term.feed(b"\x1b[?1049l");

    assert!(!term.is_using_alternate());
    assert_eq!(term.get_display(), display_before);
    assert_eq!(term.get_history_size(), history_before);
}

#[test]
fn s3_wide_character_overwritten_by_cursor_home() {
    let mut term = Terminal::new(10, 3).unwrap();
    term.feed("你好".as_bytes());
    term.feed(b"\x1b[H");
    term.feed(b"Hi");

    let display = term.get_display();
    assert_eq!(display[0].trim_end(), "Hi好");
}

#[test]
fn s4_custom_margins_confine_scroll_to_region() {
    let mut term = Terminal::new(80, 24).unwrap();
    term.feed(b"\x1b[5;20r");
    assert_eq!(term.get_cursor(), (0, 4, false));

    term.feed(b"\x1b[20H\r\nX");

    let display = term.get_display();
    for row in display[0..4].iter().chain(display[20..24].iter()) {
        assert_eq!(row.trim_end(), "");
    }
}

#[test]
fn s5_scroll_to_top_shows_oldest_history_line() {
    let mut term = Terminal::new(80, 24).unwrap();
    term.feed(&lines(100));
    term.scroll_up(1000);

    let display = term.get_display();
    assert_eq!(display[0].trim_end(), "Line 1");
    assert!(term.get_cursor().2, "cursor should report hidden while viewing history");
}

#[test]
fn s6_sgr_reset_restores_default_foreground() {
    use vtcore_escape::{Color, NamedColor};

    let mut term = Terminal::new(80, 24).unwrap();
    term.feed(b"\x1b[31mRed\x1b[0m Normal");

    let attrs = term.get_attributes();
    assert_eq!(attrs[0][0].fg, Color::Named(NamedColor::Red));
    assert_eq!(attrs[0][2].fg, Color::Named(NamedColor::Red));
    assert_eq!(attrs[0][3].fg, Color::Default);
}
