use super::*;

// === Peek / Advance ===

#[test]
fn peek_does_not_consume() {
    let cursor = Cursor::new("ab");
    assert_eq!(cursor.peek(), Some('a'));
    assert_eq!(cursor.peek(), Some('a'));
    assert_eq!(cursor.pos(), 0);
}

#[test]
fn advance_returns_and_consumes() {
    let mut cursor = Cursor::new("ab");
    assert_eq!(cursor.advance(), Some('a'));
    assert_eq!(cursor.peek(), Some('b'));
    assert_eq!(cursor.pos(), 1);
}

#[test]
fn advance_through_entire_source() {
    let mut cursor = Cursor::new("hi");
    assert_eq!(cursor.advance(), Some('h'));
    assert_eq!(cursor.advance(), Some('i'));
    assert!(cursor.is_eof());
    assert_eq!(cursor.advance(), None);
    assert_eq!(cursor.peek(), None);
}

#[test]
fn empty_source_is_eof() {
    let mut cursor = Cursor::new("");
    assert!(cursor.is_eof());
    assert_eq!(cursor.peek(), None);
    assert_eq!(cursor.advance(), None);
    assert_eq!(cursor.position(), Position::START);
}

#[test]
fn advance_at_eof_keeps_position() {
    let mut cursor = Cursor::new("x");
    cursor.advance();
    let before = cursor.position();
    assert_eq!(cursor.advance(), None);
    assert_eq!(cursor.position(), before);
    assert_eq!(cursor.pos(), 1);
}

// === Line / Column ===

#[test]
fn column_counts_characters() {
    let mut cursor = Cursor::new("abc");
    assert_eq!(cursor.position(), Position::new(1, 1));
    cursor.advance();
    cursor.advance();
    assert_eq!(cursor.position(), Position::new(1, 3));
}

#[test]
fn newline_bumps_line_and_resets_column() {
    let mut cursor = Cursor::new("ab\ncd");
    cursor.advance();
    cursor.advance();
    assert_eq!(cursor.position(), Position::new(1, 3));
    assert_eq!(cursor.advance(), Some('\n'));
    assert_eq!(cursor.position(), Position::new(2, 1));
    cursor.advance();
    assert_eq!(cursor.position(), Position::new(2, 2));
}

#[test]
fn multibyte_char_advances_one_column() {
    let mut cursor = Cursor::new("é!");
    assert_eq!(cursor.advance(), Some('é'));
    assert_eq!(cursor.pos(), 2); // two UTF-8 bytes
    assert_eq!(cursor.position(), Position::new(1, 2));
    assert_eq!(cursor.peek(), Some('!'));
}

#[test]
fn carriage_return_is_an_ordinary_column() {
    let mut cursor = Cursor::new("\r\n");
    cursor.advance();
    assert_eq!(cursor.position(), Position::new(1, 2));
    cursor.advance();
    assert_eq!(cursor.position(), Position::new(2, 1));
}

// === Position ===

#[test]
fn position_display() {
    assert_eq!(Position::new(3, 14).to_string(), "3:14");
    assert_eq!(Position::default(), Position::START);
}

#[test]
fn copy_snapshots_are_independent() {
    let mut cursor = Cursor::new("xyz");
    let snapshot = cursor;
    cursor.advance();
    assert_eq!(snapshot.peek(), Some('x'));
    assert_eq!(cursor.peek(), Some('y'));
    assert_eq!(snapshot.source(), cursor.source());
}

// === Property tests ===

mod proptest_cursor {
    use super::super::Cursor;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn pos_never_decreases_and_reaches_len(source in "\\PC{0,64}") {
            let mut cursor = Cursor::new(&source);
            let mut last = cursor.pos();
            while cursor.advance().is_some() {
                prop_assert!(cursor.pos() > last);
                prop_assert!(cursor.pos() <= source.len());
                last = cursor.pos();
            }
            prop_assert_eq!(cursor.pos(), source.len());
        }

        #[test]
        fn line_count_matches_newlines(source in "[a-z\\n ]{0,64}") {
            let mut cursor = Cursor::new(&source);
            while cursor.advance().is_some() {}
            let newlines = source.matches('\n').count();
            prop_assert_eq!(cursor.position().line as usize, newlines + 1);
        }
    }
}
