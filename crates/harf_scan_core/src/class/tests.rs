use super::*;

#[test]
fn arabic_bounds_are_inclusive() {
    let arabic = ScriptRange::ARABIC;
    assert_eq!(arabic.classify('\u{0620}'), CharClass::Token);
    assert_eq!(arabic.classify('\u{0670}'), CharClass::Token);
    assert_eq!(arabic.classify('\u{061F}'), CharClass::Boundary);
    assert_eq!(arabic.classify('\u{0671}'), CharClass::Boundary);
}

#[test]
fn arabic_indic_digits_are_token_chars() {
    for c in '\u{0660}'..='\u{0669}' {
        assert!(ScriptRange::ARABIC.is_token_char(c), "{c:?}");
    }
}

#[test]
fn joiner_is_token_char_in_any_range() {
    let greek = ScriptRange::new('\u{0391}', '\u{03C9}');
    assert_eq!(greek.map(|r| r.classify(JOINER)), Some(CharClass::Token));
    assert!(ScriptRange::ARABIC.is_token_char('_'));
}

#[test]
fn ascii_is_boundary_for_arabic() {
    for c in ['a', 'Z', '0', '9', ' ', '\t', '\n', '-', '.', '\u{0}'] {
        assert_eq!(ScriptRange::ARABIC.classify(c), CharClass::Boundary, "{c:?}");
    }
}

#[test]
fn new_rejects_inverted_range() {
    assert_eq!(ScriptRange::new('z', 'a'), None);
    let single = ScriptRange::new('x', 'x');
    assert_eq!(single.map(ScriptRange::low), Some('x'));
    assert_eq!(single.map(ScriptRange::high), Some('x'));
}

#[test]
fn default_is_arabic() {
    assert_eq!(ScriptRange::default(), ScriptRange::ARABIC);
}
