mod helpers;

use crossterm::event::KeyCode;
use helpers::TestContext;

/// Typing a prefix surfaces the lexicographically smallest completion.
#[test]
fn typing_surfaces_best_completion() {
    let mut ctx = TestContext::new(&["orange", "apple", "apricot"]);

    ctx.type_str("ap");
    assert_eq!(ctx.hint(), Some("apple".to_string()));

    ctx.type_str("r");
    assert_eq!(ctx.hint(), Some("apricot".to_string()));
}

#[test]
fn hint_always_extends_typed_text() {
    let mut ctx = TestContext::new(&["apple", "apricot"]);
    ctx.type_str("appl");

    let hint = ctx.hint().expect("hint should be held");
    assert!(hint.starts_with(&ctx.content()));
    assert_ne!(hint, ctx.content());
}

#[test]
fn exact_match_is_never_hinted() {
    let mut ctx = TestContext::new(&["ab", "abc", "abd"]);
    ctx.type_str("ab");
    assert_eq!(ctx.hint(), Some("abc".to_string()));
}

#[test]
fn no_match_clears_hint() {
    let mut ctx = TestContext::new(&["apple"]);
    ctx.type_str("app");
    assert!(ctx.input.is_suggesting());

    ctx.type_str("z");
    assert_eq!(ctx.hint(), None);
}

#[test]
fn deleting_back_to_empty_clears_hint() {
    let mut ctx = TestContext::new(&["apple"]);
    ctx.type_str("a");
    assert!(ctx.input.is_suggesting());

    ctx.press(KeyCode::Backspace);
    assert_eq!(ctx.content(), "");
    assert_eq!(ctx.hint(), None);
}

/// Right-arrow with the cursor at the end commits the full hint.
#[test]
fn right_arrow_at_end_commits_hint() {
    let mut ctx = TestContext::new(&["ab", "abc", "abd"]);
    ctx.type_str("ab");

    ctx.press(KeyCode::Right);

    assert_eq!(ctx.content(), "abc");
    assert!(!ctx.input.is_suggesting());
    assert!(ctx.input.buffer().is_at_end());
    // The commit reaches the caller's change hook with the new value
    assert_eq!(ctx.last_change(), Some("abc".to_string()));
}

/// Right-arrow mid-text is plain cursor movement; the hint survives.
#[test]
fn right_arrow_mid_text_does_not_commit() {
    let mut ctx = TestContext::new(&["abcd"]);
    ctx.type_str("ab");
    ctx.press(KeyCode::Left);

    let changes_before = ctx.changes().len();
    ctx.press(KeyCode::Right);

    assert_eq!(ctx.content(), "ab");
    assert_eq!(ctx.hint(), Some("abcd".to_string()));
    assert_eq!(ctx.changes().len(), changes_before);
    assert!(ctx.input.buffer().is_at_end());
}

#[test]
fn right_arrow_without_hint_is_plain_movement() {
    let mut ctx = TestContext::new(&[]);
    ctx.type_str("ab");
    ctx.press(KeyCode::Left);

    ctx.press(KeyCode::Right);

    assert_eq!(ctx.content(), "ab");
    assert_eq!(ctx.input.buffer().cursor_char_pos(), 2);
}

/// Numeric inputs have no selection range, so acceptance always treats the
/// cursor as at-end.
#[test]
fn numeric_input_always_counts_as_at_end() {
    let mut ctx = TestContext::numeric(&["1234"]);
    ctx.type_str("12");
    ctx.press(KeyCode::Left);

    ctx.press(KeyCode::Right);

    assert_eq!(ctx.content(), "1234");
    assert!(!ctx.input.is_suggesting());
}

/// If the value already equals the held hint (external mutation), right-arrow
/// commits nothing and the state is untouched.
#[test]
fn value_equal_to_hint_is_not_recommitted() {
    let mut ctx = TestContext::new(&["abc"]);
    ctx.type_str("ab");
    ctx.input.buffer_mut().set_content("abc");

    let changes_before = ctx.changes().len();
    ctx.press(KeyCode::Right);

    assert_eq!(ctx.content(), "abc");
    assert!(ctx.input.is_suggesting());
    assert_eq!(ctx.changes().len(), changes_before);
}

#[test]
fn blur_clears_hint_and_forwards() {
    let mut ctx = TestContext::new(&["apple"]);
    ctx.type_str("app");
    assert!(ctx.input.is_suggesting());

    ctx.blur();

    assert_eq!(ctx.hint(), None);
    assert_eq!(ctx.blurs(), 1);
    // The typed text itself is untouched
    assert_eq!(ctx.content(), "app");
}

/// The hint is a pure function of text and candidates: re-entering the same
/// text after clearing always reproduces the same hint.
#[test]
fn recomputation_is_deterministic() {
    let mut ctx = TestContext::new(&["apple", "apricot"]);

    ctx.type_str("ap");
    let first = ctx.hint();

    ctx.press_ctrl(KeyCode::Char('u'));
    assert_eq!(ctx.hint(), None);

    ctx.type_str("ap");
    assert_eq!(ctx.hint(), first);
}

/// Every key reaches the caller's key hook, committed or not.
#[test]
fn key_hook_sees_every_key() {
    let mut ctx = TestContext::new(&["abc"]);
    ctx.type_str("ab");
    ctx.press(KeyCode::Right);
    ctx.press(KeyCode::Right);

    assert_eq!(
        ctx.keys(),
        vec![
            KeyCode::Char('a'),
            KeyCode::Char('b'),
            KeyCode::Right,
            KeyCode::Right,
        ]
    );
}

/// Change hook fires once per content change, not for cursor movement.
#[test]
fn change_hook_tracks_content_only() {
    let mut ctx = TestContext::new(&["abc"]);
    ctx.type_str("ab");
    ctx.press(KeyCode::Left);
    ctx.press(KeyCode::Home);
    ctx.press(KeyCode::End);

    assert_eq!(ctx.changes(), vec!["a".to_string(), "ab".to_string()]);
}

#[test]
fn commit_clears_hint_until_next_edit() {
    let mut ctx = TestContext::new(&["abc", "abcd"]);
    ctx.type_str("ab");
    ctx.press(KeyCode::Right);
    assert_eq!(ctx.content(), "abc");
    // Idle after commit, even though "abcd" would extend the new text
    assert!(!ctx.input.is_suggesting());

    ctx.type_str("d");
    assert_eq!(ctx.content(), "abcd");
    assert_eq!(ctx.hint(), None);
}

#[test]
fn word_deletion_recomputes_hint() {
    let mut ctx = TestContext::new(&["one way", "one or two"]);
    ctx.type_str("one w");
    assert_eq!(ctx.hint(), Some("one way".to_string()));

    ctx.press_ctrl(KeyCode::Char('w'));
    assert_eq!(ctx.content(), "one ");
    assert_eq!(ctx.hint(), Some("one or two".to_string()));
}
