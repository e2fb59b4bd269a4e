use super::*;
use crate::message::{FALLBACK_REPLY, Origin};

// =============================================================
// Initial state
// =============================================================

#[test]
fn new_state_has_only_greeting() {
    let state = ConversationState::new();
    assert_eq!(state.messages(), &[Message::assistant("Hello! How can I help you?")]);
    assert!(state.draft.is_empty());
    assert!(!state.is_open);
    assert!(!state.is_pending());
}

// =============================================================
// begin_submit
// =============================================================

#[test]
fn submit_appends_user_message_and_marks_pending() {
    let mut state = ConversationState::new();
    state.set_draft("hi");

    let text = state.begin_submit("hi");

    assert_eq!(text.as_deref(), Some("hi"));
    assert_eq!(state.messages(), &[Message::greeting(), Message::user("hi")]);
    assert!(state.draft.is_empty());
    assert!(state.is_pending());
}

#[test]
fn submit_whitespace_is_noop() {
    let mut state = ConversationState::new();
    state.set_draft("  ");
    let before = state.clone();

    assert!(state.begin_submit("  ").is_none());
    assert_eq!(state, before);
}

#[test]
fn submit_while_pending_is_noop() {
    let mut state = ConversationState::new();
    state.begin_submit("first").unwrap();
    state.set_draft("second");

    assert!(state.begin_submit("second").is_none());
    assert_eq!(state.messages().len(), 2);
    assert_eq!(state.draft, "second");
}

#[test]
fn submit_keeps_untrimmed_text() {
    let mut state = ConversationState::new();
    assert_eq!(state.begin_submit(" hi ").as_deref(), Some(" hi "));
    assert_eq!(state.messages()[1].text, " hi ");
}

#[test]
fn submit_draft_uses_current_draft() {
    let mut state = ConversationState::new();
    state.set_draft("from draft");
    assert_eq!(state.submit_draft().as_deref(), Some("from draft"));
    assert!(state.draft.is_empty());
}

#[test]
fn draft_editable_while_pending() {
    let mut state = ConversationState::new();
    state.begin_submit("hi").unwrap();
    state.set_draft("typing ahead");
    assert_eq!(state.draft, "typing ahead");
    assert!(!state.can_send());
}

// =============================================================
// finish_exchange / abandon_exchange
// =============================================================

#[test]
fn finish_appends_reply_and_clears_pending() {
    let mut state = ConversationState::new();
    state.begin_submit("hi").unwrap();
    state.finish_exchange(Message::assistant("hello!"));

    assert_eq!(
        state.messages(),
        &[Message::greeting(), Message::user("hi"), Message::assistant("hello!")]
    );
    assert!(!state.is_pending());
}

#[test]
fn finish_with_fallback_appends_fixed_text() {
    let mut state = ConversationState::new();
    state.begin_submit("hi").unwrap();
    state.finish_exchange(Message::fallback());

    let last = state.messages().last().unwrap();
    assert_eq!(last.origin, Origin::Assistant);
    assert_eq!(last.text, FALLBACK_REPLY);
}

#[test]
fn abandon_clears_pending_without_appending() {
    let mut state = ConversationState::new();
    state.begin_submit("hi").unwrap();
    state.abandon_exchange();

    assert_eq!(state.messages().len(), 2);
    assert!(!state.is_pending());
    assert!(state.begin_submit("again").is_some());
}

#[test]
fn transcript_length_never_decreases() {
    let mut state = ConversationState::new();
    let mut last_len = state.messages().len();
    for text in ["a", " ", "b", "", "c"] {
        state.begin_submit(text);
        assert!(state.messages().len() >= last_len);
        last_len = state.messages().len();
        if state.is_pending() {
            state.finish_exchange(Message::assistant("ok"));
        }
        assert!(state.messages().len() >= last_len);
        last_len = state.messages().len();
    }
    assert_eq!(last_len, 7);
}

// =============================================================
// can_send
// =============================================================

#[test]
fn can_send_requires_non_blank_draft() {
    let mut state = ConversationState::new();
    assert!(!state.can_send());
    state.set_draft(" \t");
    assert!(!state.can_send());
    state.set_draft("help");
    assert!(state.can_send());
}

// =============================================================
// Panel visibility
// =============================================================

#[test]
fn toggle_panel_flips_open() {
    let mut state = ConversationState::new();
    state.toggle_panel();
    assert!(state.is_open);
    state.toggle_panel();
    assert!(!state.is_open);
}

#[test]
fn close_panel_is_idempotent() {
    let mut state = ConversationState::new();
    state.close_panel();
    assert!(!state.is_open);
    state.toggle_panel();
    state.close_panel();
    state.close_panel();
    assert!(!state.is_open);
}

#[test]
fn pointer_down_outside_closes_open_panel() {
    let mut state = ConversationState::new();
    state.toggle_panel();
    state.pointer_down(false);
    assert!(!state.is_open);
}

#[test]
fn pointer_down_inside_keeps_panel_open() {
    let mut state = ConversationState::new();
    state.toggle_panel();
    state.pointer_down(true);
    assert!(state.is_open);
}

#[test]
fn pointer_down_when_closed_is_noop() {
    let mut state = ConversationState::new();
    state.pointer_down(false);
    assert!(!state.is_open);
}

// =============================================================
// is_submit_key
// =============================================================

#[test]
fn enter_without_shift_submits() {
    assert!(is_submit_key("Enter", false));
}

#[test]
fn shift_enter_does_not_submit() {
    assert!(!is_submit_key("Enter", true));
}

#[test]
fn other_keys_do_not_submit() {
    assert!(!is_submit_key("a", false));
    assert!(!is_submit_key("Tab", false));
}
