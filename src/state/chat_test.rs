use super::*;

// =============================================================
// ChatState defaults
// =============================================================

#[test]
fn chat_state_default_empty_messages() {
    let state = ChatState::default();
    assert!(state.messages.is_empty());
    assert!(state.conversation_id.is_none());
    assert_eq!(state.phase, ChatPhase::Idle);
}

// =============================================================
// push / clear
// =============================================================

#[test]
fn push_keeps_insertion_order() {
    let mut state = ChatState::default();
    state.push(Origin::User, "Hi");
    state.push(Origin::Bot, String::from("Hello! Where to?"));
    assert_eq!(
        state.messages,
        vec![
            ChatMessage { origin: Origin::User, text: "Hi".to_owned() },
            ChatMessage { origin: Origin::Bot, text: "Hello! Where to?".to_owned() },
        ]
    );
}

#[test]
fn clear_drops_conversation() {
    let mut state = ChatState::default();
    state.push(Origin::User, "Hi");
    state.conversation_id = Some("c-1".to_owned());
    state.phase = ChatPhase::Revealing;

    state.clear();

    assert!(state.messages.is_empty());
    assert!(state.conversation_id.is_none());
    assert_eq!(state.phase, ChatPhase::Idle);
}
