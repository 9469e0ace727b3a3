#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

/// State of one chat widget.
///
/// Owned by a single `ChatController`; several widgets on a page each keep
/// their own conversation.
#[derive(Clone, Debug, Default)]
pub struct ChatState {
    pub messages: Vec<ChatMessage>,
    /// Last id returned by the server, `None` until the first successful reply.
    pub conversation_id: Option<String>,
    pub phase: ChatPhase,
}

impl ChatState {
    pub fn push(&mut self, origin: Origin, text: impl Into<String>) {
        self.messages.push(ChatMessage { origin, text: text.into() });
    }

    /// Forget everything about the current conversation.
    pub fn clear(&mut self) {
        self.messages.clear();
        self.conversation_id = None;
        self.phase = ChatPhase::Idle;
    }
}

/// A single chat message as shown in the widget.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatMessage {
    pub origin: Origin,
    pub text: String,
}

/// Who produced a message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Origin {
    User,
    Bot,
}

/// Where the widget is within a single exchange.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ChatPhase {
    #[default]
    Idle,
    /// Request in flight, typing indicator visible.
    Sending,
    /// Reply (or apology) being revealed line by line.
    Revealing,
}
