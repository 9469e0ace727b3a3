//! Chat controller: one widget's send/receive/reveal loop.
//!
//! DESIGN
//! ======
//! The controller owns the conversation id and the transcript. Rendering,
//! networking, and timers are injected through [`ChatSurface`],
//! [`ChatTransport`], and [`Clock`], so the same logic drives the page widget,
//! the terminal client, and the tests.
//!
//! All methods take `&self`; interior state lives in `RefCell`/`Cell` and is
//! never borrowed across an `.await`. The browser shares one controller as
//! `Rc<ChatController<..>>` between event handlers.
//!
//! CANCELLATION
//! ============
//! Every exchange captures the current epoch. [`ChatController::cancel`] bumps
//! it, which makes a reply still in flight get discarded and a running reveal
//! stop before its next line.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use std::cell::{Cell, RefCell};
use std::time::Duration;

use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::config::WidgetConfig;
use crate::error::ChatError;
use crate::fallback::pick_fallback;
use crate::net::api::ChatTransport;
use crate::net::types::{ChatRequest, TranscriptEntry};
use crate::reveal::{LineReveal, RevealLine};
use crate::state::chat::{ChatMessage, ChatPhase, ChatState, Origin};

/// Rendering capabilities the controller needs from its host.
pub trait ChatSurface {
    fn append_user_message(&self, text: &str);

    /// Open a new bot message; following `append_bot_line` calls go into it.
    fn begin_bot_message(&self);

    fn append_bot_line(&self, line: &RevealLine);

    fn show_typing_indicator(&self);

    /// Remove the typing indicator if present.
    fn hide_typing_indicator(&self);

    fn clear_input(&self);

    fn set_input_enabled(&self, enabled: bool);

    fn clear_messages(&self);
}

/// Timer used to pace reply reveals.
#[async_trait::async_trait(?Send)]
pub trait Clock {
    async fn sleep(&self, duration: Duration);
}

/// Result of [`ChatController::submit`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Input was blank after trimming; nothing happened.
    Ignored,
    /// Another exchange is still in flight; nothing happened.
    Busy,
    /// Reply received and fully revealed.
    Replied,
    /// Request failed; the apology (or a fallback reply) was shown.
    Failed(ChatError),
    /// The exchange was cancelled before it finished.
    Cancelled,
}

pub struct ChatController<S, T, C> {
    config: WidgetConfig,
    surface: S,
    transport: T,
    clock: C,
    state: RefCell<ChatState>,
    epoch: Cell<u64>,
    rng: RefCell<SmallRng>,
}

impl<S, T, C> ChatController<S, T, C>
where
    S: ChatSurface,
    T: ChatTransport,
    C: Clock,
{
    /// `seed` feeds the fallback reply picker.
    pub fn new(config: WidgetConfig, surface: S, transport: T, clock: C, seed: u64) -> Self {
        Self {
            config,
            surface,
            transport,
            clock,
            state: RefCell::new(ChatState::default()),
            epoch: Cell::new(0),
            rng: RefCell::new(SmallRng::seed_from_u64(seed)),
        }
    }

    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn conversation_id(&self) -> Option<String> {
        self.state.borrow().conversation_id.clone()
    }

    pub fn phase(&self) -> ChatPhase {
        self.state.borrow().phase
    }

    pub fn is_busy(&self) -> bool {
        self.phase() != ChatPhase::Idle
    }

    /// Local transcript of this widget, oldest first.
    pub fn messages(&self) -> Vec<ChatMessage> {
        self.state.borrow().messages.clone()
    }

    /// Handle one user submission (send button or Enter).
    pub async fn submit(&self, raw: &str) -> SubmitOutcome {
        let text = raw.trim();
        if text.is_empty() {
            return SubmitOutcome::Ignored;
        }
        if self.is_busy() {
            log::debug!("chat exchange in flight; ignoring submit");
            return SubmitOutcome::Busy;
        }

        let epoch = self.epoch.get();
        let request = {
            let mut state = self.state.borrow_mut();
            state.push(Origin::User, text);
            state.phase = ChatPhase::Sending;
            ChatRequest { message: text.to_owned(), conversation_id: state.conversation_id.clone() }
        };

        self.surface.append_user_message(text);
        self.surface.clear_input();
        self.surface.set_input_enabled(false);
        self.surface.show_typing_indicator();

        let result = self.transport.send(&request).await;
        if self.epoch.get() != epoch {
            log::debug!("discarding reply for a cancelled exchange");
            return SubmitOutcome::Cancelled;
        }
        self.surface.hide_typing_indicator();

        let (reply, outcome) = match result {
            Ok(resp) => {
                log::debug!("reply received for conversation {}", resp.conversation_id);
                self.state.borrow_mut().conversation_id = Some(resp.conversation_id);
                (resp.response, SubmitOutcome::Replied)
            }
            Err(err) => {
                log::error!("chat request failed: {err}");
                (self.failure_message(&err), SubmitOutcome::Failed(err))
            }
        };

        self.state.borrow_mut().push(Origin::Bot, reply.as_str());
        if !self.reveal(&reply, epoch).await {
            return SubmitOutcome::Cancelled;
        }

        self.state.borrow_mut().phase = ChatPhase::Idle;
        self.surface.set_input_enabled(true);
        outcome
    }

    /// Abandon the current exchange, if any.
    ///
    /// A reply still in flight is discarded when it lands; a running reveal
    /// stops before its next line. Input is re-enabled immediately.
    pub fn cancel(&self) {
        self.epoch.set(self.epoch.get().wrapping_add(1));
        let was_busy = {
            let mut state = self.state.borrow_mut();
            let busy = state.phase != ChatPhase::Idle;
            state.phase = ChatPhase::Idle;
            busy
        };
        if was_busy {
            self.surface.hide_typing_indicator();
            self.surface.set_input_enabled(true);
        }
    }

    /// Start over: cancel, clear the widget, and drop the server-side conversation.
    ///
    /// Failing to drop the remote conversation is logged and otherwise ignored;
    /// the next message starts a fresh conversation either way.
    pub async fn reset(&self) {
        self.cancel();
        let previous = {
            let mut state = self.state.borrow_mut();
            let id = state.conversation_id.take();
            state.clear();
            id
        };
        self.surface.clear_messages();

        if let Some(id) = previous {
            if let Err(err) = self.transport.forget(&id).await {
                log::warn!("failed to drop conversation {id}: {err}");
            }
        }
    }

    /// Server-side transcript of the current conversation; empty before the first reply.
    ///
    /// # Errors
    ///
    /// Propagates the transport's [`ChatError`].
    pub async fn history(&self) -> Result<Vec<TranscriptEntry>, ChatError> {
        let Some(id) = self.conversation_id() else {
            return Ok(Vec::new());
        };
        self.transport.history(&id).await
    }

    /// Reveal `text` line by line. Returns `false` if cancelled part way.
    async fn reveal(&self, text: &str, epoch: u64) -> bool {
        self.state.borrow_mut().phase = ChatPhase::Revealing;
        self.surface.begin_bot_message();

        for step in LineReveal::new(text, self.config.pacing, &self.config.header_keywords) {
            if !step.wait.is_zero() {
                self.clock.sleep(step.wait).await;
            }
            if self.epoch.get() != epoch {
                log::debug!("reveal cancelled");
                return false;
            }
            self.surface.append_bot_line(&step.line);
        }
        true
    }

    fn failure_message(&self, err: &ChatError) -> String {
        if self.config.fallback_on_unreachable && err.is_unreachable() {
            pick_fallback(&mut *self.rng.borrow_mut()).to_owned()
        } else {
            self.config.apology.clone()
        }
    }
}
