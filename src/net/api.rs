//! Chat transport: the seam between the controller and the network.
//!
//! The browser build talks to the endpoint through `gloo-net`; the terminal
//! client provides its own reqwest implementation, and tests use in-memory
//! fakes.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is mapped onto [`ChatError`] so the controller can treat
//! status, transport, and decode errors uniformly.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use crate::error::ChatError;

use super::types::{ChatRequest, ChatResponse, TranscriptEntry};

/// Async transport for the travel-agent endpoint.
///
/// Futures are `?Send`: in the browser everything runs on the UI thread.
#[async_trait::async_trait(?Send)]
pub trait ChatTransport {
    /// `POST` one user message and return the assistant reply.
    ///
    /// # Errors
    ///
    /// [`ChatError::Status`] for non-2xx responses, [`ChatError::Transport`]
    /// when no response arrived, [`ChatError::Decode`] for a malformed body.
    async fn send(&self, request: &ChatRequest) -> Result<ChatResponse, ChatError>;

    /// Fetch the server-side transcript of a conversation.
    ///
    /// # Errors
    ///
    /// Same mapping as [`ChatTransport::send`]; an unknown id is a 404 status.
    async fn history(&self, conversation_id: &str) -> Result<Vec<TranscriptEntry>, ChatError>;

    /// Ask the server to drop a conversation.
    ///
    /// # Errors
    ///
    /// Same mapping as [`ChatTransport::send`].
    async fn forget(&self, conversation_id: &str) -> Result<(), ChatError>;
}

/// Map an HTTP status onto success or [`ChatError::Status`].
///
/// # Errors
///
/// Returns [`ChatError::Status`] for anything outside `200..300`.
pub fn ensure_success(status: u16) -> Result<(), ChatError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(ChatError::Status { status })
    }
}

// =============================================================================
// BROWSER TRANSPORT
// =============================================================================

/// `gloo-net` transport used by the page build.
///
/// No timeout beyond the browser's own fetch limits.
#[cfg(feature = "browser")]
#[derive(Clone, Debug)]
pub struct BrowserTransport {
    config: crate::config::WidgetConfig,
}

#[cfg(feature = "browser")]
impl BrowserTransport {
    pub fn new(config: crate::config::WidgetConfig) -> Self {
        Self { config }
    }
}

#[cfg(feature = "browser")]
#[async_trait::async_trait(?Send)]
impl ChatTransport for BrowserTransport {
    async fn send(&self, request: &ChatRequest) -> Result<ChatResponse, ChatError> {
        use gloo_net::http::Request;

        let resp = Request::post(&self.config.endpoint)
            .header("Content-Type", "application/json")
            .json(request)
            .map_err(|e| ChatError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ChatError::Transport(e.to_string()))?;
        ensure_success(resp.status())?;
        resp.json::<ChatResponse>()
            .await
            .map_err(|e| ChatError::Decode(e.to_string()))
    }

    async fn history(&self, conversation_id: &str) -> Result<Vec<TranscriptEntry>, ChatError> {
        use gloo_net::http::Request;

        let url = self.config.conversation_url(conversation_id);
        let resp = Request::get(&url)
            .send()
            .await
            .map_err(|e| ChatError::Transport(e.to_string()))?;
        ensure_success(resp.status())?;
        resp.json::<Vec<TranscriptEntry>>()
            .await
            .map_err(|e| ChatError::Decode(e.to_string()))
    }

    async fn forget(&self, conversation_id: &str) -> Result<(), ChatError> {
        use gloo_net::http::Request;

        let url = self.config.conversation_url(conversation_id);
        let resp = Request::delete(&url)
            .send()
            .await
            .map_err(|e| ChatError::Transport(e.to_string()))?;
        ensure_success(resp.status())
    }
}
