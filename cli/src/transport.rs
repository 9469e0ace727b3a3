//! reqwest implementation of the chat transport.

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

use std::time::Duration;

use travel_chat::ChatError;
use travel_chat::WidgetConfig;
use travel_chat::net::api::{ChatTransport, ensure_success};
use travel_chat::net::types::{ChatRequest, ChatResponse, TranscriptEntry};

pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 120;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

impl Default for Timeouts {
    fn default() -> Self {
        Self { request_secs: DEFAULT_REQUEST_TIMEOUT_SECS, connect_secs: DEFAULT_CONNECT_TIMEOUT_SECS }
    }
}

pub struct HttpTransport {
    client: reqwest::Client,
    config: WidgetConfig,
}

impl HttpTransport {
    /// # Errors
    ///
    /// Returns the reqwest error if the HTTP client cannot be built.
    pub fn new(config: &WidgetConfig, timeouts: Timeouts) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeouts.request_secs))
            .connect_timeout(Duration::from_secs(timeouts.connect_secs))
            .build()?;
        Ok(Self { client, config: config.clone() })
    }

    async fn fetch(&self, request: reqwest::RequestBuilder) -> Result<reqwest::Response, ChatError> {
        let resp = request.send().await.map_err(|e| ChatError::Transport(e.to_string()))?;
        ensure_success(resp.status().as_u16())?;
        Ok(resp)
    }
}

#[async_trait::async_trait(?Send)]
impl ChatTransport for HttpTransport {
    async fn send(&self, request: &ChatRequest) -> Result<ChatResponse, ChatError> {
        let resp = self.fetch(self.client.post(&self.config.endpoint).json(request)).await?;
        resp.json::<ChatResponse>()
            .await
            .map_err(|e| ChatError::Decode(e.to_string()))
    }

    async fn history(&self, conversation_id: &str) -> Result<Vec<TranscriptEntry>, ChatError> {
        let url = self.config.conversation_url(conversation_id);
        let resp = self.fetch(self.client.get(url)).await?;
        resp.json::<Vec<TranscriptEntry>>()
            .await
            .map_err(|e| ChatError::Decode(e.to_string()))
    }

    async fn forget(&self, conversation_id: &str) -> Result<(), ChatError> {
        let url = self.config.conversation_url(conversation_id);
        self.fetch(self.client.delete(url)).await?;
        Ok(())
    }
}
