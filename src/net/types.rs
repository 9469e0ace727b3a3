//! Wire DTOs for the travel-agent chat endpoint.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Body of `POST /travel/chat`.
///
/// `conversation_id` is sent as `null` on the first message of a conversation;
/// the server starts a new one and returns its id.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    pub conversation_id: Option<String>,
}

/// Reply to `POST /travel/chat`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatResponse {
    /// Assistant reply, newline separated.
    pub response: String,
    pub conversation_id: String,
    /// Full server-side transcript after this exchange. Older deployments omit it.
    #[serde(default)]
    pub messages: Vec<TranscriptEntry>,
}

/// One entry of a server-side transcript.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptEntry {
    /// `user` or `assistant`.
    pub role: String,
    pub content: String,
}

/// Acknowledgement of `DELETE /travel/conversations/{id}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteAck {
    pub status: String,
    #[serde(default)]
    pub message: String,
}
