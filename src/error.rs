//! Error types for the chat round trip and widget configuration.

// =============================================================================
// CHAT
// =============================================================================

/// Failures of a single chat exchange.
///
/// None of these are fatal: the controller logs them and shows one apology
/// line, then goes back to accepting input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChatError {
    /// The endpoint answered with a non-2xx status.
    #[error("chat endpoint returned HTTP {status}")]
    Status { status: u16 },

    /// The request never produced a response (DNS, connection refused, CORS, ...).
    #[error("chat request failed: {0}")]
    Transport(String),

    /// A 2xx response whose body did not match the expected JSON shape.
    #[error("chat response parse failed: {0}")]
    Decode(String),
}

impl ChatError {
    /// True when the service could not be reached at all.
    pub fn is_unreachable(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}

// =============================================================================
// CONFIG
// =============================================================================

/// Errors produced while loading [`crate::WidgetConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config parse failed: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config value for `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}
