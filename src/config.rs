//! Widget configuration.
//!
//! Every field has a default matching the landing page markup, so an absent
//! or partial JSON block is fine. In the browser the block is read from
//! `<script type="application/json" id="chat-widget-config">`; the terminal
//! client builds the struct from its command-line arguments instead.

use std::time::Duration;

use serde::Deserialize;

use crate::error::ConfigError;

pub const DEFAULT_CHAT_ENDPOINT: &str = "https://taz-ai.onrender.com/travel/chat";
pub const DEFAULT_HEADER_OFFSET: f64 = 80.0;
pub const CONFIG_ELEMENT_ID: &str = "chat-widget-config";
pub const APOLOGY_MESSAGE: &str =
    "I'm sorry, I'm having trouble connecting to the server. Please try again later.";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    /// Absolute URL or root-relative path of the chat endpoint.
    pub endpoint: String,
    /// Height of the fixed page header; anchor targets land this far below the viewport top.
    pub header_offset: f64,
    /// Reply lines starting with one of these are rendered emphasized.
    pub header_keywords: Vec<String>,
    pub pacing: RevealPacing,
    pub apology: String,
    /// Substitute a canned reply for the apology when the service is unreachable.
    pub fallback_on_unreachable: bool,
    pub selectors: Selectors,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_CHAT_ENDPOINT.to_owned(),
            header_offset: DEFAULT_HEADER_OFFSET,
            header_keywords: vec!["Day".to_owned(), "Budget".to_owned()],
            pacing: RevealPacing::default(),
            apology: APOLOGY_MESSAGE.to_owned(),
            fallback_on_unreachable: false,
            selectors: Selectors::default(),
        }
    }
}

impl WidgetConfig {
    /// Parse and validate a JSON config block.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and
    /// [`ConfigError::Invalid`] when a value fails validation.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let mut config: Self = serde_json::from_str(raw)?;
        config.endpoint = config.endpoint.trim().trim_end_matches('/').to_owned();
        config.validate()?;
        Ok(config)
    }

    /// Check invariants that serde defaults cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_endpoint(&self.endpoint)?;
        if !self.header_offset.is_finite() || self.header_offset < 0.0 {
            return Err(ConfigError::Invalid {
                field: "header_offset",
                reason: format!("expected a non-negative number, got {}", self.header_offset),
            });
        }
        Ok(())
    }

    /// Base path shared by the conversation endpoints: the chat endpoint with
    /// its last segment removed (`.../travel/chat` -> `.../travel`).
    pub fn service_base(&self) -> &str {
        let endpoint = self.endpoint.trim_end_matches('/');
        let path_start = endpoint.find("://").map_or(0, |i| i + 3);
        match endpoint[path_start..].rfind('/') {
            Some(i) => &endpoint[..path_start + i],
            None => endpoint,
        }
    }

    /// URL of a single server-side conversation.
    pub fn conversation_url(&self, conversation_id: &str) -> String {
        format!("{}/conversations/{conversation_id}", self.service_base())
    }
}

fn validate_endpoint(endpoint: &str) -> Result<(), ConfigError> {
    if endpoint.is_empty() {
        return Err(ConfigError::Invalid { field: "endpoint", reason: "must not be empty".to_owned() });
    }
    let absolute = endpoint.starts_with("https://") || endpoint.starts_with("http://");
    if !absolute && !endpoint.starts_with('/') {
        return Err(ConfigError::Invalid {
            field: "endpoint",
            reason: format!("expected an http(s) URL or a root-relative path, got '{endpoint}'"),
        });
    }
    Ok(())
}

// =============================================================================
// PACING
// =============================================================================

/// Delays used while revealing a reply line by line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RevealPacing {
    pub short_line_ms: u64,
    pub long_line_ms: u64,
    /// Lines with more characters than this use `long_line_ms`.
    pub long_line_threshold: usize,
    pub blank_line_ms: u64,
}

impl Default for RevealPacing {
    fn default() -> Self {
        Self { short_line_ms: 300, long_line_ms: 500, long_line_threshold: 50, blank_line_ms: 100 }
    }
}

impl RevealPacing {
    /// No waits at all; every line is emitted back to back.
    pub const INSTANT: Self = Self { short_line_ms: 0, long_line_ms: 0, long_line_threshold: 0, blank_line_ms: 0 };

    /// Pause after a rendered line before the next one.
    pub fn delay_after(&self, line: &str) -> Duration {
        if line.chars().count() > self.long_line_threshold {
            Duration::from_millis(self.long_line_ms)
        } else {
            Duration::from_millis(self.short_line_ms)
        }
    }

    pub fn blank_line(&self) -> Duration {
        Duration::from_millis(self.blank_line_ms)
    }
}

// =============================================================================
// SELECTORS
// =============================================================================

/// Host page hooks. Class/attribute selectors go through `querySelector`,
/// the chat elements are looked up by id.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Selectors {
    pub menu_button: String,
    pub nav_links: String,
    pub anchors: String,
    pub messages_id: String,
    pub input_id: String,
    pub send_button_id: String,
    /// Optional "new conversation" button; absent on the stock page.
    pub reset_button_id: Option<String>,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            menu_button: ".mobile-menu-btn".to_owned(),
            nav_links: ".nav-links".to_owned(),
            anchors: "a[href^=\"#\"]".to_owned(),
            messages_id: "hero-chat-messages".to_owned(),
            input_id: "hero-user-input".to_owned(),
            send_button_id: "hero-send-button".to_owned(),
            reset_button_id: None,
        }
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
