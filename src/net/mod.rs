//! Networking for the chat widget.
//!
//! SYSTEM CONTEXT
//! ==============
//! `types` defines the JSON schema of the travel-agent endpoint and `api`
//! the transport trait plus the browser implementation over `gloo-net`.

pub mod api;
pub mod types;
