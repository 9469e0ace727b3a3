//! # travel-chat
//!
//! Page enhancement layer for the travel-planner landing page: mobile menu
//! toggle, smooth anchor scrolling, and the hero chat widget that talks to the
//! remote travel-agent endpoint.
//!
//! The controllers are written against small traits (`ChatSurface`, `Page`,
//! `ChatTransport`, `Clock`) so everything below `browser` runs natively in
//! tests and in the terminal client. The `browser` feature adds the web-sys
//! bindings and the WASM start hook.

pub mod config;
pub mod controller;
pub mod error;
pub mod fallback;
pub mod nav;
pub mod net;
pub mod reveal;
pub mod state;

#[cfg(feature = "browser")]
pub mod dom;

pub use config::WidgetConfig;
pub use controller::{ChatController, ChatSurface, Clock, SubmitOutcome};
pub use error::{ChatError, ConfigError};
pub use nav::{NavController, Page};
pub use net::api::ChatTransport;
