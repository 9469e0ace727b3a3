//! Client-side state owned by the widget controllers.

pub mod chat;
