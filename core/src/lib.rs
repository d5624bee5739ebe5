//! Browser-free core of the ANDO.5 page widgets.
//!
//! This crate owns everything the chat widget and the name form decide on
//! their own: the transcript model, the remote API wire schema, the
//! request/response state machines, message formatting, and name
//! validation. Rendering adapters (`ando-widgets` in the browser,
//! `ando-cli` in a terminal) only translate user events into calls here and
//! draw the resulting state.

pub mod api;
pub mod cell;
pub mod chat;
pub mod config;
pub mod form;
pub mod format;
pub mod message;
pub mod strings;

pub use api::{ApiError, ChatApi};
pub use cell::StateCell;
pub use chat::ChatSession;
pub use config::WidgetConfig;
pub use form::{FormState, NameError};
pub use message::{Message, MessageBody, Sender};
