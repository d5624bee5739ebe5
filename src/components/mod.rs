//! Widget component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the chat and form surfaces while reading/writing shared
//! state from Leptos context providers.

pub mod chat_widget;
pub mod name_form;
pub mod notifications;
