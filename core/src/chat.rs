//! Chat widget session: visibility, request cycle, transcript, suggestions.
//!
//! DESIGN
//! ======
//! Two orthogonal state machines live here. Visibility is `Closed`/`Open`
//! (`is_open`). The request cycle is `Idle`/`Awaiting` (`is_loading`):
//! [`ChatSession::begin_send`] is the only way into `Awaiting` and
//! [`ChatSession::finish_send`] the only way out, and it runs for every
//! outcome. While `Awaiting`, further sends are dropped, never queued, so at
//! most one `/chat` call is outstanding per session.
//!
//! The async drivers at the bottom sequence a transition, the remote call,
//! and the closing transition through a [`StateCell`]; they own no state.

use crate::api::{ApiError, ChatApi, ChatReply, ChatRequest, Recommendation, RecommendRequest};
use crate::cell::StateCell;
use crate::message::Message;
use crate::strings;

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChatSession {
    pub is_open: bool,
    /// A `/chat` request is outstanding.
    pub is_loading: bool,
    /// The typing placeholder is shown at the end of the transcript.
    pub typing: bool,
    /// Current content of the text input.
    pub input: String,
    pub messages: Vec<Message>,
    pub suggestions: Vec<String>,
}

impl ChatSession {
    /// Flip visibility. The first opening of an empty transcript appends the
    /// welcome messages. Returns the new `is_open`.
    pub fn toggle(&mut self) -> bool {
        self.is_open = !self.is_open;
        if self.is_open && self.messages.is_empty() {
            self.messages.extend(strings::WELCOME_MESSAGES.iter().map(|text| Message::ai(text)));
        }
        self.is_open
    }

    pub fn set_input(&mut self, text: &str) {
        text.clone_into(&mut self.input);
    }

    /// Enter `Awaiting` with the current input.
    ///
    /// No-op returning `None` while a request is outstanding or when the
    /// trimmed input is empty. Otherwise appends the user message, clears
    /// the input, shows the typing placeholder, and returns the request to
    /// send.
    pub fn begin_send(&mut self) -> Option<ChatRequest> {
        if self.is_loading {
            return None;
        }
        let text = self.input.trim();
        if text.is_empty() {
            return None;
        }

        let message = text.to_owned();
        self.messages.push(Message::user(&message));
        self.input.clear();
        self.typing = true;
        self.is_loading = true;
        Some(ChatRequest { message })
    }

    /// Leave `Awaiting`, rendering the outcome of the request.
    pub fn finish_send(&mut self, result: Result<ChatReply, ApiError>) {
        self.typing = false;

        match result {
            Ok(reply) => {
                log::debug!("chat reply: intent={:?} confidence={:?}", reply.intent, reply.confidence);
                self.messages.push(Message::ai(&reply.message));
                if let Some(info) = reply.data {
                    self.messages.push(Message::info(info));
                }
                if let Some(suggestions) = reply.suggestions {
                    self.apply_suggestions(suggestions);
                }
            }
            Err(e) if e.is_logical() => {
                log::warn!("chat request rejected: {e}");
                self.messages.push(Message::ai(strings::PROCESSING_FAILED));
            }
            Err(e) => {
                log::warn!("chat request failed: {e}");
                self.messages.push(Message::ai(strings::CONNECTION_FAILED));
            }
        }

        self.is_loading = false;
    }

    /// Replace the suggestion set wholesale.
    pub fn apply_suggestions(&mut self, suggestions: Vec<String>) {
        self.suggestions = suggestions;
    }

    pub fn apply_recommendation(&mut self, recommendation: &Recommendation) {
        self.messages.push(Message::ai(&recommendation.compose()));
    }
}

// =============================================================================
// ASYNC DRIVERS
// =============================================================================

/// Send the current input. Returns `false` when the send was dropped.
pub async fn send_message<C, A>(cell: &C, api: &A) -> bool
where
    C: StateCell<ChatSession>,
    A: ChatApi + ?Sized,
{
    let Some(request) = cell.with_mut(ChatSession::begin_send).flatten() else {
        return false;
    };
    let result = api.chat(&request).await;
    cell.with_mut(|session| session.finish_send(result)).is_some()
}

/// Put `label` in the input and send it through [`send_message`].
pub async fn select_suggestion<C, A>(cell: &C, api: &A, label: &str) -> bool
where
    C: StateCell<ChatSession>,
    A: ChatApi + ?Sized,
{
    if cell.with_mut(|session| session.set_input(label)).is_none() {
        return false;
    }
    send_message(cell, api).await
}

/// Fetch the initial suggestion set. Failures are logged only.
pub async fn load_suggestions<C, A>(cell: &C, api: &A)
where
    C: StateCell<ChatSession>,
    A: ChatApi + ?Sized,
{
    match api.suggestions().await {
        Ok(suggestions) => {
            cell.with_mut(|session| session.apply_suggestions(suggestions));
        }
        Err(e) => log::error!("Error loading suggestions: {e}"),
    }
}

/// Fetch a recommendation for `name` and `language` and append it as one
/// assistant message. Failures are logged only.
pub async fn request_recommendation<C, A>(cell: &C, api: &A, name: &str, language: &str)
where
    C: StateCell<ChatSession>,
    A: ChatApi + ?Sized,
{
    let request = RecommendRequest { name: name.to_owned(), language: language.to_owned() };
    match api.recommend(&request).await {
        Ok(recommendation) => {
            cell.with_mut(|session| session.apply_recommendation(&recommendation));
        }
        Err(e) => log::error!("Error getting recommendations: {e}"),
    }
}
