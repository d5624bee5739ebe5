//! Transcript entries.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::api::LanguageInfo;
use crate::format::{format_message, info_summary};

/// Who authored a transcript entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sender {
    User,
    Ai,
}

impl Sender {
    /// CSS modifier / log label.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Ai => "ai",
        }
    }
}

/// How a message is drawn.
#[derive(Clone, Debug, PartialEq)]
pub enum MessageBody {
    /// Rendered as text nodes only.
    Plain,
    /// Pre-rendered, escaped HTML fragment from [`format_message`].
    Formatted(String),
    /// Structured language info block.
    Info(LanguageInfo),
}

/// A single transcript entry. `text` always holds the unrendered source.
#[derive(Clone, Debug, PartialEq)]
pub struct Message {
    pub id: Uuid,
    pub text: String,
    pub sender: Sender,
    pub timestamp: DateTime<Utc>,
    pub body: MessageBody,
}

impl Message {
    #[must_use]
    pub fn user(text: &str) -> Self {
        Self::build(text.to_owned(), Sender::User, MessageBody::Plain)
    }

    /// Assistant text, passed through the inline formatter.
    #[must_use]
    pub fn ai(text: &str) -> Self {
        Self::build(text.to_owned(), Sender::Ai, MessageBody::Formatted(format_message(text)))
    }

    #[must_use]
    pub fn info(info: LanguageInfo) -> Self {
        Self::build(info_summary(&info), Sender::Ai, MessageBody::Info(info))
    }

    fn build(text: String, sender: Sender, body: MessageBody) -> Self {
        Self { id: Uuid::new_v4(), text, sender, timestamp: Utc::now(), body }
    }
}
