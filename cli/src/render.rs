//! Plain-text rendering for the terminal.
//!
//! Terminal output never carries markup: assistant text has its inline
//! markers stripped and info blocks use their plain summary.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use ando_core::api::{HealthReply, HistoryEntry};
use ando_core::format::strip_markers;
use ando_core::message::{Message, MessageBody, Sender};

/// One transcript entry, prefixed with its author.
pub fn message(message: &Message) -> String {
    let text = match &message.body {
        MessageBody::Formatted(_) => strip_markers(&message.text),
        MessageBody::Plain | MessageBody::Info(_) => message.text.clone(),
    };
    let prefix = match message.sender {
        Sender::User => "you",
        Sender::Ai => "ando",
    };
    format!("{prefix}> {}", text.replace('\n', "\n     "))
}

/// Numbered list; numbers match the `/N` picks the repl accepts.
pub fn suggestions(suggestions: &[String]) -> String {
    suggestions
        .iter()
        .enumerate()
        .map(|(i, label)| format!("  /{} {label}", i + 1))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn health(reply: &HealthReply) -> String {
    match (reply.message.is_empty(), reply.version.is_empty()) {
        (true, true) => reply.status.clone(),
        (false, true) => format!("{}: {}", reply.status, reply.message),
        (true, false) => format!("{} (v{})", reply.status, reply.version),
        (false, false) => format!("{}: {} (v{})", reply.status, reply.message, reply.version),
    }
}

pub fn history(entries: &[HistoryEntry]) -> String {
    if entries.is_empty() {
        return "(no history)".to_owned();
    }
    entries
        .iter()
        .map(|entry| {
            let stamp = entry.timestamp.as_deref().map(|t| format!("[{t}] ")).unwrap_or_default();
            format!("{stamp}you> {}\nando> {}", entry.user, strip_markers(&entry.assistant))
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}
