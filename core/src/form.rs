//! Name form: validation, sanitization, and the simulated submission cycle.
//!
//! Every trigger (pointer submit, Enter in the field) goes through
//! [`FormState::begin_submit`], which also disables the submit control
//! until the cycle finishes so duplicate submissions are rejected.

use std::future::Future;
use std::sync::LazyLock;

use regex::Regex;

use crate::cell::StateCell;
use crate::strings;

pub const NAME_MIN_CHARS: usize = 2;
pub const NAME_MAX_CHARS: usize = 50;
/// Simulated network latency of a successful submission.
pub const SUBMIT_DELAY_MS: u32 = 500;
/// Lifetime of an on-page notification.
pub const NOTIFICATION_TTL_MS: u32 = 3_000;

/// Latin and Arabic-block letters, whitespace, hyphen, apostrophe.
static NAME_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\x{0600}-\x{06FF}\s\-'a-zA-Z]+$").expect("name pattern is valid"));

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum NameError {
    #[error("{}", strings::NAME_INVALID_CHARACTERS)]
    InvalidCharacters,
    #[error("{}", strings::NAME_TOO_SHORT)]
    TooShort,
    #[error("{}", strings::NAME_TOO_LONG)]
    TooLong,
}

/// Validate a raw name. Returns the trimmed name on success.
///
/// Characters are checked before length, so an empty field reports
/// [`NameError::InvalidCharacters`].
///
/// # Errors
///
/// Returns the first rule the trimmed name breaks.
pub fn validate_name(raw: &str) -> Result<&str, NameError> {
    let clean = raw.trim();
    if !NAME_CHARS.is_match(clean) {
        return Err(NameError::InvalidCharacters);
    }
    let len = clean.chars().count();
    if len < NAME_MIN_CHARS {
        return Err(NameError::TooShort);
    }
    if len > NAME_MAX_CHARS {
        return Err(NameError::TooLong);
    }
    Ok(clean)
}

/// Trim and drop angle brackets.
#[must_use]
pub fn sanitize_name(raw: &str) -> String {
    raw.trim().chars().filter(|c| !matches!(c, '<' | '>')).collect()
}

// =============================================================================
// NOTIFICATIONS
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

impl NotificationKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

/// Transient on-page notice. `text` is always rendered as plain text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub kind: NotificationKind,
    pub text: String,
}

// =============================================================================
// FORM STATE
// =============================================================================

/// Result of starting a submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitStep {
    /// A submission is already in progress.
    Busy,
    /// Validation failed; an error notification was raised.
    Rejected { error: NameError, notification: u64 },
    /// Validation passed; carries the sanitized name.
    Accepted(String),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormState {
    pub name: String,
    /// Inline error shown next to the field.
    pub error: Option<NameError>,
    /// The submit control is disabled and shows the working label.
    pub submitting: bool,
    /// Stacked in insertion order, no de-duplication.
    pub notifications: Vec<Notification>,
    next_notification: u64,
}

impl FormState {
    /// Field edit. Clears the inline error whatever the new value is.
    pub fn input(&mut self, value: &str) {
        value.clone_into(&mut self.name);
        self.error = None;
    }

    /// Field lost focus: show the current validation error, if any. An
    /// empty field clears the error instead.
    pub fn blur(&mut self) {
        self.error = match validate_name(&self.name) {
            Err(e) if !self.name.is_empty() => Some(e),
            _ => None,
        };
    }

    pub fn begin_submit(&mut self) -> SubmitStep {
        if self.submitting {
            return SubmitStep::Busy;
        }
        self.submitting = true;

        if let Err(error) = validate_name(&self.name) {
            self.error = Some(error);
            let notification = self.push_notification(NotificationKind::Error, &error.to_string());
            self.submitting = false;
            return SubmitStep::Rejected { error, notification };
        }

        self.error = None;
        SubmitStep::Accepted(sanitize_name(&self.name))
    }

    /// Finish an accepted submission: announce it, reset the form, and
    /// re-enable the submit control. Returns the notification id.
    pub fn complete_submit(&mut self, sanitized: &str) -> u64 {
        let id = self.push_notification(NotificationKind::Success, &strings::submit_success(sanitized));
        self.name.clear();
        self.error = None;
        self.submitting = false;
        id
    }

    pub fn push_notification(&mut self, kind: NotificationKind, text: &str) -> u64 {
        self.next_notification += 1;
        let id = self.next_notification;
        self.notifications.push(Notification { id, kind, text: text.to_owned() });
        id
    }

    pub fn dismiss_notification(&mut self, id: u64) {
        self.notifications.retain(|n| n.id != id);
    }

    #[must_use]
    pub fn submit_label(&self) -> &'static str {
        if self.submitting { strings::SUBMIT_WORKING } else { strings::SUBMIT_IDLE }
    }
}

/// Run one submission cycle, waiting on `delay` between acceptance and
/// completion.
///
/// Returns the id of the notification raised (error or success), or `None`
/// when the submission was dropped as a duplicate.
pub async fn submit<C, D>(cell: &C, delay: D) -> Option<u64>
where
    C: StateCell<FormState>,
    D: Future<Output = ()>,
{
    match cell.with_mut(FormState::begin_submit)? {
        SubmitStep::Busy => None,
        SubmitStep::Rejected { error, notification } => {
            log::debug!("name rejected: {error:?}");
            Some(notification)
        }
        SubmitStep::Accepted(name) => {
            delay.await;
            cell.with_mut(|form| form.complete_submit(&name))
        }
    }
}

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;
