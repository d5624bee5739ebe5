//! Remote chat API: wire schema, response classification, transport trait.
//!
//! ERROR HANDLING
//! ==============
//! Every transport funnels the raw HTTP status and body through
//! [`decode_envelope`], the single place that separates transport failures
//! (unreachable server, non-2xx status, malformed body, timeout) from
//! logical failures (a well-formed body whose `status` is not the expected
//! value). Callers branch on [`ApiError::is_logical`] only.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const CHAT_PATH: &str = "/chat";
pub const SUGGESTIONS_PATH: &str = "/suggestions";
pub const RECOMMEND_PATH: &str = "/recommend";
pub const HEALTH_PATH: &str = "/health";
pub const LANGUAGE_INFO_PATH: &str = "/language-info";
pub const HISTORY_PATH: &str = "/history";

/// `status` value of a successful response.
pub const STATUS_SUCCESS: &str = "success";
/// `status` value of a healthy `/health` response.
pub const STATUS_ONLINE: &str = "online";

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced by remote API calls.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// The request could not be sent or the response could not be read.
    #[error("request failed: {0}")]
    Request(String),

    /// No response arrived within the configured timeout.
    #[error("request timed out")]
    Timeout,

    /// The server answered with a non-2xx HTTP status.
    #[error("API error: {status}")]
    HttpStatus { status: u16 },

    /// The body was not JSON or did not match the expected shape.
    #[error("malformed response: {0}")]
    Malformed(String),

    /// The server processed the request and reported a non-success status.
    #[error("server reported {status}: {message}")]
    Logical { status: String, message: String },

    /// No transport exists in this build (e.g. native builds of the widget).
    #[error("remote API not available in this build")]
    Unavailable,
}

impl ApiError {
    #[must_use]
    pub fn is_logical(&self) -> bool {
        matches!(self, Self::Logical { .. })
    }

    #[must_use]
    pub fn is_transport(&self) -> bool {
        !self.is_logical()
    }
}

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

/// Successful `/chat` response.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ChatReply {
    pub message: String,
    #[serde(default)]
    pub data: Option<LanguageInfo>,
    #[serde(default)]
    pub suggestions: Option<Vec<String>>,
    #[serde(default)]
    pub intent: Option<String>,
    #[serde(default)]
    pub confidence: Option<f64>,
}

/// Descriptive data about a programming language.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageInfo {
    pub description: String,
    pub uses: Vec<String>,
    pub difficulty: String,
    pub popularity: String,
    #[serde(default)]
    pub resources: Option<Vec<Resource>>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    pub name: String,
    pub url: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct SuggestionsReply {
    pub suggestions: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendRequest {
    pub name: String,
    pub language: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct RecommendReply {
    pub data: Recommendation,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Recommendation {
    pub greeting: String,
    pub analysis: String,
    pub recommendation: String,
}

impl Recommendation {
    /// Compose the three parts into one assistant message.
    #[must_use]
    pub fn compose(&self) -> String {
        format!("{}\n{}\n\n{}", self.greeting, self.analysis, self.recommendation)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct HealthReply {
    pub status: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub version: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageInfoRequest {
    pub language: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct LanguageInfoReply {
    pub data: LanguageInfo,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct HistoryReply {
    pub history: Vec<HistoryEntry>,
}

/// One remembered exchange from `/history`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct HistoryEntry {
    pub user: String,
    pub assistant: String,
    #[serde(default)]
    pub timestamp: Option<String>,
}

// =============================================================================
// ENVELOPE
// =============================================================================

/// Classify a raw response expecting `status == "success"`.
///
/// # Errors
///
/// See [`decode_envelope_with`].
pub fn decode_envelope<T: DeserializeOwned>(http_status: u16, body: &str) -> Result<T, ApiError> {
    decode_envelope_with(http_status, body, STATUS_SUCCESS)
}

/// Classify a raw response and decode it into `T`.
///
/// # Errors
///
/// - [`ApiError::HttpStatus`] for any non-2xx status, whatever the body says.
/// - [`ApiError::Malformed`] when the body is not a JSON object with a string
///   `status`, or the success body does not match `T`.
/// - [`ApiError::Logical`] when `status` differs from `expected`.
pub fn decode_envelope_with<T: DeserializeOwned>(
    http_status: u16,
    body: &str,
    expected: &str,
) -> Result<T, ApiError> {
    if !(200..300).contains(&http_status) {
        return Err(ApiError::HttpStatus { status: http_status });
    }

    let value: Value = serde_json::from_str(body).map_err(|e| ApiError::Malformed(e.to_string()))?;
    let Some(status) = value.get("status").and_then(Value::as_str) else {
        return Err(ApiError::Malformed("missing `status` field".to_owned()));
    };

    if status != expected {
        let message = value.get("message").and_then(Value::as_str).unwrap_or_default().to_owned();
        return Err(ApiError::Logical { status: status.to_owned(), message });
    }

    serde_json::from_value(value).map_err(|e| ApiError::Malformed(e.to_string()))
}

// =============================================================================
// TRANSPORT
// =============================================================================

/// Calls the chat widget makes against the remote API.
///
/// Futures are not required to be `Send`: the browser transport runs on
/// the single-threaded page event loop.
#[async_trait(?Send)]
pub trait ChatApi {
    /// `POST /chat`.
    async fn chat(&self, request: &ChatRequest) -> Result<ChatReply, ApiError>;

    /// `GET /suggestions`.
    async fn suggestions(&self) -> Result<Vec<String>, ApiError>;

    /// `POST /recommend`.
    async fn recommend(&self, request: &RecommendRequest) -> Result<Recommendation, ApiError>;
}

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;
