use std::cell::{Cell, RefCell};

use async_trait::async_trait;
use tokio::sync::Notify;

use super::*;
use crate::api::{LanguageInfo, decode_envelope};
use crate::message::{MessageBody, Sender};

// =============================================================
// MockApi
// =============================================================

#[derive(Default)]
struct MockApi {
    chat_results: RefCell<Vec<Result<ChatReply, ApiError>>>,
    suggestions: Option<Result<Vec<String>, ApiError>>,
    recommendation: Option<Result<Recommendation, ApiError>>,
    chat_requests: RefCell<Vec<ChatRequest>>,
    suggestion_calls: Cell<usize>,
    /// When set, `chat` parks until notified.
    gate: Option<Notify>,
}

impl MockApi {
    fn replying(results: Vec<Result<ChatReply, ApiError>>) -> Self {
        Self { chat_results: RefCell::new(results), ..Self::default() }
    }

    fn chat_calls(&self) -> usize {
        self.chat_requests.borrow().len()
    }
}

#[async_trait(?Send)]
impl ChatApi for MockApi {
    async fn chat(&self, request: &ChatRequest) -> Result<ChatReply, ApiError> {
        self.chat_requests.borrow_mut().push(request.clone());
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        let mut results = self.chat_results.borrow_mut();
        if results.is_empty() { Err(ApiError::Unavailable) } else { results.remove(0) }
    }

    async fn suggestions(&self) -> Result<Vec<String>, ApiError> {
        self.suggestion_calls.set(self.suggestion_calls.get() + 1);
        self.suggestions.clone().unwrap_or(Err(ApiError::Unavailable))
    }

    async fn recommend(&self, _request: &RecommendRequest) -> Result<Recommendation, ApiError> {
        self.recommendation.clone().unwrap_or(Err(ApiError::Unavailable))
    }
}

fn reply(message: &str) -> ChatReply {
    ChatReply { message: message.to_owned(), data: None, suggestions: None, intent: None, confidence: None }
}

fn sample_info() -> LanguageInfo {
    LanguageInfo {
        description: "لغة برمجة عالية الأداء".to_owned(),
        uses: vec!["تطوير الألعاب".to_owned()],
        difficulty: "صعبة".to_owned(),
        popularity: "⭐⭐⭐⭐".to_owned(),
        resources: None,
    }
}

fn session_with_input(text: &str) -> ChatSession {
    let mut session = ChatSession::default();
    session.set_input(text);
    session
}

fn last_text(session: &ChatSession) -> &str {
    &session.messages.last().expect("message").text
}

// =============================================================
// toggle
// =============================================================

#[test]
fn default_session_is_closed_and_idle() {
    let session = ChatSession::default();
    assert!(!session.is_open);
    assert!(!session.is_loading);
    assert!(!session.typing);
    assert!(session.messages.is_empty());
}

#[test]
fn first_open_appends_welcome_messages_once() {
    let mut session = ChatSession::default();
    assert!(session.toggle());
    assert_eq!(session.messages.len(), 2);
    assert_eq!(session.messages[0].text, strings::WELCOME_MESSAGES[0]);
    assert_eq!(session.messages[1].text, strings::WELCOME_MESSAGES[1]);
    assert!(session.messages.iter().all(|m| m.sender == Sender::Ai));

    assert!(!session.toggle());
    assert!(session.toggle());
    assert_eq!(session.messages.len(), 2);
}

// =============================================================
// begin_send
// =============================================================

#[test]
fn begin_send_ignores_blank_input() {
    for text in ["", "   ", "\n\t"] {
        let mut session = session_with_input(text);
        assert!(session.begin_send().is_none());
        assert!(session.messages.is_empty());
        assert!(!session.is_loading);
        assert!(!session.typing);
    }
}

#[test]
fn begin_send_appends_trimmed_user_message_and_clears_input() {
    let mut session = session_with_input("  ما هي Python؟ ");
    let request = session.begin_send().expect("request");

    assert_eq!(request.message, "ما هي Python؟");
    assert_eq!(session.messages.len(), 1);
    assert_eq!(session.messages[0].sender, Sender::User);
    assert_eq!(session.messages[0].body, MessageBody::Plain);
    assert_eq!(session.messages[0].text, "ما هي Python؟");
    assert!(session.input.is_empty());
    assert!(session.is_loading);
    assert!(session.typing);
}

#[test]
fn begin_send_while_loading_is_noop() {
    let mut session = session_with_input("first");
    session.begin_send().expect("first request");

    session.set_input("second");
    assert!(session.begin_send().is_none());
    assert_eq!(session.messages.len(), 1);
    assert_eq!(session.input, "second");
}

// =============================================================
// finish_send
// =============================================================

#[test]
fn finish_send_success_renders_reply_info_and_suggestions() {
    let mut session = session_with_input("cpp");
    session.suggestions = vec!["old".to_owned()];
    session.begin_send().expect("request");

    let mut ok = reply("🔹 **CPP**");
    ok.data = Some(sample_info());
    ok.suggestions = Some(vec!["اسأل عن C++".to_owned()]);
    session.finish_send(Ok(ok));

    assert_eq!(session.messages.len(), 3);
    assert_eq!(
        session.messages[1].body,
        MessageBody::Formatted("🔹 <strong>CPP</strong>".to_owned())
    );
    assert_eq!(session.messages[2].body, MessageBody::Info(sample_info()));
    assert_eq!(session.suggestions, vec!["اسأل عن C++".to_owned()]);
    assert!(!session.is_loading);
    assert!(!session.typing);
}

#[test]
fn finish_send_without_suggestions_keeps_current_set() {
    let mut session = session_with_input("hi");
    session.suggestions = vec!["keep".to_owned()];
    session.begin_send().expect("request");
    session.finish_send(Ok(reply("hello")));
    assert_eq!(session.suggestions, vec!["keep".to_owned()]);
}

#[test]
fn finish_send_logical_failure_appends_processing_message() {
    let mut session = session_with_input("hi");
    session.begin_send().expect("request");
    session.finish_send(Err(ApiError::Logical { status: "error".to_owned(), message: String::new() }));

    assert_eq!(session.messages.len(), 2);
    assert_eq!(last_text(&session), strings::PROCESSING_FAILED);
    assert!(!session.is_loading);
}

#[test]
fn finish_send_transport_failure_appends_connection_message() {
    for err in [
        ApiError::Timeout,
        ApiError::HttpStatus { status: 500 },
        ApiError::Malformed("eof".to_owned()),
        ApiError::Request("connection refused".to_owned()),
    ] {
        let mut session = session_with_input("hi");
        session.begin_send().expect("request");
        session.finish_send(Err(err));

        assert_eq!(session.messages.len(), 2);
        assert_eq!(last_text(&session), strings::CONNECTION_FAILED);
        assert!(!session.is_loading);
        assert!(!session.typing);
    }
}

#[test]
fn apply_suggestions_replaces_without_merge() {
    let mut session = ChatSession::default();
    session.apply_suggestions(vec!["a".to_owned(), "b".to_owned()]);
    session.apply_suggestions(vec!["b".to_owned(), "b".to_owned()]);
    assert_eq!(session.suggestions, vec!["b".to_owned(), "b".to_owned()]);
}

// =============================================================
// send_message driver
// =============================================================

#[tokio::test]
async fn send_message_blank_input_makes_no_call() {
    let cell = RefCell::new(session_with_input("   "));
    let api = MockApi::default();

    assert!(!send_message(&cell, &api).await);
    assert_eq!(api.chat_calls(), 0);
    assert!(cell.borrow().messages.is_empty());
}

#[tokio::test]
async fn send_message_success_appends_reply() {
    let cell = RefCell::new(session_with_input("السلام عليكم"));
    let api = MockApi::replying(vec![Ok(reply("وعليكم السلام! 👋"))]);

    assert!(send_message(&cell, &api).await);

    let session = cell.borrow();
    assert_eq!(api.chat_requests.borrow()[0].message, "السلام عليكم");
    assert_eq!(session.messages.len(), 2);
    assert_eq!(session.messages[1].sender, Sender::Ai);
    assert_eq!(last_text(&session), "وعليكم السلام! 👋");
    assert!(!session.is_loading);
    assert!(!session.typing);
}

#[tokio::test]
async fn send_message_malformed_status_shows_single_fallback() {
    let cell = RefCell::new(session_with_input("hi"));
    let decoded = decode_envelope::<ChatReply>(200, r#"{"status":"success søme","message":"x"}"#);
    let api = MockApi::replying(vec![decoded]);

    send_message(&cell, &api).await;

    let session = cell.borrow();
    let fallbacks = session
        .messages
        .iter()
        .filter(|m| m.text == strings::PROCESSING_FAILED || m.text == strings::CONNECTION_FAILED)
        .count();
    assert_eq!(fallbacks, 1);
    assert_eq!(session.messages.len(), 2);
    assert!(!session.is_loading);
}

#[tokio::test]
async fn send_message_timeout_shows_connection_failure() {
    let cell = RefCell::new(session_with_input("hi"));
    let api = MockApi::replying(vec![Err(ApiError::Timeout)]);

    send_message(&cell, &api).await;

    let session = cell.borrow();
    assert_eq!(session.messages.len(), 2);
    assert_eq!(last_text(&session), strings::CONNECTION_FAILED);
    assert!(!session.typing);
    assert!(!session.is_loading);
}

#[tokio::test]
async fn overlapping_send_is_dropped_not_queued() {
    let cell = RefCell::new(session_with_input("first"));
    let api = MockApi {
        chat_results: RefCell::new(vec![Ok(reply("one")), Ok(reply("two"))]),
        gate: Some(Notify::new()),
        ..MockApi::default()
    };

    let first = send_message(&cell, &api);
    let second = async {
        tokio::task::yield_now().await;
        assert!(cell.borrow().is_loading);
        assert!(cell.borrow().typing);
        cell.borrow_mut().set_input("second");
        let sent = send_message(&cell, &api).await;
        api.gate.as_ref().expect("gate").notify_one();
        sent
    };
    let (first_sent, second_sent) = tokio::join!(first, second);

    assert!(first_sent);
    assert!(!second_sent);
    assert_eq!(api.chat_calls(), 1);

    let session = cell.borrow();
    let texts: Vec<&str> = session.messages.iter().map(|m| m.text.as_str()).collect();
    assert_eq!(texts, vec!["first", "one"]);
    assert!(!session.is_loading);
}

#[tokio::test]
async fn session_stays_usable_after_failure() {
    let cell = RefCell::new(session_with_input("one"));
    let api = MockApi::replying(vec![Err(ApiError::Timeout), Ok(reply("ok"))]);

    send_message(&cell, &api).await;
    cell.borrow_mut().set_input("two");
    assert!(send_message(&cell, &api).await);

    assert_eq!(last_text(&cell.borrow()), "ok");
    assert_eq!(api.chat_calls(), 2);
}

#[tokio::test]
async fn select_suggestion_sends_label() {
    let cell = RefCell::new(ChatSession::default());
    let api = MockApi::replying(vec![Ok(reply("Python"))]);

    assert!(select_suggestion(&cell, &api, "ما هي Python؟").await);

    assert_eq!(api.chat_requests.borrow()[0].message, "ما هي Python؟");
    assert!(cell.borrow().input.is_empty());
}

// =============================================================
// load_suggestions / request_recommendation
// =============================================================

#[tokio::test]
async fn load_suggestions_replaces_set_on_success() {
    let cell = RefCell::new(ChatSession::default());
    let api = MockApi {
        suggestions: Some(Ok(vec!["كيف أبدأ مع البرمجة؟".to_owned()])),
        ..MockApi::default()
    };

    load_suggestions(&cell, &api).await;

    assert_eq!(api.suggestion_calls.get(), 1);
    assert_eq!(cell.borrow().suggestions, vec!["كيف أبدأ مع البرمجة؟".to_owned()]);
}

#[tokio::test]
async fn load_suggestions_failure_is_silent() {
    let cell = RefCell::new(ChatSession::default());
    let api = MockApi {
        suggestions: Some(Err(ApiError::HttpStatus { status: 503 })),
        ..MockApi::default()
    };

    load_suggestions(&cell, &api).await;

    let session = cell.borrow();
    assert!(session.suggestions.is_empty());
    assert!(session.messages.is_empty());
}

#[tokio::test]
async fn request_recommendation_appends_composed_message() {
    let cell = RefCell::new(ChatSession::default());
    let api = MockApi {
        recommendation: Some(Ok(Recommendation {
            greeting: "مرحباً سارة! 👋".to_owned(),
            analysis: "تحليل تفضيلاتك الشخصية... 🔍".to_owned(),
            recommendation: "اخترت python".to_owned(),
        })),
        ..MockApi::default()
    };

    request_recommendation(&cell, &api, "سارة", "python").await;

    let session = cell.borrow();
    assert_eq!(session.messages.len(), 1);
    assert_eq!(
        session.messages[0].body,
        MessageBody::Formatted(
            "مرحباً سارة! 👋<br>تحليل تفضيلاتك الشخصية... 🔍<br><br>اخترت python".to_owned()
        )
    );
}

#[tokio::test]
async fn request_recommendation_failure_is_silent() {
    let cell = RefCell::new(ChatSession::default());
    let api = MockApi {
        recommendation: Some(Err(ApiError::Logical { status: "error".to_owned(), message: "x".to_owned() })),
        ..MockApi::default()
    };

    request_recommendation(&cell, &api, "سارة", "python").await;

    assert!(cell.borrow().messages.is_empty());
}
