//! Browser transport for the remote chat API.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`, raced against the
//! configured timeout with `gloo-timers`.
//! Native builds: every call returns [`ApiError::Unavailable`] so components
//! and helpers compile and unit-test off the browser.
//!
//! ERROR HANDLING
//! ==============
//! Raw status and body go straight to [`decode_envelope`]; this module only
//! maps fetch/read errors to [`ApiError::Request`] and an expired timer to
//! [`ApiError::Timeout`].

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use ando_core::api::{ApiError, ChatApi, ChatReply, ChatRequest, RecommendRequest, Recommendation};
use ando_core::config::WidgetConfig;
use async_trait::async_trait;

#[cfg(feature = "csr")]
use ando_core::api::{
    CHAT_PATH, RECOMMEND_PATH, RecommendReply, SUGGESTIONS_PATH, SuggestionsReply, decode_envelope,
};

/// `ChatApi` over the page's `fetch`.
#[derive(Clone, Debug, Default)]
pub struct BrowserApi {
    config: WidgetConfig,
}

impl BrowserApi {
    #[must_use]
    pub fn new(config: WidgetConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }
}

#[cfg(any(test, feature = "csr"))]
fn timeout_millis(timeout: std::time::Duration) -> u32 {
    u32::try_from(timeout.as_millis()).unwrap_or(u32::MAX)
}

#[cfg(feature = "csr")]
fn request_error(e: gloo_net::Error) -> ApiError {
    ApiError::Request(e.to_string())
}

#[cfg(feature = "csr")]
impl BrowserApi {
    async fn get<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.config.endpoint(path);
        self.with_timeout(async move {
            let resp = gloo_net::http::Request::get(&url).send().await.map_err(request_error)?;
            let status = resp.status();
            let body = resp.text().await.map_err(request_error)?;
            decode_envelope(status, &body)
        })
        .await
    }

    async fn post<B: serde::Serialize, T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        payload: &B,
    ) -> Result<T, ApiError> {
        let url = self.config.endpoint(path);
        let request = gloo_net::http::Request::post(&url).json(payload).map_err(request_error)?;
        self.with_timeout(async move {
            let resp = request.send().await.map_err(request_error)?;
            let status = resp.status();
            let body = resp.text().await.map_err(request_error)?;
            decode_envelope(status, &body)
        })
        .await
    }

    async fn with_timeout<T>(
        &self,
        call: impl std::future::Future<Output = Result<T, ApiError>>,
    ) -> Result<T, ApiError> {
        use futures::future::{Either, select};

        let Some(timeout) = self.config.request_timeout else {
            return call.await;
        };
        let call = std::pin::pin!(call);
        let timer = std::pin::pin!(gloo_timers::future::TimeoutFuture::new(timeout_millis(timeout)));
        match select(call, timer).await {
            Either::Left((result, _)) => result,
            Either::Right(((), _)) => Err(ApiError::Timeout),
        }
    }
}

#[async_trait(?Send)]
impl ChatApi for BrowserApi {
    async fn chat(&self, request: &ChatRequest) -> Result<ChatReply, ApiError> {
        #[cfg(feature = "csr")]
        {
            self.post(CHAT_PATH, request).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = request;
            Err(ApiError::Unavailable)
        }
    }

    async fn suggestions(&self) -> Result<Vec<String>, ApiError> {
        #[cfg(feature = "csr")]
        {
            let reply: SuggestionsReply = self.get(SUGGESTIONS_PATH).await?;
            Ok(reply.suggestions)
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(ApiError::Unavailable)
        }
    }

    async fn recommend(&self, request: &RecommendRequest) -> Result<Recommendation, ApiError> {
        #[cfg(feature = "csr")]
        {
            let reply: RecommendReply = self.post(RECOMMEND_PATH, request).await?;
            Ok(reply.data)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = request;
            Err(ApiError::Unavailable)
        }
    }
}
