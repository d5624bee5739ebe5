//! `reqwest` transport for the remote chat API.
//!
//! Every response goes through [`decode_envelope_with`], so the terminal
//! client classifies transport and logical failures exactly as the widget
//! does. The client-wide timeout surfaces as [`ApiError::Timeout`].

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

use ando_core::api::{
    self, ChatReply, ChatRequest, HealthReply, HistoryEntry, HistoryReply, LanguageInfo, LanguageInfoReply,
    LanguageInfoRequest, RecommendReply, RecommendRequest, Recommendation, SuggestionsReply,
};
use ando_core::config::WidgetConfig;
use ando_core::{ApiError, ChatApi};
use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::CliError;

#[derive(Clone, Debug)]
pub struct HttpApi {
    client: reqwest::Client,
    config: WidgetConfig,
}

impl HttpApi {
    /// # Errors
    ///
    /// Fails when the TLS backend cannot be initialised.
    pub fn new(config: WidgetConfig) -> Result<Self, CliError> {
        let builder = reqwest::Client::builder();
        let builder = match config.request_timeout {
            Some(timeout) => builder.timeout(timeout),
            None => builder,
        };
        Ok(Self { client: builder.build()?, config })
    }

    /// `GET /health`; succeeds only when the server reports `online`.
    pub async fn health(&self) -> Result<HealthReply, ApiError> {
        self.send(self.client.get(self.config.endpoint(api::HEALTH_PATH)), api::STATUS_ONLINE)
            .await
    }

    /// `POST /language-info`.
    pub async fn language_info(&self, language: &str) -> Result<LanguageInfo, ApiError> {
        let request = LanguageInfoRequest { language: language.to_owned() };
        let reply: LanguageInfoReply = self.post(api::LANGUAGE_INFO_PATH, &request).await?;
        Ok(reply.data)
    }

    /// `GET /history`, oldest exchange first.
    pub async fn history(&self) -> Result<Vec<HistoryEntry>, ApiError> {
        let reply: HistoryReply = self.get(api::HISTORY_PATH).await?;
        Ok(reply.history)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.send(self.client.get(self.config.endpoint(path)), api::STATUS_SUCCESS).await
    }

    async fn post<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, ApiError> {
        self.send(self.client.post(self.config.endpoint(path)).json(body), api::STATUS_SUCCESS)
            .await
    }

    async fn send<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
        expected: &str,
    ) -> Result<T, ApiError> {
        let response = request.send().await.map_err(request_error)?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(request_error)?;
        tracing::debug!(status, bytes = body.len(), "api response");
        api::decode_envelope_with(status, &body, expected)
    }
}

fn request_error(e: reqwest::Error) -> ApiError {
    if e.is_timeout() { ApiError::Timeout } else { ApiError::Request(e.to_string()) }
}

#[async_trait(?Send)]
impl ChatApi for HttpApi {
    async fn chat(&self, request: &ChatRequest) -> Result<ChatReply, ApiError> {
        self.post(api::CHAT_PATH, request).await
    }

    async fn suggestions(&self) -> Result<Vec<String>, ApiError> {
        let reply: SuggestionsReply = self.get(api::SUGGESTIONS_PATH).await?;
        Ok(reply.suggestions)
    }

    async fn recommend(&self, request: &RecommendRequest) -> Result<Recommendation, ApiError> {
        let reply: RecommendReply = self.post(api::RECOMMEND_PATH, request).await?;
        Ok(reply.data)
    }
}
