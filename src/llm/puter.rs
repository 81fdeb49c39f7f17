// ABOUTME: Puter.js chat API provider reaching Grok 4 over HTTPS with bearer authentication
// ABOUTME: Single attempt per call with bounded timeouts; failures map to AppError values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Puter Provider
//!
//! Implementation of [`LlmProvider`] for the Puter.js chat endpoint.
//!
//! ## Configuration
//!
//! - `PUTER_API_KEY`: bearer token (requests are still attempted without one)
//! - `PUTER_API_URL`: endpoint URL
//! - `GROK_MODEL`, `GROK_MAX_TOKENS`, `GROK_TEMPERATURE`: sampling settings
//! - `LLM_REQUEST_TIMEOUT_SECS`, `LLM_CONNECT_TIMEOUT_SECS`: timeouts

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::Deserialize;
use tracing::{debug, error, instrument, warn};

use super::{create_line_stream, ChatCompletion, ChatRequest, LineStream, LlmProvider};
use crate::config::ChatApiConfig;
use crate::constants::chat_api::PROVIDER_LABEL;
use crate::errors::{AppError, AppResult, ErrorCode};

/// Error body returned by the endpoint, when it returns one
#[derive(Debug, Deserialize)]
struct PuterErrorResponse {
    error: PuterErrorDetail,
}

/// Error detail; some deployments send a bare string instead
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum PuterErrorDetail {
    Structured { message: String },
    Plain(String),
}

impl PuterErrorDetail {
    fn message(&self) -> &str {
        match self {
            Self::Structured { message } | Self::Plain(message) => message,
        }
    }
}

/// Chat-completion provider backed by the Puter.js API
pub struct PuterProvider {
    client: Client,
    api_url: String,
    api_key: Option<String>,
}

impl PuterProvider {
    /// Create a provider with the configured endpoint and timeouts
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built
    pub fn new(config: &ChatApiConfig) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout())
            .connect_timeout(config.connect_timeout())
            .build()
            .map_err(|e| {
                AppError::internal(format!("Failed to build chat API HTTP client: {e}"))
                    .with_source(e)
            })?;

        Ok(Self {
            client,
            api_url: config.api_url.clone(),
            api_key: config.api_key.clone(),
        })
    }

    /// Endpoint URL this provider posts to
    #[must_use]
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    fn post(&self, request: &ChatRequest) -> RequestBuilder {
        let builder = self
            .client
            .post(&self.api_url)
            .header("Content-Type", "application/json")
            .json(request);

        match &self.api_key {
            Some(key) => builder.bearer_auth(key),
            None => builder,
        }
    }

    /// Map a transport failure to an error value
    fn transport_error(e: &reqwest::Error) -> AppError {
        if e.is_timeout() {
            AppError::external_unavailable(PROVIDER_LABEL, format!("Request timed out: {e}"))
        } else if e.is_connect() {
            AppError::external_unavailable(PROVIDER_LABEL, format!("Failed to connect: {e}"))
        } else {
            AppError::external_service(PROVIDER_LABEL, format!("Request failed: {e}"))
        }
    }

    /// Map a non-success status to an error value
    fn parse_error_response(status: StatusCode, body: &str) -> AppError {
        let detail = serde_json::from_str::<PuterErrorResponse>(body).map_or_else(
            |_| body.chars().take(200).collect::<String>(),
            |parsed| parsed.error.message().to_owned(),
        );

        match status.as_u16() {
            401 | 403 => AppError::new(
                ErrorCode::ExternalAuthFailed,
                format!("{PROVIDER_LABEL} authentication failed: {detail}"),
            ),
            429 => AppError::new(
                ErrorCode::ExternalRateLimited,
                format!("{PROVIDER_LABEL} rate limit exceeded: {detail}"),
            ),
            500..=599 => AppError::external_unavailable(
                PROVIDER_LABEL,
                format!("API error ({status}): {detail}"),
            ),
            _ => AppError::external_service(PROVIDER_LABEL, format!("API error ({status}): {detail}")),
        }
    }
}

#[async_trait]
impl LlmProvider for PuterProvider {
    fn name(&self) -> &'static str {
        PROVIDER_LABEL
    }

    #[instrument(skip(self, request), fields(model = %request.model))]
    async fn complete(&self, request: &ChatRequest) -> AppResult<ChatCompletion> {
        debug!("Sending chat completion request to {}", PROVIDER_LABEL);

        let response = self.post(request).send().await.map_err(|e| {
            error!("Failed to send request to {} API: {}", PROVIDER_LABEL, e);
            Self::transport_error(&e)
        })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            error!("Failed to read {} API response: {}", PROVIDER_LABEL, e);
            Self::transport_error(&e)
        })?;

        if !status.is_success() {
            let err = Self::parse_error_response(status, &body);
            error!("{} API returned {}: {}", PROVIDER_LABEL, status, err.message);
            return Err(err);
        }

        let completion: ChatCompletion = serde_json::from_str(&body).map_err(|e| {
            error!("Failed to parse {} API response: {}", PROVIDER_LABEL, e);
            AppError::external_service(PROVIDER_LABEL, format!("Failed to parse response: {e}"))
        })?;

        debug!(
            "Received response from {}: {} choices",
            PROVIDER_LABEL,
            completion.choices.len()
        );

        Ok(completion)
    }

    #[instrument(skip(self, request), fields(model = %request.model))]
    async fn complete_lines(&self, request: &ChatRequest) -> AppResult<LineStream> {
        debug!("Sending streaming chat request to {}", PROVIDER_LABEL);

        let streaming = request.clone().with_streaming();
        let response = self.post(&streaming).send().await.map_err(|e| {
            error!("Failed to send streaming request to {} API: {}", PROVIDER_LABEL, e);
            Self::transport_error(&e)
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_else(|e| {
                warn!("Could not read error body: {}", e);
                String::new()
            });
            let err = Self::parse_error_response(status, &body);
            error!("{} streaming API returned {}: {}", PROVIDER_LABEL, status, err.message);
            return Err(err);
        }

        Ok(create_line_stream(response.bytes_stream(), PROVIDER_LABEL))
    }
}
