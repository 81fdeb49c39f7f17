// ABOUTME: Chat-completion endpoint configuration (URL, key, model, sampling, timeouts)
// ABOUTME: Bounded request and connect timeouts for the single outbound call per request
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use std::time::Duration;

use super::environment::parse_or;
use crate::constants::{chat_api, env_vars, timeouts};
use crate::errors::{AppError, AppResult};

/// Settings for the remote chat-completion endpoint
#[derive(Clone)]
pub struct ChatApiConfig {
    /// Full URL of the chat endpoint
    pub api_url: String,
    /// Bearer token; requests are still attempted without one
    pub api_key: Option<String>,
    /// Model identifier sent with every request
    pub model: String,
    /// Maximum tokens to generate
    pub max_tokens: u32,
    /// Sampling temperature
    pub temperature: f32,
    /// Whole-request timeout in seconds
    pub request_timeout_secs: u64,
    /// Connect timeout in seconds
    pub connect_timeout_secs: u64,
}

impl Default for ChatApiConfig {
    fn default() -> Self {
        Self {
            api_url: chat_api::DEFAULT_API_URL.to_owned(),
            api_key: None,
            model: chat_api::DEFAULT_MODEL.to_owned(),
            max_tokens: chat_api::DEFAULT_MAX_TOKENS,
            temperature: chat_api::DEFAULT_TEMPERATURE,
            request_timeout_secs: timeouts::LLM_REQUEST_TIMEOUT_SECS,
            connect_timeout_secs: timeouts::LLM_CONNECT_TIMEOUT_SECS,
        }
    }
}

// The API key never reaches logs.
impl fmt::Debug for ChatApiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChatApiConfig")
            .field("api_url", &self.api_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("model", &self.model)
            .field("max_tokens", &self.max_tokens)
            .field("temperature", &self.temperature)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("connect_timeout_secs", &self.connect_timeout_secs)
            .finish()
    }
}

impl ChatApiConfig {
    /// Build from a key lookup
    ///
    /// # Errors
    ///
    /// Returns an error for unparseable numbers or a zero timeout
    pub fn from_lookup<F>(lookup: &F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = Self {
            api_url: lookup(env_vars::PUTER_API_URL)
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| chat_api::DEFAULT_API_URL.to_owned()),
            api_key: lookup(env_vars::PUTER_API_KEY).filter(|k| !k.trim().is_empty()),
            model: lookup(env_vars::GROK_MODEL)
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| chat_api::DEFAULT_MODEL.to_owned()),
            max_tokens: parse_or(
                lookup,
                env_vars::GROK_MAX_TOKENS,
                chat_api::DEFAULT_MAX_TOKENS,
            )?,
            temperature: parse_or(
                lookup,
                env_vars::GROK_TEMPERATURE,
                chat_api::DEFAULT_TEMPERATURE,
            )?,
            request_timeout_secs: parse_or(
                lookup,
                env_vars::LLM_REQUEST_TIMEOUT_SECS,
                timeouts::LLM_REQUEST_TIMEOUT_SECS,
            )?,
            connect_timeout_secs: parse_or(
                lookup,
                env_vars::LLM_CONNECT_TIMEOUT_SECS,
                timeouts::LLM_CONNECT_TIMEOUT_SECS,
            )?,
        };

        if config.request_timeout_secs == 0 || config.connect_timeout_secs == 0 {
            return Err(AppError::config_invalid(
                "LLM timeouts must be at least one second",
            ));
        }

        Ok(config)
    }

    /// Whole-request timeout
    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Connect timeout
    #[must_use]
    pub const fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }
}
