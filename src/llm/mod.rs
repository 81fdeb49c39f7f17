// ABOUTME: Chat-completion provider abstraction used by the coaching service
// ABOUTME: Defines request and response wire types plus the async provider contract
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Chat-Completion Providers
//!
//! The coaching service talks to the remote model through [`LlmProvider`], so
//! handlers and tests can swap the real HTTP client for an in-process stub.
//!
//! ## Example
//!
//! ```rust,no_run
//! use swim_coach_backend::config::ChatApiConfig;
//! use swim_coach_backend::llm::{ChatRequest, LlmProvider, PuterProvider};
//!
//! async fn example() -> Result<(), swim_coach_backend::errors::AppError> {
//!     let config = ChatApiConfig::default();
//!     let provider = PuterProvider::new(&config)?;
//!     let request = ChatRequest::from_prompt("How do I improve my flip turn?", &config);
//!     let completion = provider.complete(&request).await?;
//!     println!("{:?}", completion.first_content());
//!     Ok(())
//! }
//! ```

mod line_stream;
pub mod prompts;
mod puter;

pub use line_stream::{create_line_stream, LineBuffer};
pub use puter::PuterProvider;

use std::pin::Pin;

use async_trait::async_trait;
use futures_util::Stream;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::ChatApiConfig;
use crate::errors::AppResult;

// ============================================================================
// Message Types
// ============================================================================

/// Role of a message in the conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    /// System instruction message
    System,
    /// User input message
    User,
    /// Assistant response message
    Assistant,
}

/// A single message in a chat conversation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Role of the message sender
    pub role: MessageRole,
    /// Content of the message
    pub content: String,
}

impl ChatMessage {
    /// Create a user message
    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Body sent to the chat-completion endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    /// Conversation messages (a single user prompt in practice)
    pub messages: Vec<ChatMessage>,
    /// Model identifier
    pub model: String,
    /// Whether the endpoint should stream its answer
    pub stream: bool,
    /// Maximum tokens to generate
    pub max_tokens: u32,
    /// Sampling temperature
    pub temperature: f32,
}

impl ChatRequest {
    /// Build a non-streaming single-prompt request from endpoint settings
    #[must_use]
    pub fn from_prompt(prompt: impl Into<String>, config: &ChatApiConfig) -> Self {
        Self {
            messages: vec![ChatMessage::user(prompt)],
            model: config.model.clone(),
            stream: false,
            max_tokens: config.max_tokens,
            temperature: config.temperature,
        }
    }

    /// Request a streamed answer
    #[must_use]
    pub const fn with_streaming(mut self) -> Self {
        self.stream = true;
        self
    }
}

/// Decoded chat-completion response
///
/// Every level is optional on the wire so an unexpected shape still decodes
/// and is reported through [`ChatCompletion::first_content`] instead.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChatCompletion {
    /// Candidate answers
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
}

/// One candidate answer
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChatChoice {
    /// Generated message
    #[serde(default)]
    pub message: Option<ChoiceMessage>,
}

/// Message inside a choice
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChoiceMessage {
    /// Generated text; anything but a string is treated as missing
    #[serde(default)]
    pub content: Option<Value>,
}

impl ChatCompletion {
    /// Build a completion holding one text answer
    #[must_use]
    pub fn from_text(content: impl Into<String>) -> Self {
        Self {
            choices: vec![ChatChoice {
                message: Some(ChoiceMessage {
                    content: Some(Value::String(content.into())),
                }),
            }],
        }
    }

    /// Text of the first choice, if it is a string
    #[must_use]
    pub fn first_content(&self) -> Option<&str> {
        self.choices
            .first()?
            .message
            .as_ref()?
            .content
            .as_ref()?
            .as_str()
    }
}

/// Lazy stream of raw response lines
pub type LineStream = Pin<Box<dyn Stream<Item = AppResult<String>> + Send>>;

// ============================================================================
// Provider Trait
// ============================================================================

/// Chat-completion provider
///
/// Implementations make exactly one attempt per call and report every failure
/// as an `AppError`; they never panic.
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Provider label for logs and error messages
    fn name(&self) -> &'static str;

    /// Send one request and decode the whole answer
    async fn complete(&self, request: &ChatRequest) -> AppResult<ChatCompletion>;

    /// Send one streaming request and yield raw response lines as they arrive
    async fn complete_lines(&self, request: &ChatRequest) -> AppResult<LineStream>;
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use serde_json::json;

    use super::*;

    #[test]
    fn test_request_wire_shape() {
        let request = ChatRequest::from_prompt("hello", &ChatApiConfig::default());
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["messages"][0]["role"], "user");
        assert_eq!(value["messages"][0]["content"], "hello");
        assert_eq!(value["model"], "x-ai/grok-4");
        assert_eq!(value["stream"], false);
        assert_eq!(value["max_tokens"], 500);
    }

    #[test]
    fn test_first_content_reads_string_answer() {
        let completion: ChatCompletion = serde_json::from_value(json!({
            "choices": [{"message": {"role": "assistant", "content": "Nice swim"}}]
        }))
        .unwrap();
        assert_eq!(completion.first_content(), Some("Nice swim"));
    }

    #[test]
    fn test_unexpected_shapes_have_no_content() {
        let empty: ChatCompletion = serde_json::from_value(json!({})).unwrap();
        assert_eq!(empty.first_content(), None);

        let no_choices: ChatCompletion = serde_json::from_value(json!({"choices": []})).unwrap();
        assert_eq!(no_choices.first_content(), None);

        let non_string: ChatCompletion = serde_json::from_value(json!({
            "choices": [{"message": {"content": 42}}]
        }))
        .unwrap();
        assert_eq!(non_string.first_content(), None);
    }
}
