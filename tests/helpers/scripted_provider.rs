// ABOUTME: Scripted chat-completion provider for automated testing without network access
// ABOUTME: Returns a fixed answer or failure and records every request it receives
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use futures_util::stream;
use swim_coach_backend::config::ServerConfig;
use swim_coach_backend::errors::{AppError, AppResult, ErrorCode};
use swim_coach_backend::llm::{ChatCompletion, ChatRequest, LineStream, LlmProvider};
use swim_coach_backend::resources::ServerResources;

/// What the provider answers with
#[derive(Clone)]
pub enum ScriptedAnswer {
    /// A well-formed completion holding this text
    Text(String),
    /// An arbitrary decoded completion
    Completion(ChatCompletion),
    /// A transport or status failure
    Failure(ErrorCode),
}

/// Provider replaying one scripted answer for every request
pub struct ScriptedProvider {
    answer: ScriptedAnswer,
    requests: Mutex<Vec<ChatRequest>>,
}

impl ScriptedProvider {
    pub fn new(answer: ScriptedAnswer) -> Arc<Self> {
        Arc::new(Self {
            answer,
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn answering(text: &str) -> Arc<Self> {
        Self::new(ScriptedAnswer::Text(text.to_owned()))
    }

    pub fn failing() -> Arc<Self> {
        Self::new(ScriptedAnswer::Failure(ErrorCode::ExternalServiceUnavailable))
    }

    /// Requests received so far
    pub fn requests(&self) -> Vec<ChatRequest> {
        self.requests.lock().unwrap().clone()
    }

    fn failure(code: ErrorCode) -> AppError {
        AppError::new(code, "scripted failure")
    }
}

#[async_trait]
impl LlmProvider for ScriptedProvider {
    fn name(&self) -> &'static str {
        "scripted"
    }

    async fn complete(&self, request: &ChatRequest) -> AppResult<ChatCompletion> {
        self.requests.lock().unwrap().push(request.clone());
        match &self.answer {
            ScriptedAnswer::Text(text) => Ok(ChatCompletion::from_text(text.clone())),
            ScriptedAnswer::Completion(completion) => Ok(completion.clone()),
            ScriptedAnswer::Failure(code) => Err(Self::failure(*code)),
        }
    }

    async fn complete_lines(&self, request: &ChatRequest) -> AppResult<LineStream> {
        self.requests.lock().unwrap().push(request.clone());
        match &self.answer {
            ScriptedAnswer::Text(text) => {
                let lines: Vec<AppResult<String>> =
                    text.lines().map(|l| Ok(l.to_owned())).collect();
                Ok(Box::pin(stream::iter(lines)))
            }
            ScriptedAnswer::Completion(_) => Ok(Box::pin(stream::empty())),
            ScriptedAnswer::Failure(code) => Err(Self::failure(*code)),
        }
    }
}

/// Server resources wired to a scripted provider
pub fn resources_with(provider: Arc<ScriptedProvider>) -> Arc<ServerResources> {
    Arc::new(ServerResources::new(
        Arc::new(ServerConfig::default()),
        provider,
    ))
}
