// ABOUTME: Coaching pipeline: build prompt, call the provider once, parse or fall back
// ABOUTME: Returns an explicit Generated or Fallback outcome instead of surfacing errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use std::sync::Arc;

use tracing::{debug, instrument, warn};

use super::{fallback, parser};
use crate::config::ChatApiConfig;
use crate::errors::ErrorCode;
use crate::intelligence::session_score;
use crate::llm::prompts::{stroke_analysis_prompt, training_feedback_prompt, training_plan_prompt};
use crate::llm::{ChatRequest, LlmProvider};
use crate::models::{
    AnalysisResult, FeedbackResult, PlanResult, SessionMetrics, StrokeSample, UserProfile,
};

/// Why a canned payload was served
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackReason {
    /// The provider reported an error
    RemoteCallFailed(ErrorCode),
    /// The response had no first choice with string content
    MissingChoices,
    /// The first choice was blank
    EmptyContent,
}

impl fmt::Display for FallbackReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RemoteCallFailed(code) => write!(f, "remote call failed ({code:?})"),
            Self::MissingChoices => write!(f, "response has no usable choice"),
            Self::EmptyContent => write!(f, "response content is empty"),
        }
    }
}

/// Result of one coaching request
#[derive(Debug, Clone, PartialEq)]
pub enum CoachingOutcome<T> {
    /// Parsed from the model's answer
    Generated(T),
    /// Canned payload
    Fallback {
        /// Payload served to the client
        payload: T,
        /// Why the model's answer was not used
        reason: FallbackReason,
    },
}

impl<T> CoachingOutcome<T> {
    /// Payload regardless of how it was produced
    #[must_use]
    pub fn into_payload(self) -> T {
        match self {
            Self::Generated(payload) | Self::Fallback { payload, .. } => payload,
        }
    }

    /// Fallback reason, if a canned payload was served
    #[must_use]
    pub const fn fallback_reason(&self) -> Option<FallbackReason> {
        match self {
            Self::Generated(_) => None,
            Self::Fallback { reason, .. } => Some(*reason),
        }
    }

    /// Whether a canned payload was served
    #[must_use]
    pub const fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback { .. })
    }
}

/// Feedback, plan, and stroke analysis on top of a chat provider
#[derive(Clone)]
pub struct CoachingService {
    provider: Arc<dyn LlmProvider>,
    chat_api: ChatApiConfig,
}

impl CoachingService {
    /// Create a service using `provider` with the given request settings
    #[must_use]
    pub fn new(provider: Arc<dyn LlmProvider>, chat_api: ChatApiConfig) -> Self {
        Self { provider, chat_api }
    }

    /// Send one prompt and return usable answer text
    async fn ask(&self, prompt: String) -> Result<String, FallbackReason> {
        let request = ChatRequest::from_prompt(prompt, &self.chat_api);

        let completion = self
            .provider
            .complete(&request)
            .await
            .map_err(|e| FallbackReason::RemoteCallFailed(e.code))?;

        let content = completion
            .first_content()
            .ok_or(FallbackReason::MissingChoices)?;

        if content.trim().is_empty() {
            return Err(FallbackReason::EmptyContent);
        }

        debug!(
            "{} answered with {} chars",
            self.provider.name(),
            content.len()
        );
        Ok(content.to_owned())
    }

    /// Feedback for one session; the score is always the local heuristic
    #[instrument(skip(self, session))]
    pub async fn training_feedback(
        &self,
        session: &SessionMetrics,
    ) -> CoachingOutcome<FeedbackResult> {
        let score = session_score(session);
        match self.ask(training_feedback_prompt(session, score)).await {
            Ok(content) => CoachingOutcome::Generated(parser::parse_feedback(&content, score)),
            Err(reason) => {
                warn!("Serving fallback training feedback: {}", reason);
                CoachingOutcome::Fallback {
                    payload: fallback::feedback(session),
                    reason,
                }
            }
        }
    }

    /// Weekly training plan for a profile
    #[instrument(skip(self, profile), fields(level = %profile.level))]
    pub async fn training_plan(&self, profile: &UserProfile) -> CoachingOutcome<PlanResult> {
        match self.ask(training_plan_prompt(profile)).await {
            Ok(content) => CoachingOutcome::Generated(parser::parse_plan(&content, profile)),
            Err(reason) => {
                warn!("Serving fallback training plan: {}", reason);
                CoachingOutcome::Fallback {
                    payload: fallback::training_plan(profile),
                    reason,
                }
            }
        }
    }

    /// Technique analysis for a stroke sample
    #[instrument(skip(self, sample), fields(stroke = %sample.stroke))]
    pub async fn stroke_analysis(&self, sample: &StrokeSample) -> CoachingOutcome<AnalysisResult> {
        match self.ask(stroke_analysis_prompt(sample)).await {
            Ok(content) => CoachingOutcome::Generated(parser::parse_stroke_analysis(&content)),
            Err(reason) => {
                warn!("Serving fallback stroke analysis: {}", reason);
                CoachingOutcome::Fallback {
                    payload: fallback::stroke_analysis(sample),
                    reason,
                }
            }
        }
    }
}
