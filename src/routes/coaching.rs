// ABOUTME: Coaching route handlers for feedback, training plans, stroke analysis, and quick tips
// ABOUTME: Thin handlers that always answer 200 with a parsed or canned payload
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Coaching routes
//!
//! Bodies that are not valid JSON for the request type are rejected by the
//! `Json` extractor before a handler runs. Past that point every request gets
//! a complete payload.

use std::sync::Arc;

use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};

use crate::intelligence::quick_feedback;
use crate::models::{
    AnalysisResult, FeedbackResult, PlanResult, QuickFeedbackRequest, QuickFeedbackResult,
    StrokeSample, TrainingFeedbackRequest, TrainingPlanRequest,
};
use crate::resources::ServerResources;

/// Coaching routes implementation
pub struct CoachingRoutes;

impl CoachingRoutes {
    /// Create all coaching routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/training-feedback", post(Self::handle_training_feedback))
            .route("/api/training-plan", post(Self::handle_training_plan))
            .route("/api/stroke-analysis", post(Self::handle_stroke_analysis))
            .route("/api/ai-feedback/quick", post(Self::handle_quick_feedback))
            .with_state(resources)
    }

    /// Handle POST /api/training-feedback
    async fn handle_training_feedback(
        State(resources): State<Arc<ServerResources>>,
        Json(body): Json<TrainingFeedbackRequest>,
    ) -> Json<FeedbackResult> {
        let outcome = resources
            .coaching
            .training_feedback(&body.session_data)
            .await;
        Json(outcome.into_payload())
    }

    /// Handle POST /api/training-plan
    async fn handle_training_plan(
        State(resources): State<Arc<ServerResources>>,
        Json(body): Json<TrainingPlanRequest>,
    ) -> Json<PlanResult> {
        let outcome = resources.coaching.training_plan(&body.user_profile).await;
        Json(outcome.into_payload())
    }

    /// Handle POST /api/stroke-analysis
    async fn handle_stroke_analysis(
        State(resources): State<Arc<ServerResources>>,
        Json(sample): Json<StrokeSample>,
    ) -> Json<AnalysisResult> {
        let outcome = resources.coaching.stroke_analysis(&sample).await;
        Json(outcome.into_payload())
    }

    /// Handle POST /api/ai-feedback/quick
    ///
    /// Answered locally; the remote model is never called.
    async fn handle_quick_feedback(
        Json(metrics): Json<QuickFeedbackRequest>,
    ) -> Json<QuickFeedbackResult> {
        Json(QuickFeedbackResult {
            feedback: quick_feedback(&metrics),
        })
    }
}
