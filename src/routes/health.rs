// ABOUTME: Health check route handler for service monitoring
// ABOUTME: Reports liveness, the current time, and the service and AI provider names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Health check routes for service monitoring

use axum::{routing::get, Json, Router};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::constants::service_names;

/// Body of `GET /api/health`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `healthy` while the process serves requests
    pub status: String,
    /// RFC 3339 time of the check
    pub timestamp: String,
    /// Service name
    pub service: String,
    /// Remote model description
    pub ai_provider: String,
}

/// Health routes implementation
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create the health check route
    pub fn routes() -> Router {
        async fn health_handler() -> Json<HealthResponse> {
            Json(HealthResponse {
                status: "healthy".to_owned(),
                timestamp: Utc::now().to_rfc3339(),
                service: service_names::SWIM_COACH_BACKEND.to_owned(),
                ai_provider: service_names::AI_PROVIDER.to_owned(),
            })
        }

        Router::new().route("/api/health", get(health_handler))
    }
}
