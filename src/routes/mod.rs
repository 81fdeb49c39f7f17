// ABOUTME: Route module organization for the swim coach HTTP endpoints
// ABOUTME: Route definitions grouped by domain with thin handlers over the coaching service
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Each domain module contains only route definitions and thin handler
//! functions that delegate to the service layer.

/// Training feedback, plan, and stroke analysis routes
pub mod coaching;
/// Health check route
pub mod health;

pub use coaching::CoachingRoutes;
pub use health::{HealthResponse, HealthRoutes};
