// ABOUTME: Coaching module root wiring prompts, the remote call, parsing, and fallbacks
// ABOUTME: Exposes the service used by HTTP handlers and its explicit outcome types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Coaching
//!
//! Per request: prompt builder, one provider call, then either the response
//! parser or the fallback composer. Every path yields a complete payload.

/// Canned payloads
pub mod fallback;
/// Free-text answer parsers
pub mod parser;
/// Request pipeline
pub mod service;

pub use parser::PlanSection;
pub use service::{CoachingOutcome, CoachingService, FallbackReason};
