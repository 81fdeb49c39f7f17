// ABOUTME: Local intelligence that does not depend on the remote model
// ABOUTME: Heuristic session score and rule-based quick feedback during a swim
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Intelligence Module
//!
//! Deterministic analytics computed from request data alone.

/// Rule-based in-session feedback
pub mod quick_feedback;
/// Heuristic session scoring
pub mod scoring;

pub use quick_feedback::quick_feedback;
pub use scoring::session_score;
