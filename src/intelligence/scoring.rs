// ABOUTME: Heuristic session score computed locally from pace, duration, and calories
// ABOUTME: Baseline 75 adjusted by fixed bonuses and penalties, clamped into [0, 100]
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Session scoring
//!
//! The score never depends on the remote model. It is embedded in the feedback
//! prompt and returned as the canonical `score` of every feedback payload.

use crate::models::SessionMetrics;

/// Score every session starts from
pub const BASELINE_SCORE: f64 = 75.0;
/// Lower bound of the score range
pub const MIN_SCORE: f64 = 0.0;
/// Upper bound of the score range
pub const MAX_SCORE: f64 = 100.0;

/// Pace (m/min) above which the swimmer earns the speed bonus
pub const FAST_PACE_THRESHOLD: f64 = 50.0;
/// Pace (m/min) below which the swimmer takes the speed penalty
pub const SLOW_PACE_THRESHOLD: f64 = 30.0;
/// Adjustment applied for a fast or slow pace
pub const PACE_ADJUSTMENT: f64 = 10.0;

/// Duration (minutes) above which the endurance bonus applies
pub const LONG_SESSION_MINUTES: f64 = 45.0;
/// Endurance bonus
pub const LONG_SESSION_BONUS: f64 = 5.0;

/// Calories above which the effort bonus applies
pub const HIGH_EFFORT_CALORIES: f64 = 400.0;
/// Effort bonus
pub const HIGH_EFFORT_BONUS: f64 = 5.0;

/// Compute the heuristic score for a session
///
/// Adjustments are summed before clamping, so a fast, long, high-effort
/// session scores exactly 95. Thresholds are strict: a pace of exactly 50 or
/// 30 m/min earns no adjustment.
#[must_use]
pub fn session_score(session: &SessionMetrics) -> f64 {
    let mut score = BASELINE_SCORE;

    if session.average_speed > FAST_PACE_THRESHOLD {
        score += PACE_ADJUSTMENT;
    } else if session.average_speed < SLOW_PACE_THRESHOLD {
        score -= PACE_ADJUSTMENT;
    }

    if session.duration > LONG_SESSION_MINUTES {
        score += LONG_SESSION_BONUS;
    }

    if session.calories_burned > HIGH_EFFORT_CALORIES {
        score += HIGH_EFFORT_BONUS;
    }

    score.clamp(MIN_SCORE, MAX_SCORE)
}
