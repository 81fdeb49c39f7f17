// ABOUTME: Canned coaching payloads used when the remote model fails or returns nothing usable
// ABOUTME: Deterministic defaults derived only from already-decoded request values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::intelligence::session_score;
use crate::models::{
    AnalysisResult, FeedbackResult, PlanBody, PlanResult, SessionMetrics, StrokeSample,
    SwimmerLevel, UserProfile,
};

/// Feedback sentence used when no prose could be extracted
pub const FEEDBACK_MESSAGE: &str = "Great session! Keep up the good work.";

/// Efficiency score used when the answer names none
pub const DEFAULT_EFFICIENCY_SCORE: f64 = 75.0;

const FEEDBACK_RECOMMENDATIONS: [&str; 3] = [
    "Focus on proper breathing technique",
    "Maintain consistent stroke rhythm",
    "Stay hydrated during your sessions",
];

const PLAN_RECOMMENDATIONS: [&str; 4] = [
    "Stay consistent with your training schedule",
    "Listen to your body and rest when needed",
    "Focus on technique over speed initially",
    "Gradually increase intensity and distance",
];

const FALLBACK_PLAN_GOALS: [&str; 2] = ["Improve technique", "Build endurance"];

const BEGINNER_SESSIONS: [&str; 3] = [
    "Monday: 10x50m freestyle with 30s rest",
    "Wednesday: 5x100m freestyle with 60s rest",
    "Friday: 4x50m each stroke (freestyle, backstroke, breaststroke)",
];

const INTERMEDIATE_SESSIONS: [&str; 3] = [
    "Monday: 8x100m freestyle with 45s rest",
    "Wednesday: 10x200m freestyle with 90s rest",
    "Friday: 6x150m IM with 120s rest",
];

const ADVANCED_SESSIONS: [&str; 3] = [
    "Monday: 12x100m freestyle with 30s rest",
    "Wednesday: 5x400m freestyle with 180s rest",
    "Friday: 8x200m freestyle at race pace with 120s rest",
];

const STROKE_IMPROVEMENTS: [&str; 3] = [
    "Focus on proper arm extension",
    "Maintain consistent breathing pattern",
    "Keep your body position streamlined",
];

const STROKE_DRILLS: [&str; 3] = [
    "Single arm drills",
    "Catch-up drills",
    "Fingertip drag drills",
];

// A parsed answer with an empty bucket gets the first two canned entries.
const PARSED_BUCKET_LEN: usize = 2;

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_owned()).collect()
}

/// Default feedback recommendations
#[must_use]
pub fn feedback_recommendations() -> Vec<String> {
    owned(&FEEDBACK_RECOMMENDATIONS)
}

/// Default plan recommendations
#[must_use]
pub fn plan_recommendations() -> Vec<String> {
    owned(&PLAN_RECOMMENDATIONS)
}

/// Focus line synthesized from the profile
#[must_use]
pub fn plan_focus(profile: &UserProfile) -> String {
    format!(
        "Building {} skills and {} technique",
        profile.level.to_lowercase(),
        profile.preferred_stroke.to_lowercase()
    )
}

/// Three-day schedule for a level
#[must_use]
pub fn default_sessions(level: SwimmerLevel) -> Vec<String> {
    match level {
        SwimmerLevel::Beginner => owned(&BEGINNER_SESSIONS),
        SwimmerLevel::Intermediate => owned(&INTERMEDIATE_SESSIONS),
        SwimmerLevel::Advanced => owned(&ADVANCED_SESSIONS),
    }
}

/// Improvements substituted into a parsed analysis with none
#[must_use]
pub fn parsed_stroke_improvements() -> Vec<String> {
    owned(&STROKE_IMPROVEMENTS[..PARSED_BUCKET_LEN])
}

/// Drills substituted into a parsed analysis with none
#[must_use]
pub fn parsed_stroke_drills() -> Vec<String> {
    owned(&STROKE_DRILLS[..PARSED_BUCKET_LEN])
}

/// Canned feedback carrying the locally computed score
#[must_use]
pub fn feedback(session: &SessionMetrics) -> FeedbackResult {
    FeedbackResult {
        feedback: FEEDBACK_MESSAGE.to_owned(),
        score: session_score(session),
        recommendations: feedback_recommendations(),
    }
}

/// Canned training plan for a profile
#[must_use]
pub fn training_plan(profile: &UserProfile) -> PlanResult {
    PlanResult {
        plan: PlanBody {
            focus: plan_focus(profile),
            sessions: default_sessions(profile.swimmer_level()),
        },
        goals: owned(&FALLBACK_PLAN_GOALS),
        weekly_sessions: profile.weekly_target_sessions,
        recommendations: plan_recommendations(),
    }
}

/// Canned stroke analysis
#[must_use]
pub fn stroke_analysis(sample: &StrokeSample) -> AnalysisResult {
    AnalysisResult {
        analysis: format!("Basic {} analysis completed", sample.stroke),
        efficiency_score: DEFAULT_EFFICIENCY_SCORE,
        improvements: owned(&STROKE_IMPROVEMENTS),
        drills: owned(&STROKE_DRILLS),
    }
}
