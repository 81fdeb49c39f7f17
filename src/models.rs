// ABOUTME: Request and response data model for training feedback, plans, and stroke analysis
// ABOUTME: Plain per-request values with serde defaults matching the client wire format
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Domain models
//!
//! None of these values outlive a single request. Absent request fields take
//! the defaults documented on each field.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

fn default_pool_type() -> String {
    "25m".to_owned()
}

fn default_session_type() -> String {
    "Training".to_owned()
}

fn default_level() -> String {
    "Beginner".to_owned()
}

fn default_stroke() -> String {
    "Freestyle".to_owned()
}

const fn default_weekly_sessions() -> u32 {
    3
}

const fn default_session_duration() -> u32 {
    45
}

/// Quantitative summary of one swim session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionMetrics {
    /// Duration in minutes
    #[serde(default)]
    pub duration: f64,
    /// Distance in meters
    #[serde(default)]
    pub total_distance: f64,
    /// Average speed in meters per minute
    #[serde(default)]
    pub average_speed: f64,
    /// Calories burned
    #[serde(default)]
    pub calories_burned: f64,
    /// Pool length label (default `25m`)
    #[serde(default = "default_pool_type")]
    pub pool_type: String,
    /// Session category (default `Training`)
    #[serde(default = "default_session_type")]
    pub session_type: String,
    /// Opaque per-stroke telemetry
    #[serde(default)]
    pub stroke_data: Map<String, Value>,
    /// Free-text notes
    #[serde(default)]
    pub notes: Option<String>,
}

impl Default for SessionMetrics {
    fn default() -> Self {
        Self {
            duration: 0.0,
            total_distance: 0.0,
            average_speed: 0.0,
            calories_burned: 0.0,
            pool_type: default_pool_type(),
            session_type: default_session_type(),
            stroke_data: Map::new(),
            notes: None,
        }
    }
}

/// Swimmer ability level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwimmerLevel {
    /// New swimmers
    Beginner,
    /// Regular swimmers
    Intermediate,
    /// Everything else
    Advanced,
}

impl SwimmerLevel {
    /// Classify a free-form level label; unknown labels count as advanced
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "beginner" => Self::Beginner,
            "intermediate" => Self::Intermediate,
            _ => Self::Advanced,
        }
    }
}

/// Swimmer profile used to generate a training plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Level label (default `Beginner`)
    #[serde(default = "default_level")]
    pub level: String,
    /// Preferred stroke (default `Freestyle`)
    #[serde(default = "default_stroke")]
    pub preferred_stroke: String,
    /// Ordered goals
    #[serde(default)]
    pub goals: Vec<String>,
    /// Target sessions per week
    #[serde(default = "default_weekly_sessions")]
    pub weekly_target_sessions: u32,
    /// Target session length in minutes
    #[serde(default = "default_session_duration")]
    pub session_duration_minutes: u32,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            level: default_level(),
            preferred_stroke: default_stroke(),
            goals: Vec::new(),
            weekly_target_sessions: default_weekly_sessions(),
            session_duration_minutes: default_session_duration(),
        }
    }
}

impl UserProfile {
    /// Parsed level
    #[must_use]
    pub fn swimmer_level(&self) -> SwimmerLevel {
        SwimmerLevel::from_label(&self.level)
    }
}

/// Stroke telemetry submitted for technique analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrokeSample {
    /// Stroke name (default `Freestyle`)
    #[serde(default = "default_stroke")]
    pub stroke: String,
    /// Opaque stroke telemetry
    #[serde(default)]
    pub stroke_data: Map<String, Value>,
    /// Optional video of the swimmer
    #[serde(default)]
    pub video_url: Option<String>,
}

impl Default for StrokeSample {
    fn default() -> Self {
        Self {
            stroke: default_stroke(),
            stroke_data: Map::new(),
            video_url: None,
        }
    }
}

/// Body of `POST /api/training-feedback`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrainingFeedbackRequest {
    /// Session to review
    #[serde(default)]
    pub session_data: SessionMetrics,
}

/// Body of `POST /api/training-plan`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrainingPlanRequest {
    /// Swimmer profile
    #[serde(default)]
    pub user_profile: UserProfile,
}

/// Body of `POST /api/ai-feedback/quick`: recent in-session metrics
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuickFeedbackRequest {
    /// Current speed in m/s
    #[serde(default)]
    pub speed: Option<f64>,
    /// Stroke efficiency as a percentage
    #[serde(default)]
    pub efficiency: Option<f64>,
    /// Strokes recorded so far
    #[serde(default, rename = "strokeCount")]
    pub stroke_count: Option<u32>,
}

/// One-sentence in-session feedback
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickFeedbackResult {
    /// Feedback sentence
    pub feedback: String,
}

/// Feedback on a single session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackResult {
    /// Prose feedback
    pub feedback: String,
    /// Heuristic score in [0, 100]
    pub score: f64,
    /// Ordered recommendations (never empty)
    pub recommendations: Vec<String>,
}

/// Focus and weekly sessions of a plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanBody {
    /// One-line training focus
    pub focus: String,
    /// Weekly schedule lines
    pub sessions: Vec<String>,
}

/// Generated training plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanResult {
    /// Focus and sessions
    pub plan: PlanBody,
    /// Swimmer goals
    pub goals: Vec<String>,
    /// Sessions per week
    pub weekly_sessions: u32,
    /// Ordered recommendations (never empty)
    pub recommendations: Vec<String>,
}

/// Stroke technique analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Full model answer, or a canned sentence on fallback
    pub analysis: String,
    /// Efficiency score extracted from the answer (default 75)
    pub efficiency_score: f64,
    /// Areas to improve (never empty)
    pub improvements: Vec<String>,
    /// Suggested drills (never empty)
    pub drills: Vec<String>,
}
