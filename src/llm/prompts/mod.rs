// ABOUTME: Natural-language prompt builders for session feedback, training plans, and stroke analysis
// ABOUTME: Pure formatting whose numbered output instructions mirror the response parser keywords
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Coaching Prompts
//!
//! Each builder embeds every relevant request field verbatim and ends with a
//! numbered list of what the answer should contain. The parser in
//! `crate::coaching::parser` keys off the same vocabulary ("training approach",
//! "schedule", "recommendations", "efficiency score", "drills"), so the two
//! must change together.

use serde_json::{Map, Value};

use crate::models::{SessionMetrics, StrokeSample, UserProfile};

/// Rendered when a session has no notes
pub const NO_NOTES: &str = "None";
/// Rendered when a stroke sample has no video
pub const NO_VIDEO: &str = "No video provided";
/// Rendered when a profile lists no goals
pub const NO_GOALS: &str = "General fitness";

fn compact_json(data: &Map<String, Value>) -> String {
    Value::Object(data.clone()).to_string()
}

/// Prompt asking for feedback on one session
///
/// `score` is the locally computed heuristic score; the model sees it but
/// never overrides it.
#[must_use]
pub fn training_feedback_prompt(session: &SessionMetrics, score: f64) -> String {
    format!(
        "As an expert swimming coach, analyze this training session and provide personalized feedback:\n\
         \n\
         Session Details:\n\
         - Duration: {duration} minutes\n\
         - Distance: {distance} meters\n\
         - Average Speed: {speed:.1} meters/minute\n\
         - Calories Burned: {calories:.0}\n\
         - Pool Type: {pool_type}\n\
         - Session Type: {session_type}\n\
         \n\
         Stroke Data: {stroke_data}\n\
         Notes: {notes}\n\
         \n\
         Please provide:\n\
         1. A personalized feedback message (2-3 sentences)\n\
         2. 3 specific recommendations for improvement\n\
         3. A performance score out of 100 (current score: {score:.1})\n\
         \n\
         Be encouraging, specific, and actionable in your advice. Focus on technique, endurance, and goal achievement.\n",
        duration = session.duration,
        distance = session.total_distance,
        speed = session.average_speed,
        calories = session.calories_burned,
        pool_type = session.pool_type,
        session_type = session.session_type,
        stroke_data = compact_json(&session.stroke_data),
        notes = session.notes.as_deref().unwrap_or(NO_NOTES),
    )
}

/// Prompt asking for a weekly training plan
#[must_use]
pub fn training_plan_prompt(profile: &UserProfile) -> String {
    let goals = if profile.goals.is_empty() {
        NO_GOALS.to_owned()
    } else {
        profile.goals.join(", ")
    };

    format!(
        "As an expert swimming coach, create a personalized training plan for this swimmer:\n\
         \n\
         Swimmer Profile:\n\
         - Level: {level}\n\
         - Preferred Stroke: {stroke}\n\
         - Goals: {goals}\n\
         - Weekly Sessions: {weekly}\n\
         - Session Duration: {minutes} minutes\n\
         \n\
         Please provide:\n\
         1. A focused training approach (1-2 sentences)\n\
         2. A detailed weekly training schedule with specific workouts\n\
         3. 4-5 key recommendations for success\n\
         \n\
         Make the plan engaging, progressive, and tailored to their level and goals. Include specific distances, sets, and rest periods.\n",
        level = profile.level,
        stroke = profile.preferred_stroke,
        weekly = profile.weekly_target_sessions,
        minutes = profile.session_duration_minutes,
    )
}

/// Prompt asking for a stroke technique analysis
#[must_use]
pub fn stroke_analysis_prompt(sample: &StrokeSample) -> String {
    format!(
        "As an expert swimming coach, analyze this {stroke} stroke data and provide technique feedback:\n\
         \n\
         Stroke Data: {stroke_data}\n\
         Video URL: {video}\n\
         \n\
         Please provide:\n\
         1. Overall efficiency score (0-100)\n\
         2. 3-4 specific areas for improvement\n\
         3. 2-3 recommended drills to practice\n\
         4. General technique advice\n\
         \n\
         Be specific, actionable, and encouraging in your analysis.\n",
        stroke = sample.stroke,
        stroke_data = compact_json(&sample.stroke_data),
        video = sample.video_url.as_deref().unwrap_or(NO_VIDEO),
    )
}
