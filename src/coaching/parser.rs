// ABOUTME: Heuristic line-by-line parsers turning free-text model answers into structured results
// ABOUTME: Feedback prose and numbered recommendations, plan sections, stroke score and buckets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Response Parser
//!
//! Every routine is a single deterministic pass over the answer split into
//! trimmed lines. Keyword checks are case-insensitive and numbered markers are
//! stripped up to the first period only. Empty buckets are filled from
//! [`super::fallback`], so every parsed result satisfies the same non-empty
//! guarantees as a canned one.

use std::sync::LazyLock;

use regex::Regex;

use super::fallback;
use crate::models::{AnalysisResult, FeedbackResult, PlanBody, PlanResult, UserProfile};

/// First run of ASCII digits on a line
static FIRST_NUMBER: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"(\d+)").ok());

const FEEDBACK_MARKERS: &[&str] = &["1.", "2.", "3."];
const FEEDBACK_SKIP_PREFIXES: &[&str] = &["1.", "2.", "3.", "recommendations:", "score:"];
const PLAN_RECOMMENDATION_MARKERS: &[&str] = &["1.", "2.", "3.", "4.", "5."];
const IMPROVEMENT_EXCLUDED_MARKERS: &[&str] = &["1.", "2.", "3.", "4."];
const DRILL_EXCLUDED_MARKERS: &[&str] = &["1.", "2.", "3."];

const IMPROVEMENT_KEYWORDS: &[&str] = &["improvement", "better", "focus"];
const DRILL_KEYWORDS: &[&str] = &["drill", "practice", "exercise"];
const WEEKDAYS: &[&str] = &[
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
    "sunday",
];

/// Section of a training plan answer the parser is currently reading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlanSection {
    /// Before any section heading
    #[default]
    None,
    /// Training approach
    Focus,
    /// Weekly schedule
    Sessions,
    /// Closing recommendations
    Recommendations,
}

impl PlanSection {
    /// Section a line switches to, if it is a heading
    ///
    /// Checks run in order, so a line mentioning both a focused approach and a
    /// schedule opens the focus section.
    #[must_use]
    pub fn switch_for(line: &str) -> Option<Self> {
        let lower = line.to_lowercase();
        if lower.contains("training approach") || lower.contains("focused") {
            Some(Self::Focus)
        } else if lower.contains("schedule") || lower.contains("workout") {
            Some(Self::Sessions)
        } else if lower.contains("recommendations") {
            Some(Self::Recommendations)
        } else {
            None
        }
    }
}

fn trimmed_lines(content: &str) -> impl Iterator<Item = &str> {
    content.lines().map(str::trim)
}

fn starts_with_any(line: &str, prefixes: &[&str]) -> bool {
    let lower = line.to_lowercase();
    prefixes.iter().any(|p| lower.starts_with(p))
}

fn contains_any(line: &str, needles: &[&str]) -> bool {
    let lower = line.to_lowercase();
    needles.iter().any(|n| lower.contains(n))
}

/// Text after the first period, trimmed; `None` when nothing is left
fn strip_marker(line: &str) -> Option<String> {
    let (_, rest) = line.split_once('.')?;
    let rest = rest.trim();
    (!rest.is_empty()).then(|| rest.to_owned())
}

/// First digit run on the line as a number; runs too long for a finite `f64` are ignored
fn first_number(line: &str) -> Option<f64> {
    FIRST_NUMBER
        .as_ref()?
        .captures(line)?
        .get(1)?
        .as_str()
        .parse()
        .ok()
        .filter(|value: &f64| value.is_finite())
}

/// Parse a session feedback answer
///
/// Prose is every non-empty line that is not a numbered item or a
/// `Recommendations:`/`Score:` label, joined with single spaces.
/// Recommendations come from lines numbered `1.` to `3.`. The returned score
/// is always `score`; the model's own number is ignored.
#[must_use]
pub fn parse_feedback(content: &str, score: f64) -> FeedbackResult {
    let prose: Vec<&str> = trimmed_lines(content)
        .filter(|line| !line.is_empty() && !starts_with_any(line, FEEDBACK_SKIP_PREFIXES))
        .collect();

    let recommendations: Vec<String> = trimmed_lines(content)
        .filter(|line| starts_with_any(line, FEEDBACK_MARKERS))
        .filter_map(strip_marker)
        .collect();

    FeedbackResult {
        feedback: if prose.is_empty() {
            fallback::FEEDBACK_MESSAGE.to_owned()
        } else {
            prose.join(" ")
        },
        score,
        recommendations: if recommendations.is_empty() {
            fallback::feedback_recommendations()
        } else {
            recommendations
        },
    }
}

/// Parse a training plan answer
///
/// A line that opens a section only switches the section; content is taken
/// from the lines that follow it. Goals and weekly sessions pass through from
/// the profile.
#[must_use]
pub fn parse_plan(content: &str, profile: &UserProfile) -> PlanResult {
    let mut section = PlanSection::None;
    let mut focus = String::new();
    let mut sessions = Vec::new();
    let mut recommendations = Vec::new();

    for line in trimmed_lines(content) {
        if let Some(next) = PlanSection::switch_for(line) {
            section = next;
            continue;
        }
        if line.is_empty() {
            continue;
        }

        match section {
            PlanSection::Focus if !line.starts_with("1.") => line.clone_into(&mut focus),
            PlanSection::Sessions if contains_any(line, WEEKDAYS) => sessions.push(line.to_owned()),
            PlanSection::Recommendations if starts_with_any(line, PLAN_RECOMMENDATION_MARKERS) => {
                if let Some(rec) = strip_marker(line) {
                    recommendations.push(rec);
                }
            }
            _ => {}
        }
    }

    PlanResult {
        plan: PlanBody {
            focus: if focus.is_empty() {
                fallback::plan_focus(profile)
            } else {
                focus
            },
            sessions: if sessions.is_empty() {
                fallback::default_sessions(profile.swimmer_level())
            } else {
                sessions
            },
        },
        goals: profile.goals.clone(),
        weekly_sessions: profile.weekly_target_sessions,
        recommendations: if recommendations.is_empty() {
            fallback::plan_recommendations()
        } else {
            recommendations
        },
    }
}

/// Parse a stroke analysis answer
///
/// The whole answer is kept as `analysis`. The efficiency score is the first
/// number on the last line mentioning a score. Improvement and drill buckets
/// are classified independently, so one line can land in both.
#[must_use]
pub fn parse_stroke_analysis(content: &str) -> AnalysisResult {
    let mut efficiency_score = fallback::DEFAULT_EFFICIENCY_SCORE;
    let mut improvements = Vec::new();
    let mut drills = Vec::new();

    for line in trimmed_lines(content).filter(|line| !line.is_empty()) {
        if contains_any(line, &["efficiency score", "score"]) {
            if let Some(value) = first_number(line) {
                efficiency_score = value;
            }
        }
        if contains_any(line, IMPROVEMENT_KEYWORDS)
            && !starts_with_any(line, IMPROVEMENT_EXCLUDED_MARKERS)
        {
            improvements.push(line.to_owned());
        }
        if contains_any(line, DRILL_KEYWORDS) && !starts_with_any(line, DRILL_EXCLUDED_MARKERS) {
            drills.push(line.to_owned());
        }
    }

    AnalysisResult {
        analysis: content.to_owned(),
        efficiency_score,
        improvements: if improvements.is_empty() {
            fallback::parsed_stroke_improvements()
        } else {
            improvements
        },
        drills: if drills.is_empty() {
            fallback::parsed_stroke_drills()
        } else {
            drills
        },
    }
}
