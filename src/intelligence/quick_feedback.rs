// ABOUTME: Rule-based one-sentence feedback from the latest speed, efficiency, and stroke count
// ABOUTME: Deterministic and local, meant for frequent polling while a swim is in progress
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Quick feedback
//!
//! Rules are checked in order: high efficiency, then high speed, then a high
//! stroke count. Anything else rotates through general technique tips keyed by
//! the stroke count, so consecutive polls get varied advice.

use crate::models::QuickFeedbackRequest;

/// Efficiency percentage that earns the technique praise
pub const EXCELLENT_EFFICIENCY_PERCENT: f64 = 85.0;
/// Speed (m/s) that earns the pace praise
pub const FAST_SPEED_MPS: f64 = 2.0;
/// Stroke count that earns the volume praise
pub const HIGH_STROKE_COUNT: u32 = 50;

/// Sentence used when speed or efficiency is missing
pub const GENERIC_QUICK_FEEDBACK: &str =
    "Great work! Keep maintaining your rhythm and focus on your stroke technique.";

const ROTATING_TIPS: [&str; 7] = [
    "Excellent work! Your current pace is building good endurance. Focus on consistent breathing patterns.",
    "Good session progress! Try to maintain relaxed shoulders while keeping that strong catch phase.",
    "Nice technique development! Keep your head position stable and focus on a high elbow catch.",
    "Great stroke count! Work on extending your reach and gliding slightly longer between strokes.",
    "Solid performance! Remember to rotate your body for maximum power and efficiency.",
    "Nice work maintaining form! Focus on a strong kick to support your stroke rhythm.",
    "Excellent consistency! Keep practicing bilateral breathing for better stroke balance.",
];

/// Pick the feedback sentence for the latest metrics
///
/// A missing stroke count counts as zero.
#[must_use]
pub fn quick_feedback(metrics: &QuickFeedbackRequest) -> String {
    let (Some(speed), Some(efficiency)) = (metrics.speed, metrics.efficiency) else {
        return GENERIC_QUICK_FEEDBACK.to_owned();
    };
    let stroke_count = metrics.stroke_count.unwrap_or(0);

    if efficiency >= EXCELLENT_EFFICIENCY_PERCENT {
        format!(
            "Great job! Your efficiency of {efficiency:.1}% shows excellent technique. Keep maintaining that smooth stroke rhythm."
        )
    } else if speed >= FAST_SPEED_MPS {
        format!(
            "Nice speed at {speed:.2} m/s! Focus on maintaining this pace while keeping your stroke long and controlled."
        )
    } else if stroke_count >= HIGH_STROKE_COUNT {
        format!(
            "Strong performance with {stroke_count} strokes recorded. Remember to engage your core for better body position."
        )
    } else {
        ROTATING_TIPS[stroke_count as usize % ROTATING_TIPS.len()].to_owned()
    }
}
