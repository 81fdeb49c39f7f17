// ABOUTME: HTTP tests for the training feedback, training plan, and stroke analysis endpoints
// ABOUTME: Covers parsed answers, every fallback path, request defaults, and framework rejections
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(clippy::float_cmp)]
#![allow(missing_docs)]

mod helpers;

use axum::http::StatusCode;
use helpers::axum_test::AxumTestRequest;
use helpers::scripted_provider::{resources_with, ScriptedAnswer, ScriptedProvider};
use serde_json::{json, Value};
use swim_coach_backend::errors::ErrorCode;
use swim_coach_backend::llm::ChatCompletion;
use swim_coach_backend::server::build_router;

const PLAN_ANSWER: &str = "\
Focused Training Approach:
Build aerobic base while refining your catch.

Weekly Schedule:
Monday: 8x100m freestyle on 2:00
Keep the effort easy on recovery days.
Thursday: 4x200m pull with paddles

Key Recommendations:
1. Warm up for at least 10 minutes
2. Log every session
";

const STROKE_ANSWER: &str = "\
1. Overall efficiency score: 68
Your catch needs improvement on the left side.
Try this drill: single-arm freestyle to isolate the pull.
Efficiency score after adjustments: 72 out of 100";

// ============================================================================
// Training feedback
// ============================================================================

#[tokio::test]
async fn test_training_feedback_parses_answer_and_keeps_local_score() {
    let provider = ScriptedProvider::answering(
        "Great job!\nKeep it up.\n1. Breathe more\n2. Swim faster\nScore: 99",
    );
    let app = build_router(resources_with(provider.clone()));

    let body: Value = AxumTestRequest::post("/api/training-feedback")
        .json(&json!({
            "session_data": {
                "duration": 50,
                "total_distance": 2000,
                "average_speed": 60,
                "calories_burned": 450
            }
        }))
        .send(app)
        .await
        .assert_status(StatusCode::OK)
        .json();

    assert_eq!(body["feedback"], "Great job! Keep it up.");
    assert_eq!(body["recommendations"], json!(["Breathe more", "Swim faster"]));
    assert_eq!(body["score"].as_f64().unwrap(), 95.0);

    let requests = provider.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].model, "x-ai/grok-4");
    assert!(requests[0].messages[0].content.contains("(current score: 95.0)"));
}

#[tokio::test]
async fn test_training_feedback_without_numbered_lines_uses_default_recommendations() {
    let provider = ScriptedProvider::answering("Solid aerobic work today.");
    let app = build_router(resources_with(provider));

    let body: Value = AxumTestRequest::post("/api/training-feedback")
        .json(&json!({"session_data": {}}))
        .send(app)
        .await
        .assert_status(StatusCode::OK)
        .json();

    assert_eq!(body["feedback"], "Solid aerobic work today.");
    assert_eq!(
        body["recommendations"],
        json!([
            "Focus on proper breathing technique",
            "Maintain consistent stroke rhythm",
            "Stay hydrated during your sessions"
        ])
    );
    // Speed 0 takes the slow-pace penalty
    assert_eq!(body["score"].as_f64().unwrap(), 65.0);
}

#[tokio::test]
async fn test_training_feedback_falls_back_on_network_failure() {
    let app = build_router(resources_with(ScriptedProvider::failing()));

    let body: Value = AxumTestRequest::post("/api/training-feedback")
        .json(&json!({"session_data": {"average_speed": 40, "duration": 60}}))
        .send(app)
        .await
        .assert_status(StatusCode::OK)
        .json();

    assert_eq!(body["feedback"], "Great session! Keep up the good work.");
    assert_eq!(body["score"].as_f64().unwrap(), 80.0);
    assert_eq!(body["recommendations"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_training_feedback_accepts_empty_body_object() {
    let app = build_router(resources_with(ScriptedProvider::failing()));

    let body: Value = AxumTestRequest::post("/api/training-feedback")
        .json(&json!({}))
        .send(app)
        .await
        .assert_status(StatusCode::OK)
        .json();

    assert_eq!(body["score"].as_f64().unwrap(), 65.0);
}

// ============================================================================
// Training plan
// ============================================================================

#[tokio::test]
async fn test_training_plan_parses_sections() {
    let provider = ScriptedProvider::answering(PLAN_ANSWER);
    let app = build_router(resources_with(provider));

    let body: Value = AxumTestRequest::post("/api/training-plan")
        .json(&json!({
            "user_profile": {
                "level": "Intermediate",
                "preferred_stroke": "Freestyle",
                "goals": ["Swim a mile"],
                "weekly_target_sessions": 4
            }
        }))
        .send(app)
        .await
        .assert_status(StatusCode::OK)
        .json();

    assert_eq!(
        body["plan"]["focus"],
        "Build aerobic base while refining your catch."
    );
    assert_eq!(
        body["plan"]["sessions"],
        json!([
            "Monday: 8x100m freestyle on 2:00",
            "Thursday: 4x200m pull with paddles"
        ])
    );
    assert_eq!(body["goals"], json!(["Swim a mile"]));
    assert_eq!(body["weekly_sessions"], 4);
    assert_eq!(
        body["recommendations"],
        json!(["Warm up for at least 10 minutes", "Log every session"])
    );
}

#[tokio::test]
async fn test_training_plan_fills_empty_sections_from_profile() {
    let provider = ScriptedProvider::answering("Enjoy the water.");
    let app = build_router(resources_with(provider));

    let body: Value = AxumTestRequest::post("/api/training-plan")
        .json(&json!({"user_profile": {"level": "Advanced", "preferred_stroke": "Butterfly"}}))
        .send(app)
        .await
        .assert_status(StatusCode::OK)
        .json();

    assert_eq!(
        body["plan"]["focus"],
        "Building advanced skills and butterfly technique"
    );
    assert_eq!(
        body["plan"]["sessions"][1],
        "Wednesday: 5x400m freestyle with 180s rest"
    );
    assert_eq!(body["goals"], json!([]));
    assert_eq!(body["recommendations"].as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn test_training_plan_falls_back_on_network_failure() {
    let app = build_router(resources_with(ScriptedProvider::failing()));

    let body: Value = AxumTestRequest::post("/api/training-plan")
        .json(&json!({"user_profile": {"goals": ["Triathlon"], "weekly_target_sessions": 5}}))
        .send(app)
        .await
        .assert_status(StatusCode::OK)
        .json();

    assert_eq!(
        body["plan"]["focus"],
        "Building beginner skills and freestyle technique"
    );
    assert_eq!(
        body["plan"]["sessions"][0],
        "Monday: 10x50m freestyle with 30s rest"
    );
    assert_eq!(body["goals"], json!(["Improve technique", "Build endurance"]));
    assert_eq!(body["weekly_sessions"], 5);
}

#[tokio::test]
async fn test_training_plan_falls_back_when_choices_are_missing() {
    let provider = ScriptedProvider::new(ScriptedAnswer::Completion(ChatCompletion::default()));
    let app = build_router(resources_with(provider));

    let body: Value = AxumTestRequest::post("/api/training-plan")
        .json(&json!({"user_profile": {}}))
        .send(app)
        .await
        .assert_status(StatusCode::OK)
        .json();

    assert_eq!(body["goals"], json!(["Improve technique", "Build endurance"]));
    assert_eq!(body["weekly_sessions"], 3);
}

// ============================================================================
// Stroke analysis
// ============================================================================

#[tokio::test]
async fn test_stroke_analysis_parses_score_and_buckets() {
    let provider = ScriptedProvider::answering(STROKE_ANSWER);
    let app = build_router(resources_with(provider));

    let body: Value = AxumTestRequest::post("/api/stroke-analysis")
        .json(&json!({"stroke": "Freestyle", "stroke_data": {"rate": 32}}))
        .send(app)
        .await
        .assert_status(StatusCode::OK)
        .json();

    assert_eq!(body["analysis"], STROKE_ANSWER);
    assert_eq!(body["efficiency_score"].as_f64().unwrap(), 72.0);
    assert_eq!(
        body["improvements"],
        json!(["Your catch needs improvement on the left side."])
    );
    assert_eq!(
        body["drills"],
        json!(["Try this drill: single-arm freestyle to isolate the pull."])
    );
}

#[tokio::test]
async fn test_stroke_analysis_falls_back_on_rate_limit() {
    let provider = ScriptedProvider::new(ScriptedAnswer::Failure(ErrorCode::ExternalRateLimited));
    let app = build_router(resources_with(provider));

    let body: Value = AxumTestRequest::post("/api/stroke-analysis")
        .json(&json!({"stroke": "Backstroke"}))
        .send(app)
        .await
        .assert_status(StatusCode::OK)
        .json();

    assert_eq!(body["analysis"], "Basic Backstroke analysis completed");
    assert_eq!(body["efficiency_score"].as_f64().unwrap(), 75.0);
    assert_eq!(body["improvements"].as_array().unwrap().len(), 3);
    assert_eq!(body["drills"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_stroke_analysis_falls_back_on_blank_answer() {
    let provider = ScriptedProvider::answering("   ");
    let app = build_router(resources_with(provider));

    let body: Value = AxumTestRequest::post("/api/stroke-analysis")
        .json(&json!({}))
        .send(app)
        .await
        .assert_status(StatusCode::OK)
        .json();

    assert_eq!(body["analysis"], "Basic Freestyle analysis completed");
}

#[tokio::test]
async fn test_stroke_analysis_score_is_always_a_number() {
    let answer = format!("Efficiency score: {}", "9".repeat(400));
    let provider = ScriptedProvider::answering(&answer);
    let app = build_router(resources_with(provider));

    let body: Value = AxumTestRequest::post("/api/stroke-analysis")
        .json(&json!({"stroke": "Freestyle"}))
        .send(app)
        .await
        .assert_status(StatusCode::OK)
        .json();

    assert_eq!(body["efficiency_score"].as_f64(), Some(75.0));
}

#[tokio::test]
async fn test_stroke_prompt_mentions_video() {
    let provider = ScriptedProvider::answering("Looks fine.");
    let app = build_router(resources_with(provider.clone()));

    AxumTestRequest::post("/api/stroke-analysis")
        .json(&json!({"stroke": "Breaststroke", "video_url": "https://videos.test/1.mp4"}))
        .send(app)
        .await
        .assert_status(StatusCode::OK);

    let prompt = &provider.requests()[0].messages[0].content;
    assert!(prompt.contains("analyze this Breaststroke stroke data"));
    assert!(prompt.contains("Video URL: https://videos.test/1.mp4"));
}

// ============================================================================
// Quick feedback
// ============================================================================

#[tokio::test]
async fn test_quick_feedback_is_answered_locally() {
    let provider = ScriptedProvider::failing();
    let app = build_router(resources_with(provider.clone()));

    let body: Value = AxumTestRequest::post("/api/ai-feedback/quick")
        .json(&json!({"speed": 1.1, "efficiency": 88.46, "strokeCount": 12}))
        .send(app)
        .await
        .assert_status(StatusCode::OK)
        .json();

    assert_eq!(
        body["feedback"],
        "Great job! Your efficiency of 88.5% shows excellent technique. Keep maintaining that smooth stroke rhythm."
    );
    assert!(provider.requests().is_empty());
}

#[tokio::test]
async fn test_quick_feedback_rotates_tips_for_low_metrics() {
    let app = build_router(resources_with(ScriptedProvider::failing()));

    let body: Value = AxumTestRequest::post("/api/ai-feedback/quick")
        .json(&json!({"speed": 1.0, "efficiency": 60, "strokeCount": 10}))
        .send(app)
        .await
        .assert_status(StatusCode::OK)
        .json();

    assert_eq!(
        body["feedback"],
        "Great stroke count! Work on extending your reach and gliding slightly longer between strokes."
    );
}

#[tokio::test]
async fn test_quick_feedback_with_empty_body_gets_generic_sentence() {
    let app = build_router(resources_with(ScriptedProvider::failing()));

    let body: Value = AxumTestRequest::post("/api/ai-feedback/quick")
        .json(&json!({}))
        .send(app)
        .await
        .assert_status(StatusCode::OK)
        .json();

    assert_eq!(
        body["feedback"],
        "Great work! Keep maintaining your rhythm and focus on your stroke technique."
    );
}

// ============================================================================
// Boundary behaviour
// ============================================================================

#[tokio::test]
async fn test_malformed_json_is_rejected_before_the_handler() {
    let provider = ScriptedProvider::answering("unused");
    let app = build_router(resources_with(provider.clone()));

    let response = AxumTestRequest::post("/api/training-feedback")
        .raw_json("{not json")
        .send(app)
        .await;

    assert!((400..500).contains(&response.status()));
    assert!(provider.requests().is_empty());
}

#[tokio::test]
async fn test_unknown_route_returns_json_404() {
    let app = build_router(resources_with(ScriptedProvider::failing()));

    let body: Value = AxumTestRequest::get("/api/nope")
        .send(app)
        .await
        .assert_status(StatusCode::NOT_FOUND)
        .json();

    assert_eq!(body["error"]["code"], "RESOURCE_NOT_FOUND");
    assert_eq!(body["error"]["message"], "Route /api/nope not found");
}

#[tokio::test]
async fn test_cors_allows_configured_origin() {
    let app = build_router(resources_with(ScriptedProvider::failing()));

    let response = AxumTestRequest::options("/api/training-plan")
        .header("origin", "http://localhost:3000")
        .header("access-control-request-method", "POST")
        .send(app)
        .await;

    assert_eq!(
        response.header("access-control-allow-origin").as_deref(),
        Some("http://localhost:3000")
    );
}
