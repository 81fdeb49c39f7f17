// ABOUTME: Main library entry point for the AI swim coach backend
// ABOUTME: Training feedback, plans, and stroke analysis backed by a remote chat-completion model
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # AI Swim Coach Backend
//!
//! A thin HTTP service that turns swim-training telemetry into coaching.
//! Each request builds a natural-language prompt, makes one call to a
//! chat-completion endpoint (Grok 4 through the Puter.js chat API), and parses
//! the free-text answer with line heuristics. When the call fails or the answer
//! is unusable, a canned payload is served instead, so every coaching endpoint
//! answers 200.
//!
//! ## Architecture
//!
//! - **Models**: request and response payloads
//! - **Intelligence**: local heuristic session score and quick feedback
//! - **LLM**: provider trait, Puter client, prompt builders
//! - **Coaching**: response parsers, fallbacks, and the request pipeline
//! - **Routes/Server**: axum router, CORS, tracing, graceful shutdown
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use swim_coach_backend::config::ServerConfig;
//! use swim_coach_backend::errors::AppResult;
//! use swim_coach_backend::resources::ServerResources;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let config = ServerConfig::from_env()?;
//!     let resources = ServerResources::from_config(config)?;
//!     swim_coach_backend::server::run(resources).await
//! }
//! ```

/// Prompt building, response parsing, fallbacks, and the coaching pipeline
pub mod coaching;

/// Configuration management
pub mod config;

/// Application constants
pub mod constants;

/// Unified error handling
pub mod errors;

/// Local analytics that do not depend on the remote model
pub mod intelligence;

/// Chat-completion providers and prompts
pub mod llm;

/// Structured logging setup
pub mod logging;

/// HTTP middleware
pub mod middleware;

/// Request and response payloads
pub mod models;

/// Shared server resources
pub mod resources;

/// HTTP route handlers
pub mod routes;

/// Router assembly and serving
pub mod server;
