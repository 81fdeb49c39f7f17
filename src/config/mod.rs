// ABOUTME: Configuration module root for environment-sourced server settings
// ABOUTME: Groups server, chat API, and document store configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration management
//!
//! All settings come from environment variables (optionally via `.env`) and are
//! read once at startup.

/// Server, CORS, and environment settings
pub mod environment;
/// Document store service-account settings
pub mod firebase;
/// Chat-completion endpoint settings
pub mod llm;

pub use environment::{CorsConfig, Environment, ServerConfig};
pub use firebase::FirebaseConfig;
pub use llm::ChatApiConfig;
