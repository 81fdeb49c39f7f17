// ABOUTME: Centralized resource container shared by all HTTP handlers
// ABOUTME: Holds read-only configuration and the coaching service built once at startup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Server Resources
//!
//! Built once in `main` and handed to the router as axum state. Nothing in
//! here is mutated after startup, so handlers share it through `Arc` only.

use std::sync::Arc;

use crate::coaching::CoachingService;
use crate::config::ServerConfig;
use crate::errors::AppResult;
use crate::llm::{LlmProvider, PuterProvider};

/// Shared server resources
#[derive(Clone)]
pub struct ServerResources {
    /// Process configuration
    pub config: Arc<ServerConfig>,
    /// Coaching pipeline
    pub coaching: Arc<CoachingService>,
}

impl ServerResources {
    /// Assemble resources around an existing provider
    #[must_use]
    pub fn new(config: Arc<ServerConfig>, provider: Arc<dyn LlmProvider>) -> Self {
        let coaching = Arc::new(CoachingService::new(provider, config.chat_api.clone()));
        Self { config, coaching }
    }

    /// Assemble resources with the Puter provider from configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client for the chat API cannot be built
    pub fn from_config(config: ServerConfig) -> AppResult<Self> {
        let provider = Arc::new(PuterProvider::new(&config.chat_api)?);
        Ok(Self::new(Arc::new(config), provider))
    }
}
