// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Loads server, CORS, chat API, and document store settings from environment variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration management
//!
//! Every setting is read through a lookup function so the same parsing code
//! serves both the real process environment and tests.

use std::env;
use std::fmt;
use std::str::FromStr;

use tracing::{debug, info, warn};

use super::firebase::FirebaseConfig;
use super::llm::ChatApiConfig;
use crate::constants::{env_vars, network};
use crate::errors::{AppError, AppResult};

/// Environment type for validation strictness and logging defaults
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    /// Local development (default)
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Test runs
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Cross-origin configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorsConfig {
    /// Allowed origins; a single `"*"` entry allows any origin
    pub allowed_origins: Vec<String>,
}

impl CorsConfig {
    /// Whether any origin is accepted
    #[must_use]
    pub fn allows_any(&self) -> bool {
        self.allowed_origins.is_empty() || self.allowed_origins.iter().any(|o| o == "*")
    }
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: parse_origins(network::DEFAULT_CORS_ORIGINS),
        }
    }
}

/// Top-level server configuration, built once at startup
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind host
    pub host: String,
    /// HTTP port
    pub http_port: u16,
    /// Deployment environment
    pub environment: Environment,
    /// Debug mode: request spans and events are logged at `info` with headers
    pub debug: bool,
    /// CORS settings
    pub cors: CorsConfig,
    /// Chat-completion endpoint settings
    pub chat_api: ChatApiConfig,
    /// Document store settings
    pub firebase: FirebaseConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: network::DEFAULT_HOST.to_owned(),
            http_port: network::DEFAULT_PORT,
            environment: Environment::Development,
            debug: true,
            cors: CorsConfig::default(),
            chat_api: ChatApiConfig::default(),
            firebase: FirebaseConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from the process environment, honouring a `.env` file
    ///
    /// # Errors
    ///
    /// Returns an error if a variable holds an unparseable value or validation fails
    pub fn from_env() -> AppResult<Self> {
        info!("Loading configuration from environment variables");

        // Already-set variables win, so a second load after startup is harmless
        if let Err(e) = dotenvy::dotenv() {
            debug!("No .env file applied: {}", e);
        }

        let config = Self::from_lookup(&|key| env::var(key).ok())?;
        config.validate()?;
        info!("Configuration loaded successfully");
        Ok(config)
    }

    /// Build configuration from an arbitrary key lookup
    ///
    /// # Errors
    ///
    /// Returns an error if a variable holds an unparseable value
    pub fn from_lookup<F>(lookup: &F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = lookup(env_vars::ENVIRONMENT)
            .map(|s| Environment::from_str_or_default(&s))
            .unwrap_or_default();

        Ok(Self {
            host: lookup(env_vars::HOST).unwrap_or_else(|| network::DEFAULT_HOST.to_owned()),
            http_port: parse_or(lookup, env_vars::PORT, network::DEFAULT_PORT)?,
            environment,
            debug: parse_bool_or(lookup, env_vars::DEBUG, !environment.is_production()),
            cors: CorsConfig {
                allowed_origins: parse_origins(
                    &lookup(env_vars::CORS_ALLOWED_ORIGINS)
                        .unwrap_or_else(|| network::DEFAULT_CORS_ORIGINS.to_owned()),
                ),
            },
            chat_api: ChatApiConfig::from_lookup(lookup)?,
            firebase: FirebaseConfig::from_lookup(lookup),
        })
    }

    /// Validate configuration values
    ///
    /// Missing credentials are fatal in production and only logged elsewhere.
    ///
    /// # Errors
    ///
    /// Returns an error in production when required credentials are missing
    pub fn validate(&self) -> AppResult<()> {
        let missing = self.missing_required_vars();
        if missing.is_empty() {
            return Ok(());
        }

        let joined = missing.join(", ");
        if self.environment.is_production() {
            return Err(AppError::config_missing(format!(
                "Missing required environment variables: {joined}"
            )));
        }

        warn!(
            "Missing environment variables: {} (remote coaching will use fallback content)",
            joined
        );
        Ok(())
    }

    /// Names of required variables that are not set
    #[must_use]
    pub fn missing_required_vars(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.chat_api.api_key.is_none() {
            missing.push(env_vars::PUTER_API_KEY);
        }
        if self.firebase.project_id.is_none() {
            missing.push(env_vars::FIREBASE_PROJECT_ID);
        }
        missing
    }

    /// Get a summary of the configuration for logging (without secrets)
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "AI Swim Coach Backend Configuration:\n\
             - Bind: {}:{}\n\
             - Environment: {}\n\
             - Debug: {}\n\
             - Chat API: {} (model {})\n\
             - Chat API Key: {}\n\
             - Document Store: {}\n\
             - CORS Origins: {}",
            self.host,
            self.http_port,
            self.environment,
            self.debug,
            self.chat_api.api_url,
            self.chat_api.model,
            if self.chat_api.api_key.is_some() {
                "Configured"
            } else {
                "Missing"
            },
            if self.firebase.is_configured() {
                "Configured"
            } else {
                "Disabled"
            },
            self.cors.allowed_origins.join(", ")
        )
    }
}

/// Parse a variable into `T`, using `default` when it is unset or blank
///
/// # Errors
///
/// Returns a configuration error when the variable is set but unparseable
pub fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> AppResult<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: fmt::Display,
{
    match lookup(key) {
        Some(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .map_err(|e| AppError::config_invalid(format!("Invalid {key} value: {e}"))),
        _ => Ok(default),
    }
}

/// Parse a boolean flag leniently (`true`/`1`/`yes` are true)
pub fn parse_bool_or<F>(lookup: &F, key: &str, default: bool) -> bool
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key).map_or(default, |v| {
        matches!(v.trim().to_lowercase().as_str(), "true" | "1" | "yes")
    })
}

/// Parse comma-separated CORS origins
#[must_use]
pub fn parse_origins(origins_str: &str) -> Vec<String> {
    if origins_str.trim() == "*" {
        vec!["*".to_owned()]
    } else {
        origins_str
            .split(',')
            .map(|s| s.trim().to_owned())
            .filter(|s| !s.is_empty())
            .collect()
    }
}
