// ABOUTME: Application constants grouped by domain: service identity, chat API defaults, limits
// ABOUTME: Environment variable names and default values for configuration loading
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into small domain modules rather than one flat list.

/// Service identity reported by the health endpoint and logs
pub mod service_names {
    /// Human-readable service name
    pub const SWIM_COACH_BACKEND: &str = "AI Swim Coach Backend";
    /// Target name used in log filter directives
    pub const LOG_TARGET: &str = "swim_coach_backend";
    /// AI provider description reported by the health endpoint
    pub const AI_PROVIDER: &str = "Grok 4 via Puter.js";
}

/// Chat-completion API defaults
pub mod chat_api {
    /// Puter.js chat endpoint
    pub const DEFAULT_API_URL: &str = "https://api.puter.com/v2/ai/chat";
    /// Model identifier sent with every request
    pub const DEFAULT_MODEL: &str = "x-ai/grok-4";
    /// Default maximum tokens to generate
    pub const DEFAULT_MAX_TOKENS: u32 = 500;
    /// Default sampling temperature
    pub const DEFAULT_TEMPERATURE: f32 = 0.7;
    /// Provider label used in error messages
    pub const PROVIDER_LABEL: &str = "Puter";
}

/// Timeouts for outbound HTTP calls
pub mod timeouts {
    /// Whole-request timeout for the chat endpoint
    pub const LLM_REQUEST_TIMEOUT_SECS: u64 = 60;
    /// TCP/TLS connect timeout for the chat endpoint
    pub const LLM_CONNECT_TIMEOUT_SECS: u64 = 10;
}

/// Request limits
pub mod limits {
    /// Maximum accepted request body size (1 MiB)
    pub const MAX_REQUEST_BODY_BYTES: usize = 1024 * 1024;
}

/// Document store (Firebase) defaults
pub mod firebase {
    /// OAuth authorization endpoint
    pub const DEFAULT_AUTH_URI: &str = "https://accounts.google.com/o/oauth2/auth";
    /// OAuth token endpoint
    pub const DEFAULT_TOKEN_URI: &str = "https://oauth2.googleapis.com/token";
    /// Provider certificate endpoint
    pub const DEFAULT_AUTH_PROVIDER_CERT_URL: &str = "https://www.googleapis.com/oauth2/v1/certs";
    /// Service-account credentials file
    pub const DEFAULT_CREDENTIALS_PATH: &str = "firebase-credentials.json";
}

/// Network defaults
pub mod network {
    /// Bind address
    pub const DEFAULT_HOST: &str = "0.0.0.0";
    /// HTTP port
    pub const DEFAULT_PORT: u16 = 5000;
    /// Origins allowed by CORS when nothing is configured
    pub const DEFAULT_CORS_ORIGINS: &str =
        "http://localhost:3000,http://localhost:8080,http://127.0.0.1:3000,http://127.0.0.1:8080";
}

/// Environment variable names
pub mod env_vars {
    /// Chat API key
    pub const PUTER_API_KEY: &str = "PUTER_API_KEY";
    /// Chat API URL
    pub const PUTER_API_URL: &str = "PUTER_API_URL";
    /// Model identifier
    pub const GROK_MODEL: &str = "GROK_MODEL";
    /// Maximum tokens
    pub const GROK_MAX_TOKENS: &str = "GROK_MAX_TOKENS";
    /// Sampling temperature
    pub const GROK_TEMPERATURE: &str = "GROK_TEMPERATURE";
    /// Request timeout
    pub const LLM_REQUEST_TIMEOUT_SECS: &str = "LLM_REQUEST_TIMEOUT_SECS";
    /// Connect timeout
    pub const LLM_CONNECT_TIMEOUT_SECS: &str = "LLM_CONNECT_TIMEOUT_SECS";
    /// Bind host
    pub const HOST: &str = "HOST";
    /// Bind port
    pub const PORT: &str = "PORT";
    /// Deployment environment
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
    /// Debug flag
    pub const DEBUG: &str = "DEBUG";
    /// CORS origin list
    pub const CORS_ALLOWED_ORIGINS: &str = "CORS_ALLOWED_ORIGINS";
    /// Firebase project
    pub const FIREBASE_PROJECT_ID: &str = "FIREBASE_PROJECT_ID";
    /// Firebase private key id
    pub const FIREBASE_PRIVATE_KEY_ID: &str = "FIREBASE_PRIVATE_KEY_ID";
    /// Firebase private key
    pub const FIREBASE_PRIVATE_KEY: &str = "FIREBASE_PRIVATE_KEY";
    /// Firebase client email
    pub const FIREBASE_CLIENT_EMAIL: &str = "FIREBASE_CLIENT_EMAIL";
    /// Firebase client id
    pub const FIREBASE_CLIENT_ID: &str = "FIREBASE_CLIENT_ID";
    /// Firebase auth URI
    pub const FIREBASE_AUTH_URI: &str = "FIREBASE_AUTH_URI";
    /// Firebase token URI
    pub const FIREBASE_TOKEN_URI: &str = "FIREBASE_TOKEN_URI";
    /// Firebase auth provider certificate URL
    pub const FIREBASE_AUTH_PROVIDER_X509_CERT_URL: &str = "FIREBASE_AUTH_PROVIDER_X509_CERT_URL";
    /// Firebase client certificate URL
    pub const FIREBASE_CLIENT_X509_CERT_URL: &str = "FIREBASE_CLIENT_X509_CERT_URL";
    /// Firebase credentials file
    pub const FIREBASE_CREDENTIALS_PATH: &str = "FIREBASE_CREDENTIALS_PATH";
}
