// ABOUTME: Document store (Firebase) service-account configuration loaded from environment
// ABOUTME: Only initialization-time settings; the backend performs no domain reads or writes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use std::path::PathBuf;

use crate::constants::{env_vars, firebase};

/// Firebase service-account settings
#[derive(Clone)]
pub struct FirebaseConfig {
    /// Firebase project ID
    pub project_id: Option<String>,
    /// Service-account private key ID
    pub private_key_id: Option<String>,
    /// Service-account private key (PEM)
    pub private_key: Option<String>,
    /// Service-account client email
    pub client_email: Option<String>,
    /// Service-account client ID
    pub client_id: Option<String>,
    /// OAuth authorization URI
    pub auth_uri: String,
    /// OAuth token URI
    pub token_uri: String,
    /// Auth provider certificate URL
    pub auth_provider_x509_cert_url: String,
    /// Client certificate URL
    pub client_x509_cert_url: Option<String>,
    /// Path to a credentials JSON file, used when inline credentials are absent
    pub credentials_path: PathBuf,
}

impl Default for FirebaseConfig {
    fn default() -> Self {
        Self {
            project_id: None,
            private_key_id: None,
            private_key: None,
            client_email: None,
            client_id: None,
            auth_uri: firebase::DEFAULT_AUTH_URI.to_owned(),
            token_uri: firebase::DEFAULT_TOKEN_URI.to_owned(),
            auth_provider_x509_cert_url: firebase::DEFAULT_AUTH_PROVIDER_CERT_URL.to_owned(),
            client_x509_cert_url: None,
            credentials_path: PathBuf::from(firebase::DEFAULT_CREDENTIALS_PATH),
        }
    }
}

impl fmt::Debug for FirebaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FirebaseConfig")
            .field("project_id", &self.project_id)
            .field("private_key_id", &self.private_key_id.as_ref().map(|_| "<redacted>"))
            .field("private_key", &self.private_key.as_ref().map(|_| "<redacted>"))
            .field("client_email", &self.client_email)
            .field("client_id", &self.client_id)
            .field("auth_uri", &self.auth_uri)
            .field("token_uri", &self.token_uri)
            .field("credentials_path", &self.credentials_path)
            .finish_non_exhaustive()
    }
}

impl FirebaseConfig {
    /// Load from a key lookup
    ///
    /// Environment variables:
    /// - `FIREBASE_PROJECT_ID`, `FIREBASE_PRIVATE_KEY_ID`, `FIREBASE_PRIVATE_KEY`
    /// - `FIREBASE_CLIENT_EMAIL`, `FIREBASE_CLIENT_ID`, `FIREBASE_CLIENT_X509_CERT_URL`
    /// - `FIREBASE_AUTH_URI`, `FIREBASE_TOKEN_URI`, `FIREBASE_AUTH_PROVIDER_X509_CERT_URL`
    /// - `FIREBASE_CREDENTIALS_PATH` (default: `firebase-credentials.json`)
    #[must_use]
    pub fn from_lookup<F>(lookup: &F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            project_id: non_empty(env_vars::FIREBASE_PROJECT_ID),
            private_key_id: non_empty(env_vars::FIREBASE_PRIVATE_KEY_ID),
            // Keys pasted into .env files usually carry literal "\n" sequences
            private_key: non_empty(env_vars::FIREBASE_PRIVATE_KEY).map(|k| k.replace("\\n", "\n")),
            client_email: non_empty(env_vars::FIREBASE_CLIENT_EMAIL),
            client_id: non_empty(env_vars::FIREBASE_CLIENT_ID),
            auth_uri: non_empty(env_vars::FIREBASE_AUTH_URI)
                .unwrap_or_else(|| firebase::DEFAULT_AUTH_URI.to_owned()),
            token_uri: non_empty(env_vars::FIREBASE_TOKEN_URI)
                .unwrap_or_else(|| firebase::DEFAULT_TOKEN_URI.to_owned()),
            auth_provider_x509_cert_url: non_empty(env_vars::FIREBASE_AUTH_PROVIDER_X509_CERT_URL)
                .unwrap_or_else(|| firebase::DEFAULT_AUTH_PROVIDER_CERT_URL.to_owned()),
            client_x509_cert_url: non_empty(env_vars::FIREBASE_CLIENT_X509_CERT_URL),
            credentials_path: non_empty(env_vars::FIREBASE_CREDENTIALS_PATH)
                .map_or_else(|| PathBuf::from(firebase::DEFAULT_CREDENTIALS_PATH), PathBuf::from),
        }
    }

    /// Whether a project is configured at all
    #[must_use]
    pub const fn is_configured(&self) -> bool {
        self.project_id.is_some()
    }

    /// Whether inline service-account credentials are complete
    #[must_use]
    pub const fn has_inline_credentials(&self) -> bool {
        self.project_id.is_some() && self.private_key.is_some() && self.client_email.is_some()
    }
}
