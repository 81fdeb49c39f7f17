// ABOUTME: HTTP middleware shared by all routes
// ABOUTME: Cross-origin configuration for browser and mobile web clients
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Cross-origin resource sharing
pub mod cors;

pub use cors::setup_cors;
