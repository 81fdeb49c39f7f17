// ABOUTME: Server binary for the AI swim coach backend
// ABOUTME: Loads configuration, initializes logging, and serves the coaching API
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Swim Coach Server Binary
//!
//! Reads configuration from the environment (and `.env`), then serves the
//! coaching API until Ctrl-C or SIGTERM.

use anyhow::Result;
use clap::Parser;
use swim_coach_backend::{config::ServerConfig, logging, resources::ServerResources, server};
use tracing::{error, info, warn};

#[derive(Parser)]
#[command(name = "swim-coach-server")]
#[command(about = "AI Swim Coach backend - training feedback, plans and stroke analysis")]
pub struct Args {
    /// Override bind host
    #[arg(long)]
    host: Option<String>,

    /// Override HTTP port
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // .env may carry RUST_LOG and LOG_FORMAT, so load it before the subscriber
    let dotenv = dotenvy::dotenv();
    logging::init_from_env()?;
    match dotenv {
        Ok(path) => info!("Loaded environment from {}", path.display()),
        Err(e) => warn!("No .env file loaded: {}", e),
    }

    let mut config = ServerConfig::from_env()?;
    if let Some(host) = args.host {
        config.host = host;
    }
    if let Some(port) = args.port {
        config.http_port = port;
    }

    info!("Starting AI Swim Coach Backend");
    info!("{}", config.summary());
    if !config.firebase.has_inline_credentials() {
        info!(
            "Document store credentials will be read from {}",
            config.firebase.credentials_path.display()
        );
    }

    let resources = ServerResources::from_config(config)?;

    if let Err(e) = server::run(resources).await {
        error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
