// Copyright 2026 HAC Gateway Contributors
// SPDX-License-Identifier: Apache-2.0

use anyhow::Result;
use clap::{Parser, Subcommand};
use hac_gateway::config::Config;
use hac_gateway::model::{Credentials, View};
use hac_gateway::{pipeline, rest};
use tracing::info;

#[derive(Parser)]
#[command(
    name = "hac-gateway",
    about = "HAC Gateway — JSON access to Home Access Center student data",
    version,
    after_help = "Configuration comes from HACGW_* environment variables:\n\
                  HACGW_BASE_URL, HACGW_PORT, HACGW_CORS_ORIGINS, HACGW_TIMEOUT_MS."
)]
struct Cli {
    /// Enable verbose/debug logging
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP API server
    Serve {
        /// Port to bind (overrides HACGW_PORT)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Authenticate once and print one view as JSON
    Fetch {
        /// View to fetch: info, schedule, classes, or all
        #[arg(long, default_value = "all")]
        view: View,
        /// HAC username
        #[arg(long)]
        username: String,
        /// HAC password (falls back to HACGW_PASSWORD)
        #[arg(long)]
        password: Option<String>,
    },
}

fn init_tracing(verbose: bool) {
    let directive = if verbose {
        "hac_gateway=debug"
    } else {
        "hac_gateway=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(directive.parse().unwrap()),
        )
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut config = Config::from_env();
    match cli.command {
        Commands::Serve { port } => {
            if let Some(port) = port {
                config.port = port;
            }
            info!(
                "starting HAC gateway v{} against {}",
                env!("CARGO_PKG_VERSION"),
                config.base_url
            );
            rest::start(config).await
        }
        Commands::Fetch {
            view,
            username,
            password,
        } => {
            let password = match password.or_else(|| std::env::var("HACGW_PASSWORD").ok()) {
                Some(p) => p,
                None => anyhow::bail!("password required (--password or HACGW_PASSWORD)"),
            };
            let credentials = Credentials { username, password };
            let response = pipeline::authenticate_and_fetch(&config, &credentials, view).await?;
            println!("{}", serde_json::to_string_pretty(&response)?);
            Ok(())
        }
    }
}
