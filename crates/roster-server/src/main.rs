//! Roster Server
//!
//! Serves the Roster GraphQL API and its query explorer over HTTP.

use anyhow::{Context, Result};
use clap::Parser;
use roster_core::{build_schema, PersonStore, RosterContext, ServerConfig};
use roster_server::Server;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "roster-server")]
#[command(about = "Roster - GraphQL people directory")]
#[command(version)]
struct Cli {
    /// Config file (default: $ROSTER_CONFIG or ./roster.yaml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Address to listen on
    #[arg(short, long)]
    bind: Option<String>,

    /// GraphQL schema document
    #[arg(long)]
    schema: Option<PathBuf>,

    /// HTML page served at /
    #[arg(long)]
    explorer: Option<PathBuf>,

    /// Start with an empty store
    #[arg(long)]
    no_seed: bool,

    /// Print the SDL served by the resolvers and exit
    #[arg(long)]
    print_schema: bool,
}

impl Cli {
    fn into_config(self) -> Result<ServerConfig> {
        let mut config = match self.config.or_else(ServerConfig::discover) {
            Some(path) => ServerConfig::load_from(&path)
                .with_context(|| format!("Failed to load config {}", path.display()))?,
            None => ServerConfig::default(),
        };

        if let Some(bind) = self.bind {
            config.bind_addr = bind;
        }
        if let Some(schema) = self.schema {
            config.schema_path = schema;
        }
        if let Some(explorer) = self.explorer {
            config.explorer_page = explorer;
        }
        if self.no_seed {
            config.seed = false;
        }

        Ok(config)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.print_schema {
        let schema = build_schema(RosterContext::with_system_clock(Arc::new(PersonStore::new())));
        print!("{}", schema.sdl());
        return Ok(());
    }

    let config = cli.into_config()?;

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .with_target(false)
        .init();

    tracing::info!("Starting Roster server v{}", env!("CARGO_PKG_VERSION"));

    let server = Server::new(config)?;

    // Run async runtime
    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(server.run())
}
