//! CLI entry point - the composition root.
//!
//! This is the only place where the web adapter is wired together: parse
//! arguments, initialize logging, assemble the context, run the server.

use clap::Parser;

use factoid_axum::{ServerConfig, bootstrap, serve};
use factoid_cli::{Cli, Commands};
use factoid_core::PathwayDocument;

fn init_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let default_directive = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    match cli.command {
        Commands::Serve {
            port,
            templates_dir,
            static_dir,
            allow_origins,
            demo,
        } => {
            let mut config = ServerConfig::with_defaults();
            if let Some(port) = port {
                config.port = port;
            }
            if let Some(dir) = templates_dir {
                config = config.with_templates_dir(dir);
            }
            if let Some(dir) = static_dir {
                config = config.with_static_dir(dir);
            }
            if !allow_origins.is_empty() {
                config = config.with_allowed_origins(allow_origins);
            }

            let ctx = bootstrap(&config)?;

            if demo {
                tracing::info!("seeding the store with the example pathway");
                ctx.store.replace(PathwayDocument::example()).await;
            }

            serve(config, ctx).await
        }
    }
}
