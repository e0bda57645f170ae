//! Subcommand definitions.

use clap::Subcommand;

/// Top-level subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Start the web server
    Serve {
        /// Port for the HTTP server
        #[arg(long)]
        port: Option<u16>,

        /// Directory view templates are loaded from
        #[arg(long = "templates-dir")]
        templates_dir: Option<String>,

        /// Directory of static assets to serve
        #[arg(long = "static-dir")]
        static_dir: Option<String>,

        /// Comma-separated origin allow-list (allows all when omitted)
        #[arg(long = "allow-origins", value_delimiter = ',')]
        allow_origins: Vec<String>,

        /// Seed the store with the example pathway
        #[arg(long)]
        demo: bool,
    },
}
