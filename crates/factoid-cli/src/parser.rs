//! Main CLI parser and top-level argument handling.

use clap::Parser;

use crate::commands::Commands;

/// Command-line interface definition for the factoid web application.
#[derive(Parser)]
#[command(name = "factoid")]
#[command(about = "Web-based pathway curation")]
#[command(version)]
pub struct Cli {
    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_parser_builds() {
        Cli::command().debug_assert();
    }

    #[test]
    fn serve_args_parse() {
        let cli = Cli::parse_from([
            "factoid",
            "--verbose",
            "serve",
            "--port",
            "9000",
            "--templates-dir",
            "/tmp/templates",
            "--demo",
        ]);

        assert!(cli.verbose);
        let Commands::Serve {
            port,
            templates_dir,
            demo,
            ..
        } = cli.command;
        assert_eq!(port, Some(9000));
        assert_eq!(templates_dir, Some("/tmp/templates".to_string()));
        assert!(demo);
    }
}
