//! CLI argument parsing with clap

use camino::Utf8PathBuf;
use clap::{Args, Parser, Subcommand};

/// lineage - find the image a server group ran before its latest deployment
#[derive(Parser, Debug)]
#[command(name = "lineage")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to config file (default: ~/.lineage/config.yaml)
    #[arg(short, long, global = true)]
    pub config: Option<Utf8PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve the previous image of a server group
    Resolve(ResolveArgs),

    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommands),
}

#[derive(Args, Debug)]
pub struct ResolveArgs {
    /// Server group name (e.g. myapp-v003)
    pub server_group: String,

    /// Cloud provider
    #[arg(long, default_value = "aws")]
    pub cloud_provider: String,

    /// Account (credentials) the server group lives in
    #[arg(long, visible_alias = "credentials")]
    pub account: String,

    /// Region of the server group
    #[arg(long)]
    pub region: String,

    /// Override the tagging service base URL
    #[arg(long)]
    pub clouddriver_url: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show the effective configuration
    Show,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_resolve() {
        let cli = Cli::try_parse_from([
            "lineage",
            "resolve",
            "myapp-v003",
            "--credentials",
            "prod",
            "--region",
            "us-east-1",
            "--json",
        ])
        .unwrap();

        match cli.command {
            Commands::Resolve(args) => {
                assert_eq!(args.server_group, "myapp-v003");
                assert_eq!(args.cloud_provider, "aws");
                assert_eq!(args.account, "prod");
                assert_eq!(args.region, "us-east-1");
                assert!(args.json);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_resolve_requires_region() {
        let result = Cli::try_parse_from(["lineage", "resolve", "myapp-v003", "--account", "prod"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_global_flags() {
        let cli =
            Cli::try_parse_from(["lineage", "-vv", "config", "show", "--config", "/tmp/l.yaml"])
                .unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.config.as_deref().map(|p| p.as_str()), Some("/tmp/l.yaml"));
    }
}
