//! Command-line interface definitions for candd.

use clap::Parser;
use std::{net::SocketAddr, path::PathBuf};

/// Candidate registry HTTP service.
#[derive(Parser, Debug)]
#[command(name = "candd")]
#[command(about = "Serves an in-memory, name-keyed candidate registry over HTTP")]
pub struct Cli {
    /// Path to a TOML configuration file
    #[arg(short, long, env = "CANDD_CONFIG")]
    pub config: Option<PathBuf>,

    /// Address to listen on, overrides the configuration file and CANDD_BIND
    #[arg(short, long)]
    pub bind: Option<SocketAddr>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_flags() {
        let cli = Cli::try_parse_from(["candd", "--config", "candd.toml", "-b", "0.0.0.0:8080"])
            .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("candd.toml")));
        assert_eq!(cli.bind, Some("0.0.0.0:8080".parse().unwrap()));
    }

    #[test]
    fn rejects_bad_bind() {
        assert!(Cli::try_parse_from(["candd", "--bind", "localhost"]).is_err());
    }
}
