//! Service configuration.

use std::{
    net::{Ipv4Addr, SocketAddr, SocketAddrV4},
    path::Path,
};

use cand_registry::Candidate;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::prelude::*;

/// Environment variable overriding [`CandConfig::bind`].
pub const BIND_ENV: &str = "CANDD_BIND";

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_SEED_NAME: &str = "John Doe";
const DEFAULT_SEED_IMAGE_URL: &str = "http://example.com/johndoe.jpg";

/// Runtime configuration for the candidate service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CandConfig {
    /// Address the HTTP listener binds to.
    pub bind: SocketAddr,
    /// Candidates the registry starts with.
    pub seed: Vec<Candidate>,
}

impl Default for CandConfig {
    fn default() -> Self {
        Self {
            bind: SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::LOCALHOST, DEFAULT_PORT)),
            seed: vec![Candidate::new(DEFAULT_SEED_NAME, DEFAULT_SEED_IMAGE_URL)],
        }
    }
}

impl CandConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(file_path: &Path) -> Result<Self> {
        info!("Loading configuration from {}", file_path.display());
        let contents = std::fs::read_to_string(file_path)?;
        Self::from_toml(&contents)
    }

    /// Parse configuration from a TOML string. Absent keys keep their defaults.
    pub fn from_toml(value: &str) -> Result<Self> {
        Ok(toml::from_str(value)?)
    }

    /// Defaults, then `path` if given, then process environment overrides.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.with_env(|var| std::env::var(var).ok())
    }

    /// Applies environment overrides read through `lookup`.
    ///
    /// Taking the lookup as a parameter keeps this testable without touching
    /// the real process environment.
    pub fn with_env<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(BIND_ENV) {
            self.bind = value.parse().map_err(|_| Error::InvalidEnv {
                var: BIND_ENV,
                value: value.clone(),
            })?;
            debug!("{BIND_ENV} overrides bind address with {}", self.bind);
        }
        Ok(self)
    }
}
