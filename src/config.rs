//! Runtime configuration for the terminal game.
//!
//! Values come from the environment first and can be overridden on the command line:
//!
//! | Variable | Flag | Meaning |
//! |----------|------|---------|
//! | `WAREHOUSE_SEED` | `--seed <s>` | level seed; a random one is drawn when unset |
//! | `WAREHOUSE_LOG_PATH` | `--log <path>` | write logs to this file; no logging when unset |
//! | `WAREHOUSE_LOG_LEVEL` | `--log-level <lvl>` | `off` to `trace`, default `info` |

use std::path::PathBuf;

use anyhow::{anyhow, Result};
use log::LevelFilter;
use rand::Rng;

/// Range new random seeds are drawn from.
pub const RANDOM_SEED_RANGE: std::ops::Range<u32> = 1111..999_999;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayConfig {
    pub seed: Option<String>,
    pub log_path: Option<PathBuf>,
    pub log_level: LevelFilter,
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            seed: None,
            log_path: None,
            log_level: LevelFilter::Info,
        }
    }
}

impl PlayConfig {
    /// Create from `WAREHOUSE_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Create from an arbitrary variable lookup. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |name: &str| {
            lookup(name)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        Self {
            seed: var("WAREHOUSE_SEED"),
            log_path: var("WAREHOUSE_LOG_PATH").map(PathBuf::from),
            log_level: var("WAREHOUSE_LOG_LEVEL")
                .and_then(|s| s.parse().ok())
                .unwrap_or(LevelFilter::Info),
        }
    }

    /// Apply command line flags on top of `self`.
    pub fn parse_args(mut self, args: &[String]) -> Result<Self> {
        let mut args = args.iter();
        while let Some(arg) = args.next() {
            let mut value = || {
                args.next()
                    .ok_or_else(|| anyhow!("missing value for {}", arg))
            };
            match arg.as_str() {
                "--seed" => self.seed = Some(value()?.clone()),
                "--log" => self.log_path = Some(PathBuf::from(value()?)),
                "--log-level" => {
                    let v = value()?;
                    self.log_level = v
                        .parse()
                        .map_err(|_| anyhow!("invalid --log-level value: {}", v))?;
                }
                other => return Err(anyhow!("unknown argument: {}", other)),
            }
        }
        Ok(self)
    }

    /// The configured seed, or a fresh random one.
    pub fn seed_or_random(&self) -> String {
        self.seed.clone().unwrap_or_else(random_seed)
    }
}

/// Draw a new numeric seed.
pub fn random_seed() -> String {
    rand::thread_rng().gen_range(RANDOM_SEED_RANGE).to_string()
}
