//! file: config.rs
//! author: Jacob Xie
//! date: 2025/12/20 11:14:09 Saturday
//! brief: command line and environment settings

use std::time::Duration;

use clap::Parser;

use crate::error::ConfigError;

pub const DEFAULT_API_BASE: &str = "https://api.spoonacular.com";
pub const DEFAULT_REVEAL_MS: u64 = 1250;
const MAX_REVEAL_MS: u64 = 10_000;

#[derive(Debug, Parser)]
#[command(name = "calorie-duel")]
#[command(about = "Guess whether the next recipe has more or fewer calories")]
pub struct Args {
    /// Spoonacular API key
    #[arg(long, env = "SPOONACULAR_API_KEY", hide_env_values = true, default_value = "")]
    pub api_key: String,

    /// Base URL of the recipe API
    #[arg(long, env = "SPOONACULAR_API_BASE", default_value = DEFAULT_API_BASE)]
    pub api_base: String,

    /// How long a correct answer stays on screen before the next round, in milliseconds
    #[arg(long, default_value_t = DEFAULT_REVEAL_MS)]
    pub reveal_ms: u64,

    /// HTTP request timeout in seconds
    #[arg(long, default_value_t = 10)]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub api_key: String,
    pub api_base: String,
    pub reveal_delay: Duration,
    pub request_timeout: Duration,
}

impl Config {
    /// Reads `.env` if present, then the command line.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_args(Args::parse())
    }

    pub fn from_args(args: Args) -> Result<Self, ConfigError> {
        let api_key = args.api_key.trim().to_owned();
        if api_key.is_empty() {
            return Err(ConfigError::MissingApiKey);
        }

        let api_base = args.api_base.trim().trim_end_matches('/').to_owned();
        if !(api_base.starts_with("https://") || api_base.starts_with("http://")) {
            return Err(ConfigError::ApiBase {
                url: args.api_base,
                reason: "expected an http:// or https:// URL",
            });
        }

        if args.reveal_ms > MAX_REVEAL_MS {
            return Err(ConfigError::RevealDelay {
                got: args.reveal_ms,
                max: MAX_REVEAL_MS,
            });
        }
        if args.timeout_secs == 0 {
            return Err(ConfigError::Timeout);
        }

        Ok(Self {
            api_key,
            api_base,
            reveal_delay: Duration::from_millis(args.reveal_ms),
            request_timeout: Duration::from_secs(args.timeout_secs),
        })
    }
}
