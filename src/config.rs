use std::path::PathBuf;

use anyhow::Context;
use serde::{Deserialize, de::DeserializeOwned};

pub const DEFAULT_ROOT: &str = "cfjail";
pub const DEFAULT_SUBMISSION_URL: &str =
    "https://codeforces.com/contest/1706/submission/165909579";

/// The env vars read for scraping. All of them are optional.
#[derive(Debug, Default, Deserialize)]
pub struct ScrapingEnv {
    cfjail_root: Option<PathBuf>,
    submission_url: Option<String>,
    user_agent: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrapingConfig {
    pub root: PathBuf,
    pub submission_url: String,
    pub user_agent: String,
}

impl ScrapingConfig {
    pub fn new() -> anyhow::Result<Self> {
        let scraping_env = ScrapingEnv::load_from_env()?;
        Ok(Self::from_env(scraping_env))
    }

    pub fn from_env(scraping_env: ScrapingEnv) -> Self {
        Self {
            root: scraping_env
                .cfjail_root
                .unwrap_or_else(|| PathBuf::from(DEFAULT_ROOT)),
            submission_url: scraping_env
                .submission_url
                .unwrap_or_else(|| DEFAULT_SUBMISSION_URL.to_string()),
            user_agent: scraping_env
                .user_agent
                .unwrap_or_else(|| format!("cfjail/{}", env!("CARGO_PKG_VERSION"))),
        }
    }
}

// Extension trait.
pub trait LoadFromEnv: DeserializeOwned {
    fn load_from_env() -> anyhow::Result<Self> {
        // Don't throw an error if .env file doesn't exist.
        let _ = dotenv::dotenv();
        let config =
            envy::from_env::<Self>().context("failed to load env variables into config struct")?;
        Ok(config)
    }
}

impl<T: DeserializeOwned> LoadFromEnv for T {}
