use std::path::PathBuf;

use anyhow::Context;
use log::info;

use crate::requests::RequestClient;

/// Where the submission page comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    File(PathBuf),
    Url(String),
}

impl Source {
    pub fn from_arg(arg: &str) -> Self {
        if arg.starts_with("http://") || arg.starts_with("https://") {
            Source::Url(arg.to_string())
        } else {
            Source::File(PathBuf::from(arg))
        }
    }

    pub async fn load(&self, request_client: &RequestClient) -> anyhow::Result<Vec<u8>> {
        let bytes = match self {
            Source::File(path) => std::fs::read(path)
                .with_context(|| format!("failed to read {}", path.display()))?,
            Source::Url(url) => request_client.fetch_url_bytes(url).await?,
        };
        info!("Loaded {} bytes from {}", bytes.len(), self);
        Ok(bytes)
    }
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Source::File(path) => write!(f, "{}", path.display()),
            Source::Url(url) => write!(f, "{url}"),
        }
    }
}
