use anyhow::Context;
use log::debug;
use reqwest::{Client, ClientBuilder, Response, header};

pub struct RequestClient {
    client: Client,
}

impl RequestClient {
    pub fn new(user_agent: &str) -> anyhow::Result<Self> {
        let client = ClientBuilder::new()
            .default_headers(Self::headers(user_agent)?)
            .build()?;
        Ok(Self { client })
    }

    fn headers(user_agent: &str) -> anyhow::Result<header::HeaderMap> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::USER_AGENT,
            header::HeaderValue::from_str(user_agent).context("invalid user agent")?,
        );
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("text/html,application/xhtml+xml"),
        );
        Ok(headers)
    }

    /// Single GET; any non-2xx status is an error.
    pub async fn fetch_url_response(&self, url: &str) -> anyhow::Result<Response> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .with_context(|| format!("request to {url} failed"))?;
        debug!("{url} answered {}", response.status());
        let response = response
            .error_for_status()
            .with_context(|| format!("{url} returned an error status"))?;
        Ok(response)
    }

    pub async fn fetch_url_bytes(&self, url: &str) -> anyhow::Result<Vec<u8>> {
        let response = self.fetch_url_response(url).await?;
        let body = response
            .bytes()
            .await
            .with_context(|| format!("failed to read body of {url}"))?;
        Ok(body.to_vec())
    }
}
