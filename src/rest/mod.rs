pub mod endpoints;

use std::sync::Arc;

use reqwest::{Client, Method, Response};
use serde::de::DeserializeOwned;
use url::Url;

use crate::config::PexelsConfig;
use crate::error::{PexelsError, Result};
use crate::rate_limit::RateLimit;

/// HTTP client wrapper for the Pexels REST API.
///
/// Every request carries the API key and feeds the response's rate-limit
/// headers into the shared [`RateLimit`].
#[derive(Debug, Clone)]
pub struct PexelsHttpClient {
    client: Client,
    api_key: String,
    photo_api_url: Url,
    video_api_url: Url,
    rate_limit: Arc<RateLimit>,
}

impl PexelsHttpClient {
    pub fn new(config: &PexelsConfig) -> Result<Self> {
        if config.api_key.trim().is_empty() {
            return Err(PexelsError::Validation("API key must not be empty".into()));
        }

        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            api_key: config.api_key.clone(),
            photo_api_url: parse_base_url(&config.photo_api_url)?,
            video_api_url: parse_base_url(&config.video_api_url)?,
            rate_limit: Arc::new(RateLimit::new()),
        })
    }

    /// Send `method url` with the API key attached.
    ///
    /// The status code is not checked here; rate-limit headers are recorded
    /// for every response that arrives.
    pub async fn execute(&self, method: Method, url: Url) -> Result<Response> {
        tracing::debug!(%method, %url, "pexels request");

        let resp = self
            .client
            .request(method, url)
            .header(reqwest::header::AUTHORIZATION, &self.api_key)
            .send()
            .await?;

        self.rate_limit.update(resp.headers());
        tracing::debug!(
            status = resp.status().as_u16(),
            remaining = ?self.rate_limit.remaining(),
            "pexels response"
        );

        Ok(resp)
    }

    /// GET a JSON resource.
    pub async fn get<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        let resp = self.execute(Method::GET, url).await?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(PexelsError::Http {
                status,
                message: body,
            });
        }

        let body = resp.bytes().await?;
        serde_json::from_slice(&body).map_err(PexelsError::Json)
    }

    /// Photo API URL for `path` with the given query pairs.
    pub fn photo_url(&self, path: &str, query: &[(&str, &str)]) -> Url {
        join(&self.photo_api_url, path, query)
    }

    /// Video API URL for `path` with the given query pairs.
    pub fn video_url(&self, path: &str, query: &[(&str, &str)]) -> Url {
        join(&self.video_api_url, path, query)
    }

    /// Rate-limit state shared with every clone of this client.
    pub fn rate_limit(&self) -> &RateLimit {
        &self.rate_limit
    }

    pub fn photo_api_url(&self) -> &Url {
        &self.photo_api_url
    }

    pub fn video_api_url(&self) -> &Url {
        &self.video_api_url
    }
}

fn parse_base_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw.trim_end_matches('/'))?;
    if url.cannot_be_a_base() {
        return Err(PexelsError::Validation(format!(
            "not a usable base URL: {raw}"
        )));
    }
    Ok(url)
}

/// Append `path` segments to `base` and set the query string.
fn join(base: &Url, path: &str, query: &[(&str, &str)]) -> Url {
    let mut url = base.clone();
    if let Ok(mut segments) = url.path_segments_mut() {
        segments
            .pop_if_empty()
            .extend(path.split('/').filter(|s| !s.is_empty()));
    }
    if !query.is_empty() {
        url.query_pairs_mut().extend_pairs(query);
    }
    url
}
