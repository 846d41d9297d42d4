use std::time::Duration;

/// Base URL of the photo API.
pub const PHOTO_API_URL: &str = "https://api.pexels.com/v1";
/// Base URL of the video API.
pub const VIDEO_API_URL: &str = "https://api.pexels.com/videos";

/// Configuration for the Pexels client.
#[derive(Debug, Clone)]
pub struct PexelsConfig {
    /// API key, sent verbatim in the `Authorization` header.
    pub api_key: String,
    /// Base URL for photo endpoints (e.g. `https://api.pexels.com/v1`).
    pub photo_api_url: String,
    /// Base URL for video endpoints (e.g. `https://api.pexels.com/videos`).
    pub video_api_url: String,
    /// Request timeout; the transport default applies if not set.
    pub timeout: Option<Duration>,
}

impl PexelsConfig {
    /// Config pointing at the public Pexels API.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            photo_api_url: PHOTO_API_URL.to_string(),
            video_api_url: VIDEO_API_URL.to_string(),
            timeout: None,
        }
    }

    /// Point both APIs at another host, e.g. a local mock server.
    ///
    /// Photo endpoints live under `{base}/v1` and video endpoints under
    /// `{base}/videos`, mirroring the public layout.
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        let base = base_url.trim_end_matches('/');
        self.photo_api_url = format!("{base}/v1");
        self.video_api_url = format!("{base}/videos");
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}
