use rand::Rng;

use crate::config::PexelsConfig;
use crate::error::Result;
use crate::rate_limit::RateLimitSnapshot;
use crate::rest::PexelsHttpClient;
use crate::types::*;

/// Highest page drawn by the random-item helpers.
///
/// Assumes every listing has at least this many single-item pages; draws past
/// the real end come back empty.
pub const MAX_RANDOM_PAGE: u32 = 1000;

/// Main Pexels client.
///
/// Clones share the underlying connection pool and rate-limit state.
#[derive(Debug, Clone)]
pub struct Pexels {
    /// HTTP client.
    pub http_client: PexelsHttpClient,
}

impl Pexels {
    /// Create a client from an explicit configuration.
    pub fn new(config: PexelsConfig) -> Result<Self> {
        Ok(Self {
            http_client: PexelsHttpClient::new(&config)?,
        })
    }

    /// Requests left in the current rate-limit period, as last reported.
    pub fn remaining_requests(&self) -> Option<u32> {
        self.http_client.rate_limit().remaining()
    }

    /// All rate-limit values last reported by the service.
    pub fn rate_limit(&self) -> RateLimitSnapshot {
        self.http_client.rate_limit().snapshot()
    }

    // --- REST delegates ---

    /// Search photos matching `query`.
    pub async fn search_photos(
        &self,
        query: &str,
        per_page: u32,
        page: u32,
    ) -> Result<SearchResult> {
        self.http_client.search_photos(query, per_page, page).await
    }

    /// Get a page of curated photos.
    pub async fn curated_photos(&self, per_page: u32, page: u32) -> Result<CuratedResult> {
        self.http_client.curated_photos(per_page, page).await
    }

    /// Get a photo by ID.
    pub async fn get_photo(&self, id: u64) -> Result<Photo> {
        self.http_client.get_photo(id).await
    }

    /// Search videos matching `query`.
    pub async fn search_videos(
        &self,
        query: &str,
        per_page: u32,
        page: u32,
    ) -> Result<VideoSearchResult> {
        self.http_client.search_videos(query, per_page, page).await
    }

    /// Get a page of popular videos.
    pub async fn popular_videos(&self, per_page: u32, page: u32) -> Result<PopularVideos> {
        self.http_client.popular_videos(per_page, page).await
    }

    /// Get a video by ID.
    pub async fn get_video(&self, id: u64) -> Result<Video> {
        self.http_client.get_video(id).await
    }

    // --- Derived ---

    /// Fetch one curated photo from a random page.
    ///
    /// Returns `Ok(None)` when the drawn page does not hold exactly one photo.
    pub async fn random_photo(&self) -> Result<Option<Photo>> {
        let page = random_page();
        tracing::debug!(page, "fetching random curated photo");
        let photo = self.curated_photos(1, page).await?.into_single();
        if photo.is_none() {
            tracing::debug!(page, "random curated page had no single photo");
        }
        Ok(photo)
    }

    /// Fetch one popular video from a random page.
    ///
    /// Returns `Ok(None)` when the drawn page does not hold exactly one video.
    pub async fn random_video(&self) -> Result<Option<Video>> {
        let page = random_page();
        tracing::debug!(page, "fetching random popular video");
        let video = self.popular_videos(1, page).await?.into_single();
        if video.is_none() {
            tracing::debug!(page, "random popular page had no single video");
        }
        Ok(video)
    }
}

fn random_page() -> u32 {
    rand::thread_rng().gen_range(0..=MAX_RANDOM_PAGE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_page_in_range() {
        for _ in 0..500 {
            assert!(random_page() <= MAX_RANDOM_PAGE);
        }
    }

    #[test]
    fn test_new_client_has_no_quota_yet() {
        let client = Pexels::new(PexelsConfig::new("key")).unwrap();
        assert_eq!(client.remaining_requests(), None);
        assert_eq!(client.rate_limit(), RateLimitSnapshot::default());
    }
}
