use crate::error::Result;
use crate::rest::PexelsHttpClient;
use crate::types::*;

impl PexelsHttpClient {
    // --- Photos ---

    /// GET /v1/search?query=&per_page=&page= - Search photos.
    pub async fn search_photos(
        &self,
        query: &str,
        per_page: u32,
        page: u32,
    ) -> Result<SearchResult> {
        let per_page = per_page.to_string();
        let page = page.to_string();
        let url = self.photo_url(
            "/search",
            &[
                ("query", query),
                ("per_page", per_page.as_str()),
                ("page", page.as_str()),
            ],
        );
        self.get(url).await
    }

    /// GET /v1/curated?per_page=&page= - Photos curated by the Pexels team.
    pub async fn curated_photos(&self, per_page: u32, page: u32) -> Result<CuratedResult> {
        let per_page = per_page.to_string();
        let page = page.to_string();
        let url = self.photo_url(
            "/curated",
            &[("per_page", per_page.as_str()), ("page", page.as_str())],
        );
        self.get(url).await
    }

    /// GET /v1/photos/{id} - A single photo.
    pub async fn get_photo(&self, id: u64) -> Result<Photo> {
        let url = self.photo_url(&format!("/photos/{id}"), &[]);
        self.get(url).await
    }

    // --- Videos ---

    /// GET /videos/search?query=&per_page=&page= - Search videos.
    pub async fn search_videos(
        &self,
        query: &str,
        per_page: u32,
        page: u32,
    ) -> Result<VideoSearchResult> {
        let per_page = per_page.to_string();
        let page = page.to_string();
        let url = self.video_url(
            "/search",
            &[
                ("query", query),
                ("per_page", per_page.as_str()),
                ("page", page.as_str()),
            ],
        );
        self.get(url).await
    }

    /// GET /videos/popular?per_page=&page= - Currently popular videos.
    pub async fn popular_videos(&self, per_page: u32, page: u32) -> Result<PopularVideos> {
        let per_page = per_page.to_string();
        let page = page.to_string();
        let url = self.video_url(
            "/popular",
            &[("per_page", per_page.as_str()), ("page", page.as_str())],
        );
        self.get(url).await
    }

    /// GET /videos/videos/{id} - A single video.
    pub async fn get_video(&self, id: u64) -> Result<Video> {
        let url = self.video_url(&format!("/videos/{id}"), &[]);
        self.get(url).await
    }
}
