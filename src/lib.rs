//! Async client for the Pexels photo and video API.
//!
//! ```no_run
//! # async fn run() -> pexels::Result<()> {
//! use pexels::{Pexels, PexelsConfig};
//!
//! let client = Pexels::new(PexelsConfig::new("your-api-key"))?;
//! let result = client.search_photos("waves", 15, 1).await?;
//! for photo in &result.photos {
//!     println!("{} by {}", photo.url, photo.photographer);
//! }
//! println!("requests left: {:?}", client.remaining_requests());
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod rate_limit;
pub mod rest;
pub mod types;

// Client + config
pub use client::{Pexels, MAX_RANDOM_PAGE};
pub use config::PexelsConfig;
pub use error::{PexelsError, Result};

// REST client
pub use rest::PexelsHttpClient;

// Rate limiting
pub use rate_limit::{RateLimit, RateLimitSnapshot};

// Photos
pub use types::{CuratedResult, Photo, PhotoSize, PhotoSource, SearchResult};

// Videos
pub use types::{
    FullResolution, PopularVideos, Video, VideoFile, VideoPicture, VideoSearchResult, VideoUser,
};

// Pagination
pub use types::Envelope;
