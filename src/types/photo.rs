use std::fmt;

use serde::{Deserialize, Serialize};

use super::page::impl_envelope;

/// A single photo.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Photo {
    pub id: u64,
    pub width: u32,
    pub height: u32,
    /// Canonical page on pexels.com.
    pub url: String,
    pub photographer: String,
    pub photographer_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photographer_id: Option<u64>,
    /// Average color as a hex string, e.g. `#978E82`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_color: Option<String>,
    pub src: PhotoSource,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub liked: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
}

/// Image URLs for each size variant of a photo.
///
/// Older payloads used capitalized keys (and a whitespace-padded `Tiny`);
/// those are accepted on input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhotoSource {
    #[serde(alias = "Original")]
    pub original: String,
    #[serde(alias = "Large")]
    pub large: String,
    #[serde(alias = "Large2x")]
    pub large2x: String,
    #[serde(alias = "Medium")]
    pub medium: String,
    #[serde(alias = "Small")]
    pub small: String,
    #[serde(alias = "Portrait", alias = "Potrait")]
    pub portrait: String,
    #[serde(alias = "Square")]
    pub square: String,
    #[serde(alias = "Landscape")]
    pub landscape: String,
    #[serde(alias = "Tiny", alias = "Tiny            ")]
    pub tiny: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhotoSize {
    Original,
    Large,
    Large2x,
    Medium,
    Small,
    Portrait,
    Square,
    Landscape,
    Tiny,
}

impl PhotoSize {
    pub const ALL: [PhotoSize; 9] = [
        PhotoSize::Original,
        PhotoSize::Large,
        PhotoSize::Large2x,
        PhotoSize::Medium,
        PhotoSize::Small,
        PhotoSize::Portrait,
        PhotoSize::Square,
        PhotoSize::Landscape,
        PhotoSize::Tiny,
    ];
}

impl fmt::Display for PhotoSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhotoSize::Original => write!(f, "original"),
            PhotoSize::Large => write!(f, "large"),
            PhotoSize::Large2x => write!(f, "large2x"),
            PhotoSize::Medium => write!(f, "medium"),
            PhotoSize::Small => write!(f, "small"),
            PhotoSize::Portrait => write!(f, "portrait"),
            PhotoSize::Square => write!(f, "square"),
            PhotoSize::Landscape => write!(f, "landscape"),
            PhotoSize::Tiny => write!(f, "tiny"),
        }
    }
}

impl PhotoSource {
    /// URL for the given size, or `None` if the service did not supply one.
    pub fn get(&self, size: PhotoSize) -> Option<&str> {
        let url = match size {
            PhotoSize::Original => &self.original,
            PhotoSize::Large => &self.large,
            PhotoSize::Large2x => &self.large2x,
            PhotoSize::Medium => &self.medium,
            PhotoSize::Small => &self.small,
            PhotoSize::Portrait => &self.portrait,
            PhotoSize::Square => &self.square,
            PhotoSize::Landscape => &self.landscape,
            PhotoSize::Tiny => &self.tiny,
        };
        (!url.is_empty()).then_some(url.as_str())
    }

    /// All non-empty size variants in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (PhotoSize, &str)> {
        PhotoSize::ALL
            .into_iter()
            .filter_map(move |size| self.get(size).map(|url| (size, url)))
    }
}

/// Result of `GET /search`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchResult {
    pub page: u32,
    pub per_page: u32,
    #[serde(alias = "total_Results", skip_serializing_if = "Option::is_none")]
    pub total_results: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_page: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev_page: Option<String>,
    pub photos: Vec<Photo>,
}

/// Result of `GET /curated`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CuratedResult {
    pub page: u32,
    pub per_page: u32,
    #[serde(alias = "total_Results", skip_serializing_if = "Option::is_none")]
    pub total_results: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_page: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev_page: Option<String>,
    pub photos: Vec<Photo>,
}

impl_envelope!(SearchResult, Photo, photos);
impl_envelope!(CuratedResult, Photo, photos);
