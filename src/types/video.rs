use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::page::impl_envelope;

/// A single video.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Video {
    pub id: u64,
    pub width: u32,
    pub height: u32,
    /// Canonical page on pexels.com.
    pub url: String,
    /// Preview still.
    pub image: String,
    pub full_res: FullResolution,
    /// Length in seconds.
    pub duration: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<VideoUser>,
    pub video_files: Vec<VideoFile>,
    pub video_pictures: Vec<VideoPicture>,
}

/// The loosely specified `full_res` field.
///
/// The service has returned `null`, a bare URL and an object at different
/// times, so anything else is kept as raw JSON rather than failing the decode.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FullResolution {
    #[default]
    Absent,
    Url(String),
    Object(Map<String, Value>),
    Other(Value),
}

impl FullResolution {
    pub fn is_absent(&self) -> bool {
        matches!(self, FullResolution::Absent)
    }

    /// The URL, whether given directly or under a `link`/`url` key.
    pub fn url(&self) -> Option<&str> {
        match self {
            FullResolution::Url(url) => Some(url),
            FullResolution::Object(map) => map
                .get("link")
                .or_else(|| map.get("url"))
                .and_then(Value::as_str),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VideoUser {
    pub id: u64,
    pub name: String,
    pub url: String,
}

/// One encoding of a video.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VideoFile {
    pub id: u64,
    /// Quality tier: `hd`, `sd`, `uhd`, or `None` for adaptive streams.
    pub quality: Option<String>,
    /// Container MIME type, e.g. `video/mp4`.
    pub file_type: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fps: Option<f64>,
    pub link: String,
}

/// A thumbnail taken from a video.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VideoPicture {
    pub id: u64,
    pub picture: String,
    /// Position of the thumbnail within the video's picture list.
    #[serde(alias = "number")]
    pub nr: u32,
}

impl Video {
    /// The file with the largest frame width.
    pub fn largest_file(&self) -> Option<&VideoFile> {
        self.video_files
            .iter()
            .max_by_key(|f| f.width.unwrap_or(0))
    }

    /// Files of the given quality tier, in the order the service listed them.
    pub fn files_with_quality<'a>(
        &'a self,
        quality: &'a str,
    ) -> impl Iterator<Item = &'a VideoFile> + 'a {
        self.video_files
            .iter()
            .filter(move |f| f.quality.as_deref() == Some(quality))
    }
}

/// Result of `GET /videos/search`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VideoSearchResult {
    pub page: u32,
    pub per_page: u32,
    #[serde(alias = "total_Results", skip_serializing_if = "Option::is_none")]
    pub total_results: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_page: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev_page: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub videos: Vec<Video>,
}

/// Result of `GET /videos/popular`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PopularVideos {
    pub page: u32,
    pub per_page: u32,
    #[serde(alias = "total_Results", skip_serializing_if = "Option::is_none")]
    pub total_results: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_page: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev_page: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub videos: Vec<Video>,
}

impl_envelope!(VideoSearchResult, Video, videos);
impl_envelope!(PopularVideos, Video, videos);
