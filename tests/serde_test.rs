//! Integration tests for JSON round-trip serialization of the REST types.
//!
//! Each test deserializes a realistic fixture, checks field values, then
//! re-serializes and deserializes again to confirm nothing is lost.

use pexels::*;
use serde::de::DeserializeOwned;
use serde::Serialize;

fn round_trip<T>(value: &T) -> T
where
    T: Serialize + DeserializeOwned,
{
    let serialized = serde_json::to_string(value).unwrap();
    serde_json::from_str(&serialized).unwrap()
}

// ---------------------------------------------------------------------------
// Photo
// ---------------------------------------------------------------------------

#[test]
fn test_photo_round_trip() {
    let photo: Photo = serde_json::from_str(include_str!("fixtures/photo.json")).unwrap();
    assert_eq!(photo.id, 2014422);
    assert_eq!(photo.width, 3024);
    assert_eq!(photo.photographer, "Joey Farina");
    assert_eq!(photo.photographer_url, "https://www.pexels.com/@joey");
    assert_eq!(photo.photographer_id, Some(680589));
    assert_eq!(photo.avg_color.as_deref(), Some("#978E82"));
    assert_eq!(photo.liked, Some(false));
    assert_eq!(
        photo.src.get(PhotoSize::Original),
        Some("https://images.pexels.com/photos/2014422/pexels-photo-2014422.jpeg")
    );
    assert_eq!(photo.src.get(PhotoSize::Square), None);
    assert_eq!(photo.src.iter().count(), 8);

    assert_eq!(round_trip(&photo), photo);
}

// ---------------------------------------------------------------------------
// SearchResult / CuratedResult
// ---------------------------------------------------------------------------

#[test]
fn test_search_result_legacy_total_key() {
    let json = r#"{
        "page": 1,
        "per_page": 15,
        "total_Results": 120,
        "photos": [{"id": 1, "width": 100, "height": 100}]
    }"#;

    let result: SearchResult = serde_json::from_str(json).unwrap();
    assert_eq!(result.page, 1);
    assert_eq!(result.per_page, 15);
    assert_eq!(result.total_results, Some(120));
    assert_eq!(result.photos.len(), 1);
    assert_eq!(result.photos[0].id, 1);
    assert!(result.is_within_page_size());

    let value = serde_json::to_value(&result).unwrap();
    assert_eq!(value["total_results"], 120);
    assert_eq!(round_trip(&result), result);
}

#[test]
fn test_curated_round_trip() {
    let curated: CuratedResult = serde_json::from_str(include_str!("fixtures/curated.json")).unwrap();
    assert_eq!(curated.page(), 2);
    assert_eq!(curated.per_page(), 2);
    assert_eq!(curated.total_results(), None);
    assert!(curated.has_next_page());
    assert_eq!(
        curated.prev_page(),
        Some("https://api.pexels.com/v1/curated/?page=1&per_page=2")
    );
    assert_eq!(curated.items().len(), 2);
    assert_eq!(curated.photos[1].photographer_id, None);
    assert!(curated.is_within_page_size());

    assert_eq!(round_trip(&curated), curated);
}

// ---------------------------------------------------------------------------
// Video
// ---------------------------------------------------------------------------

#[test]
fn test_video_round_trip() {
    let video: Video = serde_json::from_str(include_str!("fixtures/video.json")).unwrap();
    assert_eq!(video.id, 2499611);
    assert_eq!(video.url, "https://www.pexels.com/video/2499611/");
    assert!(video.full_res.is_absent());
    assert_eq!(video.duration, 22.0);
    assert_eq!(video.user.as_ref().map(|u| u.name.as_str()), Some("Joey Farina"));
    assert_eq!(video.video_files.len(), 3);
    assert_eq!(video.video_files[0].quality.as_deref(), Some("hd"));
    assert_eq!(video.video_files[0].fps, Some(23.976));
    assert_eq!(video.video_files[2].quality, None);
    assert_eq!(video.video_files[2].width, None);
    assert_eq!(video.video_pictures[1].nr, 1);
    assert_eq!(video.largest_file().map(|f| f.id), Some(125004));

    assert_eq!(round_trip(&video), video);
}

#[test]
fn test_popular_round_trip() {
    let popular: PopularVideos = serde_json::from_str(include_str!("fixtures/popular.json")).unwrap();
    assert_eq!(popular.page, 1);
    assert_eq!(popular.total_results, Some(8000));
    assert_eq!(popular.url.as_deref(), Some("https://www.pexels.com/videos/"));
    assert_eq!(popular.videos.len(), 1);

    let video = &popular.videos[0];
    assert_eq!(
        video.full_res,
        FullResolution::Url(
            "https://videos.pexels.com/video-files/1093662/1093662-uhd_3840_2160_30fps.mp4".into()
        )
    );

    assert_eq!(round_trip(&popular), popular);
}

#[test]
fn test_video_search_structured_full_res() {
    let json = r#"{
        "page": 1,
        "per_page": 5,
        "total_results": 1,
        "url": "https://www.pexels.com/search/videos/ocean/",
        "videos": [
            {
                "id": 3,
                "full_res": {"link": "https://videos.pexels.com/3.mp4", "width": 3840, "height": 2160},
                "duration": 12.5
            }
        ]
    }"#;

    let result: VideoSearchResult = serde_json::from_str(json).unwrap();
    assert_eq!(result.total_results, Some(1));
    assert_eq!(result.videos[0].full_res.url(), Some("https://videos.pexels.com/3.mp4"));
    assert!(result.videos[0].video_files.is_empty());

    assert_eq!(round_trip(&result), result);
}

// ---------------------------------------------------------------------------
// Mismatched shapes
// ---------------------------------------------------------------------------

#[test]
fn test_mismatched_shape_is_zero_valued() {
    let popular: PopularVideos = serde_json::from_str(r#"{"error": "nope"}"#).unwrap();
    assert_eq!(popular, PopularVideos::default());
    assert!(popular.is_empty());

    let photo: Photo = serde_json::from_str("{}").unwrap();
    assert_eq!(photo.id, 0);
    assert!(photo.src.iter().next().is_none());
}

#[test]
fn test_wrong_field_type_is_an_error() {
    assert!(serde_json::from_str::<SearchResult>(r#"{"page": "one"}"#).is_err());
}
