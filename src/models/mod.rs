use std::fmt::Display;

use serde::Deserialize;

use crate::error::AppError;

/// A seed song: one free-text query representing the song to match against.
///
/// Songs have no identity beyond their text. They exist only for the duration
/// of a run, either typed in by the user or derived from a playlist's item
/// titles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Song {
    pub query: String,
}

impl Song {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
        }
    }
}

impl Display for Song {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.query)
    }
}

/// A remote playlist matched by a search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Playlist {
    /// Opaque external identifier
    pub id: String,
    pub title: String,
}

/// A video found inside a remote playlist
///
/// The external id is the video's identity; titles are display-only and never
/// deduplicated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Video {
    /// Opaque external identifier
    pub id: String,
    pub title: String,
}

/// One entry of the final ranking
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedVideo {
    pub video_id: String,
    pub title: String,
    /// Number of distinct matched playlists this video appeared in
    pub rank: u32,
}

/// Outcome of one matching run
#[derive(Debug)]
pub struct MatchReport {
    /// Videos ordered by rank descending; equal ranks keep first-seen order
    pub ranking: Vec<RankedVideo>,
    /// One report per seed song, in input order
    pub songs: Vec<SongReport>,
}

/// Per-song outcome: a failed song is recorded here and never aborts the run
#[derive(Debug)]
pub struct SongReport {
    pub song: Song,
    pub outcome: SongOutcome,
}

#[derive(Debug)]
pub enum SongOutcome {
    Scanned {
        playlists_scanned: usize,
        videos_counted: usize,
    },
    Failed(AppError),
}

impl SongOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, SongOutcome::Failed(_))
    }
}

// ============================================================================
// YouTube Data API v3 Types
// ============================================================================

/// Response page from GET /search?type=playlist
#[derive(Debug, Clone, Deserialize)]
pub struct PlaylistSearchResponse {
    #[serde(default)]
    pub items: Vec<PlaylistSearchResult>,
}

/// One search result; the API nests the playlist id under `id.playlistId`
#[derive(Debug, Clone, Deserialize)]
pub struct PlaylistSearchResult {
    pub id: SearchResultId,
    pub snippet: SearchSnippet,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResultId {
    #[serde(default)]
    pub playlist_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchSnippet {
    pub title: String,
}

impl PlaylistSearchResult {
    /// Convert to a domain playlist; results without a playlist id are
    /// dropped rather than failing the whole page.
    pub fn into_playlist(self) -> Option<Playlist> {
        Some(Playlist {
            id: self.id.playlist_id?,
            title: self.snippet.title,
        })
    }
}

/// Response page from GET /playlistItems
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistItemPage {
    #[serde(default)]
    pub items: Vec<PlaylistItem>,
    #[serde(default)]
    pub next_page_token: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlaylistItem {
    pub snippet: PlaylistItemSnippet,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistItemSnippet {
    pub title: String,
    pub resource_id: ResourceId,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceId {
    #[serde(default)]
    pub video_id: Option<String>,
}

impl PlaylistItem {
    /// Convert to a domain video; items without a video id (deleted or
    /// region-blocked entries) are dropped.
    pub fn into_video(self) -> Option<Video> {
        Some(Video {
            id: self.snippet.resource_id.video_id?,
            title: self.snippet.title,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_song_display() {
        let song = Song::new("Daft Punk Around the World");
        assert_eq!(format!("{}", song), "Daft Punk Around the World");
    }

    #[test]
    fn test_search_result_into_playlist() {
        let json = r#"{
            "id": { "kind": "youtube#playlist", "playlistId": "PLabc123" },
            "snippet": { "title": "Best of French House" }
        }"#;

        let result: PlaylistSearchResult = serde_json::from_str(json).unwrap();
        let playlist = result.into_playlist().unwrap();
        assert_eq!(playlist.id, "PLabc123");
        assert_eq!(playlist.title, "Best of French House");
    }

    #[test]
    fn test_search_result_without_playlist_id_dropped() {
        let json = r#"{
            "id": { "kind": "youtube#channel", "channelId": "UCxyz" },
            "snippet": { "title": "Some Channel" }
        }"#;

        let result: PlaylistSearchResult = serde_json::from_str(json).unwrap();
        assert!(result.into_playlist().is_none());
    }

    #[test]
    fn test_playlist_item_page_deserialization() {
        let json = r#"{
            "nextPageToken": "CAUQAA",
            "items": [
                {
                    "snippet": {
                        "title": "Around the World",
                        "resourceId": { "kind": "youtube#video", "videoId": "dwDns8x3Jb4" }
                    }
                },
                {
                    "snippet": {
                        "title": "One More Time",
                        "resourceId": { "kind": "youtube#video", "videoId": "FGBhQbmPwH8" }
                    }
                }
            ]
        }"#;

        let page: PlaylistItemPage = serde_json::from_str(json).unwrap();
        assert_eq!(page.next_page_token.as_deref(), Some("CAUQAA"));
        assert_eq!(page.items.len(), 2);

        let video = page.items[0].clone().into_video().unwrap();
        assert_eq!(video.id, "dwDns8x3Jb4");
        assert_eq!(video.title, "Around the World");
    }

    #[test]
    fn test_playlist_item_without_video_id_dropped() {
        let json = r#"{
            "snippet": {
                "title": "Deleted video",
                "resourceId": { "kind": "youtube#video" }
            }
        }"#;

        let item: PlaylistItem = serde_json::from_str(json).unwrap();
        assert!(item.into_video().is_none());
    }

    #[test]
    fn test_last_page_has_no_token() {
        let page: PlaylistItemPage = serde_json::from_str(r#"{ "items": [] }"#).unwrap();
        assert!(page.next_page_token.is_none());
        assert!(page.items.is_empty());
    }

    #[test]
    fn test_song_outcome_failure() {
        let ok = SongOutcome::Scanned {
            playlists_scanned: 2,
            videos_counted: 40,
        };
        let failed = SongOutcome::Failed(AppError::ExternalApi {
            status: 403,
            body: "quotaExceeded".to_string(),
        });

        assert!(!ok.is_failure());
        assert!(failed.is_failure());
    }
}
