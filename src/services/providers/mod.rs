/// Playlist data provider abstraction
///
/// The matcher only needs two read-only remote operations: searching for
/// playlists by free text and listing a playlist's items. Keeping them behind
/// a trait keeps the matching logic off the network and lets tests substitute
/// a mock.
use crate::{
    error::AppResult,
    models::{Playlist, Video},
};

pub mod youtube;

/// Trait for playlist search/listing providers
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait PlaylistProvider: Send + Sync {
    /// Search for playlists matching a free-text query
    ///
    /// Returns at most `max_results` playlists, in whatever order the remote
    /// service ranks them.
    async fn search_playlists(&self, query: &str, max_results: u8) -> AppResult<Vec<Playlist>>;

    /// List every item of a playlist
    ///
    /// Follows pagination until the playlist is exhausted and returns the
    /// fully materialized sequence in playlist order.
    async fn list_playlist_items(&self, playlist_id: &str) -> AppResult<Vec<Video>>;
}
