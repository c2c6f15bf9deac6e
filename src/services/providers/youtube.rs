/// YouTube Data API v3 provider
///
/// Two read-only endpoints are used:
/// 1. Playlist search: /search?type=playlist → playlist ids + titles
/// 2. Item listing: /playlistItems → video ids + titles, paginated via
///    `pageToken`
///
/// The API key rides along as the `key` query parameter on every request.
use reqwest::Client as HttpClient;

use crate::{
    error::{AppError, AppResult},
    models::{Playlist, PlaylistItemPage, PlaylistSearchResponse, Video},
    services::providers::PlaylistProvider,
};

/// Items fetched per page when listing a playlist
const LIST_PAGE_SIZE: u8 = 50;

pub struct YouTubeProvider {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
}

impl YouTubeProvider {
    pub fn new(api_key: String, api_url: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_key,
            api_url,
        }
    }
}

#[async_trait::async_trait]
impl PlaylistProvider for YouTubeProvider {
    async fn search_playlists(&self, query: &str, max_results: u8) -> AppResult<Vec<Playlist>> {
        if query.trim().is_empty() {
            return Err(AppError::InvalidInput(
                "Search query cannot be empty".to_string(),
            ));
        }

        let url = format!("{}/search", self.api_url);

        let response = self
            .http_client
            .get(&url)
            .query(&[
                ("part", "id,snippet"),
                ("type", "playlist"),
                ("q", query),
                ("maxResults", &max_results.to_string()),
                ("key", self.api_key.as_str()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi {
                status: status.as_u16(),
                body,
            });
        }

        let page: PlaylistSearchResponse = response.json().await?;
        let playlists: Vec<Playlist> = page
            .items
            .into_iter()
            .filter_map(|result| result.into_playlist())
            .collect();

        tracing::info!(
            query = %query,
            results = playlists.len(),
            provider = "youtube",
            "Playlist search completed"
        );

        Ok(playlists)
    }

    async fn list_playlist_items(&self, playlist_id: &str) -> AppResult<Vec<Video>> {
        let url = format!("{}/playlistItems", self.api_url);
        let page_size = LIST_PAGE_SIZE.to_string();

        let mut videos = Vec::new();
        let mut page_token: Option<String> = None;

        loop {
            let mut request = self.http_client.get(&url).query(&[
                ("part", "snippet"),
                ("playlistId", playlist_id),
                ("maxResults", page_size.as_str()),
                ("key", self.api_key.as_str()),
            ]);

            if let Some(token) = &page_token {
                request = request.query(&[("pageToken", token.as_str())]);
            }

            let response = request.send().await?;

            if !response.status().is_success() {
                let status = response.status();
                let body = response.text().await.unwrap_or_default();
                return Err(AppError::ExternalApi {
                    status: status.as_u16(),
                    body,
                });
            }

            let page: PlaylistItemPage = response.json().await?;
            videos.extend(page.items.into_iter().filter_map(|item| item.into_video()));

            match page.next_page_token {
                Some(token) => page_token = Some(token),
                None => break,
            }
        }

        tracing::debug!(
            playlist_id = %playlist_id,
            videos = videos.len(),
            provider = "youtube",
            "Playlist items fetched"
        );

        Ok(videos)
    }
}
