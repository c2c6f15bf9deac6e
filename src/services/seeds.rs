use crate::{
    error::{AppError, AppResult},
    models::Song,
    services::providers::PlaylistProvider,
};

/// Resolve the seed song list for a run
///
/// An explicit, non-empty song list is used verbatim and the playlist
/// fallback is never consulted, even when a playlist id was also supplied.
/// Without explicit songs, the given playlist's item titles become the seeds.
/// The two sources are never merged.
///
/// A failure while fetching the fallback playlist is fatal: it happens before
/// matching starts, so per-song isolation does not apply yet.
pub async fn resolve_seeds(
    provider: &dyn PlaylistProvider,
    songs: Vec<Song>,
    playlist_id: Option<String>,
) -> AppResult<Vec<Song>> {
    if !songs.is_empty() {
        return Ok(songs);
    }

    let Some(playlist_id) = playlist_id else {
        return Err(AppError::InvalidInput(
            "No seed songs given and no playlist to derive them from".to_string(),
        ));
    };

    let items = provider.list_playlist_items(&playlist_id).await?;

    tracing::info!(
        playlist_id = %playlist_id,
        seeds = items.len(),
        "Derived seed songs from playlist"
    );

    Ok(items.into_iter().map(|video| Song::new(video.title)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Video;
    use crate::services::providers::MockPlaylistProvider;

    #[tokio::test]
    async fn test_explicit_songs_used_verbatim() {
        // The playlist fallback must not fire even though an id is present;
        // the mock would panic on any call.
        let mut provider = MockPlaylistProvider::new();
        provider.expect_list_playlist_items().times(0);

        let songs = vec![Song::new("Song A"), Song::new("Song B")];
        let seeds = resolve_seeds(&provider, songs.clone(), Some("PLxyz".to_string()))
            .await
            .unwrap();

        assert_eq!(seeds, songs);
    }

    #[tokio::test]
    async fn test_playlist_titles_become_seeds() {
        let mut provider = MockPlaylistProvider::new();
        provider
            .expect_list_playlist_items()
            .withf(|id| id == "PLxyz")
            .returning(|_| {
                Ok(vec![
                    Video {
                        id: "V1".to_string(),
                        title: "Around the World".to_string(),
                    },
                    Video {
                        id: "V2".to_string(),
                        title: "One More Time".to_string(),
                    },
                ])
            });

        let seeds = resolve_seeds(&provider, vec![], Some("PLxyz".to_string()))
            .await
            .unwrap();

        assert_eq!(
            seeds,
            vec![Song::new("Around the World"), Song::new("One More Time")]
        );
    }

    #[tokio::test]
    async fn test_no_source_at_all_is_invalid_input() {
        let provider = MockPlaylistProvider::new();

        let result = resolve_seeds(&provider, vec![], None).await;
        assert!(matches!(result, Err(AppError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn test_fallback_fetch_failure_propagates() {
        let mut provider = MockPlaylistProvider::new();
        provider.expect_list_playlist_items().returning(|_| {
            Err(AppError::ExternalApi {
                status: 404,
                body: "playlistNotFound".to_string(),
            })
        });

        let result = resolve_seeds(&provider, vec![], Some("PLgone".to_string())).await;
        assert!(matches!(result, Err(AppError::ExternalApi { status: 404, .. })));
    }
}
