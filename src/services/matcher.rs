use std::collections::HashMap;

use crate::{
    error::{AppError, AppResult},
    models::{MatchReport, RankedVideo, Song, SongOutcome, SongReport, Video},
    services::providers::PlaylistProvider,
};

const MIN_DEPTH: u8 = 1;
const MAX_DEPTH: u8 = 10;

/// Occurrence counter keyed by video id, preserving first-seen order
///
/// Equal ranks must keep insertion order through the final stable sort, so
/// entries live in a Vec with a side index instead of a bare map.
#[derive(Default)]
struct RankTable {
    index: HashMap<String, usize>,
    entries: Vec<RankedVideo>,
}

impl RankTable {
    fn record(&mut self, video: Video) {
        match self.index.get(&video.id) {
            Some(&position) => self.entries[position].rank += 1,
            None => {
                self.index.insert(video.id.clone(), self.entries.len());
                self.entries.push(RankedVideo {
                    video_id: video.id,
                    title: video.title,
                    rank: 1,
                });
            }
        }
    }

    fn into_ranking(mut self) -> Vec<RankedVideo> {
        // sort_by is stable: ties keep first-seen order
        self.entries.sort_by(|a, b| b.rank.cmp(&a.rank));
        self.entries
    }
}

/// Rank videos by how often they co-occur with the seed songs
///
/// For each song in input order, up to `depth` playlists matching the song's
/// text are searched and every contained video bumps its occurrence count.
/// The rank of a video is the number of distinct matched playlists it
/// appeared in, across all seed songs. One song matching several playlists
/// that share a video counts that video several times.
///
/// A provider failure while handling one song is captured in that song's
/// report and the run continues with the next song; whatever the failed song
/// contributed before the error stays counted. The returned ranking is
/// ordered by rank descending.
pub async fn compute_matches(
    provider: &dyn PlaylistProvider,
    songs: &[Song],
    depth: u8,
) -> AppResult<MatchReport> {
    if !(MIN_DEPTH..=MAX_DEPTH).contains(&depth) {
        return Err(AppError::InvalidInput(format!(
            "Scan depth must be between {} and {}, got {}",
            MIN_DEPTH, MAX_DEPTH, depth
        )));
    }

    let mut table = RankTable::default();
    let mut reports = Vec::with_capacity(songs.len());

    for (position, song) in songs.iter().enumerate() {
        tracing::info!(
            song = %song,
            position = position + 1,
            total = songs.len(),
            "Scanning seed song"
        );

        let outcome = match scan_song(provider, song, depth, &mut table).await {
            Ok(outcome) => outcome,
            Err(error) => {
                tracing::error!(song = %song, error = %error, "Seed song scan failed");
                SongOutcome::Failed(error)
            }
        };

        reports.push(SongReport {
            song: song.clone(),
            outcome,
        });
    }

    Ok(MatchReport {
        ranking: table.into_ranking(),
        songs: reports,
    })
}

async fn scan_song(
    provider: &dyn PlaylistProvider,
    song: &Song,
    depth: u8,
    table: &mut RankTable,
) -> AppResult<SongOutcome> {
    let playlists = provider.search_playlists(&song.query, depth).await?;

    let mut playlists_scanned = 0;
    let mut videos_counted = 0;

    for playlist in playlists {
        let videos = provider.list_playlist_items(&playlist.id).await?;
        playlists_scanned += 1;
        videos_counted += videos.len();

        for video in videos {
            table.record(video);
        }
    }

    Ok(SongOutcome::Scanned {
        playlists_scanned,
        videos_counted,
    })
}
