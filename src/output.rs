use crate::models::RankedVideo;

/// Render the ranking as `"rank - title"` lines, best match first
///
/// Entries below `min_rank` are omitted. Partial failures never show up
/// here; the ranking silently reflects fewer contributing songs.
pub fn render_ranking(ranking: &[RankedVideo], min_rank: u32) -> Vec<String> {
    ranking
        .iter()
        .filter(|entry| entry.rank >= min_rank)
        .map(|entry| format!("{} - {}", entry.rank, entry.title))
        .collect()
}
