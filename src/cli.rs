use clap::Parser;

/// Find songs that frequently co-occur with yours across public playlists
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Seed song as free text, e.g. "Daft Punk Around the World" (repeatable)
    #[arg(short, long = "song", value_name = "TEXT")]
    pub songs: Vec<String>,

    /// Playlist id to derive seed songs from when no --song is given
    #[arg(short, long, value_name = "PLAYLIST_ID", env = "CROSSTUNE_PLAYLIST")]
    pub playlist: Option<String>,

    /// How many candidate playlists to scan per seed song
    #[arg(
        short,
        long,
        default_value_t = 1,
        value_parser = clap::value_parser!(u8).range(1..=10)
    )]
    pub depth: u8,

    /// Hide results that appeared in fewer than this many playlists
    #[arg(long, default_value_t = 0, value_name = "N")]
    pub min_rank: u32,
}
