use clap::Parser;
use tracing_subscriber::EnvFilter;

use crosstune::cli::Args;
use crosstune::config::Config;
use crosstune::models::Song;
use crosstune::output::render_ranking;
use crosstune::services::matcher::compute_matches;
use crosstune::services::providers::youtube::YouTubeProvider;
use crosstune::services::seeds::resolve_seeds;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Logs go to stderr; stdout carries only the ranked results
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    // A missing API key is fatal before any work starts
    let config = Config::from_env()?;
    let provider = YouTubeProvider::new(config.youtube_api_key, config.youtube_api_url);

    let songs = args.songs.into_iter().map(Song::new).collect();
    let seeds = resolve_seeds(&provider, songs, args.playlist).await?;

    let report = compute_matches(&provider, &seeds, args.depth).await?;

    let failed = report
        .songs
        .iter()
        .filter(|song| song.outcome.is_failure())
        .count();
    if failed > 0 {
        tracing::warn!(
            failed,
            total = report.songs.len(),
            "Some seed songs contributed nothing"
        );
    }

    for line in render_ranking(&report.ranking, args.min_rank) {
        println!("{}", line);
    }

    Ok(())
}
