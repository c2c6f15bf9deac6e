use serde::Deserialize;

/// Application configuration loaded from environment variables
///
/// `dotenvy` pulls in a local `.env` file first, so the API key can live next
/// to the binary instead of the shell profile.
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// YouTube Data API v3 key
    pub youtube_api_key: String,

    /// YouTube Data API v3 base URL
    #[serde(default = "default_youtube_api_url")]
    pub youtube_api_url: String,
}

fn default_youtube_api_url() -> String {
    "https://www.googleapis.com/youtube/v3".to_string()
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// A missing or empty `YOUTUBE_API_KEY` is fatal: no run is possible
    /// without the credential.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }
}
