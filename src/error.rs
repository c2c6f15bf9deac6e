/// Application-level errors
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("External API error (status {status}): {body}")]
    ExternalApi { status: u16, body: String },
}

pub type AppResult<T> = Result<T, AppError>;
