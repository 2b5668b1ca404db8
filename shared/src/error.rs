use thiserror::Error;

#[derive(Debug, Error)]
pub enum BannerError {
    #[error("Unknown application mode: {0}")]
    UnknownMode(String),
    #[error("Malformed style declaration: {0}")]
    MalformedStyle(String),
    #[error("Invalid banner config: {0}")]
    Config(#[from] serde_json::Error),
}
