use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CocorahsError {
    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Invalid response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Unexpected response: {0}")]
    MalformedResponse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error in {path}: {message}")]
    Config { path: PathBuf, message: String },

    #[error("Invalid precipitation amount: {0} (expected a number of inches or T for trace)")]
    InvalidPrecipitation(String),

    #[error("Invalid observation time: {0} (expected YYYY-MM-DDTHH:MM[:SS])")]
    InvalidObservationTime(String),

    #[error("Missing {0}")]
    Missing(&'static str),

    #[error("No input available for {0}")]
    NoInput(String),

    #[error("No stations are associated with this account")]
    NoStations,
}

pub type Result<T> = std::result::Result<T, CocorahsError>;
