use thiserror::Error;

/// Failure to load the catalog as a whole. Callers recover by continuing
/// with an empty catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("catalog file not found: {0}")]
    NotFound(String),

    #[error("failed to read catalog: {0}")]
    Csv(#[from] csv::Error),

    #[error("catalog is missing required column '{0}'")]
    MissingColumn(&'static str),
}

/// A single catalog row that could not be turned into a track.
#[derive(Error, Debug, PartialEq)]
pub enum RowParseError {
    #[error("line {line}: invalid BPM value '{value}'")]
    InvalidTempo { line: u64, value: String },

    #[error("line {line}: missing song title")]
    MissingTitle { line: u64 },
}

/// Weather lookup failures. All of them degrade to "weather absent".
#[derive(Error, Debug)]
pub enum WeatherError {
    #[error("no weather API key configured")]
    MissingApiKey,

    #[error("weather request failed: {0}")]
    Transport(String),

    #[error("weather service returned HTTP {status}: {message}")]
    Status { status: u16, message: String },

    #[error("malformed weather response: {0}")]
    Malformed(String),
}
