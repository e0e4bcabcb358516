use thiserror::Error;

#[derive(Error, Debug)]
pub enum CensusqError {
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Backend returned status {0}")]
    Api(u16),

    #[error("Malformed response: {0}")]
    MalformedResponse(#[from] serde_json::Error),

    #[error("Geometry error: {0}")]
    Geometry(String),

    #[error("Readline error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),
}

pub type Result<T> = std::result::Result<T, CensusqError>;
