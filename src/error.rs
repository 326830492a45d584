use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Network error: {0}")]
    Transport(String),

    #[error("Riot API returned HTTP {0}")]
    HttpStatus(u16),

    #[error("Malformed response: {0}")]
    Decode(String),

    #[error("Champion not found: {0}")]
    ChampionNotFound(String),

    #[error("Configuration error: {0}")]
    Config(String),
}
