use thiserror::Error;

#[derive(Error, Debug)]
pub enum LineupError {
    #[error("Invalid position code: {0}")]
    InvalidPosition(String),

    #[error("Invalid formation: {0}")]
    InvalidFormation(String),

    #[error("Invalid suitability score for {player_id}/{position}: {score}")]
    InvalidScore { player_id: String, position: String, score: f64 },

    #[error("Position {position} given twice for {player_id}")]
    DuplicatePosition { player_id: String, position: String },

    #[error("Duplicate player id: {0}")]
    DuplicatePlayer(String),

    #[error("Unsupported schema version: found {found}, expected {expected}")]
    UnsupportedSchema { found: u8, expected: u8 },

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("Config error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for LineupError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_data() || err.is_syntax() || err.is_eof() {
            LineupError::Deserialization(err.to_string())
        } else {
            LineupError::Serialization(err.to_string())
        }
    }
}

impl From<serde_yaml::Error> for LineupError {
    fn from(err: serde_yaml::Error) -> Self {
        LineupError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, LineupError>;
