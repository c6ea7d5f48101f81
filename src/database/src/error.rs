use core::SquadError;
use std::fmt::{Display, Formatter};

#[derive(Debug)]
pub enum DatabaseError {
    Io(std::io::Error),
    Json(serde_json::Error),
    InvalidPlayer { player_id: String, source: SquadError },
    DuplicatePlayerId(String),
}

impl Display for DatabaseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            DatabaseError::Io(err) => write!(f, "failed to read player data: {}", err),
            DatabaseError::Json(err) => write!(f, "malformed player data: {}", err),
            DatabaseError::InvalidPlayer { player_id, source } => {
                write!(f, "player {}: {}", player_id, source)
            }
            DatabaseError::DuplicatePlayerId(id) => write!(f, "duplicate player id: {}", id),
        }
    }
}

impl std::error::Error for DatabaseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DatabaseError::Io(err) => Some(err),
            DatabaseError::Json(err) => Some(err),
            DatabaseError::InvalidPlayer { source, .. } => Some(source),
            DatabaseError::DuplicatePlayerId(_) => None,
        }
    }
}

impl From<std::io::Error> for DatabaseError {
    fn from(err: std::io::Error) -> Self {
        DatabaseError::Io(err)
    }
}

impl From<serde_json::Error> for DatabaseError {
    fn from(err: serde_json::Error) -> Self {
        DatabaseError::Json(err)
    }
}
