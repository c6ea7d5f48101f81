use crate::squad::{MAX_SQUAD_GOALKEEPERS, SlotLocation, SlotSource};
use crate::PlayerPositionType;
use std::fmt::{Display, Formatter};

/// Errors raised by the squad engine.
///
/// An empty slot is never an error: slots carry `Option<Player>`.
#[derive(Debug, Clone, PartialEq)]
pub enum SquadError {
    UnknownFormation(String),
    InvalidPosition(String),
    SlotNotFound(SlotLocation),
    IneligiblePlayer {
        player_id: String,
        required: PlayerPositionType,
    },
    DuplicatePlayer(String),
    SlotCapacityExceeded(SlotSource),
    GoalkeeperLimit(String),
}

impl Display for SquadError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            SquadError::UnknownFormation(name) => write!(f, "unknown formation: {}", name),
            SquadError::InvalidPosition(code) => write!(f, "invalid position code: {}", code),
            SquadError::SlotNotFound(location) => {
                write!(f, "no {} slot at index {}", location.source, location.index)
            }
            SquadError::IneligiblePlayer { player_id, required } => write!(
                f,
                "player {} cannot fill a {} slot",
                player_id,
                required.get_short_name()
            ),
            SquadError::DuplicatePlayer(player_id) => {
                write!(f, "player {} is already in the squad", player_id)
            }
            SquadError::SlotCapacityExceeded(source) => {
                write!(f, "{} is full", source)
            }
            SquadError::GoalkeeperLimit(player_id) => write!(
                f,
                "player {} would exceed the squad limit of {} goalkeepers",
                player_id, MAX_SQUAD_GOALKEEPERS
            ),
        }
    }
}

impl std::error::Error for SquadError {}

pub type SquadResult<T> = Result<T, SquadError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_value() {
        assert_eq!(
            SquadError::UnknownFormation("5-5-0".to_string()).to_string(),
            "unknown formation: 5-5-0"
        );
        assert_eq!(
            SquadError::InvalidPosition("LWB".to_string()).to_string(),
            "invalid position code: LWB"
        );

        let err = SquadError::IneligiblePlayer {
            player_id: "7".to_string(),
            required: PlayerPositionType::Striker,
        };
        assert_eq!(err.to_string(), "player 7 cannot fill a ST slot");

        let err = SquadError::SlotNotFound(SlotLocation::new(SlotSource::Bench, 9));
        assert_eq!(err.to_string(), "no bench slot at index 9");

        let err = SquadError::GoalkeeperLimit("23".to_string());
        assert_eq!(
            err.to_string(),
            "player 23 would exceed the squad limit of 3 goalkeepers"
        );
    }
}
