pub mod player;
pub mod team;

pub use player::{PlayerCollection, PlayerFieldPositionGroup, PlayerPositionType, Player, PlayerStats};
pub use team::{
    BuildUpStyle, DefensiveApproach, MatchTacticType, PositionStatus, SquadConstraints,
    TacticalPosition, Tactics, TACTICS_POSITIONS,
};
