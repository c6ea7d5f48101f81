pub mod club;
pub mod error;
pub mod squad;
pub mod utils;

pub use club::{
    BuildUpStyle, DefensiveApproach, MatchTacticType, Player, PlayerCollection,
    PlayerFieldPositionGroup, PlayerPositionType, PlayerStats, PositionStatus, SquadConstraints,
    TacticalPosition, Tactics, TACTICS_POSITIONS,
};
pub use error::{SquadError, SquadResult};
pub use squad::{
    AssemblyResult, BenchAllocation, BenchAllocator, FormationSlot, RandomSelection,
    ReplacementCandidate, ReplacementRanker, ReplacementReason, SelectionPolicy, SlotLocation,
    SlotSource, Squad, SquadBuildRequest, SquadBuildResult, SquadBuilder, SquadExport,
    SquadSelector, SquadStatistics, StrategyReasoning, TopRatedSelection,
};
