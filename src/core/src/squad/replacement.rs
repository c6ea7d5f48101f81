use crate::{Player, PlayerPositionType, SquadResult};
use itertools::Itertools;
use serde::{Serialize, Serializer};
use std::fmt::{Display, Formatter};

pub const MAX_REPLACEMENT_CANDIDATES: usize = 5;

const STANDOUT_ATTRIBUTE: u8 = 85;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReplacementCandidate {
    pub player: Player,
    pub reason: ReplacementReason,
}

/// Why a candidate is worth a look. Checked in declaration order, the first
/// attribute above 85 wins.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ReplacementReason {
    Pace(PlayerPositionType),
    Defending,
    Passing(PlayerPositionType),
    Shooting,
    Physical,
    Overall(PlayerPositionType, f64),
}

impl ReplacementReason {
    pub fn for_player(player: &Player, required: PlayerPositionType) -> Self {
        let stats = &player.stats;

        if stats.pace > STANDOUT_ATTRIBUTE {
            ReplacementReason::Pace(required)
        } else if stats.defending > STANDOUT_ATTRIBUTE {
            ReplacementReason::Defending
        } else if stats.passing > STANDOUT_ATTRIBUTE {
            ReplacementReason::Passing(required)
        } else if stats.shooting > STANDOUT_ATTRIBUTE {
            ReplacementReason::Shooting
        } else if stats.physical > STANDOUT_ATTRIBUTE {
            ReplacementReason::Physical
        } else {
            ReplacementReason::Overall(required, player.rating)
        }
    }
}

impl Display for ReplacementReason {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ReplacementReason::Pace(pos) => {
                write!(f, "Fastest {} available, strong crossing stats", pos)
            }
            ReplacementReason::Defending => f.write_str("Elite defensive ability, dominant in duels"),
            ReplacementReason::Passing(pos) => {
                write!(f, "Exceptional playmaking from {} position", pos)
            }
            ReplacementReason::Shooting => f.write_str("Clinical finishing and goal-scoring threat"),
            ReplacementReason::Physical => f.write_str("Dominant physicality and aerial presence"),
            ReplacementReason::Overall(pos, rating) => {
                write!(f, "Strong overall {} option, rated {}", pos, rating)
            }
        }
    }
}

impl Serialize for ReplacementReason {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

pub struct ReplacementRanker;

impl ReplacementRanker {
    pub fn rank_code(
        position_code: &str,
        excluded_id: &str,
        squad_member_ids: &[&str],
        pool: &[Player],
    ) -> SquadResult<Vec<ReplacementCandidate>> {
        let required: PlayerPositionType = position_code.parse()?;

        Ok(Self::rank(required, excluded_id, squad_member_ids, pool))
    }

    /// Up to five players of `required`'s group, best rated first, skipping
    /// the excluded player and everyone already in the squad.
    pub fn rank(
        required: PlayerPositionType,
        excluded_id: &str,
        squad_member_ids: &[&str],
        pool: &[Player],
    ) -> Vec<ReplacementCandidate> {
        pool.iter()
            .filter(|p| p.position.is_compatible_with(required))
            .filter(|p| p.id != excluded_id)
            .filter(|p| !squad_member_ids.contains(&p.id.as_str()))
            .sorted_by(|a, b| b.rating.total_cmp(&a.rating))
            .take(MAX_REPLACEMENT_CANDIDATES)
            .map(|p| ReplacementCandidate {
                reason: ReplacementReason::for_player(p, required),
                player: p.clone(),
            })
            .collect()
    }
}
