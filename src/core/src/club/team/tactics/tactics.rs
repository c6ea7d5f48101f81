use crate::squad::FormationSlot;
use crate::{PlayerPositionType, SquadError, SquadResult};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tactics {
    pub tactic_type: MatchTacticType,
}

impl Tactics {
    pub fn new(tactic_type: MatchTacticType) -> Self {
        Tactics { tactic_type }
    }

    /// Resolve a formation by its display name, e.g. "4-2-3-1".
    pub fn from_name(name: &str) -> SquadResult<Self> {
        Ok(Tactics::new(name.parse()?))
    }

    pub fn tactical_positions(&self) -> &'static [TacticalPosition; 11] {
        let (_, positions) = TACTICS_POSITIONS
            .iter()
            .find(|(tactic_type, _)| *tactic_type == self.tactic_type)
            .unwrap_or(&TACTICS_POSITIONS[0]);

        positions
    }

    pub fn positions(&self) -> [PlayerPositionType; 11] {
        let positions = *self.tactical_positions();
        positions.map(|tp| tp.position)
    }

    /// Ordered empty slots for this formation.
    pub fn template(&self) -> Vec<FormationSlot> {
        self.tactical_positions()
            .iter()
            .map(|tp| FormationSlot::new(tp.position, tp.x, tp.y))
            .collect()
    }

    pub fn goalkeeper_count(&self) -> usize {
        self.positions().iter().filter(|pos| pos.is_goalkeeper()).count()
    }

    pub fn defender_count(&self) -> usize {
        self.positions().iter().filter(|pos| pos.is_defender()).count()
    }

    pub fn midfielder_count(&self) -> usize {
        self.positions().iter().filter(|pos| pos.is_midfielder()).count()
    }

    pub fn forward_count(&self) -> usize {
        self.positions().iter().filter(|pos| pos.is_forward()).count()
    }

    pub fn formation_description(&self) -> String {
        format!(
            "{}-{}-{}",
            self.defender_count(),
            self.midfielder_count(),
            self.forward_count()
        )
    }
}

impl Default for Tactics {
    fn default() -> Self {
        Tactics::new(MatchTacticType::T433)
    }
}

/// A template position with its pitch coordinates, in percent from the
/// left and top edges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TacticalPosition {
    pub position: PlayerPositionType,
    pub x: f32,
    pub y: f32,
}

use PlayerPositionType::*;

const fn tp(position: PlayerPositionType, x: f32, y: f32) -> TacticalPosition {
    TacticalPosition { position, x, y }
}

pub const TACTICS_POSITIONS: &[(MatchTacticType, [TacticalPosition; 11])] = &[
    (
        MatchTacticType::T433,
        [
            tp(Goalkeeper, 50.0, 90.0),
            tp(DefenderLeft, 20.0, 70.0),
            tp(DefenderCenter, 38.0, 75.0),
            tp(DefenderCenter, 62.0, 75.0),
            tp(DefenderRight, 80.0, 70.0),
            tp(DefensiveMidfielder, 50.0, 55.0),
            tp(MidfielderCenter, 32.0, 45.0),
            tp(MidfielderCenter, 68.0, 45.0),
            tp(ForwardLeft, 20.0, 20.0),
            tp(Striker, 50.0, 15.0),
            tp(ForwardRight, 80.0, 20.0),
        ],
    ),
    (
        MatchTacticType::T442,
        [
            tp(Goalkeeper, 50.0, 90.0),
            tp(DefenderLeft, 20.0, 70.0),
            tp(DefenderCenter, 38.0, 75.0),
            tp(DefenderCenter, 62.0, 75.0),
            tp(DefenderRight, 80.0, 70.0),
            tp(MidfielderLeft, 20.0, 45.0),
            tp(MidfielderCenter, 40.0, 50.0),
            tp(MidfielderCenter, 60.0, 50.0),
            tp(MidfielderRight, 80.0, 45.0),
            tp(Striker, 40.0, 18.0),
            tp(Striker, 60.0, 18.0),
        ],
    ),
    (
        MatchTacticType::T352,
        [
            tp(Goalkeeper, 50.0, 90.0),
            tp(DefenderCenter, 28.0, 72.0),
            tp(DefenderCenter, 50.0, 75.0),
            tp(DefenderCenter, 72.0, 72.0),
            tp(MidfielderLeft, 15.0, 50.0),
            tp(DefensiveMidfielder, 35.0, 55.0),
            tp(DefensiveMidfielder, 65.0, 55.0),
            tp(MidfielderRight, 85.0, 50.0),
            tp(AttackingMidfielderCenter, 50.0, 35.0),
            tp(Striker, 40.0, 15.0),
            tp(Striker, 60.0, 15.0),
        ],
    ),
    (
        MatchTacticType::T4231,
        [
            tp(Goalkeeper, 50.0, 90.0),
            tp(DefenderLeft, 20.0, 70.0),
            tp(DefenderCenter, 38.0, 75.0),
            tp(DefenderCenter, 62.0, 75.0),
            tp(DefenderRight, 80.0, 70.0),
            tp(DefensiveMidfielder, 40.0, 55.0),
            tp(DefensiveMidfielder, 60.0, 55.0),
            tp(MidfielderLeft, 22.0, 35.0),
            tp(AttackingMidfielderCenter, 50.0, 38.0),
            tp(MidfielderRight, 78.0, 35.0),
            tp(Striker, 50.0, 15.0),
        ],
    ),
    (
        MatchTacticType::T343,
        [
            tp(Goalkeeper, 50.0, 90.0),
            tp(DefenderCenter, 28.0, 72.0),
            tp(DefenderCenter, 50.0, 75.0),
            tp(DefenderCenter, 72.0, 72.0),
            tp(MidfielderLeft, 20.0, 50.0),
            tp(MidfielderCenter, 40.0, 52.0),
            tp(MidfielderCenter, 60.0, 52.0),
            tp(MidfielderRight, 80.0, 50.0),
            tp(ForwardLeft, 25.0, 20.0),
            tp(Striker, 50.0, 15.0),
            tp(ForwardRight, 75.0, 20.0),
        ],
    ),
];

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum MatchTacticType {
    #[serde(rename = "4-3-3")]
    T433,
    #[serde(rename = "4-4-2")]
    T442,
    #[serde(rename = "3-5-2")]
    T352,
    #[serde(rename = "4-2-3-1")]
    T4231,
    #[serde(rename = "3-4-3")]
    T343,
}

impl MatchTacticType {
    pub const ALL: [MatchTacticType; 5] = [
        MatchTacticType::T433,
        MatchTacticType::T442,
        MatchTacticType::T352,
        MatchTacticType::T4231,
        MatchTacticType::T343,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            MatchTacticType::T433 => "4-3-3",
            MatchTacticType::T442 => "4-4-2",
            MatchTacticType::T352 => "3-5-2",
            MatchTacticType::T4231 => "4-2-3-1",
            MatchTacticType::T343 => "3-4-3",
        }
    }
}

impl FromStr for MatchTacticType {
    type Err = SquadError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        let trimmed = name.trim();

        MatchTacticType::ALL
            .iter()
            .find(|t| t.display_name() == trimmed)
            .copied()
            .ok_or_else(|| SquadError::UnknownFormation(name.to_string()))
    }
}

impl Display for MatchTacticType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}
