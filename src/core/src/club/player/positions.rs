use crate::{SquadError, SquadResult};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum PlayerFieldPositionGroup {
    Goalkeeper,
    Defender,
    Midfielder,
    Forward,
}

impl PlayerFieldPositionGroup {
    pub const ALL: [PlayerFieldPositionGroup; 4] = [
        PlayerFieldPositionGroup::Goalkeeper,
        PlayerFieldPositionGroup::Defender,
        PlayerFieldPositionGroup::Midfielder,
        PlayerFieldPositionGroup::Forward,
    ];

    /// Group of a raw position code.
    pub fn of_code(code: &str) -> SquadResult<Self> {
        Ok(PlayerPositionType::from_str(code)?.position_group())
    }
}

/// Closed set of position codes a player or a slot can carry.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum PlayerPositionType {
    #[serde(rename = "GK")]
    Goalkeeper,
    #[serde(rename = "LB")]
    DefenderLeft,
    #[serde(rename = "CB")]
    DefenderCenter,
    #[serde(rename = "RB")]
    DefenderRight,
    #[serde(rename = "LM")]
    MidfielderLeft,
    #[serde(rename = "CM")]
    MidfielderCenter,
    #[serde(rename = "CDM")]
    DefensiveMidfielder,
    #[serde(rename = "CAM")]
    AttackingMidfielderCenter,
    #[serde(rename = "RM")]
    MidfielderRight,
    #[serde(rename = "LW")]
    ForwardLeft,
    #[serde(rename = "ST")]
    Striker,
    #[serde(rename = "RW")]
    ForwardRight,
}

impl PlayerPositionType {
    pub const ALL: [PlayerPositionType; 12] = [
        PlayerPositionType::Goalkeeper,
        PlayerPositionType::DefenderLeft,
        PlayerPositionType::DefenderCenter,
        PlayerPositionType::DefenderRight,
        PlayerPositionType::MidfielderLeft,
        PlayerPositionType::MidfielderCenter,
        PlayerPositionType::DefensiveMidfielder,
        PlayerPositionType::AttackingMidfielderCenter,
        PlayerPositionType::MidfielderRight,
        PlayerPositionType::ForwardLeft,
        PlayerPositionType::Striker,
        PlayerPositionType::ForwardRight,
    ];

    pub fn get_short_name(&self) -> &'static str {
        match self {
            PlayerPositionType::Goalkeeper => "GK",
            PlayerPositionType::DefenderLeft => "LB",
            PlayerPositionType::DefenderCenter => "CB",
            PlayerPositionType::DefenderRight => "RB",
            PlayerPositionType::MidfielderLeft => "LM",
            PlayerPositionType::MidfielderCenter => "CM",
            PlayerPositionType::DefensiveMidfielder => "CDM",
            PlayerPositionType::AttackingMidfielderCenter => "CAM",
            PlayerPositionType::MidfielderRight => "RM",
            PlayerPositionType::ForwardLeft => "LW",
            PlayerPositionType::Striker => "ST",
            PlayerPositionType::ForwardRight => "RW",
        }
    }

    pub fn position_group(&self) -> PlayerFieldPositionGroup {
        match self {
            PlayerPositionType::Goalkeeper => PlayerFieldPositionGroup::Goalkeeper,
            PlayerPositionType::DefenderLeft
            | PlayerPositionType::DefenderCenter
            | PlayerPositionType::DefenderRight => PlayerFieldPositionGroup::Defender,
            PlayerPositionType::MidfielderLeft
            | PlayerPositionType::MidfielderCenter
            | PlayerPositionType::DefensiveMidfielder
            | PlayerPositionType::AttackingMidfielderCenter
            | PlayerPositionType::MidfielderRight => PlayerFieldPositionGroup::Midfielder,
            PlayerPositionType::ForwardLeft
            | PlayerPositionType::Striker
            | PlayerPositionType::ForwardRight => PlayerFieldPositionGroup::Forward,
        }
    }

    pub fn is_in_group(&self, group: PlayerFieldPositionGroup) -> bool {
        self.position_group() == group
    }

    /// Two positions are interchangeable when they share a group.
    pub fn is_compatible_with(&self, other: PlayerPositionType) -> bool {
        self.position_group() == other.position_group()
    }

    pub fn is_goalkeeper(&self) -> bool {
        *self == PlayerPositionType::Goalkeeper
    }

    pub fn is_defender(&self) -> bool {
        self.is_in_group(PlayerFieldPositionGroup::Defender)
    }

    pub fn is_midfielder(&self) -> bool {
        self.is_in_group(PlayerFieldPositionGroup::Midfielder)
    }

    pub fn is_forward(&self) -> bool {
        self.is_in_group(PlayerFieldPositionGroup::Forward)
    }
}

impl FromStr for PlayerPositionType {
    type Err = SquadError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        let normalized = code.trim().to_uppercase();

        PlayerPositionType::ALL
            .iter()
            .find(|position| position.get_short_name() == normalized)
            .copied()
            .ok_or_else(|| SquadError::InvalidPosition(code.to_string()))
    }
}

impl Display for PlayerPositionType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.get_short_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_code_maps_to_exactly_one_group() {
        let expected = [
            ("GK", PlayerFieldPositionGroup::Goalkeeper),
            ("LB", PlayerFieldPositionGroup::Defender),
            ("CB", PlayerFieldPositionGroup::Defender),
            ("RB", PlayerFieldPositionGroup::Defender),
            ("LM", PlayerFieldPositionGroup::Midfielder),
            ("CM", PlayerFieldPositionGroup::Midfielder),
            ("CDM", PlayerFieldPositionGroup::Midfielder),
            ("CAM", PlayerFieldPositionGroup::Midfielder),
            ("RM", PlayerFieldPositionGroup::Midfielder),
            ("LW", PlayerFieldPositionGroup::Forward),
            ("ST", PlayerFieldPositionGroup::Forward),
            ("RW", PlayerFieldPositionGroup::Forward),
        ];

        for (code, group) in expected {
            assert_eq!(PlayerFieldPositionGroup::of_code(code), Ok(group), "{}", code);

            let position: PlayerPositionType = code.parse().unwrap();
            let matching = PlayerFieldPositionGroup::ALL
                .iter()
                .filter(|g| position.is_in_group(**g))
                .count();
            assert_eq!(matching, 1);
        }
    }

    #[test]
    fn short_name_round_trips() {
        for position in PlayerPositionType::ALL {
            assert_eq!(position.get_short_name().parse::<PlayerPositionType>(), Ok(position));
        }
    }

    #[test]
    fn parsing_ignores_case_and_padding() {
        assert_eq!(" cdm ".parse::<PlayerPositionType>(), Ok(PlayerPositionType::DefensiveMidfielder));
    }

    #[test]
    fn unknown_code_is_invalid_position() {
        assert_eq!(
            "LWB".parse::<PlayerPositionType>(),
            Err(SquadError::InvalidPosition("LWB".to_string()))
        );
        assert_eq!(
            PlayerFieldPositionGroup::of_code(""),
            Err(SquadError::InvalidPosition(String::new()))
        );
    }

    #[test]
    fn serde_uses_short_codes() {
        let json = serde_json::to_string(&PlayerPositionType::AttackingMidfielderCenter).unwrap();
        assert_eq!(json, "\"CAM\"");

        let parsed: PlayerPositionType = serde_json::from_str("\"RW\"").unwrap();
        assert_eq!(parsed, PlayerPositionType::ForwardRight);
    }

    #[test]
    fn compatibility_follows_groups() {
        assert!(PlayerPositionType::DefenderLeft.is_compatible_with(PlayerPositionType::DefenderCenter));
        assert!(!PlayerPositionType::DefenderLeft.is_compatible_with(PlayerPositionType::MidfielderLeft));
        assert!(PlayerPositionType::Goalkeeper.is_goalkeeper());
        assert!(PlayerPositionType::Striker.is_forward());
    }
}
