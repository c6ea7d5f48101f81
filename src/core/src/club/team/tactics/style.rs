use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub enum BuildUpStyle {
    #[default]
    Balanced,
    #[serde(rename = "Counter-Attack")]
    CounterAttack,
    #[serde(rename = "Short Passing")]
    ShortPassing,
}

impl BuildUpStyle {
    pub fn display_name(&self) -> &'static str {
        match self {
            BuildUpStyle::Balanced => "Balanced",
            BuildUpStyle::CounterAttack => "Counter-Attack",
            BuildUpStyle::ShortPassing => "Short Passing",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim() {
            "Balanced" => Some(BuildUpStyle::Balanced),
            "Counter-Attack" => Some(BuildUpStyle::CounterAttack),
            "Short Passing" => Some(BuildUpStyle::ShortPassing),
            _ => None,
        }
    }
}

impl Display for BuildUpStyle {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub enum DefensiveApproach {
    #[default]
    Balanced,
    #[serde(rename = "Deep Block")]
    DeepBlock,
    #[serde(rename = "High Press")]
    HighPress,
    Aggressive,
}

impl DefensiveApproach {
    pub fn display_name(&self) -> &'static str {
        match self {
            DefensiveApproach::Balanced => "Balanced",
            DefensiveApproach::DeepBlock => "Deep Block",
            DefensiveApproach::HighPress => "High Press",
            DefensiveApproach::Aggressive => "Aggressive",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim() {
            "Balanced" => Some(DefensiveApproach::Balanced),
            "Deep Block" => Some(DefensiveApproach::DeepBlock),
            "High Press" => Some(DefensiveApproach::HighPress),
            "Aggressive" => Some(DefensiveApproach::Aggressive),
            _ => None,
        }
    }
}

impl Display for DefensiveApproach {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}
