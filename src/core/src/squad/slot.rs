use crate::{Player, PlayerFieldPositionGroup, PlayerPositionType};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// A single place in the squad. `player == None` is an empty slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormationSlot {
    pub position: PlayerPositionType,
    pub player: Option<Player>,
    pub x: f32,
    pub y: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alternatives: Option<Vec<Player>>,
}

impl FormationSlot {
    pub fn new(position: PlayerPositionType, x: f32, y: f32) -> Self {
        FormationSlot {
            position,
            player: None,
            x,
            y,
            alternatives: None,
        }
    }

    /// Off-pitch slot declared with the player's own position.
    pub fn for_player(player: Player) -> Self {
        FormationSlot {
            position: player.position,
            player: Some(player),
            x: 0.0,
            y: 0.0,
            alternatives: None,
        }
    }

    pub fn required_group(&self) -> PlayerFieldPositionGroup {
        self.position.position_group()
    }

    pub fn accepts(&self, player: &Player) -> bool {
        player.position_group() == self.required_group()
    }

    pub fn is_empty(&self) -> bool {
        self.player.is_none()
    }

    pub fn player_id(&self) -> Option<&str> {
        self.player.as_ref().map(|p| p.id.as_str())
    }

    pub fn with_player(mut self, player: Player) -> Self {
        self.player = Some(player);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotSource {
    Pitch,
    Bench,
    Reserve,
}

impl SlotSource {
    /// Upper bound on slots for this part of the squad, if any.
    pub fn capacity(&self) -> Option<usize> {
        match self {
            SlotSource::Pitch => None,
            SlotSource::Bench => Some(super::BENCH_SIZE),
            SlotSource::Reserve => Some(super::RESERVE_SIZE),
        }
    }
}

impl Display for SlotSource {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            SlotSource::Pitch => f.write_str("pitch"),
            SlotSource::Bench => f.write_str("bench"),
            SlotSource::Reserve => f.write_str("reserve"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SlotLocation {
    pub source: SlotSource,
    pub index: usize,
}

impl SlotLocation {
    pub fn new(source: SlotSource, index: usize) -> Self {
        SlotLocation { source, index }
    }

    pub fn pitch(index: usize) -> Self {
        SlotLocation::new(SlotSource::Pitch, index)
    }

    pub fn bench(index: usize) -> Self {
        SlotLocation::new(SlotSource::Bench, index)
    }

    pub fn reserve(index: usize) -> Self {
        SlotLocation::new(SlotSource::Reserve, index)
    }
}
