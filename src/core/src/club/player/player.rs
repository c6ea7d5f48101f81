use crate::{PlayerFieldPositionGroup, PlayerPositionType};
use itertools::Itertools;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt::{Display, Formatter, Result};

/// Six headline attributes, each on a 0-100 scale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerStats {
    pub pace: u8,
    pub shooting: u8,
    pub passing: u8,
    pub dribbling: u8,
    pub defending: u8,
    pub physical: u8,
}

impl PlayerStats {
    pub fn new(
        pace: u8,
        shooting: u8,
        passing: u8,
        dribbling: u8,
        defending: u8,
        physical: u8,
    ) -> Self {
        PlayerStats {
            pace,
            shooting,
            passing,
            dribbling,
            defending,
            physical,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: String,
    pub name: String,
    pub position: PlayerPositionType,
    #[serde(serialize_with = "serialize_rating")]
    pub rating: f64,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub country_flag: String,
    #[serde(default)]
    pub club: String,
    #[serde(default)]
    pub age: u8,
    pub stats: PlayerStats,
    /// In millions.
    pub price: f64,
    /// In centimetres.
    pub height: u16,

    // presentation state, carried through untouched
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locked: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub justification: Option<String>,
}

// Whole ratings go out as integers, e.g. `91` rather than `91.0`.
fn serialize_rating<S: Serializer>(
    rating: &f64,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    if rating.fract() == 0.0 && rating.abs() <= i64::MAX as f64 {
        serializer.serialize_i64(*rating as i64)
    } else {
        serializer.serialize_f64(*rating)
    }
}

impl Player {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        position: PlayerPositionType,
        rating: f64,
        stats: PlayerStats,
        price: f64,
        height: u16,
    ) -> Self {
        Player {
            id: id.into(),
            name: name.into(),
            position,
            rating,
            country: String::new(),
            country_flag: String::new(),
            club: String::new(),
            age: 0,
            stats,
            price,
            height,
            locked: None,
            justification: None,
        }
    }

    pub fn position_group(&self) -> PlayerFieldPositionGroup {
        self.position.position_group()
    }

    pub fn is_goalkeeper(&self) -> bool {
        self.position.is_goalkeeper()
    }

    fn matches_query(&self, query: &str) -> bool {
        [&self.name, &self.club, &self.country]
            .iter()
            .any(|field| field.to_lowercase().contains(query))
    }
}

impl Display for Player {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{} ({}, {})", self.name, self.position, self.rating)
    }
}

impl PartialEq for Player {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

/// Enumerable pool of candidate players.
#[derive(Debug, Clone, Default)]
pub struct PlayerCollection {
    pub players: Vec<Player>,
}

impl PlayerCollection {
    pub fn new(players: Vec<Player>) -> Self {
        PlayerCollection { players }
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn into_players(self) -> Vec<Player> {
        self.players
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn find(&self, player_id: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.id == player_id)
    }

    pub fn contains(&self, player_id: &str) -> bool {
        self.find(player_id).is_some()
    }

    pub fn by_group(&self, group: PlayerFieldPositionGroup) -> Vec<&Player> {
        self.players
            .iter()
            .filter(|p| p.position_group() == group)
            .collect()
    }

    /// Players able to cover `position` whose name, club or country contains
    /// `query`, best rated first.
    pub fn search(
        &self,
        position: Option<PlayerPositionType>,
        query: &str,
        limit: usize,
    ) -> Vec<&Player> {
        let query = query.trim().to_lowercase();

        self.players
            .iter()
            .filter(|p| position.is_none_or(|pos| p.position.is_compatible_with(pos)))
            .filter(|p| query.is_empty() || p.matches_query(&query))
            .sorted_by(|a, b| b.rating.total_cmp(&a.rating))
            .take(limit)
            .collect()
    }
}
