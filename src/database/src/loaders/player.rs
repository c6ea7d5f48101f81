use crate::DatabaseError;
use serde::Deserialize;

const STATIC_PLAYERS_JSON: &str = include_str!("../data/players.json");

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerEntity {
    pub id: String,
    pub name: String,
    pub position: String,
    pub rating: f64,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub country_flag: String,
    #[serde(default)]
    pub club: String,
    #[serde(default)]
    pub age: u8,
    pub stats: PlayerStatsEntity,
    pub price: f64,
    pub height: u16,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PlayerStatsEntity {
    pub pace: u8,
    pub shooting: u8,
    pub passing: u8,
    pub dribbling: u8,
    pub defending: u8,
    pub physical: u8,
}

pub struct PlayerLoader;

impl PlayerLoader {
    pub fn load() -> Result<Vec<PlayerEntity>, DatabaseError> {
        Self::load_from_str(STATIC_PLAYERS_JSON)
    }

    pub fn load_from_str(json: &str) -> Result<Vec<PlayerEntity>, DatabaseError> {
        Ok(serde_json::from_str(json)?)
    }
}
