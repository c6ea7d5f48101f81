use crate::{DatabaseEntity, DatabaseError, PlayerGenerator};
use core::PlayerCollection;
use log::info;
use std::collections::HashSet;

pub struct DatabaseGenerator;

impl DatabaseGenerator {
    /// Validates every entity and builds the candidate pool, keeping file order.
    pub fn generate(data: &DatabaseEntity) -> Result<PlayerCollection, DatabaseError> {
        let mut seen_ids = HashSet::with_capacity(data.players.len());

        let players = data
            .players
            .iter()
            .map(|entity| {
                if !seen_ids.insert(entity.id.as_str()) {
                    return Err(DatabaseError::DuplicatePlayerId(entity.id.clone()));
                }

                PlayerGenerator::generate(entity)
            })
            .collect::<Result<Vec<_>, _>>()?;

        info!("player pool ready: {} players", players.len());

        Ok(PlayerCollection::new(players))
    }
}
