use crate::{DatabaseError, PlayerEntity};
use core::{Player, PlayerPositionType, PlayerStats};

pub struct PlayerGenerator;

impl PlayerGenerator {
    pub fn generate(entity: &PlayerEntity) -> Result<Player, DatabaseError> {
        let position: PlayerPositionType =
            entity
                .position
                .parse()
                .map_err(|source| DatabaseError::InvalidPlayer {
                    player_id: entity.id.clone(),
                    source,
                })?;

        let stats = entity.stats;

        let mut player = Player::new(
            entity.id.clone(),
            entity.name.clone(),
            position,
            entity.rating,
            PlayerStats::new(
                stats.pace,
                stats.shooting,
                stats.passing,
                stats.dribbling,
                stats.defending,
                stats.physical,
            ),
            entity.price,
            entity.height,
        );

        player.country = entity.country.clone();
        player.country_flag = entity.country_flag.clone();
        player.club = entity.club.clone();
        player.age = entity.age;

        Ok(player)
    }
}
