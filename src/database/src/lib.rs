mod error;
mod generators;
mod loaders;

pub use error::*;
pub use generators::*;
pub use loaders::*;

use log::debug;
use std::path::Path;

/// Raw pool as read from JSON, before positions are validated.
pub struct DatabaseEntity {
    pub players: Vec<PlayerEntity>,
}

pub struct DatabaseLoader;

impl DatabaseLoader {
    /// Reference pool bundled with the crate.
    pub fn load() -> Result<DatabaseEntity, DatabaseError> {
        Ok(DatabaseEntity {
            players: PlayerLoader::load()?,
        })
    }

    pub fn load_from_path(path: impl AsRef<Path>) -> Result<DatabaseEntity, DatabaseError> {
        let path = path.as_ref();

        debug!("loading players from {}", path.display());

        let json = std::fs::read_to_string(path)?;

        Ok(DatabaseEntity {
            players: PlayerLoader::load_from_str(&json)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_pool_loads() {
        let database = DatabaseLoader::load().unwrap();

        assert_eq!(database.players.len(), 23);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let result = DatabaseLoader::load_from_path("/definitely/not/here/players.json");

        assert!(matches!(result, Err(DatabaseError::Io(_))));
    }

    #[test]
    fn loads_from_file() {
        let path = std::env::temp_dir().join(format!("squad_builder_players_{}.json", std::process::id()));
        std::fs::write(
            &path,
            r#"[{
                "id": "a",
                "name": "File Player",
                "position": "LB",
                "rating": 80,
                "stats": { "pace": 80, "shooting": 50, "passing": 70, "dribbling": 70, "defending": 78, "physical": 75 },
                "price": 20,
                "height": 178
            }]"#,
        )
        .unwrap();

        let database = DatabaseLoader::load_from_path(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(database.players.len(), 1);
        assert_eq!(database.players[0].position, "LB");
    }
}
