mod settings;

use core::SquadBuilder;
use core::utils::TimeEstimation;
use database::{DatabaseGenerator, DatabaseLoader};
use env_logger::Env;
use log::info;
use settings::Settings;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let settings = Settings::from_env()?;

    let (database, estimated) = TimeEstimation::estimate(|| match &settings.players_path {
        Some(path) => DatabaseLoader::load_from_path(path),
        None => DatabaseLoader::load(),
    });

    let database = database?;

    info!("database loaded: {} ms", estimated);

    let players = DatabaseGenerator::generate(&database)?;

    let mut policy = settings.selection_policy();

    let result = SquadBuilder::build(&settings.request, players.into_players(), policy.as_mut())?;

    info!("{}", result.message);

    println!("{}", serde_json::to_string_pretty(&result)?);

    Ok(())
}
