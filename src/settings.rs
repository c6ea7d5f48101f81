use color_eyre::eyre::{WrapErr, bail, eyre};
use core::{
    BuildUpStyle, DefensiveApproach, RandomSelection, SelectionPolicy, SquadBuildRequest,
    TopRatedSelection,
};
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyKind {
    Random,
    TopRated,
}

/// Run configuration, read once from the environment.
#[derive(Debug, Clone)]
pub struct Settings {
    pub request: SquadBuildRequest,
    pub policy: PolicyKind,
    pub seed: Option<u64>,
    pub players_path: Option<PathBuf>,
}

impl Settings {
    pub fn from_env() -> color_eyre::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> color_eyre::Result<Self> {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let mut request = SquadBuildRequest::default();

        if let Some(formation) = var("FORMATION") {
            request.formation = formation.trim().to_string();
        }
        if let Some(style) = var("BUILD_UP") {
            request.build_up_style = BuildUpStyle::from_name(&style).ok_or_else(|| {
                eyre!(
                    "unknown BUILD_UP: {} (expected Balanced, Counter-Attack or Short Passing)",
                    style
                )
            })?;
        }
        if let Some(approach) = var("DEFENSIVE") {
            request.defensive_approach = DefensiveApproach::from_name(&approach).ok_or_else(|| {
                eyre!(
                    "unknown DEFENSIVE: {} (expected Balanced, Deep Block, High Press or Aggressive)",
                    approach
                )
            })?;
        }
        if let Some(prompt) = var("PROMPT") {
            request.prompt = prompt;
        }
        if let Some(budget) = var("BUDGET") {
            request.budget = budget
                .trim()
                .parse()
                .wrap_err_with(|| format!("BUDGET is not a number: {}", budget))?;
            request.budget_enabled = true;
        }

        let seed = var("SEED")
            .map(|seed| {
                seed.trim()
                    .parse::<u64>()
                    .wrap_err_with(|| format!("SEED is not an unsigned integer: {}", seed))
            })
            .transpose()?;

        let policy = match var("POLICY").as_deref().map(str::trim) {
            None | Some("random") => PolicyKind::Random,
            Some("top-rated") => PolicyKind::TopRated,
            Some(other) => bail!("unknown POLICY: {} (expected random or top-rated)", other),
        };

        Ok(Settings {
            request,
            policy,
            seed,
            players_path: var("PLAYERS_PATH").map(PathBuf::from),
        })
    }

    pub fn selection_policy(&self) -> Box<dyn SelectionPolicy> {
        match (self.policy, self.seed) {
            (PolicyKind::TopRated, _) => Box::new(TopRatedSelection),
            (PolicyKind::Random, Some(seed)) => Box::new(RandomSelection::seeded(seed)),
            (PolicyKind::Random, None) => Box::new(RandomSelection::from_os_rng()),
        }
    }
}
