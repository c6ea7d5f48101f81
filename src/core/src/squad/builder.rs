use crate::squad::{
    BenchAllocator, SelectionPolicy, Squad, SquadSelector, SquadStatistics, StrategyReasoning,
};
use crate::{
    BuildUpStyle, DefensiveApproach, Player, PositionStatus, SquadConstraints, SquadResult,
    Tactics,
};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

pub const DEFAULT_FORMATION: &str = "4-3-3";

/// Settings for one build. `prompt` and `budget` are carried into the
/// reasoning text but do not steer selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SquadBuildRequest {
    pub prompt: String,
    pub formation: String,
    pub build_up_style: BuildUpStyle,
    pub defensive_approach: DefensiveApproach,
    /// In millions.
    pub budget: f64,
    pub budget_enabled: bool,
    pub constraints: SquadConstraints,
}

impl SquadBuildRequest {
    pub fn budget_cap(&self) -> Option<f64> {
        self.budget_enabled.then_some(self.budget)
    }
}

impl Default for SquadBuildRequest {
    fn default() -> Self {
        SquadBuildRequest {
            prompt: String::new(),
            formation: DEFAULT_FORMATION.to_string(),
            build_up_style: BuildUpStyle::default(),
            defensive_approach: DefensiveApproach::default(),
            budget: 0.0,
            budget_enabled: false,
            constraints: SquadConstraints::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SquadBuildResult {
    pub squad: Squad,
    pub statistics: SquadStatistics,
    pub position_status: PositionStatus,
    pub strategy_reasoning: String,
    pub message: String,
    pub used_fallback: bool,
}

pub struct SquadBuilder;

impl SquadBuilder {
    pub fn build<P: SelectionPolicy + ?Sized>(
        request: &SquadBuildRequest,
        pool: Vec<Player>,
        policy: &mut P,
    ) -> SquadResult<SquadBuildResult> {
        let tactics = Tactics::from_name(&request.formation)?;
        let budget = request.budget_cap();

        if !request.prompt.trim().is_empty() {
            debug!("prompt: {}", request.prompt.trim());
        }

        if let Some(budget) = budget {
            debug!("budget cap of {}M is informational only", budget);
        }

        let pool_size = pool.len();

        let assembly = SquadSelector::assemble(&tactics, pool, policy);
        let allocation = BenchAllocator::allocate(&assembly.slots, assembly.remaining);

        let squad = Squad::new(
            tactics.tactic_type,
            assembly.slots,
            allocation.bench,
            allocation.reserves,
        );

        let statistics = squad.statistics();
        let position_status = squad.position_status(&request.constraints);

        if !position_status.is_satisfied() {
            warn!("squad misses positional minimums: {:?}", position_status);
        }

        let strategy_reasoning = StrategyReasoning::explain(
            &tactics,
            request.build_up_style,
            request.defensive_approach,
            budget,
        );

        let message = StrategyReasoning::confirmation(
            &tactics,
            request.build_up_style,
            budget,
            statistics.player_count,
            statistics.total_price,
        );

        info!(
            "built {} squad: {} of {} players, rating {}, cost {}M",
            tactics.tactic_type,
            statistics.player_count,
            pool_size,
            statistics.avg_rating,
            statistics.total_price
        );

        Ok(SquadBuildResult {
            squad,
            statistics,
            position_status,
            strategy_reasoning,
            message,
            used_fallback: allocation.used_fallback,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::squad::fixtures::{outfield_depth, reference_players};
    use crate::squad::{RandomSelection, TopRatedSelection};
    use crate::{MatchTacticType, SquadError};
    use std::collections::HashSet;

    #[test]
    fn default_request_builds_full_squad() {
        let mut policy = RandomSelection::seeded(11);

        let result =
            SquadBuilder::build(&SquadBuildRequest::default(), reference_players(), &mut policy)
                .unwrap();

        assert_eq!(result.squad.formation, MatchTacticType::T433);
        assert_eq!(result.squad.pitch.len(), 11);
        assert_eq!(result.squad.bench.len(), 7);
        assert_eq!(result.squad.reserves.len(), 5);
        assert_eq!(result.statistics.player_count, 23);
        assert_eq!(result.statistics.total_price, 1700.0);
        assert!(result.used_fallback);
        assert!(result.message.starts_with("Built a 4-3-3 balanced squad. 23 players selected."));
    }

    #[test]
    fn squad_members_are_unique_for_every_formation() {
        for tactic_type in MatchTacticType::ALL {
            let request = SquadBuildRequest {
                formation: tactic_type.to_string(),
                ..Default::default()
            };
            let mut pool = reference_players();
            pool.extend(outfield_depth(16));

            let result =
                SquadBuilder::build(&request, pool, &mut RandomSelection::seeded(tactic_type as u64))
                    .unwrap();

            let ids = result.squad.member_ids();
            assert_eq!(ids.iter().collect::<HashSet<_>>().len(), ids.len());
            assert!(result.squad.goalkeeper_count() <= 3);
            assert!(!result.used_fallback);
        }
    }

    #[test]
    fn budget_shows_up_in_message_only() {
        let request = SquadBuildRequest {
            budget: 250.0,
            budget_enabled: true,
            ..Default::default()
        };

        let capped = SquadBuilder::build(&request, reference_players(), &mut TopRatedSelection).unwrap();
        let uncapped =
            SquadBuilder::build(&SquadBuildRequest::default(), reference_players(), &mut TopRatedSelection)
                .unwrap();

        assert_eq!(capped.squad, uncapped.squad);
        assert!(capped.message.contains("within €250M budget"));
        assert!(capped.strategy_reasoning.contains("Budget constraints of €250M"));
    }

    #[test]
    fn unknown_formation_is_an_error() {
        let request = SquadBuildRequest {
            formation: "2-3-5".to_string(),
            ..Default::default()
        };

        let result = SquadBuilder::build(&request, reference_players(), &mut TopRatedSelection);

        assert_eq!(
            result.err(),
            Some(SquadError::UnknownFormation("2-3-5".to_string()))
        );
    }

    #[test]
    fn position_status_reflects_constraints() {
        let request = SquadBuildRequest {
            constraints: SquadConstraints::new(5, 4, 4, 2),
            ..Default::default()
        };

        let result = SquadBuilder::build(&request, reference_players(), &mut TopRatedSelection).unwrap();

        assert!(!result.position_status.gk);
        assert!(result.position_status.def);
    }

    #[test]
    fn request_reads_camel_case_json_with_defaults() {
        let request: SquadBuildRequest = serde_json::from_str(
            r#"{
                "prompt": "Fast wingers",
                "formation": "3-4-3",
                "buildUpStyle": "Counter-Attack",
                "budgetEnabled": true,
                "budget": 400,
                "constraints": { "minGK": 2, "minDEF": 3, "minMID": 3, "minFWD": 3 }
            }"#,
        )
        .unwrap();

        assert_eq!(request.formation, "3-4-3");
        assert_eq!(request.build_up_style, BuildUpStyle::CounterAttack);
        assert_eq!(request.defensive_approach, DefensiveApproach::Balanced);
        assert_eq!(request.budget_cap(), Some(400.0));
        assert_eq!(request.constraints.min_fwd, 3);
    }

    #[test]
    fn result_serializes_for_display() {
        let result =
            SquadBuilder::build(&SquadBuildRequest::default(), reference_players(), &mut TopRatedSelection)
                .unwrap();

        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(json["squad"]["formation"], "4-3-3");
        assert_eq!(json["positionStatus"]["gk"], true);
        assert_eq!(json["statistics"]["positionCounts"]["def"], 8);
        assert!(json["strategyReasoning"].as_str().is_some_and(|s| s.contains("\n\n")));
    }
}
