use crate::{BuildUpStyle, DefensiveApproach, Player, PlayerPositionType, Tactics};

const ELITE_ATTRIBUTE: u8 = 85;

pub struct StrategyReasoning;

impl StrategyReasoning {
    /// Paragraphs describing how the build settings shaped the squad,
    /// separated by blank lines.
    pub fn explain(
        tactics: &Tactics,
        build_up: BuildUpStyle,
        defensive: DefensiveApproach,
        budget: Option<f64>,
    ) -> String {
        let formation = format!(
            "The {} formation was selected to balance defensive solidity with attacking width. \
             This structure provides natural passing triangles through the midfield while allowing \
             wing players to stretch the opposition's defensive line.",
            tactics.tactic_type
        );

        let build_up = match build_up {
            BuildUpStyle::CounterAttack => {
                "The counter-attacking build-up style heavily influenced midfield selections, \
                 prioritizing players with high pace and direct passing ability. Central midfielders \
                 were chosen for their ability to quickly transition from defense to attack, with an \
                 emphasis on vertical ball progression."
            }
            BuildUpStyle::ShortPassing => {
                "The short passing build-up style drove selections toward technically gifted \
                 midfielders with high passing and dribbling stats. Players comfortable in tight \
                 spaces and capable of maintaining possession under pressure were prioritized \
                 throughout the squad."
            }
            BuildUpStyle::Balanced => {
                "A balanced build-up approach was applied, selecting midfielders who can both retain \
                 possession and play incisive forward passes. This ensures tactical flexibility \
                 depending on the match situation."
            }
        };

        let defensive = match defensive {
            DefensiveApproach::HighPress => {
                "The high press defensive approach influenced CB pairings toward faster, more agile \
                 defenders who can cover the space behind a high defensive line. Fullbacks with \
                 stamina and recovery pace were essential to support the pressing system."
            }
            DefensiveApproach::DeepBlock => {
                "The deep block defensive approach prioritized physically dominant center-backs with \
                 strong aerial ability and positioning. Defenders with high defensive stats were \
                 favored over pace, as the low block reduces the need for recovery runs."
            }
            DefensiveApproach::Aggressive => {
                "An aggressive defensive approach required defenders comfortable with man-marking and \
                 physical duels. Center-backs with high physical and defending stats were paired to \
                 dominate aerial challenges and ground duels."
            }
            DefensiveApproach::Balanced => {
                "A balanced defensive approach was used, selecting defenders who can adapt between \
                 holding a line and pressing. This provides stability without committing to an \
                 extreme defensive posture."
            }
        };

        let budget = match budget {
            Some(budget) => format!(
                "Budget constraints of €{}M required trade-offs: premium selections were reserved for \
                 key positions (goalkeeper, central midfield, striker), while value picks were used at \
                 fullback and wide positions. Overall squad depth was maintained without exceeding the cap.",
                budget
            ),
            None => "With no budget constraint enforced, selections focused purely on player quality \
                     and tactical fit, resulting in the strongest possible squad composition."
                .to_string(),
        };

        let limitations = "Limitations: The current squad builder uses a simplified matching \
                           algorithm. In a production system, chemistry links between players from \
                           the same club or nation would further optimize the selection. Some \
                           positions may show sub-optimal fits due to the limited player pool.";

        [
            formation.as_str(),
            build_up,
            defensive,
            budget.as_str(),
            limitations,
        ]
        .join("\n\n")
    }

    pub fn confirmation(
        tactics: &Tactics,
        build_up: BuildUpStyle,
        budget: Option<f64>,
        player_count: usize,
        total_price: f64,
    ) -> String {
        let budget = budget
            .map(|budget| format!(" within €{}M budget", budget))
            .unwrap_or_default();

        format!(
            "Built a {} {} squad. {} players selected{}. Total cost: €{}M.",
            tactics.tactic_type,
            build_up.display_name().to_lowercase(),
            player_count,
            budget,
            total_price
        )
    }

    /// Why a player earned their slot.
    pub fn selection(player: &Player, position: PlayerPositionType, tactics: &Tactics) -> String {
        let stats = &player.stats;

        let ability = if stats.pace > ELITE_ATTRIBUTE {
            "pace"
        } else if stats.defending > ELITE_ATTRIBUTE {
            "defensive"
        } else {
            "technical"
        };

        let mut reasons = vec![
            format!("Selected for elite {} ability and tactical versatility.", ability),
            format!(
                "Fills the {} requirement under {} formation.",
                position, tactics.tactic_type
            ),
            format!(
                "Budget cost: €{}M. Strong value for rating {}.",
                player.price, player.rating
            ),
        ];

        if stats.passing > ELITE_ATTRIBUTE {
            reasons.push("Exceptional playmaking and set-piece delivery.".to_string());
        }
        if stats.shooting > ELITE_ATTRIBUTE {
            reasons.push("Clinical finishing and goal-scoring threat.".to_string());
        }
        if stats.physical > ELITE_ATTRIBUTE {
            reasons.push("Dominant aerial presence and physicality.".to_string());
        }

        reasons.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::squad::fixtures::reference_player;
    use crate::MatchTacticType;

    #[test]
    fn explain_has_five_paragraphs() {
        let text = StrategyReasoning::explain(
            &Tactics::new(MatchTacticType::T4231),
            BuildUpStyle::ShortPassing,
            DefensiveApproach::HighPress,
            None,
        );

        let paragraphs: Vec<&str> = text.split("\n\n").collect();

        assert_eq!(paragraphs.len(), 5);
        assert!(paragraphs[0].starts_with("The 4-2-3-1 formation was selected"));
        assert!(paragraphs[1].starts_with("The short passing build-up style"));
        assert!(paragraphs[2].starts_with("The high press defensive approach"));
        assert!(paragraphs[3].starts_with("With no budget constraint enforced"));
        assert!(paragraphs[4].starts_with("Limitations:"));
        assert!(!text.contains("  "));
    }

    #[test]
    fn explain_mentions_budget_when_enabled() {
        let text = StrategyReasoning::explain(
            &Tactics::default(),
            BuildUpStyle::Balanced,
            DefensiveApproach::DeepBlock,
            Some(350.0),
        );

        assert!(text.contains("Budget constraints of €350M required trade-offs"));
        assert!(text.contains("The deep block defensive approach"));
    }

    #[test]
    fn confirmation_message() {
        let tactics = Tactics::default();

        assert_eq!(
            StrategyReasoning::confirmation(&tactics, BuildUpStyle::CounterAttack, None, 23, 1700.0),
            "Built a 4-3-3 counter-attack squad. 23 players selected. Total cost: €1700M."
        );
        assert_eq!(
            StrategyReasoning::confirmation(&tactics, BuildUpStyle::Balanced, Some(500.0), 11, 812.5),
            "Built a 4-3-3 balanced squad. 11 players selected within €500M budget. Total cost: €812.5M."
        );
    }

    #[test]
    fn selection_lists_standout_attributes() {
        // De Bruyne: pace 76, defending 64, passing 93, shooting 86
        let text = StrategyReasoning::selection(
            &reference_player("3"),
            PlayerPositionType::AttackingMidfielderCenter,
            &Tactics::new(MatchTacticType::T352),
        );

        assert_eq!(
            text,
            "Selected for elite technical ability and tactical versatility. \
             Fills the CAM requirement under 3-5-2 formation. \
             Budget cost: €85M. Strong value for rating 91. \
             Exceptional playmaking and set-piece delivery. \
             Clinical finishing and goal-scoring threat."
        );
    }

    #[test]
    fn selection_prefers_pace_then_defending() {
        let tactics = Tactics::default();

        let davies = StrategyReasoning::selection(&reference_player("13"), PlayerPositionType::DefenderLeft, &tactics);
        let dias = StrategyReasoning::selection(&reference_player("15"), PlayerPositionType::DefenderCenter, &tactics);

        assert!(davies.starts_with("Selected for elite pace ability"));
        assert!(dias.starts_with("Selected for elite defensive ability"));
    }
}
