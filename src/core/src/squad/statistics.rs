use crate::{Player, PlayerFieldPositionGroup, PlayerStats};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionCounts {
    pub gk: usize,
    pub def: usize,
    pub mid: usize,
    pub fwd: usize,
}

impl PositionCounts {
    pub fn add(&mut self, group: PlayerFieldPositionGroup) {
        match group {
            PlayerFieldPositionGroup::Goalkeeper => self.gk += 1,
            PlayerFieldPositionGroup::Defender => self.def += 1,
            PlayerFieldPositionGroup::Midfielder => self.mid += 1,
            PlayerFieldPositionGroup::Forward => self.fwd += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.gk + self.def + self.mid + self.fwd
    }
}

/// Summary numbers over a set of (possibly empty) slots.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SquadStatistics {
    pub avg_stats: PlayerStats,
    /// One decimal place.
    pub avg_rating: f64,
    pub total_price: f64,
    pub avg_height: u16,
    pub position_counts: PositionCounts,
    pub player_count: usize,
}

impl SquadStatistics {
    pub fn calculate<'p, I>(players: I) -> Self
    where
        I: IntoIterator<Item = Option<&'p Player>>,
    {
        let players: Vec<&Player> = players.into_iter().flatten().collect();

        if players.is_empty() {
            return SquadStatistics::default();
        }

        let count = players.len();

        let mut totals = [0u32; 6];
        let mut total_height = 0u32;
        let mut position_counts = PositionCounts::default();

        for player in &players {
            let stats = &player.stats;
            for (total, value) in totals.iter_mut().zip([
                stats.pace,
                stats.shooting,
                stats.passing,
                stats.dribbling,
                stats.defending,
                stats.physical,
            ]) {
                *total += value as u32;
            }

            total_height += player.height as u32;
            position_counts.add(player.position_group());
        }

        let [pace, shooting, passing, dribbling, defending, physical] =
            totals.map(|total| rounded_mean(total as f64, count) as u8);

        let ratings: Vec<f64> = players.iter().map(|p| p.rating).collect();
        let prices: Vec<f64> = players.iter().map(|p| p.price).collect();

        let avg_rating = (ordered_sum(ratings) / count as f64 * 10.0).round() / 10.0;

        SquadStatistics {
            avg_stats: PlayerStats::new(pace, shooting, passing, dribbling, defending, physical),
            avg_rating,
            total_price: ordered_sum(prices),
            avg_height: rounded_mean(total_height as f64, count) as u16,
            position_counts,
            player_count: count,
        }
    }
}

fn rounded_mean(total: f64, count: usize) -> f64 {
    (total / count as f64).round()
}

// Summed in ascending order so the result doesn't depend on squad order.
fn ordered_sum(mut values: Vec<f64>) -> f64 {
    values.sort_by(f64::total_cmp);
    values.iter().sum()
}
