use crate::squad::{FormationSlot, BENCH_SIZE, MAX_SQUAD_GOALKEEPERS, RESERVE_SIZE};
use crate::Player;
use itertools::Itertools;
use log::{debug, warn};

pub struct BenchAllocator;

#[derive(Debug, Clone, Default)]
pub struct BenchAllocation {
    pub bench: Vec<FormationSlot>,
    pub reserves: Vec<FormationSlot>,
    /// Leftover players nobody picked, best rated first.
    pub unused: Vec<Player>,
    /// Goalkeeper cap was ignored to fill the bench.
    pub used_fallback: bool,
}

impl BenchAllocator {
    pub fn allocate(pitch: &[FormationSlot], remaining: Vec<Player>) -> BenchAllocation {
        const NEEDED: usize = BENCH_SIZE + RESERVE_SIZE;

        let pitch_goalkeepers = pitch
            .iter()
            .filter_map(|slot| slot.player.as_ref())
            .filter(|p| p.is_goalkeeper())
            .count();

        let max_extra_goalkeepers = MAX_SQUAD_GOALKEEPERS.saturating_sub(pitch_goalkeepers);

        let sorted: Vec<Player> = remaining
            .into_iter()
            .sorted_by(|a, b| b.rating.total_cmp(&a.rating))
            .collect();

        let mut taken = vec![false; sorted.len()];
        let mut selected_count = 0;
        let mut extra_goalkeepers = 0;

        for (idx, player) in sorted.iter().enumerate() {
            if selected_count == NEEDED {
                break;
            }

            if player.is_goalkeeper() {
                if extra_goalkeepers >= max_extra_goalkeepers {
                    continue;
                }
                extra_goalkeepers += 1;
            }

            taken[idx] = true;
            selected_count += 1;
        }

        let mut used_fallback = false;

        if selected_count < NEEDED {
            for (idx, flag) in taken.iter_mut().enumerate() {
                if selected_count == NEEDED {
                    break;
                }

                if !*flag {
                    *flag = true;
                    selected_count += 1;
                    used_fallback = true;

                    debug!("Fallback selection: {}", sorted[idx]);
                }
            }

            if used_fallback {
                warn!(
                    "Goalkeeper cap of {} ignored to fill the bench, squad will carry extra goalkeepers",
                    MAX_SQUAD_GOALKEEPERS
                );
            }
        }

        let (selected, unused): (Vec<(bool, Player)>, Vec<(bool, Player)>) = taken
            .into_iter()
            .zip(sorted)
            .partition(|(is_taken, _)| *is_taken);

        let mut selected = selected.into_iter().map(|(_, p)| FormationSlot::for_player(p));

        let bench: Vec<FormationSlot> = selected.by_ref().take(BENCH_SIZE).collect();
        let reserves: Vec<FormationSlot> = selected.take(RESERVE_SIZE).collect();

        debug!(
            "Bench: {} players, reserves: {} players",
            bench.len(),
            reserves.len()
        );

        BenchAllocation {
            bench,
            reserves,
            unused: unused.into_iter().map(|(_, p)| p).collect(),
            used_fallback,
        }
    }
}
