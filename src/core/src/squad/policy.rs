use crate::squad::FormationSlot;
use crate::Player;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Decides which of the eligible players fills a slot.
///
/// `candidates` is never empty and is in working-pool order. Returning
/// `None`, or an index out of range, leaves the slot empty.
pub trait SelectionPolicy {
    fn choose(&mut self, slot: &FormationSlot, candidates: &[&Player]) -> Option<usize>;
}

/// Uniform random choice among eligible players.
pub struct RandomSelection<R: Rng = StdRng> {
    rng: R,
}

impl<R: Rng> RandomSelection<R> {
    pub fn new(rng: R) -> Self {
        RandomSelection { rng }
    }
}

impl RandomSelection<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        RandomSelection::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_os_rng() -> Self {
        RandomSelection::new(StdRng::from_os_rng())
    }
}

impl Default for RandomSelection<StdRng> {
    fn default() -> Self {
        RandomSelection::from_os_rng()
    }
}

impl<R: Rng> SelectionPolicy for RandomSelection<R> {
    fn choose(&mut self, _slot: &FormationSlot, candidates: &[&Player]) -> Option<usize> {
        if candidates.is_empty() {
            return None;
        }

        Some(self.rng.random_range(0..candidates.len()))
    }
}

/// Highest rated eligible player; ties go to the earliest in the pool.
#[derive(Debug, Default, Clone, Copy)]
pub struct TopRatedSelection;

impl SelectionPolicy for TopRatedSelection {
    fn choose(&mut self, _slot: &FormationSlot, candidates: &[&Player]) -> Option<usize> {
        candidates
            .iter()
            .enumerate()
            .fold(None, |best: Option<(usize, f64)>, (idx, player)| match best {
                Some((_, rating)) if rating >= player.rating => best,
                _ => Some((idx, player.rating)),
            })
            .map(|(idx, _)| idx)
    }
}
