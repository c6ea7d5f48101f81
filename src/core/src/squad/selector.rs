use crate::squad::{FormationSlot, SelectionPolicy};
use crate::{Player, SquadResult, Tactics};
use log::{debug, warn};

pub struct SquadSelector;

/// Filled starting slots plus the players nobody took.
#[derive(Debug, Clone)]
pub struct AssemblyResult {
    pub slots: Vec<FormationSlot>,
    pub remaining: Vec<Player>,
}

impl AssemblyResult {
    pub fn filled_count(&self) -> usize {
        self.slots.iter().filter(|s| !s.is_empty()).count()
    }
}

impl SquadSelector {
    pub fn assemble_formation<P: SelectionPolicy + ?Sized>(
        formation: &str,
        pool: Vec<Player>,
        policy: &mut P,
    ) -> SquadResult<AssemblyResult> {
        let tactics = Tactics::from_name(formation)?;

        Ok(Self::assemble(&tactics, pool, policy))
    }

    /// Fills the formation's slots left to right from `pool`.
    ///
    /// Every slot draws from what is still in the working pool; a chosen
    /// player is removed before the next slot is considered. A slot with no
    /// player of its group stays empty.
    pub fn assemble<P: SelectionPolicy + ?Sized>(
        tactics: &Tactics,
        pool: Vec<Player>,
        policy: &mut P,
    ) -> AssemblyResult {
        let mut working_pool = pool;
        let mut slots = tactics.template();

        debug!(
            "Formation: {} requires positions: {:?}",
            tactics.tactic_type,
            tactics.positions()
        );

        for slot in slots.iter_mut() {
            let candidate_indexes: Vec<usize> = working_pool
                .iter()
                .enumerate()
                .filter(|(_, p)| slot.accepts(p))
                .map(|(idx, _)| idx)
                .collect();

            if candidate_indexes.is_empty() {
                warn!("No suitable player found for position: {}", slot.position);
                continue;
            }

            let candidates: Vec<&Player> = candidate_indexes
                .iter()
                .map(|&idx| &working_pool[idx])
                .collect();

            let Some(pool_idx) = policy
                .choose(slot, &candidates)
                .and_then(|pick| candidate_indexes.get(pick).copied())
            else {
                warn!("Selection policy left {} slot empty", slot.position);
                continue;
            };

            let player = working_pool.remove(pool_idx);

            debug!("Selected {} for position {}", player, slot.position);

            slot.player = Some(player);
        }

        AssemblyResult {
            slots,
            remaining: working_pool,
        }
    }
}
