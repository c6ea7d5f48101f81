use crate::squad::{
    FormationSlot, MAX_SQUAD_GOALKEEPERS, ReplacementCandidate, ReplacementRanker, SlotLocation,
    SlotSource, SquadStatistics,
};
use crate::{
    MatchTacticType, Player, PlayerPositionType, PositionStatus, SquadConstraints, SquadError,
    SquadResult,
};
use log::debug;
use serde::Serialize;

/// Starting eleven plus substitutes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Squad {
    pub formation: MatchTacticType,
    pub pitch: Vec<FormationSlot>,
    pub bench: Vec<FormationSlot>,
    pub reserves: Vec<FormationSlot>,
}

impl Squad {
    pub fn new(
        formation: MatchTacticType,
        pitch: Vec<FormationSlot>,
        bench: Vec<FormationSlot>,
        reserves: Vec<FormationSlot>,
    ) -> Self {
        Squad {
            formation,
            pitch,
            bench,
            reserves,
        }
    }

    pub fn slots(&self, source: SlotSource) -> &[FormationSlot] {
        match source {
            SlotSource::Pitch => &self.pitch,
            SlotSource::Bench => &self.bench,
            SlotSource::Reserve => &self.reserves,
        }
    }

    fn slots_mut(&mut self, source: SlotSource) -> &mut Vec<FormationSlot> {
        match source {
            SlotSource::Pitch => &mut self.pitch,
            SlotSource::Bench => &mut self.bench,
            SlotSource::Reserve => &mut self.reserves,
        }
    }

    pub fn slot(&self, location: SlotLocation) -> Option<&FormationSlot> {
        self.slots(location.source).get(location.index)
    }

    /// Every slot's player in pitch, bench, reserves order.
    pub fn players(&self) -> impl Iterator<Item = Option<&Player>> {
        self.pitch
            .iter()
            .chain(self.bench.iter())
            .chain(self.reserves.iter())
            .map(|slot| slot.player.as_ref())
    }

    pub fn member_ids(&self) -> Vec<&str> {
        self.players().flatten().map(|p| p.id.as_str()).collect()
    }

    pub fn contains(&self, player_id: &str) -> bool {
        self.players().flatten().any(|p| p.id == player_id)
    }

    pub fn player_count(&self) -> usize {
        self.players().flatten().count()
    }

    pub fn goalkeeper_count(&self) -> usize {
        self.players().flatten().filter(|p| p.is_goalkeeper()).count()
    }

    pub fn statistics(&self) -> SquadStatistics {
        SquadStatistics::calculate(self.players())
    }

    pub fn position_status(&self, constraints: &SquadConstraints) -> PositionStatus {
        constraints.evaluate(&self.statistics().position_counts)
    }

    /// Copy of the squad with `player` in the slot at `location`.
    pub fn with_replacement(&self, location: SlotLocation, player: Player) -> SquadResult<Squad> {
        let slot = self
            .slot(location)
            .ok_or(SquadError::SlotNotFound(location))?;

        self.check_assignment(location, slot.position, &player)?;

        debug!("Replacing {} slot {} with {}", location.source, location.index, player);

        let mut squad = self.clone();
        let slot = &mut squad.slots_mut(location.source)[location.index];
        slot.player = Some(player);
        slot.alternatives = None;

        Ok(squad)
    }

    /// Fills a slot picked by hand. Bench and reserves grow by one when
    /// `location.index` is their current length.
    pub fn with_selection(&self, location: SlotLocation, player: Player) -> SquadResult<Squad> {
        let slots = self.slots(location.source);

        if let Some(slot) = slots.get(location.index) {
            self.check_assignment(location, slot.position, &player)?;

            let mut squad = self.clone();
            let slot = &mut squad.slots_mut(location.source)[location.index];
            slot.player = Some(player);
            slot.alternatives = None;

            return Ok(squad);
        }

        let capacity = match location.source.capacity() {
            Some(capacity) if location.index == slots.len() => capacity,
            _ => return Err(SquadError::SlotNotFound(location)),
        };

        if slots.len() >= capacity {
            return Err(SquadError::SlotCapacityExceeded(location.source));
        }

        if self.contains(&player.id) {
            return Err(SquadError::DuplicatePlayer(player.id));
        }

        self.check_goalkeeper_limit(location, &player)?;

        debug!("Adding {} to {}", player, location.source);

        let mut squad = self.clone();
        squad
            .slots_mut(location.source)
            .push(FormationSlot::for_player(player));

        Ok(squad)
    }

    /// Ranked alternatives for the slot at `location`, skipping everyone
    /// already in the squad.
    pub fn replacement_candidates(
        &self,
        location: SlotLocation,
        pool: &[Player],
    ) -> SquadResult<Vec<ReplacementCandidate>> {
        let slot = self
            .slot(location)
            .ok_or(SquadError::SlotNotFound(location))?;

        let member_ids = self.member_ids();

        Ok(ReplacementRanker::rank(
            slot.position,
            slot.player_id().unwrap_or_default(),
            &member_ids,
            pool,
        ))
    }

    pub fn export(&self) -> SquadExport {
        fn entries(slots: &[FormationSlot]) -> Vec<Option<ExportedPlayer>> {
            slots
                .iter()
                .map(|slot| {
                    slot.player.as_ref().map(|p| ExportedPlayer {
                        name: p.name.clone(),
                        position: slot.position,
                    })
                })
                .collect()
        }

        let statistics = self.statistics();

        SquadExport {
            formation: self.formation,
            squad: entries(&self.pitch),
            bench: entries(&self.bench),
            reserves: entries(&self.reserves),
            rating: statistics.avg_rating,
            total_price: statistics.total_price,
        }
    }

    fn check_assignment(
        &self,
        location: SlotLocation,
        required: PlayerPositionType,
        player: &Player,
    ) -> SquadResult<()> {
        if !player.position.is_compatible_with(required) {
            return Err(SquadError::IneligiblePlayer {
                player_id: player.id.clone(),
                required,
            });
        }

        let held_elsewhere = [SlotSource::Pitch, SlotSource::Bench, SlotSource::Reserve]
            .into_iter()
            .flat_map(|source| {
                self.slots(source)
                    .iter()
                    .enumerate()
                    .map(move |(index, slot)| (SlotLocation::new(source, index), slot))
            })
            .any(|(at, slot)| at != location && slot.player_id() == Some(player.id.as_str()));

        if held_elsewhere {
            return Err(SquadError::DuplicatePlayer(player.id.clone()));
        }

        self.check_goalkeeper_limit(location, player)
    }

    /// Swapping one goalkeeper for another is always allowed, even in a
    /// squad already over the limit.
    fn check_goalkeeper_limit(&self, location: SlotLocation, player: &Player) -> SquadResult<()> {
        if !player.is_goalkeeper() {
            return Ok(());
        }

        let displaces_goalkeeper = self
            .slot(location)
            .and_then(|slot| slot.player.as_ref())
            .is_some_and(Player::is_goalkeeper);

        if !displaces_goalkeeper && self.goalkeeper_count() >= MAX_SQUAD_GOALKEEPERS {
            return Err(SquadError::GoalkeeperLimit(player.id.clone()));
        }

        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportedPlayer {
    pub name: String,
    pub position: PlayerPositionType,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SquadExport {
    pub formation: MatchTacticType,
    pub squad: Vec<Option<ExportedPlayer>>,
    pub bench: Vec<Option<ExportedPlayer>>,
    pub reserves: Vec<Option<ExportedPlayer>>,
    pub rating: f64,
    pub total_price: f64,
}
