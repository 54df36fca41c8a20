//! Group registry.
//!
//! Owns every live group, keyed by name, and remembers creation order so the
//! joinable list is stable.

use std::collections::HashMap;

use super::{
    Board, BingoNumber, DepartureEffect, GameError, Group, GroupName, GroupStatus, MarkOutcome,
    PlayerId, Timestamp,
};

/// Result of a successful mark
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellMarked {
    pub number: BingoNumber,
    /// Members to notify, in turn order
    pub players: Vec<PlayerId>,
    pub outcome: MarkOutcome,
}

/// What happened to one group when a player left
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Departure {
    /// The group became empty and was removed
    GroupDeleted { group: GroupName },
    /// The group lives on with `remaining` players
    PlayerLeft {
        group: GroupName,
        remaining: Vec<PlayerId>,
        effect: DepartureEffect,
    },
}

impl Departure {
    /// Whether this departure can change the joinable list
    pub fn changes_joinable_groups(&self) -> bool {
        matches!(
            self,
            Departure::GroupDeleted { .. }
                | Departure::PlayerLeft {
                    effect: DepartureEffect::GameAborted,
                    ..
                }
        )
    }
}

/// All live groups
#[derive(Debug, Default)]
pub struct GroupRegistry {
    groups: HashMap<GroupName, Group>,
    creation_order: Vec<GroupName>,
}

impl GroupRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new waiting group with `creator` as its only member.
    pub fn create_group(
        &mut self,
        name: GroupName,
        creator: PlayerId,
        created_at: Timestamp,
    ) -> Result<(), GameError> {
        if self.groups.contains_key(&name) {
            return Err(GameError::AlreadyExists);
        }
        self.creation_order.push(name.clone());
        self.groups
            .insert(name.clone(), Group::new(name, creator, created_at));
        Ok(())
    }

    /// Add `player` to a waiting group and return the updated member list.
    pub fn join_group(
        &mut self,
        name: &GroupName,
        player: PlayerId,
    ) -> Result<Vec<PlayerId>, GameError> {
        let group = self.group_mut(name)?;
        group.add_player(player)?;
        Ok(group.players().to_vec())
    }

    /// Start the game, dealing each player a board from `deal`.
    ///
    /// Returns a snapshot of the started group.
    pub fn start_game<F>(
        &mut self,
        name: &GroupName,
        requester: &PlayerId,
        deal: F,
    ) -> Result<Group, GameError>
    where
        F: FnMut(&PlayerId) -> Board,
    {
        let group = self.group_mut(name)?;
        group.start(requester, deal)?;
        Ok(group.clone())
    }

    /// Mark a raw number on behalf of `requester`.
    ///
    /// The number is range-checked only after membership of the turn is
    /// established, so an out-of-turn request always reports `NotYourTurn`.
    pub fn mark_cell(
        &mut self,
        name: &GroupName,
        requester: &PlayerId,
        number: i64,
    ) -> Result<CellMarked, GameError> {
        let group = self.group_mut(name)?;
        if group.status() != GroupStatus::InProgress {
            return Err(GameError::GameNotStarted);
        }
        if !group.is_current_player(requester) {
            return Err(GameError::NotYourTurn);
        }
        let number =
            BingoNumber::new(number).map_err(|e| GameError::InvalidNumber(e.to_string()))?;

        let players = group.players().to_vec();
        let outcome = group.mark(requester, number)?;
        Ok(CellMarked {
            number,
            players,
            outcome,
        })
    }

    /// Return the group to Waiting and hand back the members to notify.
    pub fn reset_game(
        &mut self,
        name: &GroupName,
        requester: &PlayerId,
    ) -> Result<Vec<PlayerId>, GameError> {
        let group = self.group_mut(name)?;
        group.reset(requester)?;
        Ok(group.players().to_vec())
    }

    /// Remove `player` from every group it belongs to, deleting groups that
    /// become empty.
    pub fn remove_player(&mut self, player: &PlayerId) -> Vec<Departure> {
        let mut departures = Vec::new();
        let mut emptied = Vec::new();

        for name in &self.creation_order {
            let Some(group) = self.groups.get_mut(name) else {
                continue;
            };
            let Some(effect) = group.remove_player(player) else {
                continue;
            };
            if group.players().is_empty() {
                emptied.push(name.clone());
                departures.push(Departure::GroupDeleted {
                    group: name.clone(),
                });
            } else {
                departures.push(Departure::PlayerLeft {
                    group: name.clone(),
                    remaining: group.players().to_vec(),
                    effect,
                });
            }
        }

        for name in &emptied {
            self.groups.remove(name);
        }
        self.creation_order.retain(|name| !emptied.contains(name));

        departures
    }

    pub fn group(&self, name: &GroupName) -> Option<&Group> {
        self.groups.get(name)
    }

    /// Every group, in creation order.
    pub fn groups(&self) -> impl Iterator<Item = &Group> + '_ {
        self.creation_order
            .iter()
            .filter_map(|name| self.groups.get(name))
    }

    /// Names of the groups still accepting players, in creation order.
    pub fn joinable_groups(&self) -> Vec<GroupName> {
        self.groups()
            .filter(|group| group.is_joinable())
            .map(|group| group.name().clone())
            .collect()
    }

    fn group_mut(&mut self, name: &GroupName) -> Result<&mut Group, GameError> {
        self.groups.get_mut(name).ok_or(GameError::NotFound)
    }
}
