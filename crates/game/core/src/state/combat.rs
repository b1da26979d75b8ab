use std::collections::{BTreeMap, BTreeSet};

use super::{ActorId, GridPosition, SessionError};

/// A combatant's defensive posture. Read here, resolved by the rules engine.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Stance {
    #[default]
    Normal,
    Defend,
}

/// Per-turn bookkeeping for the combatant currently acting.
///
/// The engine resets `move_remaining` and `action_available` at turn start;
/// within a turn both only ever decrease.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnState {
    /// The entity currently taking their turn.
    pub active_actor_id: ActorId,
    pub has_moved: bool,
    pub has_attacked: bool,
    /// Tiles of movement left this turn.
    pub move_remaining: u32,
    /// False once the single per-turn action has been consumed.
    pub action_available: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    pub stance: Stance,
}

impl TurnState {
    /// Fresh turn for `actor` with the given movement budget.
    pub fn start(actor: ActorId, movement: u32) -> Self {
        Self {
            active_actor_id: actor,
            has_moved: false,
            has_attacked: false,
            move_remaining: movement,
            action_available: true,
            stance: Stance::Normal,
        }
    }
}

/// Engine-owned combat encounter (`runtime.combat`).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatSession {
    pub active: bool,
    /// Starts at 1.
    pub round: u32,
    /// Initiative order; ids are unique.
    pub participants: Vec<ActorId>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub positions: BTreeMap<ActorId, GridPosition>,
    pub turn: TurnState,
}

impl CombatSession {
    /// The turn holder, if combat is active and the holder is a participant.
    pub fn current_actor(&self) -> Option<&ActorId> {
        if !self.active {
            return None;
        }
        let holder = &self.turn.active_actor_id;
        self.participants.iter().find(|id| *id == holder)
    }

    /// Whether `actor` holds the current turn of an active combat.
    pub fn is_turn_of(&self, actor: &ActorId) -> bool {
        self.current_actor() == Some(actor)
    }

    pub fn position_of(&self, actor: &ActorId) -> Option<GridPosition> {
        self.positions.get(actor).copied()
    }

    /// First participant in initiative order that is not `actor`.
    pub fn opponent_of(&self, actor: &ActorId) -> Option<&ActorId> {
        self.participants.iter().find(|id| *id != actor)
    }

    /// Checks the documented session invariants.
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant.
    pub fn validate(&self) -> Result<(), SessionError> {
        if self.round == 0 {
            return Err(SessionError::RoundNotStarted);
        }

        let mut seen = BTreeSet::new();
        for id in &self.participants {
            if !seen.insert(id) {
                return Err(SessionError::DuplicateParticipant(id.clone()));
            }
        }

        if self.active && self.current_actor().is_none() {
            return Err(SessionError::TurnHolderNotParticipant(
                self.turn.active_actor_id.clone(),
            ));
        }

        for id in &self.participants {
            if !self.positions.contains_key(id) {
                return Err(SessionError::MissingPosition(id.clone()));
            }
        }

        for id in self.positions.keys() {
            if !seen.contains(id) {
                return Err(SessionError::PositionForUnknownActor(id.clone()));
            }
        }

        Ok(())
    }
}
