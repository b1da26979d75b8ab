use std::collections::BTreeMap;

use super::{Actor, ActorId, ChoiceId, CombatSession};

/// Engine save snapshot, as far as this crate reads it.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameSave {
    /// The actor controlled by the local player.
    pub player_id: ActorId,
    #[cfg_attr(feature = "serde", serde(default))]
    pub runtime: RuntimeState,
    #[cfg_attr(feature = "serde", serde(default))]
    pub actors_by_id: BTreeMap<ActorId, Actor>,
}

impl GameSave {
    pub fn new(player_id: ActorId) -> Self {
        Self {
            player_id,
            runtime: RuntimeState::default(),
            actors_by_id: BTreeMap::new(),
        }
    }

    pub fn with_actor(mut self, actor: Actor) -> Self {
        self.actors_by_id.insert(actor.id.clone(), actor);
        self
    }

    pub fn with_combat(mut self, combat: CombatSession) -> Self {
        self.runtime.combat = Some(combat);
        self
    }

    pub fn with_last_check(mut self, check: CheckRecord) -> Self {
        self.runtime.last_check = Some(check);
        self
    }

    pub fn actor(&self, id: &ActorId) -> Option<&Actor> {
        self.actors_by_id.get(id)
    }

    pub fn player(&self) -> Option<&Actor> {
        self.actor(&self.player_id)
    }

    pub fn combat(&self) -> Option<&CombatSession> {
        self.runtime.combat.as_ref()
    }

    /// Combat session only while it is active.
    pub fn active_combat(&self) -> Option<&CombatSession> {
        self.combat().filter(|combat| combat.active)
    }
}

/// Mutable-by-engine runtime section of a save.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RuntimeState {
    #[cfg_attr(feature = "serde", serde(default))]
    pub combat: Option<CombatSession>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub last_check: Option<CheckRecord>,
}

/// Diagnostic trail of the most recently resolved check.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CheckRecord {
    pub choice_id: ChoiceId,
    /// Raw `namespace:key=value` annotations in emission order.
    #[cfg_attr(feature = "serde", serde(default))]
    pub tags: Vec<String>,
}

impl CheckRecord {
    pub fn new<I, S>(choice_id: impl Into<ChoiceId>, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            choice_id: choice_id.into(),
            tags: tags.into_iter().map(Into::into).collect(),
        }
    }
}
