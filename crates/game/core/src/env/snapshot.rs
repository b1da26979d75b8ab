//! Oracle backed by captured engine data.
//!
//! A [`RulesSnapshot`] records what the engine answered for one save: the
//! choice list and the equipment catalog. Loaders and tests use it wherever a
//! live engine is not available.

use std::collections::BTreeMap;

use super::RulesOracle;
use crate::action::Choice;
use crate::state::{Actor, EquippedArmor, EquippedWeapon, GameSave, ItemId};

/// Serializable capture of engine lookups.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RulesSnapshot {
    #[cfg_attr(feature = "serde", serde(default))]
    pub choices: Vec<Choice>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub weapons: BTreeMap<ItemId, EquippedWeapon>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub armor: BTreeMap<ItemId, EquippedArmor>,
}

impl RulesSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_choice(mut self, choice: Choice) -> Self {
        self.choices.push(choice);
        self
    }

    pub fn with_weapon(mut self, id: impl Into<ItemId>, weapon: EquippedWeapon) -> Self {
        self.weapons.insert(id.into(), weapon);
        self
    }

    pub fn with_armor(mut self, id: impl Into<ItemId>, armor: EquippedArmor) -> Self {
        self.armor.insert(id.into(), armor);
        self
    }
}

impl RulesOracle for RulesSnapshot {
    fn available_choices(&self, _save: &GameSave) -> Vec<Choice> {
        self.choices.clone()
    }

    fn actor_weapon(&self, _save: &GameSave, actor: &Actor) -> Option<EquippedWeapon> {
        actor.weapon.as_ref().and_then(|id| self.weapons.get(id)).cloned()
    }

    fn actor_armor(&self, _save: &GameSave, actor: &Actor) -> Option<EquippedArmor> {
        actor.armor.as_ref().and_then(|id| self.armor.get(id)).cloned()
    }
}
