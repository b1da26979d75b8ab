//! Traits describing the engine's read-only lookups.
//!
//! The rules engine is an external collaborator. This crate reads choices and
//! equipment through [`RulesOracle`] and never applies a choice itself.
mod snapshot;

pub use snapshot::RulesSnapshot;

use crate::action::Choice;
use crate::state::{Actor, EquippedArmor, EquippedWeapon, GameSave};

/// Read-only view of the rules engine.
///
/// Mirrors the engine's `listAvailableChoices`, `getActorWeapon` and
/// `getActorArmor`. Lookups return `None` when the record is missing; callers
/// substitute display defaults.
pub trait RulesOracle {
    /// Candidate choices for `save`, in engine order.
    fn available_choices(&self, save: &GameSave) -> Vec<Choice>;

    fn actor_weapon(&self, save: &GameSave, actor: &Actor) -> Option<EquippedWeapon>;

    fn actor_armor(&self, save: &GameSave, actor: &Actor) -> Option<EquippedArmor>;
}
