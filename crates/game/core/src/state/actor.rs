//! Actors and the equipment they reference.
//!
//! Actors point at their weapon and armor by [`ItemId`]; the records themselves
//! are owned by the rules engine and resolved through
//! [`RulesOracle`](crate::env::RulesOracle).

use super::{ActorId, ItemId, ResourceMeter};

/// A combatant as exposed by the engine's `actorsById` table.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Actor {
    pub id: ActorId,
    pub name: String,
    pub hit_points: ResourceMeter,
    pub fatigue: ResourceMeter,
    #[cfg_attr(feature = "serde", serde(default))]
    pub weapon: Option<ItemId>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub armor: Option<ItemId>,
}

impl Actor {
    pub fn new(id: ActorId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            hit_points: ResourceMeter::default(),
            fatigue: ResourceMeter::default(),
            weapon: None,
            armor: None,
        }
    }

    pub fn with_hit_points(mut self, hit_points: ResourceMeter) -> Self {
        self.hit_points = hit_points;
        self
    }

    pub fn with_fatigue(mut self, fatigue: ResourceMeter) -> Self {
        self.fatigue = fatigue;
        self
    }

    pub fn with_weapon(mut self, weapon: impl Into<ItemId>) -> Self {
        self.weapon = Some(weapon.into());
        self
    }

    pub fn with_armor(mut self, armor: impl Into<ItemId>) -> Self {
        self.armor = Some(armor.into());
        self
    }
}

/// Broad weapon family.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum WeaponKind {
    Melee,
    Ranged,
}

/// Declared distance thresholds of a ranged weapon. `short < long`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RangeBands {
    pub short: u32,
    pub long: u32,
}

/// Weapon descriptor used by the range classifier.
///
/// `range` is only meaningful for [`WeaponKind::Ranged`]; a melee weapon that
/// carries bands is still treated as melee.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Weapon {
    pub kind: WeaponKind,
    #[cfg_attr(feature = "serde", serde(default))]
    pub range: Option<RangeBands>,
}

impl Weapon {
    pub const fn melee() -> Self {
        Self {
            kind: WeaponKind::Melee,
            range: None,
        }
    }

    pub const fn ranged(short: u32, long: u32) -> Self {
        Self {
            kind: WeaponKind::Ranged,
            range: Some(RangeBands { short, long }),
        }
    }

    /// Range bands of a ranged weapon; `None` for melee weapons.
    pub fn bands(&self) -> Option<RangeBands> {
        match self.kind {
            WeaponKind::Ranged => self.range,
            WeaponKind::Melee => None,
        }
    }
}

/// Result of the engine's weapon lookup for an actor.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EquippedWeapon {
    pub name: String,
    pub weapon: Weapon,
}

impl EquippedWeapon {
    pub fn new(name: impl Into<String>, weapon: Weapon) -> Self {
        Self {
            name: name.into(),
            weapon,
        }
    }
}

/// Result of the engine's armor lookup for an actor.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EquippedArmor {
    pub name: String,
    pub soak: u32,
}

impl EquippedArmor {
    pub fn new(name: impl Into<String>, soak: u32) -> Self {
        Self {
            name: name.into(),
            soak,
        }
    }
}
