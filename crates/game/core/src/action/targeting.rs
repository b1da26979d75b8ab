//! Distance and range-band eligibility.
//!
//! Two pure steps feed the legality resolver:
//! - [`distance`]: Chebyshev distance between two optional positions
//! - [`check_range`] / [`classify`]: which attack categories the equipped
//!   weapon can reach at that distance
//!
//! An unknown distance (no combat, missing position) makes every
//! range-dependent category ineligible.

use bitflags::bitflags;

use crate::config::RulesConfig;
use crate::state::{GridPosition, Weapon};

/// Chebyshev distance between two combatants, or `None` if either position is unknown.
pub fn distance(from: Option<GridPosition>, to: Option<GridPosition>) -> Option<u32> {
    Some(from?.chebyshev(to?))
}

/// Attack families distinguished by the range classifier.
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
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum AttackCategory {
    /// Adjacent strike.
    Melee,
    /// Standard shot beyond melee reach.
    RangedLong,
    /// Called shot.
    RangedShort,
}

impl AttackCategory {
    pub const ALL: [AttackCategory; 3] = [
        AttackCategory::Melee,
        AttackCategory::RangedLong,
        AttackCategory::RangedShort,
    ];

    /// Category implied by a well-known attack choice id.
    ///
    /// Used when the engine's `CombatAttack` check names no category: the
    /// standard shot and the called shot are ranged, anything else is melee.
    pub fn from_choice_id(id: &str) -> Self {
        match id {
            RulesConfig::RANGED_ATTACK_CHOICE_ID => AttackCategory::RangedLong,
            RulesConfig::CALLED_SHOT_CHOICE_ID => AttackCategory::RangedShort,
            _ => AttackCategory::Melee,
        }
    }

    pub fn is_ranged(self) -> bool {
        !matches!(self, AttackCategory::Melee)
    }

    fn flag(self) -> RangeEligibility {
        match self {
            AttackCategory::Melee => RangeEligibility::MELEE,
            AttackCategory::RangedLong => RangeEligibility::RANGED_LONG,
            AttackCategory::RangedShort => RangeEligibility::RANGED_SHORT,
        }
    }
}

bitflags! {
    /// Attack categories reachable with the current weapon at the current distance.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct RangeEligibility: u8 {
        const MELEE        = 1 << 0;
        const RANGED_LONG  = 1 << 1;
        const RANGED_SHORT = 1 << 2;
    }
}

impl RangeEligibility {
    pub fn allows(self, category: AttackCategory) -> bool {
        self.contains(category.flag())
    }
}

/// Why an attack category is out of reach.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum RangeBlock {
    /// Melee needs a known distance within reach.
    #[error("target is not within melee reach")]
    RequiresMeleeRange,

    /// Ranged categories need a ranged weapon equipped.
    #[error("no ranged weapon equipped")]
    RequiresRangedWeapon,

    /// Ranged target is unknown, too close, or beyond the ceiling.
    #[error("target is outside the weapon's range band")]
    OutOfRange,
}

/// Checks a single attack category.
///
/// - Melee: distance known and `<= melee_reach`, whatever the weapon.
/// - Ranged (long or called shot): a ranged weapon first, then
///   `melee_reach < distance <= ceiling`.
///
/// The called-shot ceiling is the long band unless
/// [`RulesConfig::called_shot_uses_short_band`] is set.
pub fn check_range(
    weapon: Option<&Weapon>,
    distance: Option<u32>,
    category: AttackCategory,
    rules: &RulesConfig,
) -> Result<(), RangeBlock> {
    if category == AttackCategory::Melee {
        return match distance {
            Some(d) if d <= rules.melee_reach => Ok(()),
            _ => Err(RangeBlock::RequiresMeleeRange),
        };
    }

    let bands = weapon
        .and_then(Weapon::bands)
        .ok_or(RangeBlock::RequiresRangedWeapon)?;

    let ceiling = match category {
        AttackCategory::RangedShort if rules.called_shot_uses_short_band => bands.short,
        _ => bands.long,
    };

    match distance {
        Some(d) if d > rules.melee_reach && d <= ceiling => Ok(()),
        _ => Err(RangeBlock::OutOfRange),
    }
}

/// Eligibility flags for every attack category at once.
pub fn classify(
    weapon: Option<&Weapon>,
    distance: Option<u32>,
    rules: &RulesConfig,
) -> RangeEligibility {
    AttackCategory::ALL
        .into_iter()
        .filter(|&category| check_range(weapon, distance, category, rules).is_ok())
        .fold(RangeEligibility::empty(), |flags, category| {
            flags | category.flag()
        })
}
