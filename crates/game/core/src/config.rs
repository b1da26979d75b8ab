/// Rules constants and tunable parameters consumed by the range classifier.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RulesConfig {
    /// Largest distance (in tiles) at which a melee attack connects.
    /// Ranged attacks need strictly more than this.
    pub melee_reach: u32,

    /// Bound the called shot by the weapon's short band instead of the long one.
    ///
    /// Off by default: observed engine behaviour reuses the long-range ceiling.
    pub called_shot_uses_short_band: bool,
}

impl RulesConfig {
    // ===== well-known choice id conventions =====
    /// Prefix shared by every combat-scoped choice id.
    pub const COMBAT_CHOICE_PREFIX: &'static str = "combat_";
    /// Prefix of the eight movement choices (`combat_move_<direction>`).
    pub const MOVE_CHOICE_PREFIX: &'static str = "combat_move_";
    /// Standard ranged attack.
    pub const RANGED_ATTACK_CHOICE_ID: &'static str = "combat_attack_ranged";
    /// Ranged attack at a chosen body part.
    pub const CALLED_SHOT_CHOICE_ID: &'static str = "combat_called_shot";

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_MELEE_REACH: u32 = 1;

    pub fn new() -> Self {
        Self {
            melee_reach: Self::DEFAULT_MELEE_REACH,
            called_shot_uses_short_band: false,
        }
    }

    pub fn with_melee_reach(melee_reach: u32) -> Self {
        Self {
            melee_reach,
            ..Self::new()
        }
    }

    /// Enables the short-band ceiling for called shots (builder pattern).
    #[must_use]
    pub fn with_short_band_called_shots(mut self) -> Self {
        self.called_shot_uses_short_band = true;
        self
    }
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self::new()
    }
}
