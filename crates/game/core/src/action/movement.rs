//! Eight-way movement directions and the `combat_move_<direction>` id scheme.

use core::str::FromStr;

use crate::config::RulesConfig;

/// Compass direction of a one-tile combat step.
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
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[strum(serialize_all = "lowercase")]
pub enum MoveDirection {
    N,
    Ne,
    E,
    Se,
    S,
    Sw,
    W,
    Nw,
}

impl MoveDirection {
    /// Clockwise from north.
    pub const ALL: [MoveDirection; 8] = [
        MoveDirection::N,
        MoveDirection::Ne,
        MoveDirection::E,
        MoveDirection::Se,
        MoveDirection::S,
        MoveDirection::Sw,
        MoveDirection::W,
        MoveDirection::Nw,
    ];

    /// Parses a movement choice id such as `combat_move_sw`.
    ///
    /// Returns `None` for any other id, including unknown direction suffixes.
    pub fn from_choice_id(id: &str) -> Option<Self> {
        let suffix = id.strip_prefix(RulesConfig::MOVE_CHOICE_PREFIX)?;
        MoveDirection::from_str(suffix).ok()
    }

    /// The engine's choice id for a step in this direction.
    pub fn choice_id(self) -> String {
        format!("{}{}", RulesConfig::MOVE_CHOICE_PREFIX, self)
    }
}
