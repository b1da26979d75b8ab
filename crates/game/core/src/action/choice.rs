//! Engine-supplied candidate choices and their check metadata.

use super::{AttackCategory, MoveDirection};
use crate::config::RulesConfig;
pub use crate::state::ChoiceId;

/// One option offered by `listAvailableChoices`, in engine order.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Choice {
    pub id: ChoiceId,
    pub label: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub checks: Vec<Check>,
}

impl Choice {
    pub fn new(id: impl Into<ChoiceId>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            checks: Vec::new(),
        }
    }

    pub fn with_check(mut self, check: Check) -> Self {
        self.checks.push(check);
        self
    }

    /// Convenience constructor for an attack choice.
    pub fn attack(
        id: impl Into<ChoiceId>,
        label: impl Into<String>,
        category: AttackCategory,
    ) -> Self {
        Self::new(id, label).with_check(Check::CombatAttack {
            category: Some(category),
        })
    }

    /// Convenience constructor for the engine's movement choice.
    pub fn movement(direction: MoveDirection) -> Self {
        Self::new(direction.choice_id(), format!("Move {}", direction.as_ref().to_uppercase()))
    }

    /// Legality family of this choice.
    ///
    /// Movement is recognised by id; attacks by the first `CombatAttack` check.
    /// A check without a category falls back to the id convention.
    pub fn category(&self) -> ChoiceCategory {
        if let Some(direction) = MoveDirection::from_choice_id(self.id.as_str()) {
            return ChoiceCategory::Movement(direction);
        }

        self.checks
            .iter()
            .find_map(|check| match check {
                Check::CombatAttack { category } => Some(
                    category.unwrap_or_else(|| AttackCategory::from_choice_id(self.id.as_str())),
                ),
                _ => None,
            })
            .map_or(ChoiceCategory::Other, ChoiceCategory::Attack)
    }

    /// Whether turn ownership gates this choice.
    pub fn is_combat_scoped(&self) -> bool {
        !matches!(self.category(), ChoiceCategory::Other)
            || self
                .id
                .as_str()
                .starts_with(RulesConfig::COMBAT_CHOICE_PREFIX)
    }
}

/// Check metadata attached to a choice, tagged by `kind` on the wire.
///
/// Fields a kind does not use are ignored, and missing optional fields are
/// absorbed, so any engine check deserializes.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "WireCheck", into = "WireCheck"))]
pub enum Check {
    /// Marks an attack-category choice. `None` when the engine omits it.
    CombatAttack { category: Option<AttackCategory> },

    /// Skill test resolved by the engine; no legality rule reads it.
    Skill {
        skill: String,
        difficulty: Option<i32>,
    },

    /// Any kind this crate does not recognise, keyed by its `kind`.
    Other(String),
}

impl Check {
    pub const COMBAT_ATTACK: &'static str = "CombatAttack";
    pub const SKILL: &'static str = "Skill";

    pub fn kind(&self) -> &str {
        match self {
            Check::CombatAttack { .. } => Self::COMBAT_ATTACK,
            Check::Skill { .. } => Self::SKILL,
            Check::Other(kind) => kind,
        }
    }
}

/// Flat wire shape shared by every check kind.
///
/// Plain strings keep the shape readable by both JSON and RON; RON has no
/// string form for enum variants.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct WireCheck {
    kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    skill: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    difficulty: Option<i32>,
}

#[cfg(feature = "serde")]
impl From<WireCheck> for Check {
    fn from(wire: WireCheck) -> Self {
        match wire.kind.as_str() {
            Check::COMBAT_ATTACK => {
                let category = wire.category.and_then(|raw| {
                    let parsed = raw.parse().ok();
                    if parsed.is_none() {
                        tracing::debug!(category = %raw, "unknown attack category");
                    }
                    parsed
                });
                Check::CombatAttack { category }
            }
            Check::SKILL => Check::Skill {
                skill: wire.skill.unwrap_or_default(),
                difficulty: wire.difficulty,
            },
            _ => Check::Other(wire.kind),
        }
    }
}

#[cfg(feature = "serde")]
impl From<Check> for WireCheck {
    fn from(check: Check) -> Self {
        let kind = check.kind().to_owned();
        match check {
            Check::CombatAttack { category } => Self {
                kind,
                category: category.map(|category| category.to_string()),
                skill: None,
                difficulty: None,
            },
            Check::Skill { skill, difficulty } => Self {
                kind,
                category: None,
                skill: Some(skill),
                difficulty,
            },
            Check::Other(_) => Self {
                kind,
                category: None,
                skill: None,
                difficulty: None,
            },
        }
    }
}

/// Legality family derived from a [`Choice`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChoiceCategory {
    Movement(MoveDirection),
    Attack(AttackCategory),
    /// Unknown ids and check kinds; never narrowed by economy or range.
    Other,
}
