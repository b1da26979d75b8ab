//! Per-choice legality with a single explaining reason.
//!
//! ## Reason precedence
//!
//! Only the highest-precedence applicable reason is reported:
//! 1. [`ReasonCode::NotYourTurn`] for combat-scoped choices when combat is
//!    inactive or another combatant holds the turn
//! 2. Turn economy: [`ReasonCode::NoMovementLeft`] for movement,
//!    [`ReasonCode::ActionSpent`] for attacks
//! 3. Range: [`ReasonCode::RequiresRangedWeapon`], [`ReasonCode::OutOfRange`]
//!    or [`ReasonCode::RequiresMeleeRange`] for attacks
//!
//! Choices no rule recognises stay available; the engine remains the
//! authority on whether they are valid.

use tracing::{debug, trace};

use super::{Choice, ChoiceCategory, ChoiceId, RangeBlock, TurnEconomyView, check_range, distance};
use crate::config::RulesConfig;
use crate::env::RulesOracle;
use crate::state::{GameSave, Weapon};

/// Why a choice is currently unavailable.
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
#[strum(serialize_all = "snake_case")]
pub enum ReasonCode {
    NotYourTurn,
    NoMovementLeft,
    ActionSpent,
    OutOfRange,
    RequiresMeleeRange,
    RequiresRangedWeapon,
}

impl From<RangeBlock> for ReasonCode {
    fn from(block: RangeBlock) -> Self {
        match block {
            RangeBlock::RequiresMeleeRange => ReasonCode::RequiresMeleeRange,
            RangeBlock::RequiresRangedWeapon => ReasonCode::RequiresRangedWeapon,
            RangeBlock::OutOfRange => ReasonCode::OutOfRange,
        }
    }
}

/// Legality verdict for one choice. One entry per input choice, same order.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActionLegality {
    pub choice_id: ChoiceId,
    pub available: bool,
    pub reason: Option<ReasonCode>,
}

impl ActionLegality {
    fn from_verdict(choice_id: ChoiceId, verdict: Result<(), ReasonCode>) -> Self {
        match verdict {
            Ok(()) => Self {
                choice_id,
                available: true,
                reason: None,
            },
            Err(reason) => Self {
                choice_id,
                available: false,
                reason: Some(reason),
            },
        }
    }
}

/// Everything the resolver reads besides the choices themselves.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct LegalityContext {
    /// Combat is active and the player holds the turn.
    pub player_turn: bool,
    pub economy: Option<TurnEconomyView>,
    /// The player's equipped weapon, if the lookup found one.
    pub weapon: Option<Weapon>,
    /// Distance from the player to the opponent.
    pub distance: Option<u32>,
    pub rules: RulesConfig,
}

impl LegalityContext {
    /// Derives the context for `save.player_id` from a save and the engine lookups.
    ///
    /// Missing combat, positions, actor records or equipment are absorbed:
    /// they surface as `None` fields, never as errors.
    pub fn for_player<O>(save: &GameSave, oracle: &O, rules: &RulesConfig) -> Self
    where
        O: RulesOracle + ?Sized,
    {
        let player = &save.player_id;
        let combat = save.active_combat();

        let weapon = match save.player() {
            Some(actor) => oracle.actor_weapon(save, actor).map(|equipped| equipped.weapon),
            None => {
                debug!(%player, "player actor record missing; treating as unarmed");
                None
            }
        };

        let distance = combat.and_then(|combat| {
            let opponent = combat.opponent_of(player)?;
            let measured = distance(combat.position_of(player), combat.position_of(opponent));
            if measured.is_none() {
                debug!(%player, %opponent, "position unknown; range-gated choices blocked");
            }
            measured
        });

        Self {
            player_turn: combat.is_some_and(|combat| combat.is_turn_of(player)),
            economy: combat.and_then(TurnEconomyView::from_session),
            weapon,
            distance,
            rules: rules.clone(),
        }
    }

    fn verdict(&self, choice: &Choice) -> Result<(), ReasonCode> {
        if choice.is_combat_scoped() && !self.player_turn {
            return Err(ReasonCode::NotYourTurn);
        }

        match choice.category() {
            ChoiceCategory::Movement(_) => {
                if self.economy.as_ref().is_some_and(|economy| !economy.can_move()) {
                    return Err(ReasonCode::NoMovementLeft);
                }
                Ok(())
            }
            ChoiceCategory::Attack(category) => {
                if self.economy.as_ref().is_some_and(|economy| !economy.can_act()) {
                    return Err(ReasonCode::ActionSpent);
                }
                check_range(self.weapon.as_ref(), self.distance, category, &self.rules)
                    .map_err(ReasonCode::from)
            }
            ChoiceCategory::Other => Ok(()),
        }
    }
}

/// Resolves every choice against `ctx`, preserving input order.
///
/// Deterministic: identical inputs always yield identical output.
pub fn resolve(choices: &[Choice], ctx: &LegalityContext) -> Vec<ActionLegality> {
    choices
        .iter()
        .map(|choice| {
            let verdict = ctx.verdict(choice);
            trace!(choice = %choice.id, ?verdict, "resolved choice legality");
            ActionLegality::from_verdict(choice.id.clone(), verdict)
        })
        .collect()
}

/// Lists the engine's choices for `save` and resolves them for the player.
pub fn resolve_for_player<O>(
    save: &GameSave,
    oracle: &O,
    rules: &RulesConfig,
) -> Vec<ActionLegality>
where
    O: RulesOracle + ?Sized,
{
    let ctx = LegalityContext::for_player(save, oracle, rules);
    resolve(&oracle.available_choices(save), &ctx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::{AttackCategory, MoveDirection};
    use crate::state::Stance;

    fn economy() -> TurnEconomyView {
        TurnEconomyView {
            actor: "hero".into(),
            round: 1,
            move_remaining: 3,
            action_available: true,
            has_moved: false,
            has_attacked: false,
            stance: Stance::Normal,
        }
    }

    fn ctx(distance: Option<u32>, weapon: Option<Weapon>) -> LegalityContext {
        LegalityContext {
            player_turn: true,
            economy: Some(economy()),
            weapon,
            distance,
            rules: RulesConfig::default(),
        }
    }

    fn choices() -> Vec<Choice> {
        vec![
            Choice::movement(MoveDirection::N),
            Choice::attack("combat_attack_melee", "Strike", AttackCategory::Melee),
            Choice::attack("combat_attack_ranged", "Shoot", AttackCategory::RangedLong),
            Choice::attack("combat_called_shot", "Called Shot", AttackCategory::RangedShort),
            Choice::new("combat_defend", "Defend"),
            Choice::new("inspect_scroll", "Read the scroll"),
        ]
    }

    fn reasons(legality: &[ActionLegality]) -> Vec<Option<ReasonCode>> {
        legality.iter().map(|entry| entry.reason).collect()
    }

    #[test]
    fn output_matches_input_order() {
        let legality = resolve(&choices(), &ctx(Some(1), Some(Weapon::melee())));
        let ids: Vec<_> = legality.iter().map(|l| l.choice_id.as_str()).collect();
        assert_eq!(
            ids,
            [
                "combat_move_n",
                "combat_attack_melee",
                "combat_attack_ranged",
                "combat_called_shot",
                "combat_defend",
                "inspect_scroll",
            ]
        );
    }

    #[test]
    fn not_your_turn_wins_over_spent_action() {
        let mut ctx = ctx(Some(1), Some(Weapon::melee()));
        ctx.player_turn = false;
        if let Some(economy) = ctx.economy.as_mut() {
            economy.action_available = false;
            economy.has_attacked = true;
            economy.move_remaining = 0;
        }

        let legality = resolve(&choices(), &ctx);
        assert_eq!(
            reasons(&legality),
            [
                Some(ReasonCode::NotYourTurn),
                Some(ReasonCode::NotYourTurn),
                Some(ReasonCode::NotYourTurn),
                Some(ReasonCode::NotYourTurn),
                Some(ReasonCode::NotYourTurn),
                None,
            ]
        );
    }

    #[test]
    fn exhausted_movement_blocks_only_movement() {
        let mut ctx = ctx(Some(1), Some(Weapon::melee()));
        if let Some(economy) = ctx.economy.as_mut() {
            economy.move_remaining = 0;
            economy.has_moved = true;
        }

        let legality = resolve(&choices(), &ctx);
        assert_eq!(legality[0].reason, Some(ReasonCode::NoMovementLeft));
        assert!(legality[1].available);
    }

    #[test]
    fn spent_action_wins_over_range() {
        let mut ctx = ctx(Some(20), None);
        if let Some(economy) = ctx.economy.as_mut() {
            economy.has_attacked = true;
        }

        let legality = resolve(&choices(), &ctx);
        assert!(legality[0].available);
        assert_eq!(legality[1].reason, Some(ReasonCode::ActionSpent));
        assert_eq!(legality[2].reason, Some(ReasonCode::ActionSpent));
        assert_eq!(legality[3].reason, Some(ReasonCode::ActionSpent));
    }

    #[test]
    fn action_unavailable_also_spends_attacks() {
        let mut ctx = ctx(Some(1), Some(Weapon::melee()));
        if let Some(economy) = ctx.economy.as_mut() {
            economy.action_available = false;
        }
        let legality = resolve(&choices(), &ctx);
        assert_eq!(legality[1].reason, Some(ReasonCode::ActionSpent));
    }

    #[test]
    fn range_reasons_follow_failing_condition() {
        let bow = Some(Weapon::ranged(3, 8));

        let adjacent = resolve(&choices(), &ctx(Some(1), bow));
        assert_eq!(
            reasons(&adjacent)[1..4],
            [None, Some(ReasonCode::OutOfRange), Some(ReasonCode::OutOfRange)]
        );

        let mid = resolve(&choices(), &ctx(Some(5), bow));
        assert_eq!(
            reasons(&mid)[1..4],
            [Some(ReasonCode::RequiresMeleeRange), None, None]
        );

        let far = resolve(&choices(), &ctx(Some(9), bow));
        assert_eq!(
            reasons(&far)[1..4],
            [
                Some(ReasonCode::RequiresMeleeRange),
                Some(ReasonCode::OutOfRange),
                Some(ReasonCode::OutOfRange),
            ]
        );
    }

    #[test]
    fn no_ranged_weapon_blocks_ranged_at_any_distance() {
        for distance in [None, Some(1), Some(4), Some(40)] {
            for weapon in [None, Some(Weapon::melee())] {
                let legality = resolve(&choices(), &ctx(distance, weapon));
                assert_eq!(legality[2].reason, Some(ReasonCode::RequiresRangedWeapon));
                assert_eq!(legality[3].reason, Some(ReasonCode::RequiresRangedWeapon));
            }
        }
    }

    #[test]
    fn unknown_choices_are_always_available() {
        let legality = resolve(&choices(), &ctx(None, None));
        assert!(legality[4].available);
        assert!(legality[5].available);
        assert_eq!(legality[5].reason, None);
    }

    #[test]
    fn resolving_twice_yields_identical_output() {
        let ctx = ctx(Some(5), Some(Weapon::ranged(3, 8)));
        let choices = choices();
        assert_eq!(resolve(&choices, &ctx), resolve(&choices, &ctx));
    }

    #[test]
    fn reason_codes_render_as_snake_case() {
        assert_eq!(ReasonCode::NotYourTurn.to_string(), "not_your_turn");
        assert_eq!(ReasonCode::RequiresRangedWeapon.as_ref(), "requires_ranged_weapon");
    }
}
