//! View-model snapshots derived from a [`GameSave`].
//!
//! A [`CombatPanel`] is rebuilt from scratch for every save the engine hands
//! back. Gaps in the save (missing actor records, equipment or positions)
//! become display defaults here rather than errors.
use tactics_core::{
    ActorId, GameSave, GridPosition, LegalityContext, ReasonCode, ResourceMeter, RulesConfig,
    RulesOracle, Stance, TagBreakdown, TurnEconomyView, parse_tags, resolve,
};
use tracing::debug;

use crate::config::FrontendConfig;
use crate::format;

pub const UNKNOWN_ACTOR: &str = "Unknown";
pub const UNARMED: &str = "Unarmed";
pub const NO_ARMOR: &str = "None";

/// Everything a frontend needs to draw one combat turn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CombatPanel {
    /// Current round, or `None` outside combat.
    pub round: Option<u32>,
    pub turn: TurnSummary,
    pub player: CombatantCard,
    pub opponent: Option<CombatantCard>,
    pub distance: Option<u32>,
    pub economy: Option<TurnEconomyView>,
    pub actions: Vec<ActionRow>,
    pub debug: Option<TagBreakdown>,
}

impl CombatPanel {
    pub fn from_save<O>(
        save: &GameSave,
        oracle: &O,
        rules: &RulesConfig,
        config: &FrontendConfig,
    ) -> Self
    where
        O: RulesOracle + ?Sized,
    {
        let combat = save.active_combat();
        let ctx = LegalityContext::for_player(save, oracle, rules);

        let choices = oracle.available_choices(save);
        let actions = choices
            .iter()
            .zip(resolve(&choices, &ctx))
            .map(|(choice, legality)| ActionRow {
                id: legality.choice_id.to_string(),
                label: choice.label.clone(),
                available: legality.available,
                reason: legality.reason,
                hint: legality.reason.map(format::reason_text),
            })
            .filter(|row| config.show_unavailable || row.available)
            .collect();

        let opponent = combat
            .and_then(|combat| combat.opponent_of(&save.player_id))
            .map(|id| CombatantCard::build(save, oracle, id));

        let debug = if config.debug.show_tags {
            save.runtime
                .last_check
                .as_ref()
                .map(|check| parse_tags(&check.tags))
        } else {
            None
        };

        Self {
            round: combat.map(|combat| combat.round),
            turn: TurnSummary::from_save(save),
            player: CombatantCard::build(save, oracle, &save.player_id),
            opponent,
            distance: ctx.distance,
            economy: ctx.economy,
            actions,
            debug,
        }
    }

    pub fn is_in_combat(&self) -> bool {
        self.round.is_some()
    }

    pub fn available_actions(&self) -> impl Iterator<Item = &ActionRow> {
        self.actions.iter().filter(|row| row.available)
    }

    pub fn action(&self, id: &str) -> Option<&ActionRow> {
        self.actions.iter().find(|row| row.id == id)
    }
}

/// Who is acting and in what posture.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TurnSummary {
    pub active_actor: Option<ActorId>,
    pub active_name: Option<String>,
    pub is_player_turn: bool,
    pub stance: Option<Stance>,
}

impl TurnSummary {
    fn from_save(save: &GameSave) -> Self {
        let Some(combat) = save.active_combat() else {
            return Self {
                active_actor: None,
                active_name: None,
                is_player_turn: false,
                stance: None,
            };
        };

        let active_actor = combat.current_actor().cloned();
        let active_name = active_actor.as_ref().map(|id| {
            save.actor(id)
                .map_or_else(|| UNKNOWN_ACTOR.to_owned(), |actor| actor.name.clone())
        });

        Self {
            is_player_turn: combat.is_turn_of(&save.player_id),
            active_actor,
            active_name,
            stance: Some(combat.turn.stance),
        }
    }
}

/// One combatant's vitals and gear.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CombatantCard {
    pub id: ActorId,
    pub name: String,
    pub hit_points: ResourceMeter,
    pub fatigue: ResourceMeter,
    pub weapon_name: String,
    pub armor_name: String,
    pub soak: u32,
    pub position: Option<GridPosition>,
}

impl CombatantCard {
    fn build<O>(save: &GameSave, oracle: &O, id: &ActorId) -> Self
    where
        O: RulesOracle + ?Sized,
    {
        let position = save
            .active_combat()
            .and_then(|combat| combat.position_of(id));

        let Some(actor) = save.actor(id) else {
            debug!(actor = %id, "no actor record; rendering placeholder card");
            return Self {
                id: id.clone(),
                name: UNKNOWN_ACTOR.to_owned(),
                hit_points: ResourceMeter::default(),
                fatigue: ResourceMeter::default(),
                weapon_name: UNARMED.to_owned(),
                armor_name: NO_ARMOR.to_owned(),
                soak: 0,
                position,
            };
        };

        let weapon = oracle.actor_weapon(save, actor);
        let armor = oracle.actor_armor(save, actor);

        Self {
            id: id.clone(),
            name: actor.name.clone(),
            hit_points: actor.hit_points,
            fatigue: actor.fatigue,
            weapon_name: weapon.map_or_else(|| UNARMED.to_owned(), |equipped| equipped.name),
            soak: armor.as_ref().map_or(0, |equipped| equipped.soak),
            armor_name: armor.map_or_else(|| NO_ARMOR.to_owned(), |equipped| equipped.name),
            position,
        }
    }
}

/// A choice as the player sees it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActionRow {
    pub id: String,
    pub label: String,
    pub available: bool,
    pub reason: Option<ReasonCode>,
    /// Human text for `reason`.
    pub hint: Option<&'static str>,
}
