//! Read-only combat projections shared across clients.
//!
//! `tactics-core` derives, from an engine-owned [`GameSave`], a precise picture
//! of what the player may do right now: grid distance to the opponent, range
//! eligibility for the equipped weapon, the remaining turn economy, a legality
//! verdict with one explaining reason per candidate choice, and grouped
//! diagnostic tags from the last resolved check.
//!
//! Every entry point is a pure function of its inputs. Nothing here mutates a
//! save; new saves come only from the external rules engine.
pub mod action;
pub mod config;
pub mod diagnostics;
pub mod env;
pub mod error;
pub mod state;

pub use action::{
    ActionLegality, AttackCategory, Check, Choice, ChoiceCategory, ChoiceId, LegalityContext,
    MoveDirection, RangeBlock, RangeEligibility, ReasonCode, TurnEconomyView, check_range,
    classify, distance, resolve, resolve_for_player,
};
pub use config::RulesConfig;
pub use diagnostics::{
    TAG_FORMAT_VERSION, TagBreakdown, TagEntry, TagGroup, TagNamespace, parse_tags,
};
pub use env::{RulesOracle, RulesSnapshot};
pub use error::{ErrorSeverity, GameError};
pub use state::{
    Actor, ActorId, CheckRecord, CombatSession, EquippedArmor, EquippedWeapon, GameSave,
    GridPosition, ItemId, RangeBands, ResourceMeter, RuntimeState, SessionError, Stance,
    TurnState, Weapon, WeaponKind,
};
