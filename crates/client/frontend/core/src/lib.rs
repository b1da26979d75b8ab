//! Cross-frontend primitives for presenting a combat turn.
//!
//! Houses configuration, text formatting and the view-model types that the
//! CLI and any future graphical client share. Everything here is derived from
//! a [`GameSave`](tactics_core::GameSave) and an engine
//! [`RulesOracle`](tactics_core::RulesOracle); nothing writes back.
pub mod config;
pub mod format;
pub mod view_model;

pub use config::{DebugConfig, FrontendConfig};
pub use view_model::{ActionRow, CombatPanel, CombatantCard, TurnSummary};
