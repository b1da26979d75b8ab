//! Session snapshot loader.
//!
//! A snapshot pairs an engine save with what the engine answered for it
//! (choice list, equipment catalog). Both RON and JSON are accepted; the
//! format is picked from the file extension.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tactics_core::{
    Actor, Choice, CombatSession, EquippedArmor, EquippedWeapon, GameError, GameSave,
    RulesOracle, RulesSnapshot,
};
use tracing::{debug, info, warn};

use crate::loaders::{LoadResult, read_file};

/// Save plus captured engine lookups.
///
/// File format (RON):
/// ```ron
/// (
///     save: (
///         player_id: "hero",
///         runtime: (combat: Some(( ... )), last_check: None),
///         actors_by_id: { "hero": ( ... ) },
///     ),
///     rules: (
///         choices: [ ... ],
///         weapons: { "longbow": (name: "Longbow", weapon: ( ... )) },
///         armor: {},
///     ),
/// )
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub save: GameSave,
    #[serde(default)]
    pub rules: RulesSnapshot,
}

impl RulesOracle for SessionSnapshot {
    fn available_choices(&self, save: &GameSave) -> Vec<Choice> {
        self.rules.available_choices(save)
    }

    fn actor_weapon(&self, save: &GameSave, actor: &Actor) -> Option<EquippedWeapon> {
        self.rules.actor_weapon(save, actor)
    }

    fn actor_armor(&self, save: &GameSave, actor: &Actor) -> Option<EquippedArmor> {
        self.rules.actor_armor(save, actor)
    }
}

/// Serialization formats accepted for snapshots.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SnapshotFormat {
    Ron,
    Json,
}

impl SnapshotFormat {
    /// Picks the format from a path's extension (`.ron` or `.json`).
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?;
        if extension.eq_ignore_ascii_case("ron") {
            Some(Self::Ron)
        } else if extension.eq_ignore_ascii_case("json") {
            Some(Self::Json)
        } else {
            None
        }
    }
}

/// Loader for session snapshots.
pub struct SnapshotLoader;

impl SnapshotLoader {
    /// Load a snapshot, choosing RON or JSON by extension.
    pub fn load(path: &Path) -> LoadResult<SessionSnapshot> {
        let format = SnapshotFormat::from_path(path).ok_or_else(|| {
            anyhow::anyhow!(
                "Unsupported snapshot extension for {} (expected .ron or .json)",
                path.display()
            )
        })?;

        let content = read_file(path)?;
        let snapshot = Self::parse(&content, format).map_err(|e| {
            anyhow::anyhow!("Failed to parse snapshot at {}: {}", path.display(), e)
        })?;

        info!(
            path = %path.display(),
            player = %snapshot.save.player_id,
            choices = snapshot.rules.choices.len(),
            "loaded session snapshot"
        );
        Ok(snapshot)
    }

    /// Parse a snapshot from text in the given format.
    ///
    /// Session invariant violations are logged, not rejected: the frontends
    /// degrade gracefully on inconsistent data.
    pub fn parse(content: &str, format: SnapshotFormat) -> LoadResult<SessionSnapshot> {
        let snapshot: SessionSnapshot = match format {
            SnapshotFormat::Ron => ron::from_str(content)?,
            SnapshotFormat::Json => serde_json::from_str(content)?,
        };

        if let Some(Err(err)) = snapshot.save.combat().map(CombatSession::validate) {
            let severity = err.severity();
            if severity.is_recoverable() {
                debug!(code = err.error_code(), "snapshot has a session gap: {err}");
            } else {
                warn!(
                    code = err.error_code(),
                    severity = severity.as_str(),
                    "snapshot violates session invariant: {err}"
                );
            }
        }

        if snapshot.save.player().is_none() {
            warn!(player = %snapshot.save.player_id, "snapshot has no record for the player");
        }

        Ok(snapshot)
    }
}
