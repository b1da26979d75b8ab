//! Content factory for loading snapshots and rules from a data directory.

use std::path::{Path, PathBuf};

use tactics_core::RulesConfig;
use tracing::debug;

use crate::loaders::{ConfigLoader, LoadResult, SessionSnapshot, SnapshotFormat, SnapshotLoader};

/// Content factory that loads session content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── rules.toml
/// └── sessions/
///     ├── skirmish.ron
///     └── ambush.json
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub const RULES_FILE: &'static str = "rules.toml";
    pub const SESSIONS_DIR: &'static str = "sessions";

    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Load rules configuration from `rules.toml`.
    ///
    /// A missing file is not an error: the default rules apply.
    pub fn load_rules(&self) -> LoadResult<RulesConfig> {
        let path = self.data_dir.join(Self::RULES_FILE);
        if !path.exists() {
            debug!(path = %path.display(), "no rules file; using default rules");
            return Ok(RulesConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load a session snapshot by file name from `sessions/`.
    pub fn load_session(&self, file_name: &str) -> LoadResult<SessionSnapshot> {
        let path = self.data_dir.join(Self::SESSIONS_DIR).join(file_name);
        SnapshotLoader::load(&path)
    }

    /// File names of every loadable session, sorted.
    pub fn list_sessions(&self) -> LoadResult<Vec<String>> {
        let dir = self.data_dir.join(Self::SESSIONS_DIR);
        let entries = std::fs::read_dir(&dir)
            .map_err(|e| anyhow::anyhow!("Failed to list sessions in {}: {}", dir.display(), e))?;

        let mut names = Vec::new();
        for entry in entries {
            let path = entry?.path();
            if SnapshotFormat::from_path(&path).is_none() {
                continue;
            }
            if let Some(name) = path.file_name().and_then(|name| name.to_str()) {
                names.push(name.to_owned());
            }
        }
        names.sort();
        Ok(names)
    }
}
