//! Content loaders for reading captured engine data from files.
//!
//! Loaders are the only fallible surface of the workspace: I/O and parse
//! failures are reported with the offending path. Once loaded, derivations
//! absorb any remaining gaps.

pub mod config;
pub mod factory;
pub mod snapshot;

pub use config::ConfigLoader;
pub use factory::ContentFactory;
pub use snapshot::{SessionSnapshot, SnapshotFormat, SnapshotLoader};

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
