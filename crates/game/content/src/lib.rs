//! Data-driven content definitions and loaders.
//!
//! This crate reads captured engine data from disk:
//! - Session snapshots (save + engine lookups) via RON or JSON
//! - Rules configuration via TOML
//!
//! A loaded [`SessionSnapshot`] implements
//! [`RulesOracle`](tactics_core::RulesOracle), so frontends can derive legality
//! from it exactly as they would from a live engine.

pub mod loaders;

pub use loaders::{
    ConfigLoader, ContentFactory, LoadResult, SessionSnapshot, SnapshotFormat, SnapshotLoader,
};
