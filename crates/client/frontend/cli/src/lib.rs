//! Terminal frontend for inspecting a combat turn.
//!
//! Loads a captured session snapshot, derives the
//! [`CombatPanel`](client_frontend_core::CombatPanel) for it and prints the
//! panel as plain text. The binary lives in `main.rs`; the pieces are exposed
//! here so they can be tested without a process boundary.

pub mod args;
pub mod logging;
pub mod render;

pub use args::Args;
pub use render::PanelView;

// Re-export for convenience (used in main.rs)
pub use client_frontend_core::FrontendConfig;
