//! Common error infrastructure for tactics-core.
//!
//! Derivations in this crate never fail: gaps in the input degrade to
//! display defaults. Errors only surface from explicit invariant checks such as
//! [`CombatSession::validate`](crate::state::CombatSession::validate), which
//! loaders run on snapshots before handing them to the frontends.

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: the snapshot can still be rendered, with degraded output
/// - **Validation**: the input contradicts a documented invariant
/// - **Internal**: unexpected inconsistency that indicates a producer bug
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Rendering can proceed; some derived values fall back to defaults.
    Recoverable,

    /// Invalid input that the producer should not have emitted.
    Validation,

    /// Unexpected state inconsistency.
    Internal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }
}

/// Common trait for all tactics-core errors.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
