//! Session invariant errors.

use crate::error::{ErrorSeverity, GameError};
use crate::state::ActorId;

/// Violations of the [`CombatSession`](crate::state::CombatSession) invariants.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    /// Rounds are numbered from 1.
    #[error("combat round must start at 1")]
    RoundNotStarted,

    /// Participant ids must be unique.
    #[error("participant {0} is listed more than once")]
    DuplicateParticipant(ActorId),

    /// The turn holder of an active combat must be a participant.
    #[error("turn holder {0} is not a participant")]
    TurnHolderNotParticipant(ActorId),

    /// Every participant must have a position on the grid.
    #[error("participant {0} has no position")]
    MissingPosition(ActorId),

    /// A position is recorded for an actor outside the encounter.
    #[error("position recorded for non-participant {0}")]
    PositionForUnknownActor(ActorId),
}

impl GameError for SessionError {
    fn severity(&self) -> ErrorSeverity {
        use SessionError::*;
        match self {
            RoundNotStarted | DuplicateParticipant(_) => ErrorSeverity::Validation,
            TurnHolderNotParticipant(_) => ErrorSeverity::Internal,
            MissingPosition(_) | PositionForUnknownActor(_) => ErrorSeverity::Recoverable,
        }
    }

    fn error_code(&self) -> &'static str {
        use SessionError::*;
        match self {
            RoundNotStarted => "SESSION_ROUND_NOT_STARTED",
            DuplicateParticipant(_) => "SESSION_DUPLICATE_PARTICIPANT",
            TurnHolderNotParticipant(_) => "SESSION_TURN_HOLDER_NOT_PARTICIPANT",
            MissingPosition(_) => "SESSION_MISSING_POSITION",
            PositionForUnknownActor(_) => "SESSION_POSITION_FOR_UNKNOWN_ACTOR",
        }
    }
}
