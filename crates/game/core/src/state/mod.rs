//! Engine-owned state, as read by the derivations.
//!
//! These types mirror the engine's save snapshot. This crate only ever
//! borrows them; a new save comes exclusively from the engine.
mod actor;
mod combat;
mod common;
mod error;
mod save;

pub use actor::{Actor, EquippedArmor, EquippedWeapon, RangeBands, Weapon, WeaponKind};
pub use combat::{CombatSession, Stance, TurnState};
pub use common::{ActorId, ChoiceId, GridPosition, ItemId, ResourceMeter};
pub use error::SessionError;
pub use save::{CheckRecord, GameSave, RuntimeState};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GameError;

    fn duel() -> CombatSession {
        CombatSession {
            active: true,
            round: 1,
            participants: vec![ActorId::from("hero"), ActorId::from("bandit")],
            positions: [
                (ActorId::from("hero"), GridPosition::new(0, 0)),
                (ActorId::from("bandit"), GridPosition::new(3, 1)),
            ]
            .into_iter()
            .collect(),
            turn: TurnState::start(ActorId::from("hero"), 4),
        }
    }

    #[test]
    fn current_actor_requires_active_combat() {
        let mut combat = duel();
        assert_eq!(combat.current_actor(), Some(&ActorId::from("hero")));

        combat.active = false;
        assert_eq!(combat.current_actor(), None);
        assert!(!combat.is_turn_of(&ActorId::from("hero")));
    }

    #[test]
    fn opponent_is_first_other_participant() {
        let combat = duel();
        assert_eq!(
            combat.opponent_of(&ActorId::from("hero")),
            Some(&ActorId::from("bandit"))
        );
        assert_eq!(
            combat.opponent_of(&ActorId::from("bandit")),
            Some(&ActorId::from("hero"))
        );
    }

    #[test]
    fn validate_accepts_well_formed_session() {
        assert_eq!(duel().validate(), Ok(()));
    }

    #[test]
    fn validate_rejects_duplicate_participants() {
        let mut combat = duel();
        combat.participants.push(ActorId::from("hero"));
        assert_eq!(
            combat.validate(),
            Err(SessionError::DuplicateParticipant(ActorId::from("hero")))
        );
    }

    #[test]
    fn validate_rejects_foreign_turn_holder() {
        let mut combat = duel();
        combat.turn.active_actor_id = ActorId::from("ghost");
        assert!(matches!(
            combat.validate(),
            Err(SessionError::TurnHolderNotParticipant(_))
        ));

        // Inactive combat carries no turn-holder invariant.
        combat.active = false;
        assert_eq!(combat.validate(), Ok(()));
    }

    #[test]
    fn validate_rejects_round_zero() {
        let mut combat = duel();
        combat.round = 0;
        assert_eq!(combat.validate(), Err(SessionError::RoundNotStarted));
    }

    #[test]
    fn validate_rejects_participant_without_position() {
        let mut combat = duel();
        combat.positions.remove(&ActorId::from("bandit"));

        let err = combat.validate().unwrap_err();
        assert_eq!(err, SessionError::MissingPosition(ActorId::from("bandit")));
        assert!(err.severity().is_recoverable());
        assert_eq!(err.error_code(), "SESSION_MISSING_POSITION");
    }
}
