//! Read-only view of the acting combatant's turn budget.

use crate::state::{ActorId, CombatSession, Stance};

/// Remaining movement, action availability and stance for the turn holder.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TurnEconomyView {
    pub actor: ActorId,
    pub round: u32,
    pub move_remaining: u32,
    pub action_available: bool,
    pub has_moved: bool,
    pub has_attacked: bool,
    pub stance: Stance,
}

impl TurnEconomyView {
    /// Projects the turn state of an active combat; `None` otherwise.
    pub fn from_session(session: &CombatSession) -> Option<Self> {
        if !session.active {
            return None;
        }

        let turn = &session.turn;
        Some(Self {
            actor: turn.active_actor_id.clone(),
            round: session.round,
            move_remaining: turn.move_remaining,
            action_available: turn.action_available,
            has_moved: turn.has_moved,
            has_attacked: turn.has_attacked,
            stance: turn.stance,
        })
    }

    pub fn can_move(&self) -> bool {
        self.move_remaining > 0
    }

    /// The single per-turn action is still unspent.
    pub fn can_act(&self) -> bool {
        self.action_available && !self.has_attacked
    }

    pub fn is_defending(&self) -> bool {
        self.stance == Stance::Defend
    }
}
