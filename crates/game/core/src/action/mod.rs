//! Choice classification and the legality pipeline.
//!
//! Data flows leaf-first: [`distance`] → [`check_range`] / [`classify`] →
//! [`resolve`], with [`TurnEconomyView`] supplying the turn budget. Each stage
//! is a pure function with an explicit input/output contract.
mod choice;
mod economy;
mod legality;
mod movement;
mod targeting;

pub use choice::{Check, Choice, ChoiceCategory, ChoiceId};
pub use economy::TurnEconomyView;
pub use legality::{ActionLegality, LegalityContext, ReasonCode, resolve, resolve_for_player};
pub use movement::MoveDirection;
pub use targeting::{
    AttackCategory, RangeBlock, RangeEligibility, check_range, classify, distance,
};
