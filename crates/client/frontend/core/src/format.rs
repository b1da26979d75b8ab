//! Human-readable text for derived combat values.
//!
//! Kept separate from the view model so every frontend words reasons and
//! labels the same way.

use tactics_core::{ReasonCode, ResourceMeter, Stance, TagNamespace};

/// Explanation shown next to an unavailable choice.
pub fn reason_text(reason: ReasonCode) -> &'static str {
    match reason {
        ReasonCode::NotYourTurn => "Not your turn",
        ReasonCode::NoMovementLeft => "No movement left this turn",
        ReasonCode::ActionSpent => "Action already spent this turn",
        ReasonCode::OutOfRange => "Target is out of range",
        ReasonCode::RequiresMeleeRange => "Target must be adjacent",
        ReasonCode::RequiresRangedWeapon => "Requires a ranged weapon",
    }
}

pub fn stance_label(stance: Stance) -> &'static str {
    match stance {
        Stance::Normal => "Normal",
        Stance::Defend => "Defending",
    }
}

/// Distance in tiles, or `-` when either position is unknown.
pub fn distance_label(distance: Option<u32>) -> String {
    match distance {
        Some(0) => "0 (same tile)".to_owned(),
        Some(1) => "1 tile".to_owned(),
        Some(tiles) => format!("{tiles} tiles"),
        None => "-".to_owned(),
    }
}

/// `current/maximum`, e.g. `9/12`.
pub fn meter_label(meter: ResourceMeter) -> String {
    format!("{}/{}", meter.current, meter.maximum)
}

/// Section heading for a tag group.
pub fn namespace_heading(namespace: TagNamespace) -> &'static str {
    match namespace {
        TagNamespace::AttCalc => "Attacker",
        TagNamespace::DefCalc => "Defender",
        TagNamespace::Combat => "Outcome",
        TagNamespace::Calc => "Calculation",
    }
}
