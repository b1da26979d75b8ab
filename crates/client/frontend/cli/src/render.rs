//! Plain-text rendering of a [`CombatPanel`].
use std::fmt;

use client_frontend_core::format::{
    distance_label, meter_label, namespace_heading, stance_label,
};
use client_frontend_core::{ActionRow, CombatPanel, CombatantCard, FrontendConfig};
use tactics_core::{TagBreakdown, TurnEconomyView};

/// Displays a panel as the text the binary prints.
pub struct PanelView<'a> {
    panel: &'a CombatPanel,
    config: &'a FrontendConfig,
}

impl<'a> PanelView<'a> {
    pub fn new(panel: &'a CombatPanel, config: &'a FrontendConfig) -> Self {
        Self { panel, config }
    }
}

impl fmt::Display for PanelView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let panel = self.panel;

        match panel.round {
            Some(round) => {
                let actor = panel.turn.active_name.as_deref().unwrap_or("-");
                let stance = panel.turn.stance.map_or("-", stance_label);
                let whose = if panel.turn.is_player_turn {
                    "your turn"
                } else {
                    "waiting"
                };
                writeln!(f, "Round {round} | {actor} acting ({stance}) | {whose}")?;
            }
            None => writeln!(f, "Not in combat")?,
        }
        writeln!(f)?;

        write_card(f, &panel.player)?;
        if let Some(opponent) = &panel.opponent {
            write_card(f, opponent)?;
        }
        writeln!(f, "Distance: {}", distance_label(panel.distance))?;
        if let Some(economy) = &panel.economy {
            write_economy(f, economy)?;
        }
        writeln!(f)?;

        writeln!(f, "Actions:")?;
        if panel.actions.is_empty() {
            writeln!(f, "  (none)")?;
        }
        for row in &panel.actions {
            write_action(f, row)?;
        }

        if let Some(breakdown) = &panel.debug {
            writeln!(f)?;
            write_breakdown(f, breakdown, self.config.debug.show_raw)?;
        }

        Ok(())
    }
}

fn write_card(f: &mut fmt::Formatter<'_>, card: &CombatantCard) -> fmt::Result {
    write!(
        f,
        "{:<12} HP {:<7} Fatigue {:<5} {} / {} (soak {})",
        card.name,
        meter_label(card.hit_points),
        meter_label(card.fatigue),
        card.weapon_name,
        card.armor_name,
        card.soak,
    )?;
    match card.position {
        Some(position) => writeln!(f, " @ {position}"),
        None => writeln!(f),
    }
}

fn write_economy(f: &mut fmt::Formatter<'_>, economy: &TurnEconomyView) -> fmt::Result {
    let action = if economy.can_act() { "ready" } else { "spent" };
    writeln!(
        f,
        "Movement left: {} | Action: {}",
        economy.move_remaining, action
    )
}

fn write_action(f: &mut fmt::Formatter<'_>, row: &ActionRow) -> fmt::Result {
    let mark = if row.available { 'x' } else { ' ' };
    match row.hint {
        Some(hint) => writeln!(f, "  [{mark}] {:<20} {hint}", row.label),
        None => writeln!(f, "  [{mark}] {}", row.label),
    }
}

fn write_breakdown(
    f: &mut fmt::Formatter<'_>,
    breakdown: &TagBreakdown,
    show_raw: bool,
) -> fmt::Result {
    writeln!(f, "Last check (tag format v{}):", breakdown.version)?;
    for group in breakdown.groups() {
        let pairs: Vec<String> = group
            .entries
            .iter()
            .map(|entry| format!("{}={}", entry.key, entry.value))
            .collect();
        writeln!(
            f,
            "  {:<12} {}",
            namespace_heading(group.namespace),
            pairs.join(", ")
        )?;
    }
    if breakdown.dropped() > 0 {
        writeln!(f, "  ({} unrecognised tags)", breakdown.dropped())?;
    }
    if show_raw {
        writeln!(f, "  raw: {}", breakdown.raw().join(" "))?;
    }
    Ok(())
}
