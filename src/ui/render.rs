//! Text rendering of the map, mission and menu

use crossterm::style::{Color, Stylize};
use std::fmt::Write;

use crate::campaign::map::WorldMap;
use crate::core::types::TerritoryColor;
use crate::mission::{Mission, MissionProgress};
use crate::ui::log::BattleLog;

pub const MENU: &str = "\
=== MAIN MENU ===
1. Show map
2. Attack territory
3. Show current mission
4. Check victory (mission status)
5. Draw a new mission
6. Show battle log
0. Quit
=================";

fn terminal_color(color: TerritoryColor) -> Color {
    match color {
        TerritoryColor::Red => Color::Red,
        TerritoryColor::Green => Color::Green,
        TerritoryColor::Blue => Color::Blue,
        TerritoryColor::Yellow => Color::Yellow,
        TerritoryColor::Cyan => Color::Cyan,
        // Plain black is unreadable on dark terminals
        TerritoryColor::Black => Color::DarkGrey,
    }
}

/// Map as a table. `colored` paints the color column with ANSI escapes.
pub fn render_map(world: &WorldMap, colored: bool) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "--- CURRENT MAP ---");
    let _ = writeln!(
        out,
        "{:<12} | {:<9} | {:<6} | {}",
        "Territory", "Owner", "Troops", "Color"
    );
    let _ = writeln!(out, "{}", "-".repeat(46));

    for t in world.iter() {
        // Last column, left unpadded so escapes never trail spaces
        let color = t.color().to_string();
        let color = if colored {
            color.with(terminal_color(t.color())).to_string()
        } else {
            color
        };
        let _ = writeln!(
            out,
            "{:<12} | {:<9} | {:<6} | {}",
            t.name().to_string(),
            t.owner.to_string(),
            t.troops,
            color
        );
    }
    out
}

/// Mission description, its parameters and current progress
pub fn render_mission(mission: &Mission, progress: MissionProgress) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "--- CURRENT MISSION ---");
    let _ = writeln!(out, "{}", mission.description());

    match mission {
        Mission::OwnTerritories { target } | Mission::OwnTroops { target } => {
            let _ = writeln!(out, "Numeric target: {target}");
        }
        Mission::EliminateEnemy => {}
        Mission::OwnTerritory { territory } => {
            let _ = writeln!(out, "Target territory: {territory}");
        }
        Mission::OwnColor { color, target } => {
            let _ = writeln!(out, "Numeric target: {target}");
            let _ = writeln!(out, "Target color: {color}");
        }
    }

    let _ = writeln!(out, "Progress: {}/{}", progress.current, progress.target);
    out
}

/// The last `limit` log entries, oldest first
pub fn render_log(log: &BattleLog, limit: usize) -> String {
    if log.is_empty() {
        return "No battles fought yet.\n".to_string();
    }
    let skip = log.len().saturating_sub(limit);
    let mut out = String::from("--- BATTLE LOG ---\n");
    for entry in log.entries().skip(skip) {
        let _ = writeln!(out, "[round {}] {}", entry.round, entry.message);
    }
    out
}
