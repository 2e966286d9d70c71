//! Terminal presentation: tables, mission text and the battle log

pub mod log;
pub mod render;

pub use log::{BattleLog, LogCategory, LogEntry};
pub use render::{render_log, render_map, render_mission, MENU};
