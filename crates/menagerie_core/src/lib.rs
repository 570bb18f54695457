//! Core domain logic for Menagerie.
//! This crate is the single source of truth for roster behavior.

pub mod logging;
pub mod menu;
pub mod model;
pub mod roster;
pub mod table;

pub use logging::{default_log_level, init_logging, logging_status};
pub use menu::{ChoiceParseError, MenuChoice, SortMenuChoice};
pub use model::creature::Creature;
pub use roster::{Roster, RosterError, RosterResult, SortKey, ROSTER_CAPACITY};
pub use table::{render_matches, render_roster, render_sorted, FIELD_WIDTH, TABLE_WIDTH};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
