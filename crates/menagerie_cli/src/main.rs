//! Interactive console entry point.
//!
//! # Responsibility
//! - Wire real stdin/stdout into the core menu driver.
//! - Resolve the roster source and degrade to an empty roster when it
//!   cannot be read.
//!
//! # Invariants
//! - The process exit code is 0 regardless of load or session outcome.
//! - Log lines go to stderr; the interactive transcript stays on stdout.

use log::{error, warn};
use menagerie_core::{default_log_level, init_logging, menu, Roster};
use std::io;

const DEFAULT_ROSTER_PATH: &str = "creatures.txt";
const ROSTER_PATH_ENV: &str = "MENAGERIE_ROSTER";

fn main() {
    if let Err(message) = init_logging(default_log_level()) {
        eprintln!("logging unavailable: {message}");
    }

    let path = resolve_roster_path();
    let roster = match Roster::load_path(&path) {
        Ok(roster) => roster,
        Err(err) => {
            warn!(
                "event=roster_fallback module=cli status=degraded path={} error={}",
                path, err
            );
            Roster::new()
        }
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    if let Err(err) = menu::run(&roster, stdin.lock(), stdout.lock()) {
        error!("event=menu_session module=cli status=error error={}", err);
    }
}

/// Resolves the roster source: CLI argument, then environment, then the
/// default file next to the working directory.
fn resolve_roster_path() -> String {
    if let Some(arg) = std::env::args().nth(1) {
        let trimmed = arg.trim();
        if !trimmed.is_empty() {
            return trimmed.to_string();
        }
    }
    if let Ok(raw) = std::env::var(ROSTER_PATH_ENV) {
        let trimmed = raw.trim();
        if !trimmed.is_empty() {
            return trimmed.to_string();
        }
    }
    DEFAULT_ROSTER_PATH.to_string()
}
