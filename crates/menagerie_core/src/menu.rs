//! Interactive console menu driver.
//!
//! # Responsibility
//! - Run the print/sort/search session over any line-based input and output.
//! - Validate every entry into a closed choice before dispatch.
//!
//! # Invariants
//! - Input is consumed one line at a time; a bad line never poisons the next.
//! - Only output-side I/O errors propagate; bad input re-prompts.
//! - End of input ends the session.
//! - The roster is never mutated; sort results are rendered views.

use crate::roster::{Roster, SortKey};
use crate::table;
use log::{debug, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io::{BufRead, Write};

const MAIN_MENU: &str = "\nMenu:\n\
1. Print Creatures\n\
2. Sort Creatures\n\
3. Search Creatures\n\
4. Exit\n\
Enter choice: ";

const SORT_MENU: &str = "\nSort Menu:\n\
1. Sort by Name\n\
2. Sort by Type\n\
3. Go Back to Main Menu\n\
Enter choice: ";

const SEARCH_PROMPT: &str = "Enter partial name or type to search: ";

/// Top-level menu actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Print,
    Sort,
    Search,
    Exit,
}

/// Sort submenu actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortMenuChoice {
    Key(SortKey),
    Back,
}

/// Rejection reason for a menu entry.
///
/// The two variants carry the two user-facing messages, so non-numeric
/// entries and out-of-range numbers stay distinguishable at the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChoiceParseError {
    NotNumeric,
    OutOfRange,
}

impl Display for ChoiceParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotNumeric => write!(f, "Invalid input. Please enter a valid option."),
            Self::OutOfRange => write!(f, "Invalid choice. Try again."),
        }
    }
}

impl Error for ChoiceParseError {}

impl MenuChoice {
    /// Parses a main-menu entry from one trimmed input line.
    ///
    /// # Contract
    /// - Accepts exactly the digits 1-4.
    /// - Any integer outside that range is [`ChoiceParseError::OutOfRange`];
    ///   everything else is [`ChoiceParseError::NotNumeric`].
    pub fn parse(input: &str) -> Result<Self, ChoiceParseError> {
        match input.trim().parse::<i64>() {
            Ok(1) => Ok(Self::Print),
            Ok(2) => Ok(Self::Sort),
            Ok(3) => Ok(Self::Search),
            Ok(4) => Ok(Self::Exit),
            Ok(_) => Err(ChoiceParseError::OutOfRange),
            Err(_) => Err(ChoiceParseError::NotNumeric),
        }
    }
}

impl SortMenuChoice {
    /// Parses a sort-submenu entry from one trimmed input line.
    pub fn parse(input: &str) -> Result<Self, ChoiceParseError> {
        match input.trim().parse::<i64>() {
            Ok(1) => Ok(Self::Key(SortKey::Name)),
            Ok(2) => Ok(Self::Key(SortKey::Kind)),
            Ok(3) => Ok(Self::Back),
            Ok(_) => Err(ChoiceParseError::OutOfRange),
            Err(_) => Err(ChoiceParseError::NotNumeric),
        }
    }
}

/// Runs the whole interactive session until Exit or end of input.
///
/// # Contract
/// - Returns `Ok(())` on Exit and on end of input alike; bad entries only
///   ever produce a message and a fresh prompt.
///
/// # Errors
/// - Propagates output-side I/O failures only.
///
/// # Side effects
/// - Emits `menu_session` and per-action logging events.
pub fn run(roster: &Roster, mut input: impl BufRead, mut out: impl Write) -> std::io::Result<()> {
    info!(
        "event=menu_session module=menu status=start records={}",
        roster.len()
    );

    loop {
        out.write_all(MAIN_MENU.as_bytes())?;
        out.flush()?;

        let Some(line) = read_line(&mut input) else {
            debug!("event=menu_session module=menu status=input_exhausted");
            break;
        };

        match MenuChoice::parse(&line) {
            Ok(MenuChoice::Print) => {
                debug!(
                    "event=menu_print module=menu status=ok records={}",
                    roster.len()
                );
                out.write_all(table::render_roster(roster).as_bytes())?;
            }
            Ok(MenuChoice::Sort) => {
                if !run_sort_menu(roster, &mut input, &mut out)? {
                    debug!("event=menu_session module=menu status=input_exhausted");
                    break;
                }
            }
            Ok(MenuChoice::Search) => {
                if !run_search(roster, &mut input, &mut out)? {
                    debug!("event=menu_session module=menu status=input_exhausted");
                    break;
                }
            }
            Ok(MenuChoice::Exit) => {
                writeln!(out, "Exiting program...")?;
                break;
            }
            Err(err) => writeln!(out, "{err}")?,
        }
    }

    info!("event=menu_session module=menu status=end");
    Ok(())
}

/// Loops on the sort submenu until Back; returns `Ok(false)` when input
/// ended inside the submenu.
fn run_sort_menu(
    roster: &Roster,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> std::io::Result<bool> {
    loop {
        out.write_all(SORT_MENU.as_bytes())?;
        out.flush()?;

        let Some(line) = read_line(input) else {
            return Ok(false);
        };

        match SortMenuChoice::parse(&line) {
            Ok(SortMenuChoice::Key(key)) => {
                debug!(
                    "event=menu_sort module=menu status=ok key={} records={}",
                    key.label(),
                    roster.len()
                );
                out.write_all(table::render_sorted(&roster.sorted(key)).as_bytes())?;
            }
            Ok(SortMenuChoice::Back) => {
                writeln!(out, "Returning to main menu...")?;
                return Ok(true);
            }
            Err(err) => writeln!(out, "{err}")?,
        }
    }
}

/// Prompts for one query and renders the matches; returns `Ok(false)` when
/// input ended at the prompt.
///
/// The query is the first whitespace-delimited token of the answer line; a
/// blank line is the empty query, which matches every record.
fn run_search(
    roster: &Roster,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> std::io::Result<bool> {
    out.write_all(SEARCH_PROMPT.as_bytes())?;
    out.flush()?;

    let Some(line) = read_line(input) else {
        return Ok(false);
    };

    let query = line.split_whitespace().next().unwrap_or_default();
    let hits = roster.search(query);
    debug!(
        "event=menu_search module=menu status=ok query_len={} hits={}",
        query.chars().count(),
        hits.len()
    );
    out.write_all(table::render_matches(&hits).as_bytes())?;
    Ok(true)
}

/// Reads one input line; `None` means end of input.
///
/// A read error on the interactive stream is treated as end of input; the
/// session cannot recover from a broken source.
fn read_line(input: &mut impl BufRead) -> Option<String> {
    let mut line = String::new();
    match input.read_line(&mut line) {
        Ok(0) => None,
        Ok(_) => Some(line),
        Err(err) => {
            warn!("event=menu_read module=menu status=error error={}", err);
            None
        }
    }
}
