//! Fixed-width console table rendering.
//!
//! # Responsibility
//! - Render roster, search and sort views as bordered text tables.
//! - Keep every rule and border on the fixed 35-column layout.
//!
//! # Invariants
//! - Rules are exactly [`TABLE_WIDTH`] dashes.
//! - Fields pad to [`FIELD_WIDTH`] display columns and are never truncated.
//! - Rendering returns strings; this module never writes to a sink.

use crate::model::creature::Creature;
use crate::roster::Roster;
use unicode_width::UnicodeWidthStr;

/// Display width of the name and kind columns.
pub const FIELD_WIDTH: usize = 15;

/// Total table width: two padded fields plus borders.
pub const TABLE_WIDTH: usize = 35;

const NO_MATCH_MESSAGE: &str = "No matching creatures found.";

/// Renders the full roster in load order under a `Name`/`Type` header.
///
/// An empty roster renders the header block with zero data rows.
pub fn render_roster(roster: &Roster) -> String {
    let mut out = String::new();
    out.push('\n');
    push_rule(&mut out);
    push_row(&mut out, "Name", "Type");
    push_rule(&mut out);
    for creature in roster.creatures() {
        push_creature(&mut out, creature);
    }
    push_rule(&mut out);
    out
}

/// Renders a search view under the `Matching Creatures:` headline.
///
/// Zero matches render the no-match message in place of data rows, still
/// framed by the table rules.
pub fn render_matches(matches: &[&Creature]) -> String {
    let mut out = String::new();
    out.push_str("\nMatching Creatures:\n");
    push_rule(&mut out);
    if matches.is_empty() {
        out.push_str(NO_MATCH_MESSAGE);
        out.push('\n');
    } else {
        for creature in matches {
            push_creature(&mut out, creature);
        }
    }
    push_rule(&mut out);
    out
}

/// Renders a sort view under the `Sorted Creatures:` headline.
pub fn render_sorted(rows: &[&Creature]) -> String {
    let mut out = String::new();
    out.push_str("\nSorted Creatures:\n");
    push_rule(&mut out);
    for creature in rows {
        push_creature(&mut out, creature);
    }
    push_rule(&mut out);
    out
}

fn push_creature(out: &mut String, creature: &Creature) {
    push_row(out, &creature.name, &creature.kind);
}

fn push_row(out: &mut String, name: &str, kind: &str) {
    out.push_str("| ");
    push_padded(out, name);
    out.push_str("| ");
    push_padded(out, kind);
    out.push_str("|\n");
}

// Pads by terminal display columns, not byte or char count, so double-width
// glyphs keep the bars aligned. Oversized values stay whole.
fn push_padded(out: &mut String, value: &str) {
    out.push_str(value);
    let width = UnicodeWidthStr::width(value);
    for _ in width..FIELD_WIDTH {
        out.push(' ');
    }
}

fn push_rule(out: &mut String) {
    for _ in 0..TABLE_WIDTH {
        out.push('-');
    }
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::{render_matches, render_roster, render_sorted, TABLE_WIDTH};
    use crate::model::creature::Creature;
    use crate::roster::Roster;

    #[test]
    fn roster_table_lists_rows_in_load_order() {
        let roster = Roster::from_reader("Dragon Flying Centaur Ground Parrot Flying".as_bytes())
            .expect("sample roster should load");
        let expected = "\n\
-----------------------------------\n\
| Name           | Type           |\n\
-----------------------------------\n\
| Dragon         | Flying         |\n\
| Centaur        | Ground         |\n\
| Parrot         | Flying         |\n\
-----------------------------------\n";
        assert_eq!(render_roster(&roster), expected);
    }

    #[test]
    fn empty_roster_renders_header_and_rules_only() {
        let expected = "\n\
-----------------------------------\n\
| Name           | Type           |\n\
-----------------------------------\n\
-----------------------------------\n";
        assert_eq!(render_roster(&Roster::new()), expected);
    }

    #[test]
    fn every_line_of_the_roster_table_is_table_width() {
        let roster = Roster::from_reader("Dragon Flying".as_bytes())
            .expect("sample roster should load");
        for line in render_roster(&roster).lines().skip(1) {
            assert_eq!(line.len(), TABLE_WIDTH, "line `{line}` should be fixed-width");
        }
    }

    #[test]
    fn zero_matches_render_the_no_match_message() {
        let expected = "\nMatching Creatures:\n\
-----------------------------------\n\
No matching creatures found.\n\
-----------------------------------\n";
        assert_eq!(render_matches(&[]), expected);
    }

    #[test]
    fn matches_render_without_a_header_row() {
        let dragon = Creature::new("Dragon", "Flying");
        let rendered = render_matches(&[&dragon]);
        assert!(rendered.contains("| Dragon         | Flying         |"));
        assert!(!rendered.contains("| Name"));
    }

    #[test]
    fn sorted_view_renders_rows_as_given() {
        let centaur = Creature::new("Centaur", "Ground");
        let dragon = Creature::new("Dragon", "Flying");
        let expected = "\nSorted Creatures:\n\
-----------------------------------\n\
| Centaur        | Ground         |\n\
| Dragon         | Flying         |\n\
-----------------------------------\n";
        assert_eq!(render_sorted(&[&centaur, &dragon]), expected);
    }

    #[test]
    fn oversized_fields_are_padded_but_never_truncated() {
        let long = Creature::new("Extraordinarily-Long-Name", "Kind");
        let rendered = render_sorted(&[&long]);
        assert!(rendered.contains("Extraordinarily-Long-Name"));
        assert!(rendered.contains("| Kind           |"));
    }
}
