use menagerie_core::{Roster, RosterError, ROSTER_CAPACITY};
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn load_reads_pairs_in_file_order() {
    let file = roster_file("Dragon Flying\nCentaur Ground\nParrot Flying\n");
    let roster = Roster::load_path(file.path()).expect("load should succeed");

    assert_eq!(roster.len(), 3);
    let names: Vec<&str> = roster
        .creatures()
        .iter()
        .map(|creature| creature.name.as_str())
        .collect();
    assert_eq!(names, ["Dragon", "Centaur", "Parrot"]);
    assert_eq!(roster.creatures()[0].kind, "Flying");
    assert_eq!(roster.creatures()[1].kind, "Ground");
}

#[test]
fn load_accepts_pairs_split_across_lines() {
    let file = roster_file("Dragon\nFlying Centaur\n\n   Ground\n");
    let roster = Roster::load_path(file.path()).expect("load should succeed");

    assert_eq!(roster.len(), 2);
    assert_eq!(roster.creatures()[0].name, "Dragon");
    assert_eq!(roster.creatures()[0].kind, "Flying");
    assert_eq!(roster.creatures()[1].name, "Centaur");
    assert_eq!(roster.creatures()[1].kind, "Ground");
}

#[test]
fn load_truncates_at_capacity_keeping_the_first_pairs() {
    let mut source = String::new();
    for index in 0..(ROSTER_CAPACITY + 3) {
        source.push_str(&format!("Name{index} Kind{index}\n"));
    }
    let file = roster_file(&source);
    let roster = Roster::load_path(file.path()).expect("load should succeed");

    assert_eq!(roster.len(), ROSTER_CAPACITY);
    assert_eq!(roster.creatures()[0].name, "Name0");
    assert_eq!(
        roster.creatures()[ROSTER_CAPACITY - 1].name,
        format!("Name{}", ROSTER_CAPACITY - 1)
    );
}

#[test]
fn load_drops_a_trailing_unpaired_token() {
    let file = roster_file("Dragon Flying Centaur\n");
    let roster = Roster::load_path(file.path()).expect("load should succeed");

    assert_eq!(roster.len(), 1);
    assert_eq!(roster.creatures()[0].name, "Dragon");
}

#[test]
fn load_of_empty_source_yields_empty_roster() {
    let file = roster_file("");
    let roster = Roster::load_path(file.path()).expect("load should succeed");

    assert!(roster.is_empty());
    assert_eq!(roster.len(), 0);
}

#[test]
fn load_of_missing_source_reports_io_error_naming_the_path() {
    let missing = std::env::temp_dir().join(format!(
        "menagerie-missing-roster-{}.txt",
        std::process::id()
    ));
    let error = Roster::load_path(&missing).expect_err("missing file should fail");

    assert!(matches!(error, RosterError::Io { .. }));
    assert!(error.to_string().contains("menagerie-missing-roster"));
    assert!(std::error::Error::source(&error).is_some());
}

#[test]
fn load_reads_invalid_utf8_bytes_lossily() {
    let mut file = NamedTempFile::new().expect("temp file should be created");
    file.write_all(b"Drag\xFFon Flying\n")
        .expect("temp file should accept contents");
    let roster = Roster::load_path(file.path()).expect("load should succeed");

    assert_eq!(roster.len(), 1);
    assert_eq!(roster.creatures()[0].name, "Drag\u{fffd}on");
    assert_eq!(roster.creatures()[0].kind, "Flying");
}

#[test]
fn from_reader_applies_the_same_pairing_rules() {
    let roster =
        Roster::from_reader("Dragon Flying Centaur".as_bytes()).expect("read should succeed");

    assert_eq!(roster.len(), 1);
    assert_eq!(roster.creatures()[0].name, "Dragon");
    assert_eq!(roster.creatures()[0].kind, "Flying");
}

fn roster_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file should be created");
    file.write_all(contents.as_bytes())
        .expect("temp file should accept contents");
    file
}
