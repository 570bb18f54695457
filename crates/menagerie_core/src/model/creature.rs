//! Creature domain record.
//!
//! # Responsibility
//! - Define the canonical (name, kind) record held by the roster.
//! - Provide the substring predicate used by search.
//!
//! # Invariants
//! - Fields never change after construction.
//! - An empty query matches every record.

/// One roster record: a named creature and its category.
///
/// The category field is called `kind` because `type` is reserved in Rust;
/// it still renders under the `Type` column header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Creature {
    /// Creature name as read from the source file.
    pub name: String,
    /// Creature category, rendered as `Type`.
    pub kind: String,
}

impl Creature {
    /// Creates a record from already-tokenized field values.
    ///
    /// # Invariants
    /// - Callers pass whitespace-free tokens; this constructor does not
    ///   re-validate them.
    pub fn new(name: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
        }
    }

    /// Returns whether `query` occurs in the name or the kind, ignoring case.
    ///
    /// # Contract
    /// - An empty query matches every record.
    /// - Matching is substring containment, not whole-token equality.
    pub fn matches(&self, query: &str) -> bool {
        let needle = query.to_lowercase();
        self.name.to_lowercase().contains(&needle) || self.kind.to_lowercase().contains(&needle)
    }
}
