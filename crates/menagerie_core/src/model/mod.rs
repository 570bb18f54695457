//! Domain model for the creature roster.
//!
//! # Responsibility
//! - Define the record shape shared by loading, querying and rendering.
//! - Keep the matching rule on the record itself so every caller agrees.
//!
//! # Invariants
//! - Records are immutable once constructed.
//! - Matching is case-insensitive and treats an empty query as match-all.

pub mod creature;
