//! Owning collection of creatures and its query views.
//!
//! # Responsibility
//! - Load up to [`ROSTER_CAPACITY`] records from a whitespace token stream.
//! - Serve search and sort views without mutating storage order.
//!
//! # Invariants
//! - `0 <= len <= ROSTER_CAPACITY` at all times.
//! - Storage order equals source order and never changes after load.
//! - Views borrow from the roster; they never copy or reorder it.

use crate::model::creature::Creature;
use log::{error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Maximum number of records a roster holds; excess source pairs are dropped.
pub const ROSTER_CAPACITY: usize = 10;

/// Result type for roster load APIs.
pub type RosterResult<T> = Result<T, RosterError>;

/// Load-layer error. I/O on the source is the only recognized failure;
/// malformed content degrades to fewer records instead of failing.
#[derive(Debug)]
pub enum RosterError {
    Io {
        /// Failing source path; `None` for reader-backed loads.
        path: Option<PathBuf>,
        source: std::io::Error,
    },
}

impl Display for RosterError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io {
                path: Some(path),
                source,
            } => write!(
                f,
                "cannot read roster source `{}`: {source}",
                path.display()
            ),
            Self::Io { path: None, source } => {
                write!(f, "cannot read roster source: {source}")
            }
        }
    }
}

impl Error for RosterError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
        }
    }
}

/// Field a sort view orders by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Name,
    Kind,
}

impl SortKey {
    /// Stable lowercase label for logging; `Kind` keeps its user-facing
    /// column name.
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Kind => "type",
        }
    }
}

/// Ordered, bounded collection of creatures loaded once from a source.
#[derive(Debug, Default)]
pub struct Roster {
    creatures: Vec<Creature>,
}

impl Roster {
    /// Creates an empty roster.
    pub fn new() -> Self {
        Self {
            creatures: Vec::new(),
        }
    }

    /// Reads a roster from a file path.
    ///
    /// Tokens are consumed pairwise as `(name, kind)`; pairs beyond
    /// [`ROSTER_CAPACITY`] and a trailing unpaired token are dropped.
    ///
    /// # Errors
    /// - Returns [`RosterError::Io`] when the source cannot be read.
    ///
    /// # Side effects
    /// - Emits `roster_load` logging events with duration and status.
    pub fn load_path(path: impl AsRef<Path>) -> RosterResult<Self> {
        let path = path.as_ref();
        let started_at = Instant::now();
        info!(
            "event=roster_load module=roster status=start path={}",
            path.display()
        );

        let raw = match std::fs::read(path) {
            Ok(raw) => raw,
            Err(err) => {
                error!(
                    "event=roster_load module=roster status=error path={} duration_ms={} error_code=source_read_failed error={}",
                    path.display(),
                    started_at.elapsed().as_millis(),
                    err
                );
                return Err(RosterError::Io {
                    path: Some(path.to_path_buf()),
                    source: err,
                });
            }
        };

        let text = String::from_utf8_lossy(&raw);
        let (roster, discarded) = Self::from_tokens(text.split_whitespace());
        info!(
            "event=roster_load module=roster status=ok path={} duration_ms={} loaded={} discarded={}",
            path.display(),
            started_at.elapsed().as_millis(),
            roster.len(),
            discarded
        );
        Ok(roster)
    }

    /// Reads a roster from any byte source with the same pairing rules as
    /// [`Roster::load_path`], without the logging envelope.
    ///
    /// # Errors
    /// - Returns [`RosterError::Io`] when the reader fails.
    pub fn from_reader(mut reader: impl Read) -> RosterResult<Self> {
        let mut raw = Vec::new();
        reader
            .read_to_end(&mut raw)
            .map_err(|source| RosterError::Io { path: None, source })?;
        let text = String::from_utf8_lossy(&raw);
        let (roster, _discarded) = Self::from_tokens(text.split_whitespace());
        Ok(roster)
    }

    /// Returns the number of loaded records.
    pub fn len(&self) -> usize {
        self.creatures.len()
    }

    /// Returns whether the roster holds no records.
    pub fn is_empty(&self) -> bool {
        self.creatures.is_empty()
    }

    /// Returns all records in load order.
    pub fn creatures(&self) -> &[Creature] {
        &self.creatures
    }

    /// Returns the records matching `query`, in load order.
    ///
    /// An empty query matches every record.
    pub fn search(&self, query: &str) -> Vec<&Creature> {
        self.creatures
            .iter()
            .filter(|creature| creature.matches(query))
            .collect()
    }

    /// Returns a view of all records ordered ascending by `key`.
    ///
    /// # Contract
    /// - Comparison is byte-wise lexicographic on the raw field value.
    /// - The sort is stable: records with equal keys keep load order.
    /// - Storage order is left untouched.
    pub fn sorted(&self, key: SortKey) -> Vec<&Creature> {
        let mut view: Vec<&Creature> = self.creatures.iter().collect();
        match key {
            SortKey::Name => view.sort_by(|a, b| a.name.cmp(&b.name)),
            SortKey::Kind => view.sort_by(|a, b| a.kind.cmp(&b.kind)),
        }
        view
    }

    /// Consumes tokens pairwise into a roster, returning the roster and the
    /// count of complete pairs dropped after capacity was reached.
    fn from_tokens<'a>(mut tokens: impl Iterator<Item = &'a str>) -> (Self, usize) {
        let mut creatures = Vec::new();
        let mut discarded = 0usize;
        // A trailing unpaired token never commits half a record.
        while let (Some(name), Some(kind)) = (tokens.next(), tokens.next()) {
            if creatures.len() < ROSTER_CAPACITY {
                creatures.push(Creature::new(name, kind));
            } else {
                discarded += 1;
            }
        }
        (Self { creatures }, discarded)
    }
}
