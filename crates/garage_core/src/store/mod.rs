//! In-memory record store.
//!
//! # Responsibility
//! - Own the five entity collections behind one explicit store value.
//! - Provide per-entity CRUD and substring search.
//!
//! # Invariants
//! - Inserts never check key uniqueness; update/find act on the first match.
//! - Update and delete misses are reported as `NotFound` and change nothing.
//! - No operation mutates more than one collection.

use crate::model::EntityKind;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

mod collection;
mod record_store;

pub use collection::Collection;
pub use record_store::RecordStore;

pub type StoreResult<T> = Result<T, StoreError>;

/// Error returned by store mutations and persistence.
#[derive(Debug)]
pub enum StoreError {
    /// No record with the given key exists in the target collection.
    NotFound { entity: EntityKind, key: String },
    /// Reading or writing a data file failed.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound { entity, key } => write!(f, "{entity} not found: `{key}`"),
            Self::Io { path, source } => write!(f, "i/o error on `{}`: {source}", path.display()),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::NotFound { .. } => None,
            Self::Io { source, .. } => Some(source),
        }
    }
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Returns whether this error is a key miss rather than an I/O failure.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
