//! Local key-value store adapter.
//!
//! # Responsibility
//! - Persist JSON documents under string keys.
//! - Report malformed documents as explicit outcomes so callers choose
//!   their own recovery policy.
//!
//! # Invariants
//! - `save_document` unconditionally overwrites the previous value.
//! - A missing key is `Ok(None)`, never an error.
//!
//! # See also
//! - `crate::service` for the fall-back-to-default policy.

mod document;
mod local_store;

pub use document::{load_document, save_document};
pub use local_store::{LocalStore, MemoryLocalStore, SqliteLocalStore};

use crate::db::DbError;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Storage key of the baby profile document.
pub const BABY_PROFILE_KEY: &str = "mlm.babyProfile";
/// Storage key of the tried-foods document.
pub const FOODS_TRIED_KEY: &str = "mlm.foodsTried";

pub type StoreResult<T> = Result<T, StoreError>;

/// Error returned by store reads and writes.
#[derive(Debug)]
pub enum StoreError {
    /// Backend I/O failure.
    Db(DbError),
    /// Stored text under `key` is not a valid document.
    Malformed { key: String, reason: String },
    /// In-memory value could not be serialized.
    Encode(serde_json::Error),
}

impl StoreError {
    /// Whether this error is a recoverable malformed-document outcome.
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::Malformed { .. })
    }
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Malformed { key, reason } => {
                write!(f, "malformed document under `{key}`: {reason}")
            }
            Self::Encode(err) => write!(f, "failed to encode document: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Malformed { .. } => None,
            Self::Encode(err) => Some(err),
        }
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}
