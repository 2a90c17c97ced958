//! View-models and session state.
//!
//! # Responsibility
//! - Own in-memory entities and route every mutation through the store.
//! - Decide the recovery policy for unreadable stored documents.
//! - Publish acknowledgements without depending on any UI.
//!
//! # Invariants
//! - View-models stay storage-agnostic; they only see `LocalStore`.

pub mod ack;
pub mod dashboard;
pub mod food_log_service;
pub mod navigation;
pub mod profile_service;

use crate::store::{load_document, LocalStore, StoreResult};
use log::warn;
use serde::de::DeserializeOwned;

/// Loads `key`, falling back to `T::default()` when missing or malformed.
///
/// Returns the entity and whether the fallback was taken. Backend errors
/// propagate.
pub(crate) fn load_or_default<T, S>(store: &S, key: &str) -> StoreResult<(T, bool)>
where
    T: DeserializeOwned + Default,
    S: LocalStore + ?Sized,
{
    match load_document::<T, S>(store, key) {
        Ok(Some(document)) => Ok((document, false)),
        Ok(None) => Ok((T::default(), true)),
        Err(err) if err.is_malformed() => {
            warn!("event=doc_recover module=service status=fallback_default key={key}");
            Ok((T::default(), true))
        }
        Err(err) => Err(err),
    }
}
