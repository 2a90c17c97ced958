//! Typed JSON documents on top of a raw `LocalStore`.

use super::{LocalStore, StoreError, StoreResult};
use log::{debug, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Loads and parses the document stored under `key`.
///
/// # Contract
/// - Missing key -> `Ok(None)`.
/// - Present but unparsable -> `Err(StoreError::Malformed)`; the stored value
///   is left untouched.
/// - Backend failure -> `Err(StoreError::Db)`.
pub fn load_document<T, S>(store: &S, key: &str) -> StoreResult<Option<T>>
where
    T: DeserializeOwned,
    S: LocalStore + ?Sized,
{
    let Some(raw) = store.get_item(key)? else {
        debug!("event=doc_load module=store status=missing key={key}");
        return Ok(None);
    };

    match serde_json::from_str::<T>(&raw) {
        Ok(document) => {
            debug!(
                "event=doc_load module=store status=ok key={key} bytes={}",
                raw.len()
            );
            Ok(Some(document))
        }
        Err(err) => {
            warn!(
                "event=doc_load module=store status=malformed key={key} bytes={} line={} column={}",
                raw.len(),
                err.line(),
                err.column()
            );
            Err(StoreError::Malformed {
                key: key.to_string(),
                reason: err.to_string(),
            })
        }
    }
}

/// Serializes `document` and writes it under `key`.
pub fn save_document<T, S>(store: &S, key: &str, document: &T) -> StoreResult<()>
where
    T: Serialize + ?Sized,
    S: LocalStore + ?Sized,
{
    let raw = serde_json::to_string(document).map_err(StoreError::Encode)?;
    store.set_item(key, &raw)?;
    debug!(
        "event=doc_save module=store status=ok key={key} bytes={}",
        raw.len()
    );
    Ok(())
}
