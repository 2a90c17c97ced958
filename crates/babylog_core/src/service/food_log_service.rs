//! Food log view-model.
//!
//! # Responsibility
//! - Own the in-memory `FoodLog` and the pending food input.
//! - Flush the log to the store after every successful mutation.
//! - Derive count, progress and suggestions from current state on each read.
//!
//! # Invariants
//! - Added names are trimmed and capitalized before the dedup check.
//! - Removal matches stored names exactly and never re-normalizes.

use crate::calc::{next_suggestions, progress_percent, CURATED_FOODS, SUGGESTION_LIMIT, TARGET_FOODS};
use crate::model::FoodLog;
use crate::service::ack::{AckKind, AckSender};
use crate::service::load_or_default;
use crate::store::{save_document, LocalStore, StoreResult, FOODS_TRIED_KEY};
use log::{debug, info};

/// View-model over the stored tried-foods list.
pub struct FoodLogViewModel<S: LocalStore> {
    store: S,
    log: FoodLog,
    food_draft: String,
    acks: AckSender,
}

impl<S: LocalStore> FoodLogViewModel<S> {
    /// Loads the tried-foods list from `store`.
    ///
    /// Missing or malformed documents start an empty log, which is written
    /// back immediately. Backend failures are returned.
    pub fn load(store: S, acks: AckSender) -> StoreResult<Self> {
        let (log, recovered) = load_or_default::<FoodLog, _>(&store, FOODS_TRIED_KEY)?;
        let view = Self {
            store,
            log,
            food_draft: String::new(),
            acks,
        };
        if recovered {
            view.persist()?;
        }
        info!(
            "event=food_log_load module=service status=ok recovered={} tried={}",
            recovered,
            view.log.len()
        );
        Ok(view)
    }

    pub fn log(&self) -> &FoodLog {
        &self.log
    }

    pub fn tried(&self) -> &[String] {
        self.log.tried()
    }

    pub fn tried_count(&self) -> usize {
        self.log.len()
    }

    pub fn target(&self) -> usize {
        TARGET_FOODS
    }

    /// Progress toward `TARGET_FOODS`, `0..=100`.
    pub fn progress_percent(&self) -> u8 {
        progress_percent(self.log.len(), TARGET_FOODS)
    }

    /// Up to `SUGGESTION_LIMIT` curated foods not tried yet.
    pub fn next_suggestions(&self) -> Vec<&'static str> {
        next_suggestions(self.log.tried(), CURATED_FOODS, SUGGESTION_LIMIT)
    }

    /// Pending text of the food input.
    pub fn food_draft(&self) -> &str {
        &self.food_draft
    }

    pub fn set_food_draft(&mut self, text: impl Into<String>) {
        self.food_draft = text.into();
    }

    /// Logs a food.
    ///
    /// Returns `Ok(false)` without side effects when `name` is blank.
    /// Otherwise inserts the capitalized, trimmed name (duplicates collapse),
    /// clears the pending input, persists and acknowledges.
    pub fn add_food(&mut self, name: &str) -> StoreResult<bool> {
        let clean = name.trim();
        if clean.is_empty() {
            return Ok(false);
        }

        let inserted = self.log.insert_food(clean);
        self.food_draft.clear();
        self.persist()?;
        debug!(
            "event=food_add module=service status=ok inserted={} tried={}",
            inserted,
            self.log.len()
        );
        self.acks.notify(AckKind::FoodLogged);
        Ok(true)
    }

    /// Logs whatever is in the pending food input.
    pub fn submit_food_draft(&mut self) -> StoreResult<bool> {
        let draft = std::mem::take(&mut self.food_draft);
        let added = self.add_food(&draft)?;
        if !added {
            self.food_draft = draft;
        }
        Ok(added)
    }

    /// Logs the suggestion at `index` of the current `next_suggestions`.
    ///
    /// Returns the logged name, or `None` when `index` is out of range.
    pub fn add_suggestion(&mut self, index: usize) -> StoreResult<Option<&'static str>> {
        let Some(food) = self.next_suggestions().get(index).copied() else {
            return Ok(None);
        };
        self.add_food(food)?;
        Ok(Some(food))
    }

    /// Removes a food by exact match. Absent names are ignored.
    pub fn remove_food(&mut self, name: &str) -> StoreResult<bool> {
        if !self.log.remove_food(name) {
            return Ok(false);
        }
        self.persist()?;
        Ok(true)
    }

    fn persist(&self) -> StoreResult<()> {
        save_document(&self.store, FOODS_TRIED_KEY, &self.log)
    }
}

#[cfg(test)]
mod tests {
    use super::FoodLogViewModel;
    use crate::service::ack::{ack_channel, AckSender};
    use crate::store::MemoryLocalStore;

    #[test]
    fn derived_reads_follow_current_state() {
        let store = MemoryLocalStore::new();
        let mut view = FoodLogViewModel::load(&store, AckSender::detached()).unwrap();
        assert_eq!(view.progress_percent(), 0);
        assert_eq!(view.next_suggestions()[0], "Avocado");

        view.add_food("avocado").unwrap();
        view.add_food("banana").unwrap();
        assert_eq!(view.tried_count(), 2);
        assert_eq!(view.progress_percent(), 5);
        assert_eq!(
            view.next_suggestions(),
            ["Apple", "Pear", "Peach", "Blueberries", "Strawberries", "Sweet Potato"]
        );
    }

    #[test]
    fn suggestion_index_goes_through_add_food() {
        let store = MemoryLocalStore::new();
        let (acks, receiver) = ack_channel();
        let mut view = FoodLogViewModel::load(&store, acks).unwrap();

        assert_eq!(view.add_suggestion(1).unwrap(), Some("Apple"));
        assert_eq!(view.add_suggestion(99).unwrap(), None);
        assert_eq!(view.tried(), ["Apple"]);
        assert_eq!(receiver.try_iter().count(), 1);
    }

    #[test]
    fn blank_draft_is_kept_and_not_acknowledged() {
        let store = MemoryLocalStore::new();
        let (acks, receiver) = ack_channel();
        let mut view = FoodLogViewModel::load(&store, acks).unwrap();

        view.set_food_draft("  ");
        assert!(!view.submit_food_draft().unwrap());
        assert_eq!(view.food_draft(), "  ");
        assert_eq!(receiver.try_iter().count(), 0);

        view.set_food_draft("peas");
        assert!(view.submit_food_draft().unwrap());
        assert_eq!(view.food_draft(), "");
        assert_eq!(view.tried(), ["Peas"]);
    }
}
