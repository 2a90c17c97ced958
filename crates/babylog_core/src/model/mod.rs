//! Persisted domain entities.
//!
//! # Responsibility
//! - Define the two stored documents: `BabyProfile` and `FoodLog`.
//! - Own the set semantics shared by milestones and tried foods.
//!
//! # Invariants
//! - Lists never contain duplicate strings (exact, case-sensitive match).
//! - Insertion order is preserved for display stability.

pub mod food_log;
pub mod profile;

pub use food_log::{capitalize_first, FoodLog};
pub use profile::BabyProfile;

/// Appends `value` unless an identical string is already present.
///
/// Returns `true` when the list changed.
pub(crate) fn insert_unique(list: &mut Vec<String>, value: String) -> bool {
    if list.iter().any(|existing| *existing == value) {
        return false;
    }
    list.push(value);
    true
}

/// Removes the first exact match of `value`.
///
/// Returns `true` when the list changed.
pub(crate) fn remove_exact(list: &mut Vec<String>, value: &str) -> bool {
    match list.iter().position(|existing| existing == value) {
        Some(index) => {
            list.remove(index);
            true
        }
        None => false,
    }
}

/// Drops later duplicates while keeping first-seen order.
pub(crate) fn dedup_preserving_order(values: Vec<String>) -> Vec<String> {
    let mut unique = Vec::with_capacity(values.len());
    for value in values {
        insert_unique(&mut unique, value);
    }
    unique
}
