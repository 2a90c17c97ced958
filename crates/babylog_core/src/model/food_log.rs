//! Food introduction log document.
//!
//! Stored shape: a JSON array of food names.
//!
//! # Invariants
//! - Names inserted through `insert_food` start with an uppercase character.
//! - No duplicate names (exact match after normalization).

use super::profile::unique_list;
use super::{insert_unique, remove_exact};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Set of foods the baby has tried, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FoodLog {
    tried: Vec<String>,
}

impl FoodLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tried(&self) -> &[String] {
        &self.tried
    }

    pub fn len(&self) -> usize {
        self.tried.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tried.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.tried.iter().any(|food| food == name)
    }

    /// Capitalizes and inserts an already trimmed name.
    ///
    /// Returns `true` when the normalized name was not yet present.
    pub fn insert_food(&mut self, name: &str) -> bool {
        insert_unique(&mut self.tried, capitalize_first(name))
    }

    /// Removes a name by exact match, without normalizing `name`.
    pub fn remove_food(&mut self, name: &str) -> bool {
        remove_exact(&mut self.tried, name)
    }
}

impl Serialize for FoodLog {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.tried.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for FoodLog {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Self {
            tried: unique_list(deserializer)?,
        })
    }
}

/// Uppercases the first character and keeps the rest unchanged.
pub fn capitalize_first(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
