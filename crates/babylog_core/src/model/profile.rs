//! Baby profile document.
//!
//! # Invariants
//! - `milestones` holds no duplicates.
//! - `birthdate` is a calendar date without time-of-day.
//!
//! Stored shape: `{ "name": string, "birthdate": "YYYY-MM-DD" | "", "milestones": [string] }`.
//! Missing or `null` fields load as their empty defaults.

use super::{dedup_preserving_order, insert_unique, remove_exact};
use chrono::NaiveDate;
use log::warn;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Wire format of a stored birthdate.
pub const BIRTHDATE_FORMAT: &str = "%Y-%m-%d";

/// Profile fields for one baby.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BabyProfile {
    /// Free text, may be empty.
    #[serde(default, deserialize_with = "string_or_null")]
    pub name: String,
    /// Serialized as an ISO date, or `""` when unset.
    #[serde(
        default,
        serialize_with = "serialize_birthdate",
        deserialize_with = "deserialize_birthdate"
    )]
    pub birthdate: Option<NaiveDate>,
    #[serde(default, deserialize_with = "unique_list")]
    milestones: Vec<String>,
}

impl BabyProfile {
    pub fn new(name: impl Into<String>, birthdate: Option<NaiveDate>) -> Self {
        Self {
            name: name.into(),
            birthdate,
            milestones: Vec::new(),
        }
    }

    /// Milestones in insertion order.
    pub fn milestones(&self) -> &[String] {
        &self.milestones
    }

    /// Inserts an already trimmed milestone. Returns `true` when new.
    pub fn insert_milestone(&mut self, milestone: impl Into<String>) -> bool {
        insert_unique(&mut self.milestones, milestone.into())
    }

    /// Removes a milestone by exact match. Returns `true` when present.
    pub fn remove_milestone(&mut self, milestone: &str) -> bool {
        remove_exact(&mut self.milestones, milestone)
    }
}

/// Parses a `YYYY-MM-DD` string.
pub fn parse_birthdate(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), BIRTHDATE_FORMAT).ok()
}

fn serialize_birthdate<S>(value: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(date) => serializer.collect_str(&date.format(BIRTHDATE_FORMAT)),
        None => serializer.serialize_str(""),
    }
}

fn deserialize_birthdate<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?.unwrap_or_default();
    if raw.trim().is_empty() {
        return Ok(None);
    }
    let parsed = parse_birthdate(&raw);
    if parsed.is_none() {
        warn!(
            "event=profile_decode module=model status=degraded field=birthdate chars={}",
            raw.chars().count()
        );
    }
    Ok(parsed)
}

fn string_or_null<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

pub(crate) fn unique_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let values = Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(dedup_preserving_order(values))
}

#[cfg(test)]
mod tests {
    use super::{parse_birthdate, BabyProfile};
    use chrono::NaiveDate;

    #[test]
    fn serializes_to_stored_shape() {
        let mut profile = BabyProfile::new("Maya", NaiveDate::from_ymd_opt(2024, 2, 9));
        profile.insert_milestone("first smile");

        let json = serde_json::to_value(&profile).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "Maya",
                "birthdate": "2024-02-09",
                "milestones": ["first smile"]
            })
        );
    }

    #[test]
    fn empty_birthdate_serializes_as_empty_string() {
        let json = serde_json::to_value(BabyProfile::default()).unwrap();
        assert_eq!(json["birthdate"], "");
    }

    #[test]
    fn partial_document_loads_with_defaults() {
        let profile: BabyProfile = serde_json::from_str(r#"{"name":"Leo"}"#).unwrap();
        assert_eq!(profile.name, "Leo");
        assert_eq!(profile.birthdate, None);
        assert!(profile.milestones().is_empty());

        let profile: BabyProfile =
            serde_json::from_str(r#"{"name":null,"birthdate":null,"milestones":null}"#).unwrap();
        assert_eq!(profile, BabyProfile::default());
    }

    #[test]
    fn unparsable_birthdate_loads_as_none() {
        let profile: BabyProfile =
            serde_json::from_str(r#"{"name":"","birthdate":"last spring","milestones":[]}"#)
                .unwrap();
        assert_eq!(profile.birthdate, None);
    }

    #[test]
    fn stored_duplicates_collapse_on_load() {
        let profile: BabyProfile =
            serde_json::from_str(r#"{"milestones":["rolled over","smile","rolled over"]}"#)
                .unwrap();
        assert_eq!(profile.milestones(), ["rolled over", "smile"]);
    }

    #[test]
    fn parse_birthdate_requires_iso_calendar_date() {
        assert_eq!(
            parse_birthdate(" 2023-01-15 "),
            NaiveDate::from_ymd_opt(2023, 1, 15)
        );
        assert_eq!(parse_birthdate("15/01/2023"), None);
        assert_eq!(parse_birthdate("2023-02-30"), None);
    }
}
