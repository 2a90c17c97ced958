//! Baby profile view-model.
//!
//! # Responsibility
//! - Own the in-memory `BabyProfile` and the pending milestone input.
//! - Flush the profile to the store after every successful mutation.
//! - Publish acknowledgements for milestone adds and explicit saves.
//!
//! # Invariants
//! - The in-memory profile and the stored document match after each call
//!   returns `Ok`.
//! - Empty input and removal of absent milestones are silent no-ops.

use crate::calc::compute_age;
use crate::model::profile::parse_birthdate;
use crate::model::BabyProfile;
use crate::service::ack::{AckKind, AckSender};
use crate::service::load_or_default;
use crate::store::{save_document, LocalStore, StoreError, BABY_PROFILE_KEY};
use chrono::{Local, NaiveDate};
use log::{debug, info};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ProfileResult<T> = Result<T, ProfileError>;

/// Errors returned by profile mutations.
#[derive(Debug)]
pub enum ProfileError {
    /// Birthdate input is not a `YYYY-MM-DD` calendar date.
    InvalidBirthdate(String),
    /// Birthdate input lies after today.
    FutureBirthdate(NaiveDate),
    /// Persistence-layer failure.
    Store(StoreError),
}

impl Display for ProfileError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidBirthdate(value) => {
                write!(f, "invalid birthdate `{value}`; expected YYYY-MM-DD")
            }
            Self::FutureBirthdate(date) => write!(f, "birthdate {date} is in the future"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ProfileError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            _ => None,
        }
    }
}

impl From<StoreError> for ProfileError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// View-model over the stored baby profile.
pub struct BabyProfileViewModel<S: LocalStore> {
    store: S,
    profile: BabyProfile,
    milestone_draft: String,
    acks: AckSender,
}

impl<S: LocalStore> BabyProfileViewModel<S> {
    /// Loads the profile from `store`.
    ///
    /// Missing or malformed documents start an empty profile, which is
    /// written back immediately. Backend failures are returned.
    pub fn load(store: S, acks: AckSender) -> ProfileResult<Self> {
        let (profile, recovered) = load_or_default::<BabyProfile, _>(&store, BABY_PROFILE_KEY)?;
        let view = Self {
            store,
            profile,
            milestone_draft: String::new(),
            acks,
        };
        if recovered {
            view.persist()?;
        }
        info!(
            "event=profile_load module=service status=ok recovered={} milestones={}",
            recovered,
            view.profile.milestones().len()
        );
        Ok(view)
    }

    pub fn profile(&self) -> &BabyProfile {
        &self.profile
    }

    pub fn name(&self) -> &str {
        &self.profile.name
    }

    pub fn birthdate(&self) -> Option<NaiveDate> {
        self.profile.birthdate
    }

    pub fn milestones(&self) -> &[String] {
        self.profile.milestones()
    }

    /// Pending text of the milestone input.
    pub fn milestone_draft(&self) -> &str {
        &self.milestone_draft
    }

    /// Age as of the local calendar date.
    pub fn age(&self) -> String {
        self.age_on(Local::now().date_naive())
    }

    pub fn age_on(&self, today: NaiveDate) -> String {
        compute_age(self.profile.birthdate, today)
    }

    /// Replaces the name verbatim; any string is accepted.
    pub fn set_name(&mut self, name: impl Into<String>) -> ProfileResult<()> {
        self.profile.name = name.into();
        self.persist()?;
        Ok(())
    }

    /// Sets the birthdate from `YYYY-MM-DD` input, judged against the local date.
    pub fn set_birthdate(&mut self, input: &str) -> ProfileResult<()> {
        self.set_birthdate_on(input, Local::now().date_naive())
    }

    /// Sets the birthdate from `YYYY-MM-DD` input.
    ///
    /// # Contract
    /// - Empty or whitespace input clears the birthdate.
    /// - Non-ISO input is rejected with `InvalidBirthdate`.
    /// - Dates after `today` are rejected with `FutureBirthdate`.
    /// - On rejection the stored profile is unchanged.
    pub fn set_birthdate_on(&mut self, input: &str, today: NaiveDate) -> ProfileResult<()> {
        let birthdate = if input.trim().is_empty() {
            None
        } else {
            let date = parse_birthdate(input)
                .ok_or_else(|| ProfileError::InvalidBirthdate(input.trim().to_string()))?;
            if date > today {
                return Err(ProfileError::FutureBirthdate(date));
            }
            Some(date)
        };

        self.profile.birthdate = birthdate;
        self.persist()?;
        Ok(())
    }

    /// Replaces the pending milestone input.
    pub fn set_milestone_draft(&mut self, text: impl Into<String>) {
        self.milestone_draft = text.into();
    }

    /// Adds a milestone.
    ///
    /// Returns `Ok(false)` without side effects when `text` is blank.
    /// Otherwise inserts the trimmed text (duplicates collapse), clears the
    /// pending input, persists and acknowledges.
    pub fn add_milestone(&mut self, text: &str) -> ProfileResult<bool> {
        let milestone = text.trim();
        if milestone.is_empty() {
            return Ok(false);
        }

        let inserted = self.profile.insert_milestone(milestone);
        self.milestone_draft.clear();
        self.persist()?;
        debug!(
            "event=milestone_add module=service status=ok inserted={} total={}",
            inserted,
            self.profile.milestones().len()
        );
        self.acks.notify(AckKind::MilestoneAdded);
        Ok(true)
    }

    /// Adds whatever is in the pending milestone input.
    pub fn submit_milestone_draft(&mut self) -> ProfileResult<bool> {
        let draft = std::mem::take(&mut self.milestone_draft);
        let added = self.add_milestone(&draft)?;
        if !added {
            self.milestone_draft = draft;
        }
        Ok(added)
    }

    /// Removes a milestone by exact match. Absent milestones are ignored.
    pub fn remove_milestone(&mut self, text: &str) -> ProfileResult<bool> {
        if !self.profile.remove_milestone(text) {
            return Ok(false);
        }
        self.persist()?;
        Ok(true)
    }

    /// Confirms the profile to the user.
    ///
    /// Every mutation is already persisted, so this only acknowledges.
    pub fn save(&self) {
        self.acks.notify(AckKind::ProfileSaved);
    }

    fn persist(&self) -> Result<(), StoreError> {
        save_document(&self.store, BABY_PROFILE_KEY, &self.profile)
    }
}

#[cfg(test)]
mod tests {
    use super::{BabyProfileViewModel, ProfileError};
    use crate::service::ack::{ack_channel, AckSender};
    use crate::store::MemoryLocalStore;
    use chrono::NaiveDate;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 10).unwrap()
    }

    #[test]
    fn blank_birthdate_clears_and_invalid_input_is_rejected() {
        let store = MemoryLocalStore::new();
        let mut view = BabyProfileViewModel::load(&store, AckSender::detached()).unwrap();

        view.set_birthdate_on("2023-01-15", today()).unwrap();
        assert_eq!(view.age_on(today()), "1y 1m");

        let err = view.set_birthdate_on("January", today()).unwrap_err();
        assert!(matches!(err, ProfileError::InvalidBirthdate(_)));
        assert_eq!(view.birthdate(), NaiveDate::from_ymd_opt(2023, 1, 15));

        view.set_birthdate_on("  ", today()).unwrap();
        assert_eq!(view.birthdate(), None);
        assert_eq!(view.age_on(today()), "—");
    }

    #[test]
    fn future_birthdate_is_rejected() {
        let store = MemoryLocalStore::new();
        let mut view = BabyProfileViewModel::load(&store, AckSender::detached()).unwrap();

        let err = view.set_birthdate_on("2024-03-11", today()).unwrap_err();
        assert!(matches!(err, ProfileError::FutureBirthdate(_)));
        assert!(err.to_string().contains("future"));
        assert_eq!(view.birthdate(), None);
    }

    #[test]
    fn draft_is_cleared_only_after_successful_add() {
        let store = MemoryLocalStore::new();
        let (acks, receiver) = ack_channel();
        let mut view = BabyProfileViewModel::load(&store, acks).unwrap();

        view.set_milestone_draft("   ");
        assert!(!view.submit_milestone_draft().unwrap());
        assert_eq!(view.milestone_draft(), "   ");

        view.set_milestone_draft(" first smile ");
        assert!(view.submit_milestone_draft().unwrap());
        assert_eq!(view.milestone_draft(), "");
        assert_eq!(view.milestones(), ["first smile"]);
        assert_eq!(receiver.try_iter().count(), 1);
    }

    #[test]
    fn save_only_acknowledges() {
        let store = MemoryLocalStore::new();
        let (acks, receiver) = ack_channel();
        let view = BabyProfileViewModel::load(&store, acks).unwrap();

        view.save();
        let acks: Vec<_> = receiver.try_iter().collect();
        assert_eq!(acks.len(), 1);
        assert_eq!(acks[0].title, "Saved");
    }
}
