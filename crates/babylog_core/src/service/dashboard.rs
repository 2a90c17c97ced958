//! Session state for the whole dashboard.

use crate::service::ack::AckSender;
use crate::service::food_log_service::FoodLogViewModel;
use crate::service::navigation::TabNavigator;
use crate::service::profile_service::{BabyProfileViewModel, ProfileResult};
use crate::store::LocalStore;

/// Explicitly owned session state: both view-models plus the tab bar.
///
/// `S` is usually a shared reference to one backend, so both view-models
/// write to the same store.
pub struct Dashboard<S: LocalStore + Clone> {
    pub profile: BabyProfileViewModel<S>,
    pub food_log: FoodLogViewModel<S>,
    pub tabs: TabNavigator,
}

impl<S: LocalStore + Clone> Dashboard<S> {
    /// Loads both documents from `store`; the tab bar starts on the profile.
    pub fn load(store: S, acks: AckSender) -> ProfileResult<Self> {
        let profile = BabyProfileViewModel::load(store.clone(), acks.clone())?;
        let food_log = FoodLogViewModel::load(store, acks)?;
        Ok(Self {
            profile,
            food_log,
            tabs: TabNavigator::new(),
        })
    }
}
