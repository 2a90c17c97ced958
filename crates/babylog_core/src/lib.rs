//! Core logic for the baby care dashboard.
//! This crate is the single source of truth for profile and food-log rules.

pub mod calc;
pub mod db;
pub mod logging;
pub mod model;
pub mod service;
pub mod store;

pub use calc::{compute_age, next_suggestions, progress_percent, AGE_PLACEHOLDER};
pub use logging::{default_log_level, init_logging, logging_status, LogConfig, LoggingError};
pub use model::{BabyProfile, FoodLog};
pub use service::ack::{ack_channel, AckKind, AckSender, Acknowledgement};
pub use service::dashboard::Dashboard;
pub use service::food_log_service::FoodLogViewModel;
pub use service::navigation::{TabNavigator, UnknownViewError, View};
pub use service::profile_service::{BabyProfileViewModel, ProfileError, ProfileResult};
pub use store::{
    LocalStore, MemoryLocalStore, SqliteLocalStore, StoreError, StoreResult, BABY_PROFILE_KEY,
    FOODS_TRIED_KEY,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
