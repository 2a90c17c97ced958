//! Pure derived-view calculations.
//!
//! Nothing here reads storage or the clock; callers pass "today" in.

pub mod age;
pub mod food_progress;

pub use age::{compute_age, AGE_PLACEHOLDER};
pub use food_progress::{
    next_suggestions, progress_percent, CURATED_FOODS, SUGGESTION_LIMIT, TARGET_FOODS,
};
