//! Two-tab navigation state.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Dashboard views reachable from the tab bar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum View {
    /// Baby profile card.
    #[default]
    Profile,
    /// Food introduction card.
    FoodLog,
}

impl View {
    /// Tab bar order.
    pub const ALL: [View; 2] = [View::Profile, View::FoodLog];

    /// Stable tab identifier.
    pub fn id(self) -> &'static str {
        match self {
            Self::Profile => "baby",
            Self::FoodLog => "food",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Profile => "Baby",
            Self::FoodLog => "Food",
        }
    }
}

/// Error for unknown tab identifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownViewError(pub String);

impl Display for UnknownViewError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown tab `{}`; expected baby|food", self.0)
    }
}

impl Error for UnknownViewError {}

impl FromStr for View {
    type Err = UnknownViewError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "baby" | "profile" => Ok(Self::Profile),
            "food" | "foods" => Ok(Self::FoodLog),
            other => Err(UnknownViewError(other.to_string())),
        }
    }
}

/// Holds which view is active. Starts on `View::Profile`.
#[derive(Debug, Clone, Default)]
pub struct TabNavigator {
    active: View,
}

impl TabNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> View {
        self.active
    }

    /// Activates `view` unconditionally.
    pub fn switch_to(&mut self, view: View) {
        self.active = view;
    }

    pub fn is_active(&self, view: View) -> bool {
        self.active == view
    }
}

#[cfg(test)]
mod tests {
    use super::{TabNavigator, View};

    #[test]
    fn starts_on_profile_and_switches_unconditionally() {
        let mut nav = TabNavigator::new();
        assert_eq!(nav.active(), View::Profile);

        nav.switch_to(View::FoodLog);
        nav.switch_to(View::FoodLog);
        assert!(nav.is_active(View::FoodLog));

        nav.switch_to(View::Profile);
        assert_eq!(nav.active(), View::Profile);
    }

    #[test]
    fn parses_tab_ids() {
        assert_eq!(" Baby ".parse::<View>().unwrap(), View::Profile);
        assert_eq!("food".parse::<View>().unwrap(), View::FoodLog);
        let err = "settings".parse::<View>().unwrap_err();
        assert!(err.to_string().contains("settings"));
    }
}
