//! Plain-text rendering of the dashboard cards.

use babylog_core::{
    Acknowledgement, BabyProfileViewModel, Dashboard, FoodLogViewModel, LocalStore, TabNavigator,
    View,
};
use chrono::NaiveDate;
use std::fmt::Write;

const PROGRESS_BAR_WIDTH: usize = 20;

/// Tab bar with the active tab in brackets.
pub fn render_tab_bar(tabs: &TabNavigator) -> String {
    View::ALL
        .iter()
        .map(|view| {
            if tabs.is_active(*view) {
                format!("[ {} ]", view.label())
            } else {
                format!("  {}  ", view.label())
            }
        })
        .collect::<Vec<_>>()
        .join(" | ")
}

pub fn render_profile<S: LocalStore>(view: &BabyProfileViewModel<S>, today: NaiveDate) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Baby Profile");
    let _ = writeln!(out, "  Name:      {}", or_dash(view.name()));
    let birthdate = view
        .birthdate()
        .map(|date| date.format("%Y-%m-%d").to_string())
        .unwrap_or_default();
    let _ = writeln!(out, "  Birthdate: {}", or_dash(&birthdate));
    let _ = writeln!(out, "  Age:       {}", view.age_on(today));
    let _ = writeln!(out, "  Milestones:");
    if view.milestones().is_empty() {
        let _ = writeln!(out, "    No milestones yet. The first ones are coming soon!");
    }
    for milestone in view.milestones() {
        let _ = writeln!(out, "    - {milestone}");
    }
    out
}

pub fn render_food_log<S: LocalStore>(view: &FoodLogViewModel<S>) -> String {
    let mut out = String::new();
    let percent = view.progress_percent();
    let _ = writeln!(out, "Food Introduction Log");
    let _ = writeln!(
        out,
        "  {} / {} foods tried",
        view.tried_count(),
        view.target()
    );
    let _ = writeln!(out, "  {} {percent}%", progress_bar(percent));

    let suggestions = view.next_suggestions();
    if !suggestions.is_empty() {
        let _ = writeln!(out, "  Next up:");
        for (index, food) in suggestions.iter().enumerate() {
            let _ = writeln!(out, "    {}. {food}", index + 1);
        }
    }

    let _ = writeln!(out, "  Tried so far:");
    if view.tried().is_empty() {
        let _ = writeln!(
            out,
            "    No foods yet. When you're ready, start with gentle single-ingredient purées."
        );
    }
    for food in view.tried() {
        let _ = writeln!(out, "    - {food}");
    }
    out
}

/// Tab bar followed by the card of the active view.
pub fn render_active<S: LocalStore + Clone>(dashboard: &Dashboard<S>, today: NaiveDate) -> String {
    let card = match dashboard.tabs.active() {
        View::Profile => render_profile(&dashboard.profile, today),
        View::FoodLog => render_food_log(&dashboard.food_log),
    };
    format!("{}\n\n{card}", render_tab_bar(&dashboard.tabs))
}

/// Both cards, one after the other.
pub fn render_dashboard<S: LocalStore + Clone>(
    dashboard: &Dashboard<S>,
    today: NaiveDate,
) -> String {
    format!(
        "{}\n{}",
        render_profile(&dashboard.profile, today),
        render_food_log(&dashboard.food_log)
    )
}

pub fn render_ack(ack: &Acknowledgement) -> String {
    format!("✓ {}: {}", ack.title, ack.description)
}

fn progress_bar(percent: u8) -> String {
    let filled = usize::from(percent.min(100)) * PROGRESS_BAR_WIDTH / 100;
    format!(
        "[{}{}]",
        "#".repeat(filled),
        "-".repeat(PROGRESS_BAR_WIDTH - filled)
    )
}

fn or_dash(value: &str) -> &str {
    if value.trim().is_empty() {
        "—"
    } else {
        value
    }
}
