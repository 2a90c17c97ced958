//! Food introduction progress and "next up" suggestions.

/// Number of distinct foods that counts as 100% progress.
pub const TARGET_FOODS: usize = 40;

/// Maximum number of suggestions shown at once.
pub const SUGGESTION_LIMIT: usize = 6;

/// Ordered first-foods list used for suggestions.
pub const CURATED_FOODS: &[&str] = &[
    "Avocado",
    "Apple",
    "Banana",
    "Pear",
    "Peach",
    "Blueberries",
    "Strawberries",
    "Sweet Potato",
    "Carrot",
    "Peas",
    "Broccoli",
    "Zucchini",
    "Pumpkin",
    "Oatmeal",
    "Yogurt",
    "Egg (yolk)",
    "Chicken",
    "Turkey",
    "Lentils",
];

/// Percent of `target` reached, rounded and clamped to `0..=100`.
///
/// A zero target counts as complete.
pub fn progress_percent(tried_count: usize, target: usize) -> u8 {
    if target == 0 {
        return 100;
    }
    let ratio = (tried_count as f64 / target as f64).min(1.0);
    (ratio * 100.0).round() as u8
}

/// Curated items not yet in `tried`, in curated order, at most `limit` long.
pub fn next_suggestions<'a, T>(tried: &[T], curated: &[&'a str], limit: usize) -> Vec<&'a str>
where
    T: AsRef<str>,
{
    curated
        .iter()
        .copied()
        .filter(|candidate| !tried.iter().any(|food| food.as_ref() == *candidate))
        .take(limit)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{next_suggestions, progress_percent, CURATED_FOODS, SUGGESTION_LIMIT, TARGET_FOODS};

    #[test]
    fn progress_is_rounded_and_clamped() {
        assert_eq!(progress_percent(0, TARGET_FOODS), 0);
        assert_eq!(progress_percent(10, TARGET_FOODS), 25);
        assert_eq!(progress_percent(1, TARGET_FOODS), 3);
        assert_eq!(progress_percent(40, TARGET_FOODS), 100);
        assert_eq!(progress_percent(50, TARGET_FOODS), 100);
        assert_eq!(progress_percent(3, 0), 100);
    }

    #[test]
    fn suggestions_skip_tried_and_keep_order() {
        let curated = ["A", "B", "C", "D", "E", "F", "G"];
        let tried = ["B", "D"];
        assert_eq!(next_suggestions(&tried, &curated, 6), ["A", "C", "E", "F", "G"]);
        assert_eq!(next_suggestions(&tried, &curated, 2), ["A", "C"]);
    }

    #[test]
    fn default_curated_list_starts_with_first_six() {
        let tried: [String; 0] = [];
        assert_eq!(
            next_suggestions(&tried, CURATED_FOODS, SUGGESTION_LIMIT),
            ["Avocado", "Apple", "Banana", "Pear", "Peach", "Blueberries"]
        );
    }

    #[test]
    fn exhausted_curated_list_yields_nothing() {
        let tried: Vec<String> = CURATED_FOODS.iter().map(|f| f.to_string()).collect();
        assert!(next_suggestions(&tried, CURATED_FOODS, SUGGESTION_LIMIT).is_empty());
    }
}
