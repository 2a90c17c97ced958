//! Baby age rendering.

use chrono::{Datelike, NaiveDate};

/// Rendered when no birthdate is known.
pub const AGE_PLACEHOLDER: &str = "—";

/// Renders whole years and months elapsed between `birthdate` and `today`.
///
/// A month only counts once its day-of-month has been reached. The years
/// segment is omitted below one year (`"4m"`, `"1y 0m"`). Birthdates after
/// `today` render the placeholder.
pub fn compute_age(birthdate: Option<NaiveDate>, today: NaiveDate) -> String {
    let Some(birthdate) = birthdate else {
        return AGE_PLACEHOLDER.to_string();
    };

    let months = elapsed_months(birthdate, today);
    if months < 0 {
        return AGE_PLACEHOLDER.to_string();
    }

    let years = months / 12;
    let rem_months = months % 12;
    if years > 0 {
        format!("{years}y {rem_months}m")
    } else {
        format!("{rem_months}m")
    }
}

fn elapsed_months(birthdate: NaiveDate, today: NaiveDate) -> i32 {
    let mut months = (today.year() - birthdate.year()) * 12
        + (today.month() as i32 - birthdate.month() as i32);
    if today.day() < birthdate.day() {
        months -= 1;
    }
    months
}

#[cfg(test)]
mod tests {
    use super::{compute_age, AGE_PLACEHOLDER};
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn partial_final_month_is_not_counted() {
        assert_eq!(
            compute_age(Some(date(2023, 1, 15)), date(2024, 3, 10)),
            "1y 1m"
        );
        assert_eq!(
            compute_age(Some(date(2023, 1, 15)), date(2024, 3, 15)),
            "1y 2m"
        );
    }

    #[test]
    fn under_one_year_omits_years_segment() {
        assert_eq!(compute_age(Some(date(2024, 6, 1)), date(2024, 6, 1)), "0m");
        assert_eq!(compute_age(Some(date(2024, 1, 31)), date(2024, 6, 30)), "4m");
    }

    #[test]
    fn whole_years_keep_zero_months() {
        assert_eq!(compute_age(Some(date(2022, 5, 5)), date(2024, 5, 5)), "2y 0m");
    }

    #[test]
    fn missing_or_future_birthdate_renders_placeholder() {
        assert_eq!(compute_age(None, date(2024, 1, 1)), AGE_PLACEHOLDER);
        assert_eq!(
            compute_age(Some(date(2025, 1, 1)), date(2024, 12, 31)),
            AGE_PLACEHOLDER
        );
    }
}
