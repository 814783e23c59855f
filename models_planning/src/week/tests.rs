use chrono::{Datelike, NaiveDate, Weekday};

use super::{normalize_date_key, WeekKey, NO_WEEK};

#[test]
fn blank_input_resolves_to_the_sentinel() {
    assert_eq!(WeekKey::resolve(None), WeekKey::no_week());
    assert_eq!(WeekKey::resolve(Some("")), WeekKey::no_week());
    assert_eq!(WeekKey::resolve(Some("   ")), WeekKey::no_week());
    assert!(WeekKey::resolve(Some("\t\n")).is_no_week());
}

#[test]
fn other_values_pass_through_trimmed() {
    assert_eq!(WeekKey::resolve(Some("2024-W33")).as_str(), "2024-W33");
    assert_eq!(WeekKey::resolve(Some("  2024-W33  ")).as_str(), "2024-W33");
    assert_eq!(WeekKey::resolve(Some("week of aug 12")).as_str(), "week of aug 12");
}

#[test]
fn resolving_twice_changes_nothing() {
    for raw in [None, Some(""), Some("  "), Some("2024-W33"), Some(NO_WEEK), Some(" x ")] {
        let once = WeekKey::resolve(raw);
        let twice = WeekKey::resolve(Some(once.as_str()));
        assert_eq!(once, twice);
    }
}

#[test]
fn iso_week_maps_to_seven_dates_monday_first() {
    let dates = WeekKey::resolve(Some("2024-W33")).dates();
    assert_eq!(dates[0], NaiveDate::from_ymd_opt(2024, 8, 12).unwrap());
    assert_eq!(dates[6], NaiveDate::from_ymd_opt(2024, 8, 18).unwrap());
    assert_eq!(dates[0].weekday(), Weekday::Mon);
    for pair in dates.windows(2) {
        assert_eq!(pair[1] - pair[0], chrono::Duration::days(1));
    }
}

#[test]
fn week_fifty_three_exists_in_long_years() {
    let dates = WeekKey::resolve(Some("2020-W53")).dates();
    assert_eq!(dates[0], NaiveDate::from_ymd_opt(2020, 12, 28).unwrap());
}

#[test]
fn malformed_weeks_fall_back_to_the_current_week() {
    let current = WeekKey::no_week().dates();
    for raw in ["2024-W99", "2024-W00", "banana", "2024-33", "-W12"] {
        let dates = WeekKey::resolve(Some(raw)).dates();
        assert_eq!(dates, current, "{raw} should fall back");
        assert_eq!(dates[0].weekday(), Weekday::Mon);
    }
}

#[test]
fn the_sentinel_still_renders_a_week() {
    let dates = WeekKey::no_week().dates();
    assert_eq!(dates.len(), 7);
    assert_eq!(dates[0].weekday(), Weekday::Mon);
    assert_eq!(dates[6].weekday(), Weekday::Sun);
}

#[test]
fn date_keys_lose_their_time_suffix() {
    assert_eq!(normalize_date_key("2024-08-12"), "2024-08-12");
    assert_eq!(normalize_date_key("2024-08-12T00:00:00.000Z"), "2024-08-12");
    assert_eq!(normalize_date_key("2024-08-12 08:00"), "2024-08-12");
    assert_eq!(normalize_date_key("  2024-08-12  "), "2024-08-12");
    assert_eq!(normalize_date_key(""), "");
}
