use std::fmt;

use chrono::{Datelike, Days, NaiveDate, Utc, Weekday};
use serde::{Deserialize, Serialize};

/// Sentinel stored when planning work is not tied to a calendar week.
pub const NO_WEEK: &str = "no-week";

/// An opaque week identifier, usually `YYYY-Wnn`.
///
/// Blank input resolves to the [`NO_WEEK`] sentinel; everything else passes
/// through untouched and is stored and compared as an exact string. Only the
/// display-side calendar mapping in [`WeekKey::dates`] ever interprets the
/// value.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash, sqlx::Type)]
#[serde(transparent)]
#[sqlx(transparent)]
pub struct WeekKey(String);

impl WeekKey {
    /// Normalizes raw week input from a route or form field.
    ///
    /// Trims surrounding whitespace; a missing or blank value becomes the
    /// sentinel. Applying this twice gives the same answer as applying it
    /// once.
    pub fn resolve(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            None | Some("") => Self::no_week(),
            Some(value) => Self(value.to_string()),
        }
    }

    /// The sentinel key for planning work without a week.
    pub fn no_week() -> Self {
        Self(NO_WEEK.to_string())
    }

    /// Whether this is the sentinel key.
    pub fn is_no_week(&self) -> bool {
        self.0 == NO_WEEK
    }

    /// The key as stored.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The seven calendar dates of this week, Monday first.
    ///
    /// The sentinel, malformed identifiers and out-of-range week numbers
    /// all fall back to the current ISO week; the board always has seven
    /// columns to render.
    pub fn dates(&self) -> [NaiveDate; 7] {
        self.dates_from(Utc::now().date_naive())
    }

    fn dates_from(&self, today: NaiveDate) -> [NaiveDate; 7] {
        let monday = self
            .parsed_monday()
            .unwrap_or_else(|| current_week_monday(today));
        std::array::from_fn(|offset| monday + Days::new(offset as u64))
    }

    fn parsed_monday(&self) -> Option<NaiveDate> {
        let (year, week) = self.0.split_once("-W")?;
        let year: i32 = year.parse().ok()?;
        let week: u32 = week.parse().ok()?;
        let monday = NaiveDate::from_isoywd_opt(year, week, Weekday::Mon)?;
        // The whole span has to be representable before we hand it out.
        monday.checked_add_days(Days::new(6))?;
        Some(monday)
    }
}

impl fmt::Display for WeekKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn current_week_monday(today: NaiveDate) -> NaiveDate {
    let week = today.iso_week();
    NaiveDate::from_isoywd_opt(week.year(), week.week(), Weekday::Mon).unwrap_or(today)
}

/// Reduces a stored date value to its `YYYY-MM-DD` key.
///
/// Legacy rows carry timestamps like `2024-08-12T00:00:00.000Z` or
/// `2024-08-12 08:00`; comparisons must only ever see the date part.
pub fn normalize_date_key(raw: &str) -> String {
    let trimmed = raw.trim();
    trimmed
        .split(|c| c == 'T' || c == ' ')
        .next()
        .unwrap_or(trimmed)
        .to_string()
}

#[cfg(test)]
mod tests;
