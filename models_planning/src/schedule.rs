use serde::{Deserialize, Serialize};

/// Grid opening hour used when no day contributes one.
pub const DEFAULT_OPEN_HOUR: f64 = 8.0;
/// Grid closing hour used when no day contributes one.
pub const DEFAULT_CLOSE_HOUR: f64 = 18.0;

/// One weekday's opening window from a planning template.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DayWindow {
    /// Weekday name as the template editor wrote it, e.g. "Monday".
    pub day: String,
    /// Closed days render unavailable regardless of any times present.
    pub closed: bool,
    /// Opening time `HH:MM`, when open.
    pub start: Option<String>,
    /// Closing time `HH:MM`, when open.
    pub end: Option<String>,
}

/// Vertical extent of the planner grid, in fractional hours.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct OpenHours {
    /// First rendered hour.
    pub start_hour: f64,
    /// Last rendered hour.
    pub end_hour: f64,
}

/// The tolerant shape schedule entries are read through. Editors of several
/// generations wrote this JSON; missing and extra fields are both normal.
#[derive(Deserialize)]
struct RawDay {
    day: Option<String>,
    #[serde(default)]
    closed: Option<bool>,
    #[serde(default)]
    start: Option<String>,
    #[serde(default)]
    end: Option<String>,
}

/// Reads the per-day windows out of a stored schedule blob.
///
/// Absent, malformed and wrong-shaped input all come back as an empty list;
/// this function never fails. Entries marked closed drop whatever stray
/// times they carry. The output holds exactly the days present in the
/// input, in input order.
pub fn parse_week_schedule(raw: Option<&str>) -> Vec<DayWindow> {
    let Some(raw) = raw else {
        return Vec::new();
    };
    let Ok(entries) = serde_json::from_str::<Vec<serde_json::Value>>(raw) else {
        return Vec::new();
    };

    entries
        .into_iter()
        .filter_map(|entry| {
            let raw: RawDay = serde_json::from_value(entry).ok()?;
            let day = raw.day?;
            if raw.closed.unwrap_or(false) {
                return Some(DayWindow {
                    day,
                    closed: true,
                    start: None,
                    end: None,
                });
            }
            Some(DayWindow {
                day,
                closed: false,
                start: raw.start,
                end: raw.end,
            })
        })
        .collect()
}

/// Parses `HH:MM` into minutes since midnight.
///
/// Accepts `00:00` through `23:59`, plus `24:00` as an end-of-day bound.
pub fn parse_hhmm(value: &str) -> Option<u16> {
    let (hours, minutes) = value.trim().split_once(':')?;
    let hours: u16 = hours.parse().ok()?;
    let minutes: u16 = minutes.parse().ok()?;
    if minutes > 59 {
        return None;
    }
    let total = hours.checked_mul(60)?.checked_add(minutes)?;
    if total > 24 * 60 {
        return None;
    }
    Some(total)
}

/// Parses `HH:MM` into fractional hours, e.g. `09:30` into `9.5`.
pub fn hhmm_to_hours(value: &str) -> Option<f64> {
    parse_hhmm(value).map(|minutes| f64::from(minutes) / 60.0)
}

/// The grid extent for a parsed schedule: earliest open to latest close
/// across the open days. Sides no day contributes to fall back to
/// 08:00 and 18:00.
pub fn display_bounds(days: &[DayWindow]) -> OpenHours {
    let mut earliest: Option<f64> = None;
    let mut latest: Option<f64> = None;

    for day in days.iter().filter(|day| !day.closed) {
        if let Some(start) = day.start.as_deref().and_then(hhmm_to_hours) {
            earliest = Some(earliest.map_or(start, |current| current.min(start)));
        }
        if let Some(end) = day.end.as_deref().and_then(hhmm_to_hours) {
            latest = Some(latest.map_or(end, |current| current.max(end)));
        }
    }

    OpenHours {
        start_hour: earliest.unwrap_or(DEFAULT_OPEN_HOUR),
        end_hour: latest.unwrap_or(DEFAULT_CLOSE_HOUR),
    }
}

#[cfg(test)]
mod tests;
