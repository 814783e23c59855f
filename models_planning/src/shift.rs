use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A planned block of work for one employee on one date.
///
/// Shifts answer to two addresses: the planning template they belong to and
/// the draft they were recorded under, when any. Reads pick one of the two,
/// never both at once.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, sqlx::FromRow)]
pub struct Shift {
    /// Unique id of the shift.
    pub id: String,
    /// Tenant the shift belongs to.
    pub tenant_id: String,
    /// Location the shift is worked at.
    pub location_id: String,
    /// Planning template the shift belongs to. The primary index.
    pub planning_id: String,
    /// Draft the shift was recorded under, if any. The secondary index.
    pub draft_id: Option<String>,
    /// Employee the shift is assigned to.
    pub employee_id: String,
    /// Department the shift was planned in, if any.
    pub department_id: Option<String>,
    /// Date-only key, `YYYY-MM-DD`. Normalized on write; readers still
    /// normalize before comparing.
    pub work_date: String,
    /// Start of the shift, `HH:MM`.
    pub start_time: String,
    /// End of the shift, `HH:MM`, strictly after the start.
    pub end_time: String,
    /// Unpaid break in minutes. Informational; never subtracted from
    /// planned hours.
    pub break_minutes: Option<i64>,
    /// Free-form note shown on the shift card.
    pub notes: Option<String>,
    /// When the shift was created.
    pub created_at: DateTime<Utc>,
}

/// Payload for creating a shift. Id and timestamps are assigned by the
/// store.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct NewShift {
    /// Location the shift is worked at.
    pub location_id: String,
    /// Planning template the shift belongs to.
    pub planning_id: String,
    /// Draft to record the shift under, if planning inside one.
    pub draft_id: Option<String>,
    /// Employee the shift is assigned to.
    pub employee_id: String,
    /// Department the shift is planned in, if any.
    pub department_id: Option<String>,
    /// Date of the shift; time-of-day suffixes are stripped on write.
    pub work_date: String,
    /// Start of the shift, `HH:MM`.
    pub start_time: String,
    /// End of the shift, `HH:MM`.
    pub end_time: String,
    /// Unpaid break in minutes, if recorded.
    pub break_minutes: Option<i64>,
    /// Free-form note, if any.
    pub notes: Option<String>,
}
