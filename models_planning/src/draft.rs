use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::week::WeekKey;

/// Lifecycle state of a planning draft.
#[derive(
    Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, sqlx::Type, EnumString, Display,
)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum DraftStatus {
    /// Work in progress, listed on the drafts overview.
    Draft,
    /// Visible to the team, listed on the published overview. Publishing
    /// does not lock the planned shifts.
    Published,
}

/// A saved round of planning work for one location, template and week.
///
/// Several rows may exist for the same scope; readers tolerate that by
/// preferring the most recently updated one.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, sqlx::FromRow)]
pub struct PlanningDraft {
    /// Unique id of the draft.
    pub id: String,
    /// Tenant the draft belongs to.
    pub tenant_id: String,
    /// Location the draft plans for.
    pub location_id: String,
    /// Planning template the draft plans with.
    pub planning_id: String,
    /// Week identifier, or the `no-week` sentinel. Opaque once stored; the
    /// lifecycle never rewrites it.
    pub week_key: WeekKey,
    /// Where the draft is in its lifecycle.
    pub status: DraftStatus,
    /// When the draft was first saved.
    pub created_at: DateTime<Utc>,
    /// When the draft was last saved or published.
    pub updated_at: DateTime<Utc>,
}

/// The scheduling scope a draft row is keyed by.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DraftScope {
    /// Location being planned.
    pub location_id: String,
    /// Planning template being planned with.
    pub planning_id: String,
    /// Resolved week identifier.
    pub week_key: WeekKey,
}
