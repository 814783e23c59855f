use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A reusable weekly planning template for one location.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, sqlx::FromRow)]
pub struct PlanningTemplate {
    /// Unique id of the template.
    pub id: String,
    /// Tenant the template belongs to.
    pub tenant_id: String,
    /// Location the template plans for.
    pub location_id: String,
    /// Display name, e.g. "Summer weeks".
    pub name: String,
    /// Serialized per-day opening windows, read with
    /// [`crate::schedule::parse_week_schedule`]. Older clients wrote all
    /// sorts of shapes here; readers must tolerate anything.
    pub week_schedule: Option<String>,
    /// Free-form notes shown in the template editor.
    pub notes: Option<String>,
    /// Whether this template is the location's default. At most one
    /// template per location carries the flag.
    pub is_default: bool,
    /// When the template was created.
    pub created_at: DateTime<Utc>,
    /// When the template was last changed.
    pub updated_at: DateTime<Utc>,
}
