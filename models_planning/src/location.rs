use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A physical site shifts are planned for.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, sqlx::FromRow)]
pub struct Location {
    /// Unique id of the location.
    pub id: String,
    /// Tenant the location belongs to.
    pub tenant_id: String,
    /// Display name, e.g. "Harbour Cafe".
    pub name: String,
    /// Free-form description shown in pickers.
    pub description: String,
    /// When the location was created.
    pub created_at: DateTime<Utc>,
}
