use serde::{Deserialize, Serialize};

/// The caller identity every planner operation is scoped by.
///
/// Resolved once from the signed-in user and passed along explicitly;
/// nothing below the presentation layer reads ambient session state.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct TenantContext {
    /// Tenant all queries are scoped to.
    pub tenant_id: String,
    /// User the work is performed as.
    pub user_id: String,
}
