use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// A staffing group employees can belong to, e.g. "Kitchen".
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, sqlx::FromRow)]
pub struct Department {
    /// Unique id of the department.
    pub id: String,
    /// Tenant the department belongs to.
    pub tenant_id: String,
    /// Display name.
    pub name: String,
}

/// How an employee is paid.
#[derive(
    Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, sqlx::Type, EnumString, Display,
)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ContractType {
    /// Fixed weekly hours.
    Salaried,
    /// Paid per worked hour.
    Hourly,
    /// No contract recorded yet.
    None,
}

/// A person shifts can be assigned to.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Employee {
    /// Unique id of the employee.
    pub id: String,
    /// Tenant the employee belongs to.
    pub tenant_id: String,
    /// Full display name.
    pub name: String,
    /// Contact email, if recorded.
    pub email: Option<String>,
    /// Contact phone number, if recorded.
    pub phone: Option<String>,
    /// How the employee is paid.
    pub contract_type: ContractType,
    /// Contracted hours per week, shown next to planned hours on the board.
    pub hours_per_week: f64,
    /// Hourly or monthly rate depending on the contract type.
    pub salary_rate: Option<f64>,
    /// Departments the employee belongs to. Employees without one never
    /// appear on the planner board.
    pub department_ids: Vec<String>,
    /// Locations the employee can be planned at.
    pub location_ids: Vec<String>,
    /// When the employee was created.
    pub created_at: DateTime<Utc>,
}

/// Payload for creating an employee. Id and timestamps are assigned by the
/// store.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct NewEmployee {
    /// Full display name.
    pub name: String,
    /// Contact email, if any.
    pub email: Option<String>,
    /// Contact phone number, if any.
    pub phone: Option<String>,
    /// How the employee is paid.
    pub contract_type: ContractType,
    /// Contracted hours per week.
    pub hours_per_week: f64,
    /// Hourly or monthly rate depending on the contract type.
    pub salary_rate: Option<f64>,
    /// Departments the employee belongs to.
    pub department_ids: Vec<String>,
    /// Locations the employee can be planned at.
    pub location_ids: Vec<String>,
}
