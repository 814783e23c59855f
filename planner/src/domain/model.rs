//! Data shapes and errors of the planner board domain.

use models_planning::schedule::{DayWindow, OpenHours};
use models_planning::shift::Shift;
use serde::Serialize;

/// The assembled weekly board for one location, template and week.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct PlannerBoard {
    /// Resolved week identifier the board is laid out for. May be the
    /// `no-week` sentinel.
    pub week_key: String,
    /// The seven rendered day columns, Monday first.
    pub days: Vec<BoardDay>,
    /// Vertical grid extent in fractional hours.
    pub open_hours: OpenHours,
    /// Department groups with one row per member. Groups without members
    /// are left out entirely.
    pub departments: Vec<DepartmentGroup>,
}

/// One rendered day column.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct BoardDay {
    /// Weekday name, e.g. `Monday`.
    pub weekday: String,
    /// Date key of the column, `YYYY-MM-DD`.
    pub date: String,
    /// The template's opening window, present only on open days.
    pub window: Option<DayWindow>,
    /// Whether the day is closed for planning. Days the template does not
    /// mention count as closed.
    pub closed: bool,
}

/// A department section of the board.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct DepartmentGroup {
    /// Id of the department.
    pub department_id: String,
    /// Display name of the department.
    pub name: String,
    /// One row per employee, alphabetically. Employees in several
    /// departments get a row in each.
    pub rows: Vec<EmployeeRow>,
}

/// One employee's row within a department group.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct EmployeeRow {
    /// Id of the employee.
    pub employee_id: String,
    /// Display name of the employee.
    pub name: String,
    /// Week cells, aligned with [`PlannerBoard::days`].
    pub cells: Vec<BoardCell>,
    /// Planned versus contracted hours across the whole plan.
    pub hours: HoursSummary,
}

/// One employee-day cell.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct BoardCell {
    /// Date key of the column, `YYYY-MM-DD`.
    pub date: String,
    /// Closed cells render unavailable and hide their shifts. The shifts
    /// stay in the store untouched.
    pub closed: bool,
    /// Whether new shifts may be placed in this cell.
    pub can_assign: bool,
    /// The employee's shifts on this date, empty when closed.
    pub shifts: Vec<Shift>,
}

/// Planned and contracted hours for one employee across the whole plan.
#[derive(Serialize, Clone, Copy, Debug, PartialEq)]
pub struct HoursSummary {
    /// Fractional hours summed over every shift in the plan, each span
    /// clamped at zero. Breaks are not subtracted.
    pub worked_hours: f64,
    /// Contracted hours per week from the employee record.
    pub contracted_hours: f64,
}

/// Errors resolving the caller's tenant context.
#[derive(Debug, thiserror::Error)]
pub enum ResolveContextError {
    /// No signed-in user was supplied.
    #[error("No signed-in user")]
    NoSession,
    /// The user belongs to no tenant.
    #[error("The user belongs to no tenant")]
    NoTenantMembership,
    /// Operation failed in the storage layer.
    #[error("Storage layer error {0}")]
    StorageLayerError(#[from] anyhow::Error),
}

/// Errors creating a shift.
#[derive(Debug, thiserror::Error)]
pub enum CreateShiftError {
    /// A required field is missing or blank.
    #[error("Missing required field {0}")]
    MissingField(&'static str),
    /// A time is not a valid `HH:MM` value.
    #[error("Invalid time in field {0}")]
    InvalidTime(&'static str),
    /// The end does not come strictly after the start.
    #[error("Shift end {end} must come after start {start}")]
    InvalidTimeRange {
        /// Start time as submitted.
        start: String,
        /// End time as submitted.
        end: String,
    },
    /// Operation failed in the storage layer.
    #[error("Storage layer error {0}")]
    StorageLayerError(#[from] anyhow::Error),
}

/// Errors deleting a shift. Deleting an id that is already gone is not an
/// error.
#[derive(Debug, thiserror::Error)]
pub enum DeleteShiftError {
    /// Operation failed in the storage layer.
    #[error("Storage layer error {0}")]
    StorageLayerError(#[from] anyhow::Error),
}

/// Errors assembling the planner board.
#[derive(Debug, thiserror::Error)]
pub enum BuildBoardError {
    /// The planning template does not exist for this tenant.
    #[error("The planning template does not exist")]
    TemplateDoesNotExist,
    /// Operation failed in the storage layer.
    #[error("Storage layer error {0}")]
    StorageLayerError(#[from] anyhow::Error),
}

/// Errors saving or publishing a draft.
#[derive(Debug, thiserror::Error)]
pub enum SaveDraftError {
    /// A required scope field is missing or blank.
    #[error("Missing required field {0}")]
    MissingField(&'static str),
    /// Operation failed in the storage layer.
    #[error("Storage layer error {0}")]
    StorageLayerError(#[from] anyhow::Error),
}

/// Errors deleting or listing drafts.
#[derive(Debug, thiserror::Error)]
pub enum DraftError {
    /// Operation failed in the storage layer.
    #[error("Storage layer error {0}")]
    StorageLayerError(#[from] anyhow::Error),
}
