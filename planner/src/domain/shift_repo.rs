//! Storage contract for planned shifts.

use std::future::Future;

use models_planning::schedule;
use models_planning::shift::{NewShift, Shift};
use models_planning::tenant::TenantContext;

use crate::domain::model::{CreateShiftError, DeleteShiftError};

/// Store of planned shifts.
///
/// Shifts answer to two indexes, the owning plan and the originating draft.
/// One aggregation pass reads exactly one of them; the two are never mixed.
pub trait ShiftRepository: Clone + Send + Sync + 'static {
    /// Every shift of a planning template, in date then start order.
    fn list_by_plan(
        &self,
        ctx: &TenantContext,
        planning_id: &str,
    ) -> impl Future<Output = anyhow::Result<Vec<Shift>>> + Send;

    /// Every shift recorded under a draft, in date then start order.
    fn list_by_draft(
        &self,
        ctx: &TenantContext,
        draft_id: &str,
    ) -> impl Future<Output = anyhow::Result<Vec<Shift>>> + Send;

    /// Validates and persists a shift, returning it with id and timestamps
    /// assigned.
    fn create(
        &self,
        ctx: &TenantContext,
        shift: NewShift,
    ) -> impl Future<Output = Result<Shift, CreateShiftError>> + Send;

    /// Deletes a shift. Removing an id that is already gone succeeds and
    /// reports `false`.
    fn delete(
        &self,
        ctx: &TenantContext,
        shift_id: &str,
    ) -> impl Future<Output = Result<bool, DeleteShiftError>> + Send;
}

/// Checks a shift payload before it reaches the store.
///
/// Required fields must be non-blank, both times must parse as `HH:MM` and
/// the end must come strictly after the start; equal and inverted ranges
/// are rejected.
pub fn validate_new_shift(shift: &NewShift) -> Result<(), CreateShiftError> {
    required(&shift.location_id, "location_id")?;
    required(&shift.planning_id, "planning_id")?;
    required(&shift.employee_id, "employee_id")?;
    required(&shift.work_date, "work_date")?;
    required(&shift.start_time, "start_time")?;
    required(&shift.end_time, "end_time")?;

    let start = schedule::parse_hhmm(&shift.start_time)
        .ok_or(CreateShiftError::InvalidTime("start_time"))?;
    let end =
        schedule::parse_hhmm(&shift.end_time).ok_or(CreateShiftError::InvalidTime("end_time"))?;
    if start >= end {
        return Err(CreateShiftError::InvalidTimeRange {
            start: shift.start_time.clone(),
            end: shift.end_time.clone(),
        });
    }

    Ok(())
}

fn required(value: &str, field: &'static str) -> Result<(), CreateShiftError> {
    if value.trim().is_empty() {
        return Err(CreateShiftError::MissingField(field));
    }
    Ok(())
}
