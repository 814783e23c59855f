//! SQLite store for planned shifts.

use chrono::Utc;
use crewplan_db_client::ids::generate_id;
use models_planning::shift::{NewShift, Shift};
use models_planning::tenant::TenantContext;
use models_planning::week::normalize_date_key;
use sqlx::SqlitePool;

use crate::domain::model::{CreateShiftError, DeleteShiftError};
use crate::domain::shift_repo::{validate_new_shift, ShiftRepository};


/// Shift store backed by the relational planning database.
#[derive(Clone)]
pub struct ShiftRepositoryImpl {
    pool: SqlitePool,
}

impl ShiftRepositoryImpl {
    /// Creates the store on a connection pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl From<sqlx::Error> for CreateShiftError {
    fn from(e: sqlx::Error) -> Self {
        Self::StorageLayerError(e.into())
    }
}

impl From<sqlx::Error> for DeleteShiftError {
    fn from(e: sqlx::Error) -> Self {
        Self::StorageLayerError(e.into())
    }
}

impl ShiftRepository for ShiftRepositoryImpl {
    async fn list_by_plan(
        &self,
        ctx: &TenantContext,
        planning_id: &str,
    ) -> anyhow::Result<Vec<Shift>> {
        let shifts = sqlx::query_as::<_, Shift>(
            "SELECT id, tenant_id, location_id, planning_id, draft_id, employee_id,
                    department_id, work_date, start_time, end_time, break_minutes, notes,
                    created_at
             FROM shift
             WHERE tenant_id = ? AND planning_id = ?
             ORDER BY work_date, start_time, id",
        )
        .bind(&ctx.tenant_id)
        .bind(planning_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(shifts)
    }

    async fn list_by_draft(
        &self,
        ctx: &TenantContext,
        draft_id: &str,
    ) -> anyhow::Result<Vec<Shift>> {
        let shifts = sqlx::query_as::<_, Shift>(
            "SELECT id, tenant_id, location_id, planning_id, draft_id, employee_id,
                    department_id, work_date, start_time, end_time, break_minutes, notes,
                    created_at
             FROM shift
             WHERE tenant_id = ? AND draft_id = ?
             ORDER BY work_date, start_time, id",
        )
        .bind(&ctx.tenant_id)
        .bind(draft_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(shifts)
    }

    async fn create(&self, ctx: &TenantContext, shift: NewShift) -> Result<Shift, CreateShiftError> {
        validate_new_shift(&shift)?;

        let shift = Shift {
            id: generate_id(),
            tenant_id: ctx.tenant_id.clone(),
            location_id: shift.location_id,
            planning_id: shift.planning_id,
            draft_id: shift.draft_id,
            employee_id: shift.employee_id,
            department_id: shift.department_id,
            work_date: normalize_date_key(&shift.work_date),
            start_time: shift.start_time.trim().to_string(),
            end_time: shift.end_time.trim().to_string(),
            break_minutes: shift.break_minutes,
            notes: shift.notes,
            created_at: Utc::now(),
        };

        sqlx::query(
            "INSERT INTO shift (id, tenant_id, location_id, planning_id, draft_id, employee_id,
                                department_id, work_date, start_time, end_time, break_minutes,
                                notes, created_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&shift.id)
        .bind(&shift.tenant_id)
        .bind(&shift.location_id)
        .bind(&shift.planning_id)
        .bind(&shift.draft_id)
        .bind(&shift.employee_id)
        .bind(&shift.department_id)
        .bind(&shift.work_date)
        .bind(&shift.start_time)
        .bind(&shift.end_time)
        .bind(shift.break_minutes)
        .bind(&shift.notes)
        .bind(shift.created_at)
        .execute(&self.pool)
        .await?;

        Ok(shift)
    }

    async fn delete(&self, ctx: &TenantContext, shift_id: &str) -> Result<bool, DeleteShiftError> {
        let result = sqlx::query("DELETE FROM shift WHERE id = ? AND tenant_id = ?")
            .bind(shift_id)
            .bind(&ctx.tenant_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
