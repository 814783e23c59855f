//! In-memory stand-ins for the planner stores, for tests that exercise the
//! service without a database. They mirror the ordering and upsert behavior
//! of the SQLite stores on plain vectors.

use std::sync::{Arc, Mutex};

use chrono::Utc;
use crewplan_db_client::ids::generate_id;
use models_planning::draft::{DraftScope, DraftStatus, PlanningDraft};
use models_planning::shift::{NewShift, Shift};
use models_planning::tenant::TenantContext;
use models_planning::week::normalize_date_key;

use crate::domain::draft_repo::{validate_scope, DraftRepository};
use crate::domain::model::{CreateShiftError, DeleteShiftError, DraftError, SaveDraftError};
use crate::domain::shift_repo::{validate_new_shift, ShiftRepository};

/// Shift store on a shared vector. Reads can be made to fail to drive the
/// degraded board paths.
#[derive(Clone, Default)]
pub struct MockShiftRepository {
    shifts: Arc<Mutex<Vec<Shift>>>,
    fail_reads: bool,
}

impl MockShiftRepository {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the store with one shift.
    pub fn with_shift(self, shift: Shift) -> Self {
        self.shifts.lock().expect("mock shift store poisoned").push(shift);
        self
    }

    /// A store whose list operations always fail. Writes keep working.
    pub fn failing_reads() -> Self {
        Self {
            fail_reads: true,
            ..Self::default()
        }
    }

    fn sorted(&self, keep: impl Fn(&Shift) -> bool) -> Vec<Shift> {
        let mut shifts: Vec<Shift> = self
            .shifts
            .lock()
            .expect("mock shift store poisoned")
            .iter()
            .filter(|shift| keep(shift))
            .cloned()
            .collect();
        shifts.sort_by(|a, b| {
            (&a.work_date, &a.start_time, &a.id).cmp(&(&b.work_date, &b.start_time, &b.id))
        });
        shifts
    }
}

impl ShiftRepository for MockShiftRepository {
    async fn list_by_plan(
        &self,
        ctx: &TenantContext,
        planning_id: &str,
    ) -> anyhow::Result<Vec<Shift>> {
        if self.fail_reads {
            anyhow::bail!("shift store unavailable");
        }
        Ok(self.sorted(|shift| shift.tenant_id == ctx.tenant_id && shift.planning_id == planning_id))
    }

    async fn list_by_draft(
        &self,
        ctx: &TenantContext,
        draft_id: &str,
    ) -> anyhow::Result<Vec<Shift>> {
        if self.fail_reads {
            anyhow::bail!("shift store unavailable");
        }
        Ok(self.sorted(|shift| {
            shift.tenant_id == ctx.tenant_id && shift.draft_id.as_deref() == Some(draft_id)
        }))
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
        self.shifts
            .lock()
            .expect("mock shift store poisoned")
            .push(shift.clone());

        Ok(shift)
    }

    async fn delete(&self, ctx: &TenantContext, shift_id: &str) -> Result<bool, DeleteShiftError> {
        let mut shifts = self.shifts.lock().expect("mock shift store poisoned");
        let before = shifts.len();
        shifts.retain(|shift| !(shift.tenant_id == ctx.tenant_id && shift.id == shift_id));
        Ok(shifts.len() < before)
    }
}

/// Draft store on a shared vector, with the same upsert fallback as the
/// SQLite store.
#[derive(Clone, Default)]
pub struct MockDraftRepository {
    drafts: Arc<Mutex<Vec<PlanningDraft>>>,
}

impl MockDraftRepository {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the store with one draft row.
    pub fn with_draft(self, draft: PlanningDraft) -> Self {
        self.drafts.lock().expect("mock draft store poisoned").push(draft);
        self
    }

    fn upsert(
        &self,
        ctx: &TenantContext,
        scope: DraftScope,
        draft_id: Option<&str>,
        status: DraftStatus,
    ) -> Result<PlanningDraft, SaveDraftError> {
        validate_scope(&scope)?;
        let now = Utc::now();
        let mut drafts = self.drafts.lock().expect("mock draft store poisoned");

        if let Some(draft_id) = draft_id {
            if let Some(draft) = drafts
                .iter_mut()
                .find(|draft| draft.tenant_id == ctx.tenant_id && draft.id == draft_id)
            {
                draft.location_id = scope.location_id;
                draft.planning_id = scope.planning_id;
                draft.week_key = scope.week_key;
                draft.status = status;
                draft.updated_at = now;
                return Ok(draft.clone());
            }
        }

        let draft = PlanningDraft {
            id: generate_id(),
            tenant_id: ctx.tenant_id.clone(),
            location_id: scope.location_id,
            planning_id: scope.planning_id,
            week_key: scope.week_key,
            status,
            created_at: now,
            updated_at: now,
        };
        drafts.push(draft.clone());
        Ok(draft)
    }

    fn collect(&self, keep: impl Fn(&PlanningDraft) -> bool) -> Vec<PlanningDraft> {
        self.drafts
            .lock()
            .expect("mock draft store poisoned")
            .iter()
            .filter(|draft| keep(draft))
            .cloned()
            .collect()
    }
}

impl DraftRepository for MockDraftRepository {
    async fn save(
        &self,
        ctx: &TenantContext,
        scope: DraftScope,
        draft_id: Option<&str>,
    ) -> Result<PlanningDraft, SaveDraftError> {
        self.upsert(ctx, scope, draft_id, DraftStatus::Draft)
    }

    async fn publish(
        &self,
        ctx: &TenantContext,
        scope: DraftScope,
        draft_id: Option<&str>,
    ) -> Result<PlanningDraft, SaveDraftError> {
        self.upsert(ctx, scope, draft_id, DraftStatus::Published)
    }

    async fn delete(&self, ctx: &TenantContext, draft_id: &str) -> Result<bool, DraftError> {
        let mut drafts = self.drafts.lock().expect("mock draft store poisoned");
        let before = drafts.len();
        drafts.retain(|draft| !(draft.tenant_id == ctx.tenant_id && draft.id == draft_id));
        Ok(drafts.len() < before)
    }

    async fn list_drafts(&self, ctx: &TenantContext) -> Result<Vec<PlanningDraft>, DraftError> {
        let mut drafts = self.collect(|draft| {
            draft.tenant_id == ctx.tenant_id && draft.status == DraftStatus::Draft
        });
        drafts.sort_by(|a, b| {
            b.updated_at
                .cmp(&a.updated_at)
                .then_with(|| a.id.cmp(&b.id))
        });
        Ok(drafts)
    }

    async fn list_published(&self, ctx: &TenantContext) -> Result<Vec<PlanningDraft>, DraftError> {
        let mut drafts = self.collect(|draft| {
            draft.tenant_id == ctx.tenant_id && draft.status == DraftStatus::Published
        });
        drafts.sort_by(|a, b| {
            a.week_key
                .is_no_week()
                .cmp(&b.week_key.is_no_week())
                .then_with(|| b.week_key.as_str().cmp(a.week_key.as_str()))
                .then_with(|| b.updated_at.cmp(&a.updated_at))
                .then_with(|| a.id.cmp(&b.id))
        });
        Ok(drafts)
    }

    async fn latest_for_scope(
        &self,
        ctx: &TenantContext,
        scope: &DraftScope,
    ) -> Result<Option<PlanningDraft>, DraftError> {
        let mut drafts = self.collect(|draft| {
            draft.tenant_id == ctx.tenant_id
                && draft.location_id == scope.location_id
                && draft.planning_id == scope.planning_id
                && draft.week_key == scope.week_key
        });
        drafts.sort_by(|a, b| {
            b.updated_at
                .cmp(&a.updated_at)
                .then_with(|| a.id.cmp(&b.id))
        });
        Ok(drafts.into_iter().next())
    }
}
