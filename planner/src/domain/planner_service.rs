//! The planner service, the single entry point for board and draft work.

use std::future::Future;

use models_planning::draft::{DraftScope, PlanningDraft};
use models_planning::schedule;
use models_planning::shift::{NewShift, Shift};
use models_planning::tenant::TenantContext;
use models_planning::week::WeekKey;
use sqlx::SqlitePool;

use crate::domain::board;
use crate::domain::draft_repo::DraftRepository;
use crate::domain::model::{
    BuildBoardError, CreateShiftError, DeleteShiftError, DraftError, PlannerBoard,
    ResolveContextError, SaveDraftError,
};
use crate::domain::shift_repo::ShiftRepository;

#[cfg(test)]
mod test;

/// Coordinates stores, validation and aggregation for the planner screens.
///
/// Every operation takes the caller's [`TenantContext`]; resolving that
/// context is itself the first, fallible step of a request.
pub trait PlannerService: Clone + Send + Sync + 'static {
    /// Resolves the tenant context for the signed-in user.
    ///
    /// No user means no session; a user without a membership row belongs to
    /// no tenant. Both fail here, before any store work happens.
    fn resolve_context(
        &self,
        current_user: Option<&str>,
    ) -> impl Future<Output = Result<TenantContext, ResolveContextError>> + Send;

    /// Assembles the weekly board for a location, template and week.
    ///
    /// The template and roster have to load; the shift list is the one
    /// read allowed to degrade, so a broken shift store still renders an
    /// empty board rather than an error page.
    fn build_board(
        &self,
        ctx: &TenantContext,
        location_id: &str,
        planning_id: &str,
        week: Option<&str>,
    ) -> impl Future<Output = Result<PlannerBoard, BuildBoardError>> + Send;

    /// Every shift of a plan, or an empty list when the store read fails.
    ///
    /// This read is designated optional: the failure is logged and the
    /// caller renders an empty board instead of an error.
    fn shifts_for_plan(
        &self,
        ctx: &TenantContext,
        planning_id: &str,
    ) -> impl Future<Output = Vec<Shift>> + Send;

    /// Every shift recorded under a draft, with the same degraded-read
    /// policy as [`PlannerService::shifts_for_plan`].
    fn shifts_for_draft(
        &self,
        ctx: &TenantContext,
        draft_id: &str,
    ) -> impl Future<Output = Vec<Shift>> + Send;

    /// Creates a shift after validation. Returns the stored shift; the
    /// screen decides what to refetch.
    fn create_shift(
        &self,
        ctx: &TenantContext,
        shift: NewShift,
    ) -> impl Future<Output = Result<Shift, CreateShiftError>> + Send;

    /// Deletes a shift. Reports whether anything was actually removed;
    /// deleting an already-gone shift is fine.
    fn delete_shift(
        &self,
        ctx: &TenantContext,
        shift_id: &str,
    ) -> impl Future<Output = Result<bool, DeleteShiftError>> + Send;

    /// Saves planning work as a draft for the scope, upserting by the
    /// given draft id.
    fn save_draft(
        &self,
        ctx: &TenantContext,
        scope: DraftScope,
        draft_id: Option<&str>,
    ) -> impl Future<Output = Result<PlanningDraft, SaveDraftError>> + Send;

    /// Publishes planning work for the scope. A published plan stays
    /// editable; publishing is a visibility flag, not a lock.
    fn publish_draft(
        &self,
        ctx: &TenantContext,
        scope: DraftScope,
        draft_id: Option<&str>,
    ) -> impl Future<Output = Result<PlanningDraft, SaveDraftError>> + Send;

    /// Deletes a draft, leaving its shifts in place.
    fn delete_draft(
        &self,
        ctx: &TenantContext,
        draft_id: &str,
    ) -> impl Future<Output = Result<bool, DraftError>> + Send;

    /// The tenant's drafts in progress, most recently updated first.
    fn list_drafts(
        &self,
        ctx: &TenantContext,
    ) -> impl Future<Output = Result<Vec<PlanningDraft>, DraftError>> + Send;

    /// The tenant's published plans, week descending with week-less plans
    /// last.
    fn list_published(
        &self,
        ctx: &TenantContext,
    ) -> impl Future<Output = Result<Vec<PlanningDraft>, DraftError>> + Send;

    /// The draft to resume for a scope, when one exists. Duplicate rows
    /// for the scope resolve to the most recently updated.
    fn current_draft(
        &self,
        ctx: &TenantContext,
        scope: &DraftScope,
    ) -> impl Future<Output = Result<Option<PlanningDraft>, DraftError>> + Send;
}

/// Implementation of the [`PlannerService`] over the planning store.
#[derive(Clone)]
pub struct PlannerServiceImpl<SR, DR> {
    /// Pool for the entity reads the board needs.
    db: SqlitePool,
    /// The underlying shift store.
    shift_repository: SR,
    /// The underlying draft store.
    draft_repository: DR,
}

impl<SR, DR> PlannerServiceImpl<SR, DR>
where
    SR: ShiftRepository,
    DR: DraftRepository,
{
    /// Builds the service on a connection pool and its two stores.
    pub fn new(db: SqlitePool, shift_repository: SR, draft_repository: DR) -> Self {
        Self {
            db,
            shift_repository,
            draft_repository,
        }
    }
}

impl<SR, DR> PlannerService for PlannerServiceImpl<SR, DR>
where
    SR: ShiftRepository,
    DR: DraftRepository,
{
    #[tracing::instrument(skip(self))]
    async fn resolve_context(
        &self,
        current_user: Option<&str>,
    ) -> Result<TenantContext, ResolveContextError> {
        let user_id = current_user
            .map(str::trim)
            .filter(|user| !user.is_empty())
            .ok_or(ResolveContextError::NoSession)?;

        let tenant_id = crewplan_db_client::tenant::get_tenant_for_user(self.db.clone(), user_id)
            .await
            .map_err(anyhow::Error::from)?
            .ok_or(ResolveContextError::NoTenantMembership)?;

        Ok(TenantContext {
            tenant_id,
            user_id: user_id.to_string(),
        })
    }

    #[tracing::instrument(skip(self))]
    async fn build_board(
        &self,
        ctx: &TenantContext,
        location_id: &str,
        planning_id: &str,
        week: Option<&str>,
    ) -> Result<PlannerBoard, BuildBoardError> {
        let template = crewplan_db_client::planning_template::get_template(
            self.db.clone(),
            &ctx.tenant_id,
            planning_id,
        )
        .await
        .map_err(anyhow::Error::from)?
        .ok_or(BuildBoardError::TemplateDoesNotExist)?;

        let departments =
            crewplan_db_client::department::list_departments(self.db.clone(), &ctx.tenant_id)
                .await?;
        let employees = crewplan_db_client::employee::list_employees_for_location(
            self.db.clone(),
            &ctx.tenant_id,
            location_id,
        )
        .await?;

        let week = WeekKey::resolve(week);
        let template_days = schedule::parse_week_schedule(template.week_schedule.as_deref());
        let shifts = self.shifts_for_plan(ctx, planning_id).await;

        Ok(board::build_board(
            &week,
            &template_days,
            week.dates(),
            &departments,
            &employees,
            &shifts,
        ))
    }

    #[tracing::instrument(skip(self))]
    async fn shifts_for_plan(&self, ctx: &TenantContext, planning_id: &str) -> Vec<Shift> {
        match self.shift_repository.list_by_plan(ctx, planning_id).await {
            Ok(shifts) => shifts,
            Err(e) => {
                tracing::error!(error = ?e, planning_id, "shift list unavailable, rendering empty");
                Vec::new()
            }
        }
    }

    #[tracing::instrument(skip(self))]
    async fn shifts_for_draft(&self, ctx: &TenantContext, draft_id: &str) -> Vec<Shift> {
        match self.shift_repository.list_by_draft(ctx, draft_id).await {
            Ok(shifts) => shifts,
            Err(e) => {
                tracing::error!(error = ?e, draft_id, "draft shift list unavailable, rendering empty");
                Vec::new()
            }
        }
    }

    #[tracing::instrument(skip(self, shift))]
    async fn create_shift(
        &self,
        ctx: &TenantContext,
        shift: NewShift,
    ) -> Result<Shift, CreateShiftError> {
        self.shift_repository.create(ctx, shift).await
    }

    #[tracing::instrument(skip(self))]
    async fn delete_shift(
        &self,
        ctx: &TenantContext,
        shift_id: &str,
    ) -> Result<bool, DeleteShiftError> {
        self.shift_repository.delete(ctx, shift_id).await
    }

    #[tracing::instrument(skip(self))]
    async fn save_draft(
        &self,
        ctx: &TenantContext,
        scope: DraftScope,
        draft_id: Option<&str>,
    ) -> Result<PlanningDraft, SaveDraftError> {
        self.draft_repository.save(ctx, scope, draft_id).await
    }

    #[tracing::instrument(skip(self))]
    async fn publish_draft(
        &self,
        ctx: &TenantContext,
        scope: DraftScope,
        draft_id: Option<&str>,
    ) -> Result<PlanningDraft, SaveDraftError> {
        self.draft_repository.publish(ctx, scope, draft_id).await
    }

    #[tracing::instrument(skip(self))]
    async fn delete_draft(&self, ctx: &TenantContext, draft_id: &str) -> Result<bool, DraftError> {
        self.draft_repository.delete(ctx, draft_id).await
    }

    #[tracing::instrument(skip(self))]
    async fn list_drafts(&self, ctx: &TenantContext) -> Result<Vec<PlanningDraft>, DraftError> {
        self.draft_repository.list_drafts(ctx).await
    }

    #[tracing::instrument(skip(self))]
    async fn list_published(&self, ctx: &TenantContext) -> Result<Vec<PlanningDraft>, DraftError> {
        self.draft_repository.list_published(ctx).await
    }

    #[tracing::instrument(skip(self))]
    async fn current_draft(
        &self,
        ctx: &TenantContext,
        scope: &DraftScope,
    ) -> Result<Option<PlanningDraft>, DraftError> {
        self.draft_repository.latest_for_scope(ctx, scope).await
    }
}
