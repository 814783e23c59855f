//! SQLite store for planning drafts.

use chrono::Utc;
use crewplan_db_client::ids::generate_id;
use models_planning::draft::{DraftScope, DraftStatus, PlanningDraft};
use models_planning::tenant::TenantContext;
use models_planning::week::NO_WEEK;
use sqlx::SqlitePool;

use crate::domain::draft_repo::{validate_scope, DraftRepository};
use crate::domain::model::{DraftError, SaveDraftError};


/// Draft store backed by the relational planning database.
#[derive(Clone)]
pub struct DraftRepositoryImpl {
    pool: SqlitePool,
}

impl DraftRepositoryImpl {
    /// Creates the store on a connection pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// The shared upsert behind `save` and `publish`.
    ///
    /// With a draft id the row is updated in place; an id that no longer
    /// exists falls back to inserting, so saving never fails because a row
    /// vanished underneath the screen. The week key is stored exactly as
    /// resolved.
    async fn upsert(
        &self,
        ctx: &TenantContext,
        scope: DraftScope,
        draft_id: Option<&str>,
        status: DraftStatus,
    ) -> Result<PlanningDraft, SaveDraftError> {
        validate_scope(&scope)?;
        let now = Utc::now();

        if let Some(draft_id) = draft_id {
            let updated = sqlx::query_as::<_, PlanningDraft>(
                "UPDATE planning_draft
                 SET location_id = ?, planning_id = ?, week_key = ?, status = ?, updated_at = ?
                 WHERE id = ? AND tenant_id = ?
                 RETURNING id, tenant_id, location_id, planning_id, week_key, status,
                           created_at, updated_at",
            )
            .bind(&scope.location_id)
            .bind(&scope.planning_id)
            .bind(&scope.week_key)
            .bind(status)
            .bind(now)
            .bind(draft_id)
            .bind(&ctx.tenant_id)
            .fetch_optional(&self.pool)
            .await?;

            if let Some(draft) = updated {
                return Ok(draft);
            }
            tracing::warn!(draft_id, "draft to update is gone, inserting a new row");
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

        sqlx::query(
            "INSERT INTO planning_draft (id, tenant_id, location_id, planning_id, week_key,
                                         status, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&draft.id)
        .bind(&draft.tenant_id)
        .bind(&draft.location_id)
        .bind(&draft.planning_id)
        .bind(&draft.week_key)
        .bind(draft.status)
        .bind(draft.created_at)
        .bind(draft.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(draft)
    }
}

impl From<sqlx::Error> for SaveDraftError {
    fn from(e: sqlx::Error) -> Self {
        Self::StorageLayerError(e.into())
    }
}

impl From<sqlx::Error> for DraftError {
    fn from(e: sqlx::Error) -> Self {
        Self::StorageLayerError(e.into())
    }
}

impl DraftRepository for DraftRepositoryImpl {
    async fn save(
        &self,
        ctx: &TenantContext,
        scope: DraftScope,
        draft_id: Option<&str>,
    ) -> Result<PlanningDraft, SaveDraftError> {
        self.upsert(ctx, scope, draft_id, DraftStatus::Draft).await
    }

    async fn publish(
        &self,
        ctx: &TenantContext,
        scope: DraftScope,
        draft_id: Option<&str>,
    ) -> Result<PlanningDraft, SaveDraftError> {
        self.upsert(ctx, scope, draft_id, DraftStatus::Published).await
    }

    async fn delete(&self, ctx: &TenantContext, draft_id: &str) -> Result<bool, DraftError> {
        let result = sqlx::query("DELETE FROM planning_draft WHERE id = ? AND tenant_id = ?")
            .bind(draft_id)
            .bind(&ctx.tenant_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn list_drafts(&self, ctx: &TenantContext) -> Result<Vec<PlanningDraft>, DraftError> {
        let drafts = sqlx::query_as::<_, PlanningDraft>(
            "SELECT id, tenant_id, location_id, planning_id, week_key, status,
                    created_at, updated_at
             FROM planning_draft
             WHERE tenant_id = ? AND status = ?
             ORDER BY updated_at DESC, id",
        )
        .bind(&ctx.tenant_id)
        .bind(DraftStatus::Draft)
        .fetch_all(&self.pool)
        .await?;

        Ok(drafts)
    }

    async fn list_published(&self, ctx: &TenantContext) -> Result<Vec<PlanningDraft>, DraftError> {
        let drafts = sqlx::query_as::<_, PlanningDraft>(
            "SELECT id, tenant_id, location_id, planning_id, week_key, status,
                    created_at, updated_at
             FROM planning_draft
             WHERE tenant_id = ? AND status = ?
             ORDER BY CASE WHEN week_key = ? THEN 1 ELSE 0 END, week_key DESC,
                      updated_at DESC, id",
        )
        .bind(&ctx.tenant_id)
        .bind(DraftStatus::Published)
        .bind(NO_WEEK)
        .fetch_all(&self.pool)
        .await?;

        Ok(drafts)
    }

    async fn latest_for_scope(
        &self,
        ctx: &TenantContext,
        scope: &DraftScope,
    ) -> Result<Option<PlanningDraft>, DraftError> {
        let draft = sqlx::query_as::<_, PlanningDraft>(
            "SELECT id, tenant_id, location_id, planning_id, week_key, status,
                    created_at, updated_at
             FROM planning_draft
             WHERE tenant_id = ? AND location_id = ? AND planning_id = ? AND week_key = ?
             ORDER BY updated_at DESC, id
             LIMIT 1",
        )
        .bind(&ctx.tenant_id)
        .bind(&scope.location_id)
        .bind(&scope.planning_id)
        .bind(&scope.week_key)
        .fetch_optional(&self.pool)
        .await?;

        Ok(draft)
    }
}
