use models_planning::template::PlanningTemplate;
use sqlx::SqlitePool;

/// Fetches one planning template of the tenant.
#[tracing::instrument(skip(db))]
pub async fn get_template(
    db: SqlitePool,
    tenant_id: &str,
    template_id: &str,
) -> Result<Option<PlanningTemplate>, sqlx::Error> {
    sqlx::query_as::<_, PlanningTemplate>(
        "SELECT id, tenant_id, location_id, name, week_schedule, notes, is_default,
                created_at, updated_at
         FROM planning_template
         WHERE id = ? AND tenant_id = ?",
    )
    .bind(template_id)
    .bind(tenant_id)
    .fetch_optional(&db)
    .await
}
