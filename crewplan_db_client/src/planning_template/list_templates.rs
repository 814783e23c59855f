use models_planning::template::PlanningTemplate;
use sqlx::SqlitePool;

/// Lists a location's planning templates, the default first.
#[tracing::instrument(skip(db))]
pub async fn list_templates(
    db: SqlitePool,
    tenant_id: &str,
    location_id: &str,
) -> anyhow::Result<Vec<PlanningTemplate>> {
    let templates = sqlx::query_as::<_, PlanningTemplate>(
        "SELECT id, tenant_id, location_id, name, week_schedule, notes, is_default,
                created_at, updated_at
         FROM planning_template
         WHERE tenant_id = ? AND location_id = ?
         ORDER BY is_default DESC, name, id",
    )
    .bind(tenant_id)
    .bind(location_id)
    .fetch_all(&db)
    .await?;

    Ok(templates)
}
