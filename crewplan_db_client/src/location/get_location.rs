use models_planning::location::Location;
use sqlx::SqlitePool;

/// Fetches one location of the tenant.
#[tracing::instrument(skip(db))]
pub async fn get_location(
    db: SqlitePool,
    tenant_id: &str,
    location_id: &str,
) -> Result<Option<Location>, sqlx::Error> {
    sqlx::query_as::<_, Location>(
        "SELECT id, tenant_id, name, description, created_at
         FROM location
         WHERE id = ? AND tenant_id = ?",
    )
    .bind(location_id)
    .bind(tenant_id)
    .fetch_optional(&db)
    .await
}
