use models_planning::location::Location;
use sqlx::SqlitePool;

/// Lists the tenant's locations, alphabetically.
#[tracing::instrument(skip(db))]
pub async fn list_locations(db: SqlitePool, tenant_id: &str) -> anyhow::Result<Vec<Location>> {
    let locations = sqlx::query_as::<_, Location>(
        "SELECT id, tenant_id, name, description, created_at
         FROM location
         WHERE tenant_id = ?
         ORDER BY name, id",
    )
    .bind(tenant_id)
    .fetch_all(&db)
    .await?;

    Ok(locations)
}
