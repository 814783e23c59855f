use models_planning::location::Location;
use sqlx::SqlitePool;

/// Renames or redescribes a location. Returns the updated row, or `None`
/// when the tenant has no such location.
#[tracing::instrument(skip(db))]
pub async fn patch_location(
    db: SqlitePool,
    tenant_id: &str,
    location_id: &str,
    name: &str,
    description: &str,
) -> anyhow::Result<Option<Location>> {
    let location = sqlx::query_as::<_, Location>(
        "UPDATE location
         SET name = ?, description = ?
         WHERE id = ? AND tenant_id = ?
         RETURNING id, tenant_id, name, description, created_at",
    )
    .bind(name)
    .bind(description)
    .bind(location_id)
    .bind(tenant_id)
    .fetch_optional(&db)
    .await?;

    Ok(location)
}
