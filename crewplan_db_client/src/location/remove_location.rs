use sqlx::SqlitePool;

/// Deletes a location. Reports `false` when the tenant has no such row.
///
/// The store refuses the delete while templates, drafts or shifts still
/// reference the location.
#[tracing::instrument(skip(db))]
pub async fn remove_location(
    db: SqlitePool,
    tenant_id: &str,
    location_id: &str,
) -> anyhow::Result<bool> {
    let result = sqlx::query("DELETE FROM location WHERE id = ? AND tenant_id = ?")
        .bind(location_id)
        .bind(tenant_id)
        .execute(&db)
        .await?;

    Ok(result.rows_affected() > 0)
}
