use sqlx::SqlitePool;

/// Makes a template the default of its location.
///
/// Clearing the previous default and setting the new one happen in one
/// transaction; no state with two defaults, or none where one existed, is
/// ever visible. Naming a template the location does not have rolls the
/// clear back.
#[tracing::instrument(skip(db))]
pub async fn set_default_template(
    db: SqlitePool,
    tenant_id: &str,
    location_id: &str,
    template_id: &str,
) -> anyhow::Result<()> {
    let now = chrono::Utc::now();
    let mut tx = db.begin().await?;

    sqlx::query(
        "UPDATE planning_template
         SET is_default = 0, updated_at = ?
         WHERE tenant_id = ? AND location_id = ? AND is_default = 1",
    )
    .bind(now)
    .bind(tenant_id)
    .bind(location_id)
    .execute(&mut *tx)
    .await?;

    let updated = sqlx::query(
        "UPDATE planning_template
         SET is_default = 1, updated_at = ?
         WHERE id = ? AND tenant_id = ? AND location_id = ?",
    )
    .bind(now)
    .bind(template_id)
    .bind(tenant_id)
    .bind(location_id)
    .execute(&mut *tx)
    .await?;

    if updated.rows_affected() == 0 {
        anyhow::bail!("planning template {template_id} does not exist for location {location_id}");
    }

    if let Err(e) = tx.commit().await {
        tracing::error!(error = ?e, "error committing default template change");
        return Err(e.into());
    }

    Ok(())
}
