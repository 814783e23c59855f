use sqlx::SqlitePool;

/// Deletes a planning template. Reports `false` when the tenant has no
/// such row.
///
/// The store refuses the delete while drafts or shifts still reference the
/// template.
#[tracing::instrument(skip(db))]
pub async fn remove_template(
    db: SqlitePool,
    tenant_id: &str,
    template_id: &str,
) -> anyhow::Result<bool> {
    let result = sqlx::query("DELETE FROM planning_template WHERE id = ? AND tenant_id = ?")
        .bind(template_id)
        .bind(tenant_id)
        .execute(&db)
        .await?;

    Ok(result.rows_affected() > 0)
}
