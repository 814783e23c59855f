use sqlx::SqlitePool;

/// Deletes a department and its memberships. Reports `false` when the
/// tenant has no such row.
#[tracing::instrument(skip(db))]
pub async fn remove_department(
    db: SqlitePool,
    tenant_id: &str,
    department_id: &str,
) -> anyhow::Result<bool> {
    let result = sqlx::query("DELETE FROM department WHERE id = ? AND tenant_id = ?")
        .bind(department_id)
        .bind(tenant_id)
        .execute(&db)
        .await?;

    Ok(result.rows_affected() > 0)
}
