use sqlx::SqlitePool;

/// Deletes an employee and their memberships. Reports `false` when the
/// tenant has no such row.
///
/// The store refuses the delete while shifts still reference the employee.
#[tracing::instrument(skip(db))]
pub async fn remove_employee(
    db: SqlitePool,
    tenant_id: &str,
    employee_id: &str,
) -> anyhow::Result<bool> {
    let result = sqlx::query("DELETE FROM employee WHERE id = ? AND tenant_id = ?")
        .bind(employee_id)
        .bind(tenant_id)
        .execute(&db)
        .await?;

    Ok(result.rows_affected() > 0)
}
