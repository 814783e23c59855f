use models_planning::employee::Department;
use sqlx::SqlitePool;

/// Lists the tenant's departments, alphabetically.
#[tracing::instrument(skip(db))]
pub async fn list_departments(db: SqlitePool, tenant_id: &str) -> anyhow::Result<Vec<Department>> {
    let departments = sqlx::query_as::<_, Department>(
        "SELECT id, tenant_id, name
         FROM department
         WHERE tenant_id = ?
         ORDER BY name, id",
    )
    .bind(tenant_id)
    .fetch_all(&db)
    .await?;

    Ok(departments)
}
