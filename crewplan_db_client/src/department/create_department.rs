use models_planning::employee::Department;
use sqlx::SqlitePool;

use crate::ids::generate_id;

/// Creates a department for the tenant.
#[tracing::instrument(skip(db))]
pub async fn create_department(
    db: SqlitePool,
    tenant_id: &str,
    name: &str,
) -> anyhow::Result<Department> {
    let department = Department {
        id: generate_id(),
        tenant_id: tenant_id.to_string(),
        name: name.to_string(),
    };

    sqlx::query("INSERT INTO department (id, tenant_id, name) VALUES (?, ?, ?)")
        .bind(&department.id)
        .bind(&department.tenant_id)
        .bind(&department.name)
        .execute(&db)
        .await?;

    Ok(department)
}
