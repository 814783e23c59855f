use models_planning::location::Location;
use sqlx::SqlitePool;

use crate::ids::generate_id;

/// Creates a location for the tenant.
#[tracing::instrument(skip(db))]
pub async fn create_location(
    db: SqlitePool,
    tenant_id: &str,
    name: &str,
    description: &str,
) -> anyhow::Result<Location> {
    let location = Location {
        id: generate_id(),
        tenant_id: tenant_id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        created_at: chrono::Utc::now(),
    };

    sqlx::query(
        "INSERT INTO location (id, tenant_id, name, description, created_at)
         VALUES (?, ?, ?, ?, ?)",
    )
    .bind(&location.id)
    .bind(&location.tenant_id)
    .bind(&location.name)
    .bind(&location.description)
    .bind(location.created_at)
    .execute(&db)
    .await?;

    Ok(location)
}
