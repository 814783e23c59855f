use models_planning::template::PlanningTemplate;
use sqlx::SqlitePool;

use crate::ids::generate_id;

/// Creates a planning template for a location. New templates never start as
/// the default; see `set_default_template`.
#[tracing::instrument(skip(db, week_schedule))]
pub async fn create_template(
    db: SqlitePool,
    tenant_id: &str,
    location_id: &str,
    name: &str,
    week_schedule: Option<&str>,
    notes: Option<&str>,
) -> anyhow::Result<PlanningTemplate> {
    let now = chrono::Utc::now();
    let template = PlanningTemplate {
        id: generate_id(),
        tenant_id: tenant_id.to_string(),
        location_id: location_id.to_string(),
        name: name.to_string(),
        week_schedule: week_schedule.map(str::to_string),
        notes: notes.map(str::to_string),
        is_default: false,
        created_at: now,
        updated_at: now,
    };

    sqlx::query(
        "INSERT INTO planning_template (id, tenant_id, location_id, name, week_schedule,
                                        notes, is_default, created_at, updated_at)
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(&template.id)
    .bind(&template.tenant_id)
    .bind(&template.location_id)
    .bind(&template.name)
    .bind(&template.week_schedule)
    .bind(&template.notes)
    .bind(template.is_default)
    .bind(template.created_at)
    .bind(template.updated_at)
    .execute(&db)
    .await?;

    Ok(template)
}
