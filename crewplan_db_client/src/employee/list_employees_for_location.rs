use chrono::{DateTime, Utc};
use models_planning::employee::{ContractType, Employee};
use sqlx::SqlitePool;

#[derive(sqlx::FromRow)]
struct EmployeeJoinRow {
    id: String,
    tenant_id: String,
    name: String,
    email: Option<String>,
    phone: Option<String>,
    contract_type: ContractType,
    hours_per_week: f64,
    salary_rate: Option<f64>,
    created_at: DateTime<Utc>,
    department_id: Option<String>,
}

/// Lists the employees assignable at a location, with their department id
/// sets, alphabetically by name.
///
/// `location_ids` on the returned rows holds only the queried location.
/// TODO: load the full location set once the staff screens move onto this
/// query.
#[tracing::instrument(skip(db))]
pub async fn list_employees_for_location(
    db: SqlitePool,
    tenant_id: &str,
    location_id: &str,
) -> anyhow::Result<Vec<Employee>> {
    let rows = sqlx::query_as::<_, EmployeeJoinRow>(
        "SELECT e.id, e.tenant_id, e.name, e.email, e.phone, e.contract_type,
                e.hours_per_week, e.salary_rate, e.created_at, ed.department_id
         FROM employee e
         JOIN employee_location el ON el.employee_id = e.id
         LEFT JOIN employee_department ed ON ed.employee_id = e.id
         WHERE e.tenant_id = ? AND el.location_id = ?
         ORDER BY e.name, e.id, ed.department_id",
    )
    .bind(tenant_id)
    .bind(location_id)
    .fetch_all(&db)
    .await?;

    let mut employees: Vec<Employee> = Vec::new();
    for row in rows {
        match employees.last_mut() {
            Some(last) if last.id == row.id => {
                if let Some(department_id) = row.department_id {
                    last.department_ids.push(department_id);
                }
            }
            _ => employees.push(Employee {
                id: row.id,
                tenant_id: row.tenant_id,
                name: row.name,
                email: row.email,
                phone: row.phone,
                contract_type: row.contract_type,
                hours_per_week: row.hours_per_week,
                salary_rate: row.salary_rate,
                department_ids: row.department_id.into_iter().collect(),
                location_ids: vec![location_id.to_string()],
                created_at: row.created_at,
            }),
        }
    }

    Ok(employees)
}
