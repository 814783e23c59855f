use models_planning::employee::{Employee, NewEmployee};
use sqlx::SqlitePool;

use crate::ids::generate_id;

/// Creates an employee together with their department and location
/// memberships, in one transaction.
#[tracing::instrument(skip(db, payload))]
pub async fn create_employee(
    db: SqlitePool,
    tenant_id: &str,
    payload: NewEmployee,
) -> anyhow::Result<Employee> {
    let employee = Employee {
        id: generate_id(),
        tenant_id: tenant_id.to_string(),
        name: payload.name,
        email: payload.email,
        phone: payload.phone,
        contract_type: payload.contract_type,
        hours_per_week: payload.hours_per_week,
        salary_rate: payload.salary_rate,
        department_ids: payload.department_ids,
        location_ids: payload.location_ids,
        created_at: chrono::Utc::now(),
    };

    let mut tx = db.begin().await?;

    sqlx::query(
        "INSERT INTO employee (id, tenant_id, name, email, phone, contract_type,
                               hours_per_week, salary_rate, created_at)
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(&employee.id)
    .bind(&employee.tenant_id)
    .bind(&employee.name)
    .bind(&employee.email)
    .bind(&employee.phone)
    .bind(employee.contract_type)
    .bind(employee.hours_per_week)
    .bind(employee.salary_rate)
    .bind(employee.created_at)
    .execute(&mut *tx)
    .await?;

    for department_id in &employee.department_ids {
        sqlx::query("INSERT INTO employee_department (employee_id, department_id) VALUES (?, ?)")
            .bind(&employee.id)
            .bind(department_id)
            .execute(&mut *tx)
            .await?;
    }

    for location_id in &employee.location_ids {
        sqlx::query("INSERT INTO employee_location (employee_id, location_id) VALUES (?, ?)")
            .bind(&employee.id)
            .bind(location_id)
            .execute(&mut *tx)
            .await?;
    }

    if let Err(e) = tx.commit().await {
        tracing::error!(error = ?e, "error committing employee creation");
        return Err(e.into());
    }

    Ok(employee)
}
