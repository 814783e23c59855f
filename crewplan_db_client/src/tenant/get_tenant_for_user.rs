use sqlx::SqlitePool;

/// Resolves the tenant a user belongs to, if any.
///
/// Users with several memberships get the first tenant in id order so the
/// answer is stable between calls.
#[tracing::instrument(skip(db))]
pub async fn get_tenant_for_user(
    db: SqlitePool,
    user_id: &str,
) -> Result<Option<String>, sqlx::Error> {
    sqlx::query_scalar(
        "SELECT tenant_id
         FROM tenant_user
         WHERE user_id = ?
         ORDER BY tenant_id
         LIMIT 1",
    )
    .bind(user_id)
    .fetch_optional(&db)
    .await
}
