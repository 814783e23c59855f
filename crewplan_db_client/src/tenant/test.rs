use sqlx::SqlitePool;

use crate::tenant::get_tenant_for_user;

#[sqlx::test(fixtures(path = "../../fixtures", scripts("tenants")))]
async fn test_members_resolve_to_their_tenant(pool: SqlitePool) -> anyhow::Result<()> {
    let tenant = get_tenant_for_user(pool.clone(), "user-anna").await?;
    assert_eq!(tenant.as_deref(), Some("tenant-harbour"));

    let tenant = get_tenant_for_user(pool, "user-mette").await?;
    assert_eq!(tenant.as_deref(), Some("tenant-north"));

    Ok(())
}

#[sqlx::test(fixtures(path = "../../fixtures", scripts("tenants")))]
async fn test_unknown_users_resolve_to_nothing(pool: SqlitePool) -> anyhow::Result<()> {
    let tenant = get_tenant_for_user(pool, "user-stranger").await?;
    assert_eq!(tenant, None);

    Ok(())
}
