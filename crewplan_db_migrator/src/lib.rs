//! Embedded migrations for the Crewplan planning store, for crates that
//! need to bring up a database without owning the migration files.

/// The migrations applied to every Crewplan database.
pub static CREWPLAN_DB_MIGRATIONS: sqlx::migrate::Migrator =
    sqlx::migrate!("../crewplan_db_client/migrations");
