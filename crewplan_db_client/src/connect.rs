use std::str::FromStr;

use anyhow::Context;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

/// Deployment flavor, selected through the `ENVIRONMENT` variable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Environment {
    /// Live customer traffic.
    Production,
    /// Shared development deployment.
    Develop,
    /// A developer's own machine.
    Local,
}

impl FromStr for Environment {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "production" | "prod" => Ok(Self::Production),
            "develop" | "dev" => Ok(Self::Develop),
            "local" => Ok(Self::Local),
            other => anyhow::bail!("unknown environment {other}"),
        }
    }
}

impl Environment {
    /// Reads `ENVIRONMENT`, falling back to production when unset or
    /// unrecognized.
    pub fn new_or_prod() -> Self {
        std::env::var("ENVIRONMENT")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(Self::Production)
    }
}

/// Connection settings for the planning store.
#[derive(Clone, Debug)]
pub struct DbConfig {
    /// SQLite connection string, e.g. `sqlite://crewplan.db`.
    pub database_url: String,
    /// Deployment flavor; drives pool sizing.
    pub environment: Environment,
}

impl DbConfig {
    /// Loads the configuration from the process environment.
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
        Ok(Self {
            database_url,
            environment: Environment::new_or_prod(),
        })
    }
}

/// Opens the connection pool, sized for the configured environment.
pub async fn connect(config: &DbConfig) -> anyhow::Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(&config.database_url)
        .context("invalid DATABASE_URL")?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool_options = match config.environment {
        Environment::Production => SqlitePoolOptions::new()
            .min_connections(4)
            .max_connections(16),
        Environment::Develop | Environment::Local => SqlitePoolOptions::new().max_connections(4),
    };

    pool_options
        .connect_with(options)
        .await
        .context("error connecting to the planning store")
}
