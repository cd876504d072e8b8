//! Configuración de conexión a PostgreSQL
//!
//! Este módulo abre el pool de conexiones y aplica las migraciones
//! de `migrations/`.

use anyhow::{Context, Result};
use sqlx::PgPool;
use tracing::info;

use crate::config::DatabaseConfig;

pub struct DatabaseConnection {
    pool: PgPool,
}

impl DatabaseConnection {
    /// Crear el pool de conexiones a partir de la configuración
    pub async fn new(config: &DatabaseConfig) -> Result<Self> {
        info!("🔌 Conectando a la base de datos {}", config.masked_url());

        let pool = config
            .create_pool()
            .await
            .with_context(|| format!("cannot connect to {}", config.masked_url()))?;

        info!("✅ Pool de conexiones listo (max {})", config.max_connections);
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Ejecutar migraciones de la base de datos
    pub async fn run_migrations(&self) -> Result<()> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .context("failed to run database migrations")?;

        info!("✅ Migraciones aplicadas");
        Ok(())
    }
}
