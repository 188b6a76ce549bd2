use sqlx::SqlitePool;
use tracing::debug;

use crate::config::DatabaseConfig;
use crate::models::analytics::HealthInfo;
use crate::repositories::system_repository::SystemRepository;
use crate::utils::errors::AppResult;

pub struct SystemController {
    repository: SystemRepository,
    db_config: DatabaseConfig,
}

impl SystemController {
    pub fn new(pool: SqlitePool, db_config: DatabaseConfig) -> Self {
        Self {
            repository: SystemRepository::new(pool),
            db_config,
        }
    }

    pub async fn health(&self) -> AppResult<HealthInfo> {
        let counts = self.repository.table_counts().await?;
        let schema_tables = self.repository.table_names().await?;

        Ok(HealthInfo {
            status: "operational".to_string(),
            database: "SQLite".to_string(),
            total_vehicles: counts.vehicles,
            total_clients: counts.clients,
            total_sales: counts.sales,
            database_size_bytes: self.database_size().await,
            schema_tables,
        })
    }

    /// Tamaño del fichero de la base de datos; 0 en memoria o si no se puede leer
    async fn database_size(&self) -> u64 {
        let Some(path) = self.db_config.file_path() else {
            return 0;
        };
        match tokio::fs::metadata(path).await {
            Ok(metadata) => metadata.len(),
            Err(e) => {
                debug!("No se pudo leer el tamaño de {}: {}", path, e);
                0
            }
        }
    }
}
