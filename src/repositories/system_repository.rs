use sqlx::SqlitePool;

use crate::database::schema;
use crate::utils::errors::AppError;

/// Consultas de estado del sistema
pub struct SystemRepository {
    pool: SqlitePool,
}

/// Número de filas por tabla
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableCounts {
    pub vehicles: i64,
    pub clients: i64,
    pub sales: i64,
}

impl SystemRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn table_counts(&self) -> Result<TableCounts, AppError> {
        let (vehicles, clients, sales): (i64, i64, i64) = sqlx::query_as(
            r#"
            SELECT
                (SELECT COUNT(*) FROM vehicles),
                (SELECT COUNT(*) FROM clients),
                (SELECT COUNT(*) FROM sales)
            "#,
        )
        .fetch_one(&self.pool)
        .await?;

        Ok(TableCounts { vehicles, clients, sales })
    }

    pub async fn table_names(&self) -> Result<Vec<String>, AppError> {
        Ok(schema::table_names(&self.pool).await?)
    }
}
