//! Configuración de base de datos
//!
//! Este módulo maneja la conexión y configuración de SQLite con SQLx.

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use std::time::Duration;

/// Configuración de la base de datos
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub connect_timeout: Duration,
}

impl DatabaseConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_connections: 5,
            min_connections: 1,
            connect_timeout: Duration::from_secs(30),
        }
    }

    /// Base de datos en memoria, usada en los tests
    pub fn in_memory() -> Self {
        Self::new("sqlite::memory:")
    }

    pub fn is_in_memory(&self) -> bool {
        self.url.contains(":memory:") || self.url.contains("mode=memory")
    }

    /// Ruta del fichero de la base de datos, si la hay
    pub fn file_path(&self) -> Option<&str> {
        if self.is_in_memory() {
            return None;
        }
        let path = self
            .url
            .trim_start_matches("sqlite://")
            .trim_start_matches("sqlite:");
        let path = path.split('?').next().unwrap_or(path);
        (!path.is_empty()).then_some(path)
    }

    /// Crear un nuevo pool de conexiones
    ///
    /// Una base en memoria existe solo mientras vive su conexión, así que el
    /// pool se limita a una única conexión que nunca expira.
    pub async fn create_pool(&self) -> Result<SqlitePool, sqlx::Error> {
        let options = SqliteConnectOptions::from_str(&self.url)?
            .create_if_missing(true)
            .foreign_keys(true);

        let pool_options = SqlitePoolOptions::new().acquire_timeout(self.connect_timeout);

        let pool_options = if self.is_in_memory() {
            pool_options
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            pool_options
                .max_connections(self.max_connections)
                .min_connections(self.min_connections)
        };

        pool_options.connect_with(options).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_path() {
        assert_eq!(
            DatabaseConfig::new("sqlite://aura_drive.db").file_path(),
            Some("aura_drive.db")
        );
        assert_eq!(
            DatabaseConfig::new("sqlite:data/aura.db?mode=rwc").file_path(),
            Some("data/aura.db")
        );
        assert_eq!(DatabaseConfig::in_memory().file_path(), None);
    }
}
