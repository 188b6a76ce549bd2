//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum.

use sqlx::SqlitePool;
use std::sync::Arc;

use crate::config::{DatabaseConfig, EnvironmentConfig};
use crate::services::UserDirectory;

#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub config: EnvironmentConfig,
    pub db_config: DatabaseConfig,
    pub users: Arc<UserDirectory>,
}

impl AppState {
    pub fn new(
        pool: SqlitePool,
        config: EnvironmentConfig,
        db_config: DatabaseConfig,
        users: UserDirectory,
    ) -> Self {
        Self {
            pool,
            config,
            db_config,
            users: Arc::new(users),
        }
    }
}
