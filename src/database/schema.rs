//! Schema de la base de datos
//!
//! Tablas `vehicles`, `clients` y `sales`. Se crean al arrancar si no existen.

use sqlx::SqlitePool;

const CREATE_VEHICLES: &str = r#"
CREATE TABLE IF NOT EXISTS vehicles (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    vin TEXT NOT NULL UNIQUE,
    make TEXT NOT NULL,
    model TEXT NOT NULL,
    year INTEGER NOT NULL,
    purchase_price REAL NOT NULL,
    status TEXT NOT NULL DEFAULT 'Available',
    created_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
)
"#;

const CREATE_CLIENTS: &str = r#"
CREATE TABLE IF NOT EXISTS clients (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    first_name TEXT NOT NULL,
    last_name TEXT NOT NULL,
    email TEXT NOT NULL UNIQUE,
    phone TEXT,
    lifetime_value REAL NOT NULL DEFAULT 0,
    vip_tier TEXT NOT NULL DEFAULT 'Standard',
    created_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
)
"#;

const CREATE_SALES: &str = r#"
CREATE TABLE IF NOT EXISTS sales (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    vehicle_id INTEGER NOT NULL REFERENCES vehicles(id),
    client_id INTEGER NOT NULL REFERENCES clients(id),
    sale_price REAL NOT NULL,
    sale_date TEXT NOT NULL,
    commission REAL NOT NULL,
    created_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
)
"#;

/// Crear las tablas si no existen
pub async fn create_tables(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    for statement in [CREATE_VEHICLES, CREATE_CLIENTS, CREATE_SALES] {
        sqlx::query(statement).execute(pool).await?;
    }
    Ok(())
}

/// Nombres de las tablas de usuario, en orden alfabético
pub async fn table_names(pool: &SqlitePool) -> Result<Vec<String>, sqlx::Error> {
    sqlx::query_scalar::<_, String>(
        "SELECT name FROM sqlite_master WHERE type = 'table' AND name NOT LIKE 'sqlite_%' ORDER BY name",
    )
    .fetch_all(pool)
    .await
}
