//! Modelos de Analytics
//!
//! Agregados trimestrales, insights y estado del sistema, tal como viajan
//! por la API.

use serde::{Deserialize, Serialize};

/// Agregado de ventas de un trimestre
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuarterlyAggregate {
    /// Etiqueta `Q<n>-<año>`
    pub quarter: String,
    pub total_units_sold: i64,
    pub total_revenue: f64,
    pub average_price: f64,
}

/// Trimestres con máximo y mínimo ingreso, más la serie completa
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insights {
    pub max_quarter: String,
    pub max_revenue: f64,
    pub min_quarter: String,
    pub min_revenue: f64,
    pub quarters: Vec<QuarterlyAggregate>,
}

/// Estado del sistema y estadísticas de la base de datos
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthInfo {
    pub status: String,
    pub database: String,
    pub total_vehicles: i64,
    pub total_clients: i64,
    pub total_sales: i64,
    pub database_size_bytes: u64,
    pub schema_tables: Vec<String>,
}
