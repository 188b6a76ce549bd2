//! Modelo de Sale
//!
//! Registro de una venta: un vehículo, un cliente, precio y comisión.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct Sale {
    pub id: i64,
    pub vehicle_id: i64,
    pub client_id: i64,
    pub sale_price: f64,
    pub sale_date: NaiveDate,
    pub commission: f64,
}
