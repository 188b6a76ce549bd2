use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// Request para registrar una venta
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSaleRequest {
    pub vehicle_id: i64,
    pub client_id: i64,
    pub sale_price: f64,
    pub sale_date: NaiveDate,
    pub commission: f64,
}

// Request para actualizar una venta (solo los campos presentes)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateSaleRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vehicle_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sale_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sale_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commission: Option<f64>,
}
