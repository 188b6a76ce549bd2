use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::dto::common::{empty_as_none, Pagination};
use crate::models::vehicle::VehicleStatus;
use crate::utils::validation::VIN_REGEX;

// Request para crear un vehículo
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateVehicleRequest {
    #[validate(regex = "VIN_REGEX")]
    pub vin: String,

    #[validate(length(min = 1, max = 50))]
    pub make: String,

    #[validate(length(min = 1, max = 100))]
    pub model: String,

    #[validate(range(min = 1900, max = 2030))]
    pub year: i32,

    pub purchase_price: f64,

    #[serde(default = "default_status")]
    pub status: VehicleStatus,
}

fn default_status() -> VehicleStatus {
    VehicleStatus::Available
}

// Request para actualizar un vehículo (solo los campos presentes)
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateVehicleRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(regex = "VIN_REGEX")]
    pub vin: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 50))]
    pub make: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 100))]
    pub model: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 1900, max = 2030))]
    pub year: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchase_price: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<VehicleStatus>,
}

// Request para cambiar solo el estado
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ChangeStatusRequest {
    pub status: VehicleStatus,
}

// Filtros del listado de vehículos
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VehicleFilters {
    #[serde(
        default,
        deserialize_with = "empty_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub status: Option<VehicleStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub make: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skip: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

// Transiciones ofrecidas para un vehículo
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransitionsResponse {
    pub vehicle_id: i64,
    pub current: VehicleStatus,
    pub allowed: Vec<VehicleStatus>,
}

impl VehicleFilters {
    pub fn pagination(&self) -> Pagination {
        Pagination {
            skip: self.skip,
            limit: self.limit,
        }
    }
}
