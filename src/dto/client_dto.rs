use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::dto::common::{empty_as_none, Pagination};
use crate::models::client::VipTier;

// Request para registrar un cliente
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateClientRequest {
    #[validate(length(min = 1, max = 50))]
    pub first_name: String,

    #[validate(length(min = 1, max = 50))]
    pub last_name: String,

    #[validate(email, length(max = 120))]
    pub email: String,

    #[serde(default)]
    #[validate(length(max = 20))]
    pub phone: Option<String>,

    #[serde(default)]
    pub lifetime_value: f64,

    #[serde(default)]
    pub vip_tier: VipTier,
}

// Request para actualizar un cliente (solo los campos presentes)
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateClientRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 50))]
    pub first_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 50))]
    pub last_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(email, length(max = 120))]
    pub email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 20))]
    pub phone: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub lifetime_value: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub vip_tier: Option<VipTier>,
}

// Filtros del listado de clientes
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClientFilters {
    #[serde(
        default,
        deserialize_with = "empty_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub vip_tier: Option<VipTier>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skip: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl ClientFilters {
    pub fn pagination(&self) -> Pagination {
        Pagination {
            skip: self.skip,
            limit: self.limit,
        }
    }
}
