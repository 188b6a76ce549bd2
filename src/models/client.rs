//! Modelo de Client
//!
//! Clientes de alto patrimonio con su valor acumulado y nivel VIP.

use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use std::fmt;

/// Nivel VIP del cliente
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Type, PartialEq, Eq, Hash, Default)]
pub enum VipTier {
    #[default]
    Standard,
    Gold,
    Platinum,
    Black,
}

impl VipTier {
    /// Orden de presentación: del nivel más alto al más bajo
    pub const ALL: [VipTier; 4] = [
        VipTier::Black,
        VipTier::Platinum,
        VipTier::Gold,
        VipTier::Standard,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            VipTier::Standard => "Standard",
            VipTier::Gold => "Gold",
            VipTier::Platinum => "Platinum",
            VipTier::Black => "Black",
        }
    }
}

impl fmt::Display for VipTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Client principal - mapea a la tabla clients
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct Client {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub lifetime_value: f64,
    pub vip_tier: VipTier,
}

impl Client {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
