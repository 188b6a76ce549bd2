//! Modelo de Vehicle
//!
//! Este módulo contiene el struct Vehicle, el enum de estado y la tabla de
//! transiciones permitidas del ciclo de vida del vehículo.

use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use std::fmt;
use std::str::FromStr;

/// Estado del vehículo en el inventario
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Type, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum VehicleStatus {
    #[serde(rename = "Available")]
    #[sqlx(rename = "Available")]
    Available,
    #[serde(rename = "In-Transit")]
    #[sqlx(rename = "In-Transit")]
    InTransit,
    #[serde(rename = "Booked")]
    #[sqlx(rename = "Booked")]
    Booked,
    #[serde(rename = "Sold")]
    #[sqlx(rename = "Sold")]
    Sold,
}

impl VehicleStatus {
    /// Todos los estados, en el orden en que se muestran
    pub const ALL: [VehicleStatus; 4] = [
        VehicleStatus::Available,
        VehicleStatus::InTransit,
        VehicleStatus::Booked,
        VehicleStatus::Sold,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleStatus::Available => "Available",
            VehicleStatus::InTransit => "In-Transit",
            VehicleStatus::Booked => "Booked",
            VehicleStatus::Sold => "Sold",
        }
    }

    /// Estados a los que se puede pasar desde el estado actual
    pub fn allowed_transitions(&self) -> &'static [VehicleStatus] {
        match self {
            VehicleStatus::Available => &[VehicleStatus::Booked, VehicleStatus::Sold],
            VehicleStatus::InTransit => &[
                VehicleStatus::Available,
                VehicleStatus::Booked,
                VehicleStatus::Sold,
            ],
            VehicleStatus::Booked => &[VehicleStatus::Available, VehicleStatus::Sold],
            VehicleStatus::Sold => &[],
        }
    }

    pub fn can_transition_to(&self, target: VehicleStatus) -> bool {
        self.allowed_transitions().contains(&target)
    }

    /// `Sold` no tiene transiciones de salida
    pub fn is_terminal(&self) -> bool {
        self.allowed_transitions().is_empty()
    }
}

impl fmt::Display for VehicleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VehicleStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        VehicleStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| format!("Unknown vehicle status '{}'", s))
    }
}

/// Vehicle principal - mapea a la tabla vehicles
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct Vehicle {
    pub id: i64,
    pub vin: String,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub purchase_price: f64,
    pub status: VehicleStatus,
}

impl Vehicle {
    /// Nombre para mostrar, p. ej. "Porsche 911 Turbo S"
    pub fn display_name(&self) -> String {
        format!("{} {}", self.make, self.model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transition_table() {
        use VehicleStatus::*;

        assert_eq!(Available.allowed_transitions(), &[Booked, Sold]);
        assert_eq!(InTransit.allowed_transitions(), &[Available, Booked, Sold]);
        assert_eq!(Booked.allowed_transitions(), &[Available, Sold]);
        assert!(Sold.allowed_transitions().is_empty());
    }

    #[test]
    fn test_only_sold_is_terminal() {
        for status in VehicleStatus::ALL {
            assert_eq!(status.is_terminal(), status == VehicleStatus::Sold);
        }
    }

    #[test]
    fn test_no_status_transitions_to_itself_or_in_transit() {
        for from in VehicleStatus::ALL {
            assert!(!from.can_transition_to(from));
            assert!(!from.can_transition_to(VehicleStatus::InTransit));
        }
    }

    #[test]
    fn test_wire_names() {
        assert_eq!(
            serde_json::to_string(&VehicleStatus::InTransit).unwrap(),
            "\"In-Transit\""
        );
        let parsed: VehicleStatus = serde_json::from_str("\"Booked\"").unwrap();
        assert_eq!(parsed, VehicleStatus::Booked);
        assert_eq!("Sold".parse::<VehicleStatus>().unwrap(), VehicleStatus::Sold);
        assert!("Scrapped".parse::<VehicleStatus>().is_err());
    }
}
