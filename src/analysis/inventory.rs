//! Inventario y distribución de precios

use serde::{Deserialize, Serialize};

use crate::models::{Sale, Vehicle, VehicleStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCount {
    pub status: VehicleStatus,
    pub count: usize,
}

/// Vehículos por estado; aparecen todos los estados aunque estén a 0
pub fn status_counts(vehicles: &[Vehicle]) -> Vec<StatusCount> {
    VehicleStatus::ALL
        .into_iter()
        .map(|status| StatusCount {
            status,
            count: vehicles.iter().filter(|v| v.status == status).count(),
        })
        .collect()
}

/// Tramo de precio `[min, max)`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceBucket {
    pub label: String,
    pub min: f64,
    pub max: f64,
    pub count: usize,
}

const BUCKET_START: f64 = 200_000.0;
const BUCKET_WIDTH: f64 = 50_000.0;
const BUCKET_COUNT: usize = 4;

/// Ventas por tramo de precio: $200k-250k, $250k-300k, $300k-350k, $350k-400k
///
/// Las ventas fuera de los tramos no se cuentan.
pub fn price_distribution(sales: &[Sale]) -> Vec<PriceBucket> {
    (0..BUCKET_COUNT)
        .map(|i| {
            let min = BUCKET_START + BUCKET_WIDTH * i as f64;
            let max = min + BUCKET_WIDTH;
            PriceBucket {
                label: format!("${}k-{}k", min / 1000.0, max / 1000.0),
                min,
                max,
                count: sales
                    .iter()
                    .filter(|s| s.sale_price >= min && s.sale_price < max)
                    .count(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::fixtures;

    #[test]
    fn test_status_counts() {
        let counts = status_counts(&fixtures::vehicles());
        assert_eq!(
            counts,
            vec![
                StatusCount { status: VehicleStatus::Available, count: 1 },
                StatusCount { status: VehicleStatus::InTransit, count: 1 },
                StatusCount { status: VehicleStatus::Booked, count: 0 },
                StatusCount { status: VehicleStatus::Sold, count: 3 },
            ]
        );
    }

    #[test]
    fn test_price_distribution() {
        let buckets = price_distribution(&fixtures::sales());
        let labels: Vec<&str> = buckets.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, vec!["$200k-250k", "$250k-300k", "$300k-350k", "$350k-400k"]);
        let counts: Vec<usize> = buckets.iter().map(|b| b.count).collect();
        assert_eq!(counts, vec![2, 1, 1, 0]);
    }

    #[test]
    fn test_bucket_bounds_are_half_open() {
        let sales = vec![
            fixtures::sale(1, 1, 1, 250_000.0, (2025, 1, 1), 0.0),
            fixtures::sale(2, 1, 1, 400_000.0, (2025, 1, 1), 0.0),
            fixtures::sale(3, 1, 1, 199_999.0, (2025, 1, 1), 0.0),
        ];
        let counts: Vec<usize> = price_distribution(&sales).iter().map(|b| b.count).collect();
        assert_eq!(counts, vec![0, 1, 0, 0]);
    }
}
