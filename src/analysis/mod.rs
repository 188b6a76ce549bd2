//! Capa de agregación
//!
//! Funciones puras sobre las colecciones cargadas del backend: totales del
//! libro de ventas, agrupaciones por marca, trimestre y mes, distribución de
//! precios y rankings de clientes. Ninguna función modifica sus entradas y
//! todo denominador nulo produce 0.

pub mod index;
pub mod inventory;
pub mod ledger;
pub mod portfolio;
pub mod quarterly;

pub use index::LookupIndex;
pub use inventory::{price_distribution, status_counts, PriceBucket, StatusCount};
pub use ledger::{
    brand_rollups, brand_rollups_by_profit, enriched_sales, ledger_totals, profit_for, top_models,
    BrandRollup, EnrichedSale, LedgerTotals, ModelRevenue,
};
pub use portfolio::{
    client_ranking, commission_by_client, purchase_counts, tier_counts, top_clients_by_value,
    ClientCommission, RankedClient, TierCount,
};
pub use quarterly::{
    commission_per_quarter, insights, monthly_breakdown, quarter_label, quarterly_aggregates,
    revenue_trend, MonthlyFigures, QuarterCommission,
};

/// División que devuelve 0 cuando el denominador es 0
pub fn safe_div(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}

/// Porcentaje `part / whole * 100`, 0 si `whole` es 0
pub fn percentage(part: f64, whole: f64) -> f64 {
    safe_div(part, whole) * 100.0
}

/// Redondear a dos decimales
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_safe_div_guards_zero() {
        assert_eq!(safe_div(10.0, 0.0), 0.0);
        assert_eq!(percentage(5.0, 0.0), 0.0);
        assert_eq!(percentage(1.0, 4.0), 25.0);
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(296_333.333_3), 296_333.33);
        assert_eq!(round2(0.005), 0.01);
    }
}
