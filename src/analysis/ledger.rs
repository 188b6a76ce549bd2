//! Libro de ventas: totales, filas enriquecidas y agrupaciones por marca

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::{percentage, safe_div, LookupIndex};
use crate::models::Sale;

const UNKNOWN: &str = "Unknown";

/// Beneficio de una venta: precio menos coste del vehículo, 0 si no hay vehículo
pub fn profit_for(sale: &Sale, index: &LookupIndex) -> f64 {
    index
        .vehicle(sale.vehicle_id)
        .map(|vehicle| sale.sale_price - vehicle.purchase_price)
        .unwrap_or(0.0)
}

/// Totales del libro de ventas
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LedgerTotals {
    pub deals: usize,
    pub revenue: f64,
    pub commission: f64,
    pub profit: f64,
    pub average_deal: f64,
    pub profit_margin_pct: f64,
    pub commission_pct: f64,
}

pub fn ledger_totals(sales: &[Sale], index: &LookupIndex) -> LedgerTotals {
    let revenue: f64 = sales.iter().map(|s| s.sale_price).sum();
    let commission: f64 = sales.iter().map(|s| s.commission).sum();
    let profit: f64 = sales.iter().map(|s| profit_for(s, index)).sum();

    LedgerTotals {
        deals: sales.len(),
        revenue,
        commission,
        profit,
        average_deal: safe_div(revenue, sales.len() as f64),
        profit_margin_pct: percentage(profit, revenue),
        commission_pct: percentage(commission, revenue),
    }
}

/// Venta con los nombres del vehículo y del cliente ya resueltos
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedSale {
    pub sale: Sale,
    pub vehicle_name: String,
    pub make: String,
    pub client_name: String,
    pub profit: f64,
}

pub fn enriched_sales(sales: &[Sale], index: &LookupIndex) -> Vec<EnrichedSale> {
    sales
        .iter()
        .map(|sale| {
            let vehicle = index.vehicle(sale.vehicle_id);
            EnrichedSale {
                sale: sale.clone(),
                vehicle_name: vehicle.map_or_else(|| UNKNOWN.to_string(), |v| v.display_name()),
                make: vehicle.map_or_else(|| UNKNOWN.to_string(), |v| v.make.clone()),
                client_name: index
                    .client(sale.client_id)
                    .map_or_else(|| UNKNOWN.to_string(), |c| c.full_name()),
                profit: profit_for(sale, index),
            }
        })
        .collect()
}

/// Ventas agrupadas por marca
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrandRollup {
    pub make: String,
    pub units: usize,
    pub revenue: f64,
    pub profit: f64,
    pub margin_pct: f64,
}

fn rollup_by_make(sales: &[Sale], index: &LookupIndex) -> Vec<BrandRollup> {
    let mut groups: HashMap<&str, BrandRollup> = HashMap::new();

    for sale in sales {
        let Some(vehicle) = index.vehicle(sale.vehicle_id) else {
            continue;
        };
        let entry = groups.entry(vehicle.make.as_str()).or_insert_with(|| BrandRollup {
            make: vehicle.make.clone(),
            units: 0,
            revenue: 0.0,
            profit: 0.0,
            margin_pct: 0.0,
        });
        entry.units += 1;
        entry.revenue += sale.sale_price;
        entry.profit += sale.sale_price - vehicle.purchase_price;
    }

    groups
        .into_values()
        .map(|mut rollup| {
            rollup.margin_pct = percentage(rollup.profit, rollup.revenue);
            rollup
        })
        .collect()
}

/// Agrupación por marca, de mayor a menor ingreso
///
/// Las ventas cuyo vehículo no está cargado se omiten.
pub fn brand_rollups(sales: &[Sale], index: &LookupIndex) -> Vec<BrandRollup> {
    let mut rollups = rollup_by_make(sales, index);
    rollups.sort_by(|a, b| b.revenue.total_cmp(&a.revenue).then_with(|| a.make.cmp(&b.make)));
    rollups
}

/// Agrupación por marca, de mayor a menor beneficio
pub fn brand_rollups_by_profit(sales: &[Sale], index: &LookupIndex) -> Vec<BrandRollup> {
    let mut rollups = rollup_by_make(sales, index);
    rollups.sort_by(|a, b| b.profit.total_cmp(&a.profit).then_with(|| a.make.cmp(&b.make)));
    rollups
}

/// Ingreso por modelo
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelRevenue {
    pub name: String,
    pub make: String,
    pub units: usize,
    pub revenue: f64,
}

/// Los `limit` modelos con más ingreso
pub fn top_models(sales: &[Sale], index: &LookupIndex, limit: usize) -> Vec<ModelRevenue> {
    let mut groups: HashMap<i64, ModelRevenue> = HashMap::new();

    for sale in sales {
        let Some(vehicle) = index.vehicle(sale.vehicle_id) else {
            continue;
        };
        let entry = groups.entry(vehicle.id).or_insert_with(|| ModelRevenue {
            name: vehicle.display_name(),
            make: vehicle.make.clone(),
            units: 0,
            revenue: 0.0,
        });
        entry.units += 1;
        entry.revenue += sale.sale_price;
    }

    let mut models: Vec<ModelRevenue> = groups.into_values().collect();
    models.sort_by(|a, b| b.revenue.total_cmp(&a.revenue).then_with(|| a.name.cmp(&b.name)));
    models.truncate(limit);
    models
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::fixtures;

    fn index() -> LookupIndex {
        LookupIndex::build(&fixtures::vehicles(), &fixtures::clients())
    }

    #[test]
    fn test_profit_sum_matches_revenue_minus_matched_cost() {
        let sales = fixtures::sales();
        let index = index();

        let profit: f64 = sales.iter().map(|s| profit_for(s, &index)).sum();
        let matched_revenue: f64 = sales
            .iter()
            .filter(|s| index.vehicle(s.vehicle_id).is_some())
            .map(|s| s.sale_price)
            .sum();
        let matched_cost: f64 = sales
            .iter()
            .filter_map(|s| index.vehicle(s.vehicle_id))
            .map(|v| v.purchase_price)
            .sum();

        assert_eq!(profit, matched_revenue - matched_cost);
        assert_eq!(profit, 33_000.0 + 55_000.0 + 35_000.0);
    }

    #[test]
    fn test_totals() {
        let totals = ledger_totals(&fixtures::sales(), &index());
        assert_eq!(totals.deals, 4);
        assert_eq!(totals.revenue, 1_053_000.0);
        assert_eq!(totals.commission, 52_650.0);
        assert_eq!(totals.average_deal, 263_250.0);
        assert!((totals.commission_pct - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_totals_with_no_sales_are_zero() {
        let totals = ledger_totals(&[], &index());
        assert_eq!(totals, LedgerTotals::default());
        assert!(totals.profit_margin_pct.is_finite());
    }

    #[test]
    fn test_enriched_rows_fall_back_to_unknown() {
        let rows = enriched_sales(&fixtures::sales(), &index());
        assert_eq!(rows[0].vehicle_name, "Porsche 911 Turbo S");
        assert_eq!(rows[0].client_name, "Alexander Rothschild");
        assert_eq!(rows[3].vehicle_name, "Unknown");
        assert_eq!(rows[3].make, "Unknown");
        assert_eq!(rows[3].profit, 0.0);
    }

    #[test]
    fn test_brand_rollups_sorted_by_revenue() {
        let rollups = brand_rollups(&fixtures::sales(), &index());
        assert_eq!(rollups.len(), 2);
        assert_eq!(rollups[0].make, "Porsche");
        assert_eq!(rollups[0].units, 2);
        assert_eq!(rollups[0].revenue, 458_000.0);
        assert_eq!(rollups[1].make, "Ferrari");
    }

    #[test]
    fn test_brand_rollups_by_profit() {
        let rollups = brand_rollups_by_profit(&fixtures::sales(), &index());
        assert_eq!(rollups[0].make, "Porsche");
        assert_eq!(rollups[0].profit, 68_000.0);
        assert_eq!(rollups[1].profit, 55_000.0);
    }

    #[test]
    fn test_brand_rollups_empty() {
        assert!(brand_rollups(&[], &index()).is_empty());
        assert!(brand_rollups(&fixtures::sales(), &LookupIndex::default()).is_empty());
    }

    #[test]
    fn test_top_models() {
        let models = top_models(&fixtures::sales(), &index(), 2);
        assert_eq!(models.len(), 2);
        assert_eq!(models[0].name, "Ferrari F8 Tributo");
        assert_eq!(models[1].name, "Porsche Taycan Turbo S");
    }
}
