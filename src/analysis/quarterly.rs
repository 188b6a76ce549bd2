//! Agregados por trimestre y por mes

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::{percentage, round2, safe_div};
use crate::models::{Insights, QuarterlyAggregate, Sale};

const NO_DATA: &str = "N/A";

/// Trimestre de una fecha como (año, trimestre)
pub fn quarter_of(date: NaiveDate) -> (i32, u32) {
    (date.year(), (date.month() + 2) / 3)
}

/// Etiqueta `Q<n>-<año>`: 2024-02-15 → `Q1-2024`
pub fn quarter_label(date: NaiveDate) -> String {
    let (year, quarter) = quarter_of(date);
    format!("Q{}-{}", quarter, year)
}

/// Unidades, ingreso y precio medio por trimestre, en orden cronológico
pub fn quarterly_aggregates(sales: &[Sale]) -> Vec<QuarterlyAggregate> {
    let mut buckets: BTreeMap<(i32, u32), (i64, f64)> = BTreeMap::new();
    for sale in sales {
        let bucket = buckets.entry(quarter_of(sale.sale_date)).or_insert((0, 0.0));
        bucket.0 += 1;
        bucket.1 += sale.sale_price;
    }

    buckets
        .into_iter()
        .map(|((year, quarter), (units, revenue))| QuarterlyAggregate {
            quarter: format!("Q{}-{}", quarter, year),
            total_units_sold: units,
            total_revenue: round2(revenue),
            average_price: round2(safe_div(revenue, units as f64)),
        })
        .collect()
}

/// Trimestres con mayor y menor ingreso
///
/// En caso de empate gana el primero en orden cronológico. Sin datos, las
/// etiquetas son `"N/A"` y los importes 0.
pub fn insights(quarters: &[QuarterlyAggregate]) -> Insights {
    let mut max: Option<&QuarterlyAggregate> = None;
    let mut min: Option<&QuarterlyAggregate> = None;

    for quarter in quarters {
        if max.map_or(true, |m| quarter.total_revenue > m.total_revenue) {
            max = Some(quarter);
        }
        if min.map_or(true, |m| quarter.total_revenue < m.total_revenue) {
            min = Some(quarter);
        }
    }

    Insights {
        max_quarter: max.map_or_else(|| NO_DATA.to_string(), |q| q.quarter.clone()),
        max_revenue: max.map_or(0.0, |q| q.total_revenue),
        min_quarter: min.map_or_else(|| NO_DATA.to_string(), |q| q.quarter.clone()),
        min_revenue: min.map_or(0.0, |q| q.total_revenue),
        quarters: quarters.to_vec(),
    }
}

/// Comisión de un trimestre
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuarterCommission {
    pub quarter: String,
    pub revenue: f64,
    pub commission: f64,
    pub deals: usize,
    pub rate_pct: f64,
}

/// Comisión por trimestre sobre una lista de trimestres ya calculada
///
/// Los trimestres salen de `quarters` (normalmente el agregado del
/// servidor); las ventas se asignan por su etiqueta de trimestre.
pub fn commission_per_quarter(sales: &[Sale], quarters: &[QuarterlyAggregate]) -> Vec<QuarterCommission> {
    quarters
        .iter()
        .map(|quarter| {
            let (deals, commission) = sales
                .iter()
                .filter(|sale| quarter_label(sale.sale_date) == quarter.quarter)
                .fold((0, 0.0), |(n, total), sale| (n + 1, total + sale.commission));

            QuarterCommission {
                quarter: quarter.quarter.clone(),
                revenue: quarter.total_revenue,
                commission,
                deals,
                rate_pct: percentage(commission, quarter.total_revenue),
            }
        })
        .collect()
}

/// Variación porcentual del ingreso entre los dos últimos trimestres
pub fn revenue_trend(quarters: &[QuarterlyAggregate]) -> f64 {
    match quarters {
        [.., previous, current] => percentage(
            current.total_revenue - previous.total_revenue,
            previous.total_revenue,
        ),
        _ => 0.0,
    }
}

/// Cifras de un mes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyFigures {
    /// Etiqueta corta, p. ej. `"Jan 25"`
    pub label: String,
    pub year: i32,
    pub month: u32,
    pub revenue: f64,
    pub commission: f64,
    pub deals: usize,
}

/// Ingreso, comisión y número de ventas por mes, en orden cronológico
pub fn monthly_breakdown(sales: &[Sale]) -> Vec<MonthlyFigures> {
    let mut months: BTreeMap<(i32, u32), MonthlyFigures> = BTreeMap::new();

    for sale in sales {
        let (year, month) = (sale.sale_date.year(), sale.sale_date.month());
        let entry = months.entry((year, month)).or_insert_with(|| MonthlyFigures {
            label: sale.sale_date.format("%b %y").to_string(),
            year,
            month,
            revenue: 0.0,
            commission: 0.0,
            deals: 0,
        });
        entry.revenue += sale.sale_price;
        entry.commission += sale.commission;
        entry.deals += 1;
    }

    months.into_values().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::fixtures;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_quarter_label() {
        assert_eq!(quarter_label(date(2024, 2, 15)), "Q1-2024");
        assert_eq!(quarter_label(date(2024, 7, 1)), "Q3-2024");
        assert_eq!(quarter_label(date(2024, 12, 31)), "Q4-2024");
        assert_eq!(quarter_label(date(2025, 1, 1)), "Q1-2025");
        assert_eq!(quarter_label(date(2025, 6, 30)), "Q2-2025");
    }

    #[test]
    fn test_quarterly_aggregates() {
        let quarters = quarterly_aggregates(&fixtures::sales());
        let labels: Vec<&str> = quarters.iter().map(|q| q.quarter.as_str()).collect();
        assert_eq!(labels, vec!["Q1-2025", "Q2-2025", "Q3-2025"]);

        assert_eq!(quarters[0].total_units_sold, 2);
        assert_eq!(quarters[0].total_revenue, 553_000.0);
        assert_eq!(quarters[0].average_price, 276_500.0);
    }

    #[test]
    fn test_quarterly_rounds_to_cents() {
        let sales = vec![
            fixtures::sale(1, 1, 1, 100_000.0, (2025, 1, 1), 0.0),
            fixtures::sale(2, 1, 1, 100_000.0, (2025, 1, 2), 0.0),
            fixtures::sale(3, 1, 1, 100_000.01, (2025, 1, 3), 0.0),
        ];
        let quarters = quarterly_aggregates(&sales);
        assert_eq!(quarters[0].average_price, 100_000.0);
    }

    #[test]
    fn test_insights() {
        let result = insights(&quarterly_aggregates(&fixtures::sales()));
        assert_eq!(result.max_quarter, "Q1-2025");
        assert_eq!(result.max_revenue, 553_000.0);
        assert_eq!(result.min_quarter, "Q2-2025");
        assert_eq!(result.min_revenue, 240_000.0);
        assert_eq!(result.quarters.len(), 3);
    }

    #[test]
    fn test_insights_without_data() {
        let result = insights(&[]);
        assert_eq!(result.max_quarter, "N/A");
        assert_eq!(result.min_quarter, "N/A");
        assert_eq!(result.max_revenue, 0.0);
        assert!(result.quarters.is_empty());
    }

    #[test]
    fn test_commission_per_quarter() {
        let sales = fixtures::sales();
        let rows = commission_per_quarter(&sales, &quarterly_aggregates(&sales));
        assert_eq!(rows[0].deals, 2);
        assert_eq!(rows[0].commission, 27_650.0);
        assert!((rows[0].rate_pct - 5.0).abs() < 1e-9);

        let empty_quarter = QuarterlyAggregate {
            quarter: "Q4-2030".to_string(),
            total_units_sold: 0,
            total_revenue: 0.0,
            average_price: 0.0,
        };
        let rows = commission_per_quarter(&sales, &[empty_quarter]);
        assert_eq!(rows[0].deals, 0);
        assert_eq!(rows[0].rate_pct, 0.0);
    }

    #[test]
    fn test_revenue_trend() {
        let quarters = quarterly_aggregates(&fixtures::sales());
        // Q2 240k → Q3 260k
        let trend = revenue_trend(&quarters);
        assert!((trend - 8.333_333).abs() < 1e-3);

        assert_eq!(revenue_trend(&quarters[..1]), 0.0);
        assert_eq!(revenue_trend(&[]), 0.0);
    }

    #[test]
    fn test_monthly_breakdown() {
        let months = monthly_breakdown(&fixtures::sales());
        let labels: Vec<&str> = months.iter().map(|m| m.label.as_str()).collect();
        assert_eq!(labels, vec!["Jan 25", "Feb 25", "May 25", "Aug 25"]);
        assert_eq!(months[1].revenue, 335_000.0);
        assert_eq!(months[1].deals, 1);
    }
}
