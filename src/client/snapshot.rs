//! Instantánea de datos del dashboard
//!
//! Carga vehículos, clientes, ventas y el agregado trimestral en paralelo,
//! construye los índices una vez por carga y recalcula todas las vistas
//! desde cero. Las mutaciones nunca tocan los datos locales: tras un éxito
//! se recarga todo.

use futures::try_join;
use serde::Serialize;
use tracing::info;

use crate::analysis::{self, LookupIndex};
use crate::dto::client_dto::ClientFilters;
use crate::dto::common::Pagination;
use crate::dto::vehicle_dto::VehicleFilters;
use crate::models::{Client, QuarterlyAggregate, Sale, Vehicle, VehicleStatus};

use super::{ClientError, DashboardClient};

/// Tamaño de página con el que el dashboard carga cada colección
pub const SNAPSHOT_LIMIT: u32 = 1000;

const TOP_CLIENTS: usize = 6;
const TOP_COMMISSION_CLIENTS: usize = 5;
const TOP_MODELS: usize = 5;

#[derive(Debug, Clone)]
pub struct DashboardSnapshot {
    pub vehicles: Vec<Vehicle>,
    pub clients: Vec<Client>,
    pub sales: Vec<Sale>,
    pub quarters: Vec<QuarterlyAggregate>,
    index: LookupIndex,
}

/// Todas las vistas derivadas de una instantánea
#[derive(Debug, Clone, Serialize)]
pub struct DashboardViews {
    pub totals: analysis::LedgerTotals,
    pub ledger: Vec<analysis::EnrichedSale>,
    pub brands: Vec<analysis::BrandRollup>,
    pub brands_by_profit: Vec<analysis::BrandRollup>,
    pub top_models: Vec<analysis::ModelRevenue>,
    pub commission_per_quarter: Vec<analysis::QuarterCommission>,
    pub revenue_trend_pct: f64,
    pub monthly: Vec<analysis::MonthlyFigures>,
    pub commission_by_client: Vec<analysis::ClientCommission>,
    pub price_distribution: Vec<analysis::PriceBucket>,
    pub status_counts: Vec<analysis::StatusCount>,
    pub tier_counts: Vec<analysis::TierCount>,
    pub top_clients: Vec<analysis::RankedClient>,
}

impl DashboardSnapshot {
    /// Construir una instantánea a partir de colecciones ya cargadas
    pub fn from_parts(
        vehicles: Vec<Vehicle>,
        clients: Vec<Client>,
        sales: Vec<Sale>,
        quarters: Vec<QuarterlyAggregate>,
    ) -> Self {
        let index = LookupIndex::build(&vehicles, &clients);
        Self {
            vehicles,
            clients,
            sales,
            quarters,
            index,
        }
    }

    pub async fn load(client: &DashboardClient) -> Result<Self, ClientError> {
        let vehicle_filters = VehicleFilters {
            limit: Some(SNAPSHOT_LIMIT),
            ..Default::default()
        };
        let client_filters = ClientFilters {
            limit: Some(SNAPSHOT_LIMIT),
            ..Default::default()
        };

        let (vehicles, clients, sales, quarters) = try_join!(
            client.list_vehicles(&vehicle_filters),
            client.list_clients(&client_filters),
            client.list_sales(Pagination::new(0, SNAPSHOT_LIMIT)),
            client.quarterly(),
        )?;

        info!(
            "📊 Dashboard cargado: {} vehículos, {} clientes, {} ventas",
            vehicles.len(),
            clients.len(),
            sales.len()
        );
        Ok(Self::from_parts(vehicles, clients, sales, quarters))
    }

    pub async fn reload(&mut self, client: &DashboardClient) -> Result<(), ClientError> {
        *self = Self::load(client).await?;
        Ok(())
    }

    pub fn index(&self) -> &LookupIndex {
        &self.index
    }

    pub fn vehicle(&self, id: i64) -> Option<&Vehicle> {
        self.index.vehicle(id)
    }

    /// Destinos que el dashboard ofrece para un vehículo cargado
    pub fn status_options(&self, vehicle_id: i64) -> Vec<VehicleStatus> {
        self.vehicle(vehicle_id)
            .map(|v| v.status.allowed_transitions().to_vec())
            .unwrap_or_default()
    }

    /// Cambiar el estado de un vehículo
    ///
    /// Solo se envían destinos ofrecidos para el estado cargado. Si la
    /// petición falla la instantánea queda intacta; si tiene éxito se recarga
    /// entera.
    pub async fn change_status(
        &mut self,
        client: &DashboardClient,
        vehicle_id: i64,
        target: VehicleStatus,
    ) -> Result<(), ClientError> {
        let current = self
            .vehicle(vehicle_id)
            .map(|v| v.status)
            .ok_or(ClientError::UnknownVehicle(vehicle_id))?;

        if !current.can_transition_to(target) {
            return Err(ClientError::TransitionNotOffered {
                from: current,
                to: target,
            });
        }

        client.set_vehicle_status(vehicle_id, target).await?;
        self.reload(client).await
    }

    /// Recalcular todas las vistas desde los datos cargados
    pub fn views(&self) -> DashboardViews {
        let index = &self.index;
        DashboardViews {
            totals: analysis::ledger_totals(&self.sales, index),
            ledger: analysis::enriched_sales(&self.sales, index),
            brands: analysis::brand_rollups(&self.sales, index),
            brands_by_profit: analysis::brand_rollups_by_profit(&self.sales, index),
            top_models: analysis::top_models(&self.sales, index, TOP_MODELS),
            commission_per_quarter: analysis::commission_per_quarter(&self.sales, &self.quarters),
            revenue_trend_pct: analysis::revenue_trend(&self.quarters),
            monthly: analysis::monthly_breakdown(&self.sales),
            commission_by_client: analysis::commission_by_client(
                &self.sales,
                index,
                TOP_COMMISSION_CLIENTS,
            ),
            price_distribution: analysis::price_distribution(&self.sales),
            status_counts: analysis::status_counts(&self.vehicles),
            tier_counts: analysis::tier_counts(&self.clients),
            top_clients: analysis::client_ranking(&self.clients, &self.sales, TOP_CLIENTS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::fixtures;

    fn snapshot() -> DashboardSnapshot {
        let sales = fixtures::sales();
        let quarters = analysis::quarterly_aggregates(&sales);
        DashboardSnapshot::from_parts(fixtures::vehicles(), fixtures::clients(), sales, quarters)
    }

    #[test]
    fn test_status_options_follow_loaded_status() {
        let snapshot = snapshot();
        assert_eq!(
            snapshot.status_options(4),
            vec![VehicleStatus::Booked, VehicleStatus::Sold]
        );
        assert!(snapshot.status_options(1).is_empty());
        assert!(snapshot.status_options(404).is_empty());
    }

    #[test]
    fn test_views_are_rederived() {
        let views = snapshot().views();
        assert_eq!(views.totals.deals, 4);
        assert_eq!(views.brands[0].make, "Porsche");
        assert_eq!(views.status_counts.len(), 4);
        assert_eq!(views.top_clients.len(), 3);
        assert_eq!(views.commission_per_quarter.len(), 3);
    }

    #[test]
    fn test_empty_snapshot_views_are_finite() {
        let views = DashboardSnapshot::from_parts(vec![], vec![], vec![], vec![]).views();
        assert_eq!(views.totals.profit_margin_pct, 0.0);
        assert_eq!(views.totals.commission_pct, 0.0);
        assert_eq!(views.revenue_trend_pct, 0.0);
        assert!(views.brands.is_empty());
    }
}
