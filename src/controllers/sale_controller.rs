use sqlx::SqlitePool;
use tracing::info;

use crate::dto::common::Pagination;
use crate::dto::sale_dto::{CreateSaleRequest, UpdateSaleRequest};
use crate::models::sale::Sale;
use crate::repositories::client_repository::ClientRepository;
use crate::repositories::sale_repository::SaleRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::services::lifecycle::ensure_sellable;
use crate::utils::errors::{not_found_error, AppResult};
use crate::utils::validation::{ensure_non_negative, ensure_positive};

pub struct SaleController {
    sales: SaleRepository,
    vehicles: VehicleRepository,
    clients: ClientRepository,
}

impl SaleController {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            sales: SaleRepository::new(pool.clone()),
            vehicles: VehicleRepository::new(pool.clone()),
            clients: ClientRepository::new(pool),
        }
    }

    pub async fn list(&self, page: Pagination) -> AppResult<Vec<Sale>> {
        self.sales.list(page).await
    }

    pub async fn get_by_id(&self, id: i64) -> AppResult<Sale> {
        self.sales
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Sale"))
    }

    /// Registrar una venta: el vehículo pasa a `Sold` y el cliente suma el importe
    pub async fn create(&self, request: CreateSaleRequest) -> AppResult<Sale> {
        ensure_positive("sale_price", request.sale_price)?;
        ensure_non_negative("commission", request.commission)?;

        let vehicle = self
            .vehicles
            .find_by_id(request.vehicle_id)
            .await?
            .ok_or_else(|| not_found_error("Vehicle"))?;
        self.clients
            .find_by_id(request.client_id)
            .await?
            .ok_or_else(|| not_found_error("Client"))?;

        ensure_sellable(vehicle.status)?;

        let sale = self.sales.record_sale(&request).await?;
        info!(
            "💰 Venta {} registrada: {} por {:.2}",
            sale.id,
            vehicle.display_name(),
            sale.sale_price
        );
        Ok(sale)
    }

    pub async fn update(&self, id: i64, request: UpdateSaleRequest) -> AppResult<Sale> {
        if let Some(price) = request.sale_price {
            ensure_positive("sale_price", price)?;
        }
        if let Some(commission) = request.commission {
            ensure_non_negative("commission", commission)?;
        }

        let current = self.get_by_id(id).await?;
        if let Some(vehicle_id) = request.vehicle_id {
            self.vehicles
                .find_by_id(vehicle_id)
                .await?
                .ok_or_else(|| not_found_error("Vehicle"))?;
        }
        if let Some(client_id) = request.client_id {
            self.clients
                .find_by_id(client_id)
                .await?
                .ok_or_else(|| not_found_error("Client"))?;
        }

        let sale = self.sales.update(current, request).await?;
        info!("💰 Venta {} actualizada", sale.id);
        Ok(sale)
    }

    pub async fn delete(&self, id: i64) -> AppResult<()> {
        if !self.sales.delete(id).await? {
            return Err(not_found_error("Sale"));
        }
        info!("🗑️ Venta {} eliminada", id);
        Ok(())
    }
}
