use sqlx::SqlitePool;

use crate::dto::common::Pagination;
use crate::dto::sale_dto::{CreateSaleRequest, UpdateSaleRequest};
use crate::models::sale::Sale;
use crate::models::vehicle::VehicleStatus;
use crate::utils::errors::{map_constraint_error, AppError};

const SALE_COLUMNS: &str = "id, vehicle_id, client_id, sale_price, sale_date, commission";

pub struct SaleRepository {
    pool: SqlitePool,
}

impl SaleRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Ventas de la más reciente a la más antigua
    pub async fn list(&self, page: Pagination) -> Result<Vec<Sale>, AppError> {
        let sales = sqlx::query_as::<_, Sale>(&format!(
            "SELECT {} FROM sales ORDER BY sale_date DESC, id DESC LIMIT ? OFFSET ?",
            SALE_COLUMNS
        ))
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await?;

        Ok(sales)
    }

    /// Todas las ventas, sin paginar, para los agregados
    pub async fn list_all(&self) -> Result<Vec<Sale>, AppError> {
        let sales = sqlx::query_as::<_, Sale>(&format!(
            "SELECT {} FROM sales ORDER BY sale_date, id",
            SALE_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(sales)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Sale>, AppError> {
        let sale = sqlx::query_as::<_, Sale>(&format!("SELECT {} FROM sales WHERE id = ?", SALE_COLUMNS))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(sale)
    }

    /// Registrar una venta en una sola transacción
    ///
    /// Inserta la venta, marca el vehículo como `Sold` y suma el precio al
    /// valor acumulado del cliente. Si otro proceso vendió el vehículo entre
    /// la validación y la escritura, la transacción se revierte con 409.
    pub async fn record_sale(&self, request: &CreateSaleRequest) -> Result<Sale, AppError> {
        let mut tx = self.pool.begin().await?;

        let marked = sqlx::query("UPDATE vehicles SET status = ? WHERE id = ? AND status != ?")
            .bind(VehicleStatus::Sold)
            .bind(request.vehicle_id)
            .bind(VehicleStatus::Sold)
            .execute(&mut *tx)
            .await?;
        if marked.rows_affected() == 0 {
            return Err(AppError::Conflict("Vehicle is already sold".to_string()));
        }

        let sale = sqlx::query_as::<_, Sale>(&format!(
            r#"
            INSERT INTO sales (vehicle_id, client_id, sale_price, sale_date, commission)
            VALUES (?, ?, ?, ?, ?)
            RETURNING {}
            "#,
            SALE_COLUMNS
        ))
        .bind(request.vehicle_id)
        .bind(request.client_id)
        .bind(request.sale_price)
        .bind(request.sale_date)
        .bind(request.commission)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| map_constraint_error(e, "Sale references an unknown vehicle or client"))?;

        sqlx::query("UPDATE clients SET lifetime_value = lifetime_value + ? WHERE id = ?")
            .bind(request.sale_price)
            .bind(request.client_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(sale)
    }

    pub async fn update(&self, current: Sale, request: UpdateSaleRequest) -> Result<Sale, AppError> {
        let sale = sqlx::query_as::<_, Sale>(&format!(
            r#"
            UPDATE sales
            SET vehicle_id = ?, client_id = ?, sale_price = ?, sale_date = ?, commission = ?
            WHERE id = ?
            RETURNING {}
            "#,
            SALE_COLUMNS
        ))
        .bind(request.vehicle_id.unwrap_or(current.vehicle_id))
        .bind(request.client_id.unwrap_or(current.client_id))
        .bind(request.sale_price.unwrap_or(current.sale_price))
        .bind(request.sale_date.unwrap_or(current.sale_date))
        .bind(request.commission.unwrap_or(current.commission))
        .bind(current.id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_constraint_error(e, "Sale references an unknown vehicle or client"))?;

        Ok(sale)
    }

    pub async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM sales WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM sales")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}
