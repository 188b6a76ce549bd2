use sqlx::{QueryBuilder, Sqlite, SqlitePool};

use crate::dto::common::Pagination;
use crate::dto::vehicle_dto::{CreateVehicleRequest, UpdateVehicleRequest, VehicleFilters};
use crate::models::vehicle::{Vehicle, VehicleStatus};
use crate::utils::errors::{map_constraint_error, AppError};

const VEHICLE_COLUMNS: &str = "id, vin, make, model, year, purchase_price, status";

pub struct VehicleRepository {
    pool: SqlitePool,
}

impl VehicleRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn list(&self, filters: &VehicleFilters) -> Result<Vec<Vehicle>, AppError> {
        let mut query: QueryBuilder<Sqlite> =
            QueryBuilder::new(format!("SELECT {} FROM vehicles WHERE 1 = 1", VEHICLE_COLUMNS));

        if let Some(status) = filters.status {
            query.push(" AND status = ").push_bind(status);
        }
        // LIKE en SQLite ya ignora mayúsculas para ASCII
        if let Some(make) = filters.make.as_deref().map(str::trim).filter(|m| !m.is_empty()) {
            query
                .push(" AND make LIKE '%' || ")
                .push_bind(make.to_string())
                .push(" || '%'");
        }

        let page: Pagination = filters.pagination();
        query
            .push(" ORDER BY id LIMIT ")
            .push_bind(page.limit())
            .push(" OFFSET ")
            .push_bind(page.offset());

        let vehicles = query
            .build_query_as::<Vehicle>()
            .fetch_all(&self.pool)
            .await?;

        Ok(vehicles)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Vehicle>, AppError> {
        let vehicle = sqlx::query_as::<_, Vehicle>(&format!(
            "SELECT {} FROM vehicles WHERE id = ?",
            VEHICLE_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(vehicle)
    }

    pub async fn vin_exists(&self, vin: &str, exclude_id: Option<i64>) -> Result<bool, AppError> {
        let exists: i64 = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM vehicles WHERE vin = ? AND id != COALESCE(?, -1))",
        )
        .bind(vin)
        .bind(exclude_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists != 0)
    }

    pub async fn create(&self, request: &CreateVehicleRequest) -> Result<Vehicle, AppError> {
        let vehicle = sqlx::query_as::<_, Vehicle>(&format!(
            r#"
            INSERT INTO vehicles (vin, make, model, year, purchase_price, status)
            VALUES (?, ?, ?, ?, ?, ?)
            RETURNING {}
            "#,
            VEHICLE_COLUMNS
        ))
        .bind(&request.vin)
        .bind(request.make.trim())
        .bind(request.model.trim())
        .bind(request.year)
        .bind(request.purchase_price)
        .bind(request.status)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_constraint_error(e, "Vehicle with this VIN already exists"))?;

        Ok(vehicle)
    }

    /// Aplica solo los campos presentes sobre el vehículo actual
    ///
    /// La escritura solo ocurre si el estado sigue siendo el leído en
    /// `current`; `None` indica que otra petición lo cambió entretanto.
    pub async fn update(
        &self,
        current: Vehicle,
        request: UpdateVehicleRequest,
    ) -> Result<Option<Vehicle>, AppError> {
        let vehicle = sqlx::query_as::<_, Vehicle>(&format!(
            r#"
            UPDATE vehicles
            SET vin = ?, make = ?, model = ?, year = ?, purchase_price = ?, status = ?
            WHERE id = ? AND status = ?
            RETURNING {}
            "#,
            VEHICLE_COLUMNS
        ))
        .bind(request.vin.unwrap_or(current.vin))
        .bind(request.make.unwrap_or(current.make))
        .bind(request.model.unwrap_or(current.model))
        .bind(request.year.unwrap_or(current.year))
        .bind(request.purchase_price.unwrap_or(current.purchase_price))
        .bind(request.status.unwrap_or(current.status))
        .bind(current.id)
        .bind(current.status)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_constraint_error(e, "Vehicle with this VIN already exists"))?;

        Ok(vehicle)
    }

    /// Cambia `from` → `to` solo si el vehículo sigue en `from`
    pub async fn update_status(
        &self,
        id: i64,
        from: VehicleStatus,
        to: VehicleStatus,
    ) -> Result<Option<Vehicle>, AppError> {
        let vehicle = sqlx::query_as::<_, Vehicle>(&format!(
            "UPDATE vehicles SET status = ? WHERE id = ? AND status = ? RETURNING {}",
            VEHICLE_COLUMNS
        ))
        .bind(to)
        .bind(id)
        .bind(from)
        .fetch_optional(&self.pool)
        .await?;

        Ok(vehicle)
    }

    /// Devuelve `false` si el vehículo no existía
    pub async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM vehicles WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| map_constraint_error(e, "Vehicle has recorded sales and cannot be deleted"))?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM vehicles")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}
