use sqlx::SqlitePool;
use tracing::info;
use validator::Validate;

use crate::dto::vehicle_dto::{
    ChangeStatusRequest, CreateVehicleRequest, TransitionsResponse, UpdateVehicleRequest,
    VehicleFilters,
};
use crate::models::car_specs::{self, CarSpecs, SpecLookup};
use crate::models::vehicle::{Vehicle, VehicleStatus};
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::services::lifecycle::{check_transition, status_options, TransitionOutcome};
use crate::utils::errors::{conflict_error, not_found_error, AppError, AppResult};
use crate::utils::validation::{ensure_not_blank, ensure_positive, normalize_vin};

pub struct VehicleController {
    repository: VehicleRepository,
}

impl VehicleController {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            repository: VehicleRepository::new(pool),
        }
    }

    pub async fn list(&self, filters: VehicleFilters) -> AppResult<Vec<Vehicle>> {
        self.repository.list(&filters).await
    }

    pub async fn get_by_id(&self, id: i64) -> AppResult<Vehicle> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Vehicle"))
    }

    pub async fn create(&self, mut request: CreateVehicleRequest) -> AppResult<Vehicle> {
        request.vin = normalize_vin(&request.vin);
        request.validate()?;
        ensure_not_blank("make", &request.make)?;
        ensure_not_blank("model", &request.model)?;
        ensure_positive("purchase_price", request.purchase_price)?;

        if self.repository.vin_exists(&request.vin, None).await? {
            return Err(conflict_error("Vehicle", "VIN"));
        }

        let vehicle = self.repository.create(&request).await?;
        info!("🚗 Vehículo creado: {} ({})", vehicle.display_name(), vehicle.vin);
        Ok(vehicle)
    }

    /// Actualización parcial; un cambio de estado pasa por la tabla de transiciones
    pub async fn update(&self, id: i64, mut request: UpdateVehicleRequest) -> AppResult<Vehicle> {
        request.vin = request.vin.as_deref().map(normalize_vin);
        request.validate()?;
        if let Some(make) = &request.make {
            ensure_not_blank("make", make)?;
        }
        if let Some(model) = &request.model {
            ensure_not_blank("model", model)?;
        }
        if let Some(price) = request.purchase_price {
            ensure_positive("purchase_price", price)?;
        }

        let current = self.get_by_id(id).await?;

        if let Some(target) = request.status {
            check_transition(current.status, target)?;
        }
        if let Some(vin) = &request.vin {
            if self.repository.vin_exists(vin, Some(id)).await? {
                return Err(conflict_error("Vehicle", "VIN"));
            }
        }

        let target = request.status;
        let vehicle = match self.repository.update(current, request).await? {
            Some(vehicle) => vehicle,
            None => return Err(self.status_moved_error(id, target).await),
        };
        info!("🚗 Vehículo {} actualizado", vehicle.id);
        Ok(vehicle)
    }

    pub async fn change_status(&self, id: i64, request: ChangeStatusRequest) -> AppResult<Vehicle> {
        let current = self.get_by_id(id).await?;

        match check_transition(current.status, request.status)? {
            TransitionOutcome::Unchanged => Ok(current),
            TransitionOutcome::Apply => {
                let updated = self
                    .repository
                    .update_status(id, current.status, request.status)
                    .await?;
                match updated {
                    Some(vehicle) => {
                        info!(
                            "🔄 Vehículo {}: {} → {}",
                            id, current.status, vehicle.status
                        );
                        Ok(vehicle)
                    }
                    None => {
                        // Otra petición cambió el estado entre la lectura y la escritura
                        let latest = self.get_by_id(id).await?;
                        match check_transition(latest.status, request.status)? {
                            TransitionOutcome::Unchanged => Ok(latest),
                            TransitionOutcome::Apply => Err(status_changed_concurrently()),
                        }
                    }
                }
            }
        }
    }

    /// Error para una escritura descartada porque el estado ya no era el leído
    async fn status_moved_error(&self, id: i64, target: Option<VehicleStatus>) -> AppError {
        let latest = match self.get_by_id(id).await {
            Ok(latest) => latest,
            Err(e) => return e,
        };
        match target.map(|to| check_transition(latest.status, to)) {
            Some(Err(e)) => e,
            _ => status_changed_concurrently(),
        }
    }

    pub async fn transitions(&self, id: i64) -> AppResult<TransitionsResponse> {
        let vehicle = self.get_by_id(id).await?;
        Ok(TransitionsResponse {
            vehicle_id: vehicle.id,
            current: vehicle.status,
            allowed: status_options(vehicle.status),
        })
    }

    pub async fn specs(&self, id: i64) -> AppResult<CarSpecs> {
        let vehicle = self.get_by_id(id).await?;
        match car_specs::lookup(&vehicle.make, &vehicle.model) {
            SpecLookup::Catalogued { specs, .. } => Ok(specs),
            SpecLookup::Unlisted { make, model } => Err(AppError::NotFound(format!(
                "No specifications listed for {} {}",
                make, model
            ))),
        }
    }

    pub async fn delete(&self, id: i64) -> AppResult<()> {
        if !self.repository.delete(id).await? {
            return Err(not_found_error("Vehicle"));
        }
        info!("🗑️ Vehículo {} eliminado", id);
        Ok(())
    }
}

fn status_changed_concurrently() -> AppError {
    AppError::Conflict("Vehicle status changed while updating; reload and try again".to_string())
}
