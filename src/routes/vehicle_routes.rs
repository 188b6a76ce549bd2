use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, patch},
    Json, Router,
};

use crate::controllers::vehicle_controller::VehicleController;
use crate::dto::vehicle_dto::{
    ChangeStatusRequest, CreateVehicleRequest, TransitionsResponse, UpdateVehicleRequest,
    VehicleFilters,
};
use crate::middleware::auth::{AuthenticatedUser, ManagerUser};
use crate::models::car_specs::CarSpecs;
use crate::models::vehicle::Vehicle;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::extract::{ApiJson, ApiPath, ApiQuery};

pub fn create_vehicle_router() -> Router<AppState> {
    Router::new()
        .route("/api/vehicles", get(list_vehicles).post(create_vehicle))
        .route("/api/vehicles/", get(list_vehicles).post(create_vehicle))
        .route(
            "/api/vehicles/:id",
            get(get_vehicle).put(update_vehicle).delete(delete_vehicle),
        )
        .route("/api/vehicles/:id/status", patch(change_status))
        .route("/api/vehicles/:id/transitions", get(get_transitions))
        .route("/api/vehicles/:id/specs", get(get_specs))
}

async fn list_vehicles(
    _user: AuthenticatedUser,
    State(state): State<AppState>,
    ApiQuery(filters): ApiQuery<VehicleFilters>,
) -> Result<Json<Vec<Vehicle>>, AppError> {
    let controller = VehicleController::new(state.pool.clone());
    let vehicles = controller.list(filters).await?;
    Ok(Json(vehicles))
}

async fn get_vehicle(
    _user: AuthenticatedUser,
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<Vehicle>, AppError> {
    let controller = VehicleController::new(state.pool.clone());
    let vehicle = controller.get_by_id(id).await?;
    Ok(Json(vehicle))
}

async fn create_vehicle(
    _manager: ManagerUser,
    State(state): State<AppState>,
    ApiJson(request): ApiJson<CreateVehicleRequest>,
) -> Result<(StatusCode, Json<Vehicle>), AppError> {
    let controller = VehicleController::new(state.pool.clone());
    let vehicle = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(vehicle)))
}

async fn update_vehicle(
    _manager: ManagerUser,
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(request): ApiJson<UpdateVehicleRequest>,
) -> Result<Json<Vehicle>, AppError> {
    let controller = VehicleController::new(state.pool.clone());
    let vehicle = controller.update(id, request).await?;
    Ok(Json(vehicle))
}

async fn change_status(
    _manager: ManagerUser,
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(request): ApiJson<ChangeStatusRequest>,
) -> Result<Json<Vehicle>, AppError> {
    let controller = VehicleController::new(state.pool.clone());
    let vehicle = controller.change_status(id, request).await?;
    Ok(Json(vehicle))
}

async fn get_transitions(
    _user: AuthenticatedUser,
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<TransitionsResponse>, AppError> {
    let controller = VehicleController::new(state.pool.clone());
    let transitions = controller.transitions(id).await?;
    Ok(Json(transitions))
}

async fn get_specs(
    _user: AuthenticatedUser,
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<CarSpecs>, AppError> {
    let controller = VehicleController::new(state.pool.clone());
    let specs = controller.specs(id).await?;
    Ok(Json(specs))
}

async fn delete_vehicle(
    _manager: ManagerUser,
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<StatusCode, AppError> {
    let controller = VehicleController::new(state.pool.clone());
    controller.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
