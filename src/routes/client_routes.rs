use axum::{
    extract::State,
    http::StatusCode,
    routing::get,
    Json, Router,
};

use crate::controllers::client_controller::ClientController;
use crate::dto::client_dto::{ClientFilters, CreateClientRequest, UpdateClientRequest};
use crate::middleware::auth::{AuthenticatedUser, ManagerUser};
use crate::models::client::Client;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::extract::{ApiJson, ApiPath, ApiQuery};

pub fn create_client_router() -> Router<AppState> {
    Router::new()
        .route("/api/clients", get(list_clients).post(create_client))
        .route("/api/clients/", get(list_clients).post(create_client))
        .route(
            "/api/clients/:id",
            get(get_client).put(update_client).delete(delete_client),
        )
}

async fn list_clients(
    _user: AuthenticatedUser,
    State(state): State<AppState>,
    ApiQuery(filters): ApiQuery<ClientFilters>,
) -> Result<Json<Vec<Client>>, AppError> {
    let controller = ClientController::new(state.pool.clone());
    let clients = controller.list(filters).await?;
    Ok(Json(clients))
}

async fn get_client(
    _user: AuthenticatedUser,
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<Client>, AppError> {
    let controller = ClientController::new(state.pool.clone());
    let client = controller.get_by_id(id).await?;
    Ok(Json(client))
}

async fn create_client(
    _manager: ManagerUser,
    State(state): State<AppState>,
    ApiJson(request): ApiJson<CreateClientRequest>,
) -> Result<(StatusCode, Json<Client>), AppError> {
    let controller = ClientController::new(state.pool.clone());
    let client = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(client)))
}

async fn update_client(
    _manager: ManagerUser,
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(request): ApiJson<UpdateClientRequest>,
) -> Result<Json<Client>, AppError> {
    let controller = ClientController::new(state.pool.clone());
    let client = controller.update(id, request).await?;
    Ok(Json(client))
}

async fn delete_client(
    _manager: ManagerUser,
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<StatusCode, AppError> {
    let controller = ClientController::new(state.pool.clone());
    controller.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
