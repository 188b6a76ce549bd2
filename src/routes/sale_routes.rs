use axum::{
    extract::State,
    http::StatusCode,
    routing::get,
    Json, Router,
};

use crate::controllers::sale_controller::SaleController;
use crate::dto::common::Pagination;
use crate::dto::sale_dto::{CreateSaleRequest, UpdateSaleRequest};
use crate::middleware::auth::{AuthenticatedUser, ManagerUser};
use crate::models::sale::Sale;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::extract::{ApiJson, ApiPath, ApiQuery};

pub fn create_sale_router() -> Router<AppState> {
    Router::new()
        .route("/api/sales", get(list_sales).post(create_sale))
        .route("/api/sales/", get(list_sales).post(create_sale))
        .route(
            "/api/sales/:id",
            get(get_sale).put(update_sale).delete(delete_sale),
        )
}

async fn list_sales(
    _user: AuthenticatedUser,
    State(state): State<AppState>,
    ApiQuery(page): ApiQuery<Pagination>,
) -> Result<Json<Vec<Sale>>, AppError> {
    let controller = SaleController::new(state.pool.clone());
    let sales = controller.list(page).await?;
    Ok(Json(sales))
}

async fn get_sale(
    _user: AuthenticatedUser,
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<Sale>, AppError> {
    let controller = SaleController::new(state.pool.clone());
    let sale = controller.get_by_id(id).await?;
    Ok(Json(sale))
}

// Cualquier vendedor puede registrar una venta
async fn create_sale(
    user: AuthenticatedUser,
    State(state): State<AppState>,
    ApiJson(request): ApiJson<CreateSaleRequest>,
) -> Result<(StatusCode, Json<Sale>), AppError> {
    let controller = SaleController::new(state.pool.clone());
    let sale = controller.create(request).await?;
    tracing::debug!("Venta {} registrada por {}", sale.id, user.0.username);
    Ok((StatusCode::CREATED, Json(sale)))
}

async fn update_sale(
    _manager: ManagerUser,
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(request): ApiJson<UpdateSaleRequest>,
) -> Result<Json<Sale>, AppError> {
    let controller = SaleController::new(state.pool.clone());
    let sale = controller.update(id, request).await?;
    Ok(Json(sale))
}

async fn delete_sale(
    _manager: ManagerUser,
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<StatusCode, AppError> {
    let controller = SaleController::new(state.pool.clone());
    controller.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
