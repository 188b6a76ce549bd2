use axum::{extract::State, routing::get, Json, Router};
use serde_json::{json, Value};

use crate::controllers::system_controller::SystemController;
use crate::middleware::auth::AuthenticatedUser;
use crate::models::analytics::HealthInfo;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_system_router() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/api/system/health", get(get_health))
}

/// Endpoint público de presentación
async fn root() -> Json<Value> {
    Json(json!({
        "name": "Aura Drive",
        "version": env!("CARGO_PKG_VERSION"),
        "status": "operational",
    }))
}

async fn get_health(
    _user: AuthenticatedUser,
    State(state): State<AppState>,
) -> Result<Json<HealthInfo>, AppError> {
    let controller = SystemController::new(state.pool.clone(), state.db_config.clone());
    Ok(Json(controller.health().await?))
}
