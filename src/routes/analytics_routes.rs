use axum::{extract::State, routing::get, Json, Router};

use crate::controllers::analytics_controller::AnalyticsController;
use crate::middleware::auth::AuthenticatedUser;
use crate::models::analytics::{Insights, QuarterlyAggregate};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_analytics_router() -> Router<AppState> {
    Router::new()
        .route("/api/analytics/quarterly", get(get_quarterly))
        .route("/api/analytics/insights", get(get_insights))
}

async fn get_quarterly(
    _user: AuthenticatedUser,
    State(state): State<AppState>,
) -> Result<Json<Vec<QuarterlyAggregate>>, AppError> {
    let controller = AnalyticsController::new(state.pool.clone());
    Ok(Json(controller.quarterly().await?))
}

async fn get_insights(
    _user: AuthenticatedUser,
    State(state): State<AppState>,
) -> Result<Json<Insights>, AppError> {
    let controller = AnalyticsController::new(state.pool.clone());
    Ok(Json(controller.insights().await?))
}
