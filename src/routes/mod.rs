//! Rutas de la API
//!
//! Cada recurso expone su propio router con las rutas completas; `create_app`
//! los une y añade las capas de compresión, CORS y trazas.

use axum::Router;
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

use crate::middleware::cors::cors_middleware_with_origins;
use crate::state::AppState;

pub mod analytics_routes;
pub mod auth_routes;
pub mod client_routes;
pub mod sale_routes;
pub mod spec_routes;
pub mod system_routes;
pub mod vehicle_routes;

/// Construir la aplicación completa con su estado
pub fn create_app(state: AppState) -> Router {
    let cors = cors_middleware_with_origins(&state.config.cors_origins);

    Router::new()
        .merge(system_routes::create_system_router())
        .merge(auth_routes::create_auth_router())
        .merge(vehicle_routes::create_vehicle_router())
        .merge(client_routes::create_client_router())
        .merge(sale_routes::create_sale_router())
        .merge(analytics_routes::create_analytics_router())
        .merge(spec_routes::create_spec_router())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
