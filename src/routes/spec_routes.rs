use std::collections::BTreeMap;

use axum::{routing::get, Json, Router};

use crate::middleware::auth::AuthenticatedUser;
use crate::models::car_specs;
use crate::state::AppState;

pub fn create_spec_router() -> Router<AppState> {
    Router::new().route("/api/specs/catalog", get(get_catalog))
}

async fn get_catalog(_user: AuthenticatedUser) -> Json<BTreeMap<&'static str, Vec<&'static str>>> {
    Json(car_specs::catalog())
}
