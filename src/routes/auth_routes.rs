use axum::{routing::get, Json, Router};

use crate::middleware::auth::AuthenticatedUser;
use crate::models::auth::UserInfo;
use crate::state::AppState;

pub fn create_auth_router() -> Router<AppState> {
    Router::new().route("/api/auth/me", get(me))
}

/// Devuelve el usuario de las credenciales; sirve también para validar el login
async fn me(AuthenticatedUser(user): AuthenticatedUser) -> Json<UserInfo> {
    Json(user)
}
