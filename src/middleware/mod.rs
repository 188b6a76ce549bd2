//! Middleware del sistema
//!
//! Este módulo contiene los extractores de autenticación y la
//! configuración de CORS.

pub mod auth;
pub mod cors;

pub use auth::{AuthenticatedUser, ManagerUser};
pub use cors::cors_middleware_with_origins;
