//! Utilidades del sistema
//!
//! Este módulo contiene utilidades para manejo de errores, extractores y validación.

pub mod errors;
pub mod extract;
pub mod validation;

pub use errors::{AppError, AppResult};
pub use extract::{ApiJson, ApiPath, ApiQuery};
