//! Services module
//!
//! Este módulo contiene la lógica de negocio que no pertenece a un único
//! repositorio: el ciclo de vida del vehículo y el directorio de usuarios.

pub mod lifecycle;
pub mod user_directory;

pub use lifecycle::{check_transition, ensure_sellable, status_options, TransitionOutcome};
pub use user_directory::UserDirectory;
