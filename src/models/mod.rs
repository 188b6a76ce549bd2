//! Modelos del sistema
//!
//! Este módulo contiene los modelos de datos que mapean al schema SQLite
//! y los tipos que viajan por la API.

pub mod analytics;
pub mod auth;
pub mod car_specs;
pub mod client;
pub mod sale;
pub mod vehicle;

pub use analytics::{HealthInfo, Insights, QuarterlyAggregate};
pub use auth::{UserInfo, UserRole};
pub use client::{Client, VipTier};
pub use sale::Sale;
pub use vehicle::{Vehicle, VehicleStatus};
