//! Aura Drive
//!
//! Backend del dashboard de un concesionario de coches de lujo: inventario,
//! clientes, libro de ventas y analítica trimestral, más el cliente tipado
//! que consume la API y deriva las vistas del dashboard.

pub mod analysis;
pub mod client;
pub mod config;
pub mod controllers;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;

pub use routes::create_app;
pub use state::AppState;
