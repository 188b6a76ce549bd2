pub mod client_repository;
pub mod sale_repository;
pub mod system_repository;
pub mod vehicle_repository;
