pub mod client_dto;
pub mod common;
pub mod sale_dto;
pub mod vehicle_dto;
