pub mod analytics_controller;
pub mod client_controller;
pub mod sale_controller;
pub mod system_controller;
pub mod vehicle_controller;
