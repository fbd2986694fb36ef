pub mod coordinate;
pub mod drone_limit;
pub mod input_error;
pub mod kilometers;
pub mod kmh;
pub mod route_metrics;
pub mod route_status;
pub mod shipment;
pub mod vehicle_option;
