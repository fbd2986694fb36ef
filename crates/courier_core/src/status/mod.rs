pub mod status_inference;
pub mod weather_signal;
