pub mod env;
pub mod graphhopper_api;
pub mod nominatim;
pub mod open_meteo;
pub mod osrm;
pub mod route_client;
