use courier_core::{
    domain::{drone_limit::DroneLimit, shipment::ShipmentSize, shipment::Urgency},
    planner::endpoint::Endpoint,
};

pub fn parse_size(input: &str) -> Result<ShipmentSize, String> {
    ShipmentSize::from_label(input).map_err(|err| err.to_string())
}

pub fn parse_urgency(input: &str) -> Result<Urgency, String> {
    Urgency::from_label(input).map_err(|err| err.to_string())
}

pub fn parse_drone_limit(input: &str) -> Result<DroneLimit, String> {
    let km = input
        .trim()
        .trim_end_matches("km")
        .trim()
        .parse::<f64>()
        .map_err(|_| String::from("Invalid distance"))?;

    DroneLimit::new(km).map_err(|err| err.to_string())
}

pub fn parse_endpoint(input: &str) -> Result<Endpoint, String> {
    Endpoint::from_input(input).map_err(|err| err.to_string())
}
