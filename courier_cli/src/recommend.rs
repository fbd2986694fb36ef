use clap::Args;
use courier_core::{
    domain::{
        coordinate::Coordinate,
        drone_limit::DroneLimit,
        kilometers::Kilometers,
        route_status::{Flood, RouteStatus, Traffic, Weather},
        shipment::{ShipmentSize, ShipmentSpec, Urgency},
    },
    estimate::{distance::distance_km, speed::status_speed},
    planner::{compose::compose_metrics, endpoint::Endpoint, presets::find_preset},
    recommend::vehicle_recommender::{drone_allowed, recommend},
};
use serde::Serialize;

use crate::{output, parsers};

#[derive(Args)]
pub struct RecommendArgs {
    /// Shipment size, e.g. "Small (≤5kg)", "medium", "Bulky/Over"
    #[arg(short, long, value_parser = parsers::parse_size)]
    size: ShipmentSize,

    /// Urgency, e.g. "normal", "Critical (≤2h)"
    #[arg(short, long, value_parser = parsers::parse_urgency)]
    urgency: Urgency,

    #[arg(long, default_value = "medium")]
    traffic: Traffic,

    #[arg(long, default_value = "clear")]
    weather: Weather,

    #[arg(long, default_value = "none")]
    flood: Flood,

    /// Straight-line distance in km. Without it, or --from/--to, no drone is proposed
    #[arg(long, conflicts_with_all = ["from", "to"])]
    distance: Option<f64>,

    /// Origin as "lat,lon" or a preset name
    #[arg(long, requires = "to", value_parser = parsers::parse_endpoint)]
    from: Option<Endpoint>,

    /// Destination as "lat,lon" or a preset name
    #[arg(long, requires = "from", value_parser = parsers::parse_endpoint)]
    to: Option<Endpoint>,

    /// Maximum drone distance in km (1-30)
    #[arg(long, value_parser = parsers::parse_drone_limit, default_value = "10")]
    drone_limit: DroneLimit,

    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
pub struct RecommendOutput {
    pub shipment: ShipmentSpec,
    pub status: RouteStatus,
    pub distance_km: Option<Kilometers>,
    pub estimated_minutes: Option<u32>,
    pub drone_allowed: bool,
    pub recommendation: Vec<&'static str>,
}

/// Only coordinates and presets are accepted here, addresses need the
/// geocoder and therefore `plan`.
fn offline_coordinate(endpoint: &Endpoint) -> anyhow::Result<Coordinate> {
    match endpoint {
        Endpoint::Coordinates(coordinate) => Ok(*coordinate),
        Endpoint::Preset(name) | Endpoint::Address(name) => find_preset(name)
            .map(|preset| preset.coordinate)
            .ok_or_else(|| {
                anyhow::anyhow!("{name:?} is not a preset, use coordinates or the plan command")
            }),
    }
}

pub fn run(args: RecommendArgs) -> anyhow::Result<()> {
    let shipment = ShipmentSpec::new(args.size, args.urgency);
    let status = RouteStatus::new(args.traffic, args.weather, args.flood);

    let distance = match (&args.from, &args.to, args.distance) {
        (Some(from), Some(to), _) => Some(distance_km(
            &offline_coordinate(from)?,
            &offline_coordinate(to)?,
        )),
        (_, _, Some(km)) if km.is_finite() && km >= 0.0 => Some(Kilometers::new(km)),
        (_, _, Some(km)) => anyhow::bail!("Invalid distance {km}"),
        _ => None,
    };

    let limit = args.drone_limit.kilometers();
    let recommendation = recommend(&shipment, &status, distance, limit);
    let metrics = distance.map(|distance| compose_metrics(distance, &status, None));

    let result = RecommendOutput {
        shipment,
        status,
        distance_km: distance,
        estimated_minutes: metrics.map(|metrics| metrics.estimated_minutes),
        drone_allowed: drone_allowed(&status, distance, limit),
        recommendation: recommendation.labels(),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        output::print_recommendation(&result, status_speed(&status));
    }

    Ok(())
}
