use std::{fs::File, io::BufWriter, io::Write, path::PathBuf};

use clap::Args;
use courier_core::{
    domain::{
        drone_limit::DroneLimit,
        route_status::{Flood, RouteStatus, Traffic, Weather},
        shipment::{ShipmentSize, ShipmentSpec, Urgency},
    },
    planner::{
        collaborators::RoutingProfile,
        endpoint::Endpoint,
        plan::{PlanRequest, StatusSource},
        planner::{Planner, PlannerParams},
    },
    render::plan_features,
};
use courier_providers::{
    env, nominatim::NominatimClient, open_meteo::OpenMeteoClient, route_client::RouteClient,
};
use tracing::info;

use crate::{output, parsers};

#[derive(Args)]
pub struct PlanArgs {
    /// Origin: address, "lat,lon" or preset name
    #[arg(short, long, value_parser = parsers::parse_endpoint)]
    from: Endpoint,

    /// Destination: address, "lat,lon" or preset name
    #[arg(short, long, value_parser = parsers::parse_endpoint)]
    to: Endpoint,

    #[arg(short, long, value_parser = parsers::parse_size)]
    size: ShipmentSize,

    #[arg(short, long, value_parser = parsers::parse_urgency)]
    urgency: Urgency,

    /// Manual conditions, all three or none. Inferred from live weather when omitted
    #[arg(long, requires_all = ["weather", "flood"])]
    traffic: Option<Traffic>,

    #[arg(long, requires_all = ["traffic", "flood"])]
    weather: Option<Weather>,

    #[arg(long, requires_all = ["traffic", "weather"])]
    flood: Option<Flood>,

    /// Maximum drone distance in km (1-30)
    #[arg(long, value_parser = parsers::parse_drone_limit, default_value = "10")]
    drone_limit: DroneLimit,

    /// Draw a road route with this profile (car, motorbike, truck)
    #[arg(long)]
    profile: Option<RoutingProfile>,

    /// Write the route as GeoJSON to this file
    #[arg(long)]
    geojson: Option<PathBuf>,

    #[arg(long)]
    json: bool,
}

fn status_source(args: &PlanArgs) -> StatusSource {
    match (args.traffic, args.weather, args.flood) {
        (Some(traffic), Some(weather), Some(flood)) => StatusSource::Manual {
            status: RouteStatus::new(traffic, weather, flood),
        },
        _ => StatusSource::Live,
    }
}

pub async fn run(args: PlanArgs) -> anyhow::Result<()> {
    let request = PlanRequest {
        origin: args.from.clone(),
        destination: args.to.clone(),
        status: status_source(&args),
        shipment: ShipmentSpec::new(args.size, args.urgency),
        drone_limit: args.drone_limit,
        routing: args.profile,
    };

    let planner = Planner::new(
        NominatimClient::default(),
        RouteClient::from_env(),
        OpenMeteoClient::default(),
        PlannerParams {
            timeout: env::timeout(),
        },
    );

    let plan = planner.plan(&request).await?;

    if let Some(path) = &args.geojson {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, &plan_features(&plan))?;
        writer.flush()?;

        info!("Route written to {:?}", path);
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
    } else {
        output::print_plan(&plan);
    }

    Ok(())
}
