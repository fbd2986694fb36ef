use clap::Args;
use courier_core::{
    domain::coordinate::Coordinate,
    planner::{
        conditions::{LiveConditions, live_conditions},
        endpoint::Endpoint,
        presets::find_preset,
    },
};
use courier_providers::{env, open_meteo::OpenMeteoClient};
use serde::Serialize;

use crate::{output, parsers};

#[derive(Args)]
pub struct StatusArgs {
    /// Location as "lat,lon" or a preset name
    #[arg(short, long, value_parser = parsers::parse_endpoint)]
    at: Endpoint,

    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
pub struct StatusOutput {
    pub location: Coordinate,
    #[serde(flatten)]
    pub conditions: LiveConditions,
}

pub async fn run(args: StatusArgs) -> anyhow::Result<()> {
    let location = match &args.at {
        Endpoint::Coordinates(coordinate) => *coordinate,
        Endpoint::Preset(name) | Endpoint::Address(name) => find_preset(name)
            .map(|preset| preset.coordinate)
            .ok_or_else(|| anyhow::anyhow!("Unknown location {name:?}"))?,
    };

    let client = OpenMeteoClient::default();
    let conditions = live_conditions(&client, &location, env::timeout()).await;
    let output = StatusOutput {
        location,
        conditions,
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        output::print_status(&output);
    }

    Ok(())
}
