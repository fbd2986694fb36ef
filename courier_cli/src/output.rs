use comfy_table::Table;
use courier_core::{
    domain::kmh::Kmh,
    planner::{
        plan::{Fallback, Plan, RouteKind, StatusOrigin},
        presets::PRESETS,
    },
};

use crate::{recommend::RecommendOutput, status::StatusOutput};

pub fn print_recommendation(result: &RecommendOutput, speed: Kmh) {
    let mut table = Table::new();
    table.set_header(vec!["Field", "Value"]);

    table.add_row(vec![
        String::from("Shipment"),
        format!("{} / {}", result.shipment.size, result.shipment.urgency),
    ]);
    table.add_row(vec![String::from("Conditions"), result.status.to_string()]);
    table.add_row(vec![
        String::from("Average speed"),
        format!("{:.1} km/h", speed.value()),
    ]);

    match (result.distance_km, result.estimated_minutes) {
        (Some(distance), Some(minutes)) => {
            table.add_row(vec![
                String::from("Distance"),
                format!("~{distance} (straight line)"),
            ]);
            table.add_row(vec![String::from("Time"), format!("~{minutes} min")]);
        }
        _ => {
            table.add_row(vec![String::from("Distance"), String::from("unknown")]);
        }
    }

    table.add_row(vec![
        String::from("Drone"),
        String::from(if result.drone_allowed {
            "allowed"
        } else {
            "not allowed"
        }),
    ]);
    table.add_row(vec![
        String::from("Recommended"),
        result.recommendation.join(", "),
    ]);

    println!("{table}");
}

pub fn print_status(output: &StatusOutput) {
    let mut table = Table::new();
    table.set_header(vec!["Field", "Value"]);

    table.add_row(vec![String::from("Location"), output.location.to_string()]);

    let conditions = &output.conditions;

    if let Some(signal) = &conditions.signal {
        table.add_row(vec![
            String::from("Local time"),
            format!(
                "{:?} {:02}h ({})",
                signal.weekday, signal.local_hour, signal.timezone
            ),
        ]);
        table.add_row(vec![
            String::from("Weather code"),
            signal.weather_code.to_string(),
        ]);
        table.add_row(vec![
            String::from("Wind"),
            format!("{:.1} km/h", signal.wind_speed_kmh),
        ]);
        table.add_row(vec![
            String::from("Precipitation (24h)"),
            format!("{:.1} mm", signal.hourly_precipitation_mm.iter().sum::<f64>()),
        ]);
    }

    if let Some(Fallback::WeatherUnavailable { reason }) = &conditions.fallback {
        table.add_row(vec![
            String::from("Weather unavailable"),
            format!("{reason}, default used"),
        ]);
    }

    table.add_row(vec![String::from("Status"), conditions.status.to_string()]);

    println!("{table}");
}

pub fn print_plan(plan: &Plan) {
    let mut table = Table::new();
    table.set_header(vec!["Field", "Value"]);

    table.add_row(vec![
        String::from("Route"),
        format!("{} -> {}", plan.origin, plan.destination),
    ]);
    table.add_row(vec![
        String::from("Shipment"),
        format!("{} / {}", plan.shipment.size, plan.shipment.urgency),
    ]);
    table.add_row(vec![
        String::from("Conditions"),
        format!(
            "{} ({})",
            plan.status,
            match plan.status_origin {
                StatusOrigin::Manual => "manual",
                StatusOrigin::Live => "live weather",
                StatusOrigin::Fallback => "default",
            }
        ),
    ]);
    table.add_row(vec![
        String::from("Distance"),
        format!(
            "~{} ({}), straight line {}",
            plan.metrics.distance_km,
            match plan.geometry.kind {
                RouteKind::Road => "road",
                RouteKind::StraightLine => "straight line",
            },
            plan.straight_line_km
        ),
    ]);
    table.add_row(vec![
        String::from("Time"),
        format!(
            "~{} min at {:.1} km/h",
            plan.metrics.estimated_minutes,
            plan.speed_kmh.value()
        ),
    ]);
    table.add_row(vec![
        String::from("Recommended"),
        plan.recommendation.to_string(),
    ]);

    for fallback in &plan.fallbacks {
        let (what, reason) = match fallback {
            Fallback::WeatherUnavailable { reason } => ("Weather unavailable", reason),
            Fallback::RoutingUnavailable { reason } => ("Routing unavailable", reason),
        };
        table.add_row(vec![String::from(what), reason.clone()]);
    }

    println!("{table}");

    if plan.is_estimate() {
        println!("Figures are estimates, some live data could not be fetched.");
    }
}

pub fn print_presets() {
    let mut table = Table::new();
    table.set_header(vec!["Name", "Latitude", "Longitude"]);

    for preset in &PRESETS {
        table.add_row(vec![
            preset.name.to_owned(),
            format!("{:.4}", preset.coordinate.lat()),
            format!("{:.4}", preset.coordinate.lon()),
        ]);
    }

    println!("{table}");
}
