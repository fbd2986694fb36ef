use std::time::Duration;

use serde::Serialize;
use tracing::warn;

use crate::{
    domain::{coordinate::Coordinate, route_status::RouteStatus},
    planner::{collaborators::WeatherSource, plan::Fallback},
    status::{status_inference::infer_status, weather_signal::WeatherSignal},
    timer_debug,
};

/// Conditions at one location, possibly the default status when the
/// weather source failed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LiveConditions {
    pub signal: Option<WeatherSignal>,
    pub status: RouteStatus,
    pub fallback: Option<Fallback>,
}

/// Fetches a weather signal within `timeout` and infers the status from it.
/// Any failure yields `RouteStatus::FALLBACK` and is logged.
pub async fn live_conditions<W>(
    weather: &W,
    location: &Coordinate,
    timeout: Duration,
) -> LiveConditions
where
    W: WeatherSource + Sync,
{
    let result = timer_debug!(
        "Weather",
        tokio::time::timeout(timeout, weather.fetch_weather_signal(location)).await
    );

    let reason = match result {
        Ok(Ok(signal)) => {
            return LiveConditions {
                status: infer_status(&signal),
                signal: Some(signal),
                fallback: None,
            };
        }
        Ok(Err(err)) => err.to_string(),
        Err(_) => format!("weather source timed out after {timeout:?}"),
    };

    warn!(
        "Weather unavailable ({}), using default status {}",
        reason,
        RouteStatus::FALLBACK
    );

    LiveConditions {
        signal: None,
        status: RouteStatus::FALLBACK,
        fallback: Some(Fallback::WeatherUnavailable { reason }),
    }
}
