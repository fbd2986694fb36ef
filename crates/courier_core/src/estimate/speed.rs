use crate::domain::{
    kmh::Kmh,
    route_status::{Flood, RouteStatus, Traffic, Weather},
};

pub const BASELINE_SPEED: Kmh = Kmh::new(35.0);
pub const MINIMUM_SPEED: Kmh = Kmh::new(8.0);

fn traffic_factor(traffic: Traffic) -> f64 {
    match traffic {
        Traffic::Low => 1.0,
        Traffic::Medium => 0.8,
        Traffic::High => 0.6,
    }
}

fn weather_factor(weather: Weather) -> f64 {
    match weather {
        Weather::Clear => 1.0,
        Weather::Rain => 0.85,
        Weather::Storm => 0.6,
    }
}

fn flood_factor(flood: Flood) -> f64 {
    match flood {
        Flood::None => 1.0,
        Flood::Local => 0.85,
        Flood::Widespread => 0.5,
    }
}

/// Expected average urban speed under the given conditions, never below
/// [`MINIMUM_SPEED`].
pub fn speed_kmh(traffic: Traffic, weather: Weather, flood: Flood) -> Kmh {
    let speed = BASELINE_SPEED.value()
        * traffic_factor(traffic)
        * weather_factor(weather)
        * flood_factor(flood);

    Kmh::new(speed.max(MINIMUM_SPEED.value()))
}

pub fn status_speed(status: &RouteStatus) -> Kmh {
    speed_kmh(status.traffic, status.weather, status.flood)
}
