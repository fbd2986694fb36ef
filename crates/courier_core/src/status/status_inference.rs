use jiff::civil::Weekday;
use tracing::debug;

use crate::{
    domain::route_status::{Flood, RouteStatus, Traffic, Weather},
    status::weather_signal::WeatherSignal,
};

const STORM_CODES: [i32; 3] = [95, 96, 99];
const STORM_WIND_KMH: f64 = 50.0;

const WIDESPREAD_FLOOD_MM: f64 = 100.0;
const LOCAL_FLOOD_MM: f64 = 30.0;

fn is_rain_code(code: i32) -> bool {
    (51..=67).contains(&code) || (80..=82).contains(&code)
}

/// Storm takes precedence over rain.
pub fn classify_weather(weather_code: i32, wind_speed_kmh: f64) -> Weather {
    if STORM_CODES.contains(&weather_code) || wind_speed_kmh >= STORM_WIND_KMH {
        Weather::Storm
    } else if is_rain_code(weather_code) {
        Weather::Rain
    } else {
        Weather::Clear
    }
}

pub fn total_precipitation(hourly_precipitation_mm: &[f64]) -> f64 {
    hourly_precipitation_mm
        .iter()
        .filter(|mm| mm.is_finite())
        .sum()
}

/// Thresholds are inclusive lower bounds.
pub fn classify_flood(precipitation_mm: f64) -> Flood {
    if precipitation_mm >= WIDESPREAD_FLOOD_MM {
        Flood::Widespread
    } else if precipitation_mm >= LOCAL_FLOOD_MM {
        Flood::Local
    } else {
        Flood::None
    }
}

fn is_rush_hour(local_hour: u8) -> bool {
    (7..=9).contains(&local_hour) || (17..=19).contains(&local_hour)
}

/// Traffic level expected from the calendar alone.
pub fn base_traffic(weekday: Weekday, local_hour: u8) -> Traffic {
    let is_workday = weekday.to_monday_zero_offset() <= 4;

    match (is_workday, is_rush_hour(local_hour)) {
        (true, true) => Traffic::High,
        (true, false) => Traffic::Medium,
        (false, _) => Traffic::Low,
    }
}

pub fn weather_bump(weather: Weather) -> usize {
    match weather {
        Weather::Clear => 0,
        Weather::Rain => 1,
        Weather::Storm => 2,
    }
}

/// Bad weather only ever makes traffic worse, saturating at `High`.
pub fn escalate_traffic(base: Traffic, weather: Weather) -> Traffic {
    Traffic::from_index(base.index() + weather_bump(weather))
}

pub fn infer_status(signal: &WeatherSignal) -> RouteStatus {
    let weather = classify_weather(signal.weather_code, signal.wind_speed_kmh);

    let precipitation = total_precipitation(&signal.hourly_precipitation_mm);
    let flood = classify_flood(precipitation);

    let base = base_traffic(signal.weekday, signal.local_hour);
    let traffic = escalate_traffic(base, weather);

    debug!(
        location = %signal.location,
        weather_code = signal.weather_code,
        wind_speed_kmh = signal.wind_speed_kmh,
        precipitation_mm = precipitation,
        timezone = %signal.timezone,
        "Inferred {:?}/{:?}/{:?} (base traffic {:?})",
        traffic,
        weather,
        flood,
        base
    );

    RouteStatus::new(traffic, weather, flood)
}
