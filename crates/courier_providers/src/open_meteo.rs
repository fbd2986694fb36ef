use courier_core::{
    domain::coordinate::Coordinate, planner::collaborators::WeatherSource,
    status::weather_signal::WeatherSignal,
};
use jiff::civil::DateTime;
use reqwest::header::USER_AGENT;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::env::{OPEN_METEO_URL_ENV_VAR, trim_base_url, user_agent, var_or};

#[derive(Debug, Error)]
pub enum OpenMeteoError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Deserialization error: {0}")]
    Deserialize(#[from] serde_json::Error),

    #[error("Invalid local time {0:?}")]
    InvalidTime(String),

    #[error("Incomplete response")]
    IncompleteResponse,
}

#[derive(Deserialize)]
struct ForecastResponse {
    timezone: String,
    current: CurrentWeather,
    hourly: HourlyWeather,
}

#[derive(Deserialize)]
struct CurrentWeather {
    /// Local time, e.g. "2026-10-19T08:15"
    time: String,
    weather_code: i32,

    /// km/h, the API default
    wind_speed_10m: f64,
}

#[derive(Deserialize)]
struct HourlyWeather {
    time: Vec<String>,

    /// mm, null for hours without data
    precipitation: Vec<Option<f64>>,
}

pub struct OpenMeteoClientParams {
    pub base_url: String,
    pub user_agent: String,
}

impl OpenMeteoClientParams {
    pub fn from_env() -> Self {
        Self {
            base_url: trim_base_url(var_or(OPEN_METEO_URL_ENV_VAR, "https://api.open-meteo.com")),
            user_agent: user_agent(),
        }
    }
}

pub const OPEN_METEO_FORECAST_API_PATH: &str = "/v1/forecast";

/// Hours of precipitation summed for flood detection
pub const PRECIPITATION_WINDOW_HOURS: usize = 24;

pub struct OpenMeteoClient {
    params: OpenMeteoClientParams,
    client: reqwest::Client,
}

impl OpenMeteoClient {
    pub fn new(params: OpenMeteoClientParams) -> Self {
        Self {
            params,
            client: reqwest::Client::new(),
        }
    }

    pub async fn fetch_signal(&self, location: &Coordinate) -> Result<WeatherSignal, OpenMeteoError> {
        let url = format!("{}{}", self.params.base_url, OPEN_METEO_FORECAST_API_PATH);

        debug!("OpenMeteo: Fetching weather at {}", location);

        let response = self
            .client
            .get(url)
            .header(USER_AGENT, &self.params.user_agent)
            .query(&[
                ("latitude", location.lat().to_string()),
                ("longitude", location.lon().to_string()),
                ("current", String::from("weather_code,wind_speed_10m")),
                ("hourly", String::from("precipitation")),
                ("past_days", String::from("1")),
                ("forecast_days", String::from("1")),
                ("timezone", String::from("auto")),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(OpenMeteoError::Api { status, message });
        }

        let body = response.text().await?;
        parse_forecast_response(&body, *location)
    }
}

impl Default for OpenMeteoClient {
    fn default() -> Self {
        OpenMeteoClient::new(OpenMeteoClientParams::from_env())
    }
}

fn parse_local_time(value: &str) -> Result<DateTime, OpenMeteoError> {
    value
        .parse::<DateTime>()
        .map_err(|_| OpenMeteoError::InvalidTime(value.to_owned()))
}

/// Keeps the hourly values up to and including the current hour, at most
/// a day's worth.
fn past_precipitation(
    hourly: HourlyWeather,
    now: DateTime,
) -> Result<Vec<f64>, OpenMeteoError> {
    if hourly.time.len() != hourly.precipitation.len() {
        return Err(OpenMeteoError::IncompleteResponse);
    }

    let mut past = Vec::with_capacity(hourly.time.len());
    for (time, precipitation) in hourly.time.iter().zip(hourly.precipitation) {
        if parse_local_time(time)? <= now {
            past.push(precipitation.unwrap_or(0.0));
        }
    }

    let skip = past.len().saturating_sub(PRECIPITATION_WINDOW_HOURS);
    Ok(past.split_off(skip))
}

fn parse_forecast_response(
    body: &str,
    location: Coordinate,
) -> Result<WeatherSignal, OpenMeteoError> {
    let response: ForecastResponse = serde_json::from_str(body)?;

    let now = parse_local_time(&response.current.time)?;
    let hourly_precipitation_mm = past_precipitation(response.hourly, now)?;

    Ok(WeatherSignal {
        location,
        weather_code: response.current.weather_code,
        wind_speed_kmh: response.current.wind_speed_10m,
        hourly_precipitation_mm,
        local_hour: now.hour() as u8,
        weekday: now.weekday(),
        timezone: response.timezone,
    })
}

impl WeatherSource for OpenMeteoClient {
    async fn fetch_weather_signal(&self, location: &Coordinate) -> anyhow::Result<WeatherSignal> {
        Ok(self.fetch_signal(location).await?)
    }
}
