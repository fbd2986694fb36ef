use courier_core::{domain::coordinate::Coordinate, planner::collaborators::Geocoder};
use reqwest::header::USER_AGENT;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::env::{NOMINATIM_URL_ENV_VAR, trim_base_url, user_agent, var_or};

#[derive(Debug, Error)]
pub enum NominatimError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Deserialization error: {0}")]
    Deserialize(#[from] serde_json::Error),

    #[error("Invalid coordinate in response: {0:?}")]
    InvalidCoordinate(String),
}

#[derive(Deserialize)]
struct NominatimPlace {
    /// Nominatim sends coordinates as strings
    lat: String,
    lon: String,
}

pub struct NominatimClientParams {
    pub base_url: String,
    pub user_agent: String,
}

impl NominatimClientParams {
    pub fn from_env() -> Self {
        Self {
            base_url: trim_base_url(var_or(
                NOMINATIM_URL_ENV_VAR,
                "https://nominatim.openstreetmap.org",
            )),
            user_agent: user_agent(),
        }
    }
}

pub const NOMINATIM_SEARCH_API_PATH: &str = "/search";

pub struct NominatimClient {
    params: NominatimClientParams,
    client: reqwest::Client,
}

impl NominatimClient {
    pub fn new(params: NominatimClientParams) -> Self {
        Self {
            params,
            client: reqwest::Client::new(),
        }
    }

    pub async fn search(&self, address: &str) -> Result<Option<Coordinate>, NominatimError> {
        let url = format!("{}{}", self.params.base_url, NOMINATIM_SEARCH_API_PATH);

        debug!("Nominatim: Searching {:?}", address);

        let response = self
            .client
            .get(url)
            .header(USER_AGENT, &self.params.user_agent)
            .query(&[("q", address), ("format", "json"), ("limit", "1")])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(NominatimError::Api { status, message });
        }

        let body = response.text().await?;
        parse_search_response(&body)
    }
}

impl Default for NominatimClient {
    fn default() -> Self {
        NominatimClient::new(NominatimClientParams::from_env())
    }
}

fn parse_search_response(body: &str) -> Result<Option<Coordinate>, NominatimError> {
    let places: Vec<NominatimPlace> = serde_json::from_str(body)?;

    let Some(place) = places.into_iter().next() else {
        return Ok(None);
    };

    let lat: f64 = place
        .lat
        .parse()
        .map_err(|_| NominatimError::InvalidCoordinate(place.lat.clone()))?;
    let lon: f64 = place
        .lon
        .parse()
        .map_err(|_| NominatimError::InvalidCoordinate(place.lon.clone()))?;

    Ok(Some(Coordinate::new(lat, lon)))
}

impl Geocoder for NominatimClient {
    async fn geocode(&self, address: &str) -> anyhow::Result<Option<Coordinate>> {
        Ok(self.search(address).await?)
    }
}
