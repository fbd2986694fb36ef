use courier_core::{
    domain::{coordinate::Coordinate, kilometers::Kilometers},
    planner::collaborators::RoadRoute,
};
use jiff::SignedDuration;
use reqwest::header::USER_AGENT;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::env::{OSRM_URL_ENV_VAR, trim_base_url, user_agent, var_or};

#[derive(Debug, Error)]
pub enum OsrmError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Deserialization error: {0}")]
    Deserialize(#[from] serde_json::Error),

    #[error("OSRM error: {code} - {message}")]
    Api { code: String, message: String },

    #[error("Incomplete response")]
    IncompleteResponse,
}

#[derive(Deserialize)]
struct OsrmRouteResponse {
    code: String,
    message: Option<String>,
    #[serde(default)]
    routes: Vec<OsrmRoute>,
}

#[derive(Deserialize)]
struct OsrmRoute {
    /// Meters
    distance: f64,

    /// Seconds
    duration: f64,

    geometry: OsrmGeometry,
}

#[derive(Deserialize)]
struct OsrmGeometry {
    /// GeoJSON order, [lon, lat]
    coordinates: Vec<[f64; 2]>,
}

pub struct OsrmRouteClientParams {
    pub osrm_url: String,
    pub user_agent: String,
}

impl OsrmRouteClientParams {
    pub fn from_env() -> Self {
        Self {
            osrm_url: trim_base_url(var_or(OSRM_URL_ENV_VAR, "https://router.project-osrm.org")),
            user_agent: user_agent(),
        }
    }
}

/// The public OSRM server only serves a driving profile.
pub const OSRM_ROUTE_API_PATH: &str = "/route/v1/driving/";

pub struct OsrmRouteClient {
    params: OsrmRouteClientParams,
    client: reqwest::Client,
}

impl OsrmRouteClient {
    pub fn new(params: OsrmRouteClientParams) -> Self {
        Self {
            params,
            client: reqwest::Client::new(),
        }
    }

    pub async fn fetch_route(
        &self,
        origin: &Coordinate,
        destination: &Coordinate,
    ) -> Result<Option<RoadRoute>, OsrmError> {
        let mut url = self.params.osrm_url.clone();
        url.push_str(OSRM_ROUTE_API_PATH);

        for (i, point) in [origin, destination].iter().enumerate() {
            url.push_str(&format!("{},{}", point.lon(), point.lat()));

            if i == 0 {
                url.push(';');
            }
        }

        debug!("OSRM: Fetching route {} -> {}", origin, destination);

        let response = self
            .client
            .get(url)
            .header(USER_AGENT, &self.params.user_agent)
            .query(&[("overview", "full"), ("geometries", "geojson")])
            .send()
            .await?;

        // OSRM reports routing failures with a 400 and a JSON body
        let body = response.text().await?;
        parse_route_response(&body)
    }
}

impl Default for OsrmRouteClient {
    fn default() -> Self {
        OsrmRouteClient::new(OsrmRouteClientParams::from_env())
    }
}

fn parse_route_response(body: &str) -> Result<Option<RoadRoute>, OsrmError> {
    let response: OsrmRouteResponse = serde_json::from_str(body)?;

    match response.code.as_str() {
        "Ok" => {}
        "NoRoute" | "NoSegment" => return Ok(None),
        _ => {
            return Err(OsrmError::Api {
                code: response.code,
                message: response.message.unwrap_or_default(),
            });
        }
    }

    let Some(route) = response.routes.into_iter().next() else {
        return Ok(None);
    };

    if route.geometry.coordinates.is_empty() {
        return Err(OsrmError::IncompleteResponse);
    }

    let polyline = route
        .geometry
        .coordinates
        .into_iter()
        .map(|[lon, lat]| Coordinate::new(lat, lon))
        .collect();

    Ok(Some(RoadRoute {
        polyline,
        distance_km: Kilometers::from_meters(route.distance),
        duration: SignedDuration::from_secs_f64(route.duration),
    }))
}
