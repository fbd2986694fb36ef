use std::fmt::Display;

use courier_core::{
    domain::{coordinate::Coordinate, kilometers::Kilometers},
    planner::collaborators::{RoadRoute, RoutingProfile},
};
use jiff::SignedDuration;
use reqwest::header::USER_AGENT;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::env::{GRAPHHOPPER_API_KEY_ENV_VAR, user_agent};

#[derive(Deserialize, Serialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum GraphHopperProfile {
    Car,
    Scooter,
    Truck,
}

impl Display for GraphHopperProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                GraphHopperProfile::Car => "car",
                GraphHopperProfile::Scooter => "scooter",
                GraphHopperProfile::Truck => "truck",
            }
        )
    }
}

impl From<RoutingProfile> for GraphHopperProfile {
    fn from(profile: RoutingProfile) -> Self {
        match profile {
            RoutingProfile::Car => GraphHopperProfile::Car,
            // Closest thing to a motorbike GraphHopper offers
            RoutingProfile::Motorbike => GraphHopperProfile::Scooter,
            RoutingProfile::Truck => GraphHopperProfile::Truck,
        }
    }
}

#[derive(Debug, Error)]
pub enum GraphHopperError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Deserialization error: {0}")]
    Deserialize(#[from] serde_json::Error),
}

#[derive(Deserialize)]
struct RouteResponse {
    #[serde(default)]
    paths: Vec<RoutePath>,
}

#[derive(Deserialize)]
struct RoutePath {
    /// Meters
    distance: f64,

    /// Milliseconds
    time: f64,

    points: RoutePoints,
}

#[derive(Deserialize)]
struct RoutePoints {
    /// [lon, lat], only present with `points_encoded=false`
    coordinates: Vec<[f64; 2]>,
}

pub struct GraphHopperRouteClientParams {
    pub api_key: String,
    pub user_agent: String,
}

impl GraphHopperRouteClientParams {
    /// `None` when no API key is configured.
    pub fn from_env() -> Option<Self> {
        std::env::var(GRAPHHOPPER_API_KEY_ENV_VAR)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .map(|api_key| Self {
                api_key,
                user_agent: user_agent(),
            })
    }
}

pub const GRAPHHOPPER_ROUTE_API_URL: &str = "https://graphhopper.com/api/1/route";

pub struct GraphHopperRouteClient {
    params: GraphHopperRouteClientParams,
    client: reqwest::Client,
}

impl GraphHopperRouteClient {
    pub fn new(params: GraphHopperRouteClientParams) -> Self {
        Self {
            params,
            client: reqwest::Client::new(),
        }
    }

    pub async fn fetch_route(
        &self,
        origin: &Coordinate,
        destination: &Coordinate,
        profile: GraphHopperProfile,
    ) -> Result<Option<RoadRoute>, GraphHopperError> {
        debug!(
            "GraphHopperApi: Fetching {} route {} -> {}",
            profile, origin, destination
        );

        let response = self
            .route_request(origin, destination, profile)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(GraphHopperError::Api { status, message });
        }

        let body = response.text().await?;
        parse_route_response(&body)
    }

    fn route_request(
        &self,
        origin: &Coordinate,
        destination: &Coordinate,
        profile: GraphHopperProfile,
    ) -> reqwest::RequestBuilder {
        self.client
            .get(GRAPHHOPPER_ROUTE_API_URL)
            .header(USER_AGENT, &self.params.user_agent)
            .query(&[
                ("point", origin.to_string()),
                ("point", destination.to_string()),
                ("profile", profile.to_string()),
                ("points_encoded", String::from("false")),
                ("instructions", String::from("false")),
                ("key", self.params.api_key.clone()),
            ])
    }
}

fn parse_route_response(body: &str) -> Result<Option<RoadRoute>, GraphHopperError> {
    let response: RouteResponse = serde_json::from_str(body)?;

    let Some(path) = response.paths.into_iter().next() else {
        return Ok(None);
    };

    let polyline = path
        .points
        .coordinates
        .into_iter()
        .map(|[lon, lat]| Coordinate::new(lat, lon))
        .collect();

    Ok(Some(RoadRoute {
        polyline,
        distance_km: Kilometers::from_meters(path.distance),
        duration: SignedDuration::from_millis(path.time as i64),
    }))
}
