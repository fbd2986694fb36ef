use serde::{Deserialize, Serialize};

use crate::{
    domain::{
        coordinate::Coordinate, drone_limit::DroneLimit, kilometers::Kilometers, kmh::Kmh,
        route_metrics::RouteMetrics, route_status::RouteStatus, shipment::ShipmentSpec,
    },
    planner::{collaborators::RoutingProfile, endpoint::Endpoint},
    recommend::recommendation::Recommendation,
};

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case", tag = "source")]
pub enum StatusSource {
    Manual { status: RouteStatus },
    Live,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PlanRequest {
    pub origin: Endpoint,
    pub destination: Endpoint,
    pub status: StatusSource,
    pub shipment: ShipmentSpec,

    #[serde(default)]
    pub drone_limit: DroneLimit,

    /// Road routing is skipped when absent.
    #[serde(default)]
    pub routing: Option<RoutingProfile>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusOrigin {
    Manual,
    Live,
    Fallback,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteKind {
    Road,
    StraightLine,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteGeometry {
    pub kind: RouteKind,
    pub points: Vec<Coordinate>,
}

impl RouteGeometry {
    pub fn straight_line(origin: Coordinate, destination: Coordinate) -> Self {
        Self {
            kind: RouteKind::StraightLine,
            points: vec![origin, destination],
        }
    }

    pub fn middle(&self) -> Option<Coordinate> {
        match self.points.as_slice() {
            [] => None,
            [origin, destination] => Some(origin.midpoint(destination)),
            points => Some(points[points.len() / 2]),
        }
    }
}

/// A degraded answer that was substituted for a failed collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum Fallback {
    /// Live weather could not be fetched, the default status was used.
    WeatherUnavailable { reason: String },

    /// No road route, the straight line was used.
    RoutingUnavailable { reason: String },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Plan {
    pub origin: Coordinate,
    pub destination: Coordinate,
    pub shipment: ShipmentSpec,
    pub status: RouteStatus,
    pub status_origin: StatusOrigin,
    pub speed_kmh: Kmh,

    /// Haversine distance, the one drone eligibility is decided on
    pub straight_line_km: Kilometers,

    pub metrics: RouteMetrics,
    pub geometry: RouteGeometry,
    pub drone_allowed: bool,
    pub recommendation: Recommendation,
    pub fallbacks: Vec<Fallback>,
}

impl Plan {
    pub fn is_estimate(&self) -> bool {
        !self.fallbacks.is_empty()
    }
}
