use std::time::Duration;

use thiserror::Error;
use tracing::{info, warn};

use crate::{
    domain::coordinate::Coordinate,
    estimate::{distance::distance_km, speed::status_speed},
    planner::{
        collaborators::{Geocoder, RoadRoute, RouteSource, RoutingProfile, WeatherSource},
        compose::compose_metrics,
        conditions::live_conditions,
        endpoint::{Endpoint, EndpointRole},
        plan::{Fallback, Plan, PlanRequest, RouteGeometry, RouteKind, StatusOrigin, StatusSource},
        presets::find_preset,
    },
    recommend::vehicle_recommender::{drone_allowed, recommend},
    timer_debug,
};

#[derive(Debug, Error, Clone, PartialEq)]
pub enum PlanError {
    #[error("Cannot resolve {role}: {reason}")]
    UnresolvedEndpoint { role: EndpointRole, reason: String },
}

#[derive(Debug, Clone)]
pub struct PlannerParams {
    /// Applied to every collaborator call
    pub timeout: Duration,
}

impl Default for PlannerParams {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(8),
        }
    }
}

/// Resolves endpoints, gathers conditions and a route, then asks the
/// recommender. Every collaborator failure other than endpoint resolution
/// is replaced by a documented fallback and reported on the plan.
pub struct Planner<G, R, W> {
    geocoder: G,
    router: R,
    weather: W,
    params: PlannerParams,
}

impl<G, R, W> Planner<G, R, W>
where
    G: Geocoder + Sync,
    R: RouteSource + Sync,
    W: WeatherSource + Sync,
{
    pub fn new(geocoder: G, router: R, weather: W, params: PlannerParams) -> Self {
        Self {
            geocoder,
            router,
            weather,
            params,
        }
    }

    pub async fn plan(&self, request: &PlanRequest) -> Result<Plan, PlanError> {
        let origin = self
            .resolve(&request.origin, EndpointRole::Origin)
            .await?;
        let destination = self
            .resolve(&request.destination, EndpointRole::Destination)
            .await?;

        let mut fallbacks = Vec::new();

        let straight_line_km = distance_km(&origin, &destination);

        let (status, status_origin) = match &request.status {
            StatusSource::Manual { status } => (*status, StatusOrigin::Manual),
            StatusSource::Live => {
                let midpoint = origin.midpoint(&destination);
                let conditions =
                    live_conditions(&self.weather, &midpoint, self.params.timeout).await;

                match conditions.fallback {
                    Some(fallback) => {
                        fallbacks.push(fallback);
                        (conditions.status, StatusOrigin::Fallback)
                    }
                    None => (conditions.status, StatusOrigin::Live),
                }
            }
        };

        let road = match request.routing {
            Some(profile) => match self.road_route(&origin, &destination, profile).await {
                Ok(road) => Some(road),
                Err(reason) => {
                    warn!("Routing unavailable ({}), using straight line", reason);
                    fallbacks.push(Fallback::RoutingUnavailable { reason });
                    None
                }
            },
            None => None,
        };

        let metrics = compose_metrics(straight_line_km, &status, road.as_ref());

        let geometry = match road {
            Some(road) => RouteGeometry {
                kind: RouteKind::Road,
                points: road.polyline,
            },
            None => RouteGeometry::straight_line(origin, destination),
        };

        let drone_limit = request.drone_limit.kilometers();
        let recommendation = recommend(
            &request.shipment,
            &status,
            Some(straight_line_km),
            drone_limit,
        );

        info!(
            "Recommended [{}] for {} / {} over {} ({} min), {}",
            recommendation,
            request.shipment.size,
            request.shipment.urgency,
            metrics.distance_km,
            metrics.estimated_minutes,
            status
        );

        Ok(Plan {
            origin,
            destination,
            shipment: request.shipment,
            status,
            status_origin,
            speed_kmh: status_speed(&status),
            straight_line_km,
            metrics,
            geometry,
            drone_allowed: drone_allowed(&status, Some(straight_line_km), drone_limit),
            recommendation,
            fallbacks,
        })
    }

    async fn resolve(&self, endpoint: &Endpoint, role: EndpointRole) -> Result<Coordinate, PlanError> {
        let unresolved = |reason: String| PlanError::UnresolvedEndpoint { role, reason };

        match endpoint {
            Endpoint::Coordinates(coordinate) => Ok(*coordinate),
            Endpoint::Preset(name) => find_preset(name)
                .map(|preset| preset.coordinate)
                .ok_or_else(|| unresolved(format!("unknown preset {name:?}"))),
            Endpoint::Address(address) if address.trim().is_empty() => {
                Err(unresolved(String::from("missing address")))
            }
            Endpoint::Address(address) => {
                let result = timer_debug!(
                    "Geocode",
                    tokio::time::timeout(self.params.timeout, self.geocoder.geocode(address)).await
                );

                match result {
                    Ok(Ok(Some(coordinate))) => Ok(coordinate),
                    Ok(Ok(None)) => Err(unresolved(format!("address {address:?} not found"))),
                    Ok(Err(err)) => Err(unresolved(err.to_string())),
                    Err(_) => Err(unresolved(self.timed_out("geocoder"))),
                }
            }
        }
    }

    async fn road_route(
        &self,
        origin: &Coordinate,
        destination: &Coordinate,
        profile: RoutingProfile,
    ) -> Result<RoadRoute, String> {
        let result = timer_debug!(
            "Route",
            tokio::time::timeout(
                self.params.timeout,
                self.router.fetch_route(origin, destination, profile)
            )
            .await
        );

        match result {
            Ok(Ok(Some(road))) if road.polyline.len() >= 2 => Ok(road),
            Ok(Ok(_)) => Err(String::from("no route found")),
            Ok(Err(err)) => Err(err.to_string()),
            Err(_) => Err(self.timed_out("router")),
        }
    }

    fn timed_out(&self, collaborator: &str) -> String {
        format!("{collaborator} timed out after {:?}", self.params.timeout)
    }
}
