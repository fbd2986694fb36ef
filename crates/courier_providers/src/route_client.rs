use courier_core::{
    domain::coordinate::Coordinate,
    planner::collaborators::{RoadRoute, RouteSource, RoutingProfile},
};
use serde::{Deserialize, Serialize};

use crate::{
    graphhopper_api::{GraphHopperRouteClient, GraphHopperRouteClientParams},
    osrm::{OsrmRouteClient, OsrmRouteClientParams},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RoutingProvider {
    /// Ignores the routing profile, always drives
    Osrm,
    GraphHopper,
}

pub struct RouteClient {
    provider: RoutingProvider,
    osrm_client: OsrmRouteClient,
    graphhopper_client: Option<GraphHopperRouteClient>,
}

impl RouteClient {
    pub fn new(
        provider: RoutingProvider,
        osrm_params: OsrmRouteClientParams,
        graphhopper_params: Option<GraphHopperRouteClientParams>,
    ) -> Self {
        Self {
            provider,
            osrm_client: OsrmRouteClient::new(osrm_params),
            graphhopper_client: graphhopper_params.map(GraphHopperRouteClient::new),
        }
    }

    /// GraphHopper is preferred when an API key is configured, it honours
    /// the vehicle profile.
    pub fn from_env() -> Self {
        let graphhopper_params = GraphHopperRouteClientParams::from_env();
        let provider = if graphhopper_params.is_some() {
            RoutingProvider::GraphHopper
        } else {
            RoutingProvider::Osrm
        };

        RouteClient::new(provider, OsrmRouteClientParams::from_env(), graphhopper_params)
    }

    pub fn provider(&self) -> RoutingProvider {
        self.provider
    }
}

impl Default for RouteClient {
    fn default() -> Self {
        RouteClient::from_env()
    }
}

impl RouteSource for RouteClient {
    async fn fetch_route(
        &self,
        origin: &Coordinate,
        destination: &Coordinate,
        profile: RoutingProfile,
    ) -> anyhow::Result<Option<RoadRoute>> {
        match (self.provider, &self.graphhopper_client) {
            (RoutingProvider::GraphHopper, Some(client)) => Ok(client
                .fetch_route(origin, destination, profile.into())
                .await?),
            (RoutingProvider::GraphHopper, None) => Err(anyhow::anyhow!(
                "GraphHopper routing requires an API key"
            )),
            (RoutingProvider::Osrm, _) => {
                Ok(self.osrm_client.fetch_route(origin, destination).await?)
            }
        }
    }
}
