use courier_core::planner::planner::Planner;
use courier_providers::{
    nominatim::NominatimClient, open_meteo::OpenMeteoClient, route_client::RouteClient,
};

pub struct AppState {
    pub planner: Planner<NominatimClient, RouteClient, OpenMeteoClient>,
}
