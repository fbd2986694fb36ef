use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use courier_core::{
    domain::{drone_limit::DroneLimit, route_status::RouteStatus, shipment::ShipmentSpec},
    planner::{
        collaborators::RoutingProfile,
        endpoint::Endpoint,
        plan::{Plan, PlanRequest, StatusSource},
    },
    render::plan_features,
};
use geojson::FeatureCollection;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::recommend::recommend_handler::StatusBody;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct PlanRequestBody {
    /// Address, "lat,lon" or preset name
    origin: String,
    destination: String,
    size: String,
    urgency: String,

    /// Live weather is used when absent
    status: Option<StatusBody>,
    drone_limit_km: Option<f64>,
    profile: Option<String>,
}

impl TryFrom<&PlanRequestBody> for PlanRequest {
    type Error = ApiError;

    fn try_from(body: &PlanRequestBody) -> Result<Self, Self::Error> {
        let status = match &body.status {
            Some(status) => StatusSource::Manual {
                status: RouteStatus::try_from(status)?,
            },
            None => StatusSource::Live,
        };

        Ok(PlanRequest {
            origin: Endpoint::from_input(&body.origin)?,
            destination: Endpoint::from_input(&body.destination)?,
            status,
            shipment: ShipmentSpec::from_labels(&body.size, &body.urgency)?,
            drone_limit: match body.drone_limit_km {
                Some(km) => DroneLimit::new(km)?,
                None => DroneLimit::default(),
            },
            routing: body
                .profile
                .as_deref()
                .map(str::parse::<RoutingProfile>)
                .transpose()?,
        })
    }
}

#[derive(Serialize)]
pub struct PlanResponse {
    plan: Plan,
    route: FeatureCollection,
}

impl IntoResponse for PlanResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

pub async fn plan_handler(
    State(state): State<Arc<AppState>>,
    Json(body): Json<PlanRequestBody>,
) -> Result<PlanResponse, ApiError> {
    let request = PlanRequest::try_from(&body)?;
    let plan = state.planner.plan(&request).await?;

    Ok(PlanResponse {
        route: plan_features(&plan),
        plan,
    })
}
