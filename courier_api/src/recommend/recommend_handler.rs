use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use courier_core::{
    domain::{
        drone_limit::DroneLimit, kilometers::Kilometers, route_metrics::RouteMetrics,
        route_status::RouteStatus, shipment::ShipmentSpec,
    },
    planner::compose::compose_metrics,
    recommend::{
        recommendation::Recommendation,
        vehicle_recommender::{drone_allowed, recommend},
    },
};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

#[derive(Deserialize)]
pub struct StatusBody {
    pub traffic: String,
    pub weather: String,
    pub flood: String,
}

impl TryFrom<&StatusBody> for RouteStatus {
    type Error = ApiError;

    fn try_from(body: &StatusBody) -> Result<Self, Self::Error> {
        Ok(RouteStatus::new(
            body.traffic.parse()?,
            body.weather.parse()?,
            body.flood.parse()?,
        ))
    }
}

#[derive(Deserialize)]
pub struct RecommendRequestBody {
    /// Labels such as "Small (≤5kg)" are accepted
    size: String,
    urgency: String,
    status: StatusBody,
    distance_km: Option<f64>,
    drone_limit_km: Option<f64>,
}

#[derive(Serialize, Debug)]
pub struct RecommendResponse {
    status: RouteStatus,
    metrics: Option<RouteMetrics>,
    drone_allowed: bool,
    recommendation: Recommendation,
}

impl IntoResponse for RecommendResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

pub async fn recommend_handler(
    Json(body): Json<RecommendRequestBody>,
) -> Result<RecommendResponse, ApiError> {
    let shipment = ShipmentSpec::from_labels(&body.size, &body.urgency)?;
    let status = RouteStatus::try_from(&body.status)?;
    let drone_limit = match body.drone_limit_km {
        Some(km) => DroneLimit::new(km)?,
        None => DroneLimit::default(),
    };

    let distance = match body.distance_km {
        Some(km) if km.is_finite() && km >= 0.0 => Some(Kilometers::new(km)),
        Some(km) => return Err(ApiError::BadRequest(format!("Invalid distance {km}"))),
        None => None,
    };

    let limit = drone_limit.kilometers();

    Ok(RecommendResponse {
        status,
        metrics: distance.map(|distance| compose_metrics(distance, &status, None)),
        drone_allowed: drone_allowed(&status, distance, limit),
        recommendation: recommend(&shipment, &status, distance, limit),
    })
}
