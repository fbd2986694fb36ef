use std::{fmt::Display, future::Future, str::FromStr};

use jiff::SignedDuration;
use serde::{Deserialize, Serialize};

use crate::{
    domain::{coordinate::Coordinate, input_error::InputError, kilometers::Kilometers},
    status::weather_signal::WeatherSignal,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RoutingProfile {
    #[default]
    Car,
    /// Routers rarely ship a motorbike profile, adapters pick the closest one.
    Motorbike,
    Truck,
}

impl Display for RoutingProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                RoutingProfile::Car => "car",
                RoutingProfile::Motorbike => "motorbike",
                RoutingProfile::Truck => "truck",
            }
        )
    }
}

impl FromStr for RoutingProfile {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "car" => Ok(RoutingProfile::Car),
            "motorbike" | "motorbike-approx" => Ok(RoutingProfile::Motorbike),
            "truck" => Ok(RoutingProfile::Truck),
            _ => Err(InputError::UnknownLabel {
                kind: "routing profile",
                label: s.to_owned(),
            }),
        }
    }
}

/// A drivable route returned by a routing service.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RoadRoute {
    pub polyline: Vec<Coordinate>,
    pub distance_km: Kilometers,

    /// Free-flow travel time reported by the router
    pub duration: SignedDuration,
}

pub trait Geocoder {
    /// `Ok(None)` when the address is unknown.
    fn geocode(
        &self,
        address: &str,
    ) -> impl Future<Output = anyhow::Result<Option<Coordinate>>> + Send;
}

pub trait RouteSource {
    /// `Ok(None)` when the router found no route between the points.
    fn fetch_route(
        &self,
        origin: &Coordinate,
        destination: &Coordinate,
        profile: RoutingProfile,
    ) -> impl Future<Output = anyhow::Result<Option<RoadRoute>>> + Send;
}

pub trait WeatherSource {
    fn fetch_weather_signal(
        &self,
        location: &Coordinate,
    ) -> impl Future<Output = anyhow::Result<WeatherSignal>> + Send;
}

/// Stands in for a collaborator that is not configured.
pub struct Unavailable;

impl Geocoder for Unavailable {
    async fn geocode(&self, _address: &str) -> anyhow::Result<Option<Coordinate>> {
        Err(anyhow::anyhow!("No geocoder configured"))
    }
}

impl RouteSource for Unavailable {
    async fn fetch_route(
        &self,
        _origin: &Coordinate,
        _destination: &Coordinate,
        _profile: RoutingProfile,
    ) -> anyhow::Result<Option<RoadRoute>> {
        Err(anyhow::anyhow!("No router configured"))
    }
}

impl WeatherSource for Unavailable {
    async fn fetch_weather_signal(&self, _location: &Coordinate) -> anyhow::Result<WeatherSignal> {
        Err(anyhow::anyhow!("No weather source configured"))
    }
}
