use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::{
    domain::{coordinate::Coordinate, input_error::InputError},
    planner::presets::find_preset,
};

/// One end of the route, as given by the user.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Endpoint {
    Address(String),
    Coordinates(Coordinate),
    Preset(String),
}

impl Endpoint {
    /// Reads free-form input: `lat,lon` pairs become coordinates, known
    /// preset names become presets, anything else is an address.
    pub fn from_input(input: &str) -> Result<Self, InputError> {
        let input = input.trim();

        if let Some(name) = input.strip_prefix("preset:") {
            return Ok(Endpoint::Preset(name.trim().to_owned()));
        }

        if looks_like_coordinates(input) {
            return parse_coordinate(input).map(Endpoint::Coordinates);
        }

        if find_preset(input).is_some() {
            return Ok(Endpoint::Preset(input.to_owned()));
        }

        Ok(Endpoint::Address(input.to_owned()))
    }
}

impl Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Endpoint::Address(address) => write!(f, "{address}"),
            Endpoint::Coordinates(coordinate) => write!(f, "{coordinate}"),
            Endpoint::Preset(name) => write!(f, "preset:{name}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EndpointRole {
    Origin,
    Destination,
}

impl Display for EndpointRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EndpointRole::Origin => write!(f, "origin"),
            EndpointRole::Destination => write!(f, "destination"),
        }
    }
}

fn looks_like_coordinates(input: &str) -> bool {
    !input.is_empty()
        && input.contains(',')
        && input
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '.' | ',' | '-' | '+' | ' '))
}

pub fn parse_coordinate(input: &str) -> Result<Coordinate, InputError> {
    let invalid = || InputError::InvalidCoordinate(input.to_owned());

    let (lat, lon) = input.split_once(',').ok_or_else(invalid)?;
    let lat: f64 = lat.trim().parse().map_err(|_| invalid())?;
    let lon: f64 = lon.trim().parse().map_err(|_| invalid())?;

    if !lat.is_finite() || !lon.is_finite() {
        return Err(invalid());
    }

    Ok(Coordinate::new(lat, lon))
}
