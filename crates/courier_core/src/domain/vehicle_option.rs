use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::domain::input_error::InputError;

/// The fixed vocabulary of vehicle types a recommendation draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VehicleOption {
    Drone,
    EBikeOrMotorbike,
    Motorbike,
    MotorbikeWeatherproof,
    EVanShortRange,
    Van,
    VanHighClearance,
    Truck,
    TruckHighClearance,
    SpecializedVehicle,
}

impl VehicleOption {
    pub const ALL: [VehicleOption; 10] = [
        VehicleOption::Drone,
        VehicleOption::EBikeOrMotorbike,
        VehicleOption::Motorbike,
        VehicleOption::MotorbikeWeatherproof,
        VehicleOption::EVanShortRange,
        VehicleOption::Van,
        VehicleOption::VanHighClearance,
        VehicleOption::Truck,
        VehicleOption::TruckHighClearance,
        VehicleOption::SpecializedVehicle,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            VehicleOption::Drone => "Drone",
            VehicleOption::EBikeOrMotorbike => "E-bike/Motorbike",
            VehicleOption::Motorbike => "Motorbike",
            VehicleOption::MotorbikeWeatherproof => "Motorbike (weatherproof)",
            VehicleOption::EVanShortRange => "E-van (short range)",
            VehicleOption::Van => "Van",
            VehicleOption::VanHighClearance => "Van (high clearance)",
            VehicleOption::Truck => "Truck",
            VehicleOption::TruckHighClearance => "Truck (high clearance)",
            VehicleOption::SpecializedVehicle => "Specialized vehicle",
        }
    }
}

impl Display for VehicleOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for VehicleOption {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        VehicleOption::ALL
            .into_iter()
            .find(|option| option.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| InputError::UnknownLabel {
                kind: "vehicle",
                label: s.to_owned(),
            })
    }
}

impl Serialize for VehicleOption {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for VehicleOption {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        label.parse().map_err(serde::de::Error::custom)
    }
}
