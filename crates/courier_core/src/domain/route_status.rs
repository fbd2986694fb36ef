use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::domain::input_error::InputError;

/// Variants are declared from least to most severe, so `Ord` follows
/// severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Traffic {
    Low,
    Medium,
    High,
}

impl Traffic {
    pub const ALL: [Traffic; 3] = [Traffic::Low, Traffic::Medium, Traffic::High];

    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Saturates at `High`.
    pub fn from_index(index: usize) -> Self {
        match index {
            0 => Traffic::Low,
            1 => Traffic::Medium,
            _ => Traffic::High,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Traffic::Low => "Low",
            Traffic::Medium => "Medium",
            Traffic::High => "High",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Weather {
    Clear,
    Rain,
    Storm,
}

impl Weather {
    pub const ALL: [Weather; 3] = [Weather::Clear, Weather::Rain, Weather::Storm];

    pub fn label(&self) -> &'static str {
        match self {
            Weather::Clear => "Clear",
            Weather::Rain => "Rain",
            Weather::Storm => "Storm",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Flood {
    None,
    Local,
    Widespread,
}

impl Flood {
    pub const ALL: [Flood; 3] = [Flood::None, Flood::Local, Flood::Widespread];

    pub fn label(&self) -> &'static str {
        match self {
            Flood::None => "None",
            Flood::Local => "Local",
            Flood::Widespread => "Widespread",
        }
    }
}

macro_rules! impl_label_traits {
    ($name:ident, $kind:literal) => {
        impl FromStr for $name {
            type Err = InputError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let normalized = s.trim().to_lowercase();
                $name::ALL
                    .into_iter()
                    .find(|value| value.label().to_lowercase() == normalized)
                    .ok_or_else(|| InputError::UnknownLabel {
                        kind: $kind,
                        label: s.to_owned(),
                    })
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.label())
            }
        }
    };
}

impl_label_traits!(Traffic, "traffic");
impl_label_traits!(Weather, "weather");
impl_label_traits!(Flood, "flood");

/// Conditions on the route at the time of computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct RouteStatus {
    pub traffic: Traffic,
    pub weather: Weather,
    pub flood: Flood,
}

impl RouteStatus {
    /// Substituted by the planner when live weather is unavailable.
    pub const FALLBACK: RouteStatus = RouteStatus {
        traffic: Traffic::Medium,
        weather: Weather::Clear,
        flood: Flood::None,
    };

    pub fn new(traffic: Traffic, weather: Weather, flood: Flood) -> Self {
        Self {
            traffic,
            weather,
            flood,
        }
    }

    pub fn all() -> impl Iterator<Item = RouteStatus> {
        Traffic::ALL.into_iter().flat_map(|traffic| {
            Weather::ALL.into_iter().flat_map(move |weather| {
                Flood::ALL
                    .into_iter()
                    .map(move |flood| RouteStatus::new(traffic, weather, flood))
            })
        })
    }
}

impl Display for RouteStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Traffic: {} • Weather: {} • Flood: {}",
            self.traffic, self.weather, self.flood
        )
    }
}
