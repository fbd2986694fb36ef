use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::domain::vehicle_option::VehicleOption;

/// Ordered vehicle options, primary suggestions first.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Recommendation(Vec<VehicleOption>);

impl Recommendation {
    pub fn new(options: Vec<VehicleOption>) -> Self {
        Recommendation(options)
    }

    pub fn options(&self) -> &[VehicleOption] {
        &self.0
    }

    pub fn contains(&self, option: VehicleOption) -> bool {
        self.0.contains(&option)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn labels(&self) -> Vec<&'static str> {
        self.0.iter().map(|option| option.label()).collect()
    }
}

impl Display for Recommendation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.labels().join(", "))
    }
}
