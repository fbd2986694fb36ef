use serde::{Deserialize, Serialize};

use crate::domain::kilometers::Kilometers;

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct RouteMetrics {
    pub distance_km: Kilometers,

    /// Always at least one minute.
    pub estimated_minutes: u32,
}

impl RouteMetrics {
    pub fn new(distance_km: Kilometers, minutes: f64) -> Self {
        Self {
            distance_km: Kilometers::new(distance_km.value().max(0.0)),
            estimated_minutes: whole_minutes(minutes),
        }
    }
}

fn whole_minutes(minutes: f64) -> u32 {
    if !minutes.is_finite() {
        return 1;
    }

    (minutes.round() as u32).max(1)
}
