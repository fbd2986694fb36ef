use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::domain::kmh::Kmh;

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
pub struct Kilometers(f64);

impl Kilometers {
    pub const ZERO: Kilometers = Kilometers(0.0);

    pub fn new(value: f64) -> Self {
        Kilometers(value)
    }

    pub fn from_meters(meters: f64) -> Self {
        Kilometers(meters / 1000.0)
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    /// Minutes needed to cover this distance at `speed`.
    pub fn minutes_at(&self, speed: Kmh) -> f64 {
        self.0 / speed.value() * 60.0
    }
}

impl Display for Kilometers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1} km", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minutes_at() {
        assert_eq!(Kilometers::new(35.0).minutes_at(Kmh::new(35.0)), 60.0);
        assert_eq!(Kilometers::new(8.0).minutes_at(Kmh::new(16.0)), 30.0);
    }

    #[test]
    fn test_minutes_at_huge_distance() {
        let minutes = Kilometers::new(1e20).minutes_at(Kmh::new(8.0));
        assert!(minutes.is_finite());
        assert!(minutes > f64::from(u32::MAX));
    }

    #[test]
    fn test_from_meters() {
        assert_eq!(Kilometers::from_meters(12_500.0), Kilometers::new(12.5));
    }
}
