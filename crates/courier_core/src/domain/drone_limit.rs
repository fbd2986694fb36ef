use serde::{Deserialize, Serialize};

use crate::domain::{input_error::InputError, kilometers::Kilometers};

/// Maximum straight-line distance a drone may be proposed for.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct DroneLimit(f64);

impl DroneLimit {
    pub const MIN_KM: f64 = 1.0;
    pub const MAX_KM: f64 = 30.0;
    pub const DEFAULT_KM: f64 = 10.0;

    pub fn new(km: f64) -> Result<Self, InputError> {
        if !(Self::MIN_KM..=Self::MAX_KM).contains(&km) {
            return Err(InputError::DroneLimitOutOfRange {
                value: km,
                min: Self::MIN_KM,
                max: Self::MAX_KM,
            });
        }

        Ok(DroneLimit(km))
    }

    pub fn kilometers(&self) -> Kilometers {
        Kilometers::new(self.0)
    }
}

impl Default for DroneLimit {
    fn default() -> Self {
        DroneLimit(Self::DEFAULT_KM)
    }
}

impl TryFrom<f64> for DroneLimit {
    type Error = InputError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        DroneLimit::new(value)
    }
}

impl From<DroneLimit> for f64 {
    fn from(value: DroneLimit) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds() {
        assert!(DroneLimit::new(1.0).is_ok());
        assert!(DroneLimit::new(30.0).is_ok());
        assert!(DroneLimit::new(0.5).is_err());
        assert!(DroneLimit::new(31.0).is_err());
        assert!(DroneLimit::new(f64::NAN).is_err());
    }

    #[test]
    fn test_default() {
        assert_eq!(DroneLimit::default().kilometers(), Kilometers::new(10.0));
    }

    #[test]
    fn test_deserialize_validates() {
        let limit: DroneLimit = serde_json::from_str("12").unwrap();
        assert_eq!(limit.kilometers(), Kilometers::new(12.0));

        assert!(serde_json::from_str::<DroneLimit>("45").is_err());
    }
}
