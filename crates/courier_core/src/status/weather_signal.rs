use jiff::civil::Weekday;
use serde::{Deserialize, Serialize};

use crate::domain::coordinate::Coordinate;

/// Raw weather observations for a location, as reported by a weather source.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct WeatherSignal {
    pub location: Coordinate,

    /// WMO weather interpretation code
    pub weather_code: i32,

    pub wind_speed_kmh: f64,

    /// Hourly precipitation in mm over roughly the past 24 hours
    pub hourly_precipitation_mm: Vec<f64>,

    /// Hour of day (0-23) in the location's time zone
    pub local_hour: u8,

    /// Serialized as 0 (Monday) to 6 (Sunday)
    #[serde(with = "monday_zero_weekday")]
    pub weekday: Weekday,

    pub timezone: String,
}

mod monday_zero_weekday {
    use jiff::civil::Weekday;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(weekday: &Weekday, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i8(weekday.to_monday_zero_offset())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Weekday, D::Error> {
        let offset = i8::deserialize(deserializer)?;
        Weekday::from_monday_zero_offset(offset).map_err(serde::de::Error::custom)
    }
}
