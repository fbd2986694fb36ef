use crate::{
    domain::{
        kilometers::Kilometers,
        route_status::{Flood, RouteStatus, Traffic, Weather},
        shipment::{ShipmentSize, ShipmentSpec, Urgency},
        vehicle_option::VehicleOption,
    },
    recommend::recommendation::Recommendation,
};

use VehicleOption::*;

/// Whether a drone may be proposed at all.
///
/// A missing distance (no route could be computed) never allows a drone.
pub fn drone_allowed(
    status: &RouteStatus,
    distance_km: Option<Kilometers>,
    drone_limit_km: Kilometers,
) -> bool {
    let flyable = matches!(status.weather, Weather::Clear | Weather::Rain)
        && status.flood != Flood::Widespread;

    let in_range = distance_km.is_some_and(|distance| distance <= drone_limit_km);

    flyable && in_range
}

fn with_drone(mut options: Vec<VehicleOption>, allow_drone: bool) -> Vec<VehicleOption> {
    if allow_drone {
        options.push(Drone);
    }
    options
}

/// Maps a shipment and the route conditions to an ordered, never empty,
/// list of vehicle options.
///
/// Size is decided first, then urgency, then the environment. A drone is
/// only ever appended to the base options, except for critical small
/// parcels stuck in heavy traffic where it leads.
pub fn recommend(
    shipment: &ShipmentSpec,
    status: &RouteStatus,
    distance_km: Option<Kilometers>,
    drone_limit_km: Kilometers,
) -> Recommendation {
    let allow_drone = drone_allowed(status, distance_km, drone_limit_km);

    let options = match shipment.size {
        ShipmentSize::Small => match shipment.urgency {
            Urgency::Critical => {
                if allow_drone && status.traffic == Traffic::High {
                    vec![Drone, EBikeOrMotorbike]
                } else {
                    vec![EBikeOrMotorbike]
                }
            }
            _ => {
                if status.traffic == Traffic::High && status.weather != Weather::Storm {
                    with_drone(vec![EBikeOrMotorbike], allow_drone)
                } else {
                    with_drone(vec![Motorbike, EVanShortRange], allow_drone)
                }
            }
        },
        ShipmentSize::Medium => {
            if shipment.urgency.is_express() {
                if status.weather == Weather::Storm || status.flood != Flood::None {
                    vec![MotorbikeWeatherproof, Van]
                } else {
                    with_drone(vec![Motorbike, Van], allow_drone)
                }
            } else {
                with_drone(vec![Van, Motorbike], allow_drone)
            }
        }
        ShipmentSize::Large => {
            if status.flood == Flood::Widespread {
                vec![TruckHighClearance, VanHighClearance]
            } else {
                vec![Van, Truck]
            }
        }
        ShipmentSize::Bulky => vec![Truck, SpecializedVehicle],
    };

    Recommendation::new(options)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status(traffic: Traffic, weather: Weather, flood: Flood) -> RouteStatus {
        RouteStatus::new(traffic, weather, flood)
    }

    fn km(value: f64) -> Option<Kilometers> {
        Some(Kilometers::new(value))
    }

    fn limit() -> Kilometers {
        Kilometers::new(10.0)
    }

    fn options(
        shipment: &ShipmentSpec,
        status: &RouteStatus,
        distance_km: Option<Kilometers>,
    ) -> Vec<VehicleOption> {
        recommend(shipment, status, distance_km, limit())
            .options()
            .to_vec()
    }

    #[test]
    fn test_drone_gate() {
        let clear = status(Traffic::Low, Weather::Clear, Flood::None);

        assert!(drone_allowed(&clear, km(10.0), limit()));
        assert!(!drone_allowed(&clear, km(10.01), limit()));
        assert!(!drone_allowed(&clear, None, limit()));

        let rain = status(Traffic::Low, Weather::Rain, Flood::Local);
        assert!(drone_allowed(&rain, km(3.0), limit()));

        let storm = status(Traffic::Low, Weather::Storm, Flood::None);
        assert!(!drone_allowed(&storm, km(3.0), limit()));

        let flooded = status(Traffic::Low, Weather::Clear, Flood::Widespread);
        assert!(!drone_allowed(&flooded, km(3.0), limit()));
    }

    #[test]
    fn test_small_critical() {
        let shipment = ShipmentSpec::new(ShipmentSize::Small, Urgency::Critical);

        let jammed = status(Traffic::High, Weather::Clear, Flood::None);
        assert_eq!(
            options(&shipment, &jammed, km(5.0)),
            vec![Drone, EBikeOrMotorbike]
        );
        assert_eq!(
            options(&shipment, &jammed, km(25.0)),
            vec![EBikeOrMotorbike]
        );

        let quiet = status(Traffic::Low, Weather::Clear, Flood::None);
        assert_eq!(
            options(&shipment, &quiet, km(5.0)),
            vec![EBikeOrMotorbike]
        );
    }

    #[test]
    fn test_small_not_critical() {
        let shipment = ShipmentSpec::new(ShipmentSize::Small, Urgency::Normal);

        let jammed = status(Traffic::High, Weather::Rain, Flood::None);
        assert_eq!(
            options(&shipment, &jammed, km(5.0)),
            vec![EBikeOrMotorbike, Drone]
        );

        let jammed_storm = status(Traffic::High, Weather::Storm, Flood::None);
        assert_eq!(
            options(&shipment, &jammed_storm, km(5.0)),
            vec![Motorbike, EVanShortRange]
        );

        let quiet = status(Traffic::Medium, Weather::Clear, Flood::None);
        assert_eq!(
            options(&shipment, &quiet, km(5.0)),
            vec![Motorbike, EVanShortRange, Drone]
        );
        assert_eq!(
            options(&shipment, &quiet, None),
            vec![Motorbike, EVanShortRange]
        );
    }

    #[test]
    fn test_medium() {
        let express = ShipmentSpec::new(ShipmentSize::Medium, Urgency::High);
        let relaxed = ShipmentSpec::new(ShipmentSize::Medium, Urgency::Low);

        let local_flood = status(Traffic::Low, Weather::Clear, Flood::Local);
        assert_eq!(
            options(&express, &local_flood, km(5.0)),
            vec![MotorbikeWeatherproof, Van]
        );

        let clear = status(Traffic::Low, Weather::Clear, Flood::None);
        assert_eq!(
            options(&express, &clear, km(5.0)),
            vec![Motorbike, Van, Drone]
        );
        assert_eq!(
            options(&relaxed, &local_flood, km(5.0)),
            vec![Van, Motorbike, Drone]
        );

        let critical = ShipmentSpec::new(ShipmentSize::Medium, Urgency::Critical);
        let storm = status(Traffic::Low, Weather::Storm, Flood::None);
        assert_eq!(
            options(&critical, &storm, km(5.0)),
            vec![MotorbikeWeatherproof, Van]
        );
    }

    #[test]
    fn test_large() {
        let shipment = ShipmentSpec::new(ShipmentSize::Large, Urgency::Normal);

        let flooded = status(Traffic::Low, Weather::Clear, Flood::Widespread);
        assert_eq!(
            options(&shipment, &flooded, km(5.0)),
            vec![TruckHighClearance, VanHighClearance]
        );

        let clear = status(Traffic::Low, Weather::Clear, Flood::None);
        assert_eq!(
            options(&shipment, &clear, km(5.0)),
            vec![Van, Truck]
        );
    }
}
