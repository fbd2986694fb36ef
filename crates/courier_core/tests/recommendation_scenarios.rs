use courier_core::{
    domain::{
        kilometers::Kilometers,
        route_status::{Flood, RouteStatus, Traffic, Weather},
        shipment::{ShipmentSize, ShipmentSpec, Urgency},
        vehicle_option::VehicleOption,
    },
    recommend::vehicle_recommender::{drone_allowed, recommend},
    status::status_inference::{base_traffic, classify_flood, classify_weather, escalate_traffic},
};
use jiff::civil::Weekday;

fn all_shipments() -> impl Iterator<Item = ShipmentSpec> {
    ShipmentSize::ALL.into_iter().flat_map(|size| {
        Urgency::ALL
            .into_iter()
            .map(move |urgency| ShipmentSpec::new(size, urgency))
    })
}

const DISTANCES: [Option<f64>; 5] = [None, Some(0.0), Some(5.0), Some(10.0), Some(25.0)];

#[test]
fn recommendation_is_never_empty_and_drone_respects_gate() {
    let limit = Kilometers::new(10.0);

    for shipment in all_shipments() {
        for status in RouteStatus::all() {
            for distance in DISTANCES.map(|d| d.map(Kilometers::new)) {
                let recommendation = recommend(&shipment, &status, distance, limit);

                assert!(!recommendation.is_empty(), "{shipment:?} {status}");

                if !drone_allowed(&status, distance, limit) {
                    assert!(
                        !recommendation.contains(VehicleOption::Drone),
                        "{shipment:?} {status} {distance:?}"
                    );
                }
            }
        }
    }
}

#[test]
fn drone_never_offered_in_storm_widespread_flood_or_out_of_range() {
    let limit = Kilometers::new(10.0);
    let shipment = ShipmentSpec::new(ShipmentSize::Small, Urgency::Normal);

    for status in RouteStatus::all() {
        let grounded = status.weather == Weather::Storm || status.flood == Flood::Widespread;

        let near = recommend(&shipment, &status, Some(Kilometers::new(2.0)), limit);
        assert_eq!(near.contains(VehicleOption::Drone), !grounded, "{status}");

        let far = recommend(&shipment, &status, Some(Kilometers::new(12.0)), limit);
        assert!(!far.contains(VehicleOption::Drone));

        let unknown = recommend(&shipment, &status, None, limit);
        assert!(!unknown.contains(VehicleOption::Drone));
    }
}

#[test]
fn critical_small_parcel_in_traffic_flies() {
    let shipment = ShipmentSpec::from_labels("Small (≤5kg)", "Critical (≤2h)").unwrap();
    let status = RouteStatus::new(Traffic::High, Weather::Clear, Flood::None);

    assert!(drone_allowed(
        &status,
        Some(Kilometers::new(5.0)),
        Kilometers::new(10.0)
    ));

    let recommendation = recommend(
        &shipment,
        &status,
        Some(Kilometers::new(5.0)),
        Kilometers::new(10.0),
    );

    assert_eq!(recommendation.labels(), vec!["Drone", "E-bike/Motorbike"]);
}

#[test]
fn large_parcel_in_widespread_flood_needs_clearance() {
    for urgency in Urgency::ALL {
        for traffic in Traffic::ALL {
            for weather in Weather::ALL {
                let shipment = ShipmentSpec::new(ShipmentSize::Large, urgency);
                let status = RouteStatus::new(traffic, weather, Flood::Widespread);

                let recommendation = recommend(
                    &shipment,
                    &status,
                    Some(Kilometers::new(3.0)),
                    Kilometers::new(10.0),
                );

                assert_eq!(
                    recommendation.labels(),
                    vec!["Truck (high clearance)", "Van (high clearance)"]
                );
            }
        }
    }
}

#[test]
fn bulky_always_goes_by_truck() {
    let size = ShipmentSize::from_label("Bulky/Over").unwrap();

    for urgency in Urgency::ALL {
        for status in RouteStatus::all() {
            for distance in DISTANCES.map(|d| d.map(Kilometers::new)) {
                let recommendation = recommend(
                    &ShipmentSpec::new(size, urgency),
                    &status,
                    distance,
                    Kilometers::new(30.0),
                );

                assert_eq!(recommendation.labels(), vec!["Truck", "Specialized vehicle"]);
            }
        }
    }
}

#[test]
fn storm_code_wins_over_calm_wind() {
    assert_eq!(classify_weather(96, 20.0), Weather::Storm);
}

#[test]
fn saturday_storm_escalates_to_high() {
    let base = base_traffic(Weekday::Saturday, 8);
    assert_eq!(base, Traffic::Low);
    assert_eq!(escalate_traffic(base, Weather::Storm), Traffic::High);
}

#[test]
fn flood_is_monotonic_in_precipitation() {
    assert_eq!(classify_flood(150.0), Flood::Widespread);
    assert_eq!(classify_flood(50.0), Flood::Local);
    assert_eq!(classify_flood(10.0), Flood::None);
    assert_eq!(classify_flood(30.0), Flood::Local);
    assert_eq!(classify_flood(100.0), Flood::Widespread);

    let mut previous = Flood::None;
    for mm in 0..200 {
        let flood = classify_flood(mm as f64);
        assert!(flood >= previous);
        previous = flood;
    }
}
