use std::{collections::HashMap, time::Duration};

use courier_core::{
    domain::{
        coordinate::Coordinate,
        drone_limit::DroneLimit,
        kilometers::Kilometers,
        route_status::{Flood, RouteStatus, Traffic, Weather},
        shipment::{ShipmentSize, ShipmentSpec, Urgency},
        vehicle_option::VehicleOption,
    },
    planner::{
        collaborators::{Geocoder, RoadRoute, RouteSource, RoutingProfile, Unavailable, WeatherSource},
        conditions::live_conditions,
        endpoint::{Endpoint, EndpointRole},
        plan::{Fallback, PlanRequest, RouteKind, StatusOrigin, StatusSource},
        planner::{PlanError, Planner, PlannerParams},
    },
    render::plan_features,
    status::{status_inference::infer_status, weather_signal::WeatherSignal},
};
use jiff::{SignedDuration, civil::Weekday};

const HANOI_TOWER: Coordinate = Coordinate::new(21.0176, 105.8490);
const MY_DINH: Coordinate = Coordinate::new(21.0282, 105.7780);

struct FakeGeocoder(HashMap<&'static str, Coordinate>);

impl FakeGeocoder {
    fn hanoi() -> Self {
        FakeGeocoder(HashMap::from([
            ("Hanoi Tower, Hanoi", HANOI_TOWER),
            ("My Dinh Bus Station, Hanoi", MY_DINH),
        ]))
    }
}

impl Geocoder for FakeGeocoder {
    async fn geocode(&self, address: &str) -> anyhow::Result<Option<Coordinate>> {
        Ok(self.0.get(address).copied())
    }
}

enum FakeWeather {
    Signal(WeatherSignal),
    Failing,
    Slow,
}

impl WeatherSource for FakeWeather {
    async fn fetch_weather_signal(&self, location: &Coordinate) -> anyhow::Result<WeatherSignal> {
        match self {
            FakeWeather::Signal(signal) => Ok(WeatherSignal {
                location: *location,
                ..signal.clone()
            }),
            FakeWeather::Failing => Err(anyhow::anyhow!("HTTP 503")),
            FakeWeather::Slow => {
                tokio::time::sleep(Duration::from_secs(60)).await;
                Err(anyhow::anyhow!("unreachable"))
            }
        }
    }
}

struct FakeRouter(Option<RoadRoute>);

impl RouteSource for FakeRouter {
    async fn fetch_route(
        &self,
        _origin: &Coordinate,
        _destination: &Coordinate,
        _profile: RoutingProfile,
    ) -> anyhow::Result<Option<RoadRoute>> {
        Ok(self.0.clone())
    }
}

fn monday_rush_hour(weather_code: i32, precipitation: Vec<f64>) -> WeatherSignal {
    WeatherSignal {
        location: HANOI_TOWER,
        weather_code,
        wind_speed_kmh: 10.0,
        hourly_precipitation_mm: precipitation,
        local_hour: 8,
        weekday: Weekday::Monday,
        timezone: String::from("Asia/Bangkok"),
    }
}

fn road_route() -> RoadRoute {
    RoadRoute {
        polyline: vec![
            HANOI_TOWER,
            Coordinate::new(21.0250, 105.8200),
            Coordinate::new(21.0300, 105.7950),
            MY_DINH,
        ],
        distance_km: Kilometers::new(12.0),
        duration: SignedDuration::from_mins(24),
    }
}

fn request(status: StatusSource, routing: Option<RoutingProfile>) -> PlanRequest {
    PlanRequest {
        origin: Endpoint::Address(String::from("Hanoi Tower, Hanoi")),
        destination: Endpoint::Address(String::from("My Dinh Bus Station, Hanoi")),
        status,
        shipment: ShipmentSpec::new(ShipmentSize::Small, Urgency::Critical),
        drone_limit: DroneLimit::default(),
        routing,
    }
}

fn manual(traffic: Traffic, weather: Weather, flood: Flood) -> StatusSource {
    StatusSource::Manual {
        status: RouteStatus::new(traffic, weather, flood),
    }
}

fn params() -> PlannerParams {
    PlannerParams {
        timeout: Duration::from_secs(2),
    }
}

#[tokio::test]
async fn manual_status_without_routing_uses_straight_line() {
    let planner = Planner::new(FakeGeocoder::hanoi(), Unavailable, Unavailable, params());

    let plan = planner
        .plan(&request(manual(Traffic::High, Weather::Clear, Flood::None), None))
        .await
        .unwrap();

    assert_eq!(plan.origin, HANOI_TOWER);
    assert_eq!(plan.destination, MY_DINH);
    assert_eq!(plan.status_origin, StatusOrigin::Manual);
    assert_eq!(plan.geometry.kind, RouteKind::StraightLine);
    assert_eq!(plan.metrics.distance_km, plan.straight_line_km);
    assert!(plan.fallbacks.is_empty());
    assert!(plan.drone_allowed);
    assert_eq!(
        plan.recommendation.options(),
        &[VehicleOption::Drone, VehicleOption::EBikeOrMotorbike]
    );
}

#[tokio::test]
async fn live_status_is_inferred_from_weather() {
    let weather = FakeWeather::Signal(monday_rush_hour(63, vec![5.0; 24]));
    let planner = Planner::new(FakeGeocoder::hanoi(), Unavailable, weather, params());

    let plan = planner
        .plan(&request(StatusSource::Live, None))
        .await
        .unwrap();

    assert_eq!(plan.status_origin, StatusOrigin::Live);
    assert_eq!(
        plan.status,
        RouteStatus::new(Traffic::High, Weather::Rain, Flood::Widespread)
    );
    assert!(!plan.drone_allowed);
    assert_eq!(
        plan.recommendation.options(),
        &[VehicleOption::EBikeOrMotorbike]
    );
}

#[tokio::test]
async fn failing_weather_falls_back_to_default_status() {
    let planner = Planner::new(
        FakeGeocoder::hanoi(),
        Unavailable,
        FakeWeather::Failing,
        params(),
    );

    let plan = planner
        .plan(&request(StatusSource::Live, None))
        .await
        .unwrap();

    assert_eq!(plan.status, RouteStatus::FALLBACK);
    assert_eq!(plan.status_origin, StatusOrigin::Fallback);
    assert_eq!(
        plan.fallbacks,
        vec![Fallback::WeatherUnavailable {
            reason: String::from("HTTP 503")
        }]
    );
    assert!(plan.is_estimate());
}

#[tokio::test(start_paused = true)]
async fn slow_weather_times_out() {
    let planner = Planner::new(
        FakeGeocoder::hanoi(),
        Unavailable,
        FakeWeather::Slow,
        params(),
    );

    let plan = planner
        .plan(&request(StatusSource::Live, None))
        .await
        .unwrap();

    assert_eq!(plan.status, RouteStatus::FALLBACK);
    assert!(matches!(
        plan.fallbacks.as_slice(),
        [Fallback::WeatherUnavailable { reason }] if reason.contains("timed out")
    ));
}

#[tokio::test]
async fn live_conditions_infer_status_from_signal() {
    let signal = monday_rush_hour(61, vec![0.5; 24]);
    let weather = FakeWeather::Signal(signal.clone());

    let conditions = live_conditions(&weather, &HANOI_TOWER, Duration::from_secs(2)).await;

    assert_eq!(conditions.status, infer_status(&signal));
    assert_eq!(conditions.signal, Some(signal));
    assert_eq!(conditions.fallback, None);
}

#[tokio::test(start_paused = true)]
async fn live_conditions_fall_back_on_timeout() {
    let conditions =
        live_conditions(&FakeWeather::Slow, &HANOI_TOWER, Duration::from_secs(2)).await;

    assert_eq!(conditions.status, RouteStatus::FALLBACK);
    assert_eq!(conditions.signal, None);
    assert!(matches!(
        conditions.fallback,
        Some(Fallback::WeatherUnavailable { ref reason }) if reason.contains("timed out after 2s")
    ));
}

#[tokio::test]
async fn live_conditions_fall_back_on_error() {
    let conditions =
        live_conditions(&FakeWeather::Failing, &HANOI_TOWER, Duration::from_secs(2)).await;

    assert_eq!(conditions.status, RouteStatus::FALLBACK);
    assert_eq!(
        conditions.fallback,
        Some(Fallback::WeatherUnavailable {
            reason: String::from("HTTP 503")
        })
    );
}

#[tokio::test]
async fn road_route_is_shown_but_drone_uses_straight_line() {
    let planner = Planner::new(
        FakeGeocoder::hanoi(),
        FakeRouter(Some(road_route())),
        Unavailable,
        params(),
    );

    let mut request = request(
        manual(Traffic::Low, Weather::Clear, Flood::None),
        Some(RoutingProfile::Motorbike),
    );
    request.shipment = ShipmentSpec::new(ShipmentSize::Small, Urgency::Normal);
    request.drone_limit = DroneLimit::new(8.0).unwrap();

    let plan = planner.plan(&request).await.unwrap();

    assert_eq!(plan.geometry.kind, RouteKind::Road);
    assert_eq!(plan.geometry.points.len(), 4);
    assert_eq!(plan.metrics.distance_km, Kilometers::new(12.0));
    assert_eq!(plan.metrics.estimated_minutes, 24);

    // Road is 12 km, straight line is under 8 km
    assert!(plan.straight_line_km < Kilometers::new(8.0));
    assert!(plan.drone_allowed);
    assert_eq!(
        plan.recommendation.options(),
        &[
            VehicleOption::Motorbike,
            VehicleOption::EVanShortRange,
            VehicleOption::Drone
        ]
    );
}

#[tokio::test]
async fn missing_route_falls_back_to_straight_line() {
    let planner = Planner::new(
        FakeGeocoder::hanoi(),
        FakeRouter(None),
        Unavailable,
        params(),
    );

    let plan = planner
        .plan(&request(
            manual(Traffic::Low, Weather::Clear, Flood::None),
            Some(RoutingProfile::Car),
        ))
        .await
        .unwrap();

    assert_eq!(plan.geometry.kind, RouteKind::StraightLine);
    assert_eq!(plan.geometry.points, vec![HANOI_TOWER, MY_DINH]);
    assert_eq!(
        plan.fallbacks,
        vec![Fallback::RoutingUnavailable {
            reason: String::from("no route found")
        }]
    );
}

#[tokio::test]
async fn unknown_address_is_not_resolved() {
    let planner = Planner::new(FakeGeocoder::hanoi(), Unavailable, Unavailable, params());

    let mut request = request(manual(Traffic::Low, Weather::Clear, Flood::None), None);
    request.destination = Endpoint::Address(String::from("Atlantis"));

    let err = planner.plan(&request).await.unwrap_err();

    assert_eq!(
        err,
        PlanError::UnresolvedEndpoint {
            role: EndpointRole::Destination,
            reason: String::from("address \"Atlantis\" not found"),
        }
    );
}

#[tokio::test]
async fn presets_and_coordinates_skip_the_geocoder() {
    let planner = Planner::new(Unavailable, Unavailable, Unavailable, params());

    let mut request = request(manual(Traffic::Low, Weather::Clear, Flood::None), None);
    request.origin = Endpoint::Preset(String::from("hanoi tower"));
    request.destination = Endpoint::Coordinates(MY_DINH);

    let plan = planner.plan(&request).await.unwrap();
    assert_eq!(plan.origin, HANOI_TOWER);

    request.origin = Endpoint::Preset(String::from("Saigon"));
    let err = planner.plan(&request).await.unwrap_err();
    assert!(matches!(
        err,
        PlanError::UnresolvedEndpoint {
            role: EndpointRole::Origin,
            ..
        }
    ));
}

#[tokio::test]
async fn plan_renders_route_and_status_annotation() {
    let planner = Planner::new(
        FakeGeocoder::hanoi(),
        FakeRouter(Some(road_route())),
        Unavailable,
        params(),
    );

    let plan = planner
        .plan(&request(
            manual(Traffic::High, Weather::Rain, Flood::Local),
            Some(RoutingProfile::Car),
        ))
        .await
        .unwrap();

    let collection = plan_features(&plan);
    assert_eq!(collection.features.len(), 4);

    let route = &collection.features[0];
    assert!(matches!(
        route.geometry.as_ref().map(|g| &g.value),
        Some(geojson::Value::LineString(points)) if points.len() == 4
    ));

    let origin = &collection.features[1];
    assert_eq!(
        origin.geometry.as_ref().map(|g| &g.value),
        Some(&geojson::Value::Point(vec![
            plan.origin.lon(),
            plan.origin.lat()
        ]))
    );

    let annotation = &collection.features[3];
    assert_eq!(
        annotation.property("status").and_then(|v| v.as_str()),
        Some("Traffic: High • Weather: Rain • Flood: Local")
    );
}
