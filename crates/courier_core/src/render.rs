use geo_types::{Coord, LineString, Point};
use geojson::{Feature, FeatureCollection, Geometry, JsonObject, Value};
use serde_json::json;

use crate::{domain::coordinate::Coordinate, planner::plan::Plan};

fn point(coordinate: &Coordinate) -> Value {
    Value::from(&Point::from(coordinate))
}

fn feature(value: Value, properties: serde_json::Value) -> Feature {
    let properties = match properties {
        serde_json::Value::Object(map) => Some(map),
        _ => None::<JsonObject>,
    };

    Feature {
        bbox: None,
        geometry: Some(Geometry::new(value)),
        id: None,
        properties,
        foreign_members: None,
    }
}

/// Renders the route line, both endpoints and a status annotation placed
/// halfway along the route.
pub fn plan_features(plan: &Plan) -> FeatureCollection {
    let line: LineString<f64> = plan.geometry.points.iter().map(Coord::from).collect();
    let annotation = plan.status.to_string();

    let mut features = vec![
        feature(
            Value::from(&line),
            json!({
                "role": "route",
                "kind": plan.geometry.kind,
                "distance_km": plan.metrics.distance_km.value(),
                "estimated_minutes": plan.metrics.estimated_minutes,
            }),
        ),
        feature(
            point(&plan.origin),
            json!({ "role": "origin" }),
        ),
        feature(
            point(&plan.destination),
            json!({ "role": "destination" }),
        ),
    ];

    if let Some(middle) = plan.geometry.middle() {
        features.push(feature(
            point(&middle),
            json!({
                "role": "status",
                "status": annotation,
                "recommendation": plan.recommendation.labels(),
                "estimate": plan.is_estimate(),
            }),
        ));
    }

    FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    }
}
