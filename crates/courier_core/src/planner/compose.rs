use crate::{
    domain::{kilometers::Kilometers, route_metrics::RouteMetrics, route_status::RouteStatus},
    estimate::speed::{BASELINE_SPEED, status_speed},
    planner::collaborators::RoadRoute,
};

/// Distance and time shown to the user.
///
/// Without a road route the straight-line distance is driven at the
/// condition-adjusted speed. With one, the road distance is shown and the
/// router's free-flow time is stretched by the same slowdown the
/// conditions apply to the baseline speed.
pub fn compose_metrics(
    straight_line: Kilometers,
    status: &RouteStatus,
    road: Option<&RoadRoute>,
) -> RouteMetrics {
    let speed = status_speed(status);

    match road {
        Some(road) => {
            let slowdown = BASELINE_SPEED.value() / speed.value();
            let minutes = road.duration.as_secs_f64() / 60.0 * slowdown;
            RouteMetrics::new(road.distance_km, minutes)
        }
        None => {
            RouteMetrics::new(straight_line, straight_line.minutes_at(speed))
        }
    }
}
