use std::time::Duration;

pub const NOMINATIM_URL_ENV_VAR: &str = "COURIER_NOMINATIM_URL";
pub const OSRM_URL_ENV_VAR: &str = "COURIER_OSRM_URL";
pub const OPEN_METEO_URL_ENV_VAR: &str = "COURIER_OPEN_METEO_URL";
pub const GRAPHHOPPER_API_KEY_ENV_VAR: &str = "GRAPHHOPPER_API_KEY";
pub const USER_AGENT_ENV_VAR: &str = "COURIER_USER_AGENT";
pub const TIMEOUT_ENV_VAR: &str = "COURIER_TIMEOUT_MS";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(8000);

pub(crate) fn var_or(name: &str, default: &str) -> String {
    std::env::var(name)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| default.to_owned())
}

pub(crate) fn user_agent() -> String {
    var_or(
        USER_AGENT_ENV_VAR,
        concat!("courier/", env!("CARGO_PKG_VERSION")),
    )
}

/// Collaborator timeout, falls back to the default on missing or
/// malformed values.
pub fn timeout() -> Duration {
    std::env::var(TIMEOUT_ENV_VAR)
        .ok()
        .and_then(|value| value.trim().parse::<u64>().ok())
        .map(Duration::from_millis)
        .unwrap_or(DEFAULT_TIMEOUT)
}

pub(crate) fn trim_base_url(url: String) -> String {
    url.trim_end_matches('/').to_owned()
}
