mod error;
mod plan;
mod presets;
mod recommend;
mod state;

use std::sync::Arc;

use axum::http::Method;
use axum::routing::{get, post};
use axum::{Router, serve};
use courier_core::planner::planner::{Planner, PlannerParams};
use courier_providers::{
    env, nominatim::NominatimClient, open_meteo::OpenMeteoClient, route_client::RouteClient,
};
use mimalloc::MiMalloc;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tracing::{Level, info};

use crate::plan::plan_handler::plan_handler;
use crate::presets::presets_handler;
use crate::recommend::recommend_handler::recommend_handler;
use crate::state::AppState;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

const API_ADDR_ENV_VAR: &str = "COURIER_API_ADDR";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::from_filename("./.env.local").ok();
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    let route_client = RouteClient::from_env();
    info!("Routing with {:?}", route_client.provider());

    let state = Arc::new(AppState {
        planner: Planner::new(
            NominatimClient::default(),
            route_client,
            OpenMeteoClient::default(),
            PlannerParams {
                timeout: env::timeout(),
            },
        ),
    });

    let cors_layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_origin(Any)
        .allow_headers(Any);

    let app = Router::new()
        .route("/recommend", post(recommend_handler))
        .route("/plan", post(plan_handler))
        .route("/presets", get(presets_handler))
        .layer(ServiceBuilder::new().layer(cors_layer))
        .with_state(state);

    let addr = std::env::var(API_ADDR_ENV_VAR).unwrap_or_else(|_| String::from("127.0.0.1:8080"));
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("Listening on {}", addr);
    serve(listener, app).await?;

    Ok(())
}
