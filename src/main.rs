// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::{net::SocketAddr, sync::Arc, time::Duration};

use axum::{
    Router,
    routing::{get, post, put},
};
use tokio::sync::Mutex;
use tower_http::trace::TraceLayer;

use crate::application::payload_service::PayloadService;
use crate::application::refresh_service::RefreshService;
use crate::application::state::DashboardState;
use crate::infrastructure::config::load_qos_config;
use crate::infrastructure::geolocation::StaticLocationProvider;
use crate::infrastructure::open_elevation::OpenElevationClient;
use crate::infrastructure::open_weather::OpenWeatherClient;
use crate::infrastructure::prediction_api::PredictionApiClient;
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{get_dashboard, health_check, request_refresh, set_parameter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load configuration
    let config = load_qos_config()?;

    // Create provider adapters (infrastructure layer)
    let location = Arc::new(StaticLocationProvider::new(config.location.clone()));
    let elevation = Arc::new(OpenElevationClient::new(config.elevation.base_url.clone()));
    let weather = Arc::new(OpenWeatherClient::new(
        config.weather.base_url.clone(),
        config.weather.api_key.clone(),
    ));
    let prediction = Arc::new(PredictionApiClient::new(config.prediction.base_url.clone()));

    // Create services (application layer)
    let dashboard = Arc::new(Mutex::new(DashboardState::new()));
    let payload_service = PayloadService::new(location, elevation, weather);
    let refresh_service = RefreshService::new(payload_service, prediction, dashboard.clone());

    // Periodic refresh: the first tick fires immediately, then every
    // interval. The busy gate inside the service keeps cycles from
    // overlapping with user-initiated triggers.
    {
        let refresh_service = refresh_service.clone();
        let period = Duration::from_secs(config.refresh.interval_secs);
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            loop {
                ticker.tick().await;
                refresh_service.refresh().await;
            }
        });
    }

    // Create application state
    let state = Arc::new(AppState {
        refresh_service,
        dashboard,
    });

    // Build router (presentation layer)
    let router = Router::new()
        .route("/healthz", get(health_check))
        .route("/dashboard", get(get_dashboard))
        .route("/refresh", post(request_refresh))
        .route("/parameters", put(set_parameter))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let addr: SocketAddr = config.server.listen_addr.parse()?;
    println!("Starting qos-dashboard service on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
