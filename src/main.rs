// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use axum::{Router, routing::get};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::application::analysis_service::AnalysisService;
use crate::application::dashboard_service::DashboardService;
use crate::application::data_source_service::DataSourceService;
use crate::application::embedding_service::EmbeddingService;
use crate::application::user_service::UserService;
use crate::infrastructure::config::load_settings;
use crate::infrastructure::sdk_repository::{SdkQuickSightRepository, build_quicksight_client};
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{
    anonymous_embed_url, health_check, list_analyses, list_dashboards, list_data_sources,
    list_users, registered_embed_url,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let settings = load_settings()?;

    // Initialize tracing; DEBUG widens the default filter
    let default_level = if settings.debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    let account_id = settings
        .aws_account_id
        .clone()
        .context("AWS_ACCOUNT_ID must be set")?;

    // Create the repository (infrastructure layer)
    let client = build_quicksight_client(&settings).await;
    let repository = Arc::new(SdkQuickSightRepository::new(
        client,
        account_id,
        settings.quicksight_namespace.clone(),
    ));

    // Create services (application layer)
    let dashboard_service = DashboardService::new(repository.clone());
    let user_service = UserService::new(repository.clone());
    let embedding_service = EmbeddingService::new(
        repository.clone(),
        dashboard_service.clone(),
        user_service.clone(),
        settings.allowed_embed_domains.clone(),
    );

    let state = Arc::new(AppState {
        dashboard_service,
        analysis_service: AnalysisService::new(repository.clone()),
        data_source_service: DataSourceService::new(repository.clone()),
        user_service,
        embedding_service,
    });

    // Build the router (presentation layer)
    let routes = Router::new()
        .route("/", get(health_check))
        .route("/quicksight/dashboards", get(list_dashboards))
        .route("/quicksight/analyses", get(list_analyses))
        .route("/quicksight/data_sources", get(list_data_sources))
        .route("/quicksight/users", get(list_users))
        .route(
            "/quicksight/dashboards/embedding_url_anonymous_user/:dashboard_id",
            get(anonymous_embed_url),
        )
        .route(
            "/quicksight/dashboards/embedding_url/:dashboard_id",
            get(registered_embed_url),
        )
        .with_state(state);

    let router = if settings.base_path != "/" {
        Router::new().nest(&settings.base_path, routes)
    } else {
        routes
    };
    let router = router
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    // Start the server
    let addr: SocketAddr = format!("{}:{}", settings.host, settings.port)
        .parse()
        .context("invalid bind address")?;
    info!(
        environment = %settings.environment,
        hostname = %settings.hostname,
        workers = settings.workers,
        %addr,
        "starting quicksight-gateway"
    );

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
