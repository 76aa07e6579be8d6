use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::http::{header, HeaderValue, Method};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{error, info};

use backoffice_api::{router, AppState};
use backoffice_core::services::RolePermissionService;
use backoffice_infrastructure::{
    create_pool, run_migrations, PgMenuRepository, PgPermissionRepository, PgRoleRepository,
};
use backoffice_shared::config::AppConfig;
use backoffice_shared::telemetry::init_telemetry;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load().context("Failed to load configuration")?;

    // Initialize telemetry; the guard flushes the log file on exit
    let _log_guard = init_telemetry(&config.telemetry)?;

    info!("{} starting ({})...", config.app.name, config.app.env);

    // Connect to Database
    let pool = match create_pool(&config.database).await {
        Ok(pool) => pool,
        Err(e) => {
            error!("Failed to connect to database: {}", e);
            return Err(e.into());
        }
    };
    info!("Database connection established.");

    if config.database.run_migrations {
        run_migrations(&pool).await.context("Failed to run migrations")?;
        info!("Database migrations applied.");
    }

    // Create App State
    let service = RolePermissionService::new(
        Arc::new(PgMenuRepository::new(pool.clone())),
        Arc::new(PgPermissionRepository::new(pool.clone())),
        Arc::new(PgRoleRepository::new(pool)),
    );
    let state = AppState::new(service);

    let origin: HeaderValue = config
        .app
        .cors_origin
        .parse()
        .context("Invalid CORS origin")?;

    // Build router
    let app = router(state)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(origin)
                .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]),
        );

    // Bind address
    let host: std::net::IpAddr = config.app.host.parse()?;
    let addr = SocketAddr::from((host, config.app.port));
    info!("Listening on {}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
