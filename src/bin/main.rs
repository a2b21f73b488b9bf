use std::net::SocketAddr;

use anyhow::Context;
use migration::{Migrator, MigratorTrait};
use sea_orm::Database;

use dept_service::bootstrap::initialize_admin_user;
use dept_service::state::AppState;
use dept_service::{app, config::APP_CONFIG, utils::tracing::init_standard_tracing};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    init_standard_tracing(env!("CARGO_CRATE_NAME"), &APP_CONFIG.log_level);

    tracing::info!(app_env = %APP_CONFIG.app_env, "Starting application...");

    let db = Database::connect(APP_CONFIG.database_url.as_str())
        .await
        .context("Failed to connect to database")?;

    if APP_CONFIG.run_migrations {
        tracing::info!("Running migrations...");
        Migrator::up(&db, None)
            .await
            .context("Failed to run migrations")?;
    }

    tracing::info!("Checking admin user...");
    if let Err(e) = initialize_admin_user(&db, &APP_CONFIG).await {
        tracing::error!("Failed to initialize admin user: {:#}", e);
        tracing::warn!("Continuing without admin user initialization...");
    }

    tracing::info!("Create upload folder");
    tokio::fs::create_dir_all(&APP_CONFIG.upload_dir)
        .await
        .with_context(|| format!("Failed to create {}", APP_CONFIG.upload_dir))?;

    let state = AppState::new(db, APP_CONFIG.clone());
    let app = app::create_app(state)?;

    let http_address = format!("0.0.0.0:{}", APP_CONFIG.port);
    tracing::info!("HTTP server listening on {}", &http_address);

    let listener = tokio::net::TcpListener::bind(&http_address)
        .await
        .with_context(|| format!("Failed to bind {http_address}"))?;

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .context("HTTP server error")?;

    Ok(())
}
