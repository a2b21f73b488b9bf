use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::auth::JwtManager;
use crate::config::Config;

/// Shared by every handler through axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub jwt: JwtManager,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(db: DatabaseConnection, config: Config) -> Self {
        Self {
            db,
            jwt: JwtManager::new(&config.jwt_secret),
            config: Arc::new(config),
        }
    }
}
