use anyhow::Result;
use axum::Router;
use log::info;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use crate::api::{create_router, AppState};
use crate::config::settings::AppConfig;
use crate::database;

pub struct ServerService {
    port: u16,
    config: AppConfig,
}

impl ServerService {
    pub fn new(port: u16, config: AppConfig) -> Self {
        Self { port, config }
    }

    pub async fn run(&self) -> Result<()> {
        let pool = database::open(&self.config.database.path)?;
        info!("Serving reports from {}", self.config.database.path);

        let state = Arc::new(AppState {
            pool,
            config: self.config.clone(),
        });

        let router = app(state);

        let addr = SocketAddr::from(([0, 0, 0, 0], self.port));
        info!("Server listening on {}", addr);

        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, router).await?;

        Ok(())
    }
}

/// Report routes as served: permissive CORS, request logging in the handlers
pub fn app(state: Arc<AppState>) -> Router {
    create_router(state).layer(CorsLayer::permissive())
}
