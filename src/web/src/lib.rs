mod error;
mod matches;
mod players;
mod routes;
mod standings;
mod teams;
mod tenants;

pub use error::{ApiError, ApiResult};

use crate::routes::ServerRoutes;
use axum::response::IntoResponse;
use database::LeagueStore;
use log::{error, info};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::RwLock;
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;

pub struct LeagueServer {
    data: LeagueAppData,
}

impl LeagueServer {
    pub fn new(data: LeagueAppData) -> Self {
        LeagueServer { data }
    }

    pub async fn run(&self, port: u16) {
        let app = ServerRoutes::create()
            .layer(
                ServiceBuilder::new()
                    // Catch panics in handlers and convert them to 500 errors
                    .layer(CatchPanicLayer::custom(|_err| {
                        (
                            axum::http::StatusCode::INTERNAL_SERVER_ERROR,
                            "Internal server error - handler panicked".to_string(),
                        )
                            .into_response()
                    })),
            )
            .with_state(self.data.clone());

        let addr = SocketAddr::from(([0, 0, 0, 0], port));

        let listener = match TcpListener::bind(addr).await {
            Ok(listener) => listener,
            Err(e) => {
                error!("Failed to bind to address {}: {}", addr, e);
                panic!("Cannot start server without binding to port");
            }
        };

        info!("listen at: http://localhost:{}", port);

        if let Err(e) = axum::serve(listener, app).await {
            error!("Server error: {}", e);
            error!("Server stopped unexpectedly, but not crashing the process");
        }
    }
}

pub struct LeagueAppData {
    pub store: Arc<RwLock<LeagueStore>>,
}

impl Clone for LeagueAppData {
    fn clone(&self) -> Self {
        LeagueAppData {
            store: Arc::clone(&self.store),
        }
    }
}
