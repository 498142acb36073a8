//! HTTP Server configuration and startup.

use std::sync::Arc;

use axum::{
    Router,
    routing::{delete, get, post, put},
};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use adoption_types::AdoptionRepository;

use super::cors::CorsPolicy;
use super::handlers::{self, AppState};
use crate::AdoptionService;
use crate::openapi::ApiDoc;

/// HTTP Server for the Adoption API.
pub struct HttpServer<R: AdoptionRepository> {
    state: Arc<AppState<R>>,
    cors: CorsPolicy,
}

impl<R: AdoptionRepository> HttpServer<R> {
    /// Creates a new HTTP server with the permissive CORS default.
    pub fn new(service: AdoptionService<R>) -> Self {
        Self::with_cors(service, CorsPolicy::default())
    }

    /// Creates a new HTTP server with an explicit CORS policy.
    pub fn with_cors(service: AdoptionService<R>, cors: CorsPolicy) -> Self {
        Self {
            state: Arc::new(AppState { service }),
            cors,
        }
    }

    /// Builds the Axum router with all routes.
    pub fn router(&self) -> Router {
        Router::new()
            .route("/health", get(handlers::health))
            .route("/categories", get(handlers::list_categories::<R>))
            .route("/categories", post(handlers::create_category::<R>))
            .route("/categories/{id}", get(handlers::get_category::<R>))
            .route("/categories/{id}", put(handlers::update_category::<R>))
            .route("/categories/{id}", delete(handlers::delete_category::<R>))
            .route("/payments", post(handlers::record_payment::<R>))
            .route(
                "/users/{user_id}/payments",
                get(handlers::list_user_payments::<R>),
            )
            .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
            .layer(self.cors.layer())
            .layer(TraceLayer::new_for_http())
            .with_state(self.state.clone())
    }

    /// Runs the server on the given address with graceful shutdown.
    pub async fn run(self, addr: &str) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(addr).await?;
        tracing::info!("Server listening on {}", listener.local_addr()?);

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown...");
}
