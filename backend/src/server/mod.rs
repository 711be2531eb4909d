//! Server construction and backend selection.
//!
//! The storage backend is chosen once at startup: when a `DATABASE_URL` is
//! configured and the database answers a ping, requests are served from
//! PostgreSQL; otherwise the server falls back to the seeded in-memory
//! store and keeps running. The choice is permanent for the process
//! lifetime.

mod config;

pub use config::{ServerConfig, DEFAULT_BIND_ADDR};

use std::sync::Arc;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{web, App, HttpServer};
use tracing::{info, warn};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

#[cfg(debug_assertions)]
use crate::doc::ApiDoc;
use crate::domain::ports::Storage;
use crate::inbound::http::configure_api;
use crate::inbound::http::health::{live, ready, HealthState};
use crate::inbound::http::state::HttpState;
use crate::middleware::Trace;
use crate::outbound::memory::MemoryStorage;
use crate::outbound::persistence::{DbPool, DieselStorage, PoolConfig};

/// Select the storage backend for the process.
///
/// Attempts PostgreSQL when a URL is configured and verifies reachability
/// with a ping before committing to it. Any failure along the way is
/// logged and answered with the seeded in-memory fallback.
pub async fn build_storage(config: &ServerConfig) -> Arc<dyn Storage> {
    let Some(url) = config.database_url() else {
        info!("no DATABASE_URL configured; using in-memory storage");
        return Arc::new(MemoryStorage::seeded());
    };

    match DbPool::new(PoolConfig::new(url)).await {
        Ok(pool) => match pool.ping().await {
            Ok(()) => {
                info!("database reachable; using PostgreSQL storage");
                Arc::new(DieselStorage::new(pool))
            }
            Err(err) => {
                warn!(%err, "database ping failed; falling back to in-memory storage");
                Arc::new(MemoryStorage::seeded())
            }
        },
        Err(err) => {
            warn!(%err, "connection pool construction failed; falling back to in-memory storage");
            Arc::new(MemoryStorage::seeded())
        }
    }
}

fn build_app(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(Trace)
        .configure(configure_api)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Construct the HTTP server over the selected storage backend.
///
/// Readiness flips once the listener is bound, so probes only pass after
/// the socket is accepting connections.
///
/// # Errors
///
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: &ServerConfig,
    storage: Arc<dyn Storage>,
) -> std::io::Result<Server> {
    let http_state = web::Data::new(HttpState::new(storage));
    let server_health_state = health_state.clone();

    let server = HttpServer::new(move || {
        build_app(server_health_state.clone(), http_state.clone())
    })
    .bind(config.bind_addr())?
    .run();

    health_state.mark_ready();
    Ok(server)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test as actix_test};
    use serde_json::Value;

    #[actix_web::test]
    async fn app_serves_api_and_health_routes() {
        let health_state = web::Data::new(HealthState::new());
        health_state.mark_ready();
        let http_state = web::Data::new(HttpState::new(Arc::new(MemoryStorage::seeded())));
        let app = actix_test::init_service(build_app(health_state, http_state)).await;

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/api/medications")
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().contains_key("trace-id"));

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/health/ready")
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn error_responses_carry_the_trace_id() {
        let health_state = web::Data::new(HealthState::new());
        let http_state = web::Data::new(HttpState::new(Arc::new(MemoryStorage::seeded())));
        let app = actix_test::init_service(build_app(health_state, http_state)).await;

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/api/medications/999")
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let header = response
            .headers()
            .get("trace-id")
            .expect("trace id header")
            .to_str()
            .expect("header is ascii")
            .to_owned();
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(
            body.get("traceId").and_then(Value::as_str),
            Some(header.as_str())
        );
    }

    #[tokio::test]
    async fn storage_selection_falls_back_without_a_database() {
        let config = ServerConfig::new("127.0.0.1:0".parse().expect("addr"), None);
        let storage = build_storage(&config).await;
        let medications = storage
            .list_medications(&crate::domain::MedicationFilters::default())
            .await
            .expect("listing succeeds");
        assert_eq!(medications.len(), 5);
    }
}
