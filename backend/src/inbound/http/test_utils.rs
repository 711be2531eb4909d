//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::{web, App};

use crate::inbound::http::configure_api;
use crate::inbound::http::state::HttpState;
use crate::outbound::memory::MemoryStorage;

/// State backed by a fresh in-memory store preloaded with the sample
/// catalogue.
pub fn seeded_state() -> HttpState {
    HttpState::new(Arc::new(MemoryStorage::seeded()))
}

/// Build an application with the full `/api` routing table mounted over
/// the given state.
pub fn test_app(
    state: HttpState,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(state))
        .configure(configure_api)
}
