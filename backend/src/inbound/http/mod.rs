//! HTTP inbound adapter exposing REST endpoints.

pub mod auth;
pub mod error;
pub mod favorites;
pub mod health;
pub mod medications;
pub mod state;
#[cfg(test)]
pub mod test_utils;

pub use error::{ApiError, ApiResult};

use actix_web::web;

/// Register every `/api` route on the given scope configuration.
///
/// Kept in one place so the production server and handler tests mount an
/// identical routing table.
pub fn configure_api(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .service(auth::signup)
            .service(auth::signin)
            .service(medications::list)
            .service(medications::get)
            .service(medications::create)
            .service(medications::update)
            .service(medications::remove)
            .service(favorites::check)
            .service(favorites::add)
            .service(favorites::remove)
            .service(favorites::list),
    );
}
