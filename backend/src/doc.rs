//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] collects every REST endpoint and the schemas their payloads
//! reference. The generated specification backs Swagger UI in debug builds
//! and can be exported with `cargo run --bin openapi-dump`.

use utoipa::OpenApi;

use crate::domain::{
    AlertLevel, Category, Error, ErrorCode, Favorite, FavoriteKey, Medication, MedicationUpdate,
    NewMedication, NewUser,
};
use crate::inbound::http::auth::{AuthResponse, AuthUser, SigninRequest};
use crate::inbound::http::error::ApiError;
use crate::inbound::http::favorites::FavoriteCheck;

/// OpenAPI document for the medication reference API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Medication reference API",
        description = "Lookup, curation and favourites for an EMS drug reference.",
        license(name = "ISC")
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::auth::signup,
        crate::inbound::http::auth::signin,
        crate::inbound::http::medications::list,
        crate::inbound::http::medications::get,
        crate::inbound::http::medications::create,
        crate::inbound::http::medications::update,
        crate::inbound::http::medications::remove,
        crate::inbound::http::favorites::list,
        crate::inbound::http::favorites::add,
        crate::inbound::http::favorites::remove,
        crate::inbound::http::favorites::check,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        AlertLevel,
        ApiError,
        AuthResponse,
        AuthUser,
        Category,
        Error,
        ErrorCode,
        Favorite,
        FavoriteCheck,
        FavoriteKey,
        Medication,
        MedicationUpdate,
        NewMedication,
        NewUser,
        SigninRequest,
    )),
    tags(
        (name = "auth", description = "Account creation and sign-in"),
        (name = "medications", description = "Medication catalogue"),
        (name = "favorites", description = "Per-user medication bookmarks"),
        (name = "health", description = "Liveness and readiness probes")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("/api/auth/signup")]
    #[case("/api/auth/signin")]
    #[case("/api/medications")]
    #[case("/api/medications/{id}")]
    #[case("/api/users/{user_id}/favorites")]
    #[case("/api/favorites")]
    #[case("/api/favorites/check")]
    #[case("/health/ready")]
    #[case("/health/live")]
    fn document_lists_path(#[case] path: &str) {
        let doc = ApiDoc::openapi();
        assert!(
            doc.paths.paths.contains_key(path),
            "missing path {path} in generated document"
        );
    }

    #[test]
    fn document_registers_core_schemas() {
        let doc = ApiDoc::openapi();
        let components = doc.components.expect("components present");
        for name in ["Medication", "ApiError", "Favorite", "AuthResponse"] {
            assert!(
                components.schemas.contains_key(name),
                "missing schema {name}"
            );
        }
    }
}
