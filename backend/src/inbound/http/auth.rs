//! Authentication handlers.
//!
//! ```text
//! POST /api/auth/signup {"email":"...","name":"..."}
//! POST /api/auth/signin {"email":"..."}
//! ```
//!
//! Sign-in is a pure lookup by email: any submitted password is ignored,
//! matching the observed behaviour of the reference deployment. Sign-up
//! rejects an email that already exists.

use actix_web::{post, web};
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::ToSchema;

use crate::domain::{Error, NewUser, User};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::{ApiError, ApiResult};

/// Public subset of a user record returned by the auth endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AuthUser {
    /// Stable identifier.
    pub id: i32,
    /// Login email.
    pub email: String,
    /// Display name.
    pub name: String,
    /// Assigned role.
    pub role: String,
}

impl From<User> for AuthUser {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            name: user.name,
            role: user.role,
        }
    }
}

/// Envelope returned by both auth endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AuthResponse {
    /// The signed-up or signed-in user.
    pub user: AuthUser,
}

/// Sign-in request body. The password, when present, is not verified.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SigninRequest {
    /// Email to look up.
    #[serde(default)]
    pub email: Option<String>,
    /// Ignored; accepted for client compatibility.
    #[serde(default)]
    pub password: Option<String>,
}

fn validate_signup(payload: &NewUser) -> Result<(), Error> {
    if payload.email.trim().is_empty() {
        return Err(Error::invalid_request("email must not be empty")
            .with_details(json!({ "field": "email", "code": "empty_email" })));
    }
    if payload.name.trim().is_empty() {
        return Err(Error::invalid_request("name must not be empty")
            .with_details(json!({ "field": "name", "code": "empty_name" })));
    }
    Ok(())
}

/// Create a user after checking the email is unused.
#[utoipa::path(
    post,
    path = "/api/auth/signup",
    request_body = NewUser,
    responses(
        (status = 200, description = "User created", body = AuthResponse),
        (status = 400, description = "Invalid payload or email already exists", body = ApiError),
        (status = 500, description = "Internal server error", body = ApiError)
    ),
    tags = ["auth"],
    operation_id = "signup"
)]
#[post("/auth/signup")]
pub async fn signup(
    state: web::Data<HttpState>,
    payload: web::Json<NewUser>,
) -> ApiResult<web::Json<AuthResponse>> {
    let new_user = payload.into_inner();
    validate_signup(&new_user)?;

    // Caller-level uniqueness check; the store does not re-verify.
    if state
        .storage
        .find_user_by_email(&new_user.email)
        .await?
        .is_some()
    {
        return Err(Error::conflict("User already exists")
            .with_details(json!({ "field": "email", "code": "email_exists" }))
            .into());
    }

    let user = state.storage.create_user(new_user).await?;
    Ok(web::Json(AuthResponse { user: user.into() }))
}

/// Look a user up by email. No credential check is performed.
#[utoipa::path(
    post,
    path = "/api/auth/signin",
    request_body = SigninRequest,
    responses(
        (status = 200, description = "Sign-in success", body = AuthResponse),
        (status = 400, description = "Email missing", body = ApiError),
        (status = 401, description = "Unknown email", body = ApiError),
        (status = 500, description = "Internal server error", body = ApiError)
    ),
    tags = ["auth"],
    operation_id = "signin"
)]
#[post("/auth/signin")]
pub async fn signin(
    state: web::Data<HttpState>,
    payload: web::Json<SigninRequest>,
) -> ApiResult<web::Json<AuthResponse>> {
    // Looked up exactly as submitted; no trimming or case folding.
    let email = payload
        .email
        .as_deref()
        .filter(|email| !email.is_empty())
        .ok_or_else(|| {
            Error::invalid_request("Email is required")
                .with_details(json!({ "field": "email", "code": "empty_email" }))
        })?;

    let user = state
        .storage
        .find_user_by_email(email)
        .await?
        .ok_or_else(|| Error::unauthorized("Invalid credentials"))?;

    Ok(web::Json(AuthResponse { user: user.into() }))
}

#[cfg(test)]
mod tests {
    //! Handler coverage against a fresh in-memory backend.
    use super::*;
    use crate::inbound::http::test_utils::test_app;
    use actix_web::{http::StatusCode, test as actix_test};
    use serde_json::Value;

    fn signup_body(email: &str) -> Value {
        json!({ "email": email, "name": "Jordan Reese" })
    }

    #[actix_web::test]
    async fn signup_then_signin_round_trips() {
        let app = actix_test::init_service(test_app(HttpState::new(std::sync::Arc::new(
            crate::outbound::memory::MemoryStorage::new(),
        ))))
        .await;

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/api/auth/signup")
                .set_json(signup_body("medic@example.org"))
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(
            body.pointer("/user/email").and_then(Value::as_str),
            Some("medic@example.org")
        );
        assert_eq!(body.pointer("/user/role").and_then(Value::as_str), Some("user"));

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/api/auth/signin")
                .set_json(json!({ "email": "medic@example.org", "password": "ignored" }))
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(body.pointer("/user/id").and_then(Value::as_i64), Some(1));
    }

    #[actix_web::test]
    async fn signup_rejects_duplicate_email() {
        let app = actix_test::init_service(test_app(HttpState::new(std::sync::Arc::new(
            crate::outbound::memory::MemoryStorage::new(),
        ))))
        .await;

        for expected in [StatusCode::OK, StatusCode::BAD_REQUEST] {
            let response = actix_test::call_service(
                &app,
                actix_test::TestRequest::post()
                    .uri("/api/auth/signup")
                    .set_json(signup_body("medic@example.org"))
                    .to_request(),
            )
            .await;
            assert_eq!(response.status(), expected);
        }
    }

    #[actix_web::test]
    async fn signin_without_email_is_a_bad_request() {
        let app = actix_test::init_service(test_app(HttpState::new(std::sync::Arc::new(
            crate::outbound::memory::MemoryStorage::new(),
        ))))
        .await;

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/api/auth/signin")
                .set_json(json!({ "password": "whatever" }))
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(
            body.get("code").and_then(Value::as_str),
            Some("invalid_request")
        );
    }

    #[actix_web::test]
    async fn signin_with_unknown_email_is_unauthorised() {
        let app = actix_test::init_service(test_app(HttpState::new(std::sync::Arc::new(
            crate::outbound::memory::MemoryStorage::new(),
        ))))
        .await;

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/api/auth/signin")
                .set_json(json!({ "email": "nobody@example.org" }))
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(
            body.get("message").and_then(Value::as_str),
            Some("Invalid credentials")
        );
    }

    #[actix_web::test]
    async fn signin_matches_the_submitted_email_exactly() {
        let app = actix_test::init_service(test_app(HttpState::new(std::sync::Arc::new(
            crate::outbound::memory::MemoryStorage::new(),
        ))))
        .await;

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/api/auth/signup")
                .set_json(signup_body("medic@example.org"))
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);

        // Surrounding whitespace is part of the lookup value, not noise.
        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/api/auth/signin")
                .set_json(json!({ "email": " medic@example.org" }))
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn signup_validates_blank_fields() {
        let app = actix_test::init_service(test_app(HttpState::new(std::sync::Arc::new(
            crate::outbound::memory::MemoryStorage::new(),
        ))))
        .await;

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/api/auth/signup")
                .set_json(json!({ "email": "   ", "name": "Jordan" }))
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(
            body.pointer("/details/code").and_then(Value::as_str),
            Some("empty_email")
        );
    }
}
