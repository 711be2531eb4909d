//! Favourite bookmark handlers.
//!
//! Favourites are keyed by the `(user, medication)` pair: adding an
//! existing pair replaces it rather than accumulating duplicates, and the
//! listing endpoint returns full medication records rather than bare link
//! rows.

use actix_web::{delete, get, post, web, HttpResponse};
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::ToSchema;

use crate::domain::{Error, Favorite, FavoriteKey, Medication};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::{ApiError, ApiResult};

/// Body of the favourite membership probe.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteCheck {
    /// Whether the pair is currently favourited.
    pub is_favorite: bool,
}

/// List the full medication records a user has favourited.
#[utoipa::path(
    get,
    path = "/api/users/{user_id}/favorites",
    params(("user_id" = i32, Path, description = "Owning user identifier")),
    responses(
        (status = 200, description = "Favourited medications", body = [Medication]),
        (status = 500, description = "Internal server error", body = ApiError)
    ),
    tags = ["favorites"],
    operation_id = "list_favorites"
)]
#[get("/users/{user_id}/favorites")]
pub async fn list(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
) -> ApiResult<web::Json<Vec<Medication>>> {
    let medications = state.storage.list_favorites(path.into_inner()).await?;
    Ok(web::Json(medications))
}

/// Favourite a medication for a user, replacing any existing bookmark for
/// the same pair.
#[utoipa::path(
    post,
    path = "/api/favorites",
    request_body = FavoriteKey,
    responses(
        (status = 201, description = "Favourite recorded", body = Favorite),
        (status = 400, description = "Malformed pair", body = ApiError),
        (status = 500, description = "Internal server error", body = ApiError)
    ),
    tags = ["favorites"],
    operation_id = "add_favorite"
)]
#[post("/favorites")]
pub async fn add(
    state: web::Data<HttpState>,
    payload: web::Json<FavoriteKey>,
) -> ApiResult<HttpResponse> {
    let key = payload.into_inner();
    let favorite = state
        .storage
        .add_favorite(key.user_id, key.medication_id)
        .await?;
    Ok(HttpResponse::Created().json(favorite))
}

/// Remove a favourite identified by the pair in the request body.
#[utoipa::path(
    delete,
    path = "/api/favorites",
    request_body = FavoriteKey,
    responses(
        (status = 204, description = "Favourite removed"),
        (status = 400, description = "Malformed pair", body = ApiError),
        (status = 404, description = "No such favourite", body = ApiError),
        (status = 500, description = "Internal server error", body = ApiError)
    ),
    tags = ["favorites"],
    operation_id = "remove_favorite"
)]
#[delete("/favorites")]
pub async fn remove(
    state: web::Data<HttpState>,
    payload: web::Json<FavoriteKey>,
) -> ApiResult<HttpResponse> {
    let key = payload.into_inner();
    if !state
        .storage
        .remove_favorite(key.user_id, key.medication_id)
        .await?
    {
        return Err(Error::not_found("Favorite not found")
            .with_details(json!({
                "userId": key.user_id,
                "medicationId": key.medication_id,
            }))
            .into());
    }
    Ok(HttpResponse::NoContent().finish())
}

/// Report whether a pair is currently favourited.
#[utoipa::path(
    get,
    path = "/api/favorites/check",
    params(
        ("userId" = i32, Query, description = "Owning user identifier"),
        ("medicationId" = i32, Query, description = "Medication identifier")
    ),
    responses(
        (status = 200, description = "Membership result", body = FavoriteCheck),
        (status = 400, description = "Missing query parameter", body = ApiError),
        (status = 500, description = "Internal server error", body = ApiError)
    ),
    tags = ["favorites"],
    operation_id = "check_favorite"
)]
#[get("/favorites/check")]
pub async fn check(
    state: web::Data<HttpState>,
    query: web::Query<FavoriteKey>,
) -> ApiResult<web::Json<FavoriteCheck>> {
    let key = query.into_inner();
    let is_favorite = state
        .storage
        .is_favorite(key.user_id, key.medication_id)
        .await?;
    Ok(web::Json(FavoriteCheck { is_favorite }))
}
