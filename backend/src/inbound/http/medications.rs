//! Medication catalogue handlers.
//!
//! List, fetch, create, update and delete medication records. Listing
//! accepts optional query filters which combine with AND semantics; text
//! search is a case-insensitive substring match across name, indications,
//! contraindications and classification.

use actix_web::{delete, get, post, put, web, HttpResponse};
use serde_json::json;

use crate::domain::{Error, Medication, MedicationFilters, MedicationUpdate, NewMedication};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::{ApiError, ApiResult};

fn medication_not_found(id: i32) -> Error {
    Error::not_found("Medication not found").with_details(json!({ "medicationId": id }))
}

fn validate_new_medication(payload: &NewMedication) -> Result<(), Error> {
    if payload.name.trim().is_empty() {
        return Err(Error::invalid_request("name must not be empty")
            .with_details(json!({ "field": "name", "code": "empty_name" })));
    }
    Ok(())
}

/// List medications matching the supplied filters, sorted by name.
#[utoipa::path(
    get,
    path = "/api/medications",
    params(MedicationFilters),
    responses(
        (status = 200, description = "Matching medications", body = [Medication]),
        (status = 400, description = "Invalid filter value", body = ApiError),
        (status = 500, description = "Internal server error", body = ApiError)
    ),
    tags = ["medications"],
    operation_id = "list_medications"
)]
#[get("/medications")]
pub async fn list(
    state: web::Data<HttpState>,
    filters: web::Query<MedicationFilters>,
) -> ApiResult<web::Json<Vec<Medication>>> {
    let filters = filters.into_inner();
    let medications = state.storage.list_medications(&filters).await?;
    Ok(web::Json(medications))
}

/// Fetch a single medication by id.
#[utoipa::path(
    get,
    path = "/api/medications/{id}",
    params(("id" = i32, Path, description = "Medication identifier")),
    responses(
        (status = 200, description = "The medication", body = Medication),
        (status = 404, description = "Unknown medication", body = ApiError),
        (status = 500, description = "Internal server error", body = ApiError)
    ),
    tags = ["medications"],
    operation_id = "get_medication"
)]
#[get("/medications/{id}")]
pub async fn get(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
) -> ApiResult<web::Json<Medication>> {
    let id = path.into_inner();
    let medication = state
        .storage
        .find_medication(id)
        .await?
        .ok_or_else(|| medication_not_found(id))?;
    Ok(web::Json(medication))
}

/// Create a medication record.
#[utoipa::path(
    post,
    path = "/api/medications",
    request_body = NewMedication,
    responses(
        (status = 201, description = "Medication created", body = Medication),
        (status = 400, description = "Invalid payload", body = ApiError),
        (status = 500, description = "Internal server error", body = ApiError)
    ),
    tags = ["medications"],
    operation_id = "create_medication"
)]
#[post("/medications")]
pub async fn create(
    state: web::Data<HttpState>,
    payload: web::Json<NewMedication>,
) -> ApiResult<HttpResponse> {
    let new_medication = payload.into_inner();
    validate_new_medication(&new_medication)?;
    let medication = state.storage.create_medication(new_medication).await?;
    Ok(HttpResponse::Created().json(medication))
}

/// Apply a partial update. Absent fields keep their stored value; fields
/// sent as explicit `null` are cleared where the column is optional.
#[utoipa::path(
    put,
    path = "/api/medications/{id}",
    params(("id" = i32, Path, description = "Medication identifier")),
    request_body = MedicationUpdate,
    responses(
        (status = 200, description = "Updated medication", body = Medication),
        (status = 404, description = "Unknown medication", body = ApiError),
        (status = 500, description = "Internal server error", body = ApiError)
    ),
    tags = ["medications"],
    operation_id = "update_medication"
)]
#[put("/medications/{id}")]
pub async fn update(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
    payload: web::Json<MedicationUpdate>,
) -> ApiResult<web::Json<Medication>> {
    let id = path.into_inner();
    let medication = state
        .storage
        .update_medication(id, payload.into_inner())
        .await?
        .ok_or_else(|| medication_not_found(id))?;
    Ok(web::Json(medication))
}

/// Delete a medication and any favourites that reference it.
#[utoipa::path(
    delete,
    path = "/api/medications/{id}",
    params(("id" = i32, Path, description = "Medication identifier")),
    responses(
        (status = 204, description = "Medication deleted"),
        (status = 404, description = "Unknown medication", body = ApiError),
        (status = 500, description = "Internal server error", body = ApiError)
    ),
    tags = ["medications"],
    operation_id = "delete_medication"
)]
#[delete("/medications/{id}")]
pub async fn remove(state: web::Data<HttpState>, path: web::Path<i32>) -> ApiResult<HttpResponse> {
    let id = path.into_inner();
    if !state.storage.delete_medication(id).await? {
        return Err(medication_not_found(id).into());
    }
    Ok(HttpResponse::NoContent().finish())
}
