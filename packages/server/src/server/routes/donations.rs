//! CRUD handlers for the `/api/donations` resource.
//!
//! Each handler maps one HTTP verb to a single store call. Failures convert
//! to responses at this boundary via [`ApiError`].

use axum::extract::rejection::JsonRejection;
use axum::extract::{Extension, Path};
use axum::http::StatusCode;
use axum::Json;

use crate::common::{ApiError, DonationId, MessageBody};
use crate::domains::donations::{Donation, DonationInput};
use crate::server::app::AppState;

/// Parse a donation ID from the request path.
///
/// A malformed UUID is a client error, matching the original API's
/// cast-error behavior.
fn parse_id(raw: &str) -> Result<DonationId, ApiError> {
    DonationId::parse(raw)
        .map_err(|_| ApiError::Validation(format!("Invalid donation id: {raw}")))
}

/// Deserialize the request body, converting rejections (malformed JSON,
/// missing fields, non-numeric `amount`) into validation errors.
fn parse_body(payload: Result<Json<DonationInput>, JsonRejection>) -> Result<DonationInput, ApiError> {
    let Json(input) = payload.map_err(|rejection| ApiError::Validation(rejection.body_text()))?;
    input.validate()?;
    Ok(input)
}

/// GET /api/donations - full collection, insertion order
pub async fn list_donations(
    Extension(state): Extension<AppState>,
) -> Result<Json<Vec<Donation>>, ApiError> {
    let donations = Donation::find_all(&state.db_pool).await?;
    Ok(Json(donations))
}

/// POST /api/donations - create a donation, store assigns id and date
pub async fn create_donation(
    Extension(state): Extension<AppState>,
    payload: Result<Json<DonationInput>, JsonRejection>,
) -> Result<(StatusCode, Json<Donation>), ApiError> {
    let input = parse_body(payload)?;

    let donation = Donation::create(input, &state.db_pool).await?;
    tracing::debug!(id = %donation.id, "Donation created");

    Ok((StatusCode::CREATED, Json(donation)))
}

/// PUT /api/donations/:id - full replacement of the three mutable fields
pub async fn update_donation(
    Extension(state): Extension<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<DonationInput>, JsonRejection>,
) -> Result<Json<Donation>, ApiError> {
    let id = parse_id(&id)?;
    let input = parse_body(payload)?;

    let donation = Donation::update(id, input, &state.db_pool)
        .await?
        .ok_or(ApiError::NotFound("Donation not found"))?;

    Ok(Json(donation))
}

/// DELETE /api/donations/:id - remove a donation
pub async fn delete_donation(
    Extension(state): Extension<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageBody>, ApiError> {
    let id = parse_id(&id)?;

    let deleted = Donation::delete(id, &state.db_pool).await?;
    if !deleted {
        return Err(ApiError::NotFound("Donation not found"));
    }

    Ok(Json(MessageBody::new("Donation deleted")))
}
