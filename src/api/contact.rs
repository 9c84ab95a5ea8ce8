use crate::api::AppState;
use crate::api::schemas::contact::{ContactForm, ContactResponse, RawContactForm};
use crate::error::{AppError, Result};
use axum::{
    Json,
    body::Bytes,
    extract::{State, rejection::JsonRejection},
};
use serde_json::Value;

/// Submits a contact form with a strictly typed body.
///
/// # Errors
/// Returns `AppError::UnprocessableEntity` if the body does not match the schema.
/// Returns `AppError::BadRequest` if a field fails validation.
/// Returns `AppError::Storage` if the submission cannot be persisted.
pub async fn submit_contact(
    State(state): State<AppState>,
    payload: std::result::Result<Json<ContactForm>, JsonRejection>,
) -> Result<Json<ContactResponse>> {
    let Json(form) = payload.map_err(|rejection| AppError::UnprocessableEntity(rejection.body_text()))?;
    let contact = form.validate().inspect_err(|_| state.contact_service.record_rejected())?;

    let submission = state.contact_service.submit(contact).await?;
    Ok(Json(submission.into()))
}

/// Submits a contact form from any JSON object; missing fields default to empty strings.
///
/// # Errors
/// Returns `AppError::BadRequest` if the body is not a JSON object, a field is not a
/// string, or a field fails validation.
/// Returns `AppError::Storage` if the submission cannot be persisted.
pub async fn submit_contact_raw(State(state): State<AppState>, body: Bytes) -> Result<Json<ContactResponse>> {
    let value: Value =
        serde_json::from_slice(&body).map_err(|_| AppError::BadRequest("Invalid JSON format".to_string()))?;
    if !value.is_object() {
        return Err(AppError::BadRequest("Request body must be a JSON object".to_string()));
    }

    let form: RawContactForm = serde_json::from_value(value).map_err(|e| AppError::BadRequest(e.to_string()))?;
    let contact = form.validate().inspect_err(|_| state.contact_service.record_rejected())?;

    let submission = state.contact_service.submit(contact).await?;
    Ok(Json(submission.into()))
}

/// Lists every submission, oldest first.
///
/// # Errors
/// Returns `AppError::Storage` if the store cannot be read.
pub async fn list_contacts(State(state): State<AppState>) -> Result<Json<Vec<ContactResponse>>> {
    let submissions = state.contact_service.list().await?;
    Ok(Json(submissions.into_iter().map(ContactResponse::from).collect()))
}
