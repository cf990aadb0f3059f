//! Contact CRUD handlers.
//!
//! Each handler parses its input, runs one repository call and renders the
//! result as JSON. Input errors are turned into `ContactError` so they come
//! back as 400 instead of axum's default rejections.
//!
//! Bodies are decoded as JSON whatever their `Content-Type`, so a browser
//! `fetch` sending a plain string body works too.

use axum::{
    body::Bytes,
    extract::{rejection::PathRejection, Path, State},
    Json,
};

use contactbook_core::contact::{
    created_message, deleted_message, updated_message, Contact, ContactError, ContactMessage,
    ContactPayload,
};
use contactbook_core::storage::RepositoryError;

use crate::{handlers::AppError, state::AppState};

fn parse_id(path: Result<Path<i64>, PathRejection>) -> Result<i64, ContactError> {
    path.map(|Path(id)| id)
        .map_err(|e| ContactError::InvalidId(e.body_text()))
}

fn parse_payload(body: &[u8]) -> Result<ContactPayload, ContactError> {
    serde_json::from_slice(body).map_err(|e| ContactError::InvalidBody(e.to_string()))
}

/// List all contacts (GET /api/contacts).
pub async fn list_contacts(State(state): State<AppState>) -> Result<Json<Vec<Contact>>, AppError> {
    let contacts = state.contact_repo.list_contacts().await?;

    tracing::debug!(count = contacts.len(), "Listed contacts");

    Ok(Json(contacts))
}

/// Create a new contact (POST /api/contacts).
///
/// Any `id` in the body is ignored; the database assigns one.
pub async fn create_contact(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ContactMessage>, AppError> {
    let payload = parse_payload(&body)?;

    let id = state.contact_repo.create_contact(&payload).await?;

    tracing::info!(contact_id = id, "Created new contact");

    Ok(Json(ContactMessage::new(id, created_message())))
}

/// Get a single contact by ID (GET /api/contacts/{id}).
pub async fn get_contact(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<Contact>, AppError> {
    let id = parse_id(path)?;

    let contact = state
        .contact_repo
        .get_contact(id)
        .await?
        .ok_or_else(|| RepositoryError::contact_not_found(id))?;

    Ok(Json(contact))
}

/// Update a contact by ID (PUT /api/contacts/{id}).
///
/// An unknown id is not an error: the message reports zero affected rows.
pub async fn update_contact(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
    body: Bytes,
) -> Result<Json<ContactMessage>, AppError> {
    let id = parse_id(path)?;
    let payload = parse_payload(&body)?;

    let rows_affected = state.contact_repo.update_contact(id, &payload).await?;

    tracing::info!(contact_id = id, rows_affected, "Updated contact");

    Ok(Json(ContactMessage::new(id, updated_message(rows_affected))))
}

/// Delete a contact by ID (DELETE /api/contacts/{id}).
pub async fn delete_contact(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<ContactMessage>, AppError> {
    let id = parse_id(path)?;

    let rows_affected = state.contact_repo.delete_contact(id).await?;

    tracing::info!(contact_id = id, rows_affected, "Deleted contact");

    Ok(Json(ContactMessage::new(id, deleted_message(rows_affected))))
}
