//! Contact form route handler.
//!
//! No enquiry is stored server-side; the response carries a prefilled
//! WhatsApp link and the conversation continues there.

use axum::Json;
use axum::extract::State;
use serde::Serialize;
use tracing::instrument;

use crate::error::AppError;
use crate::state::AppState;
use crate::whatsapp::{self, ContactDetails};

/// Response body: confirmation plus the prefilled handoff link.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactResponse {
    pub message: &'static str,
    pub whatsapp_url: String,
}

/// Hand a contact enquiry off to WhatsApp.
#[instrument(skip(state, details), fields(subject = %details.subject))]
pub async fn submit(
    State(state): State<AppState>,
    Json(details): Json<ContactDetails>,
) -> Result<Json<ContactResponse>, AppError> {
    if !details.is_complete() {
        return Err(AppError::BadRequest(
            "Please fill in all required fields".to_owned(),
        ));
    }

    let message = whatsapp::contact_message(&details);
    let whatsapp_url = whatsapp::handoff_url(state.config().whatsapp_link.as_str(), &message);

    tracing::info!("Contact enquiry handed off to WhatsApp");
    Ok(Json(ContactResponse {
        message: "Message sent successfully!",
        whatsapp_url,
    }))
}
