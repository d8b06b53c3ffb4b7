//! Contact Routes
//!
//! - POST /api/v1/contact - Validate a contact submission (JSON)

use axum::Json;

use crate::api::dto::ContactResponse;
use crate::api::error::ApiResult;
use crate::contact::{ContactSubmission, ACCEPTED_MESSAGE};

/// POST /api/v1/contact
///
/// Returns 400 naming the missing fields when any field is empty.
pub async fn submit(Json(submission): Json<ContactSubmission>) -> ApiResult<Json<ContactResponse>> {
    submission.validate()?;

    tracing::info!("Contact submission accepted");

    Ok(Json(ContactResponse {
        status: "ok".to_string(),
        message: ACCEPTED_MESSAGE.to_string(),
    }))
}
