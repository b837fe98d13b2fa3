use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    routing::post,
};
use serde::Serialize;
use std::sync::Arc;

use crate::{
    adapters::http::app_state::AppState,
    app_error::{AppError, AppResult},
    domain::entities::waitlist_submission::WaitlistSubmission,
    use_cases::waitlist::{WaitlistPayload, WaitlistUseCases},
};

pub fn router() -> Router<AppState> {
    Router::new().route("/waitlist", post(join_waitlist))
}

#[derive(Serialize)]
struct JoinWaitlistResponse {
    success: bool,
    message: &'static str,
    details: &'static str,
}

/// POST /api/waitlist
/// Validates the landing page form and sends the welcome (and operator
/// notification) emails.
async fn join_waitlist(
    State(use_cases): State<Arc<WaitlistUseCases>>,
    payload: Result<Json<WaitlistPayload>, JsonRejection>,
) -> AppResult<Json<JoinWaitlistResponse>> {
    // Without mail credentials nothing can succeed, whatever was submitted.
    use_cases.ensure_configured()?;

    let Json(payload) =
        payload.map_err(|rejection| AppError::MalformedRequest(rejection.body_text()))?;
    let submission = WaitlistSubmission::try_from(payload)?;

    use_cases.join(submission).await?;

    Ok(Json(JoinWaitlistResponse {
        success: true,
        message: "Successfully joined waitlist!",
        details: "Check your email for a welcome message",
    }))
}
