use crate::app_error::AppError;
use axum::Json;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

#[derive(Serialize)]
struct ErrorBody {
    success: bool,
    error: String,
    details: &'static str,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Log the error before it gets converted into a status response.
        match &self {
            AppError::InvalidInput(_) | AppError::MalformedRequest(_) => {
                tracing::warn!(error = %self, "Request rejected")
            }
            _ => tracing::error!(error = %self, "Request failed"),
        }

        match self {
            AppError::InvalidInput(err) => {
                error_resp(StatusCode::BAD_REQUEST, err.to_string(), err.details())
            }
            AppError::MalformedRequest(_) => error_resp(
                StatusCode::BAD_REQUEST,
                "Invalid request format".into(),
                "Please send valid JSON data",
            ),
            AppError::Configuration(_) => error_resp(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Server configuration error".into(),
                "Email service is not properly configured",
            ),
            AppError::MailDispatch(_) | AppError::Internal(_) => error_resp(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to join waitlist".into(),
                "Please try again later or contact support",
            ),
        }
    }
}

fn error_resp(status: StatusCode, error: String, details: &'static str) -> Response {
    let body = ErrorBody {
        success: false,
        error,
        details,
    };
    (status, Json(body)).into_response()
}
