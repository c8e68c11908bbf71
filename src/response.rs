use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::error::AppError;

/// Envelope used for every error body the server produces.
#[derive(Debug, Serialize)]
pub struct JsonErrorResponse {
    pub status: u16,
    pub message: String,
    pub data: serde_json::Value,
}

impl JsonErrorResponse {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status: status.as_u16(),
            message: message.into(),
            data: serde_json::Value::Null,
        }
    }

    pub(crate) fn from_error(err: &AppError) -> Self {
        Self::new(status_for(err), err.message())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        JsonErrorResponse::from_error(&self).into_response()
    }
}

impl IntoResponse for JsonErrorResponse {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}

pub(crate) fn status_for(err: &AppError) -> StatusCode {
    match err {
        AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
        AppError::NotFound(_) => StatusCode::NOT_FOUND,
        AppError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
        AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

pub(crate) fn log_app_error(err: &AppError, status: StatusCode) {
    tracing::error!(status = status.as_u16(), error = %err, "request failed");
}
