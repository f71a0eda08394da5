use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tracing::warn;

use crate::error::{ErrorKind, RosterError};

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub detail: String,
}

pub fn error_response(status: StatusCode, detail: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorBody {
            detail: detail.into(),
        }),
    )
        .into_response()
}

impl RosterError {
    pub fn status_code(&self) -> StatusCode {
        match self.kind() {
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::Conflict | ErrorKind::CapacityExceeded => StatusCode::BAD_REQUEST,
            ErrorKind::Storage => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for RosterError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if self.kind() == ErrorKind::Storage {
            warn!("roster storage failure: {}", self);
            return error_response(status, "Internal server error");
        }
        error_response(status, self.to_string())
    }
}
