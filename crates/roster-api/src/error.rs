use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use roster_data::Error as MemberError;

#[derive(Error, Debug)]
#[error(transparent)]
pub struct ApiError(#[from] pub MemberError);

#[derive(Serialize)]
struct ErrorBody {
    err: ErrorPayload,
}

#[derive(Serialize)]
struct ErrorPayload {
    code: u16,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let code = self.0.status_code();
        let status = StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if self.0.is_internal() {
            tracing::error!(error = %self.0, "request failed");
        } else {
            tracing::debug!(error = %self.0, "request rejected");
        }

        let body = ErrorBody {
            err: ErrorPayload {
                code,
                message: self.0.to_string(),
            },
        };
        (status, Json(body)).into_response()
    }
}
