use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use svctrack_core::SvcTrackError;

/// HTTP view of [`SvcTrackError`]: 400 for caller mistakes, 500 otherwise,
/// with the error text as a plain-text body.
#[derive(Debug)]
pub struct ApiError(pub SvcTrackError);

impl From<SvcTrackError> for ApiError {
    fn from(e: SvcTrackError) -> Self {
        Self(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = if self.0.is_client_error() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };
        if status.is_server_error() {
            tracing::error!(code = self.0.client_code().as_str(), err = %self.0, "request failed");
        } else {
            tracing::debug!(code = self.0.client_code().as_str(), err = %self.0, "request rejected");
        }
        (status, self.0.to_string()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_mapping() {
        let bad = ApiError(SvcTrackError::BadRequest("x".into())).into_response();
        assert_eq!(bad.status(), StatusCode::BAD_REQUEST);

        let ser = ApiError(SvcTrackError::Serialization("x".into())).into_response();
        assert_eq!(ser.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
