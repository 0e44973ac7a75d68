use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use common::types::MessageBody;
use service::errors::ServiceError;
use thiserror::Error;
use tracing::{error, warn};

pub const SERVER_ERROR_MSG: &str = "Server Error";

/// JSON error response: `{"message": ...}` with the mapped status.
#[derive(Debug, Error)]
#[error("{status}: {message}")]
pub struct JsonApiError {
    pub status: StatusCode,
    pub message: String,
}

impl JsonApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self { status, message: message.into() }
    }

    /// Log at the failure site and classify. Storage details never reach the client.
    pub fn from_service(op: &'static str, e: ServiceError) -> Self {
        let (status, message) = classify(op, &e);
        Self::new(status, message)
    }
}

fn classify(op: &'static str, e: &ServiceError) -> (StatusCode, String) {
    match e {
        ServiceError::Validation(m) => {
            warn!(op, reason = %m, "rejected invalid request");
            (StatusCode::BAD_REQUEST, m.clone())
        }
        ServiceError::NotFound(m) => {
            warn!(op, reason = %m, "record not found");
            (StatusCode::NOT_FOUND, m.clone())
        }
        ServiceError::Storage(m) => {
            error!(op, error = %m, "storage operation failed");
            (StatusCode::INTERNAL_SERVER_ERROR, SERVER_ERROR_MSG.to_string())
        }
    }
}

impl From<JsonRejection> for JsonApiError {
    fn from(rejection: JsonRejection) -> Self {
        // keep 413/415, everything else about the body is a bad request
        let status = match rejection.status() {
            s @ (StatusCode::PAYLOAD_TOO_LARGE | StatusCode::UNSUPPORTED_MEDIA_TYPE) => s,
            _ => StatusCode::BAD_REQUEST,
        };
        let reason = rejection.body_text();
        warn!(%status, %reason, "rejected request body");
        Self::new(status, reason)
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        (self.status, Json(MessageBody::new(self.message))).into_response()
    }
}

/// Plain-text error for the HTML page route.
#[derive(Debug, Error)]
#[error("{status}: {message}")]
pub struct PageError {
    pub status: StatusCode,
    pub message: String,
}

impl PageError {
    pub fn from_service(op: &'static str, e: ServiceError) -> Self {
        let (status, message) = classify(op, &e);
        Self { status, message }
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        (self.status, self.message).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_errors_map_to_status() {
        let v = JsonApiError::from_service("test", ServiceError::invalid_id());
        assert_eq!(v.status, StatusCode::BAD_REQUEST);
        assert_eq!(v.message, "Invalid product ID");

        let n = JsonApiError::from_service("test", ServiceError::not_found("Product"));
        assert_eq!(n.status, StatusCode::NOT_FOUND);
        assert_eq!(n.message, "Product not found");

        let s = JsonApiError::from_service("test", ServiceError::Storage("connection refused".into()));
        assert_eq!(s.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(s.message, SERVER_ERROR_MSG);
    }

    #[test]
    fn page_errors_are_plain_text() {
        let res = PageError::from_service("test", ServiceError::not_found("Product")).into_response();
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        let ct = res.headers().get(axum::http::header::CONTENT_TYPE).unwrap();
        assert!(ct.to_str().unwrap().starts_with("text/plain"));
    }
}
