use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Json as AxumJson, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::points::PointsError;

/// Failures a receipt endpoint can report. Every variant renders as
/// `{"message": ...}`.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{}", .0.body_text())]
    InvalidBody(#[from] JsonRejection),
    #[error("error calculating points")]
    Points(#[from] PointsError),
    #[error("receipt not found")]
    ReceiptNotFound,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            ApiError::Points(_) | ApiError::ReceiptNotFound => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::InvalidBody(rejection) => {
                tracing::warn!("Rejected receipt body: {}", rejection.body_text());
            }
            ApiError::Points(e) => tracing::warn!("Points calculation failed: {}", e),
            ApiError::ReceiptNotFound => {}
        }
        (self.status(), AxumJson(json!({ "message": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn points_failures_hide_the_cause() {
        let err = ApiError::from(PointsError::MissingDay { date: "x".to_string() });
        assert_eq!(err.to_string(), "error calculating points");
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn not_found_message() {
        let response = ApiError::ReceiptNotFound.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
