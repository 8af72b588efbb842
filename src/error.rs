use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use luma_threshold::SegmentError;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Missing multipart field: {0}")]
    MissingField(&'static str),

    #[error("Invalid multipart payload: {0}")]
    InvalidMultipart(String),

    #[error("Segmentation error: {0}")]
    Segment(#[from] SegmentError),

    #[error("Storage error: {0}")]
    Storage(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::MissingField(_) => StatusCode::BAD_REQUEST,
            ApiError::InvalidMultipart(_) => StatusCode::BAD_REQUEST,
            // The client supplied bytes the selected codec cannot read.
            ApiError::Segment(SegmentError::Decode(_)) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Segment(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({
            "status": status.as_u16(),
            "error": self.to_string(),
        }));

        (status, body).into_response()
    }
}
