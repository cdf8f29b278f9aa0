use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use database::StoreError;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    BadRequest(String),
    Conflict(String),
    InternalError(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound(message) => (StatusCode::NOT_FOUND, message),
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            ApiError::Conflict(message) => (StatusCode::CONFLICT, message),
            ApiError::InternalError(message) => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        (status, message).into_response()
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::MatchNotFound(_)
            | StoreError::PlayerNotFound(_)
            | StoreError::TeamNotFound(_)
            | StoreError::TenantNotFound(_) => ApiError::NotFound(err.to_string()),
            StoreError::ReportAlreadySubmitted(_) | StoreError::MatchCancelled(_) => {
                ApiError::Conflict(err.to_string())
            }
            StoreError::TransfersDisabled | StoreError::InvalidEvent(_) => {
                ApiError::BadRequest(err.to_string())
            }
        }
    }
}
