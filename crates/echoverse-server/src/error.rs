//! API error handling

use axum::{
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::error;
use uuid::Uuid;

/// API error type
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: msg.into(),
        }
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: msg.into(),
        }
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self {
            status: StatusCode::CONFLICT,
            message: msg.into(),
        }
    }

    pub fn unprocessable(msg: impl Into<String>) -> Self {
        Self {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            message: msg.into(),
        }
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: msg.into(),
        }
    }

    pub fn session_not_found(id: Uuid) -> Self {
        Self::not_found(format!("Session not found: {}", id))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "error": {
                "message": self.message,
                "code": self.status.as_u16()
            }
        }));
        (self.status, body).into_response()
    }
}

impl From<echoverse_core::Error> for ApiError {
    fn from(err: echoverse_core::Error) -> Self {
        use echoverse_core::Error;

        match &err {
            Error::InvalidTone(_) | Error::InvalidVoice(_) => ApiError::bad_request(err.to_string()),
            Error::EmptyText | Error::NothingToSynthesize | Error::NoAudio => {
                ApiError::conflict(err.to_string())
            }
            Error::Decode(_) => ApiError::unprocessable(err.to_string()),
            Error::RewriteError(_) => {
                error!("{}", err);
                ApiError::internal("Error processing text")
            }
            Error::SynthesisError(_) => {
                error!("{}", err);
                ApiError::internal("Error generating audio")
            }
            _ => ApiError::internal(err.to_string()),
        }
    }
}

impl From<MultipartError> for ApiError {
    fn from(err: MultipartError) -> Self {
        Self {
            status: err.status(),
            message: format!("Invalid upload: {}", err.body_text()),
        }
    }
}
