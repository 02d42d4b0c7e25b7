use crate::model::quiz::QuizError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

pub type ApiError = (StatusCode, Json<ServerError>);

#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct ServerError {
    pub error_message: String,
}

impl ServerError {
    pub fn with_message<S: Into<String>>(message: S) -> Self {
        ServerError {
            error_message: message.into(),
        }
    }
}

/// Failures past validation come from the question bank or Discord, never from the caller.
impl IntoResponse for QuizError {
    fn into_response(self) -> Response {
        let status = match &self {
            QuizError::Transport(e) if e.is_timeout() => StatusCode::GATEWAY_TIMEOUT,
            _ => StatusCode::BAD_GATEWAY,
        };
        (
            status,
            Json(ServerError::with_message(format!(
                "Failed to execute the quiz command: {}",
                self
            ))),
        )
            .into_response()
    }
}
