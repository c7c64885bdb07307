use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::authentication::SessionError;

#[derive(Debug, Error)]
pub enum WebError {
    #[error("Failed to render view: {0}")]
    Render(#[from] askama::Error),

    #[error("Session error: {0}")]
    Session(#[from] SessionError),
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "Request failed");

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            StatusCode::INTERNAL_SERVER_ERROR.to_string(),
        )
            .into_response()
    }
}
