//! Error types for pinboard-server
//!
//! Store failures surface to the client as a plaintext body carrying the
//! backend detail, matching the board's contract. The 500 arms also log
//! through tracing so the detail lands in the server log.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Error, Debug)]
pub enum AppError {
    /// Listing the board failed.
    #[error("Database Error: {0}")]
    Query(#[source] sqlx::Error),

    /// Inserting a submission failed.
    #[error("Error: {0}")]
    Insert(#[source] sqlx::Error),

    /// The page template failed to render.
    #[error("Template Error: {0}")]
    Render(#[from] minijinja::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Query(e) | AppError::Insert(e) => {
                tracing::error!("database error: {}", e);
            }
            AppError::Render(e) => {
                tracing::error!("template error: {}", e);
            }
        }

        // A String body is served as text/plain.
        (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()).into_response()
    }
}
