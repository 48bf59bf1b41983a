//! Route handlers for the pinboard board
//!
//! Organized by concern:
//! - pages: the HTML board (listing + submission)
//! - health: liveness probe

pub mod health;
pub mod pages;

use axum::routing::{get, post};
use axum::Router;

use crate::state::AppState;

/// The full three-route surface.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(pages::index))
        .route("/add", post(pages::add_message))
        .route("/health", get(health::health))
}
