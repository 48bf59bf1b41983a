//! Board page routes - listing and submission

use axum::extract::State;
use axum::response::{Html, Redirect};
use axum::Form;

use pinboard_core::NewMessage;

use crate::db;
use crate::error::{AppError, AppResult};
use crate::render;
use crate::state::AppState;

/// GET / - Render the full board, newest first
pub async fn index(State(state): State<AppState>) -> AppResult<Html<String>> {
    let messages = db::list_messages(state.pool())
        .await
        .map_err(AppError::Query)?;

    let page = render::render_index(state.templates(), &messages)?;
    Ok(Html(page))
}

/// POST /add - Store a submission and bounce back to the board
///
/// An absent or empty `message` field skips the insert but still
/// redirects; only a store failure breaks the redirect.
pub async fn add_message(
    State(state): State<AppState>,
    Form(form): Form<NewMessage>,
) -> AppResult<Redirect> {
    if let Some(content) = form.content() {
        db::insert_message(state.pool(), content)
            .await
            .map_err(AppError::Insert)?;
        tracing::debug!(len = content.len(), "stored message");
    }

    Ok(Redirect::to("/"))
}
