use axum::{Json, extract::State, http::StatusCode};

use crate::FolioError;
use crate::db::models::{Message, NewMessage};
use crate::router::AppState;

/// Contact-form submission: validate against the insertable shape, then
/// perform the one durable insert. Validation failures never reach the
/// store.
pub async fn create_message(
    State(state): State<AppState>,
    Json(input): Json<NewMessage>,
) -> Result<(StatusCode, Json<Message>), FolioError> {
    input.validate().map_err(FolioError::Validation)?;
    let stored = state.storage.create_message(input).await?;
    Ok((StatusCode::CREATED, Json(stored)))
}
