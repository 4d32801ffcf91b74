use axum::{Json, extract::State};

use crate::FolioError;
use crate::db::models::{Project, Skill};
use crate::router::AppState;

/// Full project list, ascending id order.
pub async fn list_projects(
    State(state): State<AppState>,
) -> Result<Json<Vec<Project>>, FolioError> {
    Ok(Json(state.storage.get_projects().await?))
}

/// Full skill list, descending proficiency order.
pub async fn list_skills(State(state): State<AppState>) -> Result<Json<Vec<Skill>>, FolioError> {
    Ok(Json(state.storage.get_skills().await?))
}
