//! HTTP API endpoint handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::{
    infrastructure::dto::http::{GroupDetailDto, GroupSummaryDto},
    ui::state::AppState,
    usecase::GetGroupDetailError,
};

/// Health check endpoint
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}

/// Get list of groups
pub async fn get_groups(State(state): State<Arc<AppState>>) -> Json<Vec<GroupSummaryDto>> {
    let groups = state.get_groups_usecase.execute().await;

    // Domain Model から DTO への変換
    Json(groups.iter().map(GroupSummaryDto::from).collect())
}

/// Get group detail by name
pub async fn get_group_detail(
    State(state): State<Arc<AppState>>,
    Path(group_name): Path<String>,
) -> Result<Json<GroupDetailDto>, StatusCode> {
    match state.get_group_detail_usecase.execute(group_name).await {
        Ok(group) => Ok(Json(GroupDetailDto::from(&group))),
        Err(GetGroupDetailError::GroupNotFound(name)) => {
            tracing::debug!("Group '{}' not found", name);
            Err(StatusCode::NOT_FOUND)
        }
    }
}
