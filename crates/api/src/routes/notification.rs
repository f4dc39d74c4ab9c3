use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;

use hostelhub_store::models::{Notification, NotificationPriority, Role};

use super::require_admin;
use crate::{error::ApiError, extractors::role::RoleUser, state::AppState};

#[derive(Debug, Deserialize)]
pub struct NotificationQuery {
    /// Required for student callers; staff roles list by role instead.
    pub student_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct AnnounceRequest {
    pub title: String,
    pub message: String,
    #[serde(default)]
    pub priority: NotificationPriority,
    pub target_roles: Vec<Role>,
}

pub async fn list(
    State(state): State<AppState>,
    user: RoleUser,
    Query(query): Query<NotificationQuery>,
) -> Result<Json<Vec<Notification>>, ApiError> {
    let notifications = match user.role {
        Role::Student => {
            let student_id = query.student_id.ok_or_else(|| {
                ApiError::BadRequest("student_id query parameter is required".to_string())
            })?;
            state.notifications.for_student(&student_id)
        }
        role => state.notifications.for_role(role),
    };
    Ok(Json(notifications))
}

pub async fn announce(
    State(state): State<AppState>,
    user: RoleUser,
    Json(body): Json<AnnounceRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    require_admin(&user)?;
    let notification = state.notifications.announce(
        &body.title,
        &body.message,
        body.priority,
        body.target_roles,
    )?;

    Ok(Json(serde_json::json!({
        "success": true,
        "notification": notification,
    })))
}

pub async fn mark_read(
    State(state): State<AppState>,
    _user: RoleUser,
    Path(notification_id): Path<String>,
) -> Result<Json<Notification>, ApiError> {
    let notification = state.notifications.mark_read(&notification_id)?;
    Ok(Json(notification))
}

pub async fn dismiss(
    State(state): State<AppState>,
    _user: RoleUser,
    Path(notification_id): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    state.notifications.dismiss(&notification_id)?;
    Ok(Json(serde_json::json!({ "dismissed": true })))
}
