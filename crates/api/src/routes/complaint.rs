use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;

use hostelhub_services::complaint::FileComplaint;
use hostelhub_store::models::{Complaint, ComplaintCategory, ComplaintStatus};

use super::require_staff;
use crate::{error::ApiError, extractors::role::RoleUser, state::AppState};

#[derive(Debug, Deserialize)]
pub struct FileComplaintRequest {
    pub student_id: String,
    pub category: ComplaintCategory,
    pub description: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: ComplaintStatus,
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ComplaintQuery {
    pub status: Option<String>,
    pub student_id: Option<String>,
}

pub async fn list(
    State(state): State<AppState>,
    user: RoleUser,
    Query(query): Query<ComplaintQuery>,
) -> Result<Json<Vec<Complaint>>, ApiError> {
    // Students see their own complaints; staff see everything.
    if let Some(student_id) = &query.student_id {
        return Ok(Json(state.complaints.for_student(student_id)));
    }
    require_staff(&user)?;

    let status = query
        .status
        .as_deref()
        .map(|s| {
            parse_status(s).ok_or_else(|| ApiError::BadRequest(format!("Unknown status: {s}")))
        })
        .transpose()?;

    Ok(Json(state.complaints.list(status)))
}

pub async fn file(
    State(state): State<AppState>,
    _user: RoleUser,
    Json(body): Json<FileComplaintRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let complaint = state.complaints.file(FileComplaint {
        student_id: body.student_id,
        category: body.category,
        description: body.description,
    })?;

    Ok(Json(serde_json::json!({
        "success": true,
        "complaint": complaint,
    })))
}

pub async fn update_status(
    State(state): State<AppState>,
    user: RoleUser,
    Path(complaint_id): Path<String>,
    Json(body): Json<UpdateStatusRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let complaint =
        state
            .complaints
            .update_status(&complaint_id, body.status, body.notes, user.role)?;

    Ok(Json(serde_json::json!({
        "success": true,
        "complaint": complaint,
    })))
}

fn parse_status(s: &str) -> Option<ComplaintStatus> {
    match s {
        "open" => Some(ComplaintStatus::Open),
        "in_progress" => Some(ComplaintStatus::InProgress),
        "resolved" => Some(ComplaintStatus::Resolved),
        _ => None,
    }
}
