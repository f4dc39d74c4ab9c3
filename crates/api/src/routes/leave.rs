use axum::{
    Json,
    extract::{Path, Query, State},
};
use chrono::{NaiveDate, Utc};
use serde::Deserialize;

use hostelhub_services::export::{self, ExportFormat};
use hostelhub_services::leave::{LeaveStatistics, SubmitLeave};
use hostelhub_store::models::{LeaveApplication, LeaveStatus, LeaveType};

use super::require_staff;
use crate::{error::ApiError, extractors::role::RoleUser, state::AppState};

#[derive(Debug, Deserialize)]
pub struct SubmitLeaveRequest {
    pub student_id: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub reason: String,
    pub leave_type: LeaveType,
}

#[derive(Debug, Deserialize)]
pub struct RemarksRequest {
    pub remarks: String,
}

#[derive(Debug, Deserialize)]
pub struct LeaveQuery {
    pub status: Option<String>,
    pub student_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ExportRequest {
    pub format: String,
    #[serde(default = "default_filter")]
    pub status: String,
}

fn default_filter() -> String {
    "all".to_string()
}

pub async fn list(
    State(state): State<AppState>,
    user: RoleUser,
    Query(query): Query<LeaveQuery>,
) -> Result<Json<Vec<LeaveApplication>>, ApiError> {
    if let Some(student_id) = &query.student_id {
        return Ok(Json(state.leaves.for_student(student_id)));
    }
    require_staff(&user)?;

    let status = parse_filter(&query.status.unwrap_or_else(default_filter))?;
    Ok(Json(state.leaves.list(status)))
}

pub async fn submit(
    State(state): State<AppState>,
    _user: RoleUser,
    Json(body): Json<SubmitLeaveRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let application = state.leaves.submit(SubmitLeave {
        student_id: body.student_id,
        start_date: body.start_date,
        end_date: body.end_date,
        reason: body.reason,
        leave_type: body.leave_type,
    })?;

    Ok(Json(serde_json::json!({
        "success": true,
        "application": application,
    })))
}

pub async fn recommend(
    State(state): State<AppState>,
    user: RoleUser,
    Path(leave_id): Path<String>,
    Json(body): Json<RemarksRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let application = state.leaves.recommend(&leave_id, &body.remarks, user.role)?;

    Ok(Json(serde_json::json!({
        "success": true,
        "application": application,
    })))
}

pub async fn approve(
    State(state): State<AppState>,
    user: RoleUser,
    Path(leave_id): Path<String>,
    Json(body): Json<RemarksRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let application = state.leaves.approve(&leave_id, &body.remarks, user.role)?;

    Ok(Json(serde_json::json!({
        "success": true,
        "application": application,
    })))
}

pub async fn reject(
    State(state): State<AppState>,
    user: RoleUser,
    Path(leave_id): Path<String>,
    Json(body): Json<RemarksRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let application = state.leaves.reject(&leave_id, &body.remarks, user.role)?;

    Ok(Json(serde_json::json!({
        "success": true,
        "application": application,
    })))
}

pub async fn statistics(
    State(state): State<AppState>,
    user: RoleUser,
) -> Result<Json<LeaveStatistics>, ApiError> {
    require_staff(&user)?;
    Ok(Json(state.leaves.statistics()))
}

/// Builds the export row set. The caller (UI) owns the download mechanics;
/// this endpoint returns the encoded content in the response body.
pub async fn export(
    State(state): State<AppState>,
    user: RoleUser,
    Json(body): Json<ExportRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    require_staff(&user)?;

    let format = ExportFormat::parse(&body.format)
        .ok_or_else(|| ApiError::BadRequest(format!("Unknown export format: {}", body.format)))?;
    let filter = parse_filter(&body.status)?;
    let rows = state.leaves.export_rows(filter);

    let response = match format {
        ExportFormat::Csv => serde_json::json!({
            "success": true,
            "format": "csv",
            "content_type": format.content_type(),
            "total_applications": rows.len(),
            "content": export::to_csv(&rows),
        }),
        ExportFormat::Json => serde_json::json!({
            "success": true,
            "format": "json",
            "content_type": format.content_type(),
            "total_applications": rows.len(),
            "export": export::to_json(&rows, Utc::now()),
        }),
    };

    Ok(Json(response))
}

fn parse_filter(raw: &str) -> Result<Option<LeaveStatus>, ApiError> {
    if raw == "all" {
        return Ok(None);
    }
    LeaveStatus::parse(raw)
        .map(Some)
        .ok_or_else(|| ApiError::BadRequest(format!("Unknown status: {raw}")))
}
