use axum::{
    Json,
    extract::{Path, State},
};
use chrono::Utc;
use serde::Deserialize;
use validator::Validate;

use hostelhub_services::student::RegisterStudent;
use hostelhub_store::models::Student;

use super::{require_manager, require_staff};
use crate::{error::ApiError, extractors::role::RoleUser, state::AppState};

#[derive(Debug, Deserialize, Validate)]
pub struct CreateStudentRequest {
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub guardian_name: String,
    #[serde(default)]
    pub guardian_phone: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateStudentRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub guardian_name: Option<String>,
    pub guardian_phone: Option<String>,
}

pub async fn list(
    State(state): State<AppState>,
    user: RoleUser,
) -> Result<Json<Vec<Student>>, ApiError> {
    require_staff(&user)?;
    Ok(Json(state.store.all::<Student>()))
}

pub async fn create(
    State(state): State<AppState>,
    user: RoleUser,
    Json(body): Json<CreateStudentRequest>,
) -> Result<Json<Student>, ApiError> {
    require_manager(&user)?;
    body.validate()
        .map_err(|e| ApiError::Validation(e.to_string()))?;

    let student = state.students.register(RegisterStudent {
        name: body.name,
        email: body.email,
        phone: body.phone,
        guardian_name: body.guardian_name,
        guardian_phone: body.guardian_phone,
    })?;

    Ok(Json(student))
}

pub async fn get(
    State(state): State<AppState>,
    _user: RoleUser,
    Path(student_id): Path<String>,
) -> Result<Json<Student>, ApiError> {
    let student = state.store.get::<Student>(&student_id)?;
    Ok(Json(student))
}

pub async fn update(
    State(state): State<AppState>,
    user: RoleUser,
    Path(student_id): Path<String>,
    Json(body): Json<UpdateStudentRequest>,
) -> Result<Json<Student>, ApiError> {
    require_manager(&user)?;

    let updated = state.store.update::<Student>(&student_id, |student| {
        if let Some(name) = body.name {
            student.name = name;
        }
        if let Some(email) = body.email {
            student.email = email;
        }
        if let Some(phone) = body.phone {
            student.phone = phone;
        }
        if let Some(guardian_name) = body.guardian_name {
            student.guardian_name = guardian_name;
        }
        if let Some(guardian_phone) = body.guardian_phone {
            student.guardian_phone = guardian_phone;
        }
        student.updated_at = Utc::now();
    })?;

    Ok(Json(updated))
}

pub async fn delete(
    State(state): State<AppState>,
    user: RoleUser,
    Path(student_id): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    require_manager(&user)?;
    state.students.remove(&student_id)?;
    Ok(Json(serde_json::json!({ "deleted": true })))
}
