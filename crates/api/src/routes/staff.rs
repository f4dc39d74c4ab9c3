use axum::{
    Json,
    extract::{Path, State},
};
use chrono::{NaiveDate, Utc};
use serde::Deserialize;
use validator::Validate;

use hostelhub_store::models::{Shift, StaffDesignation, StaffMember};
use hostelhub_store::new_id;

use super::{require_admin, require_staff};
use crate::{error::ApiError, extractors::role::RoleUser, state::AppState};

#[derive(Debug, Deserialize, Validate)]
pub struct CreateStaffRequest {
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    pub designation: StaffDesignation,
    #[serde(default)]
    pub shift: Shift,
    pub joined_on: NaiveDate,
}

#[derive(Debug, Deserialize)]
pub struct UpdateStaffRequest {
    pub phone: Option<String>,
    pub designation: Option<StaffDesignation>,
    pub shift: Option<Shift>,
}

pub async fn list(
    State(state): State<AppState>,
    user: RoleUser,
) -> Result<Json<Vec<StaffMember>>, ApiError> {
    require_staff(&user)?;
    Ok(Json(state.store.all::<StaffMember>()))
}

pub async fn create(
    State(state): State<AppState>,
    user: RoleUser,
    Json(body): Json<CreateStaffRequest>,
) -> Result<Json<StaffMember>, ApiError> {
    require_admin(&user)?;
    body.validate()
        .map_err(|e| ApiError::Validation(e.to_string()))?;

    let now = Utc::now();
    let member = StaffMember {
        id: new_id(),
        name: body.name,
        email: body.email,
        phone: body.phone,
        designation: body.designation,
        shift: body.shift,
        joined_on: body.joined_on,
        created_at: now,
        updated_at: now,
    };
    state.store.add(member.clone())?;

    Ok(Json(member))
}

pub async fn update(
    State(state): State<AppState>,
    user: RoleUser,
    Path(staff_id): Path<String>,
    Json(body): Json<UpdateStaffRequest>,
) -> Result<Json<StaffMember>, ApiError> {
    require_admin(&user)?;

    let updated = state.store.update::<StaffMember>(&staff_id, |member| {
        if let Some(phone) = body.phone {
            member.phone = phone;
        }
        if let Some(designation) = body.designation {
            member.designation = designation;
        }
        if let Some(shift) = body.shift {
            member.shift = shift;
        }
        member.updated_at = Utc::now();
    })?;

    Ok(Json(updated))
}

pub async fn delete(
    State(state): State<AppState>,
    user: RoleUser,
    Path(staff_id): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    require_admin(&user)?;
    state.store.remove::<StaffMember>(&staff_id)?;
    Ok(Json(serde_json::json!({ "deleted": true })))
}
