use axum::{
    Json,
    extract::{Path, State},
};
use chrono::Utc;
use serde::Deserialize;
use validator::Validate;

use hostelhub_store::models::{Room, RoomStatus, Student};
use hostelhub_store::new_id;

use super::{require_manager, require_staff};
use crate::{error::ApiError, extractors::role::RoleUser, state::AppState};

#[derive(Debug, Deserialize, Validate)]
pub struct CreateRoomRequest {
    pub number: String,
    pub floor: u32,
    #[validate(range(min = 1, max = 8))]
    pub capacity: u32,
}

#[derive(Debug, Deserialize)]
pub struct UpdateRoomRequest {
    pub capacity: Option<u32>,
    pub status: Option<RoomStatus>,
}

#[derive(Debug, Deserialize)]
pub struct AllocationRequest {
    pub student_id: String,
}

pub async fn list(
    State(state): State<AppState>,
    user: RoleUser,
) -> Result<Json<Vec<Room>>, ApiError> {
    require_staff(&user)?;
    Ok(Json(state.store.all::<Room>()))
}

pub async fn create(
    State(state): State<AppState>,
    user: RoleUser,
    Json(body): Json<CreateRoomRequest>,
) -> Result<Json<Room>, ApiError> {
    require_manager(&user)?;
    body.validate()
        .map_err(|e| ApiError::Validation(e.to_string()))?;

    if state
        .store
        .all::<Room>()
        .iter()
        .any(|r| r.number == body.number)
    {
        return Err(ApiError::Conflict(format!(
            "Room {} already exists",
            body.number
        )));
    }

    let now = Utc::now();
    let room = Room {
        id: new_id(),
        number: body.number,
        floor: body.floor,
        capacity: body.capacity,
        occupant_ids: Vec::new(),
        status: RoomStatus::Available,
        created_at: now,
        updated_at: now,
    };
    state.store.add(room.clone())?;

    Ok(Json(room))
}

pub async fn get(
    State(state): State<AppState>,
    user: RoleUser,
    Path(room_id): Path<String>,
) -> Result<Json<Room>, ApiError> {
    require_staff(&user)?;
    let room = state.store.get::<Room>(&room_id)?;
    Ok(Json(room))
}

pub async fn update(
    State(state): State<AppState>,
    user: RoleUser,
    Path(room_id): Path<String>,
    Json(body): Json<UpdateRoomRequest>,
) -> Result<Json<Room>, ApiError> {
    require_manager(&user)?;

    let updated = state.store.update::<Room>(&room_id, |room| {
        if let Some(capacity) = body.capacity {
            room.capacity = capacity;
        }
        if let Some(status) = body.status {
            room.status = status;
        }
        room.updated_at = Utc::now();
    })?;

    Ok(Json(updated))
}

pub async fn delete(
    State(state): State<AppState>,
    user: RoleUser,
    Path(room_id): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    require_manager(&user)?;

    let room = state.store.get::<Room>(&room_id)?;
    if !room.occupant_ids.is_empty() {
        return Err(ApiError::Conflict(format!(
            "Room {} still has occupants",
            room.number
        )));
    }
    state.store.remove::<Room>(&room_id)?;

    Ok(Json(serde_json::json!({ "deleted": true })))
}

pub async fn allocate(
    State(state): State<AppState>,
    user: RoleUser,
    Path(room_id): Path<String>,
    Json(body): Json<AllocationRequest>,
) -> Result<Json<Room>, ApiError> {
    require_manager(&user)?;
    let room = state.rooms.allocate(&room_id, &body.student_id)?;
    Ok(Json(room))
}

pub async fn vacate(
    State(state): State<AppState>,
    user: RoleUser,
    Json(body): Json<AllocationRequest>,
) -> Result<Json<Student>, ApiError> {
    require_manager(&user)?;
    let student = state.rooms.vacate(&body.student_id)?;
    Ok(Json(student))
}
