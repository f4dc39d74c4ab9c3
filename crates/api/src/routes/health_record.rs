use axum::{
    Json,
    extract::{Path, State},
};
use chrono::Utc;
use serde::Deserialize;

use hostelhub_store::models::{HealthRecord, Student};
use hostelhub_store::new_id;

use crate::{error::ApiError, extractors::role::RoleUser, state::AppState};

#[derive(Debug, Deserialize)]
pub struct UpsertHealthRecordRequest {
    pub blood_group: String,
    #[serde(default)]
    pub allergies: Vec<String>,
    #[serde(default)]
    pub conditions: Vec<String>,
    pub emergency_contact: String,
    pub notes: Option<String>,
}

pub async fn get_for_student(
    State(state): State<AppState>,
    _user: RoleUser,
    Path(student_id): Path<String>,
) -> Result<Json<HealthRecord>, ApiError> {
    state
        .store
        .all::<HealthRecord>()
        .into_iter()
        .find(|r| r.student_id == student_id)
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("Health record not found".to_string()))
}

/// One record per student, created on first write and edited in place
/// afterwards.
pub async fn upsert(
    State(state): State<AppState>,
    _user: RoleUser,
    Path(student_id): Path<String>,
    Json(body): Json<UpsertHealthRecordRequest>,
) -> Result<Json<HealthRecord>, ApiError> {
    let record = state.store.with(|tx| {
        tx.get::<Student>(&student_id)?;

        let existing = tx
            .all::<HealthRecord>()
            .into_iter()
            .find(|r| r.student_id == student_id);

        match existing {
            Some(record) => tx.update::<HealthRecord>(&record.id, |r| {
                r.blood_group = body.blood_group.clone();
                r.allergies = body.allergies.clone();
                r.conditions = body.conditions.clone();
                r.emergency_contact = body.emergency_contact.clone();
                r.notes = body.notes.clone();
                r.updated_at = Utc::now();
            }),
            None => {
                let record = HealthRecord {
                    id: new_id(),
                    student_id: student_id.clone(),
                    blood_group: body.blood_group.clone(),
                    allergies: body.allergies.clone(),
                    conditions: body.conditions.clone(),
                    emergency_contact: body.emergency_contact.clone(),
                    notes: body.notes.clone(),
                    updated_at: Utc::now(),
                };
                tx.add(record.clone())?;
                Ok(record)
            }
        }
    })?;

    Ok(Json(record))
}
