use axum::{
    Json,
    extract::{Path, Query, State},
};
use chrono::{NaiveDate, Utc};
use serde::Deserialize;

use hostelhub_services::fee::CreateFee;
use hostelhub_store::models::FeeRecord;

use super::{require_admin, require_manager, require_staff};
use crate::{error::ApiError, extractors::role::RoleUser, state::AppState};

#[derive(Debug, Deserialize)]
pub struct CreateFeeRequest {
    pub student_id: String,
    pub term: String,
    pub amount_due: u64,
    pub due_date: NaiveDate,
}

#[derive(Debug, Deserialize)]
pub struct PaymentRequest {
    pub amount: u64,
}

#[derive(Debug, Deserialize)]
pub struct FeeQuery {
    pub student_id: Option<String>,
}

pub async fn list(
    State(state): State<AppState>,
    user: RoleUser,
    Query(query): Query<FeeQuery>,
) -> Result<Json<Vec<FeeRecord>>, ApiError> {
    if let Some(student_id) = &query.student_id {
        return Ok(Json(state.fees.for_student(student_id)));
    }
    require_staff(&user)?;
    Ok(Json(state.fees.list()))
}

pub async fn create(
    State(state): State<AppState>,
    user: RoleUser,
    Json(body): Json<CreateFeeRequest>,
) -> Result<Json<FeeRecord>, ApiError> {
    require_manager(&user)?;

    let record = state.fees.create(CreateFee {
        student_id: body.student_id,
        term: body.term,
        amount_due: body.amount_due,
        due_date: body.due_date,
    })?;

    Ok(Json(record))
}

pub async fn record_payment(
    State(state): State<AppState>,
    user: RoleUser,
    Path(fee_id): Path<String>,
    Json(body): Json<PaymentRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    require_staff(&user)?;
    let record = state.fees.record_payment(&fee_id, body.amount)?;

    Ok(Json(serde_json::json!({
        "success": true,
        "fee_record": record,
    })))
}

/// Sweeps unpaid records past their due date, flagging each and reminding
/// the student.
pub async fn mark_overdue(
    State(state): State<AppState>,
    user: RoleUser,
) -> Result<Json<serde_json::Value>, ApiError> {
    require_admin(&user)?;
    let flagged = state.fees.mark_overdue(Utc::now().date_naive());

    Ok(Json(serde_json::json!({
        "success": true,
        "flagged": flagged,
    })))
}
