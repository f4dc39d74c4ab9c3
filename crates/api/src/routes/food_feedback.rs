use axum::{
    Json,
    extract::{Query, State},
};
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use hostelhub_store::models::{FoodFeedback, Meal, Student};
use hostelhub_store::new_id;

use super::require_staff;
use crate::{error::ApiError, extractors::role::RoleUser, state::AppState};

#[derive(Debug, Deserialize, Validate)]
pub struct SubmitFeedbackRequest {
    pub student_id: String,
    pub date: NaiveDate,
    pub meal: Meal,
    #[validate(range(min = 1, max = 5))]
    pub rating: u8,
    pub comments: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct FeedbackQuery {
    pub date: Option<NaiveDate>,
}

#[derive(Debug, Serialize)]
pub struct MealSummary {
    pub meal: &'static str,
    pub count: usize,
    pub average_rating: f64,
}

pub async fn submit(
    State(state): State<AppState>,
    _user: RoleUser,
    Json(body): Json<SubmitFeedbackRequest>,
) -> Result<Json<FoodFeedback>, ApiError> {
    body.validate()
        .map_err(|e| ApiError::Validation(e.to_string()))?;

    let feedback = state.store.with(|tx| {
        tx.get::<Student>(&body.student_id)?;
        let feedback = FoodFeedback {
            id: new_id(),
            student_id: body.student_id.clone(),
            date: body.date,
            meal: body.meal,
            rating: body.rating,
            comments: body.comments.clone(),
            submitted_at: Utc::now(),
        };
        tx.add(feedback.clone())?;
        Ok::<_, hostelhub_store::StoreError>(feedback)
    })?;

    Ok(Json(feedback))
}

pub async fn list(
    State(state): State<AppState>,
    user: RoleUser,
    Query(query): Query<FeedbackQuery>,
) -> Result<Json<Vec<FoodFeedback>>, ApiError> {
    require_staff(&user)?;
    let feedback = state
        .store
        .all::<FoodFeedback>()
        .into_iter()
        .filter(|f| query.date.map_or(true, |d| f.date == d))
        .collect();
    Ok(Json(feedback))
}

/// Per-meal aggregate over the (optionally date-filtered) feedback set.
pub async fn summary(
    State(state): State<AppState>,
    user: RoleUser,
    Query(query): Query<FeedbackQuery>,
) -> Result<Json<Vec<MealSummary>>, ApiError> {
    require_staff(&user)?;

    let feedback: Vec<FoodFeedback> = state
        .store
        .all::<FoodFeedback>()
        .into_iter()
        .filter(|f| query.date.map_or(true, |d| f.date == d))
        .collect();

    let summaries = [Meal::Breakfast, Meal::Lunch, Meal::Dinner]
        .into_iter()
        .map(|meal| {
            let ratings: Vec<u8> = feedback
                .iter()
                .filter(|f| f.meal == meal)
                .map(|f| f.rating)
                .collect();
            let count = ratings.len();
            let average_rating = if count == 0 {
                0.0
            } else {
                ratings.iter().map(|r| *r as f64).sum::<f64>() / count as f64
            };
            MealSummary {
                meal: meal.as_str(),
                count,
                average_rating,
            }
        })
        .collect();

    Ok(Json(summaries))
}
