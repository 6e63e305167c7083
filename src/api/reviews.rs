//! Review API endpoints.

use axum::{
    body::Bytes,
    extract::{Path, State},
    Json,
};

use super::{parse_body, parse_id, ApiResult, ReviewResponse};
use crate::errors::AppError;
use crate::models::ReviewRequest;
use crate::AppState;

/// PUT /api/restaurants/:id - Add a review to a restaurant.
pub async fn put_review(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> ApiResult<ReviewResponse> {
    let id = parse_id(&id).ok_or_else(|| {
        AppError::InvalidInput("Restaurant ID is required for adding a review".to_string())
    })?;
    add_review_to(&state, id, &body).await
}

/// Shared by the PUT route and the legacy `POST /api/restaurants?id=` form.
pub async fn add_review_to(state: &AppState, id: u64, body: &Bytes) -> ApiResult<ReviewResponse> {
    if state.repo.get_restaurant(id).await?.is_none() {
        return Err(AppError::NotFound(format!("Restaurant {} not found", id)));
    }

    let request: ReviewRequest = parse_body(body)?;
    request.validate()?;

    let review = state.repo.add_review(id, request).await?;
    Ok(Json(ReviewResponse {
        message: "Review added successfully".to_string(),
        review,
    }))
}
