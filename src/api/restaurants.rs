//! Restaurant API endpoints.

use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
    Json,
};

use super::{
    add_review_to, parse_body, parse_id, parse_min_rating, ApiResult, CreateRestaurantResponse,
    MessageResponse, RestaurantListResponse, RestaurantQuery, RestaurantResponse,
};
use crate::errors::AppError;
use crate::models::CreateRestaurantRequest;
use crate::AppState;

/// GET /api/restaurants - List restaurants, or fetch one when `?id=` is given.
pub async fn list_restaurants(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Response, AppError> {
    let query = RestaurantQuery::from_pairs(pairs);
    // An unparsable id falls through to the plain listing.
    if let Some(id) = query.id.as_deref().and_then(parse_id) {
        return Ok(find_restaurant(&state, id).await?.into_response());
    }

    let min_rating = query.min_rating.as_deref().and_then(parse_min_rating);
    let restaurants = state.repo.list_restaurants(min_rating).await?;
    Ok(Json(RestaurantListResponse { restaurants }).into_response())
}

/// GET /api/restaurants/:id - Get a single restaurant.
pub async fn get_restaurant(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<RestaurantResponse> {
    let id = parse_id(&id)
        .ok_or_else(|| AppError::InvalidInput(format!("Invalid restaurant ID '{}'", id)))?;
    find_restaurant(&state, id).await
}

async fn find_restaurant(state: &AppState, id: u64) -> ApiResult<RestaurantResponse> {
    match state.repo.get_restaurant(id).await? {
        Some(restaurant) => Ok(Json(RestaurantResponse { restaurant })),
        None => Err(AppError::NotFound(format!("Restaurant {} not found", id))),
    }
}

/// POST /api/restaurants - Create a restaurant, or add a review when `?id=` is given.
pub async fn post_restaurants(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
    body: Bytes,
) -> Result<Response, AppError> {
    let query = RestaurantQuery::from_pairs(pairs);
    if let Some(raw_id) = query.id.as_deref() {
        let id = parse_id(raw_id).ok_or_else(|| {
            AppError::InvalidInput("Restaurant ID is required for adding a review".to_string())
        })?;
        return Ok(add_review_to(&state, id, &body).await?.into_response());
    }

    Ok(create_restaurant(&state, &body).await?.into_response())
}

async fn create_restaurant(state: &AppState, body: &Bytes) -> ApiResult<CreateRestaurantResponse> {
    let request: CreateRestaurantRequest = parse_body(body)?;
    request.validate()?;

    let restaurant = state.repo.create_restaurant(request).await?;
    Ok(Json(CreateRestaurantResponse {
        message: "Restaurant added successfully".to_string(),
        restaurant,
    }))
}

/// DELETE /api/restaurants/:id - Delete a restaurant.
pub async fn delete_restaurant(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<MessageResponse> {
    let id = parse_id(&id)
        .ok_or_else(|| AppError::InvalidInput(format!("Invalid restaurant ID '{}'", id)))?;

    state.repo.delete_restaurant(id).await?;
    Ok(Json(MessageResponse {
        message: "Restaurant deleted successfully".to_string(),
    }))
}
