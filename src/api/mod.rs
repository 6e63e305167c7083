//! REST API module.
//!
//! Contains all API routes and handlers following the frontend contract.

mod restaurants;
mod reviews;

pub use restaurants::*;
pub use reviews::*;

use axum::{body::Bytes, Json};
use serde::{de::DeserializeOwned, Serialize};

use crate::errors::AppError;
use crate::models::{Restaurant, Review};

/// Handler result: a JSON payload or an error rendered through `AppError`.
pub type ApiResult<T> = Result<Json<T>, AppError>;

/// Query parameters accepted on the collection route.
#[derive(Debug, Default, PartialEq)]
pub struct RestaurantQuery {
    pub min_rating: Option<String>,
    pub id: Option<String>,
}

impl RestaurantQuery {
    /// Build from raw query pairs. A repeated key keeps its first value and
    /// unknown keys are ignored.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "minRating" => &mut query.min_rating,
                "id" => &mut query.id,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        query
    }
}

#[derive(Debug, Serialize)]
pub struct RestaurantListResponse {
    pub restaurants: Vec<Restaurant>,
}

#[derive(Debug, Serialize)]
pub struct RestaurantResponse {
    pub restaurant: Restaurant,
}

#[derive(Debug, Serialize)]
pub struct CreateRestaurantResponse {
    pub message: String,
    pub restaurant: Restaurant,
}

#[derive(Debug, Serialize)]
pub struct ReviewResponse {
    pub message: String,
    pub review: Review,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Parse a restaurant identifier; only positive integers are accepted.
pub fn parse_id(raw: &str) -> Option<u64> {
    raw.trim().parse::<u64>().ok().filter(|id| *id > 0)
}

/// Parse the rating threshold; anything non-numeric or non-finite disables filtering.
pub fn parse_min_rating(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Deserialize a JSON request body, reporting shape problems as validation errors.
pub fn parse_body<T: DeserializeOwned>(body: &Bytes) -> Result<T, AppError> {
    serde_json::from_slice(body)
        .map_err(|e| AppError::Validation(format!("Invalid request body: {}", e)))
}
