//! Review model matching the frontend RestaurantReview type.

use serde::{Deserialize, Serialize};
use serde_json::Number;

use crate::errors::AppError;

/// Shortest review body accepted.
pub const MIN_CONTENT_LEN: usize = 10;

/// Accepted star range, inclusive.
pub const MIN_RATING: f64 = 1.0;
pub const MAX_RATING: f64 = 5.0;

/// A review attached to one restaurant.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Review {
    pub name: String,
    pub content: String,
    /// Raw JSON number so whole-star ratings are rewritten as `4`, not `4.0`
    pub rating: Number,
    /// Unique within the parent restaurant only
    pub id: u64,
}

impl Review {
    pub fn validate(&self) -> Result<(), AppError> {
        check_review_fields(&self.name, &self.content, &self.rating)
    }

    /// Rating as a float; every JSON number has one.
    pub fn rating_value(&self) -> f64 {
        self.rating.as_f64().unwrap_or_default()
    }
}

/// Request body for adding a review.
#[derive(Debug, Clone, Deserialize)]
pub struct ReviewRequest {
    pub name: String,
    pub content: String,
    pub rating: Number,
}

impl ReviewRequest {
    /// Validate the request
    pub fn validate(&self) -> Result<(), AppError> {
        check_review_fields(&self.name, &self.content, &self.rating)
    }
}

fn check_review_fields(name: &str, content: &str, rating: &Number) -> Result<(), AppError> {
    if name.trim().is_empty() {
        return Err(AppError::Validation("Reviewer name is required".to_string()));
    }
    if content.chars().count() < MIN_CONTENT_LEN {
        return Err(AppError::Validation(format!(
            "Review content must be at least {} characters",
            MIN_CONTENT_LEN
        )));
    }
    let in_range = rating
        .as_f64()
        .is_some_and(|r| r.is_finite() && (MIN_RATING..=MAX_RATING).contains(&r));
    if !in_range {
        return Err(AppError::Validation(format!(
            "Review rating must be between {} and {}",
            MIN_RATING, MAX_RATING
        )));
    }
    Ok(())
}
