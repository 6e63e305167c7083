//! Restaurant model matching the frontend Restaurant interface.

use serde::{Deserialize, Serialize};
use serde_json::Number;

use super::{average_rating, Review, ReviewRequest};
use crate::errors::AppError;

/// Weekly opening hours, one free-text entry per day.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct OpeningHours {
    pub monday: String,
    pub tuesday: String,
    pub wednesday: String,
    pub thursday: String,
    pub friday: String,
    pub saturday: String,
    pub sunday: String,
}

impl Default for OpeningHours {
    fn default() -> Self {
        Self {
            monday: "12.00 - 22.00".to_string(),
            tuesday: "Closed".to_string(),
            wednesday: "12.00 - 22.00".to_string(),
            thursday: "12.00 - 22.00".to_string(),
            friday: "12.00 - 23.00".to_string(),
            saturday: "12.00 - 23.00".to_string(),
            sunday: "12.00 - 21.00".to_string(),
        }
    }
}

/// A dish shown on the restaurant page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MenuHighlight {
    pub name: String,
    pub description: String,
    /// Kept as a raw JSON number so `12` and `12.5` both survive a rewrite unchanged
    pub price: Number,
}

/// Placeholder menu given to every newly created restaurant.
pub fn default_menu_highlights() -> Vec<MenuHighlight> {
    vec![
        MenuHighlight {
            name: "Risotto alla Mestrina".to_string(),
            description: "A creamy risotto with saffron and Parmigiano.".to_string(),
            price: Number::from(12),
        },
        MenuHighlight {
            name: "Pollo alla Griglia".to_string(),
            description: "Grilled chicken with rosemary and olive oil.".to_string(),
            price: Number::from(10),
        },
    ]
}

/// A restaurant with its derived rating and review list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
    pub id: u64,
    pub name: String,
    pub image_src: String,
    /// Rounded mean of `reviews[*].rating`; 0 until the first review arrives
    pub rating: i64,
    pub address: String,
    pub tel: String,
    pub hours: OpeningHours,
    pub menu_highlights: Vec<MenuHighlight>,
    pub reviews: Vec<Review>,
}

impl Restaurant {
    /// Build a fresh restaurant with placeholder hours and menu.
    pub fn new(id: u64, request: CreateRestaurantRequest) -> Self {
        Self {
            id,
            name: request.name,
            image_src: request.image_src,
            rating: 0,
            address: request.address,
            tel: request.tel,
            hours: OpeningHours::default(),
            menu_highlights: default_menu_highlights(),
            reviews: Vec::new(),
        }
    }

    /// Next review id local to this restaurant.
    pub fn next_review_id(&self) -> Result<u64, AppError> {
        match self.reviews.iter().map(|r| r.id).max() {
            None => Ok(1),
            Some(max) => max.checked_add(1).ok_or_else(|| {
                AppError::Conflict(format!(
                    "Restaurant {} has no review id left to assign",
                    self.id
                ))
            }),
        }
    }

    /// Append a review and recompute the rating.
    ///
    /// Leaves the restaurant untouched when no review id can be assigned.
    pub fn push_review(&mut self, request: ReviewRequest) -> Result<Review, AppError> {
        let review = Review {
            id: self.next_review_id()?,
            name: request.name,
            content: request.content,
            rating: request.rating,
        };
        self.reviews.push(review.clone());

        if let Some(rating) = average_rating(&self.reviews) {
            self.rating = rating;
        }

        Ok(review)
    }

    /// Structural checks applied to every record read from disk.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.id == 0 {
            return Err(AppError::Schema(format!(
                "Restaurant '{}' has invalid id 0",
                self.name
            )));
        }

        let required = [
            ("name", &self.name),
            ("imageSrc", &self.image_src),
            ("address", &self.address),
            ("tel", &self.tel),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(AppError::Schema(format!(
                    "Restaurant {}: {} must not be empty",
                    self.id, field
                )));
            }
        }

        let mut seen = std::collections::HashSet::new();
        for review in &self.reviews {
            if !seen.insert(review.id) {
                return Err(AppError::Schema(format!(
                    "Restaurant {}: duplicate review id {}",
                    self.id, review.id
                )));
            }
            review
                .validate()
                .map_err(|e| AppError::Schema(format!("Restaurant {}: {}", self.id, e.message())))?;
        }

        Ok(())
    }
}

/// Request body for creating a new restaurant.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRestaurantRequest {
    pub name: String,
    pub image_src: String,
    pub address: String,
    pub tel: String,
}

impl CreateRestaurantRequest {
    /// Validate the request
    pub fn validate(&self) -> Result<(), AppError> {
        if self.name.trim().is_empty() {
            return Err(AppError::Validation("Restaurant name is required".to_string()));
        }
        if self.image_src.trim().is_empty() {
            return Err(AppError::Validation("Image (imageSrc) is required".to_string()));
        }
        if self.address.trim().is_empty() {
            return Err(AppError::Validation("Address is required".to_string()));
        }
        if self.tel.trim().is_empty() {
            return Err(AppError::Validation("Phone number (tel) is required".to_string()));
        }
        Ok(())
    }
}
