//! Repository for restaurant and review operations.
//!
//! Every mutation runs load → mutate → save while holding one writer lock, so
//! concurrent requests inside this process never lose each other's updates.

use tokio::sync::Mutex;

use super::Store;
use crate::errors::AppError;
use crate::models::{CreateRestaurantRequest, Restaurant, Review, ReviewRequest};

/// Data operations over the restaurant collection.
pub struct Repository {
    store: Store,
    write_lock: Mutex<()>,
}

impl Repository {
    pub fn new(store: Store) -> Self {
        Self {
            store,
            write_lock: Mutex::new(()),
        }
    }

    /// List restaurants, keeping only those rated at least `min_rating` when given.
    pub async fn list_restaurants(
        &self,
        min_rating: Option<f64>,
    ) -> Result<Vec<Restaurant>, AppError> {
        let restaurants = self.store.load().await?;

        Ok(match min_rating {
            Some(min) => restaurants
                .into_iter()
                .filter(|r| r.rating as f64 >= min)
                .collect(),
            None => restaurants,
        })
    }

    /// Get a restaurant by ID.
    pub async fn get_restaurant(&self, id: u64) -> Result<Option<Restaurant>, AppError> {
        let restaurants = self.store.load().await?;
        Ok(restaurants.into_iter().find(|r| r.id == id))
    }

    /// Create and persist a new restaurant.
    pub async fn create_restaurant(
        &self,
        request: CreateRestaurantRequest,
    ) -> Result<Restaurant, AppError> {
        let _guard = self.write_lock.lock().await;
        let mut restaurants = self.store.load().await?;

        let restaurant = Restaurant::new(next_restaurant_id(&restaurants)?, request);
        restaurants.push(restaurant.clone());
        self.store.save(&restaurants).await?;

        tracing::info!("Created restaurant {} ({})", restaurant.id, restaurant.name);
        Ok(restaurant)
    }

    /// Delete the restaurant with the given ID.
    pub async fn delete_restaurant(&self, id: u64) -> Result<(), AppError> {
        let _guard = self.write_lock.lock().await;
        let mut restaurants = self.store.load().await?;

        let index = restaurants
            .iter()
            .position(|r| r.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Restaurant {} not found", id)))?;
        restaurants.remove(index);
        self.store.save(&restaurants).await?;

        tracing::info!("Deleted restaurant {}", id);
        Ok(())
    }

    /// Append a review to a restaurant and recompute its rating.
    pub async fn add_review(&self, id: u64, request: ReviewRequest) -> Result<Review, AppError> {
        let _guard = self.write_lock.lock().await;
        let mut restaurants = self.store.load().await?;

        let restaurant = restaurants
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Restaurant {} not found", id)))?;
        let review = restaurant.push_review(request)?;
        let rating = restaurant.rating;
        self.store.save(&restaurants).await?;

        tracing::info!(
            "Added review {} to restaurant {} (rating now {})",
            review.id,
            id,
            rating
        );
        Ok(review)
    }
}

/// One past the highest ID in use, so IDs freed by deletion are never handed out again
/// while a higher one still exists.
fn next_restaurant_id(restaurants: &[Restaurant]) -> Result<u64, AppError> {
    match restaurants.iter().map(|r| r.id).max() {
        None => Ok(1),
        Some(max) => max.checked_add(1).ok_or_else(|| {
            AppError::Conflict("No restaurant id left to assign".to_string())
        }),
    }
}
