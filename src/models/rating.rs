//! Derived restaurant rating.

use super::Review;

/// Mean of the review ratings, rounded half away from zero.
///
/// Returns `None` for an empty list; the caller keeps whatever rating it had.
pub fn average_rating(reviews: &[Review]) -> Option<i64> {
    if reviews.is_empty() {
        return None;
    }

    let total: f64 = reviews.iter().map(Review::rating_value).sum();
    let mean = total / reviews.len() as f64;
    Some(mean.round() as i64)
}
