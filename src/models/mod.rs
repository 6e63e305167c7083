//! Data models for the restaurant reviews application.
//!
//! These models match the frontend TypeScript interfaces so the JSON document on
//! disk and the HTTP payloads share one shape.

mod rating;
mod restaurant;
mod review;

pub use rating::*;
pub use restaurant::*;
pub use review::*;
