//! JSON file persistence.
//!
//! The backing file holds the whole restaurant collection as one pretty-printed
//! JSON array and is the source of truth for all application data.

mod repository;

pub use repository::*;

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use tokio::fs;

use crate::errors::AppError;
use crate::models::Restaurant;

/// Whole-document load/save over the backing file.
#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
}

impl Store {
    /// Open the store, seeding an empty collection if the file does not exist yet.
    pub async fn open(path: &Path) -> Result<Self, AppError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }

        if !fs::try_exists(path).await? {
            tracing::info!("Creating empty data file at {:?}", path);
            fs::write(path, b"[]").await?;
        }

        Ok(Self {
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read, parse and validate the full collection.
    pub async fn load(&self) -> Result<Vec<Restaurant>, AppError> {
        let data = fs::read(&self.path).await?;
        let restaurants: Vec<Restaurant> = serde_json::from_slice(&data)?;
        validate_collection(&restaurants)?;
        Ok(restaurants)
    }

    /// Overwrite the file with the full collection.
    pub async fn save(&self, restaurants: &[Restaurant]) -> Result<(), AppError> {
        let bytes = serde_json::to_vec_pretty(restaurants)
            .map_err(|e| AppError::Internal(format!("Failed to serialize restaurants: {}", e)))?;
        atomic_write(&self.path, &bytes).await
    }
}

fn validate_collection(restaurants: &[Restaurant]) -> Result<(), AppError> {
    let mut ids = HashSet::new();
    for restaurant in restaurants {
        if !ids.insert(restaurant.id) {
            return Err(AppError::Schema(format!(
                "Duplicate restaurant id {}",
                restaurant.id
            )));
        }
        restaurant.validate()?;
    }
    Ok(())
}

/// Write to a sibling temp file, then rename it over the target.
async fn atomic_write(path: &Path, bytes: &[u8]) -> Result<(), AppError> {
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, bytes).await.map_err(|err| {
        tracing::error!("Failed to write temp file {:?}: {}", tmp, err);
        AppError::Io(format!("Failed to write '{}': {}", tmp.display(), err))
    })?;

    fs::rename(&tmp, path).await.map_err(|err| {
        tracing::error!("Failed to rename {:?} -> {:?}: {}", tmp, path, err);
        AppError::Io(format!(
            "Failed to rename '{}' -> '{}': {}",
            tmp.display(),
            path.display(),
            err
        ))
    })?;
    Ok(())
}
