use crate::search::types::FoodRecord;
use crate::storage::store::RecordStore;

use anyhow::{Context, Result};
use std::path::Path;

pub fn sample_foods() -> Vec<FoodRecord> {
    vec![
        FoodRecord::new("Apple", 52, "fruit"),
        FoodRecord::new("Banana", 89, "fruit"),
        FoodRecord::new("Chicken Breast", 165, "protein"),
        FoodRecord::new("Eggs", 155, "protein"),
        FoodRecord::new("Rice", 130, "grain"),
        FoodRecord::new("Wheat Bread", 247, "grain"),
        FoodRecord::new("Milk", 61, "dairy"),
        FoodRecord::new("Salmon", 208, "protein"),
        FoodRecord::new("Cabbage", 25, "vegetable"),
        FoodRecord::new("Oats", 389, "grain"),
        FoodRecord::new("Broccoli", 34, "vegetable"),
        FoodRecord::new("Orange", 47, "fruit"),
        FoodRecord::new("Potato", 77, "vegetable"),
        FoodRecord::new("Yogurt", 59, "dairy"),
        FoodRecord::new("Almonds", 579, "nuts"),
    ]
}

/// Inserts the sample foods when the store is empty.
///
/// Returns how many records were inserted. Failures are logged and reported as 0.
pub fn initialize_sample_data(store: &dyn RecordStore) -> usize {
    match store.count() {
        Ok(0) => {}
        Ok(existing) => {
            tracing::debug!("Store already holds {} foods, skipping sample data", existing);
            return 0;
        }
        Err(e) => {
            tracing::error!("Error initializing sample data: {}", e);
            return 0;
        }
    }

    let documents = sample_foods().iter().map(FoodRecord::to_document).collect();
    match store.insert_many(documents) {
        Ok(ids) => {
            tracing::info!("Initialized {} sample food items", ids.len());
            ids.len()
        }
        Err(e) => {
            tracing::error!("Error initializing sample data: {}", e);
            0
        }
    }
}

/// Imports a JSON array of `{name, calories_per_100g, category}` objects.
///
/// The whole file is validated before anything is inserted.
pub fn load_from_file(store: &dyn RecordStore, path: &Path) -> Result<usize> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read food data from {}", path.display()))?;
    let foods: Vec<FoodRecord> = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse food data in {}", path.display()))?;

    for (index, food) in foods.iter().enumerate() {
        food.validate()
            .map_err(|reason| anyhow::anyhow!("Invalid food at index {}: {}", index, reason))?;
    }

    let ids = store.insert_many(foods.iter().map(FoodRecord::to_document).collect())?;
    tracing::info!("Loaded {} foods from {}", ids.len(), path.display());
    Ok(ids.len())
}
