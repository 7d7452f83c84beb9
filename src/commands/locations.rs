//! Location Loaders
//!
//! Each category is one JSON array served next to the app. The two loads
//! are independent: either may finish first, and a failure leaves only that
//! category empty.

use gloo_net::http::Request;

use crate::config::AppConfig;
use crate::error::LoadError;
use crate::logging;
use crate::models::{Category, Location};

pub async fn fetch_locations(url: &str) -> Result<Vec<Location>, LoadError> {
    let response = Request::get(url).send().await.map_err(|source| LoadError::Network {
        url: url.to_string(),
        source,
    })?;

    if !response.ok() {
        return Err(LoadError::Status {
            url: url.to_string(),
            status: response.status(),
        });
    }

    response.json::<Vec<Location>>().await.map_err(|source| LoadError::Parse {
        url: url.to_string(),
        source,
    })
}

/// Load one category. Failures are logged and yield an empty collection.
pub async fn load_category(config: &AppConfig, category: Category) -> Vec<Location> {
    match fetch_locations(config.data_url(category)).await {
        Ok(locations) => {
            logging::info("PINS", &format!("Loaded {} {}", locations.len(), category.as_str()));
            locations
        }
        Err(e) => {
            logging::error("PINS", &format!("Error loading {}: {}", category.as_str(), e));
            Vec::new()
        }
    }
}

pub async fn load_landmarks(config: &AppConfig) -> Vec<Location> {
    load_category(config, Category::Landmarks).await
}

pub async fn load_businesses(config: &AppConfig) -> Vec<Location> {
    load_category(config, Category::Businesses).await
}
