//! App Configuration
//!
//! Map defaults, data locations and timing constants. Provided to all
//! components through context.

use crate::models::Category;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Map centre (lat, lng), Norwich city centre
    pub center: (f64, f64),
    pub zoom: f64,
    pub max_zoom: f64,
    pub tile_url: String,
    pub attribution: String,
    pub landmarks_url: String,
    pub businesses_url: String,
    /// Local storage key for the spend ledger
    pub storage_key: String,
    /// Share of total spend shown as "local economy", in percent
    pub local_economy_percent: f64,
    /// Shown when a location has no image in box view
    pub placeholder_image: String,
    pub spend_confirm_ms: u32,
    pub tab_resize_delay_ms: u32,
    pub view_resize_delay_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            center: (52.6293, 1.2979),
            zoom: 14.0,
            max_zoom: 19.0,
            tile_url: "https://{s}.basemaps.cartocdn.com/light_all/{z}/{x}/{y}{r}.png".to_string(),
            attribution: "&copy; OpenStreetMap &copy; CARTO".to_string(),
            landmarks_url: "/public/landmarks.json".to_string(),
            businesses_url: "/public/businesses.json".to_string(),
            storage_key: "purchases".to_string(),
            local_economy_percent: 60.0,
            placeholder_image: "/public/placeholder.jpg".to_string(),
            spend_confirm_ms: 2500,
            tab_resize_delay_ms: 10,
            view_resize_delay_ms: 50,
        }
    }
}

impl AppConfig {
    pub fn data_url(&self, category: Category) -> &str {
        match category {
            Category::Landmarks => &self.landmarks_url,
            Category::Businesses => &self.businesses_url,
        }
    }

    /// Local economy share as a fraction of 1
    pub fn local_share(&self) -> f64 {
        self.local_economy_percent / 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_files_under_public_dir() {
        // index.html copies `public/` into the dist root under its own name
        let config = AppConfig::default();
        for category in Category::ALL {
            assert!(config.data_url(category).starts_with("/public/"));
        }
        assert_eq!(config.data_url(Category::Businesses), "/public/businesses.json");
        assert!(config.placeholder_image.starts_with("/public/"));
    }

    #[test]
    fn test_local_share() {
        assert_eq!(AppConfig::default().local_share(), 0.6);
    }
}
