//! Frontend Models
//!
//! Location data loaded from the static JSON files and the spend records
//! kept in local storage.

use serde::{Deserialize, Deserializer, Serialize};

/// Pin category. Each category has its own JSON file and map layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    Landmarks,
    Businesses,
}

impl Category {
    pub const ALL: [Category; 2] = [Category::Landmarks, Category::Businesses];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Landmarks => "landmarks",
            Category::Businesses => "businesses",
        }
    }

    /// Heading shown above the box view
    pub fn label(&self) -> &'static str {
        match self {
            Category::Landmarks => "Landmarks",
            Category::Businesses => "Businesses",
        }
    }

    /// Emoji drawn inside the map pin
    pub fn pin_glyph(&self) -> &'static str {
        match self {
            Category::Landmarks => "🏛️",
            Category::Businesses => "☕",
        }
    }

    /// CSS class of the pin, alongside the shared `custom-pin`
    pub fn pin_class(&self) -> &'static str {
        match self {
            Category::Landmarks => "landmark-pin",
            Category::Businesses => "business-pin",
        }
    }
}

/// A point of interest (matches the JSON files)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub title: String,
    pub description: String,
    #[serde(default, deserialize_with = "non_empty")]
    pub image: Option<String>,
    #[serde(default, deserialize_with = "non_empty")]
    pub address: Option<String>,
    #[serde(default, deserialize_with = "non_empty")]
    pub hours: Option<String>,
    pub lat: f64,
    pub lng: f64,
}

impl Location {
    /// Address with its pin glyph, if there is one
    pub fn address_line(&self) -> Option<String> {
        self.address.as_ref().map(|a| format!("📍 {}", a))
    }

    /// Opening hours with a clock glyph, if there are any
    pub fn hours_line(&self) -> Option<String> {
        self.hours.as_ref().map(|h| format!("🕒 {}", h))
    }
}

/// One logged spend. `landmark` holds the location title.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseRecord {
    pub landmark: String,
    pub amount: f64,
    pub date: String,
    /// Absent on records written before categories were tracked
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
}

impl PurchaseRecord {
    /// Whether this record was logged against `title` in `category`.
    /// Records without a category match on title alone.
    pub fn matches(&self, category: Category, title: &str) -> bool {
        self.landmark == title && self.category.map_or(true, |c| c == category)
    }
}

/// Treats `""` and `null` the same as a missing key
fn non_empty<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_optional_fields() {
        let json = r#"[
            {"title": "Castle", "description": "Norman keep", "lat": 52.628, "lng": 1.296,
             "address": "Castle Meadow", "hours": "10:00 - 17:00", "image": "castle.jpg"},
            {"title": "Cathedral", "description": "Spire", "lat": 52.631, "lng": 1.301,
             "address": "", "hours": null}
        ]"#;
        let locations: Vec<Location> = serde_json::from_str(json).unwrap();

        assert_eq!(locations.len(), 2);
        assert_eq!(locations[0].address.as_deref(), Some("Castle Meadow"));
        assert_eq!(locations[0].image.as_deref(), Some("castle.jpg"));
        assert_eq!(locations[1].address, None);
        assert_eq!(locations[1].hours, None);
        assert_eq!(locations[1].image, None);
    }

    #[test]
    fn test_detail_lines() {
        let json = r#"{"title": "Castle", "description": "", "lat": 0, "lng": 0,
                       "address": "Castle Meadow", "hours": "10:00 - 17:00"}"#;
        let with_both: Location = serde_json::from_str(json).unwrap();
        assert_eq!(with_both.address_line().as_deref(), Some("📍 Castle Meadow"));
        assert_eq!(with_both.hours_line().as_deref(), Some("🕒 10:00 - 17:00"));

        let json = r#"{"title": "Bridge", "description": "", "lat": 0, "lng": 0}"#;
        let bare: Location = serde_json::from_str(json).unwrap();
        assert_eq!(bare.address_line(), None);
        assert_eq!(bare.hours_line(), None);
    }

    #[test]
    fn test_purchase_without_category_still_parses() {
        let json = r#"{"landmark": "Cafe X", "amount": 4.5, "date": "2024-03-05T10:00:00.000Z"}"#;
        let record: PurchaseRecord = serde_json::from_str(json).unwrap();

        assert_eq!(record.category, None);
        assert!(record.matches(Category::Landmarks, "Cafe X"));
        assert!(record.matches(Category::Businesses, "Cafe X"));
    }

    #[test]
    fn test_purchase_matches_its_own_category_only() {
        let record = PurchaseRecord {
            landmark: "Market".to_string(),
            amount: 2.0,
            date: "2024-03-05T10:00:00Z".to_string(),
            category: Some(Category::Businesses),
        };

        assert!(record.matches(Category::Businesses, "Market"));
        assert!(!record.matches(Category::Landmarks, "Market"));
        assert!(!record.matches(Category::Businesses, "Castle"));
    }

    #[test]
    fn test_category_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Category::Businesses).unwrap(), "\"businesses\"");
    }
}
