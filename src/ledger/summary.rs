//! Ledger Summaries
//!
//! Pure helpers behind the panel history, the spend dashboard and the box
//! view. Nothing here touches the DOM.

use std::cmp::Ordering;
use std::convert::Infallible;
use std::fmt::Display;
use std::str::FromStr;

use chrono::{DateTime, TimeZone};

use crate::models::{Category, Location, PurchaseRecord};

/// Purchases logged against one location
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LocationHistory {
    pub total: f64,
    /// Most recent first
    pub rows: Vec<PurchaseRecord>,
}

impl LocationHistory {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Figures for the profile page
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DashboardSummary {
    pub total: f64,
    pub local_economy: f64,
    /// Most recent first
    pub rows: Vec<PurchaseRecord>,
}

/// Box view sort direction (value of the order select)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

impl FromStr for SortOrder {
    type Err = Infallible;

    /// Anything other than "desc" sorts ascending
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "desc" => SortOrder::Desc,
            _ => SortOrder::Asc,
        })
    }
}

pub fn history_for(
    purchases: &[PurchaseRecord],
    category: Category,
    title: &str,
) -> LocationHistory {
    let matching: Vec<PurchaseRecord> = purchases
        .iter()
        .filter(|p| p.matches(category, title))
        .cloned()
        .collect();
    LocationHistory {
        total: total_spent(&matching),
        rows: most_recent_first(matching),
    }
}

pub fn dashboard_summary(purchases: &[PurchaseRecord], local_share: f64) -> DashboardSummary {
    let total = total_spent(purchases);
    DashboardSummary {
        total,
        local_economy: total * local_share,
        rows: most_recent_first(purchases.to_vec()),
    }
}

pub fn total_spent(purchases: &[PurchaseRecord]) -> f64 {
    purchases.iter().map(|p| p.amount).sum()
}

/// Newest first by timestamp. Records with equal timestamps keep reverse
/// insertion order; unreadable timestamps sink to the end.
pub fn most_recent_first(mut purchases: Vec<PurchaseRecord>) -> Vec<PurchaseRecord> {
    purchases.reverse();
    purchases.sort_by_cached_key(|p| std::cmp::Reverse(DateTime::parse_from_rfc3339(&p.date).ok()));
    purchases
}

pub fn format_currency(amount: f64) -> String {
    format!("£{:.2}", amount)
}

/// "5 Mar" style date in `tz`. Unparseable input is returned as-is.
pub fn short_date<Tz>(iso: &str, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    match DateTime::parse_from_rfc3339(iso) {
        Ok(dt) => dt.with_timezone(tz).format("%-d %b").to_string(),
        Err(_) => iso.to_string(),
    }
}

/// Title comparison using the browser's collation for the user's locale
#[cfg(target_arch = "wasm32")]
pub fn compare_titles(a: &str, b: &str) -> Ordering {
    js_sys::JsString::from(a)
        .locale_compare(b, &js_sys::Array::new(), &js_sys::Object::new())
        .cmp(&0)
}

/// Off the browser: accents and case are ignored first, then code points
/// break ties
#[cfg(not(target_arch = "wasm32"))]
pub fn compare_titles(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(&collation_key(b))
        .then_with(|| a.cmp(b))
}

#[cfg(not(target_arch = "wasm32"))]
fn collation_key(s: &str) -> String {
    use unicode_normalization::char::is_combining_mark;
    use unicode_normalization::UnicodeNormalization;

    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Sorted copy of `locations` by title. The input order is untouched.
pub fn sorted_locations(locations: &[Location], order: SortOrder) -> Vec<Location> {
    let mut sorted = locations.to_vec();
    sorted.sort_by(|a, b| {
        let cmp = compare_titles(&a.title, &b.title);
        match order {
            SortOrder::Asc => cmp,
            SortOrder::Desc => cmp.reverse(),
        }
    });
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn make_purchase(landmark: &str, amount: f64, date: &str) -> PurchaseRecord {
        PurchaseRecord {
            landmark: landmark.to_string(),
            amount,
            date: date.to_string(),
            category: None,
        }
    }

    fn make_location(title: &str) -> Location {
        Location {
            title: title.to_string(),
            description: format!("About {}", title),
            image: None,
            address: None,
            hours: None,
            lat: 52.63,
            lng: 1.30,
        }
    }

    const T1: &str = "2024-03-05T10:00:00.000Z";
    const T2: &str = "2024-03-07T16:45:00.000Z";
    const T3: &str = "2024-04-01T08:00:00.000Z";

    #[test]
    fn test_history_example() {
        let purchases = vec![make_purchase("Cafe X", 5.0, T1), make_purchase("Cafe X", 3.0, T2)];

        let history = history_for(&purchases, Category::Businesses, "Cafe X");

        assert_eq!(format_currency(history.total), "£8.00");
        let dates: Vec<&str> = history.rows.iter().map(|p| p.date.as_str()).collect();
        assert_eq!(dates, vec![T2, T1]);
    }

    #[test]
    fn test_history_ignores_other_locations() {
        let purchases = vec![
            make_purchase("Castle", 10.0, T1),
            make_purchase("Cafe X", 2.5, T2),
            make_purchase("Cathedral", 100.0, T3),
            make_purchase("Castle", 1.5, T3),
        ];

        let history = history_for(&purchases, Category::Landmarks, "Castle");

        assert_eq!(history.total, 11.5);
        assert_eq!(history.rows.len(), 2);
        assert!(history.rows.iter().all(|p| p.landmark == "Castle"));
    }

    #[test]
    fn test_history_respects_category() {
        let mut landmark = make_purchase("Market", 4.0, T1);
        landmark.category = Some(Category::Landmarks);
        let mut business = make_purchase("Market", 6.0, T2);
        business.category = Some(Category::Businesses);
        let purchases = vec![landmark, business];

        assert_eq!(history_for(&purchases, Category::Landmarks, "Market").total, 4.0);
        assert_eq!(history_for(&purchases, Category::Businesses, "Market").total, 6.0);
    }

    #[test]
    fn test_history_empty_when_no_match() {
        let purchases = vec![make_purchase("Castle", 10.0, T1)];
        let history = history_for(&purchases, Category::Landmarks, "Nowhere");

        assert!(history.is_empty());
        assert_eq!(history.total, 0.0);
    }

    #[test]
    fn test_most_recent_first_ignores_insertion_order() {
        let purchases = vec![
            make_purchase("A", 1.0, T2),
            make_purchase("B", 1.0, T3),
            make_purchase("C", 1.0, T1),
        ];

        let ordered: Vec<String> = most_recent_first(purchases)
            .into_iter()
            .map(|p| p.landmark)
            .collect();
        assert_eq!(ordered, vec!["B", "A", "C"]);
    }

    #[test]
    fn test_most_recent_first_ties_and_bad_dates() {
        let purchases = vec![
            make_purchase("first", 1.0, T1),
            make_purchase("broken", 1.0, "yesterday"),
            make_purchase("second", 1.0, T1),
        ];

        let ordered: Vec<String> = most_recent_first(purchases)
            .into_iter()
            .map(|p| p.landmark)
            .collect();
        assert_eq!(ordered, vec!["second", "first", "broken"]);
    }

    #[test]
    fn test_dashboard_summary() {
        let purchases = vec![make_purchase("Castle", 10.0, T1), make_purchase("Cafe X", 15.0, T2)];

        let summary = dashboard_summary(&purchases, 0.6);

        assert_eq!(format_currency(summary.total), "£25.00");
        assert_eq!(format_currency(summary.local_economy), "£15.00");
        assert_eq!(summary.rows[0].landmark, "Cafe X");
        assert_eq!(summary.rows[1].landmark, "Castle");
    }

    #[test]
    fn test_dashboard_summary_empty() {
        let summary = dashboard_summary(&[], 0.6);
        assert_eq!(summary.total, 0.0);
        assert_eq!(summary.local_economy, 0.0);
        assert!(summary.rows.is_empty());
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(0.0), "£0.00");
        assert_eq!(format_currency(3.5), "£3.50");
        assert_eq!(format_currency(1234.567), "£1234.57");
    }

    #[test]
    fn test_short_date() {
        assert_eq!(short_date(T1, &Utc), "5 Mar");
        assert_eq!(short_date(T3, &Utc), "1 Apr");
        assert_eq!(short_date("not a date", &Utc), "not a date");
    }

    #[test]
    fn test_short_date_uses_timezone() {
        let late = "2024-03-05T23:30:00.000Z";
        let plus_two = chrono::FixedOffset::east_opt(2 * 3600).unwrap();
        assert_eq!(short_date(late, &plus_two), "6 Mar");
    }

    #[test]
    fn test_sorted_locations_asc_desc() {
        let locations = vec![
            make_location("cathedral"),
            make_location("Castle"),
            make_location("Art Gallery"),
        ];

        let titles = |order| -> Vec<String> {
            sorted_locations(&locations, order)
                .into_iter()
                .map(|l| l.title)
                .collect()
        };
        let asc = titles(SortOrder::Asc);
        let desc = titles(SortOrder::Desc);

        assert_eq!(asc, vec!["Art Gallery", "Castle", "cathedral"]);
        let mut reversed = asc.clone();
        reversed.reverse();
        assert_eq!(desc, reversed);
    }

    #[test]
    fn test_sorted_locations_is_a_copy() {
        let locations = vec![make_location("Zoo"), make_location("Abbey")];
        let sorted = sorted_locations(&locations, SortOrder::Asc);

        assert_eq!(sorted.len(), locations.len());
        assert_eq!(locations[0].title, "Zoo");
        assert_eq!(sorted[0].title, "Abbey");
    }

    #[test]
    fn test_sorted_locations_folds_accents() {
        let locations: Vec<Location> = ["Zoo", "Église", "Abbey", "Cafe X", "Café Nero"]
            .into_iter()
            .map(make_location)
            .collect();

        let asc: Vec<String> = sorted_locations(&locations, SortOrder::Asc)
            .into_iter()
            .map(|l| l.title)
            .collect();

        assert_eq!(asc, vec!["Abbey", "Café Nero", "Cafe X", "Église", "Zoo"]);
    }

    #[test]
    fn test_compare_titles_accent_breaks_ties() {
        assert_eq!(compare_titles("Cafe", "Café"), Ordering::Less);
        assert_eq!(compare_titles("Abbey", "Abbey"), Ordering::Equal);
    }

    #[test]
    fn test_sort_order_from_str() {
        assert_eq!("desc".parse::<SortOrder>(), Ok(SortOrder::Desc));
        assert_eq!("asc".parse::<SortOrder>(), Ok(SortOrder::Asc));
        assert_eq!("".parse::<SortOrder>(), Ok(SortOrder::Asc));
    }
}
