//! Spend Ledger
//!
//! Append-only list of purchase records kept as one JSON array in a
//! key-value store (browser local storage in the app). Reads fail soft:
//! a missing or corrupt value is an empty ledger.

pub mod summary;

use chrono::{DateTime, SecondsFormat, Utc};

use crate::error::LedgerError;
use crate::logging;
use crate::models::{Category, PurchaseRecord};

/// Minimal string key-value storage
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), LedgerError>;
}

/// `window.localStorage`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), LedgerError> {
        let storage = Self::storage().ok_or(LedgerError::StorageUnavailable)?;
        storage
            .set_item(key, value)
            .map_err(|e| LedgerError::Write(format!("{:?}", e)))
    }
}

#[derive(Debug, Clone)]
pub struct Ledger<S> {
    storage: S,
    key: String,
}

impl Ledger<BrowserStorage> {
    pub fn browser(key: impl Into<String>) -> Self {
        Self::new(BrowserStorage, key)
    }
}

impl<S: KeyValueStore> Ledger<S> {
    pub fn new(storage: S, key: impl Into<String>) -> Self {
        Self { storage, key: key.into() }
    }

    /// All readable records in insertion order. Never fails.
    pub fn get_purchases(&self) -> Vec<PurchaseRecord> {
        self.stored_entries()
            .into_iter()
            .enumerate()
            .filter_map(|(i, entry)| match serde_json::from_value(entry) {
                Ok(record) => Some(record),
                Err(e) => {
                    logging::error("LEDGER", &format!("Skipping unreadable entry {}: {}", i, e));
                    None
                }
            })
            .collect()
    }

    /// Raw array entries. Unreadable entries are kept here so a write
    /// never drops them.
    fn stored_entries(&self) -> Vec<serde_json::Value> {
        let Some(raw) = self.storage.get(&self.key) else {
            return Vec::new();
        };
        match serde_json::from_str::<Option<Vec<serde_json::Value>>>(&raw) {
            Ok(entries) => entries.unwrap_or_default(),
            Err(e) => {
                logging::error("LEDGER", &format!("Ignoring unreadable ledger: {}", e));
                Vec::new()
            }
        }
    }

    /// Append a record stamped with the current time
    pub fn save_purchase(
        &self,
        category: Category,
        landmark: &str,
        amount: f64,
    ) -> Result<PurchaseRecord, LedgerError> {
        self.save_purchase_at(category, landmark, amount, Utc::now())
    }

    pub fn save_purchase_at(
        &self,
        category: Category,
        landmark: &str,
        amount: f64,
        at: DateTime<Utc>,
    ) -> Result<PurchaseRecord, LedgerError> {
        if !amount.is_finite() || amount <= 0.0 {
            return Err(LedgerError::InvalidAmount(amount));
        }

        let record = PurchaseRecord {
            landmark: landmark.to_string(),
            amount,
            date: at.to_rfc3339_opts(SecondsFormat::Millis, true),
            category: Some(category),
        };

        let mut entries = self.stored_entries();
        entries.push(serde_json::to_value(&record).map_err(|e| LedgerError::Write(e.to_string()))?);
        let raw = serde_json::to_string(&entries).map_err(|e| LedgerError::Write(e.to_string()))?;
        self.storage.set(&self.key, &raw)?;
        Ok(record)
    }

    /// Log the spend input box against `target`. Invalid input, or no
    /// target, is ignored and nothing is written.
    pub fn submit_spend(
        &self,
        target: Option<(Category, &str)>,
        raw: &str,
    ) -> Result<Option<PurchaseRecord>, LedgerError> {
        let Some((category, title)) = target else {
            return Ok(None);
        };
        let Some(amount) = parse_spend_input(raw) else {
            return Ok(None);
        };
        self.save_purchase(category, title, amount).map(Some)
    }
}

/// Parse the spend input box. `None` for anything that should not be logged.
pub fn parse_spend_input(raw: &str) -> Option<f64> {
    let amount: f64 = raw.trim().parse().ok()?;
    (amount.is_finite() && amount > 0.0).then_some(amount)
}

/// In-process store for tests
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: std::cell::RefCell<std::collections::HashMap<String, String>>,
}

#[cfg(test)]
impl MemoryStorage {
    pub fn with_value(key: &str, value: &str) -> Self {
        let store = Self::default();
        store.entries.borrow_mut().insert(key.to_string(), value.to_string());
        store
    }
}

#[cfg(test)]
impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), LedgerError> {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}
