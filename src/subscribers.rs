use chrono::{DateTime, Utc};
use log::{info, warn};
use serde_json::Value;

use crate::models::Subscriber;
use crate::store::KvStore;

/// Storage key of the subscriber list.
pub const SUBSCRIBERS_KEY: &str = "subscribers";

#[derive(Debug, PartialEq)]
pub enum SubscribeError {
    /// Empty address or no `@`.
    Invalid,
    /// The normalized address is already on the list.
    Duplicate,
    /// The store refused the write.
    Storage(String),
}

impl std::fmt::Display for SubscribeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubscribeError::Invalid => write!(f, "invalid email address"),
            SubscribeError::Duplicate => write!(f, "email already subscribed"),
            SubscribeError::Storage(e) => write!(f, "could not save subscribers: {}", e),
        }
    }
}

impl std::error::Error for SubscribeError {}

/// Append-only signup list kept as one JSON array under `SUBSCRIBERS_KEY`.
pub struct SubscriberStore<S: KvStore> {
    store: S,
}

impl<S: KvStore> SubscriberStore<S> {
    pub fn new(store: S) -> Self {
        SubscriberStore { store }
    }

    /// Saved subscribers in signup order. Entries that are not objects are
    /// left out here but kept in storage.
    pub fn list(&self) -> Vec<Subscriber> {
        self.entries()
            .into_iter()
            .filter_map(|entry| serde_json::from_value(entry).ok())
            .collect()
    }

    /// Number of stored entries, recognised or not.
    pub fn count(&self) -> usize {
        self.entries().len()
    }

    pub fn submit(&self, name: &str, email: &str) -> Result<Subscriber, SubscribeError> {
        self.submit_at(name, email, Utc::now())
    }

    /// Validate, de-duplicate and append one signup stamped with `at`.
    /// Existing entries are written back exactly as they were read.
    pub fn submit_at(
        &self,
        name: &str,
        email: &str,
        at: DateTime<Utc>,
    ) -> Result<Subscriber, SubscribeError> {
        let email = normalize_email(email).ok_or(SubscribeError::Invalid)?;

        let mut entries = self.entries();
        if entries.iter().any(|entry| entry_has_email(entry, &email)) {
            return Err(SubscribeError::Duplicate);
        }

        let name = name.trim();
        let name = if name.is_empty() {
            None
        } else {
            Some(name.to_string())
        };

        let subscriber = Subscriber::new(name, email, at);
        let record = serde_json::to_value(&subscriber)
            .map_err(|e| SubscribeError::Storage(e.to_string()))?;
        entries.push(record);
        self.save(&entries).map_err(SubscribeError::Storage)?;

        info!("New local subscriber, {} total", entries.len());
        Ok(subscriber)
    }

    /// Raw stored array. Missing data, unparseable JSON or a non-array value
    /// is an empty list.
    fn entries(&self) -> Vec<Value> {
        let raw = match self.store.get(SUBSCRIBERS_KEY) {
            Some(raw) => raw,
            None => return vec![],
        };
        match serde_json::from_str(&raw) {
            Ok(entries) => entries,
            Err(e) => {
                warn!("Ignoring unreadable subscriber list: {}", e);
                vec![]
            }
        }
    }

    fn save(&self, entries: &[Value]) -> Result<(), String> {
        let json = serde_json::to_string(entries).map_err(|e| e.to_string())?;
        self.store.set(SUBSCRIBERS_KEY, &json)
    }
}

fn entry_has_email(entry: &Value, normalized: &str) -> bool {
    entry
        .get("email")
        .and_then(Value::as_str)
        .map_or(false, |email| email.trim().to_lowercase() == normalized)
}

/// Trim and lower-case an address. Only checks for a non-empty value containing `@`.
pub fn normalize_email(raw: &str) -> Option<String> {
    let email = raw.trim().to_lowercase();
    if email.is_empty() || !email.contains('@') {
        return None;
    }
    Some(email)
}
