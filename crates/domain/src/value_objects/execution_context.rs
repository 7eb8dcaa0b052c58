//! Execution context carried through a single decorated invocation
//!
//! The context is an opaque key/value carrier. The injection machinery never
//! interprets it; it only hands it to every provider and to the wrapped
//! action. Clones share the same item map, so a value written by the caller
//! before the call, by a provider, or by the action is visible to all of them.
//!
//! # Examples
//!
//! ```
//! use domain::ExecutionContext;
//!
//! let ctx = ExecutionContext::with_operation_key("fetch-profile");
//! ctx.insert("tenant", "acme").expect("serializable");
//!
//! let shared = ctx.clone();
//! assert_eq!(shared.get::<String>("tenant").unwrap().as_deref(), Some("acme"));
//! assert_eq!(shared.operation_key(), Some("fetch-profile"));
//! ```

use std::{collections::HashMap, sync::Arc};

use parking_lot::RwLock;
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;
use uuid::Uuid;

use crate::errors::DomainError;

/// Per-invocation key/value context
#[derive(Debug, Clone)]
pub struct ExecutionContext {
    operation_key: Option<String>,
    correlation_id: Uuid,
    items: Arc<RwLock<HashMap<String, Value>>>,
}

impl ExecutionContext {
    /// Create an empty context with a fresh correlation ID
    #[must_use]
    pub fn new() -> Self {
        Self {
            operation_key: None,
            correlation_id: Uuid::new_v4(),
            items: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Create an empty context tagged with an operation key
    #[must_use]
    pub fn with_operation_key(operation_key: impl Into<String>) -> Self {
        Self {
            operation_key: Some(operation_key.into()),
            ..Self::new()
        }
    }

    /// Create a context from existing items
    #[must_use]
    pub fn from_items(items: HashMap<String, Value>) -> Self {
        Self {
            items: Arc::new(RwLock::new(items)),
            ..Self::new()
        }
    }

    /// Operation key, if one was given
    pub fn operation_key(&self) -> Option<&str> {
        self.operation_key.as_deref()
    }

    /// Correlation ID for log correlation
    pub const fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }

    /// Store a serializable value under `key`, replacing any previous value
    pub fn insert<T: Serialize>(&self, key: impl Into<String>, value: T) -> Result<(), DomainError> {
        let key = key.into();
        let value = serde_json::to_value(value)
            .map_err(|e| DomainError::invalid_context_item(&key, e.to_string()))?;
        self.items.write().insert(key, value);
        Ok(())
    }

    /// Store a raw JSON value under `key`, returning the previous value
    pub fn insert_value(&self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.items.write().insert(key.into(), value)
    }

    /// Read and deserialize the value stored under `key`
    ///
    /// Returns `Ok(None)` when the key is absent.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, DomainError> {
        let Some(value) = self.get_value(key) else {
            return Ok(None);
        };
        serde_json::from_value(value)
            .map(Some)
            .map_err(|e| DomainError::invalid_context_item(key, e.to_string()))
    }

    /// Clone the raw JSON value stored under `key`
    pub fn get_value(&self, key: &str) -> Option<Value> {
        self.items.read().get(key).cloned()
    }

    /// Remove the value stored under `key`
    pub fn remove(&self, key: &str) -> Option<Value> {
        self.items.write().remove(key)
    }

    /// Check whether `key` is present
    pub fn contains_key(&self, key: &str) -> bool {
        self.items.read().contains_key(key)
    }

    /// Number of stored items
    pub fn len(&self) -> usize {
        self.items.read().len()
    }

    /// Check whether the context holds no items
    pub fn is_empty(&self) -> bool {
        self.items.read().is_empty()
    }

    /// Copy of all items at this point in time
    pub fn snapshot(&self) -> HashMap<String, Value> {
        self.items.read().clone()
    }
}

impl Default for ExecutionContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn new_context_is_empty() {
        let ctx = ExecutionContext::new();
        assert!(ctx.is_empty());
        assert_eq!(ctx.len(), 0);
        assert!(ctx.operation_key().is_none());
        assert!(!ctx.correlation_id().is_nil());
    }

    #[test]
    fn correlation_ids_are_unique() {
        assert_ne!(
            ExecutionContext::new().correlation_id(),
            ExecutionContext::new().correlation_id()
        );
    }

    #[test]
    fn insert_and_get_typed() {
        let ctx = ExecutionContext::new();
        ctx.insert("attempt", 3_u32).unwrap();
        assert_eq!(ctx.get::<u32>("attempt").unwrap(), Some(3));
        assert_eq!(ctx.get::<u32>("missing").unwrap(), None);
    }

    #[test]
    fn get_with_wrong_type_fails() {
        let ctx = ExecutionContext::new();
        ctx.insert("name", "alice").unwrap();
        let err = ctx.get::<u32>("name").unwrap_err();
        assert!(matches!(err, DomainError::InvalidContextItem { ref key, .. } if key == "name"));
    }

    #[test]
    fn clones_share_items() {
        let ctx = ExecutionContext::with_operation_key("op");
        let clone = ctx.clone();
        clone.insert_value("seen", json!(true));

        assert_eq!(ctx.get_value("seen"), Some(json!(true)));
        assert_eq!(ctx.correlation_id(), clone.correlation_id());
        assert_eq!(clone.operation_key(), Some("op"));
    }

    #[test]
    fn insert_value_returns_previous() {
        let ctx = ExecutionContext::new();
        assert!(ctx.insert_value("k", json!(1)).is_none());
        assert_eq!(ctx.insert_value("k", json!(2)), Some(json!(1)));
    }

    #[test]
    fn remove_and_contains() {
        let ctx = ExecutionContext::new();
        ctx.insert_value("k", json!("v"));
        assert!(ctx.contains_key("k"));
        assert_eq!(ctx.remove("k"), Some(json!("v")));
        assert!(!ctx.contains_key("k"));
    }

    #[test]
    fn from_items_and_snapshot() {
        let mut items = HashMap::new();
        items.insert("region".to_string(), json!("eu-west"));
        let ctx = ExecutionContext::from_items(items);

        let snapshot = ctx.snapshot();
        ctx.insert_value("later", json!(1));

        assert_eq!(snapshot.len(), 1);
        assert_eq!(ctx.len(), 2);
    }
}
