//! Per-request context shared between handlers.

use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

type Value = Arc<dyn Any + Send + Sync>;

/// A string-keyed store of arbitrary typed values.
///
/// Middleware uses the context to hand derived data (a parsed body, an authenticated
/// principal, a request id) to the handlers after it. The store is copy-on-write: cloning
/// a context is cheap, and [`Context::with`] leaves the original untouched.
#[derive(Clone, Default)]
pub struct Context {
    values: Arc<HashMap<String, Value>>,
}

impl Context {
    /// Create an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a new context with `key` bound to `value`.
    pub fn with<T>(&self, key: impl Into<String>, value: T) -> Self
    where
        T: Any + Send + Sync,
    {
        let mut values = HashMap::clone(&self.values);
        values.insert(key.into(), Arc::new(value));
        Self {
            values: Arc::new(values),
        }
    }

    /// Return a new context without `key`.
    pub fn without(&self, key: &str) -> Self {
        if !self.values.contains_key(key) {
            return self.clone();
        }
        let mut values = HashMap::clone(&self.values);
        values.remove(key);
        Self {
            values: Arc::new(values),
        }
    }

    /// Get the value stored under `key`, if there is one of type `T`.
    pub fn get<T: Any>(&self, key: &str) -> Option<&T> {
        self.values.get(key)?.downcast_ref::<T>()
    }

    /// Check if anything is stored under `key`, whatever its type.
    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over the stored keys.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut keys: Vec<&str> = self.keys().collect();
        keys.sort_unstable();
        f.debug_struct("Context").field("keys", &keys).finish()
    }
}
