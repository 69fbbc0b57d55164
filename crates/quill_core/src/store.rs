use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::warn;

use crate::Result;

/// Synchronous key-value persistence for typed collections.
///
/// Values cross the trait boundary as raw JSON so the trait stays
/// object-safe; callers go through the typed helpers on [`StoreExt`].
/// Writers to different keys never interfere; writes to the same key are
/// last-write-wins.
pub trait KeyValueStore: Send + Sync {
    /// Returns the stored value, or `None` when the key has never been
    /// written.
    fn load_raw(&self, key: &str) -> Result<Option<Value>>;

    fn save_raw(&self, key: &str, value: Value) -> Result<()>;
}

pub trait StoreExt {
    /// Loads and decodes the value under `key`, falling back to `default`
    /// when the key is absent, unreadable, or undecodable. The fallback
    /// cases are logged, never raised.
    fn load_or<T: DeserializeOwned>(&self, key: &str, default: T) -> T;

    fn save<T: Serialize>(&self, key: &str, value: &T) -> Result<()>;
}

impl<S: KeyValueStore + ?Sized> StoreExt for S {
    fn load_or<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        match self.load_raw(key) {
            Ok(Some(value)) => match serde_json::from_value(value) {
                Ok(parsed) => parsed,
                Err(e) => {
                    warn!("Stored value under '{}' is undecodable, using default: {}", key, e);
                    default
                }
            },
            Ok(None) => default,
            Err(e) => {
                warn!("Failed to read '{}', using default: {}", key, e);
                default
            }
        }
    }

    fn save<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        self.save_raw(key, serde_json::to_value(value)?)
    }
}
