//! Classification cache
//!
//! Persisted sender-category lookups keyed by address. Thread ids are
//! ephemeral in the surrounding message store, so the address string is the
//! cache key. A stored schema version gates every lookup: when the cached
//! layout is behind the current algorithm version the whole cache is cleared
//! once rather than patched entry by entry.

use std::path::Path;

use tracing::{debug, info};

use crate::classifier::Classifier;
use crate::error::{Result, TriageError};
use crate::metrics;
use crate::models::MessageCategory;

/// Current layout version of the persisted cache. Bump when the
/// classification algorithm changes in a way that invalidates old results.
pub const SCHEMA_VERSION: u32 = 2;

/// Reserved key the schema version integer is stored under
pub const VERSION_KEY: &str = "__schema_version";

/// Minimal string key-value store the cache persists through.
///
/// Implementations only need get/put/clear semantics; the cache owns key
/// construction and versioning.
#[cfg_attr(test, mockall::automock)]
pub trait KeyValueStore {
    /// Fetch the value stored under `key`
    fn get(&self, key: &str) -> Result<Option<String>>;
    /// Store `value` under `key`
    fn put(&self, key: &str, value: &str) -> Result<()>;
    /// Drop every stored entry
    fn clear(&self) -> Result<()>;
}

/// sled-backed key-value store
pub struct SledStore {
    db: sled::Db,
}

impl SledStore {
    /// Open (or create) a store rooted at `path`
    pub fn open(path: &Path) -> Result<Self> {
        std::fs::create_dir_all(path)?;

        let db = sled::open(path)
            .map_err(|e| TriageError::Cache(format!("Failed to open cache database: {e}")))?;

        Ok(Self { db })
    }
}

impl KeyValueStore for SledStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        match self.db.get(key.as_bytes())? {
            Some(data) => {
                let value = String::from_utf8(data.to_vec())
                    .map_err(|e| TriageError::Cache(format!("Corrupt cache value: {e}")))?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    fn put(&self, key: &str, value: &str) -> Result<()> {
        self.db.insert(key.as_bytes(), value.as_bytes())?;
        self.db.flush()?;
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        self.db.clear()?;
        self.db.flush()?;
        Ok(())
    }
}

/// Cached sender classification over an injected key-value store
pub struct CategoryCache<S: KeyValueStore> {
    store: S,
    classifier: Classifier,
}

impl<S: KeyValueStore> CategoryCache<S> {
    /// Build a cache over `store` using `classifier` for misses
    pub const fn new(store: S, classifier: Classifier) -> Self {
        Self { store, classifier }
    }

    /// Look up the category for `address`, computing and persisting on a miss.
    ///
    /// An address-level `Unknown` escalates to content inference over
    /// `recent_bodies`, and the inferred category (never `Unknown`) is what
    /// gets persisted.
    pub fn get_or_compute(
        &self,
        address: &str,
        recent_bodies: &[String],
    ) -> Result<MessageCategory> {
        self.ensure_version()?;

        let key = cache_key(address);
        if let Some(stored) = self.store.get(&key)? {
            metrics::record_cache_lookup(true);
            return Ok(MessageCategory::parse(&stored));
        }
        metrics::record_cache_lookup(false);

        let mut category = self.classifier.classify_address(address);
        let source = if category == MessageCategory::Unknown {
            category = self.classifier.infer_from_content(recent_bodies);
            "content"
        } else {
            "header"
        };

        metrics::record_classification(category, source);
        debug!(address, category = %category, source, "Classified sender");

        self.store.put(&key, category.as_str())?;
        Ok(category)
    }

    /// Clear the whole cache when the stored schema version is behind the
    /// current one, then record the current version
    fn ensure_version(&self) -> Result<()> {
        let stored = self
            .store
            .get(VERSION_KEY)?
            .and_then(|v| v.parse::<u32>().ok())
            .unwrap_or(0);

        if stored < SCHEMA_VERSION {
            info!(stored, current = SCHEMA_VERSION, "Cache schema outdated, clearing");
            metrics::record_cache_invalidation();
            self.store.clear()?;
            self.store.put(VERSION_KEY, &SCHEMA_VERSION.to_string())?;
        }

        Ok(())
    }
}

fn cache_key(address: &str) -> String {
    format!("category:{}", address.trim())
}
