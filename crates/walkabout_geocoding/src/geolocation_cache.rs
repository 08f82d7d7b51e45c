use std::future::Future;

use fxhash::FxHashMap;
use parking_lot::RwLock;
use tracing::debug;

/// Process-wide map from a client network identifier to its approximate position.
///
/// Entries never expire. Resolution runs without holding the lock, so two
/// concurrent first lookups may both resolve; the first insert wins and both
/// callers get that value.
#[derive(Default)]
pub struct GeolocationCache {
    entries: RwLock<FxHashMap<String, geo_types::Point>>,
}

impl GeolocationCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<geo_types::Point> {
        self.entries.read().get(key).copied()
    }

    pub async fn get_or_resolve<F, Fut, E>(
        &self,
        key: &str,
        resolve: F,
    ) -> Result<geo_types::Point, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<geo_types::Point, E>>,
    {
        if let Some(point) = self.get(key) {
            return Ok(point);
        }

        debug!("GeolocationCache: resolving {}", key);
        let resolved = resolve().await?;

        let mut entries = self.entries.write();
        Ok(*entries.entry(key.to_string()).or_insert(resolved))
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}
