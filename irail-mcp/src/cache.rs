//! Caching layer for iRail API responses.
//!
//! Live data goes stale quickly, so entries live for a short TTL. Bodies
//! are cached raw and keyed by the exact request (endpoint plus query
//! parameters), so two requests share an entry only if they would send
//! the same query.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache as MokaCache;
use serde::de::DeserializeOwned;

use crate::irail::{
    BoardKind, Connections, Disturbances, IrailClient, IrailError, IrailRequest, Liveboard,
    TimeSelection, VehicleJourney, parse,
};

/// Configuration for the cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// TTL for cached entries. Zero disables caching.
    pub ttl: Duration,

    /// Maximum number of cached entries.
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(30),
            max_capacity: 500,
        }
    }
}

impl CacheConfig {
    pub fn is_enabled(&self) -> bool {
        !self.ttl.is_zero()
    }
}

/// Cache of raw response bodies.
pub struct ResponseCache {
    bodies: MokaCache<String, Arc<str>>,
}

impl ResponseCache {
    /// Create a new cache with the given configuration.
    pub fn new(config: &CacheConfig) -> Self {
        let bodies = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self { bodies }
    }

    pub async fn get(&self, key: &str) -> Option<Arc<str>> {
        self.bodies.get(key).await
    }

    pub async fn insert(&self, key: String, body: Arc<str>) {
        self.bodies.insert(key, body).await;
    }

    /// Get cache statistics (for monitoring).
    pub fn entry_count(&self) -> u64 {
        self.bodies.entry_count()
    }
}

/// iRail client with caching.
///
/// Wraps an `IrailClient` and caches successful response bodies. Errors
/// are never cached.
pub struct CachedIrailClient {
    client: IrailClient,
    cache: Option<ResponseCache>,
}

impl CachedIrailClient {
    /// Create a new cached client. A zero TTL yields a pass-through client.
    pub fn new(client: IrailClient, cache_config: &CacheConfig) -> Self {
        let cache = cache_config
            .is_enabled()
            .then(|| ResponseCache::new(cache_config));
        Self { client, cache }
    }

    async fn get<T: DeserializeOwned>(&self, request: &IrailRequest) -> Result<T, IrailError> {
        let Some(cache) = &self.cache else {
            return self.client.get(request).await;
        };

        let key = request.cache_key();

        if let Some(body) = cache.get(&key).await {
            tracing::debug!(%key, "cache hit");
            return parse(&body);
        }

        let body = self.client.fetch(request).await?;
        // Parse before caching so a malformed body is not served again.
        let value = parse(&body)?;
        cache.insert(key, Arc::from(body)).await;

        Ok(value)
    }

    /// Departures or arrivals at a station.
    pub async fn liveboard(
        &self,
        station: &str,
        when: chrono::NaiveDateTime,
        board: BoardKind,
        lang: &str,
    ) -> Result<Liveboard, IrailError> {
        self.get(&IrailRequest::liveboard(station, when, board, lang))
            .await
    }

    /// Route options between two stations.
    pub async fn connections(
        &self,
        from: &str,
        to: &str,
        when: chrono::NaiveDateTime,
        selection: TimeSelection,
        lang: &str,
    ) -> Result<Connections, IrailError> {
        self.get(&IrailRequest::connections(from, to, when, selection, lang))
            .await
    }

    /// A train's full run on a date.
    pub async fn vehicle(
        &self,
        id: &str,
        date: chrono::NaiveDate,
        lang: &str,
    ) -> Result<VehicleJourney, IrailError> {
        self.get(&IrailRequest::vehicle(id, date, lang)).await
    }

    /// Current disruptions and planned works.
    pub async fn disturbances(&self, lang: &str) -> Result<Disturbances, IrailError> {
        self.get(&IrailRequest::disturbances(lang)).await
    }

    /// Get cache statistics. Always zero when caching is disabled.
    pub fn cache_entry_count(&self) -> u64 {
        self.cache.as_ref().map_or(0, ResponseCache::entry_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::irail::IrailConfig;

    #[test]
    fn default_config() {
        let config = CacheConfig::default();
        assert_eq!(config.ttl, Duration::from_secs(30));
        assert_eq!(config.max_capacity, 500);
        assert!(config.is_enabled());
    }

    #[test]
    fn zero_ttl_disables_cache() {
        let config = CacheConfig {
            ttl: Duration::ZERO,
            ..Default::default()
        };
        assert!(!config.is_enabled());

        let client = IrailClient::new(IrailConfig::default()).unwrap();
        let cached = CachedIrailClient::new(client, &config);
        assert!(cached.cache.is_none());
        assert_eq!(cached.cache_entry_count(), 0);
    }

    #[tokio::test]
    async fn cache_roundtrip() {
        let cache = ResponseCache::new(&CacheConfig::default());
        assert!(cache.get("/disturbances/?lang=en").await.is_none());

        cache
            .insert("/disturbances/?lang=en".to_string(), Arc::from("{}"))
            .await;
        assert_eq!(
            cache.get("/disturbances/?lang=en").await.as_deref(),
            Some("{}")
        );
        assert!(cache.get("/disturbances/?lang=nl").await.is_none());
    }
}
