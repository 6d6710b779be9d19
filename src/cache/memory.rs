// ABOUTME: In-memory query cache with LRU eviction and per-entry stale times
// ABOUTME: Serves fresh answers without a request and drops stale ones on read
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Gym Sharks

use crate::logging::AppLogger;
use gym_sharks_core::constants::limits::QUERY_CACHE_ENTRIES;
use gym_sharks_core::errors::AppResult;
use lru::LruCache;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::future::Future;
use std::num::NonZeroUsize;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::time::Instant;
use tracing::debug;

/// Cached answer with the moment it goes stale
#[derive(Debug, Clone)]
struct CacheEntry {
    data: serde_json::Value,
    stale_at: Instant,
}

impl CacheEntry {
    fn new(data: serde_json::Value, stale_after: Duration) -> Self {
        Self {
            data,
            stale_at: Instant::now() + stale_after,
        }
    }

    fn is_stale(&self) -> bool {
        Instant::now() >= self.stale_at
    }
}

/// Query results keyed by resource path
///
/// Cloning shares the same entries.
#[derive(Debug, Clone)]
pub struct QueryCache {
    store: Arc<RwLock<LruCache<String, CacheEntry>>>,
}

impl Default for QueryCache {
    fn default() -> Self {
        Self::new(QUERY_CACHE_ENTRIES)
    }
}

impl QueryCache {
    const DEFAULT_CAPACITY: NonZeroUsize = match NonZeroUsize::new(QUERY_CACHE_ENTRIES) {
        Some(n) => n,
        None => unreachable!(),
    };

    /// Cache holding at most `capacity` entries
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(Self::DEFAULT_CAPACITY);
        Self {
            store: Arc::new(RwLock::new(LruCache::new(capacity))),
        }
    }

    /// Fresh value under `key`; stale or undecodable entries are dropped
    pub async fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let mut store = self.store.write().await;
        let (stale, data) = {
            let entry = store.get(key)?;
            (entry.is_stale(), entry.data.clone())
        };
        if stale {
            store.pop(key);
            return None;
        }
        match serde_json::from_value(data) {
            Ok(value) => Some(value),
            Err(error) => {
                debug!(key, error = %error, "cached value has a different shape, dropping");
                store.pop(key);
                None
            }
        }
    }

    /// Store `value` under `key` for `stale_after`
    ///
    /// # Errors
    ///
    /// Returns a serialization error when `value` cannot be encoded
    pub async fn set<T: Serialize + Sync>(
        &self,
        key: &str,
        value: &T,
        stale_after: Duration,
    ) -> AppResult<()> {
        let entry = CacheEntry::new(serde_json::to_value(value)?, stale_after);
        self.store.write().await.push(key.to_owned(), entry);
        Ok(())
    }

    /// Fresh cached value, or the result of `fetch` which is then cached
    ///
    /// Failed fetches are not cached.
    ///
    /// # Errors
    ///
    /// Propagates the error returned by `fetch`
    pub async fn get_or_fetch<T, F, Fut>(
        &self,
        key: &str,
        stale_after: Duration,
        fetch: F,
    ) -> AppResult<T>
    where
        T: Serialize + DeserializeOwned + Send + Sync,
        F: FnOnce() -> Fut + Send,
        Fut: Future<Output = AppResult<T>> + Send,
    {
        if let Some(value) = self.get(key).await {
            AppLogger::log_query(key, true);
            return Ok(value);
        }
        AppLogger::log_query(key, false);
        let value = fetch().await?;
        self.set(key, &value, stale_after).await?;
        Ok(value)
    }

    /// Drop every key starting with `prefix`, returning how many went
    pub async fn invalidate_prefix(&self, prefix: &str) -> usize {
        let mut store = self.store.write().await;
        let keys_to_remove: Vec<String> = store
            .iter()
            .filter(|(key, _)| key.starts_with(prefix))
            .map(|(key, _)| key.clone())
            .collect();
        for key in &keys_to_remove {
            store.pop(key);
        }
        drop(store);
        debug!(prefix, removed = keys_to_remove.len(), "invalidated cached queries");
        keys_to_remove.len()
    }

    /// Number of entries, stale ones included
    pub async fn len(&self) -> usize {
        self.store.read().await.len()
    }

    /// True when nothing is cached
    pub async fn is_empty(&self) -> bool {
        self.store.read().await.is_empty()
    }

    /// Drop everything
    pub async fn clear(&self) {
        self.store.write().await.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::keys;
    use gym_sharks_core::errors::AppError;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::time::advance;

    #[tokio::test(start_paused = true)]
    async fn test_entries_go_stale() {
        let cache = QueryCache::new(8);
        cache.set("home-workouts", &vec![1, 2, 3], Duration::from_secs(300)).await.unwrap();
        assert_eq!(cache.get::<Vec<u32>>("home-workouts").await, Some(vec![1, 2, 3]));

        advance(Duration::from_secs(301)).await;
        assert_eq!(cache.get::<Vec<u32>>("home-workouts").await, None);
        assert!(cache.is_empty().await);
    }

    #[tokio::test]
    async fn test_get_or_fetch_only_fetches_when_missing() {
        let cache = QueryCache::default();
        let counter = AtomicUsize::new(0);
        let calls = &counter;
        for _ in 0..3 {
            let value: String = cache
                .get_or_fetch("health", Duration::from_secs(60), move || async move {
                    calls.fetch_add(1, Ordering::SeqCst);
                    Ok("ok".to_owned())
                })
                .await
                .unwrap();
            assert_eq!(value, "ok");
        }
        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_failed_fetch_is_not_cached() {
        let cache = QueryCache::default();
        let result: AppResult<u32> = cache
            .get_or_fetch("diets", Duration::from_secs(60), || async {
                Err(AppError::internal("boom"))
            })
            .await;
        assert!(result.is_err());
        assert!(cache.is_empty().await);
    }

    #[tokio::test]
    async fn test_invalidate_prefix() {
        let cache = QueryCache::default();
        let minute = Duration::from_secs(60);
        cache.set(keys::WORKOUTS, &1, minute).await.unwrap();
        cache.set(keys::FEATURED_WORKOUTS, &2, minute).await.unwrap();
        cache.set(&keys::workout("w1"), &3, minute).await.unwrap();
        cache.set(keys::MEMBERSHIPS, &4, minute).await.unwrap();
        assert_eq!(cache.invalidate_prefix(keys::WORKOUTS).await, 3);
        assert_eq!(cache.len().await, 1);
        assert_eq!(cache.get::<i32>(keys::MEMBERSHIPS).await, Some(4));
    }

    #[tokio::test]
    async fn test_capacity_evicts_least_recent() {
        let cache = QueryCache::new(2);
        let minute = Duration::from_secs(60);
        cache.set("a", &1, minute).await.unwrap();
        cache.set("b", &2, minute).await.unwrap();
        let _: Option<u32> = cache.get("a").await;
        cache.set("c", &3, minute).await.unwrap();
        assert_eq!(cache.get::<u32>("b").await, None);
        assert_eq!(cache.get::<u32>("a").await, Some(1));
    }
}
