//! Guardian cache keyed by principal and organization
//!
//! Guardians are cheap to build, but callers that answer many requests for
//! the same principal (listing a tree, serving a session) can reuse one.
//! There is no TTL: the upstream resolver owns synchronization with
//! permission changes and calls [`GuardianCache::invalidate`] when a
//! principal's permissions change.

use dashmap::DashMap;
use std::sync::Arc;

use super::Guardian;
use crate::types::{OrgId, Principal};

/// Statistics about cache performance
#[derive(Debug, Clone, Default)]
pub struct CacheStats {
    /// Number of cache hits
    pub hits: usize,
    /// Number of cache misses
    pub misses: usize,
    /// Total number of cached guardians
    pub entries: usize,
}

impl CacheStats {
    /// Calculate the cache hit rate
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

/// Thread-safe cache of constructed guardians
///
/// # Examples
///
/// ```
/// use filestore_authz::{file_scope, GuardianCache, PermissionSet, Principal};
///
/// let mut permissions = PermissionSet::new();
/// permissions.grant(1, "files:read", vec![file_scope("/b/*")]);
/// let principal = Principal::new("user:alice", 1).with_permissions(permissions);
///
/// let cache = GuardianCache::new();
/// let guardian = cache.get_or_build(&principal);
/// assert!(guardian.can("files:read", "/b/a.jpg"));
///
/// // Second lookup reuses the cached guardian
/// cache.get_or_build(&principal);
/// assert_eq!(cache.stats().hits, 1);
/// ```
pub struct GuardianCache {
    /// Cached guardians keyed by (principal id, organization)
    guardians: DashMap<(String, OrgId), Arc<Guardian>>,
    /// Cache statistics
    stats: DashMap<String, usize>,
}

impl GuardianCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self {
            guardians: DashMap::new(),
            stats: DashMap::new(),
        }
    }

    /// Return the cached guardian for the principal, building one if absent
    pub fn get_or_build(&self, principal: &Principal) -> Arc<Guardian> {
        let key = (principal.id.clone(), principal.org_id);

        if let Some(guardian) = self.guardians.get(&key) {
            self.increment_stat("hits");
            return Arc::clone(&guardian);
        }

        self.increment_stat("misses");
        let guardian = Arc::new(Guardian::new(principal));
        self.guardians.insert(key, Arc::clone(&guardian));
        guardian
    }

    /// Drop every cached guardian for `principal_id`, across organizations
    ///
    /// Call this when the upstream resolver reports a permission change for
    /// the principal.
    pub fn invalidate(&self, principal_id: &str) {
        self.guardians.retain(|(id, _), _| id.as_str() != principal_id);
    }

    /// Drop every cached guardian
    pub fn clear(&self) {
        self.guardians.clear();
        self.stats.clear();
    }

    /// Number of cached guardians
    pub fn len(&self) -> usize {
        self.guardians.len()
    }

    /// Whether the cache is empty
    pub fn is_empty(&self) -> bool {
        self.guardians.is_empty()
    }

    /// Return cache statistics
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.get_stat("hits"),
            misses: self.get_stat("misses"),
            entries: self.guardians.len(),
        }
    }

    fn increment_stat(&self, key: &str) {
        self.stats
            .entry(key.to_string())
            .and_modify(|count| *count += 1)
            .or_insert(1);
    }

    fn get_stat(&self, key: &str) -> usize {
        self.stats.get(key).map(|v| *v).unwrap_or(0)
    }
}

impl Default for GuardianCache {
    fn default() -> Self {
        Self::new()
    }
}
