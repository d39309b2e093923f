//! Redis hot-path cache operations.
//!
//! Redis holds two kinds of keys:
//!
//! | Pattern | Type | Description |
//! |---------|------|-------------|
//! | `country:{id}:snapshot` | JSON | Cached dashboard payload per country |
//! | `tiles:{layer}:{z}:{x}:{y}` | Binary | Rendered map tiles |
//!
//! Snapshot entries are written with a TTL and invalidated on every state
//! recomputation. Tile keys are invalidated by pattern when map source
//! data changes: a cursored SCAN walks the keyspace and deletes matches
//! in batches, so invalidation never blocks the server the way a `KEYS`
//! sweep would.

use fred::prelude::*;
use fred::types::scan::Scanner;
use futures::StreamExt;
use serde::de::DeserializeOwned;
use serde::Serialize;
use uuid::Uuid;

use crate::error::DbError;

/// Default TTL for country snapshot keys, in seconds.
const SNAPSHOT_TTL_SECS: i64 = 300;

/// SCAN page size for pattern invalidation.
const SCAN_BATCH: u32 = 200;

/// Connection handle to a Redis instance.
#[derive(Clone)]
pub struct CachePool {
    client: Client,
}

impl CachePool {
    /// Connect to Redis at the given URL.
    ///
    /// The URL should follow the Redis URL scheme:
    /// `redis://host:port` or `redis://host:port/db`
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Config`] if the URL cannot be parsed.
    /// Returns [`DbError::Redis`] if the connection fails.
    pub async fn connect(url: &str) -> Result<Self, DbError> {
        let config =
            Config::from_url(url).map_err(|e| DbError::Config(format!("Invalid Redis URL: {e}")))?;

        let client = Builder::from_config(config).build()?;
        client.init().await?;

        tracing::info!("Connected to Redis");
        Ok(Self { client })
    }

    // =========================================================================
    // Generic JSON get/set/delete
    // =========================================================================

    /// Serialize `value` as JSON and store it at `key` with a TTL.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Serialization`] if serialization fails.
    /// Returns [`DbError::Redis`] if the write fails.
    pub async fn set_json<T: Serialize>(
        &self,
        key: &str,
        value: &T,
        ttl_secs: i64,
    ) -> Result<(), DbError> {
        let json = serde_json::to_string(value)?;
        let _: () = self
            .client
            .set(key, json.as_str(), Some(Expiration::EX(ttl_secs)), None, false)
            .await?;
        Ok(())
    }

    /// Read the value at `key` and deserialize from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::KeyNotFound`] if the key does not exist.
    /// Returns [`DbError::Serialization`] if deserialization fails.
    /// Returns [`DbError::Redis`] if the read fails.
    pub async fn get_json<T: DeserializeOwned>(&self, key: &str) -> Result<T, DbError> {
        let value: Option<String> = self.client.get(key).await?;
        value.map_or_else(
            || Err(DbError::KeyNotFound(key.to_owned())),
            |s| Ok(serde_json::from_str(&s)?),
        )
    }

    /// Delete a key.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Redis`] if the delete fails.
    pub async fn delete(&self, key: &str) -> Result<(), DbError> {
        let _: u32 = self.client.del(key).await?;
        Ok(())
    }

    // =========================================================================
    // Country snapshots -- country:{id}:snapshot
    // =========================================================================

    /// Cache a country's dashboard snapshot with the default TTL.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if serialization or the write fails.
    pub async fn set_country_snapshot<T: Serialize>(
        &self,
        country_id: Uuid,
        snapshot: &T,
    ) -> Result<(), DbError> {
        self.set_json(&snapshot_key(country_id), snapshot, SNAPSHOT_TTL_SECS)
            .await
    }

    /// Fetch a country's cached dashboard snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::KeyNotFound`] on a cache miss; callers treat
    /// that (and an unreachable cache) as "recompute and refill".
    pub async fn get_country_snapshot<T: DeserializeOwned>(
        &self,
        country_id: Uuid,
    ) -> Result<T, DbError> {
        self.get_json(&snapshot_key(country_id)).await
    }

    /// Drop a country's cached snapshot (after a state recomputation).
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Redis`] if the delete fails.
    pub async fn invalidate_country_snapshot(&self, country_id: Uuid) -> Result<(), DbError> {
        self.delete(&snapshot_key(country_id)).await
    }

    // =========================================================================
    // Tile cache invalidation -- tiles:*
    // =========================================================================

    /// Delete every key matching the given glob pattern, returning the
    /// number of keys removed.
    ///
    /// Walks the keyspace with a cursored SCAN ([`SCAN_BATCH`] keys per
    /// page) and deletes each page of matches. Keys created mid-scan may
    /// survive until the next invalidation; the guarantee is "eventually
    /// deleted", not "atomically swept".
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Redis`] if the scan or a delete fails.
    pub async fn invalidate_pattern(&self, pattern: &str) -> Result<u64, DbError> {
        let mut deleted: u64 = 0;
        let mut scanner = self.client.scan(pattern, Some(SCAN_BATCH), None);

        while let Some(page) = scanner.next().await {
            let mut page = page?;
            if let Some(keys) = page.take_results() {
                if !keys.is_empty() {
                    let removed: u64 = self.client.del(keys).await?;
                    deleted = deleted.saturating_add(removed);
                }
            }
            // Request the next SCAN page; dropping without this ends the
            // stream early. A continuation failure surfaces as the next
            // stream item.
            let _ = page.next();
        }

        tracing::debug!(pattern, deleted, "Cache keys invalidated");
        Ok(deleted)
    }

    /// Invalidate every rendered map tile for a layer.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Redis`] if the scan or a delete fails.
    pub async fn invalidate_tiles(&self, layer: &str) -> Result<u64, DbError> {
        self.invalidate_pattern(&format!("tiles:{layer}:*")).await
    }
}

/// The snapshot key for a country.
fn snapshot_key(country_id: Uuid) -> String {
    format!("country:{country_id}:snapshot")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_keys_follow_the_pattern() {
        let id = Uuid::nil();
        assert_eq!(
            snapshot_key(id),
            "country:00000000-0000-0000-0000-000000000000:snapshot"
        );
    }
}
