//! Stats aggregation service
//!
//! Orchestrates the three per-source fetches behind the single-slot stats
//! cache: cache check, concurrent fan-out, combine, cache write, respond.
//! The aggregation itself never fails a request; total upstream failure
//! still produces a snapshot with absent slots (and the CodeChef
//! fallback, which is never absent).

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::{debug, info};

use super::cache::TtlCache;
use super::clock::Clock;
use super::codechef::CodeChefClient;
use super::github::GithubClient;
use super::leetcode::LeetCodeClient;
use crate::models::{CodeChefStats, CodingStats, GithubStats, LeetCodeStats};

/// The three upstream sources behind one seam, so the aggregator can be
/// exercised without network access.
#[async_trait]
pub trait StatsSources: Send + Sync {
    async fn github(&self) -> Option<GithubStats>;
    async fn leetcode(&self) -> Option<LeetCodeStats>;
    async fn codechef(&self) -> CodeChefStats;
}

/// Production sources wrapping the real provider clients
pub struct LiveSources {
    github: GithubClient,
    leetcode: LeetCodeClient,
    codechef: CodeChefClient,
}

impl LiveSources {
    pub fn new(github: GithubClient, leetcode: LeetCodeClient, codechef: CodeChefClient) -> Self {
        Self {
            github,
            leetcode,
            codechef,
        }
    }
}

#[async_trait]
impl StatsSources for LiveSources {
    async fn github(&self) -> Option<GithubStats> {
        self.github.fetch_stats().await
    }

    async fn leetcode(&self) -> Option<LeetCodeStats> {
        self.leetcode.fetch_stats().await
    }

    async fn codechef(&self) -> CodeChefStats {
        self.codechef.fetch_stats().await
    }
}

/// Result of one stats query
#[derive(Debug, Clone)]
pub struct StatsReport {
    pub stats: CodingStats,
    /// Whether the snapshot was served from cache
    pub cached: bool,
    /// When the snapshot was built
    pub last_updated: DateTime<Utc>,
}

/// Aggregator over the three sources with a time-boxed cache
pub struct StatsService {
    sources: Arc<dyn StatsSources>,
    cache: TtlCache<CodingStats>,
}

impl StatsService {
    pub fn new(sources: Arc<dyn StatsSources>, ttl_secs: u64, clock: Arc<dyn Clock>) -> Self {
        Self {
            sources,
            cache: TtlCache::from_secs(ttl_secs, clock),
        }
    }

    /// Serve the combined snapshot, from cache when fresh.
    ///
    /// On a miss all three source fetches are issued concurrently and
    /// joined before the snapshot is built, so partial snapshots are
    /// never observable.
    pub async fn get_stats(&self) -> StatsReport {
        if let Some(hit) = self.cache.get().await {
            debug!("serving coding stats from cache");
            return StatsReport {
                stats: hit.value,
                cached: true,
                last_updated: hit.stored_at,
            };
        }

        info!("fetching fresh coding stats from upstream APIs");
        let (github, leetcode, codechef) = tokio::join!(
            self.sources.github(),
            self.sources.leetcode(),
            self.sources.codechef(),
        );

        let stats = CodingStats {
            github,
            leetcode,
            codechef,
        };

        let last_updated = self.cache.put(stats.clone()).await;

        StatsReport {
            stats,
            cached: false,
            last_updated,
        }
    }

    /// Clear the cache so the next query refetches
    pub async fn refresh(&self) {
        self.cache.invalidate().await;
        info!("coding stats cache cleared");
    }
}
