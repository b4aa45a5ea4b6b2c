//! LeetCode provider client
//!
//! Two community stat APIs with different response shapes. The primary is
//! tried first; a response without a total-solved count, or any failure,
//! falls through to the alternate. When both are unavailable the source
//! is `None`; there is no static fallback for LeetCode.

use reqwest::Client;
use serde::Deserialize;
use tracing::warn;

use super::upstream::get_json;
use crate::models::LeetCodeStats;

const PRIMARY_API_URL: &str = "https://leetcode-api-faisalshohag.vercel.app";
const ALTERNATE_API_URL: &str = "https://alfa-leetcode-api.onrender.com";

/// Primary API response shape
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PrimaryResponse {
    total_solved: Option<u64>,
    #[serde(default)]
    easy_solved: u64,
    #[serde(default)]
    medium_solved: u64,
    #[serde(default)]
    hard_solved: u64,
    ranking: Option<u64>,
    acceptance_rate: Option<f64>,
    #[serde(default)]
    contribution_points: u64,
}

/// Alternate API response shape (`/{user}/solved`)
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AlternateResponse {
    #[serde(default)]
    solved_problem: u64,
    #[serde(default)]
    easy_solved: u64,
    #[serde(default)]
    medium_solved: u64,
    #[serde(default)]
    hard_solved: u64,
    ranking: Option<u64>,
    acceptance_rate: Option<f64>,
}

/// Client with primary/alternate failover
#[derive(Clone)]
pub struct LeetCodeClient {
    http: Client,
    primary_url: String,
    alternate_url: String,
    username: String,
}

impl LeetCodeClient {
    pub fn new(http: Client, username: impl Into<String>) -> Self {
        Self::with_api_urls(http, PRIMARY_API_URL, ALTERNATE_API_URL, username)
    }

    /// Client pointed at alternative API roots (for testing)
    pub fn with_api_urls(
        http: Client,
        primary_url: impl Into<String>,
        alternate_url: impl Into<String>,
        username: impl Into<String>,
    ) -> Self {
        Self {
            http,
            primary_url: primary_url.into(),
            alternate_url: alternate_url.into(),
            username: username.into(),
        }
    }

    /// Fetch and normalize the LeetCode stats slot
    pub async fn fetch_stats(&self) -> Option<LeetCodeStats> {
        let url = format!("{}/{}", self.primary_url, self.username);
        match get_json::<PrimaryResponse>(&self.http, &url).await {
            Ok(raw) if raw.total_solved.is_some() => Some(normalize_primary(raw, &self.username)),
            Ok(_) => {
                warn!("LeetCode primary API response incomplete, trying alternate");
                self.fetch_alternate().await
            }
            Err(e) => {
                warn!(error = %e, "LeetCode primary API failed, trying alternate");
                self.fetch_alternate().await
            }
        }
    }

    async fn fetch_alternate(&self) -> Option<LeetCodeStats> {
        let url = format!("{}/{}/solved", self.alternate_url, self.username);
        match get_json::<AlternateResponse>(&self.http, &url).await {
            Ok(raw) => Some(normalize_alternate(raw, &self.username)),
            Err(e) => {
                warn!(error = %e, "LeetCode alternate API also failed");
                None
            }
        }
    }
}

fn profile_url(username: &str) -> String {
    format!("https://leetcode.com/{username}")
}

fn normalize_primary(raw: PrimaryResponse, username: &str) -> LeetCodeStats {
    LeetCodeStats {
        total_solved: raw.total_solved.unwrap_or(0),
        easy_solved: raw.easy_solved,
        medium_solved: raw.medium_solved,
        hard_solved: raw.hard_solved,
        ranking: raw.ranking,
        acceptance_rate: raw.acceptance_rate,
        contribution_points: raw.contribution_points,
        profile_url: profile_url(username),
    }
}

/// The alternate API never reports contribution points; they default to 0.
fn normalize_alternate(raw: AlternateResponse, username: &str) -> LeetCodeStats {
    LeetCodeStats {
        total_solved: raw.solved_problem,
        easy_solved: raw.easy_solved,
        medium_solved: raw.medium_solved,
        hard_solved: raw.hard_solved,
        ranking: raw.ranking,
        acceptance_rate: raw.acceptance_rate,
        contribution_points: 0,
        profile_url: profile_url(username),
    }
}
