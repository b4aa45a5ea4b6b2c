//! CodeChef provider client
//!
//! Single unofficial stats API. This is the one source with an "always
//! some data" guarantee: any failure, including a response whose own
//! `success` flag is false, yields the static fallback constant instead
//! of an absent slot.

use reqwest::Client;
use serde::Deserialize;
use tracing::warn;

use super::upstream::get_json;
use crate::models::CodeChefStats;

const CODECHEF_API_URL: &str = "https://codechef-api.vercel.app";

/// Upstream response shape
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CodeChefResponse {
    #[serde(default)]
    success: bool,
    current_rating: Option<u32>,
    highest_rating: Option<u32>,
    stars: Option<String>,
    global_rank: Option<u64>,
    country_rank: Option<u64>,
    total_problems_solved: Option<u64>,
    contests_attended: Option<u64>,
}

#[derive(Clone)]
pub struct CodeChefClient {
    http: Client,
    base_url: String,
    username: String,
}

impl CodeChefClient {
    pub fn new(http: Client, username: impl Into<String>) -> Self {
        Self::with_base_url(http, CODECHEF_API_URL, username)
    }

    /// Client pointed at an alternative API root (for testing)
    pub fn with_base_url(
        http: Client,
        base_url: impl Into<String>,
        username: impl Into<String>,
    ) -> Self {
        Self {
            http,
            base_url: base_url.into(),
            username: username.into(),
        }
    }

    /// Fetch and normalize the CodeChef stats slot; infallible by policy
    pub async fn fetch_stats(&self) -> CodeChefStats {
        let url = format!("{}/handle/{}", self.base_url, self.username);
        match get_json::<CodeChefResponse>(&self.http, &url).await {
            Ok(raw) if raw.success => normalize(raw, &self.username),
            Ok(_) => {
                warn!("CodeChef API reported failure, using fallback stats");
                CodeChefStats::fallback(&self.username)
            }
            Err(e) => {
                warn!(error = %e, "CodeChef API unreachable, using fallback stats");
                CodeChefStats::fallback(&self.username)
            }
        }
    }
}

fn normalize(raw: CodeChefResponse, username: &str) -> CodeChefStats {
    CodeChefStats {
        rating: raw.current_rating.unwrap_or(0),
        max_rating: raw.highest_rating.unwrap_or(0),
        stars: raw.stars.unwrap_or_default(),
        global_rank: raw.global_rank,
        country_rank: raw.country_rank,
        problems_solved: raw.total_problems_solved.unwrap_or(0),
        contests: raw.contests_attended.unwrap_or(0),
        profile_url: format!("https://www.codechef.com/users/{username}"),
    }
}
