//! Coding-stats models
//!
//! Normalized per-source stat shapes and the combined snapshot served
//! by the stats aggregation endpoint.

use serde::{Deserialize, Serialize};

/// Normalized GitHub profile stats
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GithubStats {
    pub total_repos: u64,
    /// Stars summed across all public repositories
    pub total_stars: u64,
    /// Forks summed across all public repositories
    pub total_forks: u64,
    pub followers: u64,
    pub following: u64,
    pub public_gists: u64,
    pub profile_url: String,
    pub avatar_url: String,
}

/// Normalized LeetCode stats
///
/// `total_solved` is reported by the upstream independently of the
/// per-difficulty counts; the two are not reconciled here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeetCodeStats {
    pub total_solved: u64,
    pub easy_solved: u64,
    pub medium_solved: u64,
    pub hard_solved: u64,
    pub ranking: Option<u64>,
    pub acceptance_rate: Option<f64>,
    pub contribution_points: u64,
    pub profile_url: String,
}

/// Normalized CodeChef stats
///
/// This source carries an "always some data" guarantee: when the upstream
/// is unreachable the slot holds [`CodeChefStats::fallback`] instead of
/// being absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeChefStats {
    pub rating: u32,
    pub max_rating: u32,
    /// Star tier label, e.g. "2★"
    pub stars: String,
    pub global_rank: Option<u64>,
    pub country_rank: Option<u64>,
    pub problems_solved: u64,
    pub contests: u64,
    pub profile_url: String,
}

impl CodeChefStats {
    /// Static last-known-good values substituted when the upstream is
    /// entirely unreachable.
    pub fn fallback(username: &str) -> Self {
        Self {
            rating: 1497,
            max_rating: 1497,
            stars: "2★".to_string(),
            global_rank: Some(141_515),
            country_rank: None,
            problems_solved: 45,
            contests: 12,
            profile_url: format!("https://www.codechef.com/users/{username}"),
        }
    }
}

/// Combined snapshot of all three sources.
///
/// GitHub and LeetCode slots are `None` when the source was entirely
/// unreachable; the CodeChef slot always holds a value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CodingStats {
    pub github: Option<GithubStats>,
    pub leetcode: Option<LeetCodeStats>,
    pub codechef: CodeChefStats,
}
