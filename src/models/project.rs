//! Project models
//!
//! Raw GitHub API response shapes, the project summary derived from them
//! for the portfolio grid, and the curated project documents seeded into
//! the in-process store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Raw GitHub user profile response (the fields we consume)
///
/// Every numeric field defaults to 0 when absent so a partial upstream
/// response never fails decoding.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GithubUser {
    #[serde(default)]
    pub public_repos: u64,
    #[serde(default)]
    pub followers: u64,
    #[serde(default)]
    pub following: u64,
    #[serde(default)]
    pub public_gists: u64,
    #[serde(default)]
    pub html_url: String,
    #[serde(default)]
    pub avatar_url: String,
}

/// Raw GitHub repository response (the fields we consume)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GithubRepo {
    pub id: u64,
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub topics: Vec<String>,
    #[serde(default)]
    pub html_url: String,
    pub homepage: Option<String>,
    #[serde(default)]
    pub stargazers_count: u64,
    #[serde(default)]
    pub forks_count: u64,
    pub language: Option<String>,
    #[serde(default)]
    pub fork: bool,
    #[serde(default)]
    pub private: bool,
    pub updated_at: Option<DateTime<Utc>>,
    pub created_at: Option<DateTime<Utc>>,
}

/// Repository summary shaped for the portfolio project grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSummary {
    pub id: String,
    pub title: String,
    pub description: String,
    /// At most 5 entries: repository topics, or the primary language
    pub tech_stack: Vec<String>,
    /// Social preview image URL
    pub image: String,
    pub github: String,
    pub live: Option<String>,
    pub stars: u64,
    pub forks: u64,
    pub language: Option<String>,
    pub updated_at: Option<DateTime<Utc>>,
    pub created_at: Option<DateTime<Utc>>,
}

/// Curated project document served by the static project listing
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CuratedProject {
    pub title: String,
    pub description: String,
    pub tech_stack: Vec<String>,
    pub image: String,
    pub github: String,
    pub live: String,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub order: u32,
}
