//! GitHub provider client
//!
//! Wraps the GitHub REST API for the configured user: profile stats and
//! the public repository list. The stats normalizer requires both calls
//! to succeed; either failure collapses the whole source to `None`.

use async_trait::async_trait;
use reqwest::Client;
use tracing::warn;

use super::upstream::{FetchError, get_json};
use crate::models::{GithubRepo, GithubStats, GithubUser};

const GITHUB_API_URL: &str = "https://api.github.com";

/// Source of the raw repository list, seam for tests and for the
/// repository-list service.
#[async_trait]
pub trait RepoSource: Send + Sync {
    async fn fetch_repos(&self) -> Result<Vec<GithubRepo>, FetchError>;
}

/// Thin client over the GitHub REST API
#[derive(Clone)]
pub struct GithubClient {
    http: Client,
    base_url: String,
    username: String,
}

impl GithubClient {
    pub fn new(http: Client, username: impl Into<String>) -> Self {
        Self::with_base_url(http, GITHUB_API_URL, username)
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

    /// Fetch the user profile
    pub async fn fetch_user(&self) -> Result<GithubUser, FetchError> {
        let url = format!("{}/users/{}", self.base_url, self.username);
        get_json(&self.http, &url).await
    }

    /// Fetch up to 100 repositories owned by the user, most recently
    /// updated first
    pub async fn fetch_user_repos(&self) -> Result<Vec<GithubRepo>, FetchError> {
        let url = format!(
            "{}/users/{}/repos?per_page=100&type=owner&sort=updated",
            self.base_url, self.username
        );
        get_json(&self.http, &url).await
    }

    /// Fetch and normalize the GitHub stats slot.
    ///
    /// Requires both the profile and the repository list; if either call
    /// fails the whole source is `None`.
    pub async fn fetch_stats(&self) -> Option<GithubStats> {
        let (user, repos) = tokio::join!(self.fetch_user(), self.fetch_user_repos());

        match (user, repos) {
            (Ok(user), Ok(repos)) => Some(build_stats(&user, &repos)),
            (Err(e), _) | (_, Err(e)) => {
                warn!(error = %e, "GitHub stats fetch failed");
                None
            }
        }
    }
}

#[async_trait]
impl RepoSource for GithubClient {
    async fn fetch_repos(&self) -> Result<Vec<GithubRepo>, FetchError> {
        self.fetch_user_repos().await
    }
}

/// Combine the profile and repository list into the normalized shape.
/// Star and fork totals are summed across the repository list.
fn build_stats(user: &GithubUser, repos: &[GithubRepo]) -> GithubStats {
    let total_stars = repos.iter().map(|r| r.stargazers_count).sum();
    let total_forks = repos.iter().map(|r| r.forks_count).sum();

    GithubStats {
        total_repos: user.public_repos,
        total_stars,
        total_forks,
        followers: user.followers,
        following: user.following,
        public_gists: user.public_gists,
        profile_url: user.html_url.clone(),
        avatar_url: user.avatar_url.clone(),
    }
}
