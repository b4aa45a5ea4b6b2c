//! Repository-list service
//!
//! Turns the GitHub repository list into the portfolio project grid
//! behind its own 10-minute cache. Unlike the stats snapshot this cache
//! serves stale on error: when a fresh fetch fails and a previous entry
//! exists, the stale entry is returned with an error note; with no cache
//! the failure is surfaced to the caller.

use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::{info, warn};

use super::cache::TtlCache;
use super::clock::Clock;
use super::github::RepoSource;
use super::upstream::FetchError;
use crate::models::{GithubRepo, ProjectSummary};

/// Maximum number of projects exposed on the grid
const MAX_PROJECTS: usize = 12;

/// Maximum number of tech-stack entries per project
const MAX_TECH_STACK: usize = 5;

/// Cached value: the shaped project list plus the pre-filter repo count
#[derive(Debug, Clone)]
pub struct ProjectList {
    pub projects: Vec<ProjectSummary>,
    pub total_repos: usize,
}

/// Result of one repository-list query
#[derive(Debug, Clone)]
pub struct ProjectsReport {
    pub projects: Vec<ProjectSummary>,
    pub cached: bool,
    pub last_updated: DateTime<Utc>,
    pub total_repos: usize,
    /// Set when stale cached data is served because a fresh fetch failed
    pub stale_reason: Option<String>,
}

pub struct ProjectsService {
    source: Arc<dyn RepoSource>,
    username: String,
    cache: TtlCache<ProjectList>,
}

impl ProjectsService {
    pub fn new(
        source: Arc<dyn RepoSource>,
        username: impl Into<String>,
        ttl_secs: u64,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            source,
            username: username.into(),
            cache: TtlCache::from_secs(ttl_secs, clock),
        }
    }

    /// Serve the project list, from cache when fresh, stale on error.
    pub async fn list_projects(&self) -> Result<ProjectsReport, FetchError> {
        if let Some(hit) = self.cache.get().await {
            return Ok(report(hit.value, hit.stored_at, true, None));
        }

        match self.source.fetch_repos().await {
            Ok(repos) => {
                let list = build_project_list(repos, &self.username);
                info!(projects = list.projects.len(), "fetched repositories from GitHub");
                let stored_at = self.cache.put(list.clone()).await;
                Ok(report(list, stored_at, false, None))
            }
            Err(e) => {
                // Keep serving the last good list if we have one
                if let Some(stale) = self.cache.get_any().await {
                    warn!(error = %e, "GitHub fetch failed, returning cached project list");
                    Ok(report(
                        stale.value,
                        stale.stored_at,
                        true,
                        Some("Using cached data due to API error".to_string()),
                    ))
                } else {
                    Err(e)
                }
            }
        }
    }

    /// Clear the cache so the next query refetches
    pub async fn refresh(&self) {
        self.cache.invalidate().await;
        info!("repository-list cache cleared");
    }
}

fn report(
    list: ProjectList,
    last_updated: DateTime<Utc>,
    cached: bool,
    stale_reason: Option<String>,
) -> ProjectsReport {
    ProjectsReport {
        projects: list.projects,
        cached,
        last_updated,
        total_repos: list.total_repos,
        stale_reason,
    }
}

/// Shape raw repositories into the project grid: drop forks and private
/// repos, sort by stars then update recency, cap the list.
fn build_project_list(repos: Vec<GithubRepo>, username: &str) -> ProjectList {
    let total_repos = repos.len();

    let mut projects: Vec<ProjectSummary> = repos
        .into_iter()
        .filter(|repo| !repo.fork && !repo.private)
        .map(|repo| summarize(repo, username))
        .collect();

    projects.sort_by(|a, b| {
        b.stars
            .cmp(&a.stars)
            .then_with(|| b.updated_at.cmp(&a.updated_at))
    });
    projects.truncate(MAX_PROJECTS);

    ProjectList {
        projects,
        total_repos,
    }
}

fn summarize(repo: GithubRepo, username: &str) -> ProjectSummary {
    let tech_stack = if repo.topics.is_empty() {
        repo.language.clone().into_iter().collect()
    } else {
        repo.topics.iter().take(MAX_TECH_STACK).cloned().collect()
    };

    // GitHub's Open Graph social preview for the repository
    let image = format!(
        "https://opengraph.githubassets.com/1/{}/{}",
        username, repo.name
    );

    ProjectSummary {
        id: repo.id.to_string(),
        title: title_case(&repo.name),
        description: repo
            .description
            .unwrap_or_else(|| "No description available".to_string()),
        tech_stack,
        image,
        github: repo.html_url,
        live: repo.homepage.filter(|h| !h.is_empty()),
        stars: repo.stargazers_count,
        forks: repo.forks_count,
        language: repo.language,
        updated_at: repo.updated_at,
        created_at: repo.created_at,
    }
}

/// Convert `repo-name` to `Repo Name`
fn title_case(name: &str) -> String {
    name.split('-')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::clock::ManualClock;
    use async_trait::async_trait;
    use chrono::Duration;
    use reqwest::StatusCode;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

    #[derive(Default)]
    struct MockRepos {
        down: AtomicBool,
        calls: AtomicUsize,
        repos: Vec<GithubRepo>,
    }

    #[async_trait]
    impl RepoSource for MockRepos {
        async fn fetch_repos(&self) -> Result<Vec<GithubRepo>, FetchError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.down.load(Ordering::SeqCst) {
                Err(FetchError::Status(StatusCode::BAD_GATEWAY))
            } else {
                Ok(self.repos.clone())
            }
        }
    }

    fn repo(id: u64, name: &str, stars: u64) -> GithubRepo {
        GithubRepo {
            id,
            name: name.to_string(),
            stargazers_count: stars,
            html_url: format!("https://github.com/someone/{name}"),
            ..GithubRepo::default()
        }
    }

    fn service(
        source: Arc<MockRepos>,
        ttl_secs: u64,
    ) -> (ProjectsService, ManualClock) {
        let clock = ManualClock::default();
        let svc = ProjectsService::new(source, "someone", ttl_secs, Arc::new(clock.clone()));
        (svc, clock)
    }

    #[test]
    fn title_case_converts_hyphenated_names() {
        assert_eq!(title_case("weather-forecast-app"), "Weather Forecast App");
        assert_eq!(title_case("single"), "Single");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn forks_and_private_repos_are_dropped_but_counted() {
        let mut forked = repo(1, "forked", 99);
        forked.fork = true;
        let mut hidden = repo(2, "hidden", 50);
        hidden.private = true;
        let visible = repo(3, "visible", 1);

        let list = build_project_list(vec![forked, hidden, visible], "someone");
        assert_eq!(list.total_repos, 3);
        assert_eq!(list.projects.len(), 1);
        assert_eq!(list.projects[0].id, "3");
    }

    #[test]
    fn projects_sort_by_stars_then_recency_and_cap_at_twelve() {
        let mut repos: Vec<GithubRepo> = (0..15).map(|i| repo(i, "r", 0)).collect();
        repos[3].stargazers_count = 10;
        repos[7].stargazers_count = 10;
        repos[3].updated_at = Some("2024-01-01T00:00:00Z".parse().unwrap());
        repos[7].updated_at = Some("2024-06-01T00:00:00Z".parse().unwrap());
        repos[11].stargazers_count = 25;

        let list = build_project_list(repos, "someone");
        assert_eq!(list.projects.len(), 12);
        assert_eq!(list.projects[0].id, "11");
        // Equal stars: more recently updated first
        assert_eq!(list.projects[1].id, "7");
        assert_eq!(list.projects[2].id, "3");
    }

    #[test]
    fn tech_stack_uses_topics_capped_at_five_or_falls_back_to_language() {
        let mut with_topics = repo(1, "a", 0);
        with_topics.topics = (0..8).map(|i| format!("t{i}")).collect();
        let mut with_language = repo(2, "b", 0);
        with_language.language = Some("Rust".to_string());
        let bare = repo(3, "c", 0);

        let list = build_project_list(vec![with_topics, with_language, bare], "someone");
        let by_id = |id: &str| list.projects.iter().find(|p| p.id == id).unwrap();

        assert_eq!(by_id("1").tech_stack.len(), 5);
        assert_eq!(by_id("2").tech_stack, vec!["Rust".to_string()]);
        assert!(by_id("3").tech_stack.is_empty());
    }

    #[test]
    fn summary_fills_description_and_social_image() {
        let list = build_project_list(vec![repo(1, "my-app", 2)], "someone");
        let p = &list.projects[0];
        assert_eq!(p.title, "My App");
        assert_eq!(p.description, "No description available");
        assert_eq!(p.image, "https://opengraph.githubassets.com/1/someone/my-app");
        assert_eq!(p.live, None);
    }

    #[tokio::test]
    async fn fresh_hit_avoids_refetching() {
        let source = Arc::new(MockRepos {
            repos: vec![repo(1, "a", 1)],
            ..MockRepos::default()
        });
        let (svc, _clock) = service(Arc::clone(&source), 600);

        let first = svc.list_projects().await.unwrap();
        let second = svc.list_projects().await.unwrap();

        assert!(!first.cached);
        assert!(second.cached);
        assert_eq!(second.stale_reason, None);
        assert_eq!(source.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn fetch_error_serves_stale_cache_with_note() {
        let source = Arc::new(MockRepos {
            repos: vec![repo(1, "a", 1)],
            ..MockRepos::default()
        });
        let (svc, clock) = service(Arc::clone(&source), 600);

        let fresh = svc.list_projects().await.unwrap();
        clock.advance(Duration::seconds(600));
        source.down.store(true, Ordering::SeqCst);

        let stale = svc.list_projects().await.unwrap();
        assert!(stale.cached);
        assert_eq!(stale.projects, fresh.projects);
        assert_eq!(
            stale.stale_reason.as_deref(),
            Some("Using cached data due to API error")
        );
    }

    #[tokio::test]
    async fn fetch_error_without_cache_is_surfaced() {
        let source = Arc::new(MockRepos::default());
        source.down.store(true, Ordering::SeqCst);
        let (svc, _clock) = service(Arc::clone(&source), 600);

        assert!(svc.list_projects().await.is_err());
    }

    #[tokio::test]
    async fn refresh_forces_refetch() {
        let source = Arc::new(MockRepos {
            repos: vec![repo(1, "a", 1)],
            ..MockRepos::default()
        });
        let (svc, _clock) = service(Arc::clone(&source), 600);

        let _ = svc.list_projects().await.unwrap();
        svc.refresh().await;
        let after = svc.list_projects().await.unwrap();

        assert!(!after.cached);
        assert_eq!(source.calls.load(Ordering::SeqCst), 2);
    }
}
