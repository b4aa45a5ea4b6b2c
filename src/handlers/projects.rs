//! Project handlers
//!
//! GitHub repository listing (cached, with stale fallback) and the
//! curated portfolio projects.

use actix_web::{HttpResponse, web};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::error;

use crate::AppState;
use crate::error::AppError;
use crate::models::{CuratedProject, ProjectSummary};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ReposResponse {
    success: bool,
    cached: bool,
    projects: Vec<ProjectSummary>,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    last_updated: DateTime<Utc>,
    total_repos: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

#[derive(Serialize)]
struct MessageResponse {
    success: bool,
    message: String,
}

#[derive(Serialize)]
struct CuratedResponse {
    success: bool,
    projects: Vec<CuratedProject>,
}

/// GET /api/github/repos
///
/// Public repositories as portfolio cards. Serves stale cache when the
/// GitHub API is down; fails only when there is nothing cached at all.
pub async fn get_github_repos(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let report = state.projects.list_projects().await.map_err(|e| {
        error!(error = %e, "GitHub repos unavailable and no cache to fall back on");
        AppError::Upstream("Failed to fetch GitHub repositories".to_string())
    })?;

    Ok(HttpResponse::Ok().json(ReposResponse {
        success: true,
        cached: report.cached,
        projects: report.projects,
        last_updated: report.last_updated,
        total_repos: report.total_repos,
        error: report.stale_reason,
    }))
}

/// POST /api/github/refresh
pub async fn refresh_github_repos(state: web::Data<AppState>) -> HttpResponse {
    state.projects.refresh().await;

    HttpResponse::Ok().json(MessageResponse {
        success: true,
        message: "Cache cleared successfully".to_string(),
    })
}

/// GET /api/projects
///
/// Hand-curated portfolio projects, featured first.
pub async fn get_projects(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(CuratedResponse {
        success: true,
        projects: state.portfolio.list(),
    })
}

/// Configure GitHub repo routes
pub fn configure_github_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/github")
            .route("/repos", web::get().to(get_github_repos))
            .route("/refresh", web::post().to(refresh_github_repos)),
    );
}

/// Configure curated project routes
pub fn configure_project_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/projects").route(web::get().to(get_projects)));
}
