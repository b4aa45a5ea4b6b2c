//! Coding-stats handlers
//!
//! HTTP surface of the stats aggregation proxy.

use actix_web::{HttpResponse, web};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::AppState;
use crate::models::CodingStats;

/// Success envelope for the combined stats snapshot
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StatsResponse {
    success: bool,
    cached: bool,
    stats: CodingStats,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    last_updated: DateTime<Utc>,
}

#[derive(Serialize)]
struct MessageResponse {
    success: bool,
    message: String,
}

/// URLs for the GitHub contribution graph widgets
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ContributionsResponse {
    success: bool,
    graph_url: String,
    github_stats_url: String,
    top_languages_url: String,
}

/// GET /api/coding-stats
///
/// Combined GitHub/LeetCode/CodeChef snapshot, served from cache while
/// fresh. Partial source failure never fails this endpoint.
pub async fn get_coding_stats(state: web::Data<AppState>) -> HttpResponse {
    let report = state.stats.get_stats().await;

    HttpResponse::Ok().json(StatsResponse {
        success: true,
        cached: report.cached,
        stats: report.stats,
        last_updated: report.last_updated,
    })
}

/// POST /api/coding-stats/refresh
///
/// Clear the stats cache; the next query refetches.
pub async fn refresh_coding_stats(state: web::Data<AppState>) -> HttpResponse {
    state.stats.refresh().await;

    HttpResponse::Ok().json(MessageResponse {
        success: true,
        message: "Cache cleared successfully".to_string(),
    })
}

/// GET /api/coding-stats/github-contributions
///
/// Static chart URLs for the contribution graph widgets.
pub async fn github_contributions(state: web::Data<AppState>) -> HttpResponse {
    let username = &state.config.github_username;

    HttpResponse::Ok().json(ContributionsResponse {
        success: true,
        graph_url: format!("https://ghchart.rshah.org/7c3aed/{username}"),
        github_stats_url: format!(
            "https://github-readme-stats.vercel.app/api?username={username}&show_icons=true&theme=radical&hide_border=true&bg_color=0d1117"
        ),
        top_languages_url: format!(
            "https://github-readme-stats.vercel.app/api/top-langs/?username={username}&layout=compact&theme=radical&hide_border=true&bg_color=0d1117"
        ),
    })
}

/// Configure coding-stats routes
pub fn configure_stats_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/coding-stats")
            .route("", web::get().to(get_coding_stats))
            .route("/refresh", web::post().to(refresh_coding_stats))
            .route("/github-contributions", web::get().to(github_contributions)),
    );
}
