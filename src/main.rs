use actix_cors::Cors;
use actix_web::{App, HttpResponse, HttpServer, middleware, web};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use portfolio_backend::services::{
    ChatService, CodeChefClient, ContactService, GithubClient, LeetCodeClient, LiveSources, Mailer,
    PortfolioStore, ProjectsService, StatsService, SystemClock,
};
use portfolio_backend::{AppState, Config, handlers};

/// Health check endpoint
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "portfolio-backend"
    }))
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "portfolio_backend=debug,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env().expect("Failed to load configuration");

    info!(
        "Starting portfolio backend on {}:{}",
        config.host, config.port
    );

    // One HTTP client shared by every upstream call, with a hard timeout
    // so a hung provider cannot hold a request open
    let http = reqwest::Client::builder()
        .timeout(config.upstream_timeout())
        .user_agent("portfolio-backend")
        .build()
        .expect("Failed to build HTTP client");

    let clock = Arc::new(SystemClock);

    let sources = Arc::new(LiveSources::new(
        GithubClient::new(http.clone(), &config.github_username),
        LeetCodeClient::new(http.clone(), &config.leetcode_username),
        CodeChefClient::new(http.clone(), &config.codechef_username),
    ));
    let stats = StatsService::new(sources, config.stats_cache_ttl_secs, clock.clone());

    let repo_source = Arc::new(GithubClient::new(http.clone(), &config.github_username));
    let projects = ProjectsService::new(
        repo_source,
        &config.github_username,
        config.repos_cache_ttl_secs,
        clock,
    );

    let chat = ChatService::new(http, config.openai_api_key.clone());
    if config.openai_api_key.is_none() {
        info!("OpenAI API key not configured, chatbot will use canned replies");
    }

    let mailer = match &config.smtp {
        Some(smtp) => match Mailer::new(smtp) {
            Ok(mailer) => Some(mailer),
            Err(e) => {
                warn!(error = %e, "SMTP transport setup failed, contact emails disabled");
                None
            }
        },
        None => {
            info!("SMTP credentials not configured, contact emails disabled");
            None
        }
    };
    let contact = ContactService::new(mailer);

    let server_addr = format!("{}:{}", config.host, config.port);

    let app_state = web::Data::new(AppState {
        config,
        stats,
        projects,
        chat,
        contact,
        portfolio: PortfolioStore::seeded(),
    });

    HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .wrap(middleware::Logger::default())
            .wrap(Cors::permissive())
            .route("/health", web::get().to(health_check))
            .service(
                web::scope("/api")
                    .configure(handlers::configure_stats_routes)
                    .configure(handlers::configure_github_routes)
                    .configure(handlers::configure_project_routes)
                    .configure(handlers::configure_chat_routes)
                    .configure(handlers::configure_contact_routes),
            )
    })
    .bind(&server_addr)?
    .run()
    .await
}
