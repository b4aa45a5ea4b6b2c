//! Portfolio backend
//!
//! API server for a personal portfolio site: a coding-stats aggregation
//! proxy over the GitHub, LeetCode and CodeChef APIs with time-boxed
//! caching, a GitHub project grid, a chatbot relay, and a contact form.

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod services;

pub use config::Config;
pub use error::AppError;

pub use models::{
    CodeChefStats, CodingStats, ContactMessage, ContactReceipt, CuratedProject, GithubRepo,
    GithubStats, LeetCodeStats, ProjectSummary,
};

pub use services::{
    ChatService, Clock, ContactService, ManualClock, PortfolioStore, ProjectsService, StatsService,
    StatsSources, SystemClock,
};

/// Application state shared across handlers
pub struct AppState {
    pub config: Config,
    pub stats: StatsService,
    pub projects: ProjectsService,
    pub chat: ChatService,
    pub contact: ContactService,
    pub portfolio: PortfolioStore,
}
