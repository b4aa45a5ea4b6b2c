pub mod cache;
pub mod chat;
pub mod clock;
pub mod codechef;
pub mod contact;
pub mod github;
pub mod leetcode;
pub mod portfolio;
pub mod projects;
pub mod stats;
pub mod upstream;

#[cfg(test)]
pub(crate) mod stub_api;

pub use cache::{Cached, TtlCache};
pub use chat::ChatService;
pub use clock::{Clock, ManualClock, SystemClock};
pub use codechef::CodeChefClient;
pub use contact::{ContactService, MailError, Mailer};
pub use github::{GithubClient, RepoSource};
pub use leetcode::LeetCodeClient;
pub use portfolio::PortfolioStore;
pub use projects::{ProjectList, ProjectsReport, ProjectsService};
pub use stats::{LiveSources, StatsReport, StatsService, StatsSources};
pub use upstream::FetchError;
