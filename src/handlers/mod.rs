pub mod chat;
pub mod contact;
pub mod projects;
pub mod stats;




#[cfg(test)]
mod contact_http_tests;

pub use chat::configure_chat_routes;
pub use contact::configure_contact_routes;
pub use projects::{configure_github_routes, configure_project_routes};
pub use stats::configure_stats_routes;
