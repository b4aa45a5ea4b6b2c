use std::env;
use std::time::Duration;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Server host address
    pub host: String,
    /// Server port
    pub port: u16,
    /// GitHub username whose profile and repositories are aggregated
    pub github_username: String,
    /// LeetCode username
    pub leetcode_username: String,
    /// CodeChef username
    pub codechef_username: String,
    /// TTL for the combined coding-stats cache in seconds (default: 1800 = 30 minutes)
    pub stats_cache_ttl_secs: u64,
    /// TTL for the repository-list cache in seconds (default: 600 = 10 minutes)
    pub repos_cache_ttl_secs: u64,
    /// Timeout applied to every outbound upstream call in seconds (default: 10)
    pub upstream_timeout_secs: u64,
    /// OpenAI API key for the chatbot relay; `None` falls back to canned replies
    pub openai_api_key: Option<String>,
    /// SMTP credentials for contact notifications; `None` disables email
    pub smtp: Option<SmtpConfig>,
}

/// SMTP settings for the contact-form notification email
#[derive(Debug, Clone)]
pub struct SmtpConfig {
    pub host: String,
    pub username: String,
    pub password: String,
    /// Recipient of contact notifications (defaults to the SMTP username)
    pub notify_to: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());

        let port = env::var("PORT")
            .unwrap_or_else(|_| "5000".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidValue("PORT"))?;

        let github_username =
            env::var("GITHUB_USERNAME").unwrap_or_else(|_| "R123achit".to_string());
        let leetcode_username =
            env::var("LEETCODE_USERNAME").unwrap_or_else(|_| "R123cahit".to_string());
        let codechef_username =
            env::var("CODECHEF_USERNAME").unwrap_or_else(|_| "r123achit".to_string());

        let stats_cache_ttl_secs = env::var("STATS_CACHE_TTL_SECS")
            .unwrap_or_else(|_| "1800".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidValue("STATS_CACHE_TTL_SECS"))?;

        let repos_cache_ttl_secs = env::var("REPOS_CACHE_TTL_SECS")
            .unwrap_or_else(|_| "600".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidValue("REPOS_CACHE_TTL_SECS"))?;

        let upstream_timeout_secs = env::var("UPSTREAM_TIMEOUT_SECS")
            .unwrap_or_else(|_| "10".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidValue("UPSTREAM_TIMEOUT_SECS"))?;

        // A placeholder value left over from a template .env counts as unconfigured
        let openai_api_key = env::var("OPENAI_API_KEY")
            .ok()
            .filter(|k| !k.is_empty() && k != "your_openai_api_key_here");

        let smtp = match (env::var("EMAIL_USER"), env::var("EMAIL_PASS")) {
            (Ok(username), Ok(password)) if !username.is_empty() && !password.is_empty() => {
                let host = env::var("SMTP_HOST").unwrap_or_else(|_| "smtp.gmail.com".to_string());
                let notify_to = env::var("CONTACT_NOTIFY_TO").unwrap_or_else(|_| username.clone());
                Some(SmtpConfig {
                    host,
                    username,
                    password,
                    notify_to,
                })
            }
            _ => None,
        };

        Ok(Self {
            host,
            port,
            github_username,
            leetcode_username,
            codechef_username,
            stats_cache_ttl_secs,
            repos_cache_ttl_secs,
            upstream_timeout_secs,
            openai_api_key,
            smtp,
        })
    }

    /// Timeout for outbound upstream calls
    pub fn upstream_timeout(&self) -> Duration {
        Duration::from_secs(self.upstream_timeout_secs)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(&'static str),
}
