use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    /// Absent or empty puts the evaluator in mock mode for the process lifetime.
    pub anthropic_api_key: Option<String>,
    pub llm_timeout_secs: u64,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            anthropic_api_key: optional_env("ANTHROPIC_API_KEY"),
            llm_timeout_secs: std::env::var("LLM_TIMEOUT_SECS")
                .unwrap_or_else(|_| "30".to_string())
                .parse::<u64>()
                .context("LLM_TIMEOUT_SECS must be a whole number of seconds")?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key)
        .with_context(|| format!("Required environment variable '{key}' is not set"))
}

/// Reads an optional variable, treating blank values as unset.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optional_env_blank_is_none() {
        std::env::set_var("INTERVIEW_API_TEST_BLANK_KEY", "   ");
        assert_eq!(optional_env("INTERVIEW_API_TEST_BLANK_KEY"), None);
    }

    #[test]
    fn test_optional_env_trims_value() {
        std::env::set_var("INTERVIEW_API_TEST_SET_KEY", " sk-test ");
        assert_eq!(
            optional_env("INTERVIEW_API_TEST_SET_KEY"),
            Some("sk-test".to_string())
        );
    }

    #[test]
    fn test_optional_env_missing_is_none() {
        assert_eq!(optional_env("INTERVIEW_API_TEST_NEVER_SET"), None);
    }
}
