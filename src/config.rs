//! Client configuration loaded from environment variables.

use std::env;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Token claim holding the user identifier.
///
/// Backends have issued the subject under either name; the configured
/// claim is read first and the other one is the fallback.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubjectClaim {
    #[default]
    Sub,
    Username,
}

impl fmt::Display for SubjectClaim {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubjectClaim::Sub => f.write_str("sub"),
            SubjectClaim::Username => f.write_str("username"),
        }
    }
}

impl FromStr for SubjectClaim {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "sub" => Ok(SubjectClaim::Sub),
            "username" => Ok(SubjectClaim::Username),
            other => Err(ConfigError::Invalid("TOKEN_SUBJECT_CLAIM", other.to_string())),
        }
    }
}

/// Client configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the CineMood backend
    pub backend_url: String,
    /// File holding the persistent key-value store
    pub store_path: PathBuf,
    /// Claim read first for the session subject
    pub subject_claim: SubjectClaim,
    /// Transport timeout for backend requests
    pub request_timeout_secs: u64,
}

impl Config {
    /// Default config for testing only.
    pub fn test_default() -> Self {
        Self {
            backend_url: "http://127.0.0.1:8000".to_string(),
            store_path: PathBuf::from("cinemood_test_store.json"),
            subject_claim: SubjectClaim::Sub,
            request_timeout_secs: 5,
        }
    }

    /// Load configuration from environment variables (and `.env` if present).
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let subject_claim = match env::var("TOKEN_SUBJECT_CLAIM") {
            Ok(v) => v.parse()?,
            Err(_) => SubjectClaim::default(),
        };

        let request_timeout_secs = match env::var("REQUEST_TIMEOUT_SECS") {
            Ok(v) => v
                .trim()
                .parse()
                .map_err(|_| ConfigError::Invalid("REQUEST_TIMEOUT_SECS", v))?,
            Err(_) => 30,
        };

        Ok(Self {
            backend_url: env::var("BACKEND_URL")
                .map(|v| v.trim().trim_end_matches('/').to_string())
                .unwrap_or_else(|_| "http://localhost:8000".to_string()),
            store_path: env::var("CINEMOOD_STORE")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("cinemood_store.json")),
            subject_claim,
            request_timeout_secs,
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1:?}")]
    Invalid(&'static str, String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_env() {
        env::set_var("BACKEND_URL", "http://api.example.test/");
        env::set_var("TOKEN_SUBJECT_CLAIM", "username");
        env::set_var("REQUEST_TIMEOUT_SECS", "12");

        let config = Config::from_env().expect("Config should load");

        assert_eq!(config.backend_url, "http://api.example.test");
        assert_eq!(config.subject_claim, SubjectClaim::Username);
        assert_eq!(config.request_timeout_secs, 12);
    }

    #[test]
    fn test_subject_claim_parse() {
        assert_eq!("sub".parse::<SubjectClaim>().unwrap(), SubjectClaim::Sub);
        assert!("email".parse::<SubjectClaim>().is_err());
        assert_eq!(SubjectClaim::Username.to_string(), "username");
    }
}
