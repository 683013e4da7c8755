//! Application Configuration
//!
//! Values are baked in at build time (a browser bundle has no environment).

use std::str::FromStr;

use log::LevelFilter;

pub const DEFAULT_API_BASE: &str = "http://localhost:9000";
pub const TOKEN_KEY: &str = "token";

/// How the session token is presented in the `Authorization` header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthScheme {
    /// `Authorization: <token>`
    #[default]
    Raw,
    /// `Authorization: Bearer <token>`
    Bearer,
}

impl AuthScheme {
    pub fn header_value(&self, token: &str) -> String {
        match self {
            AuthScheme::Raw => token.to_string(),
            AuthScheme::Bearer => format!("Bearer {}", token),
        }
    }
}

impl FromStr for AuthScheme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "raw" => Ok(AuthScheme::Raw),
            "bearer" => Ok(AuthScheme::Bearer),
            other => Err(format!("unknown auth scheme: {}", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Server origin, without trailing slash
    pub api_base: String,
    /// Local storage key holding the session token
    pub token_key: String,
    pub auth_scheme: AuthScheme,
    pub log_level: LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            token_key: TOKEN_KEY.to_string(),
            auth_scheme: AuthScheme::Raw,
            log_level: LevelFilter::Info,
        }
    }
}

impl AppConfig {
    /// Build config from `ARTICLES_*` variables captured at compile time
    pub fn from_env() -> Self {
        Self::from_vars(
            option_env!("ARTICLES_API_BASE"),
            option_env!("ARTICLES_AUTH_SCHEME"),
            option_env!("ARTICLES_LOG_LEVEL"),
        )
    }

    /// Invalid or blank values fall back to the defaults
    pub fn from_vars(api_base: Option<&str>, auth_scheme: Option<&str>, log_level: Option<&str>) -> Self {
        let defaults = Self::default();

        let api_base = api_base
            .map(|base| base.trim().trim_end_matches('/'))
            .filter(|base| !base.is_empty())
            .map(str::to_string)
            .unwrap_or(defaults.api_base);

        let auth_scheme = auth_scheme
            .and_then(|scheme| scheme.parse().ok())
            .unwrap_or(defaults.auth_scheme);

        let log_level = log_level
            .and_then(|level| level.trim().parse().ok())
            .unwrap_or(defaults.log_level);

        Self {
            api_base,
            auth_scheme,
            log_level,
            ..defaults
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_unset() {
        let config = AppConfig::from_vars(None, None, None);
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.api_base, "http://localhost:9000");
        assert_eq!(config.token_key, "token");
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_vars(Some("https://api.example.com/"), Some("Bearer"), Some("debug"));
        assert_eq!(config.api_base, "https://api.example.com");
        assert_eq!(config.auth_scheme, AuthScheme::Bearer);
        assert_eq!(config.log_level, LevelFilter::Debug);
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = AppConfig::from_vars(Some("  "), Some("digest"), Some("loud"));
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_header_value() {
        assert_eq!(AuthScheme::Raw.header_value("abc"), "abc");
        assert_eq!(AuthScheme::Bearer.header_value("abc"), "Bearer abc");
    }
}
