//! Configuration for the CareLink portal state engine.
//!
//! Loaded from `CARELINK_*` environment variables with sensible defaults;
//! every knob here is presentation tuning, not core behavior.

use std::env;
use std::sync::OnceLock;

use crate::models::Priority;

/// Deployment environment tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppEnvironment {
    #[default]
    Development,
    Production,
}

impl AppEnvironment {
    fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            _ => Self::Development,
        }
    }
}

/// Main configuration struct for CareLink.
#[derive(Debug, Clone)]
pub struct Config {
    pub app_environment: AppEnvironment,
    /// Priority the composer resets to after each send.
    pub default_priority: Priority,
    /// Display cap for the unread notification badge ("99+").
    pub unread_badge_cap: usize,
    /// Search terms shorter than this match everything.
    pub search_min_chars: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_environment: AppEnvironment::Development,
            default_priority: Priority::Normal,
            unread_badge_cap: 99,
            search_min_chars: 0,
        }
    }
}

impl Config {
    /// Build a config from `CARELINK_*` environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            app_environment: env_value("CARELINK_ENVIRONMENT")
                .map_or(defaults.app_environment, |v| AppEnvironment::parse(&v)),
            default_priority: env_value("CARELINK_DEFAULT_PRIORITY")
                .map_or(defaults.default_priority, |v| parse_priority(&v)),
            unread_badge_cap: env_usize("CARELINK_UNREAD_BADGE_CAP", defaults.unread_badge_cap),
            search_min_chars: env_usize("CARELINK_SEARCH_MIN_CHARS", defaults.search_min_chars),
        }
    }

    /// Process-wide config, initialized from the environment on first use.
    pub fn global() -> &'static Self {
        static CONFIG: OnceLock<Config> = OnceLock::new();
        CONFIG.get_or_init(Self::from_env)
    }
}

fn env_value(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn env_usize(key: &str, default: usize) -> usize {
    env_value(key)
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn parse_priority(value: &str) -> Priority {
    match value.trim().to_lowercase().as_str() {
        "urgent" => Priority::Urgent,
        "high" => Priority::High,
        _ => Priority::Normal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_development_normal() {
        let cfg = Config::default();
        assert_eq!(cfg.app_environment, AppEnvironment::Development);
        assert_eq!(cfg.default_priority, Priority::Normal);
        assert_eq!(cfg.unread_badge_cap, 99);
        assert_eq!(cfg.search_min_chars, 0);
    }

    #[test]
    fn environment_parse_accepts_prod_aliases() {
        assert_eq!(AppEnvironment::parse("production"), AppEnvironment::Production);
        assert_eq!(AppEnvironment::parse("PROD"), AppEnvironment::Production);
        assert_eq!(AppEnvironment::parse("dev"), AppEnvironment::Development);
        assert_eq!(AppEnvironment::parse(""), AppEnvironment::Development);
    }

    #[test]
    fn priority_parse_falls_back_to_normal() {
        assert_eq!(parse_priority("urgent"), Priority::Urgent);
        assert_eq!(parse_priority("High"), Priority::High);
        assert_eq!(parse_priority("garbage"), Priority::Normal);
    }
}
