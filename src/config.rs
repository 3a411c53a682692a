//! Client configuration baked in at build time.
//!
//! The bundle is static, so settings come from `option_env!` during the
//! `trunk`/`cargo` build rather than from the runtime environment:
//!
//! - `QUERY_CONSOLE_API_BASE`: origin prefix for backend calls (default: same origin)
//! - `QUERY_CONSOLE_LOG_LEVEL`: `error|warn|info|debug|trace` (default: `info`)

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

pub const DEFAULT_LOG_LEVEL: log::Level = log::Level::Info;

/// How long the registration success alert stays up before moving to login.
pub const REGISTER_REDIRECT_DELAY: Duration = Duration::from_millis(2000);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base_url: String,
    pub log_level: log::Level,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self { api_base_url: String::new(), log_level: DEFAULT_LOG_LEVEL }
    }
}

impl ClientConfig {
    /// Build config from the compile-time environment.
    pub fn from_build_env() -> Self {
        Self::from_raw(option_env!("QUERY_CONSOLE_API_BASE"), option_env!("QUERY_CONSOLE_LOG_LEVEL"))
    }

    fn from_raw(api_base: Option<&str>, log_level: Option<&str>) -> Self {
        Self { api_base_url: normalize_base_url(api_base), log_level: parse_log_level(log_level) }
    }
}

fn normalize_base_url(raw: Option<&str>) -> String {
    raw.map(str::trim)
        .unwrap_or_default()
        .trim_end_matches('/')
        .to_owned()
}

fn parse_log_level(raw: Option<&str>) -> log::Level {
    match raw.map(|v| v.trim().to_ascii_lowercase()).as_deref() {
        Some("error") => log::Level::Error,
        Some("warn") => log::Level::Warn,
        Some("info") => log::Level::Info,
        Some("debug") => log::Level::Debug,
        Some("trace") => log::Level::Trace,
        _ => DEFAULT_LOG_LEVEL,
    }
}
