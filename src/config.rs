//! App Configuration
//!
//! Build-time settings, provided to components through context.

use log::LevelFilter;

/// Users endpoint used when `ROSTER_USERS_URL` isn't set at build time
pub const DEFAULT_USERS_URL: &str = "https://jsonplaceholder.org/users";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub users_url: String,
    /// How long a notice stays visible
    pub notice_timeout_ms: u32,
    pub log_level: LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            users_url: DEFAULT_USERS_URL.to_string(),
            notice_timeout_ms: 3000,
            log_level: LevelFilter::Info,
        }
    }
}

impl AppConfig {
    /// Defaults, overridden by `ROSTER_USERS_URL` / `ROSTER_LOG` captured at compile time
    pub fn from_build_env() -> Self {
        Self::from_values(option_env!("ROSTER_USERS_URL"), option_env!("ROSTER_LOG"))
    }

    fn from_values(users_url: Option<&str>, log_level: Option<&str>) -> Self {
        let mut config = Self::default();
        if let Some(url) = users_url.map(str::trim).filter(|u| !u.is_empty()) {
            config.users_url = url.to_string();
        }
        if let Some(level) = log_level.and_then(|l| l.trim().parse().ok()) {
            config.log_level = level;
        }
        config
    }
}
