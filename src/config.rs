//! Build-time client configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The bundle is static, so configuration is baked in at compile time from
//! `API_BASE_URL` and `APP_BASE_PATH`. Both are optional; the API defaults to
//! the in-app base path, which defaults to `/`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::sync::OnceLock;

const DEFAULT_BASE_PATH: &str = "/";

/// Resolved client configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    /// Prefix prepended to every REST path.
    pub api_base_url: String,
    /// Path the SPA is served under (router base).
    pub base_path: String,
}

impl AppConfig {
    /// Build a config from optional raw values, applying defaults for blanks.
    pub fn from_values(api_base_url: Option<&str>, base_path: Option<&str>) -> Self {
        let base_path = base_path
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .unwrap_or(DEFAULT_BASE_PATH)
            .to_owned();
        let api_base_url = api_base_url
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map_or_else(|| base_path.clone(), str::to_owned);
        Self { api_base_url, base_path }
    }

    /// The process-wide config read from compile-time environment.
    pub fn get() -> &'static AppConfig {
        static CONFIG: OnceLock<AppConfig> = OnceLock::new();
        CONFIG.get_or_init(|| Self::from_values(option_env!("API_BASE_URL"), option_env!("APP_BASE_PATH")))
    }

    /// In-app login route, honoring the base path.
    pub fn login_path(&self) -> String {
        login_path(&self.base_path)
    }

    /// Router base without a trailing slash (`/` becomes empty).
    pub fn router_base(&self) -> String {
        self.base_path.trim_end_matches('/').to_owned()
    }
}

/// Append `login` to a base path without doubling the separator.
pub fn login_path(base: &str) -> String {
    if base.ends_with('/') {
        format!("{base}login")
    } else {
        format!("{base}/login")
    }
}

/// Join the API base URL with a `/`-prefixed resource path.
pub fn endpoint(base_url: &str, path: &str) -> String {
    let base = base_url.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    format!("{base}/{path}")
}
