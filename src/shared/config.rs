// src/shared/config.rs
use std::env;
use std::path::PathBuf;

use crate::deployment::application::domain::DeploymentInputs;
use crate::view::application::domain::ThemeId;
use crate::view::application::services::ViewConfig;

pub const DEFAULT_TOKEN_STORE_PATH: &str = ".portfolio_site/storage.json";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("PORT must be a number between 0 and 65535, got {0:?}")]
    InvalidPort(String),

    #[error("DEFAULT_THEME must be one of option1..option5, got {0:?}")]
    UnknownTheme(String),
}

/// Everything the site host reads from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub rust_env: String,
    pub backend_url: Option<String>,
    pub use_static_data: bool,
    pub site_hostname: String,
    pub host: String,
    pub port: u16,
    pub default_theme: ThemeId,
    pub showcase_on_start: bool,
    pub token_store_path: PathBuf,
}

impl SiteConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup; `from_env` passes `std::env`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string());
        let get_or = |key: &str, default: &str| {
            get(key)
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let raw_port = get_or("PORT", "8080");
        let port = raw_port
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort(raw_port.clone()))?;

        let default_theme = match get("DEFAULT_THEME").filter(|v| !v.is_empty()) {
            Some(raw) => raw
                .parse::<ThemeId>()
                .map_err(|_| ConfigError::UnknownTheme(raw.clone()))?,
            None => ThemeId::default(),
        };

        Ok(Self {
            rust_env: get_or("RUST_ENV", "development"),
            // kept verbatim: empty and placeholder values are meaningful to detection
            backend_url: get("BACKEND_URL"),
            use_static_data: get("USE_STATIC_DATA").is_some_and(|v| parse_flag(&v)),
            site_hostname: get_or("SITE_HOSTNAME", "localhost"),
            host: get_or("HOST", "127.0.0.1"),
            port,
            default_theme,
            showcase_on_start: get("SHOWCASE_ON_START").is_some_and(|v| parse_flag(&v)),
            token_store_path: PathBuf::from(get_or("TOKEN_STORE_PATH", DEFAULT_TOKEN_STORE_PATH)),
        })
    }

    pub fn deployment_inputs(&self) -> DeploymentInputs {
        DeploymentInputs {
            build_mode: self.rust_env.clone(),
            force_static: self.use_static_data,
            backend_url: self.backend_url.clone(),
            hostname: self.site_hostname.clone(),
        }
    }

    pub fn view_config(&self) -> ViewConfig {
        ViewConfig {
            default_theme: self.default_theme,
            showcase_on_start: self.showcase_on_start,
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// `true`, `1` and `yes` in any case.
pub fn parse_flag(raw: &str) -> bool {
    matches!(raw.trim().to_ascii_lowercase().as_str(), "true" | "1" | "yes")
}

/// Loads `.env.{RUST_ENV}` and falls back to `.env`. Missing files are fine.
pub fn load_env_files() {
    let rust_env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
    let env_file = format!(".env.{}", rust_env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }
}
