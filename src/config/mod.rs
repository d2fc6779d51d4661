use crate::resume::domain::{Lang, UnknownLang};
use std::env;
use std::fmt;
use std::path::PathBuf;

/// Top-level configuration for the renderer.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub render: RenderConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let lang = env::var("RESUME_LANG")
            .unwrap_or_else(|_| Lang::En.code().to_string())
            .parse::<Lang>()
            .map_err(|source| ConfigError::InvalidLang { source })?;

        let position = non_empty_var("RESUME_POSITION");
        let data = non_empty_var("RESUME_DATA").map(PathBuf::from);
        let log_level = env::var("RESUME_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            render: RenderConfig {
                lang,
                position,
                data,
            },
            telemetry: TelemetryConfig { log_level },
        })
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// What to render when the command line does not say otherwise.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    pub lang: Lang,
    /// Position key; `None` selects the profile's first position.
    pub position: Option<String>,
    /// Profile JSON; `None` selects the built-in profile.
    pub data: Option<PathBuf>,
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidLang { source: UnknownLang },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidLang { source } => {
                write!(f, "RESUME_LANG is invalid: {source}")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidLang { source } => Some(source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::{Mutex, OnceLock};

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        env::remove_var("RESUME_LANG");
        env::remove_var("RESUME_POSITION");
        env::remove_var("RESUME_DATA");
        env::remove_var("RESUME_LOG_LEVEL");
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.render.lang, Lang::En);
        assert!(config.render.position.is_none());
        assert!(config.render.data.is_none());
        assert_eq!(config.telemetry.log_level, "info");
    }

    #[test]
    fn reads_language_and_position() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("RESUME_LANG", "ru");
        env::set_var("RESUME_POSITION", " backend-developer ");
        env::set_var("RESUME_DATA", "");
        let config = AppConfig::load().expect("config loads");
        assert_eq!(config.render.lang, Lang::Ru);
        assert_eq!(config.render.position.as_deref(), Some("backend-developer"));
        assert!(config.render.data.is_none());
        reset_env();
    }

    #[test]
    fn rejects_unknown_language() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("RESUME_LANG", "klingon");
        let err = AppConfig::load().expect_err("unknown language");
        assert!(err.to_string().contains("klingon"));
        reset_env();
    }
}
