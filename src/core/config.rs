//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.taskdeck/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{LevelFilter, debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::AuthBackendKind;
use crate::api::client::DEFAULT_API_BASE_URL;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct TaskdeckConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub auth: AuthConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub seed_demo_todos: Option<bool>,
    pub log_level: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ApiConfig {
    pub base_url: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct AuthConfig {
    pub backend: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_SEED_DEMO_TODOS: bool = true;
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Debug;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub backend: AuthBackendKind,
    pub api_base_url: String,
    pub seed_demo_todos: bool,
    pub log_level: LevelFilter,
}

/// Flags given on the command line. `None`/`false` means "not specified".
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub backend: Option<AuthBackendKind>,
    pub api_url: Option<String>,
    pub no_seed: bool,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.taskdeck/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".taskdeck").join("config.toml"))
}

/// Load config from `~/.taskdeck/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `TaskdeckConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<TaskdeckConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(TaskdeckConfig::default());
        }
    };
    load_config_from(&path)
}

/// Same as [`load_config`] for an explicit path.
pub fn load_config_from(path: &Path) -> Result<TaskdeckConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(TaskdeckConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: TaskdeckConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Taskdeck Configuration
# All settings are optional, defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# seed_demo_todos = true             # start with two sample todos
# log_level = "debug"                # "error", "warn", "info", "debug", "trace", "off"

# [api]
# base_url = "http://localhost:5215/api"   # Or set TASKDECK_API_URL env var

# [auth]
# backend = "remote"                 # "remote" or "demo"; or set TASKDECK_BACKEND
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

fn parse_level(value: &str) -> Option<LevelFilter> {
    value.trim().parse().ok()
}

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &TaskdeckConfig, cli: &CliOverrides) -> ResolvedConfig {
    // Backend: CLI → env → config → default
    let backend = cli
        .backend
        .or_else(|| {
            std::env::var("TASKDECK_BACKEND")
                .ok()
                .and_then(|v| AuthBackendKind::parse(&v))
        })
        .or_else(|| {
            config.auth.backend.as_deref().and_then(|v| {
                let parsed = AuthBackendKind::parse(v);
                if parsed.is_none() {
                    warn!("Unknown auth backend {:?} in config, using default", v);
                }
                parsed
            })
        })
        .unwrap_or_default();

    // API base URL: CLI → env → config → default
    let api_base_url = cli
        .api_url
        .clone()
        .or_else(|| std::env::var("TASKDECK_API_URL").ok())
        .or_else(|| config.api.base_url.clone())
        .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());

    let seed_demo_todos = !cli.no_seed
        && config
            .general
            .seed_demo_todos
            .unwrap_or(DEFAULT_SEED_DEMO_TODOS);

    let log_level = config
        .general
        .log_level
        .as_deref()
        .and_then(parse_level)
        .unwrap_or(DEFAULT_LOG_LEVEL);

    ResolvedConfig {
        backend,
        api_base_url,
        seed_demo_todos,
        log_level,
    }
}
