//! LaunchProfile and config path resolution.
use std::{
    env,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

use crate::server::config::{ConfigPathSource, CONFIG_ENV_KEY, DEFAULT_CONFIG_PATH};

/// Resolved launch profile.
#[derive(Debug, Clone)]
pub struct LaunchProfile {
    pub config_path: PathBuf,
    pub config_source: ConfigPathSource,
    pub launch_args: Vec<String>,
}

/// Resolve config path in the order: CLI override → env var → default.
pub fn resolve_config_path(override_path: Option<PathBuf>) -> Result<(PathBuf, ConfigPathSource)> {
    let (path, source) = match override_path {
        Some(path) => (path, ConfigPathSource::Cli),
        None => match env::var_os(CONFIG_ENV_KEY).filter(|value| !value.is_empty()) {
            Some(value) => (PathBuf::from(value), ConfigPathSource::Env),
            None => (PathBuf::from(DEFAULT_CONFIG_PATH), ConfigPathSource::Default),
        },
    };

    if path.is_absolute() {
        return Ok((path, source));
    }

    let cwd = env::current_dir().context("failed to obtain current directory")?;
    Ok((cwd.join(path), source))
}

/// Build launch arguments suitable for reproduction/logging.
pub fn build_launch_args(config: &Path) -> Vec<String> {
    vec![format!("--config={}", config.display())]
}
