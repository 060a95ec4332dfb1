use crate::path_utils::validate_path_str;
use anyhow::{Result, anyhow};
use directories::ProjectDirs;
use std::env;
use std::path::{Path, PathBuf};

pub const ENV_CONFIG_DIR: &str = "IMGMASH_CONFIG_DIR";
pub const APP_NAME: &str = "imgmash";

/// Resolves the configuration directory, preferring the CLI override, then
/// the `IMGMASH_CONFIG_DIR` environment variable, then the platform default.
pub fn resolve_config_dir(cli_override: Option<&Path>) -> Result<PathBuf> {
    let env_override = env::var(ENV_CONFIG_DIR).ok();
    resolve_config_dir_with(cli_override, env_override.as_deref())
}

pub fn resolve_config_dir_with(
    cli_override: Option<&Path>,
    env_override: Option<&str>,
) -> Result<PathBuf> {
    if let Some(path) = cli_override {
        validate_path_str(&path.to_string_lossy())
            .map_err(|e| anyhow!("Invalid --config-dir: {e}"))?;
        return Ok(path.to_path_buf());
    }

    if let Some(env_config_dir) = env_override {
        validate_path_str(env_config_dir)
            .map_err(|e| anyhow!("Invalid {ENV_CONFIG_DIR}: {e}"))?;
        return Ok(PathBuf::from(env_config_dir));
    }

    let project_dirs = ProjectDirs::from("", "", APP_NAME)
        .ok_or_else(|| anyhow!("Could not determine a configuration directory for {APP_NAME}"))?;
    Ok(project_dirs.config_dir().to_path_buf())
}
