use crate::error::ImgmashError;
use crate::path_utils::safe_parent_for_creation;
use anyhow::{Result, anyhow};
use clap::Args;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const SETTINGS_FILE: &str = "settings.toml";

#[derive(Args, Debug, Clone)]
pub struct InitArgs {
    /// Directory containing the images to rank
    #[arg(long)]
    pub images_dir: PathBuf,
    #[arg(long)]
    pub force: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettingsV1 {
    pub version: u32,
    pub images_dir: PathBuf,
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
}

fn default_extensions() -> Vec<String> {
    ["png", "jpg", "jpeg"].map(str::to_string).to_vec()
}

pub fn settings_path(config_dir: &Path) -> PathBuf {
    config_dir.join(SETTINGS_FILE)
}

pub fn run_init(args: &InitArgs, config_dir: &Path) -> Result<()> {
    let path = settings_path(config_dir);
    if path.exists() && !args.force {
        return Err(anyhow!(
            "Settings already exist: {} (use --force to overwrite)",
            path.display()
        ));
    }

    if let Some(parent) = safe_parent_for_creation(&path) {
        fs::create_dir_all(parent)?;
    }

    fs::write(&path, settings_template(&args.images_dir))?;
    println!("✅ Wrote settings: {}", path.display());
    Ok(())
}

pub fn load(config_dir: &Path) -> Result<SettingsV1> {
    let path = settings_path(config_dir);
    if !path.exists() {
        return Err(ImgmashError::SettingsNotFound {
            path: path.display().to_string(),
        }
        .into());
    }
    let content = fs::read_to_string(&path)
        .map_err(|e| anyhow!("Failed to read settings {}: {}", path.display(), e))?;
    let settings: SettingsV1 =
        toml::from_str(&content).map_err(|e| anyhow!("Invalid settings TOML: {e}"))?;
    validate_settings(&settings)?;
    Ok(settings)
}

pub fn validate_settings(settings: &SettingsV1) -> Result<()> {
    if settings.version != 1 {
        return Err(anyhow!(
            "Unsupported settings version: {} (expected 1)",
            settings.version
        ));
    }
    if settings.images_dir.as_os_str().is_empty() {
        return Err(anyhow!("images_dir is required"));
    }
    if settings.extensions.is_empty() {
        return Err(anyhow!("extensions must be non-empty"));
    }
    for ext in &settings.extensions {
        if ext.trim().is_empty() || ext.contains('.') {
            return Err(anyhow!("Invalid extension: {ext:?} (expected e.g. \"png\")"));
        }
    }
    Ok(())
}

fn settings_template(images_dir: &Path) -> String {
    format!(
        r#"version = 1

# Directory containing the images to rank.
images_dir = "{}"

# File extensions that count as catalog entries.
extensions = ["png", "jpg", "jpeg"]
"#,
        images_dir.display()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn template_round_trips_through_the_loader() {
        let temp = TempDir::new().expect("temp dir");
        let images_dir = temp.path().join("players");

        let args = InitArgs {
            images_dir: images_dir.clone(),
            force: false,
        };
        run_init(&args, temp.path()).unwrap();

        let settings = load(temp.path()).unwrap();
        assert_eq!(settings.version, 1);
        assert_eq!(settings.images_dir, images_dir);
        assert_eq!(settings.extensions, vec!["png", "jpg", "jpeg"]);
    }

    #[test]
    fn init_refuses_to_overwrite_without_force() {
        let temp = TempDir::new().expect("temp dir");
        let args = InitArgs {
            images_dir: temp.path().join("players"),
            force: false,
        };
        run_init(&args, temp.path()).unwrap();

        let err = run_init(&args, temp.path()).unwrap_err();
        assert!(err.to_string().contains("use --force"));

        let forced = InitArgs {
            images_dir: temp.path().join("players"),
            force: true,
        };
        run_init(&forced, temp.path()).unwrap();
    }

    #[test]
    fn missing_settings_tell_the_user_to_init() {
        let temp = TempDir::new().expect("temp dir");
        let err = load(temp.path()).unwrap_err();
        assert!(err.to_string().contains("imgmash init"));
    }

    #[test]
    fn unsupported_version_is_rejected() {
        let settings = SettingsV1 {
            version: 2,
            images_dir: PathBuf::from("players"),
            extensions: default_extensions(),
        };
        assert!(validate_settings(&settings).is_err());
    }

    #[test]
    fn bad_extensions_are_rejected() {
        for extensions in [vec![], vec![".png".to_string()], vec!["  ".to_string()]] {
            let settings = SettingsV1 {
                version: 1,
                images_dir: PathBuf::from("players"),
                extensions,
            };
            assert!(validate_settings(&settings).is_err());
        }
    }
}
