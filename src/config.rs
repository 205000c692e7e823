use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use serde::Deserialize;

/// Persisted global settings: where hammer is installed and where the
/// JDBC drivers live. Per-step parameters never live here.
#[derive(Debug, Deserialize)]
pub struct GlobalConfig {
    pub hammer: HammerConfig,
}

#[derive(Debug, Deserialize)]
pub struct HammerConfig {
    pub install_dir: String,
    pub drivers_dir: String,
}

impl GlobalConfig {
    /// Load configuration with layering: defaults → user config.
    pub fn load() -> Result<Self> {
        let defaults = include_str!("../config/default.toml");
        let mut config: GlobalConfig = toml::from_str(defaults)?;

        if let Some(proj_dirs) = directories::ProjectDirs::from("", "", "hammerstep") {
            let config_path = proj_dirs.config_dir().join("config.toml");
            if config_path.exists() {
                let user_str = fs::read_to_string(&config_path)?;
                config = toml::from_str(&user_str)?;
            }
        }

        config.hammer.install_dir = expand_tilde(&config.hammer.install_dir);
        config.hammer.drivers_dir = expand_tilde(&config.hammer.drivers_dir);

        Ok(config)
    }
}

fn expand_tilde(path: &str) -> String {
    if !path.starts_with('~') {
        return path.to_string();
    }
    if let Some(base_dirs) = directories::BaseDirs::new() {
        let home = base_dirs.home_dir().to_string_lossy().into_owned();
        return path.replacen('~', &home, 1);
    }
    path.to_string()
}

/// Where the user config file is expected; used for error hints.
pub fn user_config_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "hammerstep")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_defaults_parse() {
        let defaults = include_str!("../config/default.toml");
        let config: GlobalConfig = toml::from_str(defaults).unwrap();
        // Defaults are deliberately empty; validation rejects them until
        // the user or the CLI supplies real directories.
        assert!(config.hammer.install_dir.is_empty());
        assert!(config.hammer.drivers_dir.is_empty());
    }

    #[test]
    fn tilde_expansion_only_touches_the_prefix() {
        assert_eq!(expand_tilde("/opt/datical"), "/opt/datical");
        if directories::BaseDirs::new().is_some() {
            let expanded = expand_tilde("~/datical");
            assert!(!expanded.starts_with('~'));
            assert!(expanded.ends_with("/datical"));
        }
    }
}
