use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Global configuration loaded from `~/.config/dircp/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DircpConfig {
    /// Extensions used when a command is not given an explicit `--ext` list.
    pub default_extensions: Vec<String>,
    /// Sort resolved libraries by path instead of keeping listing order.
    #[serde(default)]
    pub sort_output: bool,
}

impl Default for DircpConfig {
    fn default() -> Self {
        Self {
            default_extensions: vec!["jar".to_string(), "zip".to_string()],
            sort_output: false,
        }
    }
}

impl DircpConfig {
    /// The explicit comma separated list if given, else the configured defaults.
    pub fn extensions_or_default(&self, explicit: Option<&str>) -> Vec<String> {
        match explicit {
            Some(list) => list.split(',').map(str::to_string).collect(),
            None => self.default_extensions.clone(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("dircp")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<DircpConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = DircpConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path).with_context(|| format!("read {}", path.display()))?;
    let cfg: DircpConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = DircpConfig::default();
        assert_eq!(cfg.default_extensions, vec!["jar", "zip"]);
        assert!(!cfg.sort_output);
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = DircpConfig::default();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: DircpConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.default_extensions, cfg.default_extensions);
        assert_eq!(parsed.sort_output, cfg.sort_output);
    }

    #[test]
    fn config_toml_custom_values() {
        let toml = r#"
            default_extensions = ["jar", "aar"]
            sort_output = true
        "#;
        let cfg: DircpConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.default_extensions, vec!["jar", "aar"]);
        assert!(cfg.sort_output);
    }

    #[test]
    fn config_toml_sort_output_defaults_off() {
        let cfg: DircpConfig = toml::from_str(r#"default_extensions = ["jar"]"#).unwrap();
        assert!(!cfg.sort_output);
    }

    #[test]
    fn explicit_extensions_override_defaults() {
        let cfg = DircpConfig::default();
        assert_eq!(cfg.extensions_or_default(Some("aar,JAR")), vec!["aar", "JAR"]);
        assert_eq!(cfg.extensions_or_default(None), vec!["jar", "zip"]);
    }
}
