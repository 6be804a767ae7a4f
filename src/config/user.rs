use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScaffoldError};

/// User-level configuration loaded from `~/.config/sdk-scaffold/config.toml`.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UserConfig {
    /// Template directory to materialize instead of the bundled one.
    pub template: Option<PathBuf>,

    /// Appended to the bare name to form the project directory name.
    pub suffix: Option<String>,

    /// Package manager used for the bootstrap commands and the hook.
    pub package_manager: Option<String>,
}

/// Get the path to the user config file.
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("sdk-scaffold").join("config.toml"))
}

/// Load user configuration from the XDG config directory.
///
/// Returns `Ok(None)` if the config file does not exist.
/// Returns `Err` if the file exists but cannot be read or parsed.
pub fn load_user_config() -> Result<Option<UserConfig>> {
    match config_path() {
        Some(path) => load_user_config_from(&path),
        None => Ok(None),
    }
}

pub fn load_user_config_from(path: &Path) -> Result<Option<UserConfig>> {
    if !path.exists() {
        return Ok(None);
    }

    let content = std::fs::read_to_string(path).map_err(|e| ScaffoldError::Io {
        context: format!("reading user config {}", path.display()),
        source: e,
    })?;

    let config: UserConfig =
        toml::from_str(&content).map_err(|e| ScaffoldError::ConfigParse { source: e })?;

    Ok(Some(config))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_user_config() {
        let toml_str = r#"
template = "/opt/templates/sdk"
suffix = "-client"
package_manager = "npm"
"#;
        let config: UserConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.template, Some(PathBuf::from("/opt/templates/sdk")));
        assert_eq!(config.suffix.as_deref(), Some("-client"));
        assert_eq!(config.package_manager.as_deref(), Some("npm"));
    }

    #[test]
    fn parse_empty_config() {
        let config: UserConfig = toml::from_str("").unwrap();
        assert_eq!(config, UserConfig::default());
    }

    #[test]
    fn parse_unknown_key_errors() {
        let result: std::result::Result<UserConfig, _> = toml::from_str("sufix = \"-x\"");
        assert!(result.is_err());
    }

    #[test]
    fn parse_malformed_config_errors() {
        let result: std::result::Result<UserConfig, _> = toml::from_str("not valid [[ toml");
        assert!(result.is_err());
    }

    #[test]
    fn missing_file_loads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_user_config_from(&dir.path().join("config.toml")).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn malformed_file_is_config_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "suffix = ").unwrap();

        let err = load_user_config_from(&path).unwrap_err();
        assert!(matches!(err, ScaffoldError::ConfigParse { .. }));
    }
}
