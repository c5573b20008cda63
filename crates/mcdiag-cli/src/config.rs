use crate::error::{Error, Result};
use mcdiag_types::{CustomRule, CustomRuleSet};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Resolve the data directory path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. MCDIAG_PATH environment variable (with tilde expansion)
/// 3. System data directory (recommended default)
/// 4. ~/.mcdiag (fallback for systems without standard data directory)
pub fn resolve_data_dir(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var("MCDIAG_PATH") {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(data_dir) = dirs::data_dir() {
        return Ok(data_dir.join("mcdiag"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".mcdiag"));
    }

    Err(Error::Config(
        "Could not determine data directory: no HOME directory or system data directory found"
            .to_string(),
    ))
}

/// Expand tilde (~) in paths to the user's home directory
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(stripped);
    }
    PathBuf::from(path)
}

/// Custom rules belonging to one scope (a server or community).
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ScopeConfig {
    #[serde(default)]
    pub custom_rules: CustomRuleSet,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub scopes: BTreeMap<String, ScopeConfig>,
}

impl Config {
    pub fn path_in(data_dir: &Path) -> PathBuf {
        data_dir.join(CONFIG_FILE_NAME)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        tracing::debug!(path = %path.display(), "config saved");
        Ok(())
    }

    pub fn scope(&self, name: &str) -> Option<&ScopeConfig> {
        self.scopes.get(name)
    }

    pub fn scope_mut(&mut self, name: &str) -> &mut ScopeConfig {
        self.scopes.entry(name.to_string()).or_default()
    }

    /// The scope's rules, or `None` when the scope is unknown or empty.
    pub fn custom_rules(&self, scope: &str) -> Option<&CustomRuleSet> {
        self.scope(scope)
            .map(|s| &s.custom_rules)
            .filter(|rules| !rules.is_empty())
    }

    /// Returns the replaced trigger when the label already existed.
    pub fn add_custom_rule(&mut self, scope: &str, label: &str, trigger: &str) -> Option<String> {
        self.scope_mut(scope).custom_rules.insert(label, trigger)
    }

    pub fn remove_custom_rule(&mut self, scope: &str, label: &str) -> Result<CustomRule> {
        let Some(scope_config) = self.scopes.get_mut(scope) else {
            return Err(Error::NotFound(format!("no custom rules in scope '{}'", scope)));
        };

        if scope_config.custom_rules.is_empty() {
            return Err(Error::NotFound(format!("no custom rules in scope '{}'", scope)));
        }

        scope_config
            .custom_rules
            .remove(label)
            .ok_or_else(|| Error::NotFound(format!("custom rule '{}'", label)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.scopes.is_empty());
        assert!(config.custom_rules("default").is_none());
    }

    #[test]
    fn test_config_save_and_load() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = Config::path_in(temp_dir.path());

        let mut config = Config::default();
        config.add_custom_rule("default", "Update your drivers", "GPU driver outdated");
        config.add_custom_rule("default", "Reinstall Forge", "FMLLoader failed");
        config.add_custom_rule("modpack", "Use the pack's Java", "Unsupported class file");

        config.save_to(&config_path)?;
        assert!(config_path.exists());

        let loaded = Config::load_from(&config_path)?;
        assert_eq!(loaded, config);

        let labels: Vec<&str> = loaded
            .custom_rules("default")
            .unwrap()
            .iter()
            .map(|r| r.label.as_str())
            .collect();
        assert_eq!(labels, vec!["Update your drivers", "Reinstall Forge"]);

        Ok(())
    }

    #[test]
    fn test_load_nonexistent_returns_default() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config = Config::load_from(&temp_dir.path().join("nonexistent.toml"))?;
        assert!(config.scopes.is_empty());
        Ok(())
    }

    #[test]
    fn test_load_hand_written_inline_tables() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = Config::path_in(temp_dir.path());
        std::fs::write(
            &path,
            r#"
[scopes.default]
custom_rules = [
    { label = "Update your drivers", trigger = "GPU driver outdated" },
]
"#,
        )?;

        let config = Config::load_from(&path)?;
        let rules = config.custom_rules("default").unwrap();
        assert_eq!(rules.get("Update your drivers"), Some("GPU driver outdated"));

        Ok(())
    }

    #[test]
    fn test_invalid_toml_is_config_error() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = Config::path_in(temp_dir.path());
        std::fs::write(&path, "scopes = 3")?;

        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, Error::Config(_)));

        Ok(())
    }

    #[test]
    fn test_remove_custom_rule() {
        let mut config = Config::default();
        assert!(matches!(
            config.remove_custom_rule("default", "x"),
            Err(Error::NotFound(_))
        ));

        config.add_custom_rule("default", "x", "y");
        assert!(matches!(
            config.remove_custom_rule("default", "missing"),
            Err(Error::NotFound(_))
        ));

        let removed = config.remove_custom_rule("default", "x").unwrap();
        assert_eq!(removed.trigger, "y");
        assert!(config.custom_rules("default").is_none());
    }

    #[test]
    fn test_expand_tilde_leaves_plain_paths() {
        assert_eq!(expand_tilde("/tmp/mcdiag"), PathBuf::from("/tmp/mcdiag"));
        assert_eq!(expand_tilde("relative/dir"), PathBuf::from("relative/dir"));
    }

    #[test]
    fn test_explicit_data_dir_wins() -> Result<()> {
        assert_eq!(resolve_data_dir(Some("/srv/mcdiag"))?, PathBuf::from("/srv/mcdiag"));
        Ok(())
    }
}
