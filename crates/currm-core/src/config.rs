use crate::error::{Error, Result};
use crate::revision::Revision;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration file used when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "currm.yaml";

/// Rule store location, relative to the working directory.
pub const DEFAULT_RULES_DIR: &str = ".cursor/rules";

/// Default `globs` value written into converted legacy rules.
pub const DEFAULT_GLOBS: &str = "*";

/// One rule to download, as written in the configuration file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RuleEntry {
    /// Display name and base of the local filename. Not sanitized.
    pub name: String,
    /// Source location.
    pub url: String,
    /// Specific revision, or "latest" / absent to track the default branch.
    #[serde(default)]
    pub revision: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub globs: Option<String>,
    #[serde(default, rename = "alwaysApply")]
    pub always_apply: bool,
}

impl RuleEntry {
    pub fn revision(&self) -> Revision {
        Revision::from_config(self.revision.as_deref())
    }

    /// Description for front matter; falls back to the rule name.
    pub fn description_or_name(&self) -> &str {
        non_empty(self.description.as_deref()).unwrap_or(self.name.as_str())
    }

    /// Globs for front matter; falls back to `*`.
    pub fn globs_or_default(&self) -> &str {
        non_empty(self.globs.as_deref()).unwrap_or(DEFAULT_GLOBS)
    }
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.filter(|s| !s.is_empty())
}

/// Top-level shape of `currm.yaml`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RulesConfig {
    #[serde(default)]
    pub rules: Vec<RuleEntry>,
}

impl RulesConfig {
    /// Parse YAML text. `origin` is only used in error messages.
    pub fn from_yaml(text: &str, origin: &Path) -> Result<Self> {
        let cfg: RulesConfig =
            serde_yaml_ng::from_str(text).map_err(|source| Error::ConfigParse {
                path: origin.to_path_buf(),
                source,
            })?;
        cfg.validate()?;
        Ok(cfg)
    }

    fn validate(&self) -> Result<()> {
        for (i, rule) in self.rules.iter().enumerate() {
            let index = i + 1;
            if rule.name.trim().is_empty() {
                return Err(Error::ConfigInvalid {
                    index,
                    reason: "name must not be empty".to_string(),
                });
            }
            if rule.url.trim().is_empty() {
                return Err(Error::ConfigInvalid {
                    index,
                    reason: format!("rule '{}' has an empty url", rule.name),
                });
            }
        }
        Ok(())
    }
}

/// Load and validate the rule configuration at `path`.
pub fn load(path: &Path) -> Result<RulesConfig> {
    let data = fs::read_to_string(path).map_err(|source| Error::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;
    let cfg = RulesConfig::from_yaml(&data, path)?;
    tracing::debug!(path = %path.display(), rules = cfg.rules.len(), "loaded configuration");
    Ok(cfg)
}

/// Create the rule store if needed and return its path. Idempotent.
pub fn prepare_rules_dir(dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(dir).map_err(|source| Error::Directory {
        path: dir.to_path_buf(),
        source,
    })?;
    Ok(dir.to_path_buf())
}
