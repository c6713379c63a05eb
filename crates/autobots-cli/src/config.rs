//! # CLI Configuration
//!
//! Optional YAML settings file. Looked up as `--config <PATH>` when given,
//! otherwise `autobots.yaml` in the working directory, then
//! `.autobots.yaml` in the home directory. When none exists the defaults
//! apply.
//!
//! ```yaml
//! contracts_dir: contracts
//! fail_on_draft: false
//! ```
//!
//! A relative `contracts_dir` is resolved against the directory holding
//! the config file.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Config file name looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "autobots.yaml";

/// Config file name looked up in the home directory.
pub const HOME_CONFIG_FILE: &str = ".autobots.yaml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    /// Directory scanned by `validate --all`.
    pub contracts_dir: PathBuf,
    /// Count valid contracts with `metadata.is_draft: true` as failures.
    pub fail_on_draft: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            contracts_dir: PathBuf::from("contracts"),
            fail_on_draft: false,
        }
    }
}

impl CliConfig {
    /// Parse a config from YAML text. Relative paths are resolved against `base_dir`.
    pub fn from_yaml(content: &str, base_dir: &Path) -> Result<Self> {
        let mut config: CliConfig = if content.trim().is_empty() {
            CliConfig::default()
        } else {
            serde_yaml::from_str(content).context("invalid config YAML")?
        };
        if config.contracts_dir.is_relative() {
            config.contracts_dir = base_dir.join(&config.contracts_dir);
        }
        Ok(config)
    }
}

/// Resolve and load the CLI configuration.
///
/// An explicit path must exist. The implicit files are optional; the
/// working directory wins over `home`.
pub fn load_config(
    explicit: Option<&Path>,
    cwd: &Path,
    home: Option<&Path>,
) -> Result<CliConfig> {
    let path = match explicit {
        Some(p) if p.is_absolute() => p.to_path_buf(),
        Some(p) => cwd.join(p),
        None => match implicit_config(cwd, home) {
            Some(found) => found,
            None => {
                tracing::debug!(cwd = %cwd.display(), "no config file; using defaults");
                return CliConfig::from_yaml("", cwd);
            }
        },
    };

    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    let base_dir = path.parent().unwrap_or(cwd);
    let config = CliConfig::from_yaml(&content, base_dir)
        .with_context(|| format!("failed to load config file {}", path.display()))?;

    tracing::debug!(
        config = %path.display(),
        contracts_dir = %config.contracts_dir.display(),
        fail_on_draft = config.fail_on_draft,
        "loaded config"
    );
    Ok(config)
}

fn implicit_config(cwd: &Path, home: Option<&Path>) -> Option<PathBuf> {
    let local = cwd.join(DEFAULT_CONFIG_FILE);
    if local.is_file() {
        return Some(local);
    }
    home.map(|h| h.join(HOME_CONFIG_FILE)).filter(|p| p.is_file())
}
