//! Builds an [`Analyzer`] from configuration.

use null_mark_core::{Analyzer, Config, ConfigError};
use null_mark_rules::{rules_from_config, LoadRulesError};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Config file names to search for, in priority order.
pub const CONFIG_CANDIDATES: &[&str] = &["null-mark.toml", ".null-mark.toml"];

/// Failure to set up an analyzer.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The config file could not be read or parsed.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// The config selected an unknown preset or an invalid pattern.
    #[error(transparent)]
    Rules(#[from] LoadRulesError),
}

/// Builds an analyzer running the rules selected by `config`.
///
/// # Errors
///
/// Returns an error if the preset is unknown or a pattern does not compile.
pub fn analyzer_from_config(config: Config) -> Result<Analyzer, LoadRulesError> {
    let rules = rules_from_config(&config)?;
    let mut builder = Analyzer::builder().config(config);
    for rule in rules {
        builder = builder.rule_box(rule);
    }
    Ok(builder.build())
}

/// Builds an analyzer from the TOML file at `path`.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, or names invalid
/// rule settings.
pub fn analyzer_from_file(path: &Path) -> Result<Analyzer, LoadError> {
    let config = Config::from_file(path)?;
    Ok(analyzer_from_config(config)?)
}

/// Builds an analyzer from the first config file found in `root`.
///
/// Falls back to the default configuration when no candidate exists.
///
/// # Errors
///
/// Returns an error if a found file cannot be read or parsed, or names
/// invalid rule settings.
pub fn analyzer_from_dir(root: &Path) -> Result<Analyzer, LoadError> {
    match find_config(root) {
        Some(path) => {
            debug!("Using config {}", path.display());
            analyzer_from_file(&path)
        }
        None => {
            debug!("No config in {}, using defaults", root.display());
            Ok(analyzer_from_config(Config::default())?)
        }
    }
}

fn find_config(root: &Path) -> Option<PathBuf> {
    CONFIG_CANDIDATES
        .iter()
        .map(|candidate| root.join(candidate))
        .find(|path| path.is_file())
}
