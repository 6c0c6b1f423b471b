//! Steering config persistence
//!
//! One JSON file per model under a base directory, named after the model
//! with `/` replaced so hub-style names stay a single path component.

#![allow(clippy::result_large_err)]

use crate::atomic::atomic_write;
use crate::errors::{io_error, serialization_error, Result};
use lmsteer_core::{log_op_end, log_op_error, log_op_start, SteeringConfig};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Where configs go when no directory is given
pub const DEFAULT_BASE_PATH: &str = "/workspace/lmsteer";

const FILE_SUFFIX: &str = "_steer_config.json";

/// Result of a save request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved { path: PathBuf },
    /// The config had no entries, so nothing was written
    SkippedEmpty,
}

/// File name for `model_name`'s config, e.g. `openai-community_gpt2_steer_config.json`
pub fn config_file_name(model_name: &str) -> String {
    format!("{}{}", model_name.replace('/', "_"), FILE_SUFFIX)
}

/// Full path the config for `model_name` is written to under `base_path`
pub fn config_file_path(model_name: &str, base_path: &Path) -> PathBuf {
    base_path.join(config_file_name(model_name))
}

/// Write `config` as pretty JSON, replacing any previous file atomically
///
/// An empty config is not written and any existing file is left alone.
pub fn save_steering_config(
    config: &SteeringConfig,
    model_name: &str,
    base_path: &Path,
) -> Result<SaveOutcome> {
    log_op_start!(
        "save_steering_config",
        model_name = model_name,
        capture_count = config.len()
    );
    let start = Instant::now();

    let outcome = save_impl(config, model_name, base_path).map_err(|e| {
        log_op_error!(
            "save_steering_config",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64
        );
        e
    })?;

    log_op_end!(
        "save_steering_config",
        duration_ms = start.elapsed().as_millis() as u64,
        written = matches!(outcome, SaveOutcome::Saved { .. })
    );

    Ok(outcome)
}

fn save_impl(config: &SteeringConfig, model_name: &str, base_path: &Path) -> Result<SaveOutcome> {
    if config.is_empty() {
        tracing::warn!(model_name, "No steering configuration data to save");
        return Ok(SaveOutcome::SkippedEmpty);
    }

    let json = serde_json::to_string_pretty(config)
        .map_err(|e| serialization_error("save_steering_config", e))?;

    let path = config_file_path(model_name, base_path);
    atomic_write(&path, json.as_bytes())?;

    tracing::debug!(
        path = %path.display(),
        size_bytes = json.len(),
        "Persisted steering config"
    );

    Ok(SaveOutcome::Saved { path })
}

/// Read a config previously written by [`save_steering_config`]
pub fn load_steering_config(path: &Path) -> Result<SteeringConfig> {
    let content = fs::read_to_string(path).map_err(|e| io_error("load_steering_config", e))?;
    serde_json::from_str(&content).map_err(|e| serialization_error("load_steering_config", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_file_name_replaces_slashes() {
        assert_eq!(
            config_file_name("openai-community/gpt2"),
            "openai-community_gpt2_steer_config.json"
        );
        assert_eq!(config_file_name("gpt2"), "gpt2_steer_config.json");
        assert_eq!(config_file_name("a/b/c"), "a_b_c_steer_config.json");
    }

    #[test]
    fn test_config_file_path_joins_base() {
        let path = config_file_path("org/m", Path::new("/workspace/lmsteer"));
        assert_eq!(
            path,
            PathBuf::from("/workspace/lmsteer/org_m_steer_config.json")
        );
    }
}
