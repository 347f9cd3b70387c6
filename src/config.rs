use std::{
    env, fs,
    path::{Path, PathBuf},
};

use log::debug;
use serde::Deserialize;

use crate::error::{DatasetError, Result};

pub const TRAIN_LINK: &str =
    "https://drive.google.com/file/d/12Uz59TYg_NtxOy7SXraYeXPMRT7oaO7X/view?usp=sharing";
pub const TEST_LINK: &str =
    "https://drive.google.com/file/d/1Hn5ytHSSoGOC4sjm3wYy0Dh0oY_oXBbb/view?usp=sharing";

/// Where split files live and where they come from.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoaderConfig {
    /// Directory holding `emo-train.json` and `emo-test.json`.
    pub data_dir: PathBuf,
    /// Shared link (or bare file id) of the train split.
    pub train_link: String,
    /// Shared link (or bare file id) of the test split.
    pub test_link: String,
    /// Download the split files even when they already exist.
    pub force_refetch: bool,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            train_link: TRAIN_LINK.to_string(),
            test_link: TEST_LINK.to_string(),
            force_refetch: false,
        }
    }
}

impl LoaderConfig {
    /// Loads a configuration from a JSON file. Missing fields take their defaults.
    ///
    /// # Errors
    /// `DatasetError::Config` if the file cannot be read or parsed.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            DatasetError::Config(format!("cannot read '{}': {e}", path.display()))
        })?;

        serde_json::from_str(&content).map_err(|e| {
            DatasetError::Config(format!("invalid config '{}': {e}", path.display()))
        })
    }

    /// Applies `EMO_DATA_DIR`, `EMO_TRAIN_LINK`, `EMO_TEST_LINK` and
    /// `EMO_FORCE_REFETCH` on top of this configuration.
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(|key| env::var(key).ok())
    }

    fn with_overrides(mut self, var: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(dir) = var("EMO_DATA_DIR") {
            debug!("data dir overridden from env: {dir}");
            self.data_dir = PathBuf::from(dir);
        }
        if let Some(link) = var("EMO_TRAIN_LINK") {
            self.train_link = link;
        }
        if let Some(link) = var("EMO_TEST_LINK") {
            self.test_link = link;
        }
        if let Some(flag) = var("EMO_FORCE_REFETCH") {
            self.force_refetch = matches!(
                flag.trim().to_ascii_lowercase().as_str(),
                "1" | "true" | "yes"
            );
        }
        self
    }
}
