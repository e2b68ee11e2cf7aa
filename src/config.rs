//! Configuration handling for the signup step

use crate::state::DEFAULT_ID_LABEL;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;

/// Host options for the signup step
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SignupConfig {
    /// Heading shown above the form
    pub page_title: String,
    /// Label of the submit button
    pub submit_button_text: String,
    /// Whether the step offers a Back button
    pub show_back_button: bool,
    /// Label of the accreditation number field
    pub id_label: String,
}

impl Default for SignupConfig {
    fn default() -> Self {
        Self {
            page_title: "Signup".to_string(),
            submit_button_text: "Submit".to_string(),
            show_back_button: false,
            id_label: DEFAULT_ID_LABEL.to_string(),
        }
    }
}

impl SignupConfig {
    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "signup", "signup-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from the default location.
    ///
    /// On first run the defaults are written out so they can be edited.
    pub async fn load() -> Result<Self> {
        let Some(path) = Self::config_path() else {
            return Ok(Self::default());
        };
        if !fs::try_exists(&path).await? {
            let config = Self::default();
            config.save_to(&path).await?;
            tracing::info!("Wrote default config to {}", path.display());
            return Ok(config);
        }
        Self::load_from(&path).await
    }

    /// Load configuration from a file, falling back to defaults when it is missing
    pub async fn load_from(path: &Path) -> Result<Self> {
        if !fs::try_exists(path).await? {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .await
            .with_context(|| format!("failed to read {}", path.display()))?;
        let config = serde_json::from_str(&content)
            .with_context(|| format!("invalid config in {}", path.display()))?;
        Ok(config)
    }

    /// Save configuration to a file, creating its directory
    pub async fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content).await?;
        Ok(())
    }
}
