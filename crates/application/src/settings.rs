//! Pipeline settings.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use gesturecalc_gesture::{DEFAULT_COOLDOWN, DEFAULT_WINDOW_SIZE};

/// Error loading pipeline settings.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Parse error in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Validation error: {message}")]
    Validation { message: String },
}

/// Tunables for the gesture pipeline and frame loop.
///
/// Missing fields in a settings file fall back to the defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineSettings {
    /// Agreeing frames needed to confirm a gesture.
    pub stability_window: usize,
    /// Refractory period per gesture, in milliseconds.
    pub cooldown_ms: u64,
    /// Consecutive frame failures tolerated before backing off.
    pub max_consecutive_failures: u32,
    /// Pause after `max_consecutive_failures`, in milliseconds.
    pub failure_backoff_ms: u64,
}

impl Default for PipelineSettings {
    fn default() -> Self {
        Self {
            stability_window: DEFAULT_WINDOW_SIZE,
            cooldown_ms: DEFAULT_COOLDOWN.as_millis() as u64,
            max_consecutive_failures: 30,
            failure_backoff_ms: 10,
        }
    }
}

impl PipelineSettings {
    /// Load and validate settings from a JSON file.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let content = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let settings: PipelineSettings =
            serde_json::from_str(&content).map_err(|source| SettingsError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        settings.validate()?;
        tracing::debug!(path = %path.display(), ?settings, "Loaded pipeline settings");
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.stability_window == 0 {
            return Err(SettingsError::Validation {
                message: "stability_window must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    pub fn cooldown(&self) -> Duration {
        Duration::from_millis(self.cooldown_ms)
    }

    pub fn failure_backoff(&self) -> Duration {
        Duration::from_millis(self.failure_backoff_ms)
    }
}
