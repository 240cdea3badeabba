//! Feed configuration
//!
//! Tunables for gesture thresholds, spring parameters and layout geometry.
//! Every field has a default, so a JSON file only needs the values it
//! overrides.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::animation::SpringConfig;

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// JSON parsing error
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Config file could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A value is outside its allowed range
    #[error("Invalid value for {field}: {reason}")]
    Invalid {
        /// Offending field
        field: &'static str,
        /// Why it was rejected
        reason: String,
    },
}

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Tunables for the Campus Buzz feed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FeedConfig {
    /// Horizontal distance a card drag must exceed to commit
    pub swipe_threshold: f32,
    /// Downward distance a settings drag must exceed to dismiss
    pub dismiss_threshold: f32,
    /// Degrees of card rotation per unit of rotation factor
    pub rotation_degrees: f32,
    /// Spring used for every position transition
    pub spring: SpringConfig,
    /// Logical screen width
    pub screen_width: f32,
    /// Logical screen height
    pub screen_height: f32,
    /// Height of the feed header
    pub header_height: f32,
    /// Gap between the header and the open settings sheet
    pub settings_gap: f32,
    /// Details panel width as a fraction of screen width
    pub dock_width_fraction: f32,
    /// Animation frame interval in milliseconds
    pub frame_interval_ms: u64,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            swipe_threshold: 100.0,
            dismiss_threshold: 50.0,
            rotation_degrees: 10.0,
            spring: SpringConfig::default(),
            screen_width: 390.0,
            screen_height: 844.0,
            header_height: 48.0,
            settings_gap: 10.0,
            dock_width_fraction: 0.8,
            frame_interval_ms: 16,
        }
    }
}

impl FeedConfig {
    /// Parse and validate a JSON configuration
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON configuration file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&contents)?;
        tracing::info!(path = %path.display(), "Loaded feed configuration");
        Ok(config)
    }

    /// Reject values the state machines cannot work with
    pub fn validate(&self) -> Result<()> {
        fn positive(field: &'static str, value: f32) -> Result<()> {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(ConfigError::Invalid {
                    field,
                    reason: format!("must be positive, got {}", value),
                })
            }
        }

        positive("swipeThreshold", self.swipe_threshold)?;
        positive("dismissThreshold", self.dismiss_threshold)?;
        positive("screenWidth", self.screen_width)?;
        positive("screenHeight", self.screen_height)?;

        if !self.spring.is_valid() {
            return Err(ConfigError::Invalid {
                field: "spring",
                reason: "damping, stiffness, mass and rest thresholds must be positive and stable at the integration step".into(),
            });
        }

        if !(self.dock_width_fraction > 0.0 && self.dock_width_fraction <= 1.0) {
            return Err(ConfigError::Invalid {
                field: "dockWidthFraction",
                reason: format!("must be in (0, 1], got {}", self.dock_width_fraction),
            });
        }

        if self.settings_open_position() >= self.settings_closed_position() {
            return Err(ConfigError::Invalid {
                field: "headerHeight",
                reason: "settings sheet would open below the screen".into(),
            });
        }

        if self.frame_interval_ms == 0 {
            return Err(ConfigError::Invalid {
                field: "frameIntervalMs",
                reason: "must be at least 1".into(),
            });
        }

        Ok(())
    }

    /// Width of the details panel
    pub fn dock_width(&self) -> f32 {
        self.screen_width * self.dock_width_fraction
    }

    /// Details panel offset when open
    pub fn details_open_position(&self) -> f32 {
        0.0
    }

    /// Details panel offset when closed (fully off the right edge)
    pub fn details_closed_position(&self) -> f32 {
        self.dock_width()
    }

    /// Settings sheet offset when open (just below the header)
    pub fn settings_open_position(&self) -> f32 {
        self.header_height + self.settings_gap
    }

    /// Settings sheet offset when closed (below the screen)
    pub fn settings_closed_position(&self) -> f32 {
        self.screen_height
    }

    /// Animation frame interval
    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms)
    }
}
