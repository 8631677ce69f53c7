//! Configuration sections with their defaults.

use serde::{Deserialize, Serialize};

use crate::decode::FilterType;
use crate::error::ConfigError;
use crate::transform::AspectRatio;

/// Defaults applied to every capture request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CaptureConfig {
    /// Shorter-side size to scale captures to (0 disables resizing)
    pub target_width: u32,

    /// Output aspect ratio, as "W:H" or a decimal
    pub aspect_ratio: String,

    /// JPEG compression quality from 0.0 to 1.0
    pub compression_quality: f32,

    /// Play the system shutter sound
    pub shutter_sound: bool,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            target_width: 0,
            aspect_ratio: "4:3".to_string(),
            compression_quality: 0.9,
            shutter_sound: true,
        }
    }
}

impl CaptureConfig {
    /// The configured aspect ratio, parsed.
    pub fn aspect(&self) -> Result<AspectRatio, ConfigError> {
        self.aspect_ratio.parse().map_err(|e: String| {
            ConfigError::ValidationError(format!("capture.aspect_ratio: {e}"))
        })
    }
}

/// Pixel processing settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessingConfig {
    /// Resampling filter used by the resize stage
    pub resize_filter: FilterType,
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    pub level: String,

    /// Log format (pretty or json)
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}
