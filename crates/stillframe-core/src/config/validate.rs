//! Configuration validation with range checks.

use crate::decode::MAX_DIMENSION;
use crate::error::ConfigError;

use super::FinisherConfig;

const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];
const LOG_FORMATS: [&str; 2] = ["pretty", "json"];

impl FinisherConfig {
    /// Validate configuration values are within acceptable ranges.
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        let quality = self.capture.compression_quality;
        if !(0.0..=1.0).contains(&quality) {
            return Err(ConfigError::ValidationError(
                "capture.compression_quality must be between 0.0 and 1.0".into(),
            ));
        }
        if self.capture.target_width > MAX_DIMENSION {
            return Err(ConfigError::ValidationError(format!(
                "capture.target_width must be at most {MAX_DIMENSION}"
            )));
        }
        self.capture.aspect()?;
        if !LOG_LEVELS.contains(&self.logging.level.as_str()) {
            return Err(ConfigError::ValidationError(format!(
                "logging.level must be one of {}",
                LOG_LEVELS.join(", ")
            )));
        }
        if !LOG_FORMATS.contains(&self.logging.format.as_str()) {
            return Err(ConfigError::ValidationError(
                "logging.format must be pretty or json".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_passes_validation() {
        assert!(FinisherConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_quality_out_of_range() {
        for quality in [-0.1, 1.01, f32::NAN] {
            let mut config = FinisherConfig::default();
            config.capture.compression_quality = quality;
            let err = config.validate().unwrap_err();
            assert!(err.to_string().contains("compression_quality"), "{quality}");
        }
    }

    #[test]
    fn test_validate_accepts_quality_bounds() {
        for quality in [0.0, 1.0] {
            let mut config = FinisherConfig::default();
            config.capture.compression_quality = quality;
            assert!(config.validate().is_ok());
        }
    }

    #[test]
    fn test_validate_target_width_limit() {
        let mut config = FinisherConfig::default();
        config.capture.target_width = MAX_DIMENSION;
        assert!(config.validate().is_ok());

        for width in [MAX_DIMENSION + 1, u32::MAX] {
            config.capture.target_width = width;
            let err = config.validate().unwrap_err();
            assert!(err.to_string().contains("target_width"), "{width}");
        }
    }

    #[test]
    fn test_validate_rejects_bad_aspect_ratio() {
        for ratio in ["wide", "16:0", "-1", ""] {
            let mut config = FinisherConfig::default();
            config.capture.aspect_ratio = ratio.to_string();
            let err = config.validate().unwrap_err();
            assert!(err.to_string().contains("aspect_ratio"), "{ratio}");
        }
    }

    #[test]
    fn test_validate_rejects_unknown_log_settings() {
        let mut config = FinisherConfig::default();
        config.logging.level = "verbose".to_string();
        assert!(config.validate().is_err());

        let mut config = FinisherConfig::default();
        config.logging.format = "xml".to_string();
        assert!(config.validate().is_err());
    }
}
