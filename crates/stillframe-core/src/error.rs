//! Error types surfaced to callers of the capture pipeline.
//!
//! Stage modules keep their own error enums (`DecodeError`, `TransformError`,
//! `EncodeError`); they are folded into [`CaptureError`] here, and every
//! capture failure reaches the host as a [`CameraError`] carrying a stable
//! string code.

use std::path::PathBuf;
use thiserror::Error;

use crate::decode::DecodeError;
use crate::encode::EncodeError;
use crate::transform::TransformError;

/// Platform error code reported when the device has no room for the photo.
pub const STORAGE_FULL_CODE: i64 = -11807;

/// An error reported by the platform capture API.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message} (platform code {code})")]
pub struct PlatformError {
    pub code: i64,
    pub message: String,
}

impl PlatformError {
    pub fn new(code: i64, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// True when the platform ran out of storage while capturing.
    pub fn is_storage_full(&self) -> bool {
        self.code == STORAGE_FULL_CODE
    }
}

/// Top-level error delivered through a capture completion.
#[derive(Error, Debug)]
pub enum CameraError {
    /// The capture failed somewhere between the shutter and the file.
    #[error(transparent)]
    Capture(#[from] CaptureError),
}

impl CameraError {
    /// Stable error code for the host, e.g. `capture/file-io-error`.
    pub fn code(&self) -> &'static str {
        match self {
            CameraError::Capture(e) => e.code(),
        }
    }
}

/// Capture failures, one variant per way a capture can go wrong.
#[derive(Error, Debug)]
pub enum CaptureError {
    /// Platform failure without a more specific meaning, or a capture that
    /// ended without delivering a result.
    #[error("{message}")]
    Unknown {
        message: String,
        #[source]
        cause: Option<PlatformError>,
    },

    /// The captured photo carried no accessible file data.
    #[error("Could not access the captured image data")]
    ImageDataAccess,

    /// Writing the finished photo failed.
    #[error("Failed to write photo to {path}: {source}")]
    FileError {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The device has no room left for the photo.
    #[error("Not enough storage to save the photo")]
    InsufficientStorage {
        #[source]
        cause: PlatformError,
    },

    /// Image decoding failed
    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),

    /// Resize or crop failed
    #[error("Transform error: {0}")]
    Transform(#[from] TransformError),

    /// JPEG encoding failed
    #[error("Encode error: {0}")]
    Encode(#[from] EncodeError),
}

impl CaptureError {
    /// A failure with no platform cause attached.
    pub fn unknown(message: impl Into<String>) -> Self {
        CaptureError::Unknown {
            message: message.into(),
            cause: None,
        }
    }

    /// Map a platform-reported failure onto a capture error.
    pub fn from_platform(error: PlatformError) -> Self {
        if error.is_storage_full() {
            CaptureError::InsufficientStorage { cause: error }
        } else {
            CaptureError::Unknown {
                message: error.message.clone(),
                cause: Some(error),
            }
        }
    }

    /// Stable error code for the host.
    pub fn code(&self) -> &'static str {
        match self {
            CaptureError::ImageDataAccess => "capture/image-data-access",
            CaptureError::FileError { .. } => "capture/file-io-error",
            CaptureError::InsufficientStorage { .. } => "capture/insufficient-storage",
            CaptureError::Unknown { .. }
            | CaptureError::Decode(_)
            | CaptureError::Transform(_)
            | CaptureError::Encode(_) => "capture/unknown",
        }
    }
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the config file from disk
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    /// Failed to parse TOML configuration
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Configuration values are invalid
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}
