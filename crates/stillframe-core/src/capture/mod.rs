//! Capture inputs and the platform-facing capture delegate.
//!
//! The platform side is modelled through plain values: a [`CapturedPhoto`]
//! (or a [`PlatformError`](crate::error::PlatformError)) arrives in a
//! callback, and the host waits on a [`PendingCapture`] for the outcome.

mod delegate;
mod metadata;
mod shutter;

pub use delegate::{
    completion_channel, CaptureOutcome, Completion, PendingCapture, PhotoCaptureDelegate,
};
pub use metadata::{CaptureMetadata, ThumbnailFormat};
pub use shutter::{ShutterKind, ShutterObserver, ShutterSound, TracingShutter};

use std::path::PathBuf;

use crate::config::FinisherConfig;
use crate::error::ConfigError;
use crate::transform::AspectRatio;

/// Parameters for finishing one capture.
#[derive(Debug, Clone, PartialEq)]
pub struct CaptureRequest {
    /// Shorter-side size to scale to; 0 disables resizing.
    pub target_width: u32,
    pub aspect_ratio: AspectRatio,
    /// JPEG compression quality from 0.0 to 1.0.
    pub compression_quality: f32,
    /// Where the finished JPEG is written.
    pub destination: PathBuf,
    pub shutter_sound: bool,
}

impl CaptureRequest {
    /// A request with the default capture settings.
    pub fn new(destination: impl Into<PathBuf>) -> Self {
        Self {
            target_width: 0,
            aspect_ratio: AspectRatio::Standard,
            compression_quality: 0.9,
            destination: destination.into(),
            shutter_sound: true,
        }
    }

    /// A request built from the configured capture defaults.
    pub fn from_config(
        config: &FinisherConfig,
        destination: impl Into<PathBuf>,
    ) -> Result<Self, ConfigError> {
        let capture = &config.capture;
        Ok(Self {
            target_width: capture.target_width,
            aspect_ratio: capture.aspect()?,
            compression_quality: capture.compression_quality,
            destination: destination.into(),
            shutter_sound: capture.shutter_sound,
        })
    }
}

/// A photo as delivered by the platform capture API.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CapturedPhoto {
    /// Encoded photo bytes; `None` when the platform could not provide them.
    pub file_data: Option<Vec<u8>>,
    pub metadata: CaptureMetadata,
    pub is_raw_photo: bool,
    pub embedded_thumbnail: Option<ThumbnailFormat>,
}

impl CapturedPhoto {
    pub fn new(file_data: Vec<u8>, metadata: CaptureMetadata) -> Self {
        Self {
            file_data: Some(file_data),
            metadata,
            is_raw_photo: false,
            embedded_thumbnail: None,
        }
    }

    /// Build a capture from encoded bytes, reading metadata and thumbnail
    /// description from the bytes themselves.
    pub fn from_file_data(file_data: Vec<u8>) -> Self {
        let metadata = CaptureMetadata::from_file_data(&file_data);
        let embedded_thumbnail = ThumbnailFormat::from_file_data(&file_data);
        Self {
            embedded_thumbnail,
            ..Self::new(file_data, metadata)
        }
    }

    /// A capture whose data could not be accessed.
    pub fn without_data(metadata: CaptureMetadata) -> Self {
        Self {
            file_data: None,
            metadata,
            ..Self::default()
        }
    }
}
