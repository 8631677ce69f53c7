//! Stillframe Core - photo capture finishing
//!
//! Takes a still photo delivered by a platform camera API and finishes it:
//! optional resize, EXIF orientation fix, aspect crop, JPEG encode, write to
//! disk, and a result descriptor for the host. Failures surface as a typed
//! [`CameraError`] with a stable string code.
//!
//! # Example
//!
//! ```ignore
//! use stillframe_core::{completion_channel, CaptureRequest, CapturedPhoto, ImageFinisher,
//!     PhotoCaptureDelegate};
//!
//! let (completion, pending) = completion_channel();
//! let mut delegate = PhotoCaptureDelegate::new(
//!     CaptureRequest::new("/tmp/photo.jpg"),
//!     ImageFinisher::default(),
//!     completion,
//! );
//! delegate.will_capture();
//! delegate.did_finish_processing(Ok(CapturedPhoto::from_file_data(bytes)));
//! delegate.did_finish_capture(None);
//! let descriptor = pending.wait().await?;
//! ```

pub mod backend;
pub mod capture;
pub mod config;
pub mod decode;
pub mod describe;
pub mod encode;
pub mod error;
pub mod persist;
pub mod pipeline;
pub mod transform;

#[cfg(test)]
mod test_support;

pub use backend::{ImagingBackend, RustBackend};
pub use capture::{
    completion_channel, CaptureMetadata, CaptureOutcome, CaptureRequest, CapturedPhoto,
    Completion, PendingCapture, PhotoCaptureDelegate, ShutterKind, ShutterObserver, ShutterSound,
    ThumbnailFormat, TracingShutter,
};
pub use config::FinisherConfig;
pub use describe::{OrientationClass, ResultDescriptor};
pub use error::{CameraError, CaptureError, ConfigError, PlatformError, STORAGE_FULL_CODE};
pub use pipeline::ImageFinisher;
pub use transform::AspectRatio;

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
