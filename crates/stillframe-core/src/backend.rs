//! Imaging backend trait.
//!
//! The [`ImagingBackend`] trait is the set of pixel operations the capture
//! pipeline needs: decode, scale, orient, crop, and encode. Geometry (target
//! sizes, crop windows) is computed by the pipeline, so a backend only
//! executes operations it is handed.
//!
//! [`RustBackend`] is the production implementation, built on the `image`
//! and `kamadak-exif` crates.

use crate::decode::{self, DecodeError, FilterType, ImageBuffer};
use crate::encode::{self, EncodeError};
use crate::transform::{self, CropWindow, TransformError};

/// Pixel operations the capture pipeline runs through.
pub trait ImagingBackend: Send + Sync {
    /// Decode encoded bytes, tagging the buffer with its EXIF orientation.
    fn decode(&self, bytes: &[u8]) -> Result<ImageBuffer, DecodeError>;

    /// Scale to exact dimensions, keeping the orientation tag.
    fn scale(&self, image: &ImageBuffer, width: u32, height: u32)
        -> Result<ImageBuffer, TransformError>;

    /// Apply and clear the orientation tag.
    fn orient(&self, image: ImageBuffer) -> Result<ImageBuffer, TransformError>;

    /// Copy out a pixel window.
    fn crop(&self, image: &ImageBuffer, window: CropWindow) -> Result<ImageBuffer, TransformError>;

    /// Encode to JPEG at a 0.0-1.0 quality.
    fn encode(&self, image: &ImageBuffer, quality: f32) -> Result<Vec<u8>, EncodeError>;
}

/// Pure Rust backend.
#[derive(Debug, Clone, Copy, Default)]
pub struct RustBackend {
    pub filter: FilterType,
}

impl RustBackend {
    pub fn new(filter: FilterType) -> Self {
        Self { filter }
    }
}

impl ImagingBackend for RustBackend {
    fn decode(&self, bytes: &[u8]) -> Result<ImageBuffer, DecodeError> {
        decode::decode_capture(bytes)
    }

    fn scale(
        &self,
        image: &ImageBuffer,
        width: u32,
        height: u32,
    ) -> Result<ImageBuffer, TransformError> {
        decode::resize(image, width, height, self.filter)
    }

    fn orient(&self, image: ImageBuffer) -> Result<ImageBuffer, TransformError> {
        transform::fix_orientation(image)
    }

    fn crop(&self, image: &ImageBuffer, window: CropWindow) -> Result<ImageBuffer, TransformError> {
        transform::crop(image, window)
    }

    fn encode(&self, image: &ImageBuffer, quality: f32) -> Result<Vec<u8>, EncodeError> {
        encode::encode_jpeg(image, quality)
    }
}
