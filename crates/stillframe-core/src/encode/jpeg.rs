//! JPEG encoding of finished captures.
//!
//! Capture requests carry compression quality as a fraction (0.0 to 1.0);
//! the encoder works in the codec's 1-100 scale.

use image::codecs::jpeg::JpegEncoder;
use image::ExtendedColorType;
use image::ImageEncoder;
use std::io::Cursor;
use thiserror::Error;

use crate::decode::ImageBuffer;

/// Errors that can occur during JPEG encoding.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Pixel data length doesn't match expected dimensions
    #[error("Invalid pixel data: expected {expected} bytes (width * height * 3), got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },

    /// Width or height is zero
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// Compression quality is not a number
    #[error("Invalid compression quality: {0}")]
    InvalidQuality(f32),

    /// JPEG encoding failed
    #[error("JPEG encoding failed: {0}")]
    EncodingFailed(String),
}

/// Convert a 0.0-1.0 compression quality to the codec's 1-100 scale.
///
/// Values outside the range are clamped; NaN and infinities are rejected.
pub fn jpeg_quality(quality: f32) -> Result<u8, EncodeError> {
    if !quality.is_finite() {
        return Err(EncodeError::InvalidQuality(quality));
    }
    Ok((quality.clamp(0.0, 1.0) * 100.0).round().clamp(1.0, 100.0) as u8)
}

/// Encode a capture buffer to JPEG bytes.
///
/// # Arguments
///
/// * `image` - The (upright, cropped) buffer to encode
/// * `quality` - Compression quality from 0.0 to 1.0
pub fn encode_jpeg(image: &ImageBuffer, quality: f32) -> Result<Vec<u8>, EncodeError> {
    let quality = jpeg_quality(quality)?;
    encode_jpeg_pixels(&image.pixels, image.width, image.height, quality)
}

/// Encode RGB pixel data to JPEG bytes.
///
/// # Arguments
///
/// * `pixels` - RGB pixel data (3 bytes per pixel, row-major order)
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
/// * `quality` - JPEG quality (1-100, where 100 is highest quality)
pub fn encode_jpeg_pixels(
    pixels: &[u8],
    width: u32,
    height: u32,
    quality: u8,
) -> Result<Vec<u8>, EncodeError> {
    if width == 0 || height == 0 {
        return Err(EncodeError::InvalidDimensions { width, height });
    }

    let expected_len = (width as usize) * (height as usize) * 3;
    if pixels.len() != expected_len {
        return Err(EncodeError::InvalidPixelData {
            expected: expected_len,
            actual: pixels.len(),
        });
    }

    let quality = quality.clamp(1, 100);

    let mut buffer = Cursor::new(Vec::new());
    let encoder = JpegEncoder::new_with_quality(&mut buffer, quality);

    encoder
        .write_image(pixels, width, height, ExtendedColorType::Rgb8)
        .map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;

    Ok(buffer.into_inner())
}


// ============================================================================
// Property-Based Tests
// ============================================================================
