//! Aspect-preserving resize to a requested target width.
//!
//! The requested width always constrains the image's shorter side, so a
//! sideways-stored capture and an upright one end up at the same scale.

use crate::transform::TransformError;

use super::{FilterType, ImageBuffer};

/// Largest output side a resize may produce.
pub const MAX_DIMENSION: u32 = 16384;

/// Resize an image to exact dimensions.
///
/// The orientation tag is carried over unchanged.
pub fn resize(
    image: &ImageBuffer,
    width: u32,
    height: u32,
    filter: FilterType,
) -> Result<ImageBuffer, TransformError> {
    if width == 0 || height == 0 || image.is_empty() {
        return Err(TransformError::EmptyImage);
    }

    // Fast path: if dimensions match, just clone
    if image.width == width && image.height == height {
        return Ok(image.clone());
    }

    let rgb_image = image.to_rgb_image().ok_or(TransformError::PixelBufferMismatch {
        width: image.width,
        height: image.height,
        actual: image.pixels.len(),
    })?;

    let resized = image::imageops::resize(&rgb_image, width, height, filter.to_image_filter());

    Ok(ImageBuffer::from_rgb_image(resized).with_orientation(image.orientation))
}

/// Calculate output dimensions for a target width, preserving aspect ratio.
///
/// With `aspect = width / height`: portrait or square sources become
/// `(target, target / aspect)`, landscape sources `(target * aspect, target)`.
/// Neither side drops below 1 or exceeds [`MAX_DIMENSION`].
///
/// # Errors
///
/// Returns `TransformError::EmptyImage` for a zero-size source, and
/// `TransformError::InvalidTarget` when `target_width` is zero or the
/// longer output side would exceed [`MAX_DIMENSION`].
pub fn target_dimensions(
    width: u32,
    height: u32,
    target_width: u32,
) -> Result<(u32, u32), TransformError> {
    if width == 0 || height == 0 {
        return Err(TransformError::EmptyImage);
    }
    if target_width == 0 || target_width > MAX_DIMENSION {
        return Err(TransformError::InvalidTarget(target_width));
    }

    let aspect = width as f64 / height as f64;
    let target = target_width as f64;
    let long_side = if width <= height {
        (target / aspect).round()
    } else {
        (target * aspect).round()
    };
    if long_side > MAX_DIMENSION as f64 {
        return Err(TransformError::InvalidTarget(target_width));
    }
    let long_side = (long_side as u32).max(1);

    if width <= height {
        Ok((target_width, long_side))
    } else {
        Ok((long_side, target_width))
    }
}
