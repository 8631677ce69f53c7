//! EXIF orientation fix.
//!
//! Applies the buffer's orientation tag to its pixels and clears the tag.
//! The transform table is the one captures have always been finished with:
//!
//! | code | pixel operations |
//! |---|---|
//! | 1 | none |
//! | 2 | mirror X |
//! | 3 | rotate 180° |
//! | 4 | mirror Y |
//! | 5 | mirror X, rotate 180° |
//! | 6 | rotate 90° clockwise |
//! | 7 | mirror X, rotate 90° clockwise |
//! | 8 | rotate 90° clockwise |
//!
//! Codes 6 and 8 share a transform even though EXIF defines them as opposite
//! turns; crop anchoring assumes it.

use image::imageops;

use super::TransformError;
use crate::decode::{ImageBuffer, Orientation};

/// Physically apply the orientation tag and return an untagged buffer.
///
/// An untagged buffer (or one tagged `Normal`) is returned with its pixels
/// untouched, so the fix is idempotent.
///
/// # Errors
///
/// Returns `TransformError::PixelBufferMismatch` if the pixel data does not
/// match the buffer dimensions.
pub fn fix_orientation(image: ImageBuffer) -> Result<ImageBuffer, TransformError> {
    let orientation = match image.orientation {
        None | Some(Orientation::Normal) => return Ok(image.with_orientation(None)),
        Some(orientation) => orientation,
    };

    let (width, height, actual) = (image.width, image.height, image.pixels.len());
    let rgb = image
        .into_rgb_image()
        .ok_or(TransformError::PixelBufferMismatch {
            width,
            height,
            actual,
        })?;

    let upright = match orientation {
        Orientation::Normal => rgb,
        Orientation::FlipHorizontal => imageops::flip_horizontal(&rgb),
        Orientation::Rotate180 => imageops::rotate180(&rgb),
        Orientation::FlipVertical => imageops::flip_vertical(&rgb),
        // mirror X followed by a half turn
        Orientation::Transpose => imageops::flip_vertical(&rgb),
        Orientation::Rotate90CW | Orientation::Rotate270CW => imageops::rotate90(&rgb),
        Orientation::Transverse => imageops::rotate90(&imageops::flip_horizontal(&rgb)),
    };

    Ok(ImageBuffer::from_rgb_image(upright))
}
