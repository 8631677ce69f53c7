//! Geometric transforms applied to a decoded capture: orientation fix and
//! aspect crop.
//!
//! # Transform Order
//!
//! 1. Resize (see [`crate::decode::target_dimensions`])
//! 2. Orientation fix
//! 3. Aspect crop
//!
//! # Coordinate System
//!
//! Pixel windows ([`CropWindow`]) use a top-left origin. Crop geometry is
//! computed in a bottom-left-origin working space where an upright image
//! occupies the [`Extent`] its orientation fix left it in; see [`crop`].

mod crop;
mod orientation;

pub use crop::{crop, crop_to_aspect, crop_window, AspectRatio, CropWindow, Extent};
pub use orientation::fix_orientation;

use thiserror::Error;

/// Errors raised by the resize and crop stages.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransformError {
    /// The source or requested output has a zero dimension.
    #[error("Cannot transform an empty image")]
    EmptyImage,

    /// The requested target width cannot be used.
    #[error("Invalid target width: {0}")]
    InvalidTarget(u32),

    /// Pixel data length doesn't match the stated dimensions.
    #[error("Pixel buffer does not match {width}x{height}: {actual} bytes")]
    PixelBufferMismatch {
        width: u32,
        height: u32,
        actual: usize,
    },

    /// A crop window reaches outside the image.
    #[error("Crop window {window:?} exceeds {width}x{height} image")]
    CropOutOfBounds {
        window: CropWindow,
        width: u32,
        height: u32,
    },
}
