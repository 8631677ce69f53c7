//! Capture decoding for Stillframe.
//!
//! This module provides functionality for:
//! - Decoding captured photo bytes into an RGB [`ImageBuffer`]
//! - Reading the EXIF orientation tag that travels with the buffer
//! - Resizing a capture so its shorter side matches a target width
//!
//! # Architecture
//!
//! Decoding never reorients pixels. The tag read here is applied by
//! [`crate::transform::fix_orientation`] after the optional resize, so the
//! resize always works on the stored sensor geometry.
//!
//! # Examples
//!
//! ```ignore
//! use stillframe_core::decode::decode_capture;
//!
//! let bytes = std::fs::read("capture.jpg").unwrap();
//! let image = decode_capture(&bytes).unwrap();
//! println!("Decoded {}x{} ({:?})", image.width, image.height, image.orientation);
//! ```

mod jpeg;
mod resize;
mod types;

pub use jpeg::{decode_capture, read_orientation};
pub use resize::{resize, target_dimensions, MAX_DIMENSION};
pub use types::{DecodeError, FilterType, ImageBuffer, Orientation};
