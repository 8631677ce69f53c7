//! Image encoding for Stillframe.
//!
//! This module provides functionality for:
//! - Encoding a finished capture buffer to JPEG with a 0.0-1.0 quality
//! - Encoding raw RGB pixel data with a 1-100 codec quality
//!
//! # Examples
//!
//! ```ignore
//! use stillframe_core::encode::encode_jpeg;
//!
//! let jpeg_bytes = encode_jpeg(&image, 0.9).unwrap();
//! println!("Encoded {} bytes", jpeg_bytes.len());
//! ```

mod jpeg;

pub use jpeg::{encode_jpeg, encode_jpeg_pixels, jpeg_quality, EncodeError};
