//! Core types for capture decoding.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error types for capture decoding operations.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The capture carried no bytes at all.
    #[error("Invalid or unsupported image format")]
    InvalidFormat,

    /// The bytes are not a decodable image container.
    #[error("Corrupted or incomplete image data: {0}")]
    CorruptedFile(String),
}

/// Filter type for image resizing operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FilterType {
    /// Nearest neighbor interpolation (fastest, lowest quality).
    Nearest,
    /// Bilinear interpolation (fast, acceptable quality).
    Bilinear,
    /// Lanczos3 interpolation (slower, highest quality).
    #[default]
    Lanczos3,
}

impl FilterType {
    /// Convert to the image crate's FilterType.
    pub fn to_image_filter(self) -> image::imageops::FilterType {
        match self {
            FilterType::Nearest => image::imageops::FilterType::Nearest,
            FilterType::Bilinear => image::imageops::FilterType::Triangle,
            FilterType::Lanczos3 => image::imageops::FilterType::Lanczos3,
        }
    }
}

/// EXIF orientation values (1-8).
/// See: https://exiftool.org/TagNames/EXIF.html
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u8)]
pub enum Orientation {
    /// Normal (no transformation needed).
    Normal = 1,
    /// Horizontal flip.
    FlipHorizontal = 2,
    /// Rotate 180 degrees.
    Rotate180 = 3,
    /// Vertical flip.
    FlipVertical = 4,
    /// Transpose (flip horizontal + rotate 270 CW).
    Transpose = 5,
    /// Rotate 90 degrees clockwise.
    Rotate90CW = 6,
    /// Transverse (flip horizontal + rotate 90 CW).
    Transverse = 7,
    /// Rotate 270 degrees clockwise (90 CCW).
    Rotate270CW = 8,
}

impl Orientation {
    /// Map a raw EXIF code to an orientation. Codes outside 1-8 yield `None`.
    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            1 => Some(Orientation::Normal),
            2 => Some(Orientation::FlipHorizontal),
            3 => Some(Orientation::Rotate180),
            4 => Some(Orientation::FlipVertical),
            5 => Some(Orientation::Transpose),
            6 => Some(Orientation::Rotate90CW),
            7 => Some(Orientation::Transverse),
            8 => Some(Orientation::Rotate270CW),
            _ => None,
        }
    }

    /// The raw EXIF code.
    #[inline]
    pub fn code(self) -> u32 {
        self as u32
    }

    /// Returns true if the orientation fix for this code swaps width and height.
    #[inline]
    pub fn swaps_dimensions(self) -> bool {
        matches!(
            self,
            Orientation::Rotate90CW | Orientation::Transverse | Orientation::Rotate270CW
        )
    }
}

/// A decoded capture with RGB pixel data.
///
/// `orientation` is the tag read from the source metadata. It travels with
/// the pixels until the orientation fix applies it, after which it is `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageBuffer {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// RGB pixel data in row-major order (3 bytes per pixel).
    /// Length should be width * height * 3.
    pub pixels: Vec<u8>,
    /// EXIF orientation still to be applied, if any.
    pub orientation: Option<Orientation>,
}

impl ImageBuffer {
    /// Create a new untagged ImageBuffer with the given dimensions and pixel data.
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        debug_assert_eq!(
            pixels.len(),
            (width as usize) * (height as usize) * 3,
            "Pixel buffer size mismatch"
        );
        Self {
            width,
            height,
            pixels,
            orientation: None,
        }
    }

    /// Return the same pixels carrying a different orientation tag.
    pub fn with_orientation(self, orientation: Option<Orientation>) -> Self {
        Self {
            orientation,
            ..self
        }
    }

    /// Create an untagged ImageBuffer from an image::RgbImage.
    pub fn from_rgb_image(img: image::RgbImage) -> Self {
        let (width, height) = img.dimensions();
        let pixels = img.into_raw();
        Self {
            width,
            height,
            pixels,
            orientation: None,
        }
    }

    /// Convert to an image::RgbImage for further processing.
    pub fn to_rgb_image(&self) -> Option<image::RgbImage> {
        image::RgbImage::from_raw(self.width, self.height, self.pixels.clone())
    }

    /// Consume the buffer into an image::RgbImage without copying the pixels.
    pub fn into_rgb_image(self) -> Option<image::RgbImage> {
        image::RgbImage::from_raw(self.width, self.height, self.pixels)
    }

    /// Check if this is an empty/invalid image.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0 || self.pixels.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_type_conversion() {
        assert!(matches!(
            FilterType::Nearest.to_image_filter(),
            image::imageops::FilterType::Nearest
        ));
        assert!(matches!(
            FilterType::Bilinear.to_image_filter(),
            image::imageops::FilterType::Triangle
        ));
        assert!(matches!(
            FilterType::Lanczos3.to_image_filter(),
            image::imageops::FilterType::Lanczos3
        ));
    }

    #[test]
    fn test_orientation_from_code() {
        assert_eq!(Orientation::from_code(1), Some(Orientation::Normal));
        assert_eq!(Orientation::from_code(6), Some(Orientation::Rotate90CW));
        assert_eq!(Orientation::from_code(0), None);
        assert_eq!(Orientation::from_code(99), None);
    }

    #[test]
    fn test_orientation_code_roundtrip() {
        for code in 1..=8 {
            assert_eq!(Orientation::from_code(code).map(Orientation::code), Some(code));
        }
    }

    #[test]
    fn test_orientation_swaps_dimensions() {
        assert!(!Orientation::Normal.swaps_dimensions());
        assert!(!Orientation::FlipHorizontal.swaps_dimensions());
        assert!(!Orientation::Rotate180.swaps_dimensions());
        assert!(!Orientation::FlipVertical.swaps_dimensions());
        // Code 5 is fixed with a 180° turn plus mirror, so it keeps its shape
        assert!(!Orientation::Transpose.swaps_dimensions());

        assert!(Orientation::Rotate90CW.swaps_dimensions());
        assert!(Orientation::Transverse.swaps_dimensions());
        assert!(Orientation::Rotate270CW.swaps_dimensions());
    }

    #[test]
    fn test_image_buffer_creation() {
        let img = ImageBuffer::new(100, 50, vec![0u8; 100 * 50 * 3]);

        assert_eq!(img.width, 100);
        assert_eq!(img.height, 50);
        assert_eq!(img.orientation, None);
        assert!(!img.is_empty());
    }

    #[test]
    fn test_image_buffer_with_orientation() {
        let img = ImageBuffer::new(2, 3, vec![0u8; 2 * 3 * 3])
            .with_orientation(Some(Orientation::Rotate180));

        assert_eq!(img.orientation, Some(Orientation::Rotate180));
        assert_eq!((img.width, img.height), (2, 3));
    }

    #[test]
    fn test_image_buffer_empty() {
        let img = ImageBuffer::new(0, 0, vec![]);
        assert!(img.is_empty());
    }

    #[test]
    fn test_rgb_image_roundtrip_keeps_pixels() {
        let pixels: Vec<u8> = (0..2 * 2 * 3).map(|v| v as u8).collect();
        let img = ImageBuffer::new(2, 2, pixels.clone());
        let rgb = img.to_rgb_image().unwrap();
        assert_eq!(ImageBuffer::from_rgb_image(rgb).pixels, pixels);
    }

    #[test]
    fn test_decode_error_display() {
        let err = DecodeError::CorruptedFile("truncated".to_string());
        assert_eq!(err.to_string(), "Corrupted or incomplete image data: truncated");

        let err = DecodeError::InvalidFormat;
        assert_eq!(err.to_string(), "Invalid or unsupported image format");
    }
}
