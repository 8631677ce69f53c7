//! Capture decoding with EXIF orientation tagging.

use std::io::Cursor;

use exif::{In, Reader, Tag};
use image::ImageReader;

use super::{DecodeError, ImageBuffer, Orientation};

/// Decode captured photo bytes into an RGB buffer tagged with its EXIF orientation.
///
/// The pixels are left exactly as stored; the orientation fix happens later
/// in the pipeline, after the optional resize.
///
/// # Errors
///
/// Returns `DecodeError::InvalidFormat` for empty input.
/// Returns `DecodeError::CorruptedFile` if the bytes are not a decodable image.
pub fn decode_capture(bytes: &[u8]) -> Result<ImageBuffer, DecodeError> {
    if bytes.is_empty() {
        return Err(DecodeError::InvalidFormat);
    }

    let orientation = read_orientation(bytes).and_then(Orientation::from_code);

    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    let img = reader
        .decode()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    Ok(ImageBuffer::from_rgb_image(img.into_rgb8()).with_orientation(orientation))
}

/// Read the raw EXIF orientation code from encoded image bytes.
///
/// Returns `None` if there is no EXIF block or no usable Orientation field.
pub fn read_orientation(bytes: &[u8]) -> Option<u32> {
    let mut cursor = Cursor::new(bytes);
    let exif = Reader::new().read_from_container(&mut cursor).ok()?;
    exif.get_field(Tag::Orientation, In::PRIMARY)?
        .value
        .get_uint(0)
}
