//! EXIF metadata carried alongside a capture.

use std::collections::BTreeMap;
use std::io::Cursor;

use exif::{Exif, Field, In, Reader, Tag};
use image::ImageReader;
use serde::{Deserialize, Serialize};

use crate::decode::Orientation;

/// The metadata block the platform delivers with a captured photo.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptureMetadata {
    /// Raw EXIF orientation code (1-8), if present.
    pub orientation: Option<u32>,
    /// PixelXDimension from the Exif sub-IFD.
    pub pixel_width: Option<u32>,
    /// PixelYDimension from the Exif sub-IFD.
    pub pixel_height: Option<u32>,
    /// Every primary-IFD field, tag name to display value.
    pub fields: BTreeMap<String, String>,
}

impl CaptureMetadata {
    /// Metadata carrying only an orientation code.
    pub fn with_orientation(code: u32) -> Self {
        Self {
            orientation: Some(code),
            ..Self::default()
        }
    }

    /// Extract metadata from encoded photo bytes.
    ///
    /// Lenient: bytes without a readable EXIF block yield empty metadata.
    pub fn from_file_data(bytes: &[u8]) -> Self {
        read_exif(bytes)
            .map(|exif| Self::from_exif(&exif))
            .unwrap_or_default()
    }

    fn from_exif(exif: &Exif) -> Self {
        let fields = exif
            .fields()
            .filter(|f| f.ifd_num == In::PRIMARY)
            .filter(|f| f.tag != Tag::MakerNote)
            .map(|f| (f.tag.to_string(), display(f, exif)))
            .collect();

        Self {
            orientation: get_u32(exif, Tag::Orientation, In::PRIMARY),
            pixel_width: get_u32(exif, Tag::PixelXDimension, In::PRIMARY),
            pixel_height: get_u32(exif, Tag::PixelYDimension, In::PRIMARY),
            fields,
        }
    }

    /// The orientation code as a known orientation, if it is one.
    pub fn orientation(&self) -> Option<Orientation> {
        self.orientation.and_then(Orientation::from_code)
    }
}

/// Description of a thumbnail embedded in the capture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThumbnailFormat {
    /// Codec of the embedded data, e.g. "jpeg".
    pub codec: String,
    pub width: u32,
    pub height: u32,
}

impl ThumbnailFormat {
    /// Describe the JPEG thumbnail stored in the EXIF IFD1 of `bytes`.
    ///
    /// Returns `None` when there is no thumbnail or it cannot be read.
    pub fn from_file_data(bytes: &[u8]) -> Option<Self> {
        let exif = read_exif(bytes)?;
        let offset = get_u32(&exif, Tag::JPEGInterchangeFormat, In::THUMBNAIL)? as usize;
        let length = get_u32(&exif, Tag::JPEGInterchangeFormatLength, In::THUMBNAIL)? as usize;
        let data = exif.buf().get(offset..offset.checked_add(length)?)?;

        let (width, height) = ImageReader::new(Cursor::new(data))
            .with_guessed_format()
            .ok()?
            .into_dimensions()
            .ok()?;

        Some(Self {
            codec: "jpeg".to_string(),
            width,
            height,
        })
    }
}

fn read_exif(bytes: &[u8]) -> Option<Exif> {
    let mut cursor = Cursor::new(bytes);
    Reader::new().read_from_container(&mut cursor).ok()
}

fn get_u32(exif: &Exif, tag: Tag, ifd: In) -> Option<u32> {
    exif.get_field(tag, ifd)?.value.get_uint(0)
}

fn display(field: &Field, exif: &Exif) -> String {
    let s = field.display_value().with_unit(exif).to_string();
    s.trim_matches('"').to_string()
}
