//! Result descriptors for finished captures.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::capture::{CapturedPhoto, ThumbnailFormat};
use crate::decode::{ImageBuffer, Orientation};

/// Device orientation class reported to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrientationClass {
    Portrait,
    PortraitUpsideDown,
    LandscapeLeft,
    LandscapeRight,
}

impl OrientationClass {
    /// Class and mirrored flag for an EXIF orientation; `None` is upright.
    pub fn from_orientation(orientation: Option<Orientation>) -> (Self, bool) {
        match orientation.unwrap_or(Orientation::Normal) {
            Orientation::Normal => (OrientationClass::Portrait, false),
            Orientation::FlipHorizontal => (OrientationClass::Portrait, true),
            Orientation::Rotate180 => (OrientationClass::PortraitUpsideDown, false),
            Orientation::FlipVertical => (OrientationClass::PortraitUpsideDown, true),
            Orientation::Transpose => (OrientationClass::LandscapeLeft, true),
            Orientation::Rotate90CW => (OrientationClass::LandscapeRight, false),
            Orientation::Transverse => (OrientationClass::LandscapeRight, true),
            Orientation::Rotate270CW => (OrientationClass::LandscapeLeft, false),
        }
    }
}

/// What the host receives for a successful capture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultDescriptor {
    /// Where the JPEG was written.
    pub path: PathBuf,
    /// Dimensions of the written image.
    pub width: u32,
    pub height: u32,
    pub orientation: OrientationClass,
    pub is_mirrored: bool,
    pub is_raw_photo: bool,
    /// EXIF fields of the original capture.
    pub metadata: BTreeMap<String, String>,
    pub thumbnail: Option<ThumbnailFormat>,
}

/// Assemble the descriptor for a photo written to `path`.
///
/// `orientation` is the tag the pixels were fixed with; `None` reads as
/// upright. Metadata fields, raw flag and thumbnail come from `photo`.
pub fn describe(
    path: &Path,
    image: &ImageBuffer,
    orientation: Option<Orientation>,
    photo: &CapturedPhoto,
) -> ResultDescriptor {
    let (orientation, is_mirrored) = OrientationClass::from_orientation(orientation);

    ResultDescriptor {
        path: path.to_path_buf(),
        width: image.width,
        height: image.height,
        orientation,
        is_mirrored,
        is_raw_photo: photo.is_raw_photo,
        metadata: photo.metadata.fields.clone(),
        thumbnail: photo.embedded_thumbnail.clone(),
    }
}
