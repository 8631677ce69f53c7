//! Aspect-ratio cropping for finished captures.
//!
//! Supported targets are 1:1 and 16:9; 4:3 is the sensor's native ratio and
//! passes through untouched, as does any other ratio.
//!
//! # Working space
//!
//! Crop geometry is computed in a bottom-left-origin space (y grows up).
//! The orientation fix turns and mirrors the capture around the origin, so
//! the upright image does not necessarily start at (0, 0): a half-turned
//! capture occupies `[-w, 0] x [-h, 0]`, a clockwise-turned one
//! `[0, w] x [-h, 0]`. That rectangle is the image's [`Extent`], and the
//! crop anchors below are expressed against it.
//!
//! # Branch table
//!
//! With `w`, `h` the upright size, `r` the target ratio and the crop rect
//! `(x = H, y = -V, tW, tH)`:
//!
//! | ratio | shape | tW | tH | H | V |
//! |---|---|---|---|---|---|
//! | 1:1 | portrait | w | w·r | 0 | h − (h − tH)/2 |
//! | 1:1 | landscape | h·r | h | (w − tW)/2 | 0 |
//! | 16:9 | portrait | h / r | h | (w − tW)/2 | h |
//! | 16:9 | landscape | w | w / r | 0 | −(h − (h − (h − tH)/2)) |
//!
//! Landscape rows use `H = -w, V = h` when the source was tagged 3.
//!
//! The rect is then settled inside the extent (scaled down keeping its
//! ratio if it is larger, then slid until it fits) and converted to a
//! top-left pixel [`CropWindow`].

use std::fmt;
use std::str::FromStr;

use super::TransformError;
use crate::decode::{ImageBuffer, Orientation};

const RATIO_EPSILON: f64 = 1e-6;

/// Target aspect ratio of a capture, expressed as width over height.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum AspectRatio {
    /// 1:1
    Square,
    /// 16:9
    Widescreen,
    /// 4:3, the sensor's native ratio.
    #[default]
    Standard,
    /// Any other positive ratio; passed through uncropped.
    Other(f64),
}

impl AspectRatio {
    /// Classify a width/height ratio.
    pub fn from_ratio(ratio: f64) -> Self {
        if (ratio - 1.0).abs() < RATIO_EPSILON {
            AspectRatio::Square
        } else if (ratio - 16.0 / 9.0).abs() < RATIO_EPSILON {
            AspectRatio::Widescreen
        } else if (ratio - 4.0 / 3.0).abs() < RATIO_EPSILON {
            AspectRatio::Standard
        } else {
            AspectRatio::Other(ratio)
        }
    }

    /// The ratio as a number.
    pub fn value(self) -> f64 {
        match self {
            AspectRatio::Square => 1.0,
            AspectRatio::Widescreen => 16.0 / 9.0,
            AspectRatio::Standard => 4.0 / 3.0,
            AspectRatio::Other(ratio) => ratio,
        }
    }

    /// True for ratios that are returned without cropping.
    pub fn is_passthrough(self) -> bool {
        matches!(self, AspectRatio::Standard | AspectRatio::Other(_))
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AspectRatio::Square => write!(f, "1:1"),
            AspectRatio::Widescreen => write!(f, "16:9"),
            AspectRatio::Standard => write!(f, "4:3"),
            AspectRatio::Other(ratio) => write!(f, "{ratio}"),
        }
    }
}

/// Accepts `"W:H"` (e.g. `"16:9"`) or a plain decimal (e.g. `"1.7777"`).
impl FromStr for AspectRatio {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let ratio = match s.split_once(':') {
            Some((w, h)) => {
                let w: f64 = w.trim().parse().map_err(|_| format!("invalid ratio '{s}'"))?;
                let h: f64 = h.trim().parse().map_err(|_| format!("invalid ratio '{s}'"))?;
                if h == 0.0 {
                    return Err(format!("invalid ratio '{s}': zero height"));
                }
                w / h
            }
            None => s.parse().map_err(|_| format!("invalid ratio '{s}'"))?,
        };
        if !ratio.is_finite() || ratio <= 0.0 {
            return Err(format!("ratio must be positive, got '{s}'"));
        }
        Ok(AspectRatio::from_ratio(ratio))
    }
}

/// A rectangle in the bottom-left-origin working space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Extent {
    /// Where an upright `width` x `height` image sits once the fix for
    /// `source` has been applied around the origin.
    pub fn after_fix(source: Option<Orientation>, width: u32, height: u32) -> Self {
        let (w, h) = (width as f64, height as f64);
        let (x, y) = match source {
            None | Some(Orientation::Normal) | Some(Orientation::Transverse) => (0.0, 0.0),
            Some(Orientation::FlipHorizontal) => (-w, 0.0),
            Some(Orientation::Rotate180) => (-w, -h),
            Some(Orientation::FlipVertical)
            | Some(Orientation::Transpose)
            | Some(Orientation::Rotate90CW)
            | Some(Orientation::Rotate270CW) => (0.0, -h),
        };
        Self {
            x,
            y,
            width: w,
            height: h,
        }
    }

    pub fn max_x(&self) -> f64 {
        self.x + self.width
    }

    pub fn max_y(&self) -> f64 {
        self.y + self.height
    }

    /// Shrink (keeping proportions) and slide this rect until it lies inside `bounds`.
    fn settle_within(self, bounds: Extent) -> Extent {
        let scale = (bounds.width / self.width)
            .min(bounds.height / self.height)
            .min(1.0);
        let width = (self.width * scale).min(bounds.width);
        let height = (self.height * scale).min(bounds.height);

        let x = self.x.clamp(bounds.x, (bounds.max_x() - width).max(bounds.x));
        let y = self.y.clamp(bounds.y, (bounds.max_y() - height).max(bounds.y));

        Extent {
            x,
            y,
            width,
            height,
        }
    }
}

/// A crop region in top-left-origin pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropWindow {
    pub left: u32,
    pub top: u32,
    pub width: u32,
    pub height: u32,
}

/// Compute the pixel window that crops an upright `width` x `height` image
/// to `ratio`, given the orientation code the capture was tagged with.
///
/// Returns `None` when no crop applies (passthrough ratios or an empty image).
pub fn crop_window(
    width: u32,
    height: u32,
    ratio: AspectRatio,
    source: Option<Orientation>,
) -> Option<CropWindow> {
    if ratio.is_passthrough() || width == 0 || height == 0 {
        return None;
    }

    let extent = Extent::after_fix(source, width, height);
    let (w, h) = (extent.width, extent.height);
    let r = ratio.value();
    let portrait = width < height;
    let upside_down = source == Some(Orientation::Rotate180);

    let (target_w, target_h, mut horizontal, mut vertical) = match (ratio, portrait) {
        (AspectRatio::Square, true) => {
            let target_h = w * r;
            (w, target_h, 0.0, h - ((h - target_h) / 2.0))
        }
        (AspectRatio::Square, false) => {
            let target_w = h * r;
            (target_w, h, (w - target_w) / 2.0, 0.0)
        }
        (_, true) => {
            let target_w = h / r;
            (target_w, h, (w - target_w) / 2.0, h)
        }
        (_, false) => {
            let target_h = w / r;
            (w, target_h, 0.0, -(h - (h - ((h - target_h) / 2.0))))
        }
    };
    if !portrait && upside_down {
        horizontal = -w;
        vertical = h;
    }

    let rect = Extent {
        x: horizontal,
        y: -vertical,
        width: target_w,
        height: target_h,
    }
    .settle_within(extent);

    let out_width = (rect.width.round() as u32).clamp(1, width);
    let out_height = (rect.height.round() as u32).clamp(1, height);
    let left = ((rect.x - extent.x).round().max(0.0) as u32).min(width - out_width);
    let top = ((extent.max_y() - rect.max_y()).round().max(0.0) as u32).min(height - out_height);

    Some(CropWindow {
        left,
        top,
        width: out_width,
        height: out_height,
    })
}

/// Crop an upright image to `ratio`.
///
/// Passthrough ratios return the image unchanged. `source` is the
/// orientation tag the capture carried before its fix.
pub fn crop_to_aspect(
    image: ImageBuffer,
    ratio: AspectRatio,
    source: Option<Orientation>,
) -> Result<ImageBuffer, TransformError> {
    match crop_window(image.width, image.height, ratio, source) {
        Some(window) => crop(&image, window),
        None => Ok(image),
    }
}

/// Copy the pixels inside `window` into a new buffer.
///
/// # Errors
///
/// Returns `TransformError::CropOutOfBounds` if the window is empty or
/// reaches outside the image.
pub fn crop(image: &ImageBuffer, window: CropWindow) -> Result<ImageBuffer, TransformError> {
    let fits = window.width > 0
        && window.height > 0
        && window.left.checked_add(window.width).is_some_and(|r| r <= image.width)
        && window.top.checked_add(window.height).is_some_and(|b| b <= image.height);
    if !fits {
        return Err(TransformError::CropOutOfBounds {
            window,
            width: image.width,
            height: image.height,
        });
    }

    let expected = (image.width as usize) * (image.height as usize) * 3;
    if image.pixels.len() != expected {
        return Err(TransformError::PixelBufferMismatch {
            width: image.width,
            height: image.height,
            actual: image.pixels.len(),
        });
    }

    // Fast path: full window returns a clone
    if window.width == image.width && window.height == image.height {
        return Ok(image.clone());
    }

    let src_stride = image.width as usize * 3;
    let row_len = window.width as usize * 3;
    let mut output = Vec::with_capacity(row_len * window.height as usize);

    // Copy pixel data row by row for efficiency
    for y in 0..window.height as usize {
        let start = (window.top as usize + y) * src_stride + window.left as usize * 3;
        output.extend_from_slice(&image.pixels[start..start + row_len]);
    }

    Ok(ImageBuffer {
        width: window.width,
        height: window.height,
        pixels: output,
        orientation: image.orientation,
    })
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn source_strategy() -> impl Strategy<Value = Option<Orientation>> {
        (0u32..=8).prop_map(Orientation::from_code)
    }

    proptest! {
        /// Property: 1:1 output is exactly square for any shape and source tag.
        #[test]
        fn prop_square_is_square(
            width in 1u32..=2000,
            height in 1u32..=2000,
            source in source_strategy(),
        ) {
            let w = crop_window(width, height, AspectRatio::Square, source).unwrap();
            prop_assert_eq!(w.width, w.height);
            prop_assert_eq!(w.width, width.min(height));
        }

        /// Property: 16:9 output has a 16:9 long/short ratio within a pixel.
        #[test]
        fn prop_widescreen_ratio(
            width in 16u32..=2000,
            height in 16u32..=2000,
            source in source_strategy(),
        ) {
            let w = crop_window(width, height, AspectRatio::Widescreen, source).unwrap();
            let long = w.width.max(w.height) as f64;
            let short = w.width.min(w.height) as f64;
            prop_assert!(
                (long - short * 16.0 / 9.0).abs() <= 1.0
                    || (short - long * 9.0 / 16.0).abs() <= 1.0,
                "{}x{} is not 16:9", w.width, w.height
            );
        }

        /// Property: every window lies inside the image.
        #[test]
        fn prop_window_in_bounds(
            width in 1u32..=2000,
            height in 1u32..=2000,
            square in any::<bool>(),
            source in source_strategy(),
        ) {
            let ratio = if square { AspectRatio::Square } else { AspectRatio::Widescreen };
            let w = crop_window(width, height, ratio, source).unwrap();
            prop_assert!(w.width >= 1 && w.height >= 1);
            prop_assert!(w.left + w.width <= width);
            prop_assert!(w.top + w.height <= height);
        }

        /// Property: 4:3 never crops.
        #[test]
        fn prop_standard_never_crops(
            width in 1u32..=2000,
            height in 1u32..=2000,
            source in source_strategy(),
        ) {
            prop_assert_eq!(crop_window(width, height, AspectRatio::Standard, source), None);
        }
    }
}
