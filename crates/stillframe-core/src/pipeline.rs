//! The capture finishing pipeline.
//!
//! Decode, optional resize, orientation fix, aspect crop, JPEG encode,
//! write, describe. Stages run in that order on the calling thread and the
//! first failure aborts the rest.

use std::time::Instant;

use crate::backend::{ImagingBackend, RustBackend};
use crate::capture::{CaptureRequest, CapturedPhoto};
use crate::config::FinisherConfig;
use crate::decode::target_dimensions;
use crate::describe::{describe, ResultDescriptor};
use crate::error::CaptureError;
use crate::persist::write_photo;
use crate::transform::crop_window;

/// Turns a captured photo into a JPEG on disk and a result descriptor.
#[derive(Debug, Clone, Default)]
pub struct ImageFinisher<B: ImagingBackend = RustBackend> {
    backend: B,
}

impl ImageFinisher<RustBackend> {
    /// A finisher on the pure Rust backend with the configured resize filter.
    pub fn from_config(config: &FinisherConfig) -> Self {
        Self::new(RustBackend::new(config.processing.resize_filter))
    }
}

impl<B: ImagingBackend> ImageFinisher<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Run every stage for one capture.
    ///
    /// # Errors
    ///
    /// - `ImageDataAccess` if the photo carries no file data
    /// - `Decode`, `Transform` or `Encode` if a pixel stage fails
    /// - `FileError` if the JPEG cannot be written
    pub fn finish(
        &self,
        request: &CaptureRequest,
        photo: &CapturedPhoto,
    ) -> Result<ResultDescriptor, CaptureError> {
        let start = Instant::now();
        tracing::debug!("Finishing capture: {:?}", request.destination);

        let bytes = photo
            .file_data
            .as_deref()
            .ok_or(CaptureError::ImageDataAccess)?;

        // Decode. The tag in the bytes wins; the platform metadata fills in
        // when the bytes carry none. Pixels and descriptor both use it.
        let stage = Instant::now();
        let mut image = self.backend.decode(bytes)?;
        if image.orientation.is_none() {
            image.orientation = photo.metadata.orientation();
        }
        let source = image.orientation;
        tracing::trace!("  Decode: {:?} ({}x{})", stage.elapsed(), image.width, image.height);

        // Resize
        if request.target_width > 0 {
            let stage = Instant::now();
            let (width, height) =
                target_dimensions(image.width, image.height, request.target_width)?;
            image = self.backend.scale(&image, width, height)?;
            tracing::trace!("  Resize: {:?} ({}x{})", stage.elapsed(), width, height);
        }

        // Orientation fix
        let stage = Instant::now();
        let image = self.backend.orient(image)?;
        tracing::trace!("  Orient: {:?} (source {:?})", stage.elapsed(), source);

        // Aspect crop
        let stage = Instant::now();
        let image = match crop_window(image.width, image.height, request.aspect_ratio, source) {
            Some(window) => self.backend.crop(&image, window)?,
            None => image,
        };
        tracing::trace!("  Crop: {:?} ({})", stage.elapsed(), request.aspect_ratio);

        // Encode
        let stage = Instant::now();
        let jpeg = self.backend.encode(&image, request.compression_quality)?;
        tracing::trace!("  Encode: {:?} ({} bytes)", stage.elapsed(), jpeg.len());

        write_photo(&request.destination, &jpeg)?;

        let descriptor = describe(&request.destination, &image, source, photo);
        tracing::debug!(
            "Finished {:?} in {:?} ({}x{})",
            request.destination,
            start.elapsed(),
            descriptor.width,
            descriptor.height
        );
        Ok(descriptor)
    }
}
