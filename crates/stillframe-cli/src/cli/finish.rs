//! The `stillframe finish` command.
//!
//! Reads an image file as a captured photo and drives a
//! `PhotoCaptureDelegate` through the platform callback sequence on a
//! blocking task, then prints the result descriptor as JSON.

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use stillframe_core::decode::MAX_DIMENSION;
use stillframe_core::{
    completion_channel, AspectRatio, CaptureRequest, CapturedPhoto, FinisherConfig,
    ImageFinisher, PhotoCaptureDelegate, ResultDescriptor, TracingShutter,
};

/// Arguments for the `finish` command.
#[derive(Args, Debug)]
pub struct FinishArgs {
    /// Captured photo to finish
    pub input: PathBuf,

    /// Where to write the finished JPEG
    #[arg(short, long)]
    pub output: PathBuf,

    /// Scale so the shorter side matches this size (0 disables resizing)
    #[arg(long)]
    pub target_width: Option<u32>,

    /// Output aspect ratio, e.g. 1:1, 16:9, 4:3
    #[arg(long)]
    pub aspect_ratio: Option<AspectRatio>,

    /// JPEG compression quality from 0.0 to 1.0
    #[arg(short, long)]
    pub quality: Option<f32>,

    /// Suppress the shutter sound
    #[arg(long)]
    pub no_shutter_sound: bool,

    /// Mark the capture as a raw photo in the result
    #[arg(long)]
    pub raw: bool,
}

/// Execute the finish command.
pub async fn execute(args: FinishArgs, config: &FinisherConfig) -> anyhow::Result<()> {
    let descriptor = run(args, config).await?;
    println!("{}", serde_json::to_string_pretty(&descriptor)?);
    Ok(())
}

/// Finish one capture and return its descriptor.
pub async fn run(args: FinishArgs, config: &FinisherConfig) -> anyhow::Result<ResultDescriptor> {
    let request = build_request(&args, config)?;

    let bytes = tokio::fs::read(&args.input)
        .await
        .with_context(|| format!("Failed to read capture: {}", args.input.display()))?;
    let mut photo = CapturedPhoto::from_file_data(bytes);
    photo.is_raw_photo = args.raw;

    tracing::info!(
        "Finishing {:?} -> {:?} ({}, target width {}, quality {})",
        args.input,
        request.destination,
        request.aspect_ratio,
        request.target_width,
        request.compression_quality
    );

    let (completion, pending) = completion_channel();
    let mut delegate =
        PhotoCaptureDelegate::new(request, ImageFinisher::from_config(config), completion)
            .with_shutter_observer(TracingShutter)
            .with_shutter_sound(TracingShutter);

    // Callbacks run off the async runtime, the way a platform delivers them.
    tokio::task::spawn_blocking(move || {
        delegate.will_capture();
        delegate.did_finish_processing(Ok(photo));
        delegate.did_finish_capture(None);
    });

    match pending.wait().await {
        Ok(descriptor) => Ok(descriptor),
        Err(e) => anyhow::bail!("{}: {e}", e.code()),
    }
}

/// Merge command-line overrides onto the configured capture defaults.
pub fn build_request(args: &FinishArgs, config: &FinisherConfig) -> anyhow::Result<CaptureRequest> {
    let mut request = CaptureRequest::from_config(config, &args.output)?;

    if let Some(width) = args.target_width {
        if width > MAX_DIMENSION {
            anyhow::bail!("--target-width must be at most {MAX_DIMENSION}, got {width}");
        }
        request.target_width = width;
    }
    if let Some(ratio) = args.aspect_ratio {
        request.aspect_ratio = ratio;
    }
    if let Some(quality) = args.quality {
        if !(0.0..=1.0).contains(&quality) {
            anyhow::bail!("--quality must be between 0.0 and 1.0, got {quality}");
        }
        request.compression_quality = quality;
    }
    if args.no_shutter_sound {
        request.shutter_sound = false;
    }

    Ok(request)
}
