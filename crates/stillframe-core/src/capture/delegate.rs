//! Platform callback adapter with a one-shot completion.
//!
//! A capture settles exactly once. The [`Completion`] is consumed when it
//! settles, so a second settle cannot happen; a delegate dropped before
//! settling rejects the capture, so a caller never waits forever.

use tokio::sync::oneshot;

use super::{CaptureRequest, CapturedPhoto, ShutterKind, ShutterObserver, ShutterSound};
use crate::backend::{ImagingBackend, RustBackend};
use crate::describe::ResultDescriptor;
use crate::error::{CameraError, CaptureError, PlatformError};
use crate::pipeline::ImageFinisher;

/// Outcome delivered to the host.
pub type CaptureOutcome = Result<ResultDescriptor, CameraError>;

const ABANDONED: &str = "capture ended without a result";

/// Create a linked completion handle and the future-side receiver.
pub fn completion_channel() -> (Completion, PendingCapture) {
    let (sender, receiver) = oneshot::channel();
    (Completion { sender }, PendingCapture { receiver })
}

/// Resolve-or-reject handle for one capture.
#[derive(Debug)]
pub struct Completion {
    sender: oneshot::Sender<CaptureOutcome>,
}

impl Completion {
    pub fn resolve(self, descriptor: ResultDescriptor) {
        self.settle(Ok(descriptor));
    }

    pub fn reject(self, error: CameraError) {
        self.settle(Err(error));
    }

    fn settle(self, outcome: CaptureOutcome) {
        if self.sender.send(outcome).is_err() {
            tracing::debug!("Capture settled after the caller stopped waiting");
        }
    }
}

/// The caller's side of a capture.
#[derive(Debug)]
pub struct PendingCapture {
    receiver: oneshot::Receiver<CaptureOutcome>,
}

impl PendingCapture {
    /// Wait for the capture to settle.
    pub async fn wait(self) -> CaptureOutcome {
        self.receiver.await.unwrap_or_else(|_| Err(abandoned()))
    }

    /// Blocking variant of [`wait`](Self::wait). Must not be called from
    /// inside an async runtime.
    pub fn blocking_wait(self) -> CaptureOutcome {
        self.receiver.blocking_recv().unwrap_or_else(|_| Err(abandoned()))
    }
}

fn abandoned() -> CameraError {
    CaptureError::unknown(ABANDONED).into()
}

/// Receives the platform's capture callbacks for one photo and settles its
/// completion.
pub struct PhotoCaptureDelegate<B: ImagingBackend = RustBackend> {
    request: CaptureRequest,
    finisher: ImageFinisher<B>,
    completion: Option<Completion>,
    shutter_observer: Option<Box<dyn ShutterObserver>>,
    shutter_sound: Option<Box<dyn ShutterSound>>,
}

impl<B: ImagingBackend> PhotoCaptureDelegate<B> {
    pub fn new(request: CaptureRequest, finisher: ImageFinisher<B>, completion: Completion) -> Self {
        Self {
            request,
            finisher,
            completion: Some(completion),
            shutter_observer: None,
            shutter_sound: None,
        }
    }

    pub fn with_shutter_observer(mut self, observer: impl ShutterObserver + 'static) -> Self {
        self.shutter_observer = Some(Box::new(observer));
        self
    }

    pub fn with_shutter_sound(mut self, sound: impl ShutterSound + 'static) -> Self {
        self.shutter_sound = Some(Box::new(sound));
        self
    }

    pub fn request(&self) -> &CaptureRequest {
        &self.request
    }

    /// True once the completion has been resolved or rejected.
    pub fn is_settled(&self) -> bool {
        self.completion.is_none()
    }

    /// The shutter is about to fire.
    pub fn will_capture(&self) {
        if !self.request.shutter_sound {
            if let Some(sound) = &self.shutter_sound {
                sound.suppress();
            }
        }
        if let Some(observer) = &self.shutter_observer {
            observer.on_shutter(ShutterKind::Photo);
        }
    }

    /// The platform has finished processing the photo, or failed to.
    pub fn did_finish_processing(&mut self, result: Result<CapturedPhoto, PlatformError>) {
        if self.is_settled() {
            tracing::warn!("Processing callback arrived after the capture settled");
            return;
        }
        let outcome = match result {
            Ok(photo) => self.finisher.finish(&self.request, &photo),
            Err(error) => Err(CaptureError::from_platform(error)),
        };
        self.settle(outcome);
    }

    /// The capture as a whole has ended, with an error if it failed.
    pub fn did_finish_capture(&mut self, error: Option<PlatformError>) {
        let Some(error) = error else {
            return;
        };
        if self.is_settled() {
            tracing::warn!(%error, "Capture error arrived after the capture settled");
            return;
        }
        self.settle(Err(CaptureError::from_platform(error)));
    }

    fn settle(&mut self, outcome: Result<ResultDescriptor, CaptureError>) {
        let Some(completion) = self.completion.take() else {
            return;
        };
        match outcome {
            Ok(descriptor) => completion.resolve(descriptor),
            Err(error) => {
                tracing::warn!(code = error.code(), "Capture rejected: {error}");
                completion.reject(error.into());
            }
        }
    }
}

impl<B: ImagingBackend> Drop for PhotoCaptureDelegate<B> {
    fn drop(&mut self) {
        if let Some(completion) = self.completion.take() {
            tracing::warn!("Capture delegate dropped without a result");
            completion.reject(abandoned());
        }
    }
}
