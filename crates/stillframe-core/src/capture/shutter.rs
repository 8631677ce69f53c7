//! Shutter notifications around a capture.

use serde::{Deserialize, Serialize};

/// What kind of capture fired the shutter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShutterKind {
    Photo,
}

/// Receives a notification when the shutter fires.
pub trait ShutterObserver: Send {
    fn on_shutter(&self, kind: ShutterKind);
}

/// Controls the system shutter sound.
pub trait ShutterSound: Send {
    /// Silence the sound for the capture in flight.
    fn suppress(&self);
}

/// Shutter collaborator that only logs.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingShutter;

impl ShutterObserver for TracingShutter {
    fn on_shutter(&self, kind: ShutterKind) {
        tracing::info!(?kind, "Shutter");
    }
}

impl ShutterSound for TracingShutter {
    fn suppress(&self) {
        tracing::debug!("Shutter sound suppressed");
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    /// Records shutter events in call order.
    #[derive(Debug, Clone, Default)]
    pub(crate) struct RecordingShutter {
        pub(crate) events: Arc<Mutex<Vec<String>>>,
    }

    impl RecordingShutter {
        pub(crate) fn events(&self) -> Vec<String> {
            self.events.lock().unwrap().clone()
        }
    }

    impl ShutterObserver for RecordingShutter {
        fn on_shutter(&self, kind: ShutterKind) {
            self.events.lock().unwrap().push(format!("shutter:{kind:?}"));
        }
    }

    impl ShutterSound for RecordingShutter {
        fn suppress(&self) {
            self.events.lock().unwrap().push("suppress".to_string());
        }
    }

    #[test]
    fn test_shutter_kind_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&ShutterKind::Photo).unwrap(), "\"photo\"");
    }

    #[test]
    fn test_recording_shutter_shares_events() {
        let shutter = RecordingShutter::default();
        let observer: Box<dyn ShutterObserver> = Box::new(shutter.clone());
        observer.on_shutter(ShutterKind::Photo);
        assert_eq!(shutter.events(), vec!["shutter:Photo"]);
    }
}
