//! Photo capture for registration and signup.
//!
//! A `CameraCapture` acquires a stream from a `MediaDevices` backend, grabs a
//! single still frame, and encodes it as a JPEG data URI. The stream is owned
//! by a guard that stops it on drop, so it is released after a capture, on
//! retake, when the capture itself is dropped, and on every error path.

use base64::{Engine, engine::general_purpose::STANDARD};
use thiserror::Error;

const DATA_URI_PREFIX: &str = "data:";
const BASE64_MARKER: &str = ";base64,";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CameraError {
    #[error("camera permission denied")]
    PermissionDenied,
    #[error("camera unavailable: {0}")]
    Unavailable(String),
    #[error("no frame available")]
    NoFrame,
}

/// An encoded still frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub mime: &'static str,
    pub bytes: Vec<u8>,
}

/// A live camera stream. `stop` must be idempotent.
pub trait MediaStream {
    fn grab_frame(&mut self) -> Result<Frame, CameraError>;
    fn stop(&mut self);
}

/// Source of camera streams.
pub trait MediaDevices {
    type Stream: MediaStream;

    fn get_user_media(&self) -> Result<Self::Stream, CameraError>;
}

/// StreamGuard
///
/// Owns an acquired stream and stops it when dropped.
pub struct StreamGuard<S: MediaStream> {
    stream: S,
}

impl<S: MediaStream> StreamGuard<S> {
    fn new(stream: S) -> Self {
        Self { stream }
    }

    fn grab_frame(&mut self) -> Result<Frame, CameraError> {
        self.stream.grab_frame()
    }
}

impl<S: MediaStream> Drop for StreamGuard<S> {
    fn drop(&mut self) {
        self.stream.stop();
    }
}

/// What the capture widget should currently show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureView<'a> {
    Placeholder,
    Streaming,
    Captured(&'a str),
}

pub struct CameraCapture<D: MediaDevices> {
    devices: D,
    stream: Option<StreamGuard<D::Stream>>,
    captured: Option<String>,
}

impl<D: MediaDevices> CameraCapture<D> {
    pub fn new(devices: D) -> Self {
        Self {
            devices,
            stream: None,
            captured: None,
        }
    }

    pub fn is_streaming(&self) -> bool {
        self.stream.is_some()
    }

    pub fn captured(&self) -> Option<&str> {
        self.captured.as_deref()
    }

    pub fn view(&self) -> CaptureView<'_> {
        match (&self.captured, &self.stream) {
            (Some(uri), _) => CaptureView::Captured(uri),
            (None, Some(_)) => CaptureView::Streaming,
            (None, None) => CaptureView::Placeholder,
        }
    }

    /// start
    ///
    /// Acquires a stream. Failure is logged and leaves the placeholder in
    /// place; there is no retry prompt.
    pub fn start(&mut self) {
        if self.stream.is_some() {
            return;
        }
        match self.devices.get_user_media() {
            Ok(stream) => self.stream = Some(StreamGuard::new(stream)),
            Err(e) => tracing::error!(error = %e, "Error accessing camera"),
        }
    }

    /// capture
    ///
    /// Grabs one frame and releases the stream whatever the outcome. Returns
    /// the new data URI, or `None` when not streaming or the grab failed.
    pub fn capture(&mut self) -> Option<&str> {
        let mut guard = self.stream.take()?;
        match guard.grab_frame() {
            Ok(frame) => {
                self.captured = Some(encode_data_uri(&frame));
                self.captured.as_deref()
            }
            Err(e) => {
                tracing::error!(error = %e, "Error capturing photo");
                None
            }
        }
    }

    /// Releases any live stream without capturing.
    pub fn stop(&mut self) {
        self.stream = None;
    }

    /// retake
    ///
    /// Clears the previous photo and starts a fresh stream.
    pub fn retake(&mut self) {
        self.captured = None;
        self.stop();
        self.start();
    }
}

/// Encodes a frame as `data:<mime>;base64,<payload>`.
pub fn encode_data_uri(frame: &Frame) -> String {
    format!(
        "{DATA_URI_PREFIX}{}{BASE64_MARKER}{}",
        frame.mime,
        STANDARD.encode(&frame.bytes)
    )
}

/// decode_data_uri
///
/// Parses an image data URI back into its MIME type and bytes. Anything that
/// is not `data:image/*;base64,` with a non-empty valid payload yields `None`.
pub fn decode_data_uri(uri: &str) -> Option<(String, Vec<u8>)> {
    let rest = uri.trim().strip_prefix(DATA_URI_PREFIX)?;
    let (mime, payload) = rest.split_once(BASE64_MARKER)?;
    if !mime.starts_with("image/") || mime.len() == "image/".len() {
        return None;
    }
    let bytes = STANDARD.decode(payload).ok()?;
    if bytes.is_empty() {
        return None;
    }
    Some((mime.to_string(), bytes))
}
