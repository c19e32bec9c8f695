use crate::{Frame, Result};

pub trait CameraSource {
    /// Open a camera source by device index or path string.
    fn open(spec: &str) -> Result<Self>
    where
        Self: Sized;

    /// Read a single frame. Blocks until one is available; an error means
    /// the stream ended or the device disconnected, and the capture loop
    /// should terminate.
    fn read(&mut self) -> Result<Frame>;
}
