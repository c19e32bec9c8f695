//! Template and annotated-frame file I/O.

use std::path::Path;

use image::{GrayImage, RgbImage};
use tracing::debug;

use crate::{Error, Result};

/// Load a reference template image as grayscale. Templates are read once at
/// startup and shared read-only with the matchers.
pub fn load_gray_template<P: AsRef<Path>>(path: P) -> Result<GrayImage> {
    let path = path.as_ref();
    let img = image::open(path)
        .map_err(|e| Error::Io(format!("{}: {e}", path.display())))?
        .to_luma8();
    debug!(
        path = %path.display(),
        width = img.width(),
        height = img.height(),
        "loaded template"
    );
    Ok(img)
}

/// Write an annotated frame as PNG.
pub fn save_annotated<P: AsRef<Path>>(path: P, img: &RgbImage) -> Result<()> {
    let path = path.as_ref();
    img.save(path)
        .map_err(|e| Error::Io(format!("{}: {e}", path.display())))
}
