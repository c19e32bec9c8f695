//! Frame ↔ `image` buffer conversion.
//!
//! Plays the role the image bridge plays on a robot: every capture backend
//! hands over a raw `Frame`, and the pipelines work on `image` buffers. A
//! malformed frame is a [`Error::Convert`]; callers log it and drop the
//! frame rather than aborting the loop.

use image::{DynamicImage, GrayImage, RgbImage};

use crate::{Error, Frame, PixelFormat, Result};

/// Convert a frame to an RGB buffer, swapping channel order for BGR sources
/// and expanding grayscale.
pub fn to_rgb_image(frame: &Frame) -> Result<RgbImage> {
    check_len(frame)?;
    match frame.pixel_format {
        PixelFormat::Rgb8 => RgbImage::from_raw(frame.width, frame.height, frame.data.clone())
            .ok_or_else(|| Error::Convert("RGB buffer rejected".to_string())),
        PixelFormat::Bgr8 => {
            let mut data = frame.data.clone();
            for px in data.chunks_exact_mut(3) {
                px.swap(0, 2);
            }
            RgbImage::from_raw(frame.width, frame.height, data)
                .ok_or_else(|| Error::Convert("BGR buffer rejected".to_string()))
        }
        PixelFormat::Gray8 => {
            let mut data = Vec::with_capacity(frame.data.len() * 3);
            for &v in &frame.data {
                data.extend_from_slice(&[v, v, v]);
            }
            RgbImage::from_raw(frame.width, frame.height, data)
                .ok_or_else(|| Error::Convert("gray buffer rejected".to_string()))
        }
    }
}

/// Convert a frame to a single-channel buffer.
pub fn to_gray_image(frame: &Frame) -> Result<GrayImage> {
    check_len(frame)?;
    match frame.pixel_format {
        PixelFormat::Gray8 => GrayImage::from_raw(frame.width, frame.height, frame.data.clone())
            .ok_or_else(|| Error::Convert("gray buffer rejected".to_string())),
        _ => Ok(DynamicImage::ImageRgb8(to_rgb_image(frame)?).to_luma8()),
    }
}

/// Wrap an RGB buffer back into a frame (used by synthetic sources and
/// tests; timestamps are the caller's business).
pub fn from_rgb_image(img: RgbImage) -> Frame {
    let (width, height) = img.dimensions();
    Frame {
        width,
        height,
        pixel_format: PixelFormat::Rgb8,
        data: img.into_raw(),
        ts: None,
    }
}

fn check_len(frame: &Frame) -> Result<()> {
    let expected = frame.expected_len();
    if frame.data.len() != expected {
        return Err(Error::Convert(format!(
            "buffer length {} does not match {}x{} {:?} (expected {})",
            frame.data.len(),
            frame.width,
            frame.height,
            frame.pixel_format,
            expected
        )));
    }
    Ok(())
}
