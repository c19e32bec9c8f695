//! Hue-band segmentation.
//!
//! The bounds use the 8-bit HSV scaling common to vision tooling: hue in
//! [0, 180), saturation and value in [0, 255]. The conversion is done here
//! so the tuned integer bounds apply verbatim.

use image::{GrayImage, Luma, RgbImage};
use serde::{Deserialize, Serialize};

/// Inclusive per-channel HSV bounds. The default band isolates the blue
/// target marker.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HsvBounds {
    pub lower: [u8; 3],
    pub upper: [u8; 3],
}

impl Default for HsvBounds {
    fn default() -> Self {
        Self {
            lower: [100, 25, 25],
            upper: [140, 255, 255],
        }
    }
}

impl HsvBounds {
    pub fn contains(&self, hsv: [u8; 3]) -> bool {
        (0..3).all(|c| self.lower[c] <= hsv[c] && hsv[c] <= self.upper[c])
    }
}

/// RGB to 8-bit-scaled HSV: H in [0, 180), S and V in [0, 255].
pub fn rgb_to_hsv(r: u8, g: u8, b: u8) -> [u8; 3] {
    let v = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = v - min;

    let s = if v == 0 {
        0
    } else {
        ((255.0 * delta as f32 / v as f32) + 0.5) as u8
    };

    if delta == 0 {
        return [0, s, v];
    }

    let delta = delta as f32;
    let mut hue_deg = if v == r {
        60.0 * (g as f32 - b as f32) / delta
    } else if v == g {
        120.0 + 60.0 * (b as f32 - r as f32) / delta
    } else {
        240.0 + 60.0 * (r as f32 - g as f32) / delta
    };
    if hue_deg < 0.0 {
        hue_deg += 360.0;
    }
    let h = (hue_deg / 2.0 + 0.5) as u8;
    [h.min(179), s, v]
}

/// Threshold a frame against the bounds: 255 inside the band, 0 outside.
pub fn hsv_mask(rgb: &RgbImage, bounds: &HsvBounds) -> GrayImage {
    GrayImage::from_fn(rgb.width(), rgb.height(), |x, y| {
        let p = rgb.get_pixel(x, y);
        if bounds.contains(rgb_to_hsv(p[0], p[1], p[2])) {
            Luma([255])
        } else {
            Luma([0])
        }
    })
}
