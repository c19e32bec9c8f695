//! Frame preprocessing: grayscale, blur, and the binary edge map the
//! contour stage consumes. All heavy lifting is `imageproc`.

use image::{DynamicImage, GrayImage, RgbImage};
use imageproc::edges::canny;
use imageproc::filter::gaussian_blur_f32;
use imageproc::distance_transform::Norm;
use imageproc::morphology::close;

use crate::ShapeConfig;

/// Grayscale conversion followed by a Gaussian blur, shared by the shape
/// pipeline and the template matcher.
pub fn to_gray_and_blur(rgb: &RgbImage, sigma: f32) -> GrayImage {
    let gray = DynamicImage::ImageRgb8(rgb.clone()).to_luma8();
    gaussian_blur_f32(&gray, sigma)
}

/// Canny edges bridged with a morphological close so that arrow outlines
/// form closed contours.
pub fn edge_map(gray: &GrayImage, config: &ShapeConfig) -> GrayImage {
    let edges = canny(gray, config.canny_low, config.canny_high);
    close(&edges, Norm::LInf, config.close_radius)
}
