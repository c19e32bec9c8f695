//! Multi-scale template matching via normalized cross-correlation.

use image::imageops::{resize, FilterType};
use image::GrayImage;
use imageproc::template_matching::{find_extremes, match_template, MatchTemplateMethod};
use tracing::trace;

use crate::{Error, Result, TemplateConfig};

/// Best-of search result over the scale grid. Only produced when the score
/// clears the configured threshold; "no match" is `None` at the call site.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemplateMatch {
    /// Peak normalized cross-correlation score, in (threshold, 1].
    pub score: f32,
    /// Top-left pixel of the matched region in the frame.
    pub location: (u32, u32),
    /// The template scale that produced the peak.
    pub scale: f32,
}

/// Scans a frame for one fixed grayscale template. The template is loaded
/// once at startup and shared read-only for the life of the process.
pub struct TemplateMatcher {
    template: GrayImage,
    config: TemplateConfig,
}

impl TemplateMatcher {
    pub fn new(template: GrayImage, config: TemplateConfig) -> Result<Self> {
        if template.width() == 0 || template.height() == 0 {
            return Err(Error::Template("empty template image".to_string()));
        }
        Ok(Self { template, config })
    }

    pub fn template_dimensions(&self) -> (u32, u32) {
        self.template.dimensions()
    }

    /// Bounding box size for a match: template dimensions scaled by the
    /// matched factor.
    pub fn box_size(&self, m: &TemplateMatch) -> (u32, u32) {
        (
            (self.template.width() as f32 * m.scale) as u32,
            (self.template.height() as f32 * m.scale) as u32,
        )
    }

    /// Search the frame at every configured scale and keep the global best
    /// peak above the threshold. Strict `>` comparison throughout: the
    /// first scale to reach a given score wins and later equal scores do
    /// not replace it. Scales whose resized template would be empty or
    /// larger than the frame are skipped.
    pub fn find(&self, gray_frame: &GrayImage) -> Option<TemplateMatch> {
        let mut best: Option<TemplateMatch> = None;
        for scale in self.config.scales() {
            let w = (self.template.width() as f32 * scale) as u32;
            let h = (self.template.height() as f32 * scale) as u32;
            if w == 0 || h == 0 || w > gray_frame.width() || h > gray_frame.height() {
                continue;
            }
            let resized = resize(&self.template, w, h, FilterType::Triangle);
            let scores = match_template(
                gray_frame,
                &resized,
                MatchTemplateMethod::CrossCorrelationNormalized,
            );
            let extremes = find_extremes(&scores);
            trace!(scale, peak = extremes.max_value, "template scale probed");
            let beats_best = best.map_or(true, |b| extremes.max_value > b.score);
            if beats_best && extremes.max_value > self.config.threshold {
                best = Some(TemplateMatch {
                    score: extremes.max_value,
                    location: extremes.max_value_location,
                    scale,
                });
            }
        }
        best
    }
}

/// Bearing from the frame center to the match location, in degrees.
/// Integer half-dimensions, matching the annotated report convention.
pub fn bearing_degrees(location: (u32, u32), frame_width: u32, frame_height: u32) -> f64 {
    let dy = location.1 as f64 - (frame_height / 2) as f64;
    let dx = location.0 as f64 - (frame_width / 2) as f64;
    dy.atan2(dx).to_degrees()
}
