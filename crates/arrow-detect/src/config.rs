use serde::{Deserialize, Serialize};

/// Tunables for the contour/shape pipeline. The defaults reproduce the
/// field-tuned values the detectors were calibrated with; they are loaded
/// once and passed by reference to every stage.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ShapeConfig {
    /// Gaussian blur sigma applied before edge detection.
    pub blur_sigma: f32,
    /// Canny hysteresis thresholds.
    pub canny_low: f32,
    pub canny_high: f32,
    /// L∞ radius of the morphological close that bridges edge gaps.
    pub close_radius: u8,
    /// Polygon approximation tolerance as a fraction of contour perimeter.
    pub approx_tolerance: f64,
    /// A direction wins only with strictly more than this many vertices on
    /// its side of the tip.
    pub direction_majority: usize,
}

impl Default for ShapeConfig {
    fn default() -> Self {
        Self {
            blur_sigma: 1.4,
            canny_low: 50.0,
            canny_high: 150.0,
            close_radius: 2,
            approx_tolerance: 0.02,
            direction_majority: 4,
        }
    }
}

/// Tunables for multi-scale template matching.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateConfig {
    /// Minimum normalized cross-correlation score for a match.
    pub threshold: f32,
    /// Inclusive scale search range applied to both template axes.
    pub scale_min: f32,
    pub scale_max: f32,
    /// Number of uniformly spaced scales to try.
    pub scale_steps: usize,
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self {
            threshold: 0.8,
            scale_min: 0.1,
            scale_max: 0.5,
            scale_steps: 15,
        }
    }
}

impl TemplateConfig {
    /// Uniformly spaced scales over `[scale_min, scale_max]`, endpoints
    /// included.
    pub fn scales(&self) -> Vec<f32> {
        match self.scale_steps {
            0 => Vec::new(),
            1 => vec![self.scale_min],
            n => {
                let step = (self.scale_max - self.scale_min) / (n - 1) as f32;
                (0..n).map(|i| self.scale_min + step * i as f32).collect()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_scale_grid_spans_the_search_range() {
        let scales = TemplateConfig::default().scales();
        assert_eq!(scales.len(), 15);
        assert!((scales[0] - 0.1).abs() < 1e-6);
        assert!((scales[14] - 0.5).abs() < 1e-5);
        // 0.3 sits exactly on the grid (index 7)
        assert!((scales[7] - 0.3).abs() < 1e-6);
    }

    #[test]
    fn single_step_grid_is_the_minimum() {
        let cfg = TemplateConfig {
            scale_min: 1.0,
            scale_max: 1.0,
            scale_steps: 1,
            ..TemplateConfig::default()
        };
        assert_eq!(cfg.scales(), vec![1.0]);
    }

    #[test]
    fn defaults_reproduce_the_tuned_constants() {
        let shape = ShapeConfig::default();
        assert_eq!(shape.canny_low, 50.0);
        assert_eq!(shape.canny_high, 150.0);
        assert_eq!(shape.approx_tolerance, 0.02);
        assert_eq!(shape.direction_majority, 4);
        let tpl = TemplateConfig::default();
        assert_eq!(tpl.threshold, 0.8);
    }
}
