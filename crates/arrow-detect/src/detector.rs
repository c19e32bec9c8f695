use image::RgbImage;
use imageproc::point::Point;
use tracing::debug;

use crate::shape::{is_arrow_candidate, locate_tip, resolve_direction, Direction};
use crate::{contour, preprocess, ShapeConfig};

/// One recognized arrow in a frame. Frame-local: nothing is retained
/// across detections.
#[derive(Debug, Clone)]
pub struct ArrowDetection {
    /// The raw contour, kept for outline annotation.
    pub contour: Vec<Point<i32>>,
    /// The simplified seven-vertex polygon.
    pub polygon: Vec<Point<i32>>,
    /// The pointed tip vertex.
    pub tip: Point<i32>,
    pub direction: Direction,
}

/// Contour-shape arrow detector. Holds the immutable tuning; each call to
/// [`detect`](Self::detect) is independent and stateless.
pub struct ArrowFinder {
    config: ShapeConfig,
}

impl ArrowFinder {
    pub fn new(config: ShapeConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ShapeConfig {
        &self.config
    }

    /// Run the full shape pipeline over one frame. Contours that fail any
    /// stage are skipped without comment; only fully resolved arrows are
    /// returned.
    pub fn detect(&self, rgb: &RgbImage) -> Vec<ArrowDetection> {
        let gray = preprocess::to_gray_and_blur(rgb, self.config.blur_sigma);
        let edges = preprocess::edge_map(&gray, &self.config);

        let mut detections = Vec::new();
        for raw in contour::extract_contours(&edges) {
            if raw.len() < 3 {
                continue;
            }
            let polygon = contour::approx_polygon(&raw, self.config.approx_tolerance);
            let Some((tip, direction)) = self.classify_polygon(&polygon) else {
                continue;
            };
            debug!(
                direction = direction.as_str(),
                tip_x = tip.x,
                tip_y = tip.y,
                vertices = polygon.len(),
                "arrow contour accepted"
            );
            detections.push(ArrowDetection {
                contour: raw,
                polygon,
                tip,
                direction,
            });
        }
        detections
    }

    /// Apply the hull gate, tip locator, and direction resolver to an
    /// already-simplified polygon.
    pub fn classify_polygon(&self, polygon: &[Point<i32>]) -> Option<(Point<i32>, Direction)> {
        let hull = contour::hull_indices(polygon);
        if !is_arrow_candidate(hull.len(), polygon.len()) {
            return None;
        }
        let tip = locate_tip(polygon, &hull)?;
        let direction = resolve_direction(polygon, tip, self.config.direction_majority)?;
        Some((tip, direction))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn blank_frame_has_no_arrows() {
        let finder = ArrowFinder::new(ShapeConfig::default());
        let rgb = RgbImage::from_pixel(64, 64, Rgb([30, 30, 30]));
        assert!(finder.detect(&rgb).is_empty());
    }

    #[test]
    fn square_contour_is_not_an_arrow() {
        let finder = ArrowFinder::new(ShapeConfig::default());
        let mut rgb = RgbImage::from_pixel(64, 64, Rgb([0, 0, 0]));
        for y in 16..48 {
            for x in 16..48 {
                rgb.put_pixel(x, y, Rgb([255, 255, 255]));
            }
        }
        assert!(finder.detect(&rgb).is_empty());
    }

    #[test]
    fn classify_accepts_the_arrow_polygon() {
        let finder = ArrowFinder::new(ShapeConfig::default());
        let polygon = vec![
            Point::new(0, 20),
            Point::new(40, 20),
            Point::new(40, 0),
            Point::new(80, 30),
            Point::new(40, 60),
            Point::new(40, 40),
            Point::new(0, 40),
        ];
        let (tip, direction) = finder.classify_polygon(&polygon).unwrap();
        assert_eq!(tip, Point::new(80, 30));
        assert_eq!(direction, Direction::Right);
    }

    #[test]
    fn classify_rejects_wrong_vertex_counts() {
        let finder = ArrowFinder::new(ShapeConfig::default());
        // A pentagon: hull 5 of 5, fails hull + 2 == polygon.
        let polygon = vec![
            Point::new(0, 0),
            Point::new(10, 0),
            Point::new(13, 8),
            Point::new(5, 14),
            Point::new(-3, 8),
        ];
        assert!(finder.classify_polygon(&polygon).is_none());
    }
}
