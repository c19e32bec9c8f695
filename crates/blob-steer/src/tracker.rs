//! Largest-blob selection and centroid via image moments.

use image::GrayImage;
use imageproc::contours::find_contours;
use imageproc::point::Point;
use tracing::debug;

/// The tracked target for one frame.
#[derive(Debug, Clone)]
pub struct Blob {
    pub contour: Vec<Point<i32>>,
    /// |m00| of the contour region.
    pub area: f64,
    /// (m10/m00, m01/m00).
    pub centroid: (f32, f32),
}

/// Raw spatial moments m00/m10/m01 of a closed contour via Green's
/// theorem. m00 is signed by winding order; callers compare magnitudes
/// and the sign cancels in the centroid ratios.
fn raw_moments(points: &[Point<i32>]) -> (f64, f64, f64) {
    if points.len() < 3 {
        return (0.0, 0.0, 0.0);
    }
    let (mut m00, mut m10, mut m01) = (0.0f64, 0.0f64, 0.0f64);
    for i in 0..points.len() {
        let p = points[i];
        let q = points[(i + 1) % points.len()];
        let cross = p.x as f64 * q.y as f64 - q.x as f64 * p.y as f64;
        m00 += cross;
        m10 += (p.x as f64 + q.x as f64) * cross;
        m01 += (p.y as f64 + q.y as f64) * cross;
    }
    (m00 / 2.0, m10 / 6.0, m01 / 6.0)
}

/// Pick the maximum-area contour of the mask and compute its centroid.
/// `None` when the mask is empty or the best contour encloses no area
/// (a degenerate line), so the caller never divides by zero.
pub fn largest_blob(mask: &GrayImage) -> Option<Blob> {
    let contours = find_contours::<i32>(mask);
    if contours.is_empty() {
        debug!("no objects detected");
        return None;
    }

    let mut best: Option<(Vec<Point<i32>>, f64, f64, f64)> = None;
    for c in contours {
        let (m00, m10, m01) = raw_moments(&c.points);
        let better = best
            .as_ref()
            .map_or(true, |(_, best_m00, _, _)| m00.abs() > best_m00.abs());
        if better {
            best = Some((c.points, m00, m10, m01));
        }
    }

    let (contour, m00, m10, m01) = best?;
    if m00 == 0.0 {
        debug!("no valid contour");
        return None;
    }
    Some(Blob {
        contour,
        area: m00.abs(),
        centroid: ((m10 / m00) as f32, (m01 / m00) as f32),
    })
}
