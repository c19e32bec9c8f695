//! Contour extraction, polygon approximation, and hull index mapping.
//!
//! Thin wrappers over `imageproc` so the backing library stays
//! substitutable: binary image → contour point lists → simplified polygon →
//! indices of the polygon vertices on its convex hull.

use image::GrayImage;
use imageproc::contours::find_contours;
use imageproc::geometry::{approximate_polygon_dp, arc_length, convex_hull};
use imageproc::point::Point;

/// All contours of a binary image, outer borders and holes alike.
pub fn extract_contours(edges: &GrayImage) -> Vec<Vec<Point<i32>>> {
    find_contours::<i32>(edges)
        .into_iter()
        .map(|c| c.points)
        .collect()
}

/// Douglas-Peucker simplification with tolerance expressed as a fraction of
/// the closed perimeter.
pub fn approx_polygon(contour: &[Point<i32>], tolerance: f64) -> Vec<Point<i32>> {
    let epsilon = tolerance * arc_length(contour, true);
    approximate_polygon_dp(contour, epsilon, true)
}

/// Indices of the polygon vertices that lie on its convex hull, sorted
/// ascending. Hull points are mapped back to their first occurrence in the
/// vertex order.
pub fn hull_indices(polygon: &[Point<i32>]) -> Vec<usize> {
    let hull = convex_hull(polygon);
    let mut indices: Vec<usize> = hull
        .iter()
        .filter_map(|hp| polygon.iter().position(|p| p == hp))
        .collect();
    indices.sort_unstable();
    indices.dedup();
    indices
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arrow_heptagon() -> Vec<Point<i32>> {
        // Right-pointing arrow outline: shaft corners, head corners, tip.
        // Vertices 1 and 5 are the shaft/head junctions inside the hull.
        vec![
            Point::new(0, 2),
            Point::new(4, 2),
            Point::new(4, 0),
            Point::new(8, 3),
            Point::new(4, 6),
            Point::new(4, 4),
            Point::new(0, 4),
        ]
    }

    #[test]
    fn heptagon_hull_excludes_the_shaft_junctions() {
        let poly = arrow_heptagon();
        let hull = hull_indices(&poly);
        assert_eq!(hull, vec![0, 2, 3, 4, 6]);
    }

    #[test]
    fn filled_rectangle_produces_a_four_corner_polygon() {
        let mut mask = GrayImage::new(40, 40);
        for y in 8..32 {
            for x in 5..35 {
                mask.put_pixel(x, y, image::Luma([255]));
            }
        }
        let contours = extract_contours(&mask);
        assert!(!contours.is_empty());
        let largest = contours
            .iter()
            .max_by_key(|c| c.len())
            .cloned()
            .unwrap_or_default();
        let poly = approx_polygon(&largest, 0.02);
        assert!(
            (4..=6).contains(&poly.len()),
            "rectangle should simplify to its corners, got {} vertices",
            poly.len()
        );
    }

    #[test]
    fn blank_image_has_no_contours() {
        let mask = GrayImage::new(16, 16);
        assert!(extract_contours(&mask).is_empty());
    }
}
