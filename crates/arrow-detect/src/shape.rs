//! The arrow shape heuristics: candidate gate, tip location, direction.
//!
//! A seven-vertex arrow outline has a fixed topology: four hull corners,
//! one reflex tip, and two tip-adjacent vertices excluded from the hull.
//! The functions here test for exactly that signature; anything else is
//! silently not an arrow.

use imageproc::point::Point;

/// Which way a detected arrow points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Left => "Left",
            Self::Right => "Right",
        }
    }
}

/// The hull/vertex-count gate. The bounds are an empirically tuned
/// signature for the seven-vertex outline and must hold exactly:
/// `4 < hull < 6`, `hull + 2 == polygon`, `polygon > 6`.
pub fn is_arrow_candidate(hull_len: usize, poly_len: usize) -> bool {
    hull_len > 4 && hull_len < 6 && hull_len + 2 == poly_len && poly_len > 6
}

/// Find the arrow tip among the vertices excluded from the hull.
///
/// For each of (at most) the first two non-hull indices, the vertex two
/// positions ahead (wrapping) is the tip candidate; it is accepted when it
/// coincides with the vertex two positions behind the *other* non-hull
/// index, where "behind" wraps through the end of the vertex list. The
/// coincidence only holds when the two non-hull vertices flank the tip at
/// offset ±2, which is exactly the arrow topology.
pub fn locate_tip(points: &[Point<i32>], hull: &[usize]) -> Option<Point<i32>> {
    let n = points.len();
    if n == 0 {
        return None;
    }
    let complement: Vec<usize> = (0..n).filter(|i| !hull.contains(i)).collect();
    for i in 0..complement.len().min(2) {
        let j = (complement[i] + 2) % n;
        let prev = if i == 0 { complement.len() - 1 } else { i - 1 };
        let partner = (complement[prev] as i64 - 2).rem_euclid(n as i64) as usize;
        if points[j] == points[partner] {
            return Some(points[j]);
        }
    }
    None
}

/// Decide the pointing direction from the vertex distribution around the
/// tip. `left` counts vertices to the *right* of the tip: an arrow pointing
/// left carries most of its body on the tip's right, and vice versa. A
/// direction wins only with strictly more than `majority` vertices and a
/// strict lead over the other side.
pub fn resolve_direction(
    points: &[Point<i32>],
    tip: Point<i32>,
    majority: usize,
) -> Option<Direction> {
    let left = points.iter().filter(|p| p.x > tip.x).count();
    let right = points.iter().filter(|p| p.x < tip.x).count();
    if left > right && left > majority {
        Some(Direction::Left)
    } else if right > left && right > majority {
        Some(Direction::Right)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Right-pointing arrow with tip at index 3; indices 1 and 5 are the
    // non-hull shaft junctions, both at offset 2 from the tip.
    fn right_arrow() -> Vec<Point<i32>> {
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

    fn left_arrow() -> Vec<Point<i32>> {
        vec![
            Point::new(8, 2),
            Point::new(4, 2),
            Point::new(4, 0),
            Point::new(0, 3),
            Point::new(4, 6),
            Point::new(4, 4),
            Point::new(8, 4),
        ]
    }

    const HULL: [usize; 5] = [0, 2, 3, 4, 6];

    #[test]
    fn gate_accepts_only_the_arrow_signature() {
        assert!(is_arrow_candidate(5, 7));
        assert!(!is_arrow_candidate(3, 5));
        assert!(!is_arrow_candidate(4, 6));
        assert!(!is_arrow_candidate(6, 8));
        assert!(!is_arrow_candidate(5, 8));
        assert!(!is_arrow_candidate(5, 6));
    }

    #[test]
    fn tip_is_found_on_the_arrow_topology() {
        let poly = right_arrow();
        assert_eq!(locate_tip(&poly, &HULL), Some(Point::new(8, 3)));
        let poly = left_arrow();
        assert_eq!(locate_tip(&poly, &HULL), Some(Point::new(0, 3)));
    }

    #[test]
    fn tip_requires_the_coincidence() {
        // Adjacent non-hull indices {1, 2}: the candidate and partner
        // indices differ for both probes and the coordinates are distinct,
        // so no coincidence exists and no tip is reported.
        let poly = right_arrow();
        let hull = [0, 3, 4, 5, 6];
        assert_eq!(locate_tip(&poly, &hull), None);
    }

    #[test]
    fn tip_wraparound_uses_negative_index_semantics() {
        // Non-hull indices {0, 1}: for i = 0 the partner index is
        // complement[last] - 2 = 1 - 2 = -1 → wraps to the final vertex.
        let poly = vec![
            Point::new(9, 9),
            Point::new(1, 1),
            Point::new(9, 9),
            Point::new(3, 3),
            Point::new(4, 4),
            Point::new(5, 5),
            Point::new(9, 9),
        ];
        let hull = [2, 3, 4, 5, 6];
        // j = (0 + 2) % 7 = 2; partner = (1 - 2).rem_euclid(7) = 6.
        // points[2] == points[6] == (9, 9) → tip found via wraparound.
        assert_eq!(locate_tip(&poly, &hull), Some(Point::new(9, 9)));
    }

    #[test]
    fn empty_polygon_has_no_tip() {
        assert_eq!(locate_tip(&[], &[]), None);
    }

    #[test]
    fn direction_follows_the_vertex_majority() {
        let right = right_arrow();
        let tip = Point::new(8, 3);
        // 6 vertices left of the tip → strictly more than 4 → Right.
        assert_eq!(resolve_direction(&right, tip, 4), Some(Direction::Right));

        let left = left_arrow();
        let tip = Point::new(0, 3);
        assert_eq!(resolve_direction(&left, tip, 4), Some(Direction::Left));
    }

    #[test]
    fn insufficient_majority_is_no_direction() {
        // Tip in the middle: 3 vertices on either side, a tie.
        let poly = vec![
            Point::new(0, 0),
            Point::new(1, 1),
            Point::new(2, 2),
            Point::new(4, 0),
            Point::new(6, 1),
            Point::new(7, 2),
            Point::new(8, 3),
        ];
        assert_eq!(resolve_direction(&poly, Point::new(4, 0), 4), None);

        // 4 vs 3 split: majority side not strictly above 4 → None.
        let poly = vec![
            Point::new(5, 0),
            Point::new(6, 1),
            Point::new(7, 2),
            Point::new(8, 3),
            Point::new(1, 0),
            Point::new(2, 1),
            Point::new(3, 2),
        ];
        assert_eq!(resolve_direction(&poly, Point::new(4, 0), 4), None);
    }

    #[test]
    fn direction_names_match_reports() {
        assert_eq!(Direction::Left.as_str(), "Left");
        assert_eq!(Direction::Right.as_str(), "Right");
    }
}
