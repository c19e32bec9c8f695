//! Drawing helpers for annotated frames: contour outlines, tip markers,
//! and template match boxes. Callers own the copy they annotate.

use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_filled_circle_mut, draw_hollow_rect_mut, draw_line_segment_mut};
use imageproc::point::Point;
use imageproc::rect::Rect;

use crate::ArrowDetection;

pub const GREEN: Rgb<u8> = Rgb([0, 255, 0]);
pub const RED: Rgb<u8> = Rgb([255, 0, 0]);
pub const BLUE: Rgb<u8> = Rgb([0, 0, 255]);

const TIP_RADIUS: i32 = 3;

/// Outline a closed point sequence.
pub fn draw_contour(img: &mut RgbImage, points: &[Point<i32>], color: Rgb<u8>) {
    if points.len() < 2 {
        return;
    }
    for window in points.windows(2) {
        let (a, b) = (window[0], window[1]);
        draw_line_segment_mut(
            img,
            (a.x as f32, a.y as f32),
            (b.x as f32, b.y as f32),
            color,
        );
    }
    if let (Some(first), Some(last)) = (points.first(), points.last()) {
        draw_line_segment_mut(
            img,
            (last.x as f32, last.y as f32),
            (first.x as f32, first.y as f32),
            color,
        );
    }
}

/// Green contour outline plus a red tip marker.
pub fn draw_detection(img: &mut RgbImage, detection: &ArrowDetection) {
    draw_contour(img, &detection.contour, GREEN);
    draw_filled_circle_mut(
        img,
        (detection.tip.x, detection.tip.y),
        TIP_RADIUS,
        RED,
    );
}

/// Hollow box at a template match location, sized by the caller from the
/// template dimensions and matched scale.
pub fn draw_match_box(img: &mut RgbImage, top_left: (u32, u32), size: (u32, u32), color: Rgb<u8>) {
    let rect = Rect::at(top_left.0 as i32, top_left.1 as i32)
        .of_size(size.0.max(1), size.1.max(1));
    draw_hollow_rect_mut(img, rect, color);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contour_outline_touches_its_vertices() {
        let mut img = RgbImage::new(20, 20);
        let points = vec![Point::new(2, 2), Point::new(12, 2), Point::new(12, 12)];
        draw_contour(&mut img, &points, GREEN);
        assert_eq!(*img.get_pixel(2, 2), GREEN);
        assert_eq!(*img.get_pixel(12, 12), GREEN);
        // Closing segment back to the first vertex
        assert_eq!(*img.get_pixel(7, 7), GREEN);
    }

    #[test]
    fn match_box_never_collapses_to_zero() {
        let mut img = RgbImage::new(30, 30);
        draw_match_box(&mut img, (5, 5), (0, 0), BLUE);
        assert_eq!(*img.get_pixel(5, 5), BLUE);
    }

    #[test]
    fn single_point_contour_is_a_no_op() {
        let mut img = RgbImage::new(8, 8);
        draw_contour(&mut img, &[Point::new(3, 3)], RED);
        assert_eq!(img.get_pixel(3, 3).0, [0, 0, 0]);
    }
}
