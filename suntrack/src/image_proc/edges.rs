//! Boundary extraction from binary masks.

use crate::frame::Point;
use ndarray::ArrayView2;

/// Collect the boundary pixels of a binary mask as `(x, y)` points.
///
/// A set pixel is a boundary pixel if at least one of its 4-neighbors is
/// unset; out-of-image neighbors count as unset, so blobs touching the
/// frame edge still contribute their outline.
pub fn boundary_points(mask: ArrayView2<u8>) -> Vec<Point> {
    let (height, width) = mask.dim();
    let mut points = Vec::new();

    for y in 0..height {
        for x in 0..width {
            if mask[[y, x]] == 0 {
                continue;
            }
            let exposed = [(0isize, 1isize), (0, -1), (1, 0), (-1, 0)]
                .iter()
                .any(|&(dy, dx)| {
                    let ny = y as isize + dy;
                    let nx = x as isize + dx;
                    ny < 0
                        || ny >= height as isize
                        || nx < 0
                        || nx >= width as isize
                        || mask[[ny as usize, nx as usize]] == 0
                });
            if exposed {
                points.push(Point::new(x as f64, y as f64));
            }
        }
    }

    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array2;

    #[test]
    fn test_empty_mask_has_no_boundary() {
        let mask = Array2::<u8>::zeros((5, 5));
        assert!(boundary_points(mask.view()).is_empty());
    }

    #[test]
    fn test_square_boundary_is_its_ring() {
        let mut mask = Array2::<u8>::zeros((10, 10));
        for y in 2..7 {
            for x in 2..7 {
                mask[[y, x]] = 225;
            }
        }
        let points = boundary_points(mask.view());
        // 5x5 block: 25 set pixels, 9 interior, 16 on the ring.
        assert_eq!(points.len(), 16);
        assert!(points.contains(&Point::new(2.0, 2.0)));
        assert!(!points.contains(&Point::new(4.0, 4.0)));
    }

    #[test]
    fn test_blob_on_frame_edge_still_has_boundary() {
        let mut mask = Array2::<u8>::zeros((4, 4));
        for y in 0..4 {
            for x in 0..4 {
                mask[[y, x]] = 225;
            }
        }
        let points = boundary_points(mask.view());
        // Everything except the 2x2 interior is exposed to the frame edge.
        assert_eq!(points.len(), 12);
    }
}
