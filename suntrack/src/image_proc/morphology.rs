//! Binary erosion and dilation with a 3x3 rectangular element.
//!
//! Eroding then dilating (a morphological open, with independent iteration
//! counts) removes thin bright speckles while restoring the extent of the
//! surviving blob.

use ndarray::{Array2, ArrayView2};

/// Erode a binary mask `iterations` times.
///
/// A pixel survives if its full 3x3 neighborhood is set. Out-of-image
/// neighbors count as set, so the frame border does not eat into blobs.
pub fn erode(mask: ArrayView2<u8>, iterations: usize) -> Array2<u8> {
    run(mask, iterations, |all_set, _any_set| all_set)
}

/// Dilate a binary mask `iterations` times.
///
/// A pixel becomes set if any pixel of its 3x3 neighborhood is set.
/// Out-of-image neighbors count as unset.
pub fn dilate(mask: ArrayView2<u8>, iterations: usize) -> Array2<u8> {
    run(mask, iterations, |_all_set, any_set| any_set)
}

fn run(mask: ArrayView2<u8>, iterations: usize, keep: fn(bool, bool) -> bool) -> Array2<u8> {
    let (height, width) = mask.dim();
    let mut current = mask.to_owned();

    for _ in 0..iterations {
        let mut next = Array2::<u8>::zeros((height, width));
        for y in 0..height {
            for x in 0..width {
                let mut all_set = true;
                let mut any_set = false;
                let mut on_value = current[[y, x]];

                for dy in -1isize..=1 {
                    for dx in -1isize..=1 {
                        let ny = y as isize + dy;
                        let nx = x as isize + dx;
                        if ny < 0 || ny >= height as isize || nx < 0 || nx >= width as isize {
                            // Border pixels: set for erosion, unset for dilation.
                            continue;
                        }
                        let v = current[[ny as usize, nx as usize]];
                        if v != 0 {
                            any_set = true;
                            on_value = v;
                        } else {
                            all_set = false;
                        }
                    }
                }

                if keep(all_set, any_set) {
                    next[[y, x]] = on_value;
                }
            }
        }
        current = next;
    }

    current
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::arr2;

    fn count_set(mask: &Array2<u8>) -> usize {
        mask.iter().filter(|&&v| v != 0).count()
    }

    #[test]
    fn test_erode_removes_isolated_pixel() {
        let mut mask = Array2::<u8>::zeros((7, 7));
        mask[[3, 3]] = 225;
        let eroded = erode(mask.view(), 1);
        assert_eq!(count_set(&eroded), 0);
    }

    #[test]
    fn test_erode_shrinks_block_by_one_ring() {
        let mut mask = Array2::<u8>::zeros((9, 9));
        for y in 2..7 {
            for x in 2..7 {
                mask[[y, x]] = 225;
            }
        }
        let eroded = erode(mask.view(), 1);
        // 5x5 block shrinks to 3x3.
        assert_eq!(count_set(&eroded), 9);
        assert_eq!(eroded[[4, 4]], 225);
        assert_eq!(eroded[[2, 2]], 0);
    }

    #[test]
    fn test_dilate_grows_single_pixel() {
        let mut mask = Array2::<u8>::zeros((7, 7));
        mask[[3, 3]] = 225;
        let dilated = dilate(mask.view(), 1);
        assert_eq!(count_set(&dilated), 9);
        assert_eq!(dilated[[2, 2]], 225);
        assert_eq!(dilated[[4, 4]], 225);
    }

    #[test]
    fn test_erode_border_does_not_shrink_edge_block() {
        // Block flush against the frame corner: the out-of-image side is
        // treated as set, so only interior-facing edges erode.
        let mask = arr2(&[
            [225u8, 225, 225, 0],
            [225, 225, 225, 0],
            [225, 225, 225, 0],
            [0, 0, 0, 0],
        ]);
        let eroded = erode(mask.view(), 1);
        assert_eq!(eroded[[0, 0]], 225);
        assert_eq!(eroded[[2, 2]], 0);
    }

    #[test]
    fn test_open_removes_speckle_keeps_blob() {
        let mut mask = Array2::<u8>::zeros((20, 20));
        // A 2x2 speckle.
        mask[[2, 2]] = 225;
        mask[[2, 3]] = 225;
        mask[[3, 2]] = 225;
        mask[[3, 3]] = 225;
        // A 9x9 blob.
        for y in 8..17 {
            for x in 8..17 {
                mask[[y, x]] = 225;
            }
        }

        let cleaned = dilate(erode(mask.view(), 2).view(), 2);
        assert_eq!(cleaned[[2, 2]], 0, "speckle should be removed");
        assert_eq!(cleaned[[12, 12]], 225, "blob core should survive");
    }
}
