//! Minimal enclosing circle of a point set.
//!
//! Welzl's move-to-front algorithm, expected linear time after a shuffle.
//! The shuffle is seeded so repeated runs over the same frame produce
//! bit-identical results.

use crate::frame::Point;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const SHUFFLE_SEED: u64 = 0x5d15;
const CONTAINS_EPS: f64 = 1e-7;

/// A circle in frame-local pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: Point,
    pub radius: f64,
}

impl Circle {
    fn contains(&self, p: &Point) -> bool {
        self.center.distance(p) <= self.radius + CONTAINS_EPS
    }
}

/// Compute the minimal enclosing circle of `points`.
///
/// Returns `None` for an empty set. A single point yields a zero-radius
/// circle at that point.
pub fn min_enclosing_circle(points: &[Point]) -> Option<Circle> {
    if points.is_empty() {
        return None;
    }

    let mut shuffled = points.to_vec();
    shuffled.shuffle(&mut ChaCha8Rng::seed_from_u64(SHUFFLE_SEED));

    let mut circle = Circle {
        center: shuffled[0],
        radius: 0.0,
    };

    for i in 1..shuffled.len() {
        if circle.contains(&shuffled[i]) {
            continue;
        }
        circle = Circle {
            center: shuffled[i],
            radius: 0.0,
        };
        for j in 0..i {
            if circle.contains(&shuffled[j]) {
                continue;
            }
            circle = circle_from_two(&shuffled[i], &shuffled[j]);
            for k in 0..j {
                if !circle.contains(&shuffled[k]) {
                    circle = circle_from_three(&shuffled[i], &shuffled[j], &shuffled[k]);
                }
            }
        }
    }

    Some(circle)
}

fn circle_from_two(a: &Point, b: &Point) -> Circle {
    let center = Point::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0);
    Circle {
        radius: center.distance(a),
        center,
    }
}

fn circle_from_three(a: &Point, b: &Point, c: &Point) -> Circle {
    let d = 2.0 * (a.x * (b.y - c.y) + b.x * (c.y - a.y) + c.x * (a.y - b.y));
    if d.abs() < 1e-12 {
        // Collinear: the circle over the farthest pair spans the set.
        let mut widest = circle_from_two(a, b);
        for (p, q) in [(a, c), (b, c)] {
            let circle = circle_from_two(p, q);
            if circle.radius > widest.radius {
                widest = circle;
            }
        }
        return widest;
    }

    let a2 = a.x * a.x + a.y * a.y;
    let b2 = b.x * b.x + b.y * b.y;
    let c2 = c.x * c.x + c.y * c.y;
    let ux = (a2 * (b.y - c.y) + b2 * (c.y - a.y) + c2 * (a.y - b.y)) / d;
    let uy = (a2 * (c.x - b.x) + b2 * (a.x - c.x) + c2 * (b.x - a.x)) / d;

    let center = Point::new(ux, uy);
    Circle {
        radius: center.distance(a),
        center,
    }
}
