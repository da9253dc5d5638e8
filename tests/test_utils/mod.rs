#![allow(dead_code)]

use std::collections::HashSet;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use rect_quadtree::{Bounds, Rectangle};

//// Utility functions

pub(crate) fn get_random_points(bounds: Bounds, n: usize, seed: u64) -> Vec<(i32, i32)> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut results = Vec::new();
    for _i in 0..n {
        results.push((
            rng.gen_range(bounds.min_x, bounds.max_x + 1),
            rng.gen_range(bounds.min_y, bounds.max_y + 1),
        ));
    }

    results
}

/// Random rectangles whose origins lie in `bounds` and are pairwise distinct.
pub(crate) fn get_random_rects(bounds: Bounds, n: usize, seed: u64) -> Vec<Rectangle> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut seen = HashSet::new();
    let mut results = Vec::new();
    while results.len() < n {
        let x = rng.gen_range(bounds.min_x, bounds.max_x + 1);
        let y = rng.gen_range(bounds.min_y, bounds.max_y + 1);
        if !seen.insert((x, y)) {
            continue;
        }
        results.push(Rectangle::new(x, y, rng.gen_range(0, 20), rng.gen_range(0, 20)));
    }

    results
}

pub(crate) fn find_brute(rects: &[Rectangle], x: i32, y: i32) -> Option<&Rectangle> {
    rects.iter().find(|r| r.x == x && r.y == y)
}

pub(crate) fn containing_brute(rects: &[Rectangle], px: i32, py: i32) -> Vec<Rectangle> {
    let mut result: Vec<Rectangle> = rects
        .iter()
        .copied()
        .filter(|r| r.contains_point(px, py))
        .collect();
    result.sort_unstable_by_key(|r| (r.x, r.y, r.width, r.height));
    result
}

pub(crate) fn sorted(rects: Vec<&Rectangle>) -> Vec<Rectangle> {
    let mut result: Vec<Rectangle> = rects.into_iter().copied().collect();
    result.sort_unstable_by_key(|r| (r.x, r.y, r.width, r.height));
    result
}
