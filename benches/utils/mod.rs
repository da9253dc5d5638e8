use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use rect_quadtree::{Bounds, Quadtree, Rectangle};

pub fn universe() -> Bounds {
    Bounds::new(-1000, -1000, 1000, 1000)
}

pub fn get_random_rects(bounds: Bounds, n: usize, seed: u64) -> Vec<Rectangle> {
    let mut rng = SmallRng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            Rectangle::new(
                rng.gen_range(bounds.min_x, bounds.max_x + 1),
                rng.gen_range(bounds.min_y, bounds.max_y + 1),
                rng.gen_range(1, 50),
                rng.gen_range(1, 50),
            )
        })
        .collect()
}

/// Build a tree whose threshold is `n`, so every rectangle fits.
pub fn build_tree(rects: &[Rectangle]) -> Quadtree {
    let mut tree = Quadtree::with_bounds(universe(), rects.len().max(1));
    for r in rects {
        tree.insert(*r).expect("universe origins always fit");
    }
    tree
}
