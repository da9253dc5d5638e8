use crate::{Bounds, Quadtree};

/// Shape of the tree a run starts with.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TreeConfig {
    pub bounds: Bounds,
    pub threshold: usize,
}

impl Default for TreeConfig {
    fn default() -> Self {
        TreeConfig {
            bounds: Bounds::new(-60, -60, 110, 110),
            threshold: 5,
        }
    }
}

impl TreeConfig {
    pub fn new(bounds: Bounds, threshold: usize) -> Self {
        TreeConfig { bounds, threshold }
    }

    pub fn build(&self) -> Quadtree {
        Quadtree::with_bounds(self.bounds, self.threshold)
    }
}
