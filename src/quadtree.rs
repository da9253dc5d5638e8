use std::fmt;

use crate::{Bounds, InternalNode, QuadtreeError, Rectangle, SpatialNode};

/// A quadtree over integer rectangles, keyed by rectangle origin.
///
/// The root is always an [`InternalNode`]; every operation is forwarded to it.
///
/// ```
/// use rect_quadtree::{Quadtree, Rectangle};
///
/// let mut tree = Quadtree::new(-10, -10, 120, 120, 3);
/// tree.insert(Rectangle::new(15, 15, 8, 8)).unwrap();
/// assert_eq!(tree.find(15, 15), Some(&Rectangle::new(15, 15, 8, 8)));
/// ```
#[derive(Clone, Debug)]
pub struct Quadtree {
    root: InternalNode,
    max_capacity: usize,
}

impl Quadtree {
    pub fn new(min_x: i32, min_y: i32, max_x: i32, max_y: i32, capacity: usize) -> Self {
        Self::with_bounds(Bounds::new(min_x, min_y, max_x, max_y), capacity)
    }

    pub fn with_bounds(bounds: Bounds, capacity: usize) -> Self {
        Quadtree {
            root: InternalNode::new(bounds, capacity),
            max_capacity: capacity,
        }
    }

    pub fn root(&self) -> &InternalNode {
        &self.root
    }

    pub fn bounds(&self) -> Bounds {
        self.root.bounds()
    }

    pub fn max_capacity(&self) -> usize {
        self.max_capacity
    }

    pub fn len(&self) -> usize {
        self.root.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    pub fn insert(&mut self, rect: Rectangle) -> Result<(), QuadtreeError> {
        self.root.insert(rect)
    }

    pub fn delete(&mut self, x: i32, y: i32) -> Option<Rectangle> {
        self.root.delete(x, y)
    }

    pub fn find(&self, x: i32, y: i32) -> Option<&Rectangle> {
        self.root.find(x, y)
    }

    pub fn update(&mut self, x: i32, y: i32, new_height: i32, new_width: i32) -> Option<Rectangle> {
        self.root.update(x, y, new_height, new_width)
    }

    pub fn rectangles(&self) -> Vec<&Rectangle> {
        let mut out = Vec::with_capacity(self.len());
        self.root.collect_rectangles(&mut out);
        out
    }

    pub fn rectangles_containing(&self, px: i32, py: i32) -> Vec<&Rectangle> {
        let mut out = Vec::new();
        self.root.rectangles_containing(px, py, &mut out);
        out
    }

    pub fn dump(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Quadtree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.root.dump(0, f)
    }
}
