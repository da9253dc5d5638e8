use std::fmt;

use crate::{Bounds, InternalNode, LeafNode, QuadtreeError, Rectangle};

/// Operations shared by every kind of tree node.
///
/// Lookups match on the rectangle origin and act on the first match in
/// depth-first order.
pub trait SpatialNode {
    fn bounds(&self) -> Bounds;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn insert(&mut self, rect: Rectangle) -> Result<(), QuadtreeError>;

    fn delete(&mut self, x: i32, y: i32) -> Option<Rectangle>;

    fn find(&self, x: i32, y: i32) -> Option<&Rectangle>;

    /// Resize the first rectangle with origin `(x, y)` in place, returning
    /// its new value.
    fn update(&mut self, x: i32, y: i32, new_height: i32, new_width: i32) -> Option<Rectangle>;

    fn dump(&self, level: usize, out: &mut dyn fmt::Write) -> fmt::Result;

    fn collect_rectangles<'a>(&'a self, out: &mut Vec<&'a Rectangle>);

    fn rectangles_containing<'a>(&'a self, px: i32, py: i32, out: &mut Vec<&'a Rectangle>);
}

#[derive(Clone, Debug)]
pub enum Node {
    Leaf(LeafNode),
    Internal(InternalNode),
}

impl Node {
    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf(_))
    }

    pub fn as_leaf(&self) -> Option<&LeafNode> {
        match self {
            Node::Leaf(leaf) => Some(leaf),
            Node::Internal(_) => None,
        }
    }

    pub fn as_internal(&self) -> Option<&InternalNode> {
        match self {
            Node::Leaf(_) => None,
            Node::Internal(internal) => Some(internal),
        }
    }
}

impl From<LeafNode> for Node {
    fn from(leaf: LeafNode) -> Self {
        Node::Leaf(leaf)
    }
}

impl From<InternalNode> for Node {
    fn from(internal: InternalNode) -> Self {
        Node::Internal(internal)
    }
}

impl SpatialNode for Node {
    fn bounds(&self) -> Bounds {
        match self {
            Node::Leaf(n) => n.bounds(),
            Node::Internal(n) => n.bounds(),
        }
    }

    fn len(&self) -> usize {
        match self {
            Node::Leaf(n) => n.len(),
            Node::Internal(n) => n.len(),
        }
    }

    fn insert(&mut self, rect: Rectangle) -> Result<(), QuadtreeError> {
        match self {
            Node::Leaf(n) => n.insert(rect),
            Node::Internal(n) => n.insert(rect),
        }
    }

    fn delete(&mut self, x: i32, y: i32) -> Option<Rectangle> {
        match self {
            Node::Leaf(n) => n.delete(x, y),
            Node::Internal(n) => n.delete(x, y),
        }
    }

    fn find(&self, x: i32, y: i32) -> Option<&Rectangle> {
        match self {
            Node::Leaf(n) => n.find(x, y),
            Node::Internal(n) => n.find(x, y),
        }
    }

    fn update(&mut self, x: i32, y: i32, new_height: i32, new_width: i32) -> Option<Rectangle> {
        match self {
            Node::Leaf(n) => n.update(x, y, new_height, new_width),
            Node::Internal(n) => n.update(x, y, new_height, new_width),
        }
    }

    fn dump(&self, level: usize, out: &mut dyn fmt::Write) -> fmt::Result {
        match self {
            Node::Leaf(n) => n.dump(level, out),
            Node::Internal(n) => n.dump(level, out),
        }
    }

    fn collect_rectangles<'a>(&'a self, out: &mut Vec<&'a Rectangle>) {
        match self {
            Node::Leaf(n) => n.collect_rectangles(out),
            Node::Internal(n) => n.collect_rectangles(out),
        }
    }

    fn rectangles_containing<'a>(&'a self, px: i32, py: i32, out: &mut Vec<&'a Rectangle>) {
        match self {
            Node::Leaf(n) => n.rectangles_containing(px, py, out),
            Node::Internal(n) => n.rectangles_containing(px, py, out),
        }
    }
}
