use std::fmt;

use tracing::{debug, trace};

use crate::utils::{indent, position_of_origin};
use crate::{Bounds, LeafNode, Node, QuadtreeError, Rectangle, SpatialNode};

/// What an internal node holds. A node is never half-split: it either keeps
/// its rectangles directly or owns exactly four children.
#[derive(Clone, Debug)]
enum Contents {
    Direct(Vec<Rectangle>),
    Split(Box<[Node; 4]>),
}

/// Leaf children of a split node hold this many times the split threshold.
pub const LEAF_CAPACITY_FACTOR: usize = 2;

/// A node that stores rectangles directly until the split threshold is
/// reached, then divides its bounds into four leaf quadrants.
///
/// Inserts are routed by bounds to the first child containing the origin.
/// Find, delete, and update scan every child in order and do not consult
/// bounds.
#[derive(Clone, Debug)]
pub struct InternalNode {
    bounds: Bounds,
    split_threshold: usize,
    leaf_capacity: usize,
    contents: Contents,
}

impl InternalNode {
    pub fn new(bounds: Bounds, split_threshold: usize) -> Self {
        let leaf_capacity = split_threshold.saturating_mul(LEAF_CAPACITY_FACTOR);
        Self::with_leaf_capacity(bounds, split_threshold, leaf_capacity)
    }

    pub fn with_leaf_capacity(bounds: Bounds, split_threshold: usize, leaf_capacity: usize) -> Self {
        InternalNode {
            bounds,
            split_threshold,
            leaf_capacity,
            contents: Contents::Direct(Vec::new()),
        }
    }

    pub fn split_threshold(&self) -> usize {
        self.split_threshold
    }

    pub fn leaf_capacity(&self) -> usize {
        self.leaf_capacity
    }

    pub fn is_split(&self) -> bool {
        matches!(self.contents, Contents::Split(_))
    }

    pub fn children(&self) -> Option<&[Node; 4]> {
        match &self.contents {
            Contents::Direct(_) => None,
            Contents::Split(children) => Some(&**children),
        }
    }

    /// Rectangles held directly. Always empty after a split.
    pub fn rectangles(&self) -> &[Rectangle] {
        match &self.contents {
            Contents::Direct(rects) => rects.as_slice(),
            Contents::Split(_) => &[],
        }
    }

    fn needs_split(&self) -> bool {
        match &self.contents {
            Contents::Direct(rects) => rects.len() + 1 >= self.split_threshold,
            Contents::Split(_) => false,
        }
    }

    /// Build four leaf children and move every direct rectangle into the
    /// child containing its origin. The children are installed only once all
    /// rectangles have moved; otherwise the node keeps its direct list and
    /// `incoming` is handed back.
    fn split(&mut self, incoming: Rectangle) -> Result<(), QuadtreeError> {
        let capacity = self.leaf_capacity;
        let mut children = self
            .bounds
            .quadrants()
            .map(|bounds| Node::Leaf(LeafNode::new(bounds, capacity)));
        for rect in self.rectangles() {
            if let Err(err) = route_into(&mut children, self.bounds, *rect) {
                debug!(bounds = %self.bounds, error = %err, "split abandoned");
                return Err(match err {
                    QuadtreeError::CapacityExceeded { capacity, .. } => {
                        QuadtreeError::CapacityExceeded {
                            capacity,
                            rectangle: incoming,
                        }
                    }
                    QuadtreeError::OutOfBounds { bounds, .. } => QuadtreeError::OutOfBounds {
                        rectangle: incoming,
                        bounds,
                    },
                });
            }
        }
        debug!(bounds = %self.bounds, leaf_capacity = capacity, "splitting node");
        self.contents = Contents::Split(Box::new(children));
        Ok(())
    }

    fn route(&mut self, rect: Rectangle) -> Result<(), QuadtreeError> {
        let bounds = self.bounds;
        match &mut self.contents {
            Contents::Direct(rects) => {
                rects.push(rect);
                Ok(())
            }
            Contents::Split(children) => route_into(children, bounds, rect),
        }
    }
}

fn route_into(
    children: &mut [Node; 4],
    bounds: Bounds,
    rect: Rectangle,
) -> Result<(), QuadtreeError> {
    match children
        .iter_mut()
        .find(|child| child.bounds().contains_point(rect.x, rect.y))
    {
        Some(child) => {
            trace!(%rect, child = %child.bounds(), "routing");
            child.insert(rect)
        }
        None => Err(QuadtreeError::OutOfBounds {
            rectangle: rect,
            bounds,
        }),
    }
}

impl SpatialNode for InternalNode {
    fn bounds(&self) -> Bounds {
        self.bounds
    }

    fn len(&self) -> usize {
        match &self.contents {
            Contents::Direct(rects) => rects.len(),
            Contents::Split(children) => children.iter().map(|c| c.len()).sum(),
        }
    }

    fn insert(&mut self, rect: Rectangle) -> Result<(), QuadtreeError> {
        if !self.bounds.contains_point(rect.x, rect.y) {
            return Err(QuadtreeError::OutOfBounds {
                rectangle: rect,
                bounds: self.bounds,
            });
        }
        if self.needs_split() {
            self.split(rect)?;
        }
        self.route(rect)
    }

    fn delete(&mut self, x: i32, y: i32) -> Option<Rectangle> {
        match &mut self.contents {
            Contents::Direct(rects) => match position_of_origin(rects, x, y) {
                Some(idx) => Some(rects.remove(idx)),
                None => {
                    debug!(x, y, bounds = %self.bounds, "no rectangle to delete");
                    None
                }
            },
            Contents::Split(children) => children.iter_mut().find_map(|c| c.delete(x, y)),
        }
    }

    fn find(&self, x: i32, y: i32) -> Option<&Rectangle> {
        match &self.contents {
            Contents::Direct(rects) => rects.iter().find(|r| r.has_origin(x, y)),
            Contents::Split(children) => children.iter().find_map(|c| c.find(x, y)),
        }
    }

    fn update(&mut self, x: i32, y: i32, new_height: i32, new_width: i32) -> Option<Rectangle> {
        match &mut self.contents {
            Contents::Direct(rects) => match rects.iter_mut().find(|r| r.has_origin(x, y)) {
                Some(rect) => {
                    rect.resize(new_height, new_width);
                    Some(*rect)
                }
                None => {
                    debug!(x, y, bounds = %self.bounds, "no rectangle to update");
                    None
                }
            },
            Contents::Split(children) => children
                .iter_mut()
                .find_map(|c| c.update(x, y, new_height, new_width)),
        }
    }

    fn dump(&self, level: usize, out: &mut dyn fmt::Write) -> fmt::Result {
        writeln!(out, "{}Internal Node {}", indent(level), self.bounds)?;
        match &self.contents {
            Contents::Direct(rects) => {
                for rect in rects {
                    writeln!(
                        out,
                        "{}Rectangle at {}, {}: {}x{}",
                        indent(level + 1),
                        rect.x,
                        rect.y,
                        rect.width,
                        rect.height
                    )?;
                }
            }
            Contents::Split(children) => {
                for child in children.iter() {
                    child.dump(level + 1, out)?;
                }
            }
        }
        Ok(())
    }

    fn collect_rectangles<'a>(&'a self, out: &mut Vec<&'a Rectangle>) {
        match &self.contents {
            Contents::Direct(rects) => out.extend(rects.iter()),
            Contents::Split(children) => {
                for child in children.iter() {
                    child.collect_rectangles(out);
                }
            }
        }
    }

    fn rectangles_containing<'a>(&'a self, px: i32, py: i32, out: &mut Vec<&'a Rectangle>) {
        match &self.contents {
            Contents::Direct(rects) => {
                out.extend(rects.iter().filter(|r| r.contains_point(px, py)))
            }
            Contents::Split(children) => {
                for child in children.iter() {
                    child.rectangles_containing(px, py, out);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn root(threshold: usize) -> InternalNode {
        InternalNode::new(Bounds::new(-10, -10, 120, 120), threshold)
    }

    #[test]
    fn test_third_insert_splits_with_threshold_three() {
        let mut node = root(3);
        node.insert(Rectangle::new(15, 15, 8, 8)).unwrap();
        node.insert(Rectangle::new(25, 25, 6, 6)).unwrap();
        assert!(!node.is_split());
        assert_eq!(node.rectangles().len(), 2);

        node.insert(Rectangle::new(35, 35, 7, 7)).unwrap();
        assert!(node.is_split());
        assert_eq!(node.children().map(|c| c.len()), Some(4));
        assert!(node.rectangles().is_empty());
        assert_eq!(node.len(), 3);

        node.insert(Rectangle::new(30, 30, 7, 7)).unwrap();
        let found = node.find(30, 30).unwrap();
        assert_eq!(found.origin(), (30, 30));
    }

    #[test]
    fn test_split_moves_rectangles_into_quadrants() {
        let mut node = root(4);
        let sw = Rectangle::new(0, 0, 1, 1);
        let nw = Rectangle::new(100, 100, 1, 1);
        let ne = Rectangle::new(0, 100, 1, 1);
        let se = Rectangle::new(100, 0, 1, 1);
        for r in [sw, nw, ne, se].iter() {
            node.insert(*r).unwrap();
        }

        let children = node.children().unwrap();
        assert!(children.iter().all(|c| c.is_leaf()));
        let stored: Vec<&[Rectangle]> = children
            .iter()
            .map(|c| c.as_leaf().unwrap().rectangles())
            .collect();
        assert_eq!(stored, vec![&[ne][..], &[nw][..], &[sw][..], &[se][..]]);
    }

    #[test]
    fn test_boundary_origin_goes_to_first_quadrant() {
        let mut node = root(1);
        // Midpoint (55, 55) lies in all four quadrants.
        node.insert(Rectangle::new(55, 55, 1, 1)).unwrap();
        let children = node.children().unwrap();
        assert_eq!(children[0].len(), 1);
        assert_eq!(children[1].len() + children[2].len() + children[3].len(), 0);
    }

    #[test]
    fn test_out_of_bounds_rejected_before_and_after_split() {
        let mut node = root(2);
        let outside = Rectangle::new(500, 0, 1, 1);
        assert!(matches!(
            node.insert(outside),
            Err(QuadtreeError::OutOfBounds { .. })
        ));
        node.insert(Rectangle::new(0, 0, 1, 1)).unwrap();
        node.insert(Rectangle::new(1, 1, 1, 1)).unwrap();
        assert!(node.is_split());
        assert_eq!(
            node.insert(outside).unwrap_err().rectangle(),
            outside
        );
        assert_eq!(node.len(), 2);
    }

    #[test]
    fn test_full_quadrant_fails() {
        let mut node = root(2);
        assert_eq!(node.leaf_capacity(), 4);
        for i in 0..4 {
            node.insert(Rectangle::new(i, i, 1, 1)).unwrap();
        }
        let err = node.insert(Rectangle::new(4, 4, 1, 1)).unwrap_err();
        assert_eq!(
            err,
            QuadtreeError::CapacityExceeded {
                capacity: 4,
                rectangle: Rectangle::new(4, 4, 1, 1)
            }
        );
        for i in 0..4 {
            assert!(node.find(i, i).is_some());
        }
        assert!(node.find(4, 4).is_none());
        assert_eq!(node.len(), 4);
    }

    #[test]
    fn test_explicit_leaf_capacity() {
        let mut node = InternalNode::with_leaf_capacity(Bounds::new(0, 0, 10, 10), 1, 1);
        node.insert(Rectangle::new(1, 1, 1, 1)).unwrap();
        assert!(node.is_split());
        assert!(matches!(
            node.insert(Rectangle::new(2, 2, 1, 1)),
            Err(QuadtreeError::CapacityExceeded { capacity: 1, .. })
        ));
    }

    #[test]
    fn test_split_refused_by_child_keeps_direct_rectangles() {
        let mut node = InternalNode::with_leaf_capacity(Bounds::new(0, 0, 100, 100), 4, 1);
        let stored = [
            Rectangle::new(1, 1, 1, 1),
            Rectangle::new(2, 2, 1, 1),
            Rectangle::new(3, 3, 1, 1),
        ];
        for r in stored.iter() {
            node.insert(*r).unwrap();
        }
        assert_eq!(node.len(), 3);

        // All three fall in SW, which holds only one.
        let incoming = Rectangle::new(90, 90, 1, 1);
        assert_eq!(
            node.insert(incoming),
            Err(QuadtreeError::CapacityExceeded {
                capacity: 1,
                rectangle: incoming
            })
        );
        assert!(!node.is_split());
        assert_eq!(node.len(), 3);
        assert_eq!(node.rectangles(), &stored[..]);
        for r in stored.iter() {
            assert_eq!(node.find(r.x, r.y), Some(r));
        }
        assert!(node.find(90, 90).is_none());
    }

    #[test]
    fn test_find_delete_update_before_split() {
        let mut node = root(3);
        node.insert(Rectangle::new(45, 45, 6, 6)).unwrap();
        assert_eq!(node.update(45, 45, 12, 12), Some(Rectangle::new(45, 45, 12, 12)));
        assert_eq!(node.find(45, 45), Some(&Rectangle::new(45, 45, 12, 12)));
        assert_eq!(node.delete(45, 45), Some(Rectangle::new(45, 45, 12, 12)));
        assert!(node.find(45, 45).is_none());
        assert!(node.delete(45, 45).is_none());
        assert!(node.update(45, 45, 1, 1).is_none());
    }

    #[test]
    fn test_scan_ignores_child_bounds() {
        // Nothing routes rectangles outside a child's bounds, so place one
        // there directly to show lookups scan every child.
        let mut node = root(1);
        node.insert(Rectangle::new(0, 0, 1, 1)).unwrap();
        if let Contents::Split(children) = &mut node.contents {
            if let Node::Leaf(leaf) = &mut children[3] {
                leaf.insert(Rectangle::new(-5, 110, 2, 2)).unwrap();
            }
        }
        assert!(node.find(-5, 110).is_some());
        assert_eq!(node.update(-5, 110, 3, 3), Some(Rectangle::new(-5, 110, 3, 3)));
        assert!(node.delete(-5, 110).is_some());
        assert!(node.find(-5, 110).is_none());
    }

    #[test]
    fn test_dump_mirrors_depth() {
        let mut node = root(3);
        node.insert(Rectangle::new(12, 12, 7, 7)).unwrap();
        node.insert(Rectangle::new(24, 24, 8, 8)).unwrap();
        node.insert(Rectangle::new(36, 36, 9, 9)).unwrap();

        let mut out = String::new();
        node.dump(0, &mut out).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "Internal Node [-10,-10] to [120,120]");
        assert_eq!(lines[1], "\tLeaf Node [-10,55] to [55,120]");
        assert!(lines.contains(&"\tLeaf Node [-10,-10] to [55,55]"));
        assert!(lines.contains(&"\t\tRectangle at 24, 24: 8x8"));
        assert_eq!(lines.iter().filter(|l| l.contains("Leaf Node")).count(), 4);
    }

    #[test]
    fn test_rectangles_containing() {
        let mut node = root(2);
        node.insert(Rectangle::new(0, 0, 10, 10)).unwrap();
        node.insert(Rectangle::new(5, 5, 10, 10)).unwrap();
        node.insert(Rectangle::new(60, 60, 10, 10)).unwrap();

        let mut hits = Vec::new();
        node.rectangles_containing(7, 7, &mut hits);
        assert_eq!(hits.len(), 2);

        let mut hits = Vec::new();
        node.rectangles_containing(70, 70, &mut hits);
        assert_eq!(hits, vec![&Rectangle::new(60, 60, 10, 10)]);
    }
}
