use std::fmt;

use tracing::debug;

use crate::utils::{indent, position_of_origin};
use crate::{Bounds, QuadtreeError, Rectangle, SpatialNode};

/// Terminal node holding at most `capacity` rectangles. A full leaf refuses
/// further inserts; it never splits.
#[derive(Clone, Debug)]
pub struct LeafNode {
    bounds: Bounds,
    capacity: usize,
    rectangles: Vec<Rectangle>,
}

impl LeafNode {
    pub fn new(bounds: Bounds, capacity: usize) -> Self {
        LeafNode {
            bounds,
            capacity,
            rectangles: Vec::with_capacity(capacity),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_full(&self) -> bool {
        self.rectangles.len() >= self.capacity
    }

    pub fn rectangles(&self) -> &[Rectangle] {
        &self.rectangles
    }

    /// Remove the first rectangle sharing `rect`'s origin.
    pub fn remove(&mut self, rect: &Rectangle) -> Option<Rectangle> {
        self.delete(rect.x, rect.y)
    }
}

impl SpatialNode for LeafNode {
    fn bounds(&self) -> Bounds {
        self.bounds
    }

    fn len(&self) -> usize {
        self.rectangles.len()
    }

    fn insert(&mut self, rect: Rectangle) -> Result<(), QuadtreeError> {
        if self.is_full() {
            return Err(QuadtreeError::CapacityExceeded {
                capacity: self.capacity,
                rectangle: rect,
            });
        }
        self.rectangles.push(rect);
        Ok(())
    }

    fn delete(&mut self, x: i32, y: i32) -> Option<Rectangle> {
        match position_of_origin(&self.rectangles, x, y) {
            Some(idx) => Some(self.rectangles.remove(idx)),
            None => {
                debug!(x, y, bounds = %self.bounds, "no rectangle to delete in leaf");
                None
            }
        }
    }

    fn find(&self, x: i32, y: i32) -> Option<&Rectangle> {
        self.rectangles.iter().find(|r| r.has_origin(x, y))
    }

    fn update(&mut self, x: i32, y: i32, new_height: i32, new_width: i32) -> Option<Rectangle> {
        match self.rectangles.iter_mut().find(|r| r.has_origin(x, y)) {
            Some(rect) => {
                rect.resize(new_height, new_width);
                Some(*rect)
            }
            None => {
                debug!(x, y, bounds = %self.bounds, "no rectangle to update in leaf");
                None
            }
        }
    }

    fn dump(&self, level: usize, out: &mut dyn fmt::Write) -> fmt::Result {
        writeln!(out, "{}Leaf Node {}", indent(level), self.bounds)?;
        for rect in &self.rectangles {
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
        Ok(())
    }

    fn collect_rectangles<'a>(&'a self, out: &mut Vec<&'a Rectangle>) {
        out.extend(self.rectangles.iter());
    }

    fn rectangles_containing<'a>(&'a self, px: i32, py: i32, out: &mut Vec<&'a Rectangle>) {
        out.extend(self.rectangles.iter().filter(|r| r.contains_point(px, py)));
    }
}
