use std::fmt;

use crate::utils::midpoint;

/// The fixed extent of a tree node, closed on every side.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Bounds {
    pub min_x: i32,
    pub min_y: i32,
    pub max_x: i32,
    pub max_y: i32,
}

/// One of the four children of a split node, in routing order.
///
/// The labels follow the split geometry: `NorthEast` is the min-x/max-y
/// corner and `NorthWest` the max-x/max-y corner.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Quadrant {
    NorthEast,
    NorthWest,
    SouthWest,
    SouthEast,
}

impl Quadrant {
    pub const ALL: [Quadrant; 4] = [
        Quadrant::NorthEast,
        Quadrant::NorthWest,
        Quadrant::SouthWest,
        Quadrant::SouthEast,
    ];
}

impl Bounds {
    /// Build bounds from two opposite corners, in any order.
    pub fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Bounds {
            min_x: x1.min(x2),
            min_y: y1.min(y2),
            max_x: x1.max(x2),
            max_y: y1.max(y2),
        }
    }

    pub fn width(&self) -> i64 {
        i64::from(self.max_x) - i64::from(self.min_x)
    }

    pub fn height(&self) -> i64 {
        i64::from(self.max_y) - i64::from(self.min_y)
    }

    pub fn area(&self) -> i64 {
        self.width() * self.height()
    }

    /// The split point, truncated toward zero on each axis.
    pub fn center(&self) -> (i32, i32) {
        (
            midpoint(self.min_x, self.max_x),
            midpoint(self.min_y, self.max_y),
        )
    }

    pub fn contains_point(&self, x: i32, y: i32) -> bool {
        self.min_x <= x && x <= self.max_x && self.min_y <= y && y <= self.max_y
    }

    pub fn contains(&self, other: &Bounds) -> bool {
        self.min_x <= other.min_x
            && self.max_x >= other.max_x
            && self.min_y <= other.min_y
            && self.max_y >= other.max_y
    }

    pub fn quadrant(&self, quadrant: Quadrant) -> Bounds {
        let (mid_x, mid_y) = self.center();
        match quadrant {
            Quadrant::NorthEast => Bounds::new(self.min_x, mid_y, mid_x, self.max_y),
            Quadrant::NorthWest => Bounds::new(mid_x, mid_y, self.max_x, self.max_y),
            Quadrant::SouthWest => Bounds::new(self.min_x, self.min_y, mid_x, mid_y),
            Quadrant::SouthEast => Bounds::new(mid_x, self.min_y, self.max_x, mid_y),
        }
    }

    /// The four quadrants in routing order. Together they tile `self`,
    /// overlapping only along the midlines.
    pub fn quadrants(&self) -> [Bounds; 4] {
        Quadrant::ALL.map(|q| self.quadrant(q))
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{},{}] to [{},{}]",
            self.min_x, self.min_y, self.max_x, self.max_y
        )
    }
}
