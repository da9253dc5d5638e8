use std::fmt;

/// An axis-aligned rectangle anchored at its origin `(x, y)`.
///
/// Equality and hashing are structural over all four fields. Zero and
/// negative dimensions are accepted as given.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Rectangle {
    pub x: i32,
    pub y: i32,
    pub height: i32,
    pub width: i32,
}

impl Rectangle {
    pub fn new(x: i32, y: i32, height: i32, width: i32) -> Self {
        Rectangle {
            x,
            y,
            height,
            width,
        }
    }

    pub fn origin(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    pub fn has_origin(&self, x: i32, y: i32) -> bool {
        self.x == x && self.y == y
    }

    pub fn area(&self) -> i64 {
        i64::from(self.height) * i64::from(self.width)
    }

    pub fn perimeter(&self) -> i64 {
        2 * (i64::from(self.height) + i64::from(self.width))
    }

    /// Closed containment: points on any edge count as inside.
    pub fn contains_point(&self, px: i32, py: i32) -> bool {
        let (px, py) = (i64::from(px), i64::from(py));
        let (x, y) = (i64::from(self.x), i64::from(self.y));
        x <= px
            && px <= x + i64::from(self.width)
            && y <= py
            && py <= y + i64::from(self.height)
    }

    pub(crate) fn resize(&mut self, new_height: i32, new_width: i32) {
        self.height = new_height;
        self.width = new_width;
    }
}

impl From<(i32, i32, i32, i32)> for Rectangle {
    fn from((x, y, height, width): (i32, i32, i32, i32)) -> Self {
        Rectangle::new(x, y, height, width)
    }
}

impl fmt::Display for Rectangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Rectangle({}, {}, {}x{})",
            self.x, self.y, self.width, self.height
        )
    }
}
