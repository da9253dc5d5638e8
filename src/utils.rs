use crate::Rectangle;

/// Integer midpoint of `a` and `b`, truncated toward zero. Computed wide so
/// it cannot overflow, and always lies between the two inputs.
pub(crate) fn midpoint(a: i32, b: i32) -> i32 {
    ((i64::from(a) + i64::from(b)) / 2) as i32
}

/// Index of the first rectangle whose origin is `(x, y)`.
pub(crate) fn position_of_origin(rects: &[Rectangle], x: i32, y: i32) -> Option<usize> {
    rects.iter().position(|r| r.has_origin(x, y))
}

pub(crate) fn indent(level: usize) -> String {
    "\t".repeat(level)
}
