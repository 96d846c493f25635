use std::fmt;
use std::ops::Add;

/// An immutable position (or offset) on the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Translate by an offset, returning a new point
    pub const fn add(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, offset: Point) -> Point {
        Point::add(self, offset.x, offset.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{ x: {}, y: {} }}", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_returns_translated_copy() {
        let origin = Point::new(1, 2);
        let moved = origin.add(3, -1);
        assert_eq!(moved, Point::new(4, 1));
        assert_eq!(origin, Point::new(1, 2));
    }

    #[test]
    fn test_add_operator_with_offset() {
        assert_eq!(Point::new(2, 2) + Point::new(0, 1), Point::new(2, 3));
    }

    #[test]
    fn test_equality_is_field_wise() {
        assert_eq!(Point::new(5, 7), Point::new(5, 7));
        assert_ne!(Point::new(5, 7), Point::new(7, 5));
    }

    #[test]
    fn test_display() {
        assert_eq!(Point::new(3, -4).to_string(), "{ x: 3, y: -4 }");
    }
}
