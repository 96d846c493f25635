use super::{Dictionary, Point};

/// Compass names in clockwise order starting north, with their offsets.
/// y grows downward, so south is `(0, 1)`.
pub const COMPASS: [(&str, Point); 8] = [
    ("n", Point::new(0, -1)),
    ("ne", Point::new(1, -1)),
    ("e", Point::new(1, 0)),
    ("se", Point::new(1, 1)),
    ("s", Point::new(0, 1)),
    ("sw", Point::new(-1, 1)),
    ("w", Point::new(-1, 0)),
    ("nw", Point::new(-1, -1)),
];

/// Named direction offsets used by the world for neighbour scans and moves
pub type Directions = Dictionary<Point>;

/// The eight-way compass table
pub fn compass() -> Directions {
    Dictionary::from_pairs(COMPASS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compass_has_eight_distinct_offsets() {
        let dirs = compass();
        assert_eq!(dirs.len(), 8);
        let mut offsets: Vec<_> = dirs.values().map(|p| (p.x, p.y)).collect();
        offsets.sort();
        offsets.dedup();
        assert_eq!(offsets.len(), 8);
        assert!(!offsets.contains(&(0, 0)));
    }

    #[test]
    fn test_south_points_down() {
        assert_eq!(compass().lookup("s"), Some(&Point::new(0, 1)));
    }
}
