use serde::{Deserialize, Serialize};

use super::{Actor, Cell, Grid, LifeState, Point};
use crate::error::{Error, Result};

pub const WALL: char = '#';
pub const INHABITANT: char = 'o';
pub const SPACE: char = ' ';

/// Which kind of world a seed map describes.
/// The same characters mean different cells in each variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    /// `'o'` is a live organism, `' '` a dead one
    #[default]
    Life,
    /// `'o'` is a south walker, `' '` empty floor
    Walkers,
}

impl Variant {
    /// Cell for a seed character, `None` if the character isn't in the legend
    pub const fn cell_for(self, ch: char) -> Option<Cell> {
        match (self, ch) {
            (_, WALL) => Some(Cell::Wall),
            (Variant::Life, INHABITANT) => Some(Cell::ALIVE),
            (Variant::Life, SPACE) => Some(Cell::DEAD),
            (Variant::Walkers, INHABITANT) => Some(Cell::Actor(Actor::south_walker())),
            (Variant::Walkers, SPACE) => Some(Cell::Empty),
            _ => None,
        }
    }
}

/// Display character for a cell
pub const fn character(cell: Cell) -> char {
    match cell {
        Cell::Wall => WALL,
        Cell::Organism(LifeState::Alive) | Cell::Actor(_) => INHABITANT,
        Cell::Organism(LifeState::Dead) | Cell::Empty => SPACE,
    }
}

/// Build a grid from equal-length text rows.
/// Fails on the first problem rather than returning a partial grid.
pub fn parse<S: AsRef<str>>(rows: &[S], variant: Variant) -> Result<Grid> {
    let first = rows.first().ok_or(Error::EmptyMap)?;
    let width = first.as_ref().chars().count();
    if width == 0 {
        return Err(Error::EmptyMap);
    }

    let mut grid = Grid::new(width, rows.len());
    for (y, row) in rows.iter().enumerate() {
        let row = row.as_ref();
        let found = row.chars().count();
        if found != width {
            return Err(Error::RaggedRow { row: y, expected: width, found });
        }
        for (x, ch) in row.chars().enumerate() {
            let cell = variant.cell_for(ch).ok_or(Error::UnknownCharacter {
                character: ch,
                row: y,
                column: x,
            })?;
            grid.set_value_at(Point::new(x as i32, y as i32), cell);
        }
    }
    Ok(grid)
}

/// Render the grid back to text rows
pub fn to_rows(grid: &Grid) -> Vec<String> {
    grid.rows()
        .map(|row| row.iter().copied().map(character).collect())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_life_variant() {
        let grid = parse(&["#o#", "# #"], Variant::Life).unwrap();
        assert_eq!(grid.dimensions(), (3, 2));
        assert_eq!(grid.value_at(Point::new(1, 0)), Cell::ALIVE);
        assert_eq!(grid.value_at(Point::new(1, 1)), Cell::DEAD);
        assert_eq!(grid.value_at(Point::new(0, 1)), Cell::Wall);
    }

    #[test]
    fn test_parse_walkers_variant() {
        let grid = parse(&["o "], Variant::Walkers).unwrap();
        assert_eq!(grid.value_at(Point::new(0, 0)), Cell::Actor(Actor::south_walker()));
        assert_eq!(grid.value_at(Point::new(1, 0)), Cell::Empty);
    }

    #[test]
    fn test_ragged_rows_rejected() {
        let err = parse(&["###", "#"], Variant::Life).unwrap_err();
        assert!(matches!(err, Error::RaggedRow { row: 1, expected: 3, found: 1 }));
    }

    #[test]
    fn test_unknown_character_rejected() {
        let err = parse(&["#x#"], Variant::Walkers).unwrap_err();
        assert!(matches!(
            err,
            Error::UnknownCharacter { character: 'x', row: 0, column: 1 }
        ));
    }

    #[test]
    fn test_empty_map_rejected() {
        let rows: [&str; 0] = [];
        assert!(matches!(parse(&rows, Variant::Life), Err(Error::EmptyMap)));
        assert!(matches!(parse(&[""], Variant::Life), Err(Error::EmptyMap)));
    }

    #[test]
    fn test_to_rows_inverts_parse() {
        let rows = ["####", "#o #", "####"];
        let grid = parse(&rows, Variant::Walkers).unwrap();
        assert_eq!(to_rows(&grid), rows);
    }
}
