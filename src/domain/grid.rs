use super::{Cell, Point};

/// Grid stores the 2D cell layout in row-major order.
/// Dimensions are fixed at construction.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new grid with every cell empty
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::Empty; width * height],
        }
    }

    /// Get grid dimensions
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Convert 2D coordinates to 1D index
    const fn get_index(&self, pos: Point) -> usize {
        pos.y as usize * self.width + pos.x as usize
    }

    /// Check whether `pos` lies on the grid
    pub const fn is_inside(&self, pos: Point) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as usize) < self.width && (pos.y as usize) < self.height
    }

    /// Get cell at position (with bounds checking)
    pub fn get(&self, pos: Point) -> Option<Cell> {
        self.is_inside(pos).then(|| self.cells[self.get_index(pos)])
    }

    /// Get cell at a position the caller already knows is inside.
    ///
    /// # Panics
    /// Panics if `pos` is outside the grid.
    pub fn value_at(&self, pos: Point) -> Cell {
        assert!(self.is_inside(pos), "value_at {pos} outside {}x{} grid", self.width, self.height);
        self.cells[self.get_index(pos)]
    }

    /// Overwrite the cell at `pos`
    pub fn set_value_at(&mut self, pos: Point, cell: Cell) {
        debug_assert!(self.is_inside(pos), "set_value_at {pos} outside grid");
        let idx = self.get_index(pos);
        self.cells[idx] = cell;
    }

    /// Copy the value at `from` into `to` and clear `from`
    pub fn move_value(&mut self, from: Point, to: Point) {
        let cell = self.value_at(from);
        self.set_value_at(to, cell);
        self.set_value_at(from, Cell::Empty);
    }

    /// Iterate over all cells with their positions, row by row
    pub fn for_each_cell(&self) -> impl Iterator<Item = (Point, Cell)> + '_ {
        (0..self.height)
            .flat_map(move |y| (0..self.width).map(move |x| Point::new(x as i32, y as i32)))
            .map(|pos| (pos, self.cells[self.get_index(pos)]))
    }

    /// Iterate over rows as slices
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        // chunks_exact panics on zero, and a zero-width grid has no rows anyway
        self.cells.chunks_exact(self.width.max(1))
    }

    /// Number of alive organisms
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Number of actors
    pub fn actor_count(&self) -> usize {
        self.cells.iter().filter(|cell| matches!(cell, Cell::Actor(_))).count()
    }
}
