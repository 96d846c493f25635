//! Two-phase tick: plan every update from an untouched snapshot, then commit.
//!
//! Planning never mutates, so the result does not depend on scan order and
//! can be split across threads.

use rayon::prelude::*;

use super::{Action, Cell, Directions, Grid, LifeState, Point, Rule, COMPASS};
use crate::error::{Error, Result};

/// A single change requested for the next generation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Update {
    /// Organism at `pos` switches to `state`
    Set { pos: Point, state: LifeState },
    /// Actor steps from `from` into the empty cell `to`
    Move { from: Point, to: Point },
}

/// Outcome of committing a plan.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CommitStats {
    pub births: usize,
    pub deaths: usize,
    pub moves: usize,
    /// Moves dropped because an earlier move took the destination
    pub blocked: usize,
}

/// Count alive organisms among the eight surrounding cells.
/// Off-grid neighbours do not count. The world's direction table only
/// steers actors, so the neighbourhood stays the fixed compass.
pub fn count_alive_neighbors(grid: &Grid, pos: Point) -> u8 {
    COMPASS
        .iter()
        .map(|&(_, offset)| pos + offset)
        .filter(|&n| grid.get(n).is_some_and(Cell::is_alive))
        .count() as u8
}

/// Decide the update for one active cell, reading only `grid`
fn plan_cell(
    grid: &Grid,
    pos: Point,
    cell: Cell,
    rule: &dyn Rule,
    directions: &Directions,
) -> Result<Option<Update>> {
    match cell {
        Cell::Organism(state) => {
            let next = rule.evolve(state, count_alive_neighbors(grid, pos));
            Ok((next != state).then_some(Update::Set { pos, state: next }))
        }
        Cell::Actor(actor) => match actor.act() {
            Action::Wait => Ok(None),
            Action::Move { direction } => {
                let offset = directions
                    .lookup(direction)
                    .ok_or_else(|| Error::UnknownDirection(direction.to_string()))?;
                let to = pos + *offset;
                // Off-grid behaves like a wall
                let open = grid.get(to).is_some_and(Cell::is_empty);
                Ok(open.then_some(Update::Move { from: pos, to }))
            }
        },
        Cell::Empty | Cell::Wall => Ok(None),
    }
}

/// Plan the next generation serially, in row-major order
pub fn plan(grid: &Grid, rule: &dyn Rule, directions: &Directions) -> Result<Vec<Update>> {
    grid.for_each_cell()
        .filter(|(_, cell)| cell.is_active())
        .filter_map(|(pos, cell)| plan_cell(grid, pos, cell, rule, directions).transpose())
        .collect()
}

/// Parallel planning using rayon, one task per row.
/// Produces the same updates in the same order as [`plan`].
pub fn plan_parallel(grid: &Grid, rule: &dyn Rule, directions: &Directions) -> Result<Vec<Update>> {
    let (width, height) = grid.dimensions();
    let rows: Vec<Vec<Update>> = (0..height)
        .into_par_iter()
        .map(|y| {
            (0..width)
                .map(|x| Point::new(x as i32, y as i32))
                .map(|pos| (pos, grid.value_at(pos)))
                .filter(|(_, cell)| cell.is_active())
                .filter_map(|(pos, cell)| plan_cell(grid, pos, cell, rule, directions).transpose())
                .collect::<Result<Vec<_>>>()
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(rows.into_iter().flatten().collect())
}

/// Apply planned updates in order
pub fn commit(grid: &mut Grid, updates: &[Update]) -> CommitStats {
    updates.iter().fold(CommitStats::default(), |mut stats, update| {
        match *update {
            Update::Set { pos, state } => {
                grid.set_value_at(pos, Cell::Organism(state));
                match state {
                    LifeState::Alive => stats.births += 1,
                    LifeState::Dead => stats.deaths += 1,
                }
            }
            Update::Move { from, to } => {
                if grid.value_at(to).is_empty() {
                    grid.move_value(from, to);
                    stats.moves += 1;
                } else {
                    stats.blocked += 1;
                }
            }
        }
        stats
    })
}
