use rand::{Rng, SeedableRng, rngs::StdRng};
use tracing::{debug, info};

use crate::config::{RandomFill, SimulationConfig};
use crate::domain::{
    compass, default_rule, legend, presets, transition, Cell, CommitStats, Directions, Grid,
    MapPreset, Point, Rule, Variant,
};
use crate::error::{Error, Result};

/// Summary of one completed tick
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TickReport {
    pub generation: u64,
    pub stats: CommitStats,
    pub population: usize,
}

/// World owns the grid and everything needed to advance it.
pub struct World {
    grid: Grid,
    rule: Box<dyn Rule>,
    directions: Directions,
    variant: Variant,
    parallel: bool,
    generation: u64,
}

impl World {
    /// Seed a world from text rows using the variant's legend
    pub fn seed<S: AsRef<str>>(rows: &[S], variant: Variant) -> Result<Self> {
        let grid = legend::parse(rows, variant)?;
        let (width, height) = grid.dimensions();
        info!(width, height, ?variant, "Seeded world");
        Ok(Self::from_grid(grid, variant))
    }

    /// Wrap an existing grid
    pub fn from_grid(grid: Grid, variant: Variant) -> Self {
        Self {
            grid,
            rule: default_rule(),
            directions: compass(),
            variant,
            parallel: false,
            generation: 0,
        }
    }

    pub fn from_preset(map: &MapPreset) -> Result<Self> {
        Self::seed(map.rows, map.variant)
    }

    /// Walled room with organisms scattered at `fill.density`
    pub fn random(fill: &RandomFill) -> Result<Self> {
        fill.validate()?;
        let mut rng = StdRng::seed_from_u64(fill.seed);
        let mut grid = Grid::new(fill.width, fill.height);
        let (w, h) = (fill.width as i32, fill.height as i32);

        for y in 0..h {
            for x in 0..w {
                let border = x == 0 || y == 0 || x == w - 1 || y == h - 1;
                let cell = if border {
                    Cell::Wall
                } else if rng.random_bool(fill.density) {
                    Cell::ALIVE
                } else {
                    Cell::DEAD
                };
                grid.set_value_at(Point::new(x, y), cell);
            }
        }
        info!(width = fill.width, height = fill.height, seed = fill.seed, "Seeded random world");
        Ok(Self::from_grid(grid, Variant::Life))
    }

    /// Build the world a configuration describes.
    /// Inline rows win over a random fill, which wins over a named map.
    pub fn from_config(config: &SimulationConfig) -> Result<Self> {
        config.validate()?;
        let world = if let Some(rows) = &config.rows {
            Self::seed(rows, config.variant)?
        } else if let Some(fill) = &config.random {
            Self::random(fill)?
        } else {
            let map = presets::by_name(&config.map)
                .ok_or_else(|| Error::UnknownMap(config.map.clone()))?;
            Self::from_preset(&map)?
        };
        Ok(world.with_parallel(config.parallel))
    }

    /// Replace the direction table actors resolve their moves against
    pub fn with_directions(mut self, directions: Directions) -> Self {
        self.directions = directions;
        self
    }

    pub fn with_rule(mut self, rule: Box<dyn Rule>) -> Self {
        self.rule = rule;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub const fn generation(&self) -> u64 {
        self.generation
    }

    pub const fn variant(&self) -> Variant {
        self.variant
    }

    pub fn rule_name(&self) -> &'static str {
        self.rule.name()
    }

    pub fn rule_description(&self) -> &'static str {
        self.rule.description()
    }

    /// Advance one generation.
    /// On error the grid is left exactly as it was.
    pub fn tick(&mut self) -> Result<TickReport> {
        let updates = if self.parallel {
            transition::plan_parallel(&self.grid, self.rule.as_ref(), &self.directions)?
        } else {
            transition::plan(&self.grid, self.rule.as_ref(), &self.directions)?
        };
        let stats = transition::commit(&mut self.grid, &updates);
        self.generation += 1;

        let population = self.grid.population();
        debug!(
            generation = self.generation,
            births = stats.births,
            deaths = stats.deaths,
            moves = stats.moves,
            population,
            "Tick"
        );
        Ok(TickReport {
            generation: self.generation,
            stats,
            population,
        })
    }

    /// Flip an organism between alive and dead; other cells are untouched
    pub fn toggle_at(&mut self, pos: Point) {
        if let Some(Cell::Organism(state)) = self.grid.get(pos) {
            self.grid.set_value_at(pos, Cell::Organism(state.toggle()));
        }
    }

    /// Text block, one line per row
    pub fn render(&self) -> String {
        legend::to_rows(&self.grid).join("\n")
    }

    /// Rows of display characters for graphical hosts
    pub fn render_table(&self) -> Vec<Vec<char>> {
        self.grid
            .rows()
            .map(|row| row.iter().copied().map(legend::character).collect())
            .collect()
    }
}
