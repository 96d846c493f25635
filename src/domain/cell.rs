/// Life state of a rule-driven organism.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum LifeState {
    Dead,
    Alive,
}

impl LifeState {
    /// Check if the organism is currently alive
    pub const fn is_alive(self) -> bool {
        matches!(self, LifeState::Alive)
    }

    /// Flip the state, used when painting cells by hand
    pub const fn toggle(self) -> Self {
        match self {
            LifeState::Alive => LifeState::Dead,
            LifeState::Dead => LifeState::Alive,
        }
    }
}

/// What an actor asks the world to do this tick.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Action {
    /// Step one cell towards the named direction
    Move { direction: &'static str },
    /// Stay put
    Wait,
}

/// An action-driven inhabitant. Actors ignore the neighbour rule and
/// decide their own move every tick.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Actor {
    /// Always walks towards `heading`, blocked by anything in the way
    Walker { heading: &'static str },
}

impl Actor {
    /// The walker that heads south forever
    pub const fn south_walker() -> Self {
        Actor::Walker { heading: "s" }
    }

    pub const fn act(self) -> Action {
        match self {
            Actor::Walker { heading } => Action::Move { direction: heading },
        }
    }
}

/// Contents of a single grid cell.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Cell {
    #[default]
    Empty,
    Wall,
    Organism(LifeState),
    Actor(Actor),
}

impl Cell {
    pub const ALIVE: Cell = Cell::Organism(LifeState::Alive);
    pub const DEAD: Cell = Cell::Organism(LifeState::Dead);

    /// Alive organisms are the only cells counted as neighbours
    pub const fn is_alive(self) -> bool {
        matches!(self, Cell::Organism(LifeState::Alive))
    }

    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Organisms and actors take part in a tick; empty space and walls don't
    pub const fn is_active(self) -> bool {
        matches!(self, Cell::Organism(_) | Cell::Actor(_))
    }
}
