mod point;
mod dictionary;
mod direction;
mod cell;
mod grid;
mod rules;
mod maps;
pub mod legend;
pub mod transition;

pub use point::Point;
pub use dictionary::Dictionary;
pub use direction::{Directions, COMPASS, compass};
pub use cell::{Action, Actor, Cell, LifeState};
pub use grid::Grid;
pub use rules::{Rule, ConwayRule, default_rule};
pub use maps::{MapPreset, presets};
pub use legend::Variant;
pub use transition::{CommitStats, Update};
