mod world;
mod scheduler;
mod game_state;

pub use world::{TickReport, World};
pub use scheduler::Scheduler;
pub use game_state::GameState;
