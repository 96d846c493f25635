// Domain layer - Core business logic
pub mod domain;

// Application layer - Use cases and coordination
pub mod application;

pub mod config;
pub mod error;
pub mod telemetry;

// Infrastructure layer - UI, rendering, input
pub mod ui;
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Cell, Grid, Point, Variant, presets};
pub use application::{GameState, Scheduler, TickReport, World};
pub use config::SimulationConfig;
pub use error::{Error, Result};
pub use ui::Button;
