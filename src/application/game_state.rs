use std::time::{Duration, Instant};

use tracing::{error, warn};

use super::{Scheduler, World};
use crate::config::SimulationConfig;
use crate::error::Result;

/// GameState orchestrates the simulation for interactive hosts.
/// It owns the world, the scheduler, and the config used to reseed.
pub struct GameState {
    pub world: World,
    pub scheduler: Scheduler,
    pub config: SimulationConfig,
    pub last_tick_time_ms: f32,
    /// Message of the error that halted the simulation, if any
    pub halted: Option<String>,
}

impl GameState {
    pub fn new(config: SimulationConfig) -> Result<Self> {
        let world = World::from_config(&config)?;
        Ok(Self {
            world,
            scheduler: Scheduler::new(config.interval()),
            config,
            last_tick_time_ms: 0.0,
            halted: None,
        })
    }

    /// Toggle start/stop
    pub fn toggle_running(mut self) -> Self {
        if self.halted.is_none() {
            self.scheduler.toggle();
        }
        self
    }

    /// Run exactly one tick while stopped
    pub fn step(mut self) -> Self {
        if !self.scheduler.is_running() && self.halted.is_none() {
            let start = Instant::now();
            if let Err(err) = self.world.tick() {
                error!(%err, "Tick failed");
                self.halted = Some(err.to_string());
            }
            self.last_tick_time_ms = start.elapsed().as_secs_f32() * 1000.0;
        }
        self
    }

    /// Rebuild the world from the configuration
    pub fn reset(mut self) -> Self {
        match World::from_config(&self.config) {
            Ok(world) => {
                self.world = world;
                self.scheduler.stop();
                self.halted = None;
            }
            Err(err) => warn!(%err, "Reset refused, keeping current world"),
        }
        self
    }

    /// Slow down (positive) or speed up (negative)
    pub fn adjust_interval(mut self, delta_ms: i64) -> Self {
        self.scheduler.adjust_interval(delta_ms);
        self
    }

    /// Update simulation by one frame
    pub fn tick(mut self, delta_time: f32) -> Self {
        let start = Instant::now();
        match self.scheduler.advance(Duration::from_secs_f32(delta_time.max(0.0)), &mut self.world) {
            Ok(0) => return self,
            Ok(_) => {}
            Err(err) => {
                error!(%err, "Tick failed, simulation halted");
                self.halted = Some(err.to_string());
            }
        }
        self.last_tick_time_ms = start.elapsed().as_secs_f32() * 1000.0;
        self
    }
}
