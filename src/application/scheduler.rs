use std::time::Duration;

use tracing::info;

use super::World;
use crate::config::{MAX_INTERVAL_MS, MIN_INTERVAL_MS};
use crate::error::Result;

const MIN_INTERVAL: Duration = Duration::from_millis(MIN_INTERVAL_MS);
const MAX_INTERVAL: Duration = Duration::from_millis(MAX_INTERVAL_MS);

/// Scheduler turns elapsed frame time into world ticks.
/// Nothing fires while stopped; start and stop are idempotent.
#[derive(Debug, Clone)]
pub struct Scheduler {
    interval: Duration,
    running: bool,
    elapsed: Duration,
}

impl Scheduler {
    /// Runs at exactly `interval`; validated configs keep it in bounds
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            running: false,
            elapsed: Duration::ZERO,
        }
    }

    pub const fn is_running(&self) -> bool {
        self.running
    }

    pub const fn interval(&self) -> Duration {
        self.interval
    }

    pub fn start(&mut self) {
        if self.running {
            return;
        }
        self.running = true;
        self.elapsed = Duration::ZERO;
        info!(interval_ms = self.interval.as_millis() as u64, "Simulation started");
    }

    pub fn stop(&mut self) {
        if !self.running {
            return;
        }
        self.running = false;
        self.elapsed = Duration::ZERO;
        info!("Simulation stopped");
    }

    pub fn toggle(&mut self) {
        if self.running {
            self.stop();
        } else {
            self.start();
        }
    }

    /// Change the tick interval by `delta_ms`, keeping it within sane bounds
    pub fn adjust_interval(&mut self, delta_ms: i64) {
        let ms = (self.interval.as_millis() as i64 + delta_ms).max(0) as u64;
        self.interval = Duration::from_millis(ms).clamp(MIN_INTERVAL, MAX_INTERVAL);
    }

    /// Account for `delta` of wall time and run every tick that became due.
    /// Returns how many ticks fired. A failing tick stops the scheduler.
    pub fn advance(&mut self, delta: Duration, world: &mut World) -> Result<u32> {
        if !self.running {
            return Ok(0);
        }

        self.elapsed += delta;
        let mut fired = 0;
        while self.elapsed >= self.interval {
            self.elapsed -= self.interval;
            if let Err(err) = world.tick() {
                self.stop();
                return Err(err);
            }
            fired += 1;
        }
        Ok(fired)
    }
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new(Duration::from_millis(2000))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Dictionary, Variant};

    fn world() -> World {
        World::seed(&["#####", "# o #", "#####"], Variant::Life).unwrap()
    }

    #[test]
    fn test_nothing_fires_before_start() {
        let mut scheduler = Scheduler::default();
        let mut world = world();
        assert_eq!(scheduler.advance(Duration::from_secs(10), &mut world).unwrap(), 0);
        assert_eq!(world.generation(), 0);
    }

    #[test]
    fn test_fires_once_per_interval() {
        let mut scheduler = Scheduler::new(Duration::from_millis(2000));
        let mut world = world();
        scheduler.start();
        assert_eq!(scheduler.advance(Duration::from_millis(1999), &mut world).unwrap(), 0);
        assert_eq!(scheduler.advance(Duration::from_millis(1), &mut world).unwrap(), 1);
        assert_eq!(scheduler.advance(Duration::from_millis(4500), &mut world).unwrap(), 2);
        assert_eq!(world.generation(), 3);
    }

    #[test]
    fn test_stop_prevents_further_ticks() {
        let mut scheduler = Scheduler::new(Duration::from_millis(100));
        let mut world = world();
        scheduler.start();
        scheduler.advance(Duration::from_millis(150), &mut world).unwrap();
        scheduler.stop();
        scheduler.stop();
        assert!(!scheduler.is_running());
        assert_eq!(scheduler.advance(Duration::from_secs(5), &mut world).unwrap(), 0);
        assert_eq!(world.generation(), 1);
    }

    #[test]
    fn test_start_twice_keeps_accumulated_time() {
        let mut scheduler = Scheduler::new(Duration::from_millis(100));
        let mut world = world();
        scheduler.start();
        scheduler.advance(Duration::from_millis(60), &mut world).unwrap();
        scheduler.start();
        assert_eq!(scheduler.advance(Duration::from_millis(40), &mut world).unwrap(), 1);
    }

    #[test]
    fn test_failing_tick_stops_scheduler() {
        let mut scheduler = Scheduler::new(Duration::from_millis(100));
        let mut world = World::seed(&["o", " "], Variant::Walkers)
            .unwrap()
            .with_directions(Dictionary::new());
        scheduler.start();
        assert!(scheduler.advance(Duration::from_millis(100), &mut world).is_err());
        assert!(!scheduler.is_running());
    }

    #[test]
    fn test_new_keeps_requested_interval() {
        let interval = Duration::from_millis(MAX_INTERVAL_MS);
        assert_eq!(Scheduler::new(interval).interval(), interval);
    }

    #[test]
    fn test_adjust_interval_is_clamped() {
        let mut scheduler = Scheduler::new(Duration::from_millis(200));
        scheduler.adjust_interval(-1000);
        assert_eq!(scheduler.interval(), MIN_INTERVAL);
        scheduler.adjust_interval(100_000);
        assert_eq!(scheduler.interval(), MAX_INTERVAL);
    }
}
