use super::LifeState;

/// Trait for organism transition rules
pub trait Rule: Send + Sync {
    /// Name of the rule
    fn name(&self) -> &'static str;

    /// Short description
    fn description(&self) -> &'static str;

    /// Compute the next state from the current one and the alive-neighbour count
    fn evolve(&self, current: LifeState, neighbors: u8) -> LifeState;
}

/// Conway's Game of Life (B3/S23)
/// 1. Alive with fewer than 2 neighbours dies
/// 2. Alive with more than 3 neighbours dies
/// 3. Dead with exactly 3 neighbours is born
/// 4. Everything else keeps its state
#[derive(Clone, Copy, Debug, Default)]
pub struct ConwayRule;

impl Rule for ConwayRule {
    fn name(&self) -> &'static str {
        "Conway"
    }

    fn description(&self) -> &'static str {
        "B3/S23 - Classic"
    }

    fn evolve(&self, current: LifeState, neighbors: u8) -> LifeState {
        match (current, neighbors) {
            (LifeState::Alive, n) if n < 2 || n > 3 => LifeState::Dead,
            (LifeState::Dead, 3) => LifeState::Alive,
            (state, _) => state,
        }
    }
}

/// Get default rule (Conway's Life)
pub fn default_rule() -> Box<dyn Rule> {
    Box::new(ConwayRule)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_underpopulation() {
        assert_eq!(ConwayRule.evolve(LifeState::Alive, 0), LifeState::Dead);
        assert_eq!(ConwayRule.evolve(LifeState::Alive, 1), LifeState::Dead);
    }

    #[test]
    fn test_survival() {
        assert_eq!(ConwayRule.evolve(LifeState::Alive, 2), LifeState::Alive);
        assert_eq!(ConwayRule.evolve(LifeState::Alive, 3), LifeState::Alive);
    }

    #[test]
    fn test_overpopulation() {
        assert_eq!(ConwayRule.evolve(LifeState::Alive, 4), LifeState::Dead);
        assert_eq!(ConwayRule.evolve(LifeState::Alive, 8), LifeState::Dead);
    }

    #[test]
    fn test_reproduction() {
        assert_eq!(ConwayRule.evolve(LifeState::Dead, 3), LifeState::Alive);
    }

    #[test]
    fn test_dead_stays_dead_otherwise() {
        for n in [0, 1, 2, 4, 5, 8] {
            assert_eq!(ConwayRule.evolve(LifeState::Dead, n), LifeState::Dead);
        }
    }
}
