//! Combat model configuration with documented constants
//!
//! These are explicit parameters rather than compile-time constants so the
//! model can be explored across parameter ranges in tests and from the
//! command line.

/// Tunable constants of the quest combat model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuestConfig {
    /// Chance for a single player strike to remove one monster health point.
    ///
    /// The complement is the chance the players lose a health point in the
    /// same exchange. Must be strictly between 0 and 1; the log-domain
    /// summation is undefined at the extremes.
    pub strike_chance: f64,

    /// Hit points contributed by each combatant, on either side.
    ///
    /// A team of N contributes N times this value to its shared pool.
    pub health_per_combatant: u32,
}

impl Default for QuestConfig {
    fn default() -> Self {
        Self {
            strike_chance: 0.6,
            health_per_combatant: 3,
        }
    }
}

impl QuestConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<(), String> {
        // Also rejects NaN
        if !(self.strike_chance > 0.0 && self.strike_chance < 1.0) {
            return Err(format!(
                "strike_chance ({}) must be strictly between 0 and 1",
                self.strike_chance
            ));
        }

        if self.health_per_combatant == 0 {
            return Err("health_per_combatant must be at least 1".into());
        }

        Ok(())
    }
}
