//! Closed-form quest outcome probabilities
//!
//! A quest is modeled as a race between two shared health pools: every
//! exchange either removes one monster health point (with the configured
//! strike chance) or one player health point. The fight ends the instant a
//! pool empties, so "the players win" is exactly the negative-binomial event
//! that `monster_health` strikes land before `player_health` misses
//! accumulate. No rounds are simulated; the sums below are the whole model.

use serde::Serialize;

use crate::core::config::QuestConfig;
use crate::core::error::{QuestError, Result};
use crate::quest::binomial::ln_binomial;

/// A validated N-vs-M matchup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Engagement {
    players: u32,
    monsters: u32,
}

impl Engagement {
    /// Build an engagement, rejecting zero and negative team sizes.
    pub fn new(players: i64, monsters: i64) -> Result<Self> {
        Ok(Self {
            players: team_size(players)?,
            monsters: team_size(monsters)?,
        })
    }

    pub fn players(&self) -> u32 {
        self.players
    }

    pub fn monsters(&self) -> u32 {
        self.monsters
    }

    /// Total hit points on the player side.
    pub fn player_health(&self, config: &QuestConfig) -> u64 {
        u64::from(self.players) * u64::from(config.health_per_combatant)
    }

    /// Total hit points on the monster side.
    pub fn monster_health(&self, config: &QuestConfig) -> u64 {
        u64::from(self.monsters) * u64::from(config.health_per_combatant)
    }
}

fn team_size(count: i64) -> Result<u32> {
    match u32::try_from(count) {
        Ok(size) if size >= 1 => Ok(size),
        _ => Err(QuestError::InvalidTeamSize(count)),
    }
}

/// Win/loss odds for one engagement. Immutable once computed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OutcomeProbabilities {
    /// Probability the players exhaust the monster pool first.
    pub win_chance: f64,
    /// Probability the monsters exhaust the player pool first.
    pub loss_chance: f64,
}

impl OutcomeProbabilities {
    /// Probability mass assigned to neither outcome.
    ///
    /// The race always terminates, so this is zero up to floating-point
    /// drift. Anything visibly nonzero means the arithmetic went wrong, so
    /// it is reported alongside the odds as a sanity indicator.
    pub fn uncertainty(&self) -> f64 {
        1.0 - (self.win_chance + self.loss_chance)
    }
}

/// Probability that `monster_health` strikes land before the players burn
/// through their own `player_health` points.
///
/// Negative-binomial tail: for each exact number of misses `i` tolerated
/// before the final strike, the mass is
/// `C(monster_health - 1 + i, monster_health - 1) * p^monster_health * (1-p)^i`,
/// summed over `i < player_health`. Each term is assembled in log space so
/// the coefficients never wrap around, no matter how large the pools get.
pub fn win_probability(player_health: u64, monster_health: u64, strike_chance: f64) -> f64 {
    race_probability(monster_health, player_health, strike_chance)
}

/// Mirror of [`win_probability`]: the monsters win the race instead, so
/// their "hit" happens at the complement of the strike chance.
pub fn loss_probability(player_health: u64, monster_health: u64, strike_chance: f64) -> f64 {
    race_probability(player_health, monster_health, 1.0 - strike_chance)
}

/// Probability that `pool` hits land before `budget` misses accumulate,
/// each hit landing independently with probability `hit_chance`.
fn race_probability(pool: u64, budget: u64, hit_chance: f64) -> f64 {
    if pool == 0 {
        return 1.0;
    }

    let ln_hit = hit_chance.ln();
    let ln_miss = (1.0 - hit_chance).ln();

    let mut total = 0.0_f64;
    for misses in 0..budget {
        let ln_term = ln_binomial(pool - 1 + misses, pool - 1)
            + pool as f64 * ln_hit
            + misses as f64 * ln_miss;
        total += ln_term.exp();
    }
    total
}

/// Compute both outcomes for an engagement under the given config.
///
/// The config must already be validated; a degenerate strike chance would
/// make the log-domain terms NaN.
pub fn evaluate(engagement: &Engagement, config: &QuestConfig) -> OutcomeProbabilities {
    let player_health = engagement.player_health(config);
    let monster_health = engagement.monster_health(config);

    tracing::debug!(
        "evaluating {}v{} quest ({} vs {} health, strike chance {})",
        engagement.players(),
        engagement.monsters(),
        player_health,
        monster_health,
        config.strike_chance
    );

    OutcomeProbabilities {
        win_chance: win_probability(player_health, monster_health, config.strike_chance),
        loss_chance: loss_probability(player_health, monster_health, config.strike_chance),
    }
}
