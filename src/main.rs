//! Quest Odds - entry point
//!
//! Parses the two team sizes from the command line, evaluates the
//! closed-form outcome sums, and prints the three report lines (or a JSON
//! report for tooling).

use clap::Parser;
use serde::Serialize;

use quest_odds::core::config::QuestConfig;
use quest_odds::core::error::{QuestError, Result};
use quest_odds::quest::{evaluate, Engagement};

/// Closed-form odds that N players clear a quest against M monsters
#[derive(Parser, Debug)]
#[command(name = "quest-odds")]
#[command(about = "Compute the chance that N players defeat M monsters")]
struct Args {
    /// Number of players on the quest
    #[arg(allow_negative_numbers = true)]
    players: i64,

    /// Number of monsters defending it
    #[arg(allow_negative_numbers = true)]
    monsters: i64,

    /// Chance for a single player strike to land
    #[arg(long, default_value_t = 0.6)]
    win_chance: f64,

    /// Hit points per combatant on either side
    #[arg(long, default_value_t = 3)]
    health: u32,

    /// Output format: text or json
    #[arg(long, default_value = "text")]
    format: String,
}

/// JSON output structure
#[derive(Serialize)]
struct QuestReport {
    players: u32,
    monsters: u32,
    player_health: u64,
    monster_health: u64,
    win_percent: f64,
    loss_percent: f64,
    uncertainty_percent: f64,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter("quest_odds=info")
        .init();

    let args = Args::parse();
    if let Err(e) = run(&args) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let config = QuestConfig {
        strike_chance: args.win_chance,
        health_per_combatant: args.health,
    };
    config.validate().map_err(QuestError::InvalidConfig)?;

    let engagement = Engagement::new(args.players, args.monsters)?;
    let outcome = evaluate(&engagement, &config);

    match args.format.as_str() {
        "json" => {
            let report = QuestReport {
                players: engagement.players(),
                monsters: engagement.monsters(),
                player_health: engagement.player_health(&config),
                monster_health: engagement.monster_health(&config),
                win_percent: outcome.win_chance * 100.0,
                loss_percent: outcome.loss_chance * 100.0,
                uncertainty_percent: outcome.uncertainty() * 100.0,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        _ => {
            println!(
                "Chance of success: {}%",
                format_general(outcome.win_chance * 100.0)
            );
            println!(
                "Chance of failure: {}%\n",
                format_general(outcome.loss_chance * 100.0)
            );
            println!(
                "rating of uncertainty: {}%\n",
                format_general(outcome.uncertainty() * 100.0)
            );
        }
    }

    Ok(())
}

/// Render a float the way C's `%G` does: six significant digits, trailing
/// zeros trimmed, scientific notation for extreme magnitudes.
fn format_general(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }

    let exponent = value.abs().log10().floor() as i32;
    if exponent < -4 || exponent >= 6 {
        let mantissa = value / 10f64.powi(exponent);
        format!("{}e{}", trim_zeros(format!("{mantissa:.5}")), exponent)
    } else {
        let decimals = (5 - exponent).max(0) as usize;
        trim_zeros(format!("{value:.decimals$}"))
    }
}

fn trim_zeros(mut s: String) -> String {
    if s.contains('.') {
        while s.ends_with('0') {
            s.pop();
        }
        if s.ends_with('.') {
            s.pop();
        }
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_trims_trailing_zeros() {
        assert_eq!(format_general(68.256), "68.256");
        assert_eq!(format_general(82.5), "82.5");
        assert_eq!(format_general(25.0), "25");
    }

    #[test]
    fn test_format_zero() {
        assert_eq!(format_general(0.0), "0");
    }

    #[test]
    fn test_format_rounds_to_six_significant_digits() {
        assert_eq!(format_general(68.25599999), "68.256");
        assert_eq!(format_general(0.123456789), "0.123457");
    }

    #[test]
    fn test_format_switches_to_scientific() {
        assert_eq!(format_general(0.00001), "1e-5");
        assert_eq!(format_general(1234567.0), "1.23457e6");
        assert_eq!(format_general(-0.0000234), "-2.34e-5");
    }
}
