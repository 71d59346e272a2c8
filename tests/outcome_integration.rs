//! Outcome calculator integration tests

use proptest::prelude::*;
use quest_odds::core::config::QuestConfig;
use quest_odds::quest::{evaluate, loss_probability, win_probability, Engagement};

#[test]
fn test_one_on_one_boundary_case() {
    // Hand-derivable: the player must land 3 strikes while suffering at
    // most 2, so the win side is 0.216 + 0.2592 + 0.20736 = 0.68256
    let engagement = Engagement::new(1, 1).unwrap();
    let outcome = evaluate(&engagement, &QuestConfig::default());

    assert!((outcome.win_chance - 0.68256).abs() < 1e-12);
    assert!((outcome.loss_chance - 0.31744).abs() < 1e-12);
    assert!(outcome.uncertainty().abs() < 1e-12);
}

#[test]
fn test_more_players_raise_the_win_chance() {
    let config = QuestConfig::default();
    let mut previous = 0.0;
    for players in 1..=12 {
        let engagement = Engagement::new(players, 4).unwrap();
        let outcome = evaluate(&engagement, &config);
        assert!(
            outcome.win_chance > previous,
            "win chance did not rise at {players} players"
        );
        previous = outcome.win_chance;
    }
}

#[test]
fn test_overflow_prone_sizes_stay_in_bounds() {
    // at 15v15 the coefficients exceed u64 range; the log-domain sums must
    // still land inside [0,1]
    let engagement = Engagement::new(15, 15).unwrap();
    let outcome = evaluate(&engagement, &QuestConfig::default());

    assert!(outcome.win_chance > 0.0 && outcome.win_chance < 1.0);
    assert!(outcome.loss_chance > 0.0 && outcome.loss_chance < 1.0);
    assert!(outcome.uncertainty().abs() < 1e-9);
}

#[test]
fn test_lopsided_matchup_is_nearly_decided() {
    let engagement = Engagement::new(20, 1).unwrap();
    let outcome = evaluate(&engagement, &QuestConfig::default());

    assert!(outcome.win_chance > 0.999);
    assert!(outcome.loss_chance < 0.001);
}

#[test]
fn test_win_and_loss_mirror_each_other() {
    for (player_health, monster_health) in [(3, 3), (9, 6), (45, 45)] {
        let win = win_probability(player_health, monster_health, 0.6);
        let mirrored = loss_probability(monster_health, player_health, 0.4);
        assert_eq!(win, mirrored);
    }
}

#[test]
fn test_rejects_invalid_team_sizes() {
    assert!(Engagement::new(0, 5).is_err());
    assert!(Engagement::new(-3, 2).is_err());
    assert!(Engagement::new(4, 0).is_err());
}

proptest! {
    #[test]
    fn prop_outcomes_are_bounded_and_exhaustive(
        players in 1i64..=40,
        monsters in 1i64..=40,
        strike_chance in 0.05f64..0.95,
    ) {
        let config = QuestConfig {
            strike_chance,
            health_per_combatant: 3,
        };
        let engagement = Engagement::new(players, monsters).unwrap();
        let outcome = evaluate(&engagement, &config);

        prop_assert!(outcome.win_chance >= 0.0 && outcome.win_chance <= 1.0);
        prop_assert!(outcome.loss_chance >= 0.0 && outcome.loss_chance <= 1.0);
        prop_assert!(outcome.uncertainty().abs() < 1e-9);
    }
}
