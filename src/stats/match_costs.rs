//! # Match Cost Calculator
//!
//! Pure statistical function producing one performance scalar per player
//! from a match's verified games. Higher cost means stronger relative
//! performance in that match.
//!
//! Per verified game, each verified score is normalized against the game's
//! mean ("lobby average"). A player's base is the mean of their normalized
//! values; a participation weight then rewards playing more of the match's
//! games, so a single strong game cannot equal many consistently strong
//! ones. Only `Verified` games and scores contribute; everything else is
//! excluded entirely, not down-weighted.
//!
//! Games and scores are iterated in id order, so float accumulation is
//! identical under any permutation of the input.

use std::collections::{BTreeMap, HashMap};

use crate::models::{Game, Match, Score};
use crate::state_machine::VerificationStatus;

/// Weight of the full-participation bonus relative to the normalized base.
const PARTICIPATION_BONUS: f64 = 0.3;

/// Compute per-player match costs from the verified games of one match.
///
/// Returns an empty map when the match has no verified games with verified
/// scores. Deterministic: identical input yields bit-identical output.
pub fn calculate_match_costs(osu_match: &Match) -> HashMap<i64, f64> {
    let mut games: Vec<&Game> = osu_match
        .games
        .iter()
        .filter(|g| g.verification_status == VerificationStatus::Verified)
        .collect();
    games.sort_by_key(|g| g.id);

    // Normalized values per player, accumulated in game-id order.
    let mut normalized: BTreeMap<i64, Vec<f64>> = BTreeMap::new();
    let mut contributing_games = 0usize;

    for game in games {
        let mut scores: Vec<&Score> = game
            .scores
            .iter()
            .filter(|s| s.verification_status == VerificationStatus::Verified)
            .collect();
        scores.sort_by_key(|s| s.id);
        if scores.is_empty() {
            continue;
        }

        let lobby_average =
            scores.iter().map(|s| s.score as f64).sum::<f64>() / scores.len() as f64;
        if lobby_average <= 0.0 {
            continue;
        }
        contributing_games += 1;

        for score in scores {
            normalized
                .entry(score.player_id)
                .or_default()
                .push(score.score as f64 / lobby_average);
        }
    }

    if contributing_games == 0 {
        return HashMap::new();
    }

    let mut costs = HashMap::with_capacity(normalized.len());
    for (player_id, values) in normalized {
        let played = values.len();
        let base = values.iter().sum::<f64>() / played as f64;
        let weight = participation_weight(played, contributing_games);
        costs.insert(player_id, base * weight);
    }
    costs
}

/// `1 + 0.3 * sqrt((played - 1) / (total - 1))`: flat for a one-game match,
/// full bonus for appearing in every game, square-root ramp in between.
fn participation_weight(played: usize, total_games: usize) -> f64 {
    if total_games <= 1 {
        return 1.0;
    }
    let ratio = (played - 1) as f64 / (total_games - 1) as f64;
    1.0 + PARTICIPATION_BONUS * ratio.sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Mods, Ruleset, ScoringType};

    const EPSILON: f64 = 1e-9;

    fn verified_score(id: i64, player_id: i64, value: i64) -> Score {
        let mut score = Score::new(id, player_id, value, Mods::empty(), Ruleset::Osu);
        score.verification_status = VerificationStatus::Verified;
        score
    }

    fn verified_game(id: i64, scores: Vec<Score>) -> Game {
        let mut game = Game::new(id, Ruleset::Osu, ScoringType::ScoreV2);
        game.verification_status = VerificationStatus::Verified;
        game.scores = scores;
        game
    }

    /// Golden fixture: two games with hand-computed lobby averages.
    ///
    /// Game 1 average 500k: A 1.2, B 0.8, C 1.0. Game 2 average 500k:
    /// A 1.5, B 0.5. A and B play both games (weight 1.3), C plays one
    /// (weight 1.0): A = 1.35 * 1.3, B = 0.65 * 1.3, C = 1.0.
    fn golden_match() -> Match {
        let mut m = Match::new(1, Ruleset::Osu);
        m.verification_status = VerificationStatus::Verified;
        m.games.push(verified_game(
            1,
            vec![
                verified_score(1, 1, 600_000),
                verified_score(2, 2, 400_000),
                verified_score(3, 3, 500_000),
            ],
        ));
        m.games.push(verified_game(
            2,
            vec![
                verified_score(4, 1, 750_000),
                verified_score(5, 2, 250_000),
            ],
        ));
        m
    }

    #[test]
    fn test_golden_fixture_values() {
        let costs = calculate_match_costs(&golden_match());
        assert_eq!(costs.len(), 3);
        assert!((costs[&1] - 1.35 * 1.3).abs() < EPSILON);
        assert!((costs[&2] - 0.65 * 1.3).abs() < EPSILON);
        assert!((costs[&3] - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_more_games_above_average_outranks_fewer_games() {
        let costs = calculate_match_costs(&golden_match());
        // Player 1: every game, above average. Player 3: one game, exactly
        // average. Player 2: every game, below average.
        assert!(costs[&1] > costs[&3]);
        assert!(costs[&3] > costs[&2]);
    }

    #[test]
    fn test_permuting_input_order_does_not_change_output() {
        let baseline = calculate_match_costs(&golden_match());

        let mut shuffled = golden_match();
        shuffled.games.reverse();
        for game in &mut shuffled.games {
            game.scores.reverse();
        }
        let permuted = calculate_match_costs(&shuffled);

        assert_eq!(baseline.len(), permuted.len());
        for (player_id, cost) in &baseline {
            assert_eq!(cost, &permuted[player_id], "player {player_id}");
        }
    }

    #[test]
    fn test_repeated_invocation_is_bit_identical() {
        let m = golden_match();
        let first = calculate_match_costs(&m);
        let second = calculate_match_costs(&m);
        for (player_id, cost) in &first {
            assert_eq!(cost.to_bits(), second[player_id].to_bits());
        }
    }

    #[test]
    fn test_unverified_data_has_zero_influence() {
        let mut with_noise = golden_match();
        // Rejected score inside a verified game.
        let mut rejected = verified_score(99, 4, 999_999);
        rejected.verification_status = VerificationStatus::Rejected;
        with_noise.games[0].scores.push(rejected);
        // Entire unverified game.
        let mut pre = verified_game(3, vec![verified_score(100, 1, 1_000_000)]);
        pre.verification_status = VerificationStatus::PreVerified;
        with_noise.games.push(pre);

        let baseline = calculate_match_costs(&golden_match());
        let noisy = calculate_match_costs(&with_noise);
        assert_eq!(baseline.len(), noisy.len());
        for (player_id, cost) in &baseline {
            assert_eq!(cost.to_bits(), noisy[player_id].to_bits());
        }
    }

    #[test]
    fn test_single_game_match_gets_no_participation_bonus() {
        let mut m = Match::new(1, Ruleset::Osu);
        m.games.push(verified_game(
            1,
            vec![
                verified_score(1, 1, 600_000),
                verified_score(2, 2, 400_000),
            ],
        ));
        let costs = calculate_match_costs(&m);
        assert!((costs[&1] - 1.2).abs() < EPSILON);
        assert!((costs[&2] - 0.8).abs() < EPSILON);
    }

    #[test]
    fn test_no_verified_games_yields_empty_map() {
        let mut m = Match::new(1, Ruleset::Osu);
        let mut game = verified_game(1, vec![verified_score(1, 1, 500_000)]);
        game.verification_status = VerificationStatus::PreVerified;
        m.games.push(game);
        assert!(calculate_match_costs(&m).is_empty());
    }
}
