//! End-to-end pipeline scenario: a tournament flows from raw match data
//! through automation checks, reviewer confirmation, and match-cost
//! delivery, with the golden cost table checked at the end.

use std::sync::Arc;

use otr_core::models::{Match, Mods, Ruleset, ScoringType, Tournament};
use otr_core::services::{
    InMemoryStore, RawGame, RawMatchData, RawScore, RecordingSink, StaticDataSource,
};
use otr_core::{PipelineConfig, PipelineWorker, ProcessingStatus, VerificationStatus};

const EPSILON: f64 = 1e-9;

fn raw_score(id: i64, player_id: i64, score: i64) -> RawScore {
    RawScore {
        id,
        player_id,
        score,
        mods: Mods::empty(),
        ruleset: Ruleset::Osu,
    }
}

fn raw_game(id: i64, scores: Vec<RawScore>) -> RawGame {
    RawGame {
        id,
        ruleset: Ruleset::Osu,
        scoring_type: ScoringType::ScoreV2,
        start_time: Some(chrono::Utc::now()),
        end_time: Some(chrono::Utc::now()),
        scores,
    }
}

/// Two-game lobby with hand-computed lobby averages of 500k each.
///
/// Player 1 plays both games above average (1.2, 1.5), player 2 plays both
/// below average (0.8, 0.5), player 3 plays one game exactly at average.
fn golden_raw_match() -> RawMatchData {
    RawMatchData {
        name: "GC: (Alpha) vs (Beta)".to_string(),
        start_time: Some(chrono::Utc::now()),
        end_time: Some(chrono::Utc::now()),
        games: vec![
            raw_game(
                100,
                vec![
                    raw_score(1, 1, 600_000),
                    raw_score(2, 2, 400_000),
                    raw_score(3, 3, 500_000),
                ],
            ),
            raw_game(
                101,
                vec![raw_score(4, 1, 750_000), raw_score(5, 2, 250_000)],
            ),
        ],
    }
}

#[tokio::test]
async fn test_end_to_end_verification_and_match_costs() {
    let store = Arc::new(InMemoryStore::new());
    let data_source = Arc::new(StaticDataSource::new());
    let sink = Arc::new(RecordingSink::new());

    let mut tournament = Tournament::new(1, "Golden Cup", "GC", Ruleset::Osu);
    tournament.matches.push(Match::new(10, Ruleset::Osu));
    store.insert(tournament);
    data_source.seed(10, golden_raw_match());

    let worker = PipelineWorker::new(
        store.clone(),
        data_source,
        sink.clone(),
        PipelineConfig::default(),
    );

    // First sweep: fetch + automation checks; everything provisional.
    worker.sweep().await.unwrap();
    let tournament = store.get(1).unwrap();
    assert_eq!(
        tournament.verification_status,
        VerificationStatus::PreVerified
    );
    assert_eq!(
        tournament.processing_status,
        ProcessingStatus::NeedsVerification
    );
    let m = &tournament.matches[0];
    assert_eq!(m.verification_status, VerificationStatus::PreVerified);
    for game in &m.games {
        assert_eq!(game.verification_status, VerificationStatus::PreVerified);
        for score in &game.scores {
            assert_eq!(score.verification_status, VerificationStatus::PreVerified);
            assert!(score.rejection_reason.is_empty());
        }
    }
    assert!(sink.published().is_empty());

    // Reviewer confirms; second sweep finalizes and prices the match.
    store.update(1, |t| t.confirm_pending());
    worker.sweep().await.unwrap();

    let tournament = store.get(1).unwrap();
    assert_eq!(tournament.processing_status, ProcessingStatus::Done);
    assert_eq!(
        tournament.matches[0].processing_status,
        ProcessingStatus::Done
    );

    let published = sink.published();
    assert_eq!(published.len(), 1);
    let (match_id, costs) = &published[0];
    assert_eq!(*match_id, 10);

    // Golden table: base * participation weight.
    assert!((costs[&1] - 1.35 * 1.3).abs() < EPSILON);
    assert!((costs[&2] - 0.65 * 1.3).abs() < EPSILON);
    assert!((costs[&3] - 1.0).abs() < EPSILON);

    // Ranking property: above-average in every game > fewer games at
    // average > below-average in every game.
    assert!(costs[&1] > costs[&3]);
    assert!(costs[&3] > costs[&2]);

    // Third sweep: tournament is Done, nothing changes, nothing republished.
    let before = serde_json::to_value(store.get(1).unwrap()).unwrap();
    worker.sweep().await.unwrap();
    let after = serde_json::to_value(store.get(1).unwrap()).unwrap();
    assert_eq!(before, after);
    assert_eq!(sink.published().len(), 1);
}

#[tokio::test]
async fn test_invalid_scores_cascade_to_rejection() {
    let store = Arc::new(InMemoryStore::new());
    let data_source = Arc::new(StaticDataSource::new());
    let sink = Arc::new(RecordingSink::new());

    let mut tournament = Tournament::new(2, "Relax Cup", "RC", Ruleset::Osu);
    tournament.matches.push(Match::new(20, Ruleset::Osu));
    store.insert(tournament);

    // Every score carries an invalid mod, so the games lose their valid
    // scores, the match loses its valid games, and the tournament has no
    // verified matches left.
    let mut raw = golden_raw_match();
    raw.name = "RC: (Alpha) vs (Beta)".to_string();
    for game in &mut raw.games {
        for score in &mut game.scores {
            score.mods = Mods::RELAX;
        }
    }
    data_source.seed(20, raw);

    let worker = PipelineWorker::new(
        store.clone(),
        data_source,
        sink.clone(),
        PipelineConfig::default(),
    );
    worker.sweep().await.unwrap();

    let tournament = store.get(2).unwrap();
    let m = &tournament.matches[0];
    assert_eq!(m.verification_status, VerificationStatus::PreRejected);
    for game in &m.games {
        assert_eq!(game.verification_status, VerificationStatus::PreRejected);
    }
    assert_eq!(
        tournament.verification_status,
        VerificationStatus::PreRejected
    );

    // Even after confirmation, nothing is priced or published.
    store.update(2, |t| t.confirm_pending());
    worker.sweep().await.unwrap();
    assert!(sink.published().is_empty());
    assert_eq!(store.get(2).unwrap().processing_status, ProcessingStatus::Done);
}
