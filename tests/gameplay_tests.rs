//! Whole-round gameplay tests on the landmarks game.
//!
//! These walk the engine through the canonical tap sequences: confirmed
//! matches, mismatches (which deliberately leave both cards face-up),
//! retracted picks, over-selection under deferred resolution, and the
//! game-over prompt data (score + share text).

use matchpairs::games::landmarks;
use matchpairs::rules::{MatchEngine, OutcomeKind};
use matchpairs::CardId;

fn id_of(engine: &MatchEngine, label: &str) -> CardId {
    engine
        .card_set()
        .iter()
        .find(|c| c.label == label)
        .unwrap_or_else(|| panic!("no card labeled {label}"))
        .id
}

/// Tapping a country and then its landmark confirms a match.
#[test]
fn test_match_removes_both_cards() {
    let mut engine = landmarks::engine(42).unwrap();
    let china = id_of(&engine, "china");
    let wall = id_of(&engine, "greatWall");

    engine.handle_selection(china).unwrap();
    let outcome = engine.handle_selection(wall).unwrap();

    assert_eq!(outcome.kind, OutcomeKind::Matched(china, wall));
    assert_eq!(outcome.score_delta, 1);
    assert_eq!(engine.score(), 1);
    assert!(engine.card_set().is_removed(china).unwrap());
    assert!(engine.card_set().is_removed(wall).unwrap());
    // Removed cards stay face-up for the fade-out render.
    assert!(engine.card_set().is_face_up(china).unwrap());
    assert!(engine.card_set().is_face_up(wall).unwrap());
}

/// A mismatched pair costs a point and deliberately stays face-up - only a
/// fresh tap turns either card back down.
#[test]
fn test_mismatch_leaves_cards_face_up() {
    let mut engine = landmarks::engine(42).unwrap();
    let china = id_of(&engine, "china");
    let tower = id_of(&engine, "eiffelTower");

    engine.handle_selection(china).unwrap();
    let outcome = engine.handle_selection(tower).unwrap();

    assert_eq!(outcome.kind, OutcomeKind::Mismatched(china, tower));
    assert_eq!(engine.score(), -1);
    assert!(engine.card_set().is_face_up(china).unwrap());
    assert!(engine.card_set().is_face_up(tower).unwrap());
    assert!(!engine.card_set().is_removed(china).unwrap());
    assert!(!engine.card_set().is_removed(tower).unwrap());

    // Both remain interactive: tapping one turns just that card down.
    let outcome = engine.handle_selection(tower).unwrap();
    assert_eq!(outcome.kind, OutcomeKind::Unflipped(tower));
    assert!(!engine.card_set().is_face_up(tower).unwrap());
    assert!(engine.card_set().is_face_up(china).unwrap());
    assert_eq!(engine.score(), -1);
}

/// Tapping the same card twice retracts the pick without penalty.
#[test]
fn test_double_tap_retracts_pick() {
    let mut engine = landmarks::engine(42).unwrap();
    let china = id_of(&engine, "china");

    engine.handle_selection(china).unwrap();
    let outcome = engine.handle_selection(china).unwrap();

    assert_eq!(outcome.kind, OutcomeKind::Unflipped(china));
    assert!(engine.selection().is_empty());
    assert_eq!(engine.score(), 0);
    assert!(!engine.card_set().is_face_up(china).unwrap());
}

/// Three taps landing before the caller resolves are penalized as one
/// over-selection event: every selected card turns face-down, one point off.
#[test]
fn test_over_selection_penalty() {
    let mut engine = landmarks::engine(42).unwrap();
    let china = id_of(&engine, "china");
    let france = id_of(&engine, "france");
    let india = id_of(&engine, "india");

    engine.select(china).unwrap();
    engine.select(france).unwrap();
    engine.select(india).unwrap();
    let outcome = engine.resolve_selection().unwrap().unwrap();

    match &outcome.kind {
        OutcomeKind::OverSelection(ids) => {
            assert_eq!(ids.as_slice(), &[china, france, india]);
        }
        other => panic!("expected over-selection, got {other:?}"),
    }
    assert_eq!(engine.score(), -1);
    assert!(engine.selection().is_empty());
    for id in [china, france, india] {
        assert!(!engine.card_set().is_face_up(id).unwrap());
    }
}

/// A full round mixing matches and mismatches ends exactly when the last
/// face-down card is resolved, with the score reflecting every event.
#[test]
fn test_full_round_to_game_over() {
    let mut engine = landmarks::engine(42).unwrap();
    assert_eq!(engine.card_set().len(), 12);

    let tap = |engine: &mut MatchEngine, label: &str| {
        let id = id_of(engine, label);
        engine.handle_selection(id).unwrap()
    };

    // Two matches, two mismatches.
    assert!(matches!(
        tap(&mut engine, "china").kind,
        OutcomeKind::Flipped(_)
    ));
    assert!(matches!(
        tap(&mut engine, "greatWall").kind,
        OutcomeKind::Matched(..)
    ));
    assert!(matches!(
        tap(&mut engine, "france").kind,
        OutcomeKind::Flipped(_)
    ));
    assert!(matches!(
        tap(&mut engine, "tajMahal").kind,
        OutcomeKind::Mismatched(..)
    ));
    assert!(matches!(
        tap(&mut engine, "india").kind,
        OutcomeKind::Flipped(_)
    ));
    assert!(matches!(
        tap(&mut engine, "italy").kind,
        OutcomeKind::Mismatched(..)
    ));
    tap(&mut engine, "turkey");
    assert!(matches!(
        tap(&mut engine, "ayasofya").kind,
        OutcomeKind::Matched(..)
    ));
    tap(&mut engine, "uae");
    let outcome = tap(&mut engine, "burjKhalifa");
    assert!(matches!(outcome.kind, OutcomeKind::Matched(..)));
    assert!(!outcome.game_over, "two cards are still face-down");

    // The final two face-down cards mismatch, flipping the last of the
    // twelve - the round ends on that resolution.
    tap(&mut engine, "eiffelTower");
    let outcome = tap(&mut engine, "pisaTower");
    assert!(matches!(outcome.kind, OutcomeKind::Mismatched(..)));
    assert!(outcome.game_over);
    assert!(engine.is_game_over());

    // 3 matches - 3 mismatches.
    assert_eq!(engine.score(), 0);
    assert_eq!(landmarks::share_text(engine.score()), "My Score is 0!");
}

/// "Play again" rebuilds the board from the same vocabulary with all state
/// cleared and a fresh shuffle.
#[test]
fn test_play_again_resets_round() {
    let mut engine = landmarks::engine(42).unwrap();
    let china = id_of(&engine, "china");
    let wall = id_of(&engine, "greatWall");

    engine.handle_selection(china).unwrap();
    engine.handle_selection(wall).unwrap();
    assert_eq!(engine.score(), 1);

    engine.new_game().unwrap();

    assert_eq!(engine.score(), 0);
    assert!(!engine.is_game_over());
    assert!(engine.selection().is_empty());
    assert_eq!(engine.card_set().len(), 12);
    assert!(engine.card_set().iter().all(|c| !c.face_up && !c.removed));

    // Same vocabulary, fresh cards.
    let labels_before: Vec<String> = landmarks::config()
        .left_labels
        .iter()
        .chain(landmarks::config().right_labels.iter())
        .cloned()
        .collect();
    for label in labels_before {
        assert!(engine.card_set().iter().any(|c| c.label == label));
    }
}

/// The snapshot carries everything needed to redraw mid-round, and survives
/// a serde round trip (rotation/resume).
#[test]
fn test_snapshot_supports_re_render() {
    let mut engine = landmarks::engine(42).unwrap();
    let china = id_of(&engine, "china");
    let wall = id_of(&engine, "greatWall");
    let france = id_of(&engine, "france");

    engine.handle_selection(china).unwrap();
    engine.handle_selection(wall).unwrap();
    engine.handle_selection(france).unwrap();

    let snapshot = engine.snapshot();
    assert_eq!(snapshot.score, 1);
    assert!(!snapshot.game_over);
    assert_eq!(snapshot.cards.iter().filter(|c| c.removed).count(), 2);
    assert_eq!(snapshot.cards.iter().filter(|c| c.face_up).count(), 3);

    let json = serde_json::to_string(&snapshot).unwrap();
    let restored: matchpairs::GameSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(snapshot, restored);
}
