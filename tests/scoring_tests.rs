//! Hit registration and scoring tests.
//!
//! These tests cover the closed/empty guards, the no-clamping policy
//! for non-unit amounts, leader recomputation, and win detection.

use cricket_darts::{
    GameEngine, HitOutcome, Notice, Phase, PlayerId, Target, HITS_TO_CLOSE, WIN_SCORE,
};

/// Look up a player's id by name.
fn id_of(engine: &GameEngine, name: &str) -> PlayerId {
    engine
        .players()
        .find(|p| p.name == name)
        .map(|p| p.id)
        .unwrap()
}

/// Register three +1 hits, closing a target.
fn close(engine: &mut GameEngine, id: PlayerId, target: Target) {
    for _ in 0..HITS_TO_CLOSE {
        assert_eq!(
            engine.register_hit(id, target, 1).unwrap(),
            HitOutcome::Applied
        );
    }
}

/// An applied hit moves the target cell and the score together.
#[test]
fn test_hit_moves_cell_and_score() {
    let mut engine = GameEngine::with_roster(["Ann"]);
    let ann = id_of(&engine, "Ann");

    engine.register_hit(ann, Target::Nineteen, 1).unwrap();
    engine.register_hit(ann, Target::Nineteen, 1).unwrap();
    engine.register_hit(ann, Target::Bullseye, 1).unwrap();

    let player = engine.state().player(ann).unwrap();
    assert_eq!(player.hits(Target::Nineteen), 2);
    assert_eq!(player.hits(Target::Bullseye), 1);
    assert_eq!(player.score, 3);
}

/// The fourth positive tap on a closed target is a no-op: no cell
/// movement, no score, no notice.
#[test]
fn test_fourth_tap_on_closed_target() {
    let mut engine = GameEngine::with_roster(["Ann"]);
    let ann = id_of(&engine, "Ann");
    close(&mut engine, ann, Target::Twenty);
    let before = engine.snapshot();

    let outcome = engine.register_hit(ann, Target::Twenty, 1).unwrap();

    assert_eq!(outcome, HitOutcome::NoOp);
    assert_eq!(&before, engine.state());
}

/// Decrementing a target with no hits is a no-op under the same
/// contract.
#[test]
fn test_decrement_on_empty_target() {
    let mut engine = GameEngine::with_roster(["Ann"]);
    let ann = id_of(&engine, "Ann");
    let before = engine.snapshot();

    let outcome = engine.register_hit(ann, Target::Fifteen, -1).unwrap();

    assert_eq!(outcome, HitOutcome::NoOp);
    assert_eq!(&before, engine.state());
}

/// A decrement undoes an increment cell-for-cell and point-for-point.
#[test]
fn test_decrement_cancels_increment() {
    let mut engine = GameEngine::with_roster(["Ann"]);
    let ann = id_of(&engine, "Ann");

    engine.register_hit(ann, Target::Sixteen, 1).unwrap();
    engine.register_hit(ann, Target::Sixteen, -1).unwrap();

    let player = engine.state().player(ann).unwrap();
    assert_eq!(player.hits(Target::Sixteen), 0);
    assert_eq!(player.score, 0);
}

/// Guards never fire mid-registration: a +3 on a cell sitting at 2
/// lands at 5. Amounts are applied verbatim, not clamped at closed.
#[test]
fn test_non_unit_amount_overshoots_closed() {
    let mut engine = GameEngine::with_roster(["Ann"]);
    let ann = id_of(&engine, "Ann");
    engine.register_hit(ann, Target::Twenty, 1).unwrap();
    engine.register_hit(ann, Target::Twenty, 1).unwrap();

    let outcome = engine.register_hit(ann, Target::Twenty, 3).unwrap();

    assert_eq!(outcome, HitOutcome::Applied);
    let player = engine.state().player(ann).unwrap();
    assert_eq!(player.hits(Target::Twenty), 5);
    assert_eq!(player.score, 5);
    assert!(player.is_closed(Target::Twenty));
}

/// The empty guard only triggers at exactly zero: a -2 on a cell at 1
/// goes negative.
#[test]
fn test_non_unit_negative_goes_below_zero() {
    let mut engine = GameEngine::with_roster(["Ann"]);
    let ann = id_of(&engine, "Ann");
    engine.register_hit(ann, Target::Seventeen, 1).unwrap();

    let outcome = engine.register_hit(ann, Target::Seventeen, -2).unwrap();

    assert_eq!(outcome, HitOutcome::Applied);
    let player = engine.state().player(ann).unwrap();
    assert_eq!(player.hits(Target::Seventeen), -1);
    assert_eq!(player.score, -1);
}

/// An amount of zero passes both guards and counts as applied, which
/// recomputes the leader.
#[test]
fn test_zero_amount_is_applied() {
    let mut engine = GameEngine::with_roster(["Ann"]);
    let ann = id_of(&engine, "Ann");
    assert_eq!(engine.leader(), None);

    let outcome = engine.register_hit(ann, Target::Twenty, 0).unwrap();

    assert_eq!(outcome, HitOutcome::Applied);
    assert_eq!(engine.state().player(ann).unwrap().score, 0);
    assert_eq!(engine.leader(), Some(ann));
}

/// The leader is the first player in roster order with the strictly
/// highest score.
#[test]
fn test_leader_tracks_highest_score() {
    let mut engine = GameEngine::with_roster(["Ann", "Ben"]);
    let ann = id_of(&engine, "Ann");
    let ben = id_of(&engine, "Ben");

    engine.register_hit(ben, Target::Twenty, 1).unwrap();
    assert_eq!(engine.leader(), Some(ben));

    engine.register_hit(ann, Target::Twenty, 1).unwrap();
    engine.register_hit(ann, Target::Nineteen, 1).unwrap();
    assert_eq!(engine.leader(), Some(ann));
}

/// On a tie the earlier-inserted player takes the lead, even when the
/// later player reached the score first.
#[test]
fn test_leader_tie_prefers_earlier_inserted() {
    let mut engine = GameEngine::with_roster(["Ann", "Ben"]);
    let ann = id_of(&engine, "Ann");
    let ben = id_of(&engine, "Ben");

    engine.register_hit(ben, Target::Twenty, 1).unwrap();
    engine.register_hit(ben, Target::Twenty, 1).unwrap();
    assert_eq!(engine.leader(), Some(ben));

    // Ann draws level at 2-2; the tie flips the lead to roster order.
    engine.register_hit(ann, Target::Nineteen, 1).unwrap();
    engine.register_hit(ann, Target::Nineteen, 1).unwrap();
    assert_eq!(engine.leader(), Some(ann));
}

/// Removing the leader leaves the leader id dangling until the next
/// hit recomputes it.
#[test]
fn test_leader_dangles_after_removal() {
    let mut engine = GameEngine::with_roster(["Ann", "Ben"]);
    let ann = id_of(&engine, "Ann");
    let ben = id_of(&engine, "Ben");
    engine.register_hit(ann, Target::Twenty, 1).unwrap();
    assert_eq!(engine.leader(), Some(ann));

    engine.remove_player(ann).unwrap();
    assert_eq!(engine.leader(), Some(ann)); // stale, no longer on roster
    assert!(engine.state().player(ann).is_none());

    engine.register_hit(ben, Target::Twenty, 1).unwrap();
    assert_eq!(engine.leader(), Some(ben));
}

/// Reaching exactly 21 declares the winner and ends the match.
#[test]
fn test_exact_win_score_declares_winner() {
    let mut engine = GameEngine::with_roster(["Ann", "Ben"]);
    let ann = id_of(&engine, "Ann");
    engine.start_game();

    for target in [
        Target::Twenty,
        Target::Nineteen,
        Target::Eighteen,
        Target::Seventeen,
        Target::Sixteen,
        Target::Fifteen,
    ] {
        close(&mut engine, ann, target);
    }
    assert_eq!(engine.state().player(ann).unwrap().score, 18);
    assert_eq!(engine.winner(), None);

    close(&mut engine, ann, Target::Bullseye);

    assert_eq!(engine.state().player(ann).unwrap().score, WIN_SCORE);
    assert_eq!(engine.winner(), Some(ann));
    assert_eq!(engine.phase(), Phase::Over);
}

/// Overshooting 21 with a non-unit amount declares nothing: the win
/// check is exact.
#[test]
fn test_overshoot_declares_no_winner() {
    let mut engine = GameEngine::with_roster(["Ann"]);
    let ann = id_of(&engine, "Ann");
    engine.start_game();

    // 19 points: six closed targets plus one hit on the bull.
    for target in [
        Target::Twenty,
        Target::Nineteen,
        Target::Eighteen,
        Target::Seventeen,
        Target::Sixteen,
        Target::Fifteen,
    ] {
        close(&mut engine, ann, target);
    }
    engine.register_hit(ann, Target::Bullseye, 1).unwrap();
    assert_eq!(engine.state().player(ann).unwrap().score, 19);

    engine.register_hit(ann, Target::Bullseye, 3).unwrap();

    assert_eq!(engine.state().player(ann).unwrap().score, 22);
    assert_eq!(engine.winner(), None);
    assert_eq!(engine.phase(), Phase::On);
}

/// Hit registration never touches the notice, in any of its paths.
#[test]
fn test_hits_leave_notice_alone() {
    let mut engine = GameEngine::with_roster(["Ann"]);
    let ann = id_of(&engine, "Ann");
    engine.add_player("ann"); // plant a notice
    let planted = Notice::NameTaken { name: "ann".to_string() };
    assert_eq!(engine.notice(), Some(&planted));

    engine.register_hit(ann, Target::Twenty, 1).unwrap(); // applied
    assert_eq!(engine.notice(), Some(&planted));

    close(&mut engine, ann, Target::Nineteen);
    engine.register_hit(ann, Target::Nineteen, 1).unwrap(); // closed no-op
    assert_eq!(engine.notice(), Some(&planted));

    engine.register_hit(ann, Target::Fifteen, -1).unwrap(); // empty no-op
    assert_eq!(engine.notice(), Some(&planted));
}

/// Hits keep applying after the match is over: there is no phase guard
/// on registration.
#[test]
fn test_hits_apply_after_match_over() {
    let mut engine = GameEngine::with_roster(["Ann", "Ben"]);
    let ann = id_of(&engine, "Ann");
    let ben = id_of(&engine, "Ben");
    engine.start_game();

    for target in Target::ALL {
        close(&mut engine, ann, target);
    }
    assert_eq!(engine.phase(), Phase::Over);
    assert_eq!(engine.winner(), Some(ann));

    let outcome = engine.register_hit(ben, Target::Twenty, 1).unwrap();
    assert_eq!(outcome, HitOutcome::Applied);
    assert_eq!(engine.state().player(ben).unwrap().score, 1);
}
