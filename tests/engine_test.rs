mod helpers;

use celi::ladder::RankTable;
use celi::progression::{apply_entry, Engine, EntryEvent, ProgressionState, Rejection};
use helpers::{boundary_table, d0, day, good_entry, state_seen_on};

fn celestial_engine() -> Engine {
    Engine::with_table(celi::ladder::lore::celestial_table().unwrap())
}

#[test]
fn decay_removes_one_point_per_day_past_grace() {
    // Five days later: penalty 5 - 1 = 4, then a fresh streak of 1 adds 5.
    let state = state_seen_on(d0(), 10, 3, 1);
    let applied = celestial_engine().apply_entry(&state, day(5), good_entry());

    assert_eq!(applied.outcome.decay_penalty, 4);
    assert_eq!(applied.outcome.points_delta, 5);
    assert_eq!(applied.state.points, 6 + 5);
}

#[test]
fn decay_applies_even_when_entry_is_rejected() {
    let state = state_seen_on(d0(), 10, 3, 1);
    let applied = celestial_engine().apply_entry(&state, day(5), "too short");
    assert!(!applied.outcome.awarded);
    assert_eq!(applied.state.points, 6);
    assert_eq!(applied.state.last_interaction_date, Some(day(5)));
}

#[test]
fn reward_never_reduces_points_after_decay() {
    let engine = celestial_engine();
    for gap in 0..12 {
        for points in [0, 3, 50, 400] {
            let state = state_seen_on(d0(), points, 2, 5);
            let applied = engine.apply_entry(&state, day(gap), good_entry());
            let penalty = engine.decay().penalty(gap);
            assert!(applied.state.points >= points.saturating_sub(penalty));
        }
    }
}

#[test]
fn one_reward_per_day() {
    let engine = celestial_engine();
    let first = engine.apply_entry(&ProgressionState::default(), d0(), good_entry());
    assert!(first.outcome.awarded);

    let second = engine.apply_entry(&first.state, d0(), good_entry());
    assert!(!second.outcome.awarded);
    assert_eq!(second.outcome.points_delta, 0);
    assert_eq!(second.outcome.event, EntryEvent::None);
    assert_eq!(second.outcome.rejection, Some(Rejection::AlreadyRewardedToday));
    assert_eq!(second.state, first.state);
}

#[test]
fn streak_grows_on_consecutive_days() {
    let engine = celestial_engine();
    let mut state = ProgressionState::default();
    let mut deltas = Vec::new();
    for n in 0..4 {
        let applied = engine.apply_entry(&state, day(n), good_entry());
        deltas.push(applied.outcome.points_delta);
        state = applied.state;
    }
    assert_eq!(deltas, [5, 10, 15, 20]);
    assert_eq!(state.current_streak, 4);
    assert_eq!(state.points, 50);
}

#[test]
fn streak_resets_after_missed_day() {
    let state = state_seen_on(d0(), 40, 6, 3);
    let applied = celestial_engine().apply_entry(&state, day(2), good_entry());
    assert_eq!(applied.outcome.streak_after, 1);
    assert_eq!(applied.state.current_streak, 1);
    assert_eq!(applied.outcome.points_delta, 5);
}

#[test]
fn constellation_every_seventh_entry() {
    let engine = celestial_engine();
    let mut state = ProgressionState::default();
    let mut bonus_entries = Vec::new();

    // Alternate-day entries keep the streak at 1 so every reward is 5 + bonus.
    for n in 1..=14 {
        let applied = engine.apply_entry(&state, day(n * 2), good_entry());
        assert!(applied.outcome.awarded);
        if applied.outcome.constellation_bonus {
            assert_eq!(applied.outcome.points_delta, 15);
            bonus_entries.push(n);
        } else {
            assert_eq!(applied.outcome.points_delta, 5);
        }
        state = applied.state;
    }
    assert_eq!(bonus_entries, [7, 14]);
}

#[test]
fn constellation_event_without_level_up() {
    let table = RankTable::new(vec![celi::ladder::RankDefinition::new("Observer", 1, 1000)]).unwrap();
    let engine = Engine::with_table(table);
    let state = state_seen_on(d0(), 0, 1, 6);
    let applied = engine.apply_entry(&state, day(1), good_entry());
    assert_eq!(applied.outcome.event, EntryEvent::ConstellationComplete);
    assert_eq!(applied.outcome.points_delta, 20);
}

#[test]
fn quality_gate_rejection_leaves_progress_alone() {
    let state = state_seen_on(d0(), 20, 2, 4);
    let applied = celestial_engine().apply_entry(&state, day(1), "  ten chars  ");

    assert!(!applied.outcome.awarded);
    assert_eq!(applied.outcome.points_delta, 0);
    assert_eq!(
        applied.outcome.rejection,
        Some(Rejection::BelowQualityThreshold {
            length: 9,
            required: 30
        })
    );
    assert_eq!(applied.state.current_streak, 2);
    assert_eq!(applied.state.entry_count, 4);
    assert_eq!(applied.state.points, 20);
    assert_eq!(applied.state.last_interaction_date, Some(day(1)));
    assert_eq!(applied.state.last_reward_date, Some(d0()));
}

#[test]
fn level_up_detected_across_boundary() {
    // Decay takes 5 down to 4 (Observer I), then a reward of 5 lands on Moonwalker II.
    let state = state_seen_on(d0(), 5, 0, 0);
    let applied = apply_entry(&state, day(2), good_entry(), &boundary_table());
    assert_eq!(applied.outcome.decay_penalty, 1);
    assert_eq!(applied.outcome.event, EntryEvent::LevelUp);
    assert_eq!(applied.state.points, 9);
    assert_eq!(applied.state.rank_index, 1);
}

#[test]
fn saturated_ladder_reports_daily_reward() {
    let state = state_seen_on(d0(), 1000, 1, 1);
    let applied = apply_entry(&state, day(1), good_entry(), &boundary_table());
    assert_eq!(applied.outcome.event, EntryEvent::DailyReward);
    assert_eq!(applied.state.rank_index, 1);
}

#[test]
fn brand_new_user_first_entry() {
    let applied = celestial_engine().apply_entry(&ProgressionState::default(), d0(), good_entry());
    assert_eq!(applied.outcome.decay_penalty, 0);
    assert_eq!(applied.outcome.streak_after, 1);
    assert_eq!(applied.outcome.event, EntryEvent::DailyReward);
    assert_eq!(celestial_engine().resolve(&applied.state).title, "Observer III");
}
