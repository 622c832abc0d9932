// tests/controller_tests.rs
//
// MatchController поверх ManualClock:
//  - start()/pause() без аргументов читают часы сами;
//  - is_time_up / remaining_ms для табло;
//  - история: ровно одно событие на успешную операцию, ноль на ошибку;
//  - финальный ход пишет ShotPlayed + Finished.

use winks_engine::domain::{GameFormat, WinkColour, WinksGameSetup};
use winks_engine::engine::{FinishReason, GameEventKind, GameStateError, PhaseKind};
use winks_engine::time_ctrl::{ManualClock, MatchController, SystemClock, TimeSource};

const MINUTE: u64 = 60 * 1000;
const T0: u64 = 1_000_000;

fn controller(winner: WinkColour) -> (MatchController<ManualClock>, ManualClock) {
    let clock = ManualClock::new(T0);
    let setup = WinksGameSetup::new(GameFormat::Singles, 5 * MINUTE);
    (MatchController::new(setup, winner, clock.clone()), clock)
}

#[test]
fn manual_clock_clones_share_time() {
    let clock = ManualClock::new(10);
    let other = clock.clone();
    clock.advance(5);
    assert_eq!(other.now_ms(), 15);
    other.set(100);
    assert_eq!(clock.now_ms(), 100);
}

#[test]
fn system_clock_is_after_2020() {
    // 2020-01-01T00:00:00Z
    assert!(SystemClock.now_ms() > 1_577_836_800_000);
}

#[test]
fn start_and_pause_read_the_clock() {
    let (mut ctl, clock) = controller(WinkColour::Blue);

    ctl.start().unwrap();
    assert_eq!(ctl.state().end_time_ms(), Some(T0 + 5 * MINUTE));

    clock.advance(2 * MINUTE);
    assert_eq!(ctl.remaining_ms(), Some(3 * MINUTE));

    ctl.pause().unwrap();
    assert_eq!(ctl.state().time_remaining_ms(), Some(3 * MINUTE));

    // На паузе табло стоит.
    clock.advance(10 * MINUTE);
    assert_eq!(ctl.remaining_ms(), Some(3 * MINUTE));
    assert!(!ctl.is_time_up());
}

#[test]
fn time_up_is_reported_but_not_acted_on() {
    let (mut ctl, clock) = controller(WinkColour::Blue);
    ctl.start().unwrap();

    clock.advance(5 * MINUTE);
    assert!(ctl.is_time_up());
    assert_eq!(ctl.remaining_ms(), Some(0));
    // Переход в раунды делает только драйвер.
    assert_eq!(ctl.state().phase_kind(), PhaseKind::MainTime);

    ctl.time_expired(WinkColour::Red).unwrap();
    assert_eq!(ctl.state().phase_kind(), PhaseKind::Rounds);
    assert_eq!(ctl.state().colour_playing(), Some(WinkColour::Yellow));
}

#[test]
fn history_records_each_successful_operation() {
    let (mut ctl, clock) = controller(WinkColour::Blue);

    ctl.start().unwrap();
    clock.advance(MINUTE);
    ctl.pause().unwrap();
    clock.advance(MINUTE);
    ctl.start().unwrap();
    clock.advance(4 * MINUTE);
    ctl.time_expired(WinkColour::Red).unwrap();
    ctl.shot_played().unwrap();

    let kinds: Vec<&GameEventKind> = ctl.history().events.iter().map(|e| &e.kind).collect();
    assert_eq!(
        kinds,
        vec![
            &GameEventKind::Started {
                end_time_ms: T0 + 5 * MINUTE
            },
            &GameEventKind::Paused {
                time_remaining_ms: 4 * MINUTE
            },
            &GameEventKind::Started {
                end_time_ms: T0 + 6 * MINUTE
            },
            &GameEventKind::TimeExpired {
                colour: WinkColour::Red
            },
            &GameEventKind::ShotPlayed {
                colour: WinkColour::Yellow,
                round_after: Some(0),
                next_colour: Some(WinkColour::Blue),
            },
        ]
    );

    let indexes: Vec<usize> = ctl.history().events.iter().map(|e| e.index).collect();
    assert_eq!(indexes, vec![0, 1, 2, 3, 4]);
    assert_eq!(ctl.history().events[1].at_ms, T0 + MINUTE);
    assert_eq!(ctl.history().shots_in_rounds(), 1);
}

#[test]
fn rejected_operations_leave_no_trace() {
    let (mut ctl, _clock) = controller(WinkColour::Blue);

    let err = ctl.pause().unwrap_err();
    assert_eq!(
        err,
        GameStateError::IllegalState {
            expected: PhaseKind::MainTime,
            actual: PhaseKind::Paused,
        }
    );
    assert!(ctl.shot_played().is_err());
    assert!(ctl.time_expired(WinkColour::Green).is_err());
    assert!(ctl.history().is_empty());

    ctl.start().unwrap();
    assert!(ctl.start().is_err());
    assert_eq!(ctl.history().len(), 1);
}

#[test]
fn final_shot_records_finish() {
    let (mut ctl, _clock) = controller(WinkColour::Yellow);
    ctl.start().unwrap();
    ctl.time_expired(WinkColour::Yellow).unwrap();

    while !ctl.state().is_finished() {
        ctl.shot_played().unwrap();
    }

    let events = &ctl.history().events;
    let n = events.len();
    assert_eq!(
        events[n - 2].kind,
        GameEventKind::ShotPlayed {
            colour: WinkColour::Yellow,
            round_after: None,
            next_colour: None,
        }
    );
    assert_eq!(
        events[n - 1].kind,
        GameEventKind::Finished {
            reason: FinishReason::RoundsComplete
        }
    );
    assert_eq!(ctl.history().shots_in_rounds(), 20);
}

#[test]
fn out_of_band_finish_from_main_time() {
    let (mut ctl, clock) = controller(WinkColour::Green);
    ctl.start().unwrap();
    clock.advance(MINUTE);

    ctl.game_finished(FinishReason::ThorpesRing);

    assert_eq!(ctl.state().finish_reason(), Some(FinishReason::ThorpesRing));
    assert_eq!(ctl.remaining_ms(), None);
    assert_eq!(
        ctl.history().last().map(|e| (e.at_ms, e.kind.clone())),
        Some((
            T0 + MINUTE,
            GameEventKind::Finished {
                reason: FinishReason::ThorpesRing
            }
        ))
    );
    assert!(ctl.start().is_err());
}

#[test]
fn system_clock_controller_starts() {
    let mut ctl = MatchController::with_system_clock(WinksGameSetup::singles(), WinkColour::Red);
    ctl.start().unwrap();
    assert_eq!(ctl.state().phase_kind(), PhaseKind::MainTime);
    assert!(!ctl.is_time_up());
}
