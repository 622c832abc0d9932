// tests/api_test.rs
//
// Внешний API: JSON-команды -> MatchController -> DTO для табло.

use winks_engine::api::{apply_command, build_game_view, ApiError, GameCommand};
use winks_engine::domain::{GameFormat, WinkColour, WinksGameSetup};
use winks_engine::engine::{FinishReason, PhaseKind};
use winks_engine::time_ctrl::{ManualClock, MatchController};

const MINUTE: u64 = 60 * 1000;

fn controller() -> (MatchController<ManualClock>, ManualClock) {
    let clock = ManualClock::new(0);
    let setup = WinksGameSetup::new(GameFormat::Pairs, 5 * MINUTE).with_label("Table 3");
    (MatchController::new(setup, WinkColour::Blue, clock.clone()), clock)
}

#[test]
fn commands_parse_from_json() {
    assert_eq!(
        GameCommand::from_json(r#"{"type":"start"}"#).unwrap(),
        GameCommand::Start
    );
    assert_eq!(
        GameCommand::from_json(r#"{"type":"time_expired","colour":"red"}"#).unwrap(),
        GameCommand::TimeExpired {
            colour: "red".into()
        }
    );
    assert_eq!(
        GameCommand::from_json(r#"{"type":"game_finished","reason":"pot_out"}"#).unwrap(),
        GameCommand::GameFinished {
            reason: FinishReason::PotOut
        }
    );
    assert!(matches!(
        GameCommand::from_json(r#"{"type":"undo"}"#),
        Err(ApiError::BadRequest(_))
    ));
}

#[test]
fn fresh_game_view() {
    let (ctl, _clock) = controller();
    let dto = build_game_view(ctl.state(), ctl.now_ms());

    assert_eq!(dto.phase, PhaseKind::Paused);
    assert_eq!(dto.phase_label, "Paused");
    assert_eq!(dto.format, GameFormat::Pairs);
    assert_eq!(dto.label.as_deref(), Some("Table 3"));
    assert_eq!(dto.squidge_off_winner, WinkColour::Blue);
    assert_eq!(dto.time_remaining_ms, Some(5 * MINUTE));
    assert_eq!(dto.display_remaining_ms, Some(5 * MINUTE));
    assert_eq!(dto.end_time_ms, None);
    assert_eq!(dto.current_round, None);
    assert_eq!(dto.colour_playing, None);
    assert_eq!(dto.finish_reason, None);
}

#[test]
fn full_flow_through_commands() {
    let (mut ctl, clock) = controller();

    let dto = apply_command(&mut ctl, GameCommand::Start).unwrap();
    assert_eq!(dto.phase, PhaseKind::MainTime);
    assert_eq!(dto.end_time_ms, Some(5 * MINUTE));

    clock.advance(5 * MINUTE);
    let dto = apply_command(
        &mut ctl,
        GameCommand::TimeExpired {
            colour: "red".into(),
        },
    )
    .unwrap();
    assert_eq!(dto.phase_label, "In rounds");
    assert_eq!(dto.current_round, Some(0));
    assert_eq!(dto.colour_playing, Some(WinkColour::Yellow));
    assert_eq!(dto.end_time_ms, None);

    let dto = apply_command(&mut ctl, GameCommand::ShotPlayed).unwrap();
    assert_eq!(dto.colour_playing, Some(WinkColour::Blue));

    let dto = apply_command(
        &mut ctl,
        GameCommand::GameFinished {
            reason: FinishReason::PotOut,
        },
    )
    .unwrap();
    assert_eq!(dto.phase, PhaseKind::Finished);
    assert_eq!(dto.finish_reason, Some(FinishReason::PotOut));
    assert_eq!(dto.colour_playing, None);
}

#[test]
fn unknown_colour_is_bad_request_and_does_not_mutate() {
    let (mut ctl, _clock) = controller();
    apply_command(&mut ctl, GameCommand::Start).unwrap();
    let before = ctl.state().clone();

    let err = apply_command(
        &mut ctl,
        GameCommand::TimeExpired {
            colour: "Red".into(),
        },
    )
    .unwrap_err();

    assert_eq!(err, ApiError::BadRequest("Unknown wink colour Red".into()));
    assert_eq!(ctl.state(), &before);
    assert_eq!(ctl.history().len(), 1);
}

#[test]
fn wrong_phase_is_illegal_state() {
    let (mut ctl, _clock) = controller();
    let err = apply_command(&mut ctl, GameCommand::Pause).unwrap_err();
    assert_eq!(
        err,
        ApiError::IllegalState("Illegal game state. Expected Main time but currently Paused".into())
    );
}

#[test]
fn dto_serializes_nulls_and_names() {
    let (mut ctl, clock) = controller();
    apply_command(&mut ctl, GameCommand::Start).unwrap();
    clock.advance(MINUTE);
    let dto = apply_command(&mut ctl, GameCommand::Pause).unwrap();

    let json = serde_json::to_value(&dto).unwrap();
    assert_eq!(json["phase"], "Paused");
    assert_eq!(json["squidge_off_winner"], "blue");
    assert_eq!(json["time_remaining_ms"], 4 * MINUTE);
    assert!(json["end_time_ms"].is_null());
    assert!(json["current_round"].is_null());
    assert!(json["colour_playing"].is_null());
}
